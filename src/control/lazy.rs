//! Single-assignment deferred values with memoization.
//!
//! This module provides the `Lazy<T>` cell that every deferred head and
//! tail of a [`LazyArray`](crate::sequence::LazyArray) is stored in.
//! Values are computed only when needed and cached for subsequent accesses.
//!
//! # Examples
//!
//! ```rust
//! use lazy_array::control::Lazy;
//!
//! let lazy = Lazy::new(|| {
//!     println!("Computing...");
//!     42
//! });
//!
//! // No output yet - computation is deferred
//! println!("Created lazy value");
//!
//! // Now "Computing..." is printed
//! let value = lazy.force();
//! assert_eq!(*value, 42);
//!
//! // No recomputation - result is memoized
//! let value2 = lazy.force();
//! assert_eq!(*value2, 42);
//! ```

use std::cell::{Cell, OnceCell};
use std::fmt;

use super::ForceError;

type Initializer<T> = Box<dyn FnOnce() -> T>;

/// The evaluation phase of a [`Lazy`] value.
///
/// A cell moves from `Unforced` through `Forcing` to `Forced` exactly once.
/// If the initializer panics the cell ends in `Poisoned` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LazyState {
    /// The initializer has not run yet.
    Unforced,
    /// The initializer is currently running.
    Forcing,
    /// The value has been computed and stored.
    Forced,
    /// The initializer panicked; the value will never be available.
    Poisoned,
}

/// A lazily evaluated value with memoization.
///
/// `Lazy<T>` defers computation until the value is first accessed via
/// `force()`. Once computed, the value is stored and every later call to
/// `force()` returns a plain reference to it without recomputation.
///
/// The initializer is type-erased so that cells with different closures can
/// live side by side in the nodes of one sequence.
///
/// # Thread Safety
///
/// This type is NOT thread-safe. It is neither `Send` nor `Sync`.
///
/// # Examples
///
/// ## Memoization
///
/// ```rust
/// use lazy_array::control::Lazy;
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let call_count = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&call_count);
/// let lazy = Lazy::new(move || {
///     counter.set(counter.get() + 1);
///     42
/// });
///
/// assert_eq!(call_count.get(), 0); // Not called yet
///
/// let _ = lazy.force();
/// assert_eq!(call_count.get(), 1); // Called once
///
/// let _ = lazy.force();
/// assert_eq!(call_count.get(), 1); // Still only once - memoized
/// ```
pub struct Lazy<T> {
    value: OnceCell<T>,
    initializer: Cell<Option<Initializer<T>>>,
    state: Cell<LazyState>,
}

/// Marks the owning cell as poisoned if its initializer unwinds.
struct PoisonOnUnwind<'a> {
    state: &'a Cell<LazyState>,
}

impl Drop for PoisonOnUnwind<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.state.set(LazyState::Poisoned);
        }
    }
}

impl<T> Lazy<T> {
    /// Creates a new lazy value with the given initialization function.
    ///
    /// The function will not be called until `force()` is invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| {
    ///     println!("Initializing...");
    ///     42
    /// });
    /// assert!(!lazy.is_initialized());
    /// ```
    #[inline]
    pub fn new<F>(initializer: F) -> Self
    where
        F: FnOnce() -> T + 'static,
    {
        Self {
            value: OnceCell::new(),
            initializer: Cell::new(Some(Box::new(initializer))),
            state: Cell::new(LazyState::Unforced),
        }
    }

    /// Creates a new lazy value that is already initialized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::control::Lazy;
    ///
    /// let lazy = Lazy::new_with_value(42);
    /// assert!(lazy.is_initialized());
    /// ```
    #[inline]
    pub fn new_with_value(value: T) -> Self {
        Self {
            value: OnceCell::from(value),
            initializer: Cell::new(None),
            state: Cell::new(LazyState::Forced),
        }
    }

    /// Forces evaluation of the lazy value and returns a reference to it.
    ///
    /// # Panics
    ///
    /// - If the initialization function panics; the cell is poisoned and all
    ///   future calls to `force()` panic as well.
    /// - If called from inside the cell's own initializer.
    ///
    /// Use [`try_force`](Self::try_force) to observe these conditions as a
    /// [`ForceError`] instead.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 42);
    /// assert_eq!(*lazy.force(), 42);
    /// ```
    pub fn force(&self) -> &T {
        self.try_force().unwrap_or_else(|error| panic!("{error}"))
    }

    /// Forces evaluation, reporting re-entrant or poisoned cells as errors.
    ///
    /// A panic raised by the initializer itself still propagates to the
    /// caller; it is the *next* attempt that reports
    /// [`ForceError::Poisoned`].
    ///
    /// # Errors
    ///
    /// - [`ForceError::Reentrant`] if the initializer of this very cell is
    ///   currently running
    /// - [`ForceError::Poisoned`] if an earlier initializer run panicked
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| "ready");
    /// assert_eq!(lazy.try_force(), Ok(&"ready"));
    /// ```
    pub fn try_force(&self) -> Result<&T, ForceError> {
        if let Some(value) = self.value.get() {
            return Ok(value);
        }

        match self.state.get() {
            LazyState::Forcing => return Err(ForceError::Reentrant),
            LazyState::Poisoned => return Err(ForceError::Poisoned),
            LazyState::Unforced | LazyState::Forced => {}
        }

        let initializer = self.initializer.take().ok_or(ForceError::Poisoned)?;

        trace_event!("forcing deferred value");
        self.state.set(LazyState::Forcing);
        let guard = PoisonOnUnwind { state: &self.state };
        let value = initializer();
        drop(guard);
        self.state.set(LazyState::Forced);

        Ok(self.value.get_or_init(move || value))
    }

    /// Returns a reference to the value if it has been initialized.
    ///
    /// Unlike `force()`, this method never triggers initialization.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 42);
    /// assert!(lazy.get().is_none());
    ///
    /// let _ = lazy.force();
    /// assert_eq!(lazy.get(), Some(&42));
    /// ```
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.value.get()
    }

    /// Returns the current evaluation phase.
    #[inline]
    pub fn state(&self) -> LazyState {
        self.state.get()
    }

    /// Returns whether the value has been initialized.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        self.value.get().is_some()
    }

    /// Returns whether the lazy value has been poisoned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::control::Lazy;
    /// use std::panic::{catch_unwind, AssertUnwindSafe};
    ///
    /// let lazy: Lazy<i32> = Lazy::new(|| panic!("initialization failed"));
    ///
    /// let _ = catch_unwind(AssertUnwindSafe(|| *lazy.force()));
    ///
    /// assert!(lazy.is_poisoned());
    /// ```
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        self.state.get() == LazyState::Poisoned
    }

    /// Consumes the cell and returns the inner value, forcing it if needed.
    ///
    /// # Errors
    ///
    /// Returns [`ForceError::Poisoned`] if an earlier initializer run panicked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::control::Lazy;
    ///
    /// assert_eq!(Lazy::new(|| 42).into_inner(), Ok(42));
    /// assert_eq!(Lazy::new_with_value(7).into_inner(), Ok(7));
    /// ```
    pub fn into_inner(self) -> Result<T, ForceError> {
        let Self {
            value,
            initializer,
            state,
        } = self;
        if let Some(value) = value.into_inner() {
            return Ok(value);
        }
        match state.get() {
            LazyState::Poisoned => Err(ForceError::Poisoned),
            _ => initializer
                .into_inner()
                .map(|initializer| initializer())
                .ok_or(ForceError::Poisoned),
        }
    }

    /// Removes the stored value, leaving the cell without one.
    ///
    /// Used to unlink long chains iteratively when they are dropped.
    pub(crate) fn take(&mut self) -> Option<T> {
        self.value.take()
    }
}

impl<T: fmt::Debug> fmt::Debug for Lazy<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.value.get(), self.state.get()) {
            (Some(value), _) => formatter.debug_tuple("Lazy").field(value).finish(),
            (None, LazyState::Forcing) => formatter.debug_tuple("Lazy").field(&"<forcing>").finish(),
            (None, LazyState::Poisoned) => {
                formatter.debug_tuple("Lazy").field(&"<poisoned>").finish()
            }
            (None, _) => formatter.debug_tuple("Lazy").field(&"<uninit>").finish(),
        }
    }
}

static_assertions::assert_not_impl_any!(Lazy<i32>: Send, Sync);
