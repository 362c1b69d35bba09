//! Control structures for deferred evaluation.
//!
//! - [`Lazy`]: A single-assignment cell that runs its initializer at most once
//! - [`ForceError`]: Why forcing a [`Lazy`] can fail
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
//! // "Computing..." is not printed yet
//!
//! let value = lazy.force();
//! // Now "Computing..." is printed and value is 42
//! assert_eq!(*value, 42);
//! ```

mod error;
mod lazy;

pub use error::ForceError;
pub use lazy::{Lazy, LazyState};
