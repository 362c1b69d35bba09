//! # lazy-array
//!
//! A persistent, lazily evaluated, memoizing sequence for Rust.
//!
//! ## Overview
//!
//! [`LazyArray`](sequence::LazyArray) is a cons-style linked sequence whose
//! head and tail are computed on demand and cached after their first
//! evaluation. Transformation pipelines (`map`, `filter`, `take_while`, ...)
//! never materialize intermediate collections, and every element is computed
//! at most once no matter how many views traverse it. Infinite sources are
//! supported as long as the caller bounds the traversal.
//!
//! - **Control**: [`Lazy`](control::Lazy), the single-assignment memo cell
//!   every deferred head and tail is stored in
//! - **Sequence**: [`LazyArray`](sequence::LazyArray), its
//!   [`Source`](sequence::Source) based factory and the deferred right fold
//!   all derived operations are built on
//!
//! ## Feature Flags
//!
//! - `control`: The memo cell and its error type
//! - `sequence`: The lazy sequence (requires `control`)
//! - `serde`: `Serialize`/`Deserialize` for `LazyArray`
//! - `tracing`: `trace`-level events for forcing and source pulls
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use lazy_array::prelude::*;
//!
//! let squares = LazyArray::from_iterator(1..).map(|value: &u64, _| value * value);
//! let small: Vec<u64> = squares.take_while(|square, _| *square < 50).to_vec();
//! assert_eq!(small, vec![1, 4, 9, 16, 25, 36, 49]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Emits a `trace`-level event under the `lazy_array` target when the
/// `tracing` feature is enabled, and nothing otherwise.
#[allow(unused_macros)]
macro_rules! trace_event {
    ($($argument:tt)+) => {
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(target: "lazy_array", $($argument)+);
        }
    };
}

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use lazy_array::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;
