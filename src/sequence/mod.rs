//! Lazily evaluated, memoizing sequences.
//!
//! - [`LazyArray`]: The persistent lazy sequence
//! - [`Source`], [`Step`]: The pull-based input a `LazyArray` is built from
//! - [`Accumulator`], [`Element`]: The arguments of a
//!   [`reduce_right`](LazyArray::reduce_right) combiner
//!
//! # Infinite Sequences
//!
//! Every operation that only needs a prefix (`head`, `tail`, `map`,
//! `take_while`, `take`, `some`, `every`, `prepend`) terminates on an
//! infinite sequence. `filter` terminates as long as another match exists.
//! `len`, `to_vec`, `for_each`, an unsuccessful `index_of` and reaching the
//! end of `append` do not.
//!
//! ```rust
//! use lazy_array::sequence::{LazyArray, Step, from_fn};
//!
//! let (mut previous, mut current) = (0_u64, 1_u64);
//! let fibonacci = LazyArray::from_source(from_fn(move || {
//!     let next = previous + current;
//!     previous = current;
//!     current = next;
//!     Step::Produced(current)
//! }));
//!
//! assert!(fibonacci.some(|value, _| value % 2 == 0));
//! assert_eq!(
//!     fibonacci.map(|value, _| value * 3).take_while(|value, _| *value < 100).to_vec(),
//!     vec![3, 6, 9, 15, 24, 39, 63],
//! );
//! ```

mod fold;
mod lazy_array;
mod source;

pub use fold::{Accumulator, Element};
pub use lazy_array::{LazyArray, LazyArrayIterator};
pub use source::{FnSource, IterSource, Source, Step, from_fn};
