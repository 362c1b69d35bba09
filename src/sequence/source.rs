//! Pull-based element sources and the factory that wraps them.
//!
//! A [`Source`] is asked for one [`Step`] at a time. The factory pulls a
//! single step to decide whether the sequence is empty, and defers every
//! later pull to the tail of the node it just built, so a source is never
//! advanced further than the elements that have actually been requested.

use std::cell::RefCell;
use std::rc::Rc;

use super::LazyArray;
use crate::control::Lazy;

/// The outcome of asking a [`Source`] for its next element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<A> {
    /// The source produced an element and may produce more.
    Produced(A),
    /// The source is finished. A generator-style source may hand back one
    /// trailing value together with the completion signal.
    Exhausted(Option<A>),
}

/// A stateful, single-pass supplier of elements.
///
/// `next_step` is never called again once it has returned
/// [`Step::Exhausted`].
///
/// # Examples
///
/// ```rust
/// use lazy_array::sequence::{LazyArray, Source, Step};
///
/// struct Countdown(u32);
///
/// impl Source for Countdown {
///     type Item = u32;
///
///     fn next_step(&mut self) -> Step<u32> {
///         match self.0 {
///             0 => Step::Exhausted(None),
///             remaining => {
///                 self.0 -= 1;
///                 Step::Produced(remaining)
///             }
///         }
///     }
/// }
///
/// let array = LazyArray::from_source(Countdown(3));
/// assert_eq!(array.to_vec(), vec![3, 2, 1]);
/// ```
pub trait Source {
    /// The element type produced by this source.
    type Item;

    /// Produces the next step of the source.
    fn next_step(&mut self) -> Step<Self::Item>;
}

/// A [`Source`] backed by an [`Iterator`]; exhaustion never carries a
/// trailing value.
#[derive(Debug, Clone)]
pub struct IterSource<I> {
    iterator: I,
}

impl<I> IterSource<I> {
    /// Wraps an iterator as a source.
    pub const fn new(iterator: I) -> Self {
        Self { iterator }
    }
}

impl<I: Iterator> Source for IterSource<I> {
    type Item = I::Item;

    fn next_step(&mut self) -> Step<Self::Item> {
        self.iterator
            .next()
            .map_or(Step::Exhausted(None), Step::Produced)
    }
}

/// A [`Source`] driven by a closure, created with [`from_fn`].
pub struct FnSource<F> {
    generator: F,
}

impl<A, F> Source for FnSource<F>
where
    F: FnMut() -> Step<A>,
{
    type Item = A;

    fn next_step(&mut self) -> Step<A> {
        (self.generator)()
    }
}

/// Creates a [`Source`] from a closure returning [`Step`]s.
///
/// This is the natural way to express generators whose last step carries a
/// value alongside the completion signal.
///
/// # Examples
///
/// ```rust
/// use lazy_array::sequence::{LazyArray, Step, from_fn};
///
/// let mut yielded = vec!["A", "B"].into_iter();
/// let array = LazyArray::from_source(from_fn(move || {
///     yielded.next().map_or(Step::Exhausted(Some("C")), Step::Produced)
/// }));
/// assert_eq!(array.to_vec(), vec!["A", "B", "C"]);
/// ```
pub fn from_fn<A, F>(generator: F) -> FnSource<F>
where
    F: FnMut() -> Step<A>,
{
    FnSource { generator }
}

/// Pulls exactly one step from `source` and builds the matching sequence.
pub(super) fn pull<S>(source: Rc<RefCell<S>>) -> LazyArray<S::Item>
where
    S: Source + 'static,
    S::Item: 'static,
{
    let step = source.borrow_mut().next_step();
    match step {
        Step::Exhausted(None) => {
            trace_event!("source exhausted");
            LazyArray::empty()
        }
        Step::Exhausted(Some(last)) => {
            trace_event!("source exhausted with a trailing value");
            LazyArray::single(last)
        }
        Step::Produced(element) => {
            trace_event!("pulled element from source");
            LazyArray::from_cells(
                Rc::new(Lazy::new_with_value(element)),
                Lazy::new(move || pull(source)),
            )
        }
    }
}
