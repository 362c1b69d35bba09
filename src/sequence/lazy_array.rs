//! Persistent, lazily evaluated, memoizing sequence.
//!
//! This module provides [`LazyArray`], a cons-style sequence whose head and
//! tail are deferred computations that run at most once.
//!
//! # Overview
//!
//! - O(1) `prepend`, always unforced
//! - `head`/`tail` force one cell each and are O(1) after the first access
//!   (except on filtered sequences, see [`LazyArray::filter`])
//! - `map`, `take_while`, `take` and `some`/`every` are safe on infinite
//!   sequences
//! - `len`, `to_vec`, `for_each` and reaching the end of `append` force the
//!   whole chain
//!
//! # Examples
//!
//! ```rust
//! use lazy_array::sequence::LazyArray;
//!
//! let names = LazyArray::from(vec!["Mathew", "Mark", "Luke", "John"]);
//! let greetings = names.map(|name, index| format!("Hello, {name}: {index}"));
//!
//! assert_eq!(greetings.head().map(String::as_str), Some("Hello, Mathew: 0"));
//! assert_eq!(names.index_of(&"Luke"), Some(2));
//! ```
//!
//! # Structural Sharing
//!
//! Derived sequences hold closures over the upstream nodes instead of
//! copying them, so forcing an element through one view memoizes it for
//! every other view:
//!
//! ```text
//! source:   1 -> 2 -> <unforced>
//! doubled:  source.map(x * 2)      // shares the upstream cells
//! evens:    doubled.filter(...)    // forcing here forces `doubled` once
//! ```

use std::cell::{OnceCell, RefCell};
use std::fmt;
use std::ops::ControlFlow;
use std::rc::Rc;

use super::fold::{self, Accumulator, Combiner, Element};
use super::source::{self, IterSource, Source};
use crate::control::{ForceError, Lazy};

/// Internal node structure for the lazy sequence.
///
/// The head cell is reference counted on its own so that `filter`,
/// `take_while` and `append` can hand the very same cell to the nodes they
/// build.
pub(super) struct Node<A> {
    pub(super) head: Rc<Lazy<A>>,
    pub(super) tail: Lazy<LazyArray<A>>,
    /// Cached result of `len` for the sequence starting at this node.
    length: OnceCell<usize>,
}

impl<A> Drop for Node<A> {
    fn drop(&mut self) {
        // Unlink forced tails iteratively; a long evaluated chain would
        // otherwise overflow the stack through recursive drops.
        let mut next = self.tail.take();
        while let Some(LazyArray { node: Some(node) }) = next {
            next = Rc::try_unwrap(node)
                .ok()
                .and_then(|mut owned| owned.tail.take());
        }
    }
}

/// A persistent, lazily evaluated, memoizing sequence.
///
/// A `LazyArray` is either empty or a node holding a deferred head and a
/// deferred tail. Each is computed on first access and cached; cloning a
/// `LazyArray` clones a handle, never the elements.
///
/// # Time Complexity
///
/// | Operation   | Complexity                    |
/// |-------------|-------------------------------|
/// | `prepend`   | O(1)                          |
/// | `head`      | O(1) after the first access   |
/// | `tail`      | O(1) after the first access   |
/// | `map`       | O(1) until forced             |
/// | `len`       | O(n), cached per node         |
/// | `to_vec`    | O(n)                          |
///
/// # Examples
///
/// ```rust
/// use lazy_array::sequence::LazyArray;
///
/// let array = LazyArray::from(vec![0, 1, 2]);
/// assert_eq!(array.head(), Some(&0));
/// assert_eq!(array.tail().head(), Some(&1));
/// assert_eq!(array.tail().tail().head(), Some(&2));
/// assert!(array.tail().tail().tail().is_empty());
/// assert_eq!(array.len(), 3);
/// ```
pub struct LazyArray<A> {
    /// The first node, or `None` for the empty sequence.
    node: Option<Rc<Node<A>>>,
}

impl<A> LazyArray<A> {
    /// Creates the empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let empty: LazyArray<i32> = LazyArray::empty();
    /// assert!(empty.is_empty());
    /// assert_eq!(empty.len(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self { node: None }
    }

    /// Creates a sequence containing a single, already evaluated element.
    #[must_use]
    pub fn single(element: A) -> Self {
        Self::from_cells(
            Rc::new(Lazy::new_with_value(element)),
            Lazy::new_with_value(Self::empty()),
        )
    }

    pub(super) fn from_cells(head: Rc<Lazy<A>>, tail: Lazy<Self>) -> Self {
        Self {
            node: Some(Rc::new(Node {
                head,
                tail,
                length: OnceCell::new(),
            })),
        }
    }

    pub(super) const fn node(&self) -> Option<&Rc<Node<A>>> {
        self.node.as_ref()
    }

    /// Returns `true` if the sequence has no elements.
    ///
    /// Never forces anything.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.node.is_none()
    }

    /// Returns the first element, computing it on first access.
    ///
    /// Returns `None` for the empty sequence.
    ///
    /// # Panics
    ///
    /// Panics if the head cell is poisoned or is being forced re-entrantly;
    /// see [`try_head`](Self::try_head).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let array = LazyArray::from(vec![1, 2]);
    /// assert_eq!(array.head(), Some(&1));
    ///
    /// let empty: LazyArray<i32> = LazyArray::empty();
    /// assert_eq!(empty.head(), None);
    /// ```
    pub fn head(&self) -> Option<&A> {
        self.node.as_ref().map(|node| node.head.force())
    }

    /// Like [`head`](Self::head), reporting cell failures as errors.
    ///
    /// # Errors
    ///
    /// Returns the [`ForceError`] of the head cell.
    pub fn try_head(&self) -> Result<Option<&A>, ForceError> {
        self.node
            .as_ref()
            .map(|node| node.head.try_force())
            .transpose()
    }

    /// Returns the sequence without its first element, computing it on first
    /// access.
    ///
    /// The tail of the empty sequence is the empty sequence itself.
    ///
    /// # Panics
    ///
    /// Panics if the tail cell is poisoned or is being forced re-entrantly;
    /// see [`try_tail`](Self::try_tail).
    pub fn tail(&self) -> &Self {
        self.node.as_ref().map_or(self, |node| node.tail.force())
    }

    /// Like [`tail`](Self::tail), reporting cell failures as errors.
    ///
    /// # Errors
    ///
    /// Returns the [`ForceError`] of the tail cell.
    pub fn try_tail(&self) -> Result<&Self, ForceError> {
        match &self.node {
            None => Ok(self),
            Some(node) => node.tail.try_force(),
        }
    }

    /// Decomposes the sequence into its head and tail, forcing both.
    ///
    /// Returns `None` if the sequence is empty.
    pub fn uncons(&self) -> Option<(&A, &Self)> {
        self.node
            .as_ref()
            .map(|node| (node.head.force(), node.tail.force()))
    }

    /// Returns `true` if this is a node whose head has been computed.
    pub fn is_head_forced(&self) -> bool {
        self.node
            .as_ref()
            .is_some_and(|node| node.head.is_initialized())
    }

    /// Returns `true` if this is a node whose tail has been computed.
    pub fn is_tail_forced(&self) -> bool {
        self.node
            .as_ref()
            .is_some_and(|node| node.tail.is_initialized())
    }

    /// Returns `true` if both handles refer to the same node, or both are
    /// empty.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.node, &other.node) {
            (None, None) => true,
            (Some(left), Some(right)) => Rc::ptr_eq(left, right),
            _ => false,
        }
    }

    /// Returns the number of elements.
    ///
    /// Forces every tail (but no head) of the sequence and caches the result
    /// on this node. Never returns for an infinite sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let array = LazyArray::from(vec!['a', 'b', 'c']);
    /// assert_eq!(array.len(), 3);
    /// assert_eq!(array.tail().len(), 2);
    /// ```
    pub fn len(&self) -> usize {
        let Some(first) = &self.node else {
            return 0;
        };
        *first.length.get_or_init(|| {
            let mut length = 0;
            let mut current = self;
            while let Some(node) = &current.node {
                if let Some(known) = node.length.get() {
                    return length + known;
                }
                length += 1;
                current = node.tail.force();
            }
            length
        })
    }

    /// Returns an iterator over references to the elements.
    ///
    /// Each call to `next` forces at most one tail and one head.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let array = LazyArray::from(vec![1, 2, 3]);
    /// let collected: Vec<&i32> = array.iter().collect();
    /// assert_eq!(collected, vec![&1, &2, &3]);
    /// ```
    #[inline]
    pub const fn iter(&self) -> LazyArrayIterator<'_, A> {
        LazyArrayIterator {
            cursor: Cursor::At(self),
        }
    }

    /// Calls `function` with every element and its index, front to back.
    ///
    /// Forces the head and then the tail of each node in turn; never returns
    /// for an infinite sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let mut lines = Vec::new();
    /// LazyArray::from(vec!["Mathew", "Mark"]).for_each(|name, index| {
    ///     lines.push(format!("No {}: {name}", index + 1));
    /// });
    /// assert_eq!(lines, vec!["No 1: Mathew", "No 2: Mark"]);
    /// ```
    pub fn for_each<F>(&self, mut function: F)
    where
        F: FnMut(&A, usize),
    {
        let _: Option<()> = fold::walk(self, 0, |node, index| {
            function(node.head.force(), index);
            ControlFlow::Continue(())
        });
    }

    /// Returns `true` if `predicate` holds for any element.
    ///
    /// Stops at the first match, so it terminates on an infinite sequence
    /// that contains one. Runs in constant stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let names = LazyArray::from(vec!["Mathew", "Mark", "Luke", "John"]);
    /// let wanted = String::from("Luke");
    /// assert!(names.some(|name, _| *name == wanted));
    /// ```
    pub fn some<F>(&self, predicate: F) -> bool
    where
        F: Fn(&A, usize) -> bool,
    {
        fold::walk(self, 0, |node, index| {
            if predicate(node.head.force(), index) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .is_some()
    }

    /// Returns `true` if `predicate` holds for every element.
    ///
    /// Stops at the first failure; `true` for the empty sequence.
    pub fn every<F>(&self, predicate: F) -> bool
    where
        F: Fn(&A, usize) -> bool,
    {
        fold::walk(self, 0, |node, index| {
            if predicate(node.head.force(), index) {
                ControlFlow::Continue(())
            } else {
                ControlFlow::Break(())
            }
        })
        .is_none()
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// Returns `None` if there is none, which forces the whole sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let names = LazyArray::from(vec!["Mathew", "Mark", "Luke", "John"]);
    /// assert_eq!(names.index_of(&"Luke"), Some(2));
    /// assert_eq!(names.index_of(&"Absent"), None);
    /// ```
    pub fn index_of(&self, value: &A) -> Option<usize>
    where
        A: PartialEq,
    {
        fold::walk(self, 0, |node, index| {
            if node.head.force() == value {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(())
            }
        })
    }

    /// Collects the elements into a `Vec`.
    ///
    /// Never returns for an infinite sequence; bound it first with
    /// [`take`](Self::take) or [`take_while`](Self::take_while).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let array = LazyArray::from_iterator(0..);
    /// assert_eq!(array.take(3).to_vec(), vec![0, 1, 2]);
    /// ```
    #[must_use]
    pub fn to_vec(&self) -> Vec<A>
    where
        A: Clone,
    {
        let mut result = Vec::new();
        self.for_each(|element, _| result.push(element.clone()));
        result
    }

    /// Returns a new sequence with `element` in front of this one.
    ///
    /// O(1); the existing sequence becomes the tail without being forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let array = LazyArray::from(vec!["Mathew", "Mark"]);
    /// let extended = array.prepend("David");
    /// assert_eq!(extended.to_vec(), vec!["David", "Mathew", "Mark"]);
    /// assert!(extended.tail().ptr_eq(&array));
    /// ```
    #[must_use]
    pub fn prepend(&self, element: A) -> Self {
        Self::from_cells(
            Rc::new(Lazy::new_with_value(element)),
            Lazy::new_with_value(self.clone()),
        )
    }
}

impl<A: 'static> LazyArray<A> {
    /// Builds a sequence that pulls from `source` on demand.
    ///
    /// Exactly one step is pulled now, to find out whether the sequence is
    /// empty. Every later step is pulled only when the tail of the node
    /// before it is forced.
    pub fn from_source<S>(source: S) -> Self
    where
        S: Source<Item = A> + 'static,
    {
        source::pull(Rc::new(RefCell::new(source)))
    }

    /// Builds a sequence that pulls from an iterator on demand.
    ///
    /// Works with infinite iterators.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let naturals = LazyArray::from_iterator(1_u64..);
    /// assert!(naturals.some(|value, _| value % 7 == 0));
    /// ```
    pub fn from_iterator<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = A>,
        I::IntoIter: 'static,
    {
        Self::from_source(IterSource::new(iterable.into_iter()))
    }

    /// Folds the sequence from the right without forcing the remainder.
    ///
    /// `combiner` receives an [`Accumulator`] for the fold of everything
    /// after the current element, the current [`Element`] and its index. It
    /// is called once per element actually reached; a combiner that does not
    /// force the accumulator stops the traversal there. `initial` is the
    /// result for the empty remainder.
    ///
    /// Each forced accumulator runs the next combiner call on top of the
    /// current one, so a combiner that always forces it needs stack
    /// proportional to the length of the sequence. [`some`](Self::some),
    /// [`every`](Self::every), [`index_of`](Self::index_of) and
    /// [`filter`](Self::filter) do not have this limit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let array = LazyArray::from(vec![1, 2, 3]);
    /// let sum = array.reduce_right(
    ///     |accumulator, element, _| element.get() + accumulator.force(),
    ///     0,
    /// );
    /// assert_eq!(sum, 6);
    /// ```
    pub fn reduce_right<B, F>(&self, combiner: F, initial: B) -> B
    where
        B: 'static,
        F: Fn(Accumulator<B>, Element<A>, usize) -> B + 'static,
    {
        let combiner: Rc<Combiner<A, B>> = Rc::new(combiner);
        fold::fold_right(self, &combiner, initial, 0)
    }

    /// Returns a sequence of `function(element, index)` for every element.
    ///
    /// Nothing is computed until the result is forced, and each mapped
    /// element is computed at most once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let tripled = LazyArray::from_iterator(1..).map(|value: &u32, _| value * 3);
    /// assert_eq!(tripled.take(3).to_vec(), vec![3, 6, 9]);
    /// ```
    pub fn map<B, F>(&self, function: F) -> LazyArray<B>
    where
        B: 'static,
        F: Fn(&A, usize) -> B + 'static,
    {
        let function = Rc::new(function);
        self.reduce_right(
            move |accumulator: Accumulator<LazyArray<B>>, element: Element<A>, index| {
                let function = Rc::clone(&function);
                LazyArray::from_cells(
                    Rc::new(Lazy::new(move || function(element.get(), index))),
                    Lazy::new(move || accumulator.value()),
                )
            },
            LazyArray::empty(),
        )
    }

    /// Returns the elements for which `predicate` holds.
    ///
    /// Finding the first match (and, when a tail is forced, the next one)
    /// skips non-matching elements right away, so it is not O(1), and on an
    /// infinite sequence with no further match it never returns. Skipping
    /// runs in constant stack.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let evens = LazyArray::from_iterator(0..).filter(|value, _| value % 2 == 0);
    /// assert_eq!(evens.take(3).to_vec(), vec![0, 2, 4]);
    /// ```
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&A, usize) -> bool + 'static,
    {
        self.filter_from(&Rc::new(predicate), 0)
    }

    /// Builds the filtered sequence starting at this node, which sits at
    /// `first_index` of the unfiltered one.
    fn filter_from<F>(&self, predicate: &Rc<F>, first_index: usize) -> Self
    where
        F: Fn(&A, usize) -> bool + 'static,
    {
        fold::walk(self, first_index, |node, index| {
            if predicate(node.head.force(), index) {
                let rest = Rc::clone(node);
                let predicate = Rc::clone(predicate);
                ControlFlow::Break(Self::from_cells(
                    Rc::clone(&node.head),
                    Lazy::new(move || rest.tail.force().filter_from(&predicate, index + 1)),
                ))
            } else {
                trace_event!(index, "filter skipped element");
                ControlFlow::Continue(())
            }
        })
        .unwrap_or_default()
    }

    /// Returns the longest prefix whose elements satisfy `predicate`.
    ///
    /// Stops at the first failure without forcing anything after it.
    #[must_use]
    pub fn take_while<F>(&self, predicate: F) -> Self
    where
        F: Fn(&A, usize) -> bool + 'static,
    {
        self.reduce_right(
            move |accumulator: Accumulator<Self>, element: Element<A>, index| {
                if predicate(element.get(), index) {
                    Self::from_cells(element.into_cell(), Lazy::new(move || accumulator.value()))
                } else {
                    Self::empty()
                }
            },
            Self::empty(),
        )
    }

    /// Returns the first `count` elements.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        self.take_while(move |_, index| index < count)
    }

    /// Returns a new sequence with `element` after the last element.
    ///
    /// The nodes are rebuilt lazily around the upstream ones; the appended
    /// element is reached only once the upstream is exhausted, so it is
    /// never reached on an infinite sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_array::sequence::LazyArray;
    ///
    /// let array = LazyArray::from(vec!["Mathew", "Mark"]);
    /// assert_eq!(array.append("Paul").to_vec(), vec!["Mathew", "Mark", "Paul"]);
    /// ```
    #[must_use]
    pub fn append(&self, element: A) -> Self {
        self.reduce_right(
            |accumulator: Accumulator<Self>, current: Element<A>, _| {
                Self::from_cells(current.into_cell(), Lazy::new(move || accumulator.value()))
            },
            Self::single(element),
        )
    }
}

// =============================================================================
// Iterator Implementation
// =============================================================================

enum Cursor<'a, A> {
    /// The next element is the head of this sequence.
    At(&'a LazyArray<A>),
    /// The next element is the head of this node's (not yet forced) tail.
    After(&'a Node<A>),
}

/// An iterator over references to elements of a [`LazyArray`].
///
/// The tail of a node is forced only when the element after it is
/// requested.
pub struct LazyArrayIterator<'a, A> {
    cursor: Cursor<'a, A>,
}

impl<'a, A> Iterator for LazyArrayIterator<'a, A> {
    type Item = &'a A;

    fn next(&mut self) -> Option<Self::Item> {
        let current = match self.cursor {
            Cursor::At(sequence) => sequence,
            Cursor::After(node) => node.tail.force(),
        };
        match &current.node {
            None => {
                self.cursor = Cursor::At(current);
                None
            }
            Some(node) => {
                self.cursor = Cursor::After(&**node);
                Some(node.head.force())
            }
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<A> Clone for LazyArray<A> {
    fn clone(&self) -> Self {
        Self {
            node: self.node.clone(),
        }
    }
}

impl<A> Default for LazyArray<A> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<A: 'static> From<Vec<A>> for LazyArray<A> {
    fn from(elements: Vec<A>) -> Self {
        Self::from_iterator(elements)
    }
}

impl<'a, A> IntoIterator for &'a LazyArray<A> {
    type Item = &'a A;
    type IntoIter = LazyArrayIterator<'a, A>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Compares element-wise, forcing both sequences as far as they agree.
///
/// Never returns for two equal infinite sequences.
impl<A: PartialEq> PartialEq for LazyArray<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.iter().eq(other.iter())
    }
}

impl<A: Eq> Eq for LazyArray<A> {}

/// Shows the evaluated prefix only; never forces anything.
///
/// Unforced heads print as `<unforced>` and an unforced tail as `..`.
///
/// # Examples
///
/// ```rust
/// use lazy_array::sequence::LazyArray;
///
/// let array = LazyArray::from(vec![1, 2, 3]);
/// assert_eq!(format!("{array:?}"), "[1, ..]");
///
/// let _ = array.len();
/// assert_eq!(format!("{array:?}"), "[1, 2, 3]");
/// ```
impl<A: fmt::Debug> fmt::Debug for LazyArray<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = formatter.debug_list();
        let mut current = self;
        while let Some(node) = &current.node {
            match node.head.get() {
                Some(element) => list.entry(element),
                None => list.entry(&format_args!("<unforced>")),
            };
            match node.tail.get() {
                Some(next) => current = next,
                None => return list.entry(&format_args!("..")).finish(),
            }
        }
        list.finish()
    }
}

static_assertions::assert_not_impl_any!(LazyArray<i32>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

/// Serializes every element; forces the whole sequence.
#[cfg(feature = "serde")]
impl<A: serde::Serialize> serde::Serialize for LazyArray<A> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(None)?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct LazyArrayVisitor<A> {
    marker: std::marker::PhantomData<A>,
}

#[cfg(feature = "serde")]
impl<A> LazyArrayVisitor<A> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, A> serde::de::Visitor<'de> for LazyArrayVisitor<A>
where
    A: serde::Deserialize<'de> + 'static,
{
    type Value = LazyArray<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<S>(self, mut seq: S) -> Result<Self::Value, S::Error>
    where
        S: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        Ok(LazyArray::from(elements))
    }
}

/// Deserializes eagerly into an already materialized source.
#[cfg(feature = "serde")]
impl<'de, A> serde::Deserialize<'de> for LazyArray<A>
where
    A: serde::Deserialize<'de> + 'static,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LazyArrayVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_empty() {
        let array: LazyArray<i32> = LazyArray::empty();
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, "[]");
    }

    #[rstest]
    fn test_serialize_bounded_infinite_sequence() {
        let array = LazyArray::from_iterator(1..).take(3);
        let json = serde_json::to_string(&array).unwrap();
        assert_eq!(json, "[1,2,3]");
    }

    #[rstest]
    fn test_deserialize_multiple_elements() {
        let array: LazyArray<String> = serde_json::from_str(r#"["a","b"]"#).unwrap();
        assert_eq!(array.to_vec(), vec!["a".to_string(), "b".to_string()]);
    }
}
