//! The deferred right fold and the forward walk derived operations are
//! built on.
//!
//! Unlike an ordinary right fold, the folded remainder is handed to the
//! combiner as an [`Accumulator`]: a memoized, not yet evaluated accessor.
//! A combiner that never forces it never touches the rest of the sequence,
//! which is what makes short-circuiting and infinite sources work.
//!
//! A combiner that does force it nests one call per element. Operations
//! that would always force it (`some`, `every`, `index_of`, `for_each` and
//! the skipping branch of `filter`) use [`walk`] instead, which visits the
//! nodes in the same order from a loop.

use std::ops::ControlFlow;
use std::rc::Rc;

use super::LazyArray;
use super::lazy_array::Node;
use crate::control::Lazy;

/// Type-erased combiner shared by every level of one fold.
pub(super) type Combiner<A, B> = dyn Fn(Accumulator<B>, Element<A>, usize) -> B;

/// Deferred access to the fold of the remaining elements.
///
/// Forcing it forces the upstream tail and folds the remainder with the
/// next index; the result is memoized and shared by all clones of this
/// accumulator, but not across separate `reduce_right` calls.
pub struct Accumulator<B> {
    cell: Rc<Lazy<B>>,
}

impl<B> Accumulator<B> {
    /// Folds the remainder (at most once) and returns the result.
    pub fn force(&self) -> &B {
        self.cell.force()
    }

    /// Returns whether the remainder has already been folded.
    pub fn is_forced(&self) -> bool {
        self.cell.is_initialized()
    }
}

impl<B: Clone> Accumulator<B> {
    /// Folds the remainder and returns an owned copy of the result.
    pub fn value(&self) -> B {
        self.force().clone()
    }
}

impl<B> Clone for Accumulator<B> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

/// The element at the current fold position.
///
/// Reading it forces the upstream head cell; handing the element to a new
/// node shares that cell rather than copying the value.
pub struct Element<A> {
    cell: Rc<Lazy<A>>,
}

impl<A> Element<A> {
    /// Returns the element, computing it first if necessary.
    pub fn get(&self) -> &A {
        self.cell.force()
    }

    pub(super) fn into_cell(self) -> Rc<Lazy<A>> {
        self.cell
    }
}

impl<A> Clone for Element<A> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

/// Folds `sequence` starting at `index`, calling the combiner once for the
/// first node and deferring everything after it.
pub(super) fn fold_right<A, B>(
    sequence: &LazyArray<A>,
    combiner: &Rc<Combiner<A, B>>,
    initial: B,
    index: usize,
) -> B
where
    A: 'static,
    B: 'static,
{
    let Some(node) = sequence.node() else {
        return initial;
    };

    let rest = Rc::clone(node);
    let next = Rc::clone(combiner);
    let accumulator = Accumulator {
        cell: Rc::new(Lazy::new(move || {
            fold_right(rest.tail.force(), &next, initial, index + 1)
        })),
    };
    let element = Element {
        cell: Rc::clone(&node.head),
    };

    combiner(accumulator, element, index)
}

/// Visits the nodes of `sequence` front to back in constant stack.
///
/// `step` sees each node with its index, starting at `first_index`. The tail
/// of a node is forced only after `step` continues past it, so a walk that
/// breaks early leaves the rest untouched. Returns the break value, or
/// `None` once the sequence is exhausted.
pub(super) fn walk<A, R, F>(sequence: &LazyArray<A>, first_index: usize, mut step: F) -> Option<R>
where
    F: FnMut(&Rc<Node<A>>, usize) -> ControlFlow<R>,
{
    let mut current = sequence;
    let mut index = first_index;
    while let Some(node) = current.node() {
        if let ControlFlow::Break(found) = step(node, index) {
            return Some(found);
        }
        index += 1;
        current = node.tail.force();
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_fold_over_empty_returns_initial() {
        let combiner: Rc<Combiner<i32, i32>> =
            Rc::new(|_: Accumulator<i32>, _: Element<i32>, _: usize| -> i32 { unreachable!() });
        assert_eq!(fold_right(&LazyArray::empty(), &combiner, 7, 0), 7);
    }

    #[rstest]
    fn test_accumulator_is_memoized_per_fold() {
        let folds = Rc::new(Cell::new(0));
        let counter = Rc::clone(&folds);
        let combiner: Rc<Combiner<i32, i32>> = Rc::new(
            move |accumulator: Accumulator<i32>, element: Element<i32>, _: usize| {
                counter.set(counter.get() + 1);
                let first = *accumulator.force();
                let second = *accumulator.clone().force();
                assert_eq!(first, second);
                element.get() + first
            },
        );

        let array = LazyArray::from(vec![1, 2, 3]);
        assert_eq!(fold_right(&array, &combiner, 0, 0), 6);
        assert_eq!(folds.get(), 3);
    }

    #[rstest]
    fn test_unforced_accumulator_leaves_tail_alone() {
        let array = LazyArray::from(vec![1, 2, 3]);
        let combiner: Rc<Combiner<i32, bool>> =
            Rc::new(|accumulator: Accumulator<bool>, _: Element<i32>, _: usize| {
                accumulator.is_forced()
            });

        assert!(!fold_right(&array, &combiner, true, 0));
        assert!(!array.is_tail_forced());
    }

    #[rstest]
    fn test_walk_stops_without_forcing_the_rest() {
        let array = LazyArray::from_iterator(0..);
        let found = walk(&array, 0, |node, index| {
            if *node.head.force() == 3 {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(())
            }
        });

        assert_eq!(found, Some(3));
        assert!(!array.tail().tail().tail().is_tail_forced());
    }

    #[rstest]
    fn test_walk_counts_from_first_index() {
        let array = LazyArray::from(vec!['a', 'b']);
        let mut seen = Vec::new();
        let found: Option<()> = walk(&array, 5, |node, index| {
            seen.push((*node.head.force(), index));
            ControlFlow::Continue(())
        });

        assert_eq!(found, None);
        assert_eq!(seen, vec![('a', 5), ('b', 6)]);
    }

    #[rstest]
    fn test_walk_runs_in_constant_stack() {
        let array = LazyArray::from_iterator(0..200_000_u32);
        let found = walk(&array, 0, |node, index| {
            if *node.head.force() == 199_999 {
                ControlFlow::Break(index)
            } else {
                ControlFlow::Continue(())
            }
        });
        assert_eq!(found, Some(199_999));
    }
}
