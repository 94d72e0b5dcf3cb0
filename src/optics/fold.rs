//! Fold optics for reducing over zero or more foci.
//!
//! A Fold extracts some number of elements of type `A` from a container of
//! type `S` and reduces them. Unlike a [`Traversal`](super::Traversal),
//! there is no way to set or update the elements.
//!
//! # Examples
//!
//! ```
//! use focal::optics::{Fold, Traversal, VecTraversal};
//!
//! let each = VecTraversal::<i32, i32>::new();
//! let total = each.fold_map(0, |left, right| left + right, |n: i32| n, vec![1, 2, 3]);
//! assert_eq!(total, 6);
//! ```

use std::marker::PhantomData;

/// A Fold reduces the foci reachable from a source.
///
/// The reducer must be associative for composed folds to behave
/// predictably under reassociation; elements are visited in the natural
/// order of the underlying structure, left to right, seeded at the
/// neutral element.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
pub trait Fold<S, A> {
    /// Maps each focus to `R` and folds the results left to right.
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R;

    /// Folds the foci themselves, without mapping.
    fn fold<Rd>(&self, neutral: A, reducer: Rd, source: S) -> A
    where
        A: Clone,
        Rd: Fn(A, A) -> A,
    {
        self.fold_map(neutral, reducer, |focus| focus, source)
    }

    /// Collects every focus into a `Vec`, in traversal order.
    fn to_list_of(&self, source: S) -> Vec<A>
    where
        A: Clone,
    {
        self.fold_map(
            Vec::new(),
            |mut left, mut right| {
                left.append(&mut right);
                left
            },
            |focus| vec![focus],
            source,
        )
    }

    /// Combines this fold with another, focusing through both.
    fn focus<A2, F2>(self, other: F2) -> ComposedFold<Self, F2, A>
    where
        Self: Sized,
        F2: Fold<A, A2>,
    {
        ComposedFold::new(self, other)
    }
}

/// A fold composed of two folds.
///
/// Reduces over every inner focus of every outer focus, preserving the
/// outer-then-inner visiting order.
pub struct ComposedFold<F1, F2, A> {
    first: F1,
    second: F2,
    _marker: PhantomData<A>,
}

impl<F1, F2, A> ComposedFold<F1, F2, A> {
    /// Creates a new `ComposedFold` from an outer and an inner fold.
    #[must_use]
    pub const fn new(first: F1, second: F2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, A2, F1, F2> Fold<S, A2> for ComposedFold<F1, F2, A>
where
    F1: Fold<S, A>,
    F2: Fold<A, A2>,
{
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A2) -> R,
    {
        self.first.fold_map(
            neutral.clone(),
            &reducer,
            |focus| self.second.fold_map(neutral.clone(), &reducer, &map, focus),
            source,
        )
    }
}

impl<F1: Clone, F2: Clone, A> Clone for ComposedFold<F1, F2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F1: std::fmt::Debug, F2: std::fmt::Debug, A> std::fmt::Debug for ComposedFold<F1, F2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedFold")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::{Traversal, VecTraversal};

    #[test]
    fn test_fold_map_sums() {
        let each = VecTraversal::<i32, i32>::new().to_fold();
        let total = each.fold_map(0, |left, right| left + right, |n: i32| n * 10, vec![1, 2, 3]);
        assert_eq!(total, 60);
    }

    #[test]
    fn test_fold_without_map() {
        let each = VecTraversal::<i32, i32>::new().to_fold();
        let best = each.fold(i32::MIN, |left, right| left.max(right), vec![4, 9, 2]);
        assert_eq!(best, 9);
    }

    #[test]
    fn test_to_list_of_preserves_order() {
        let each = VecTraversal::<i32, i32>::new().to_fold();
        assert_eq!(each.to_list_of(vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn test_composed_fold_visits_inner_elements() {
        let outer = VecTraversal::<Vec<i32>, Vec<i32>>::new().to_fold();
        let inner = VecTraversal::<i32, i32>::new().to_fold();
        let composed = outer.focus(inner);

        let nested = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(composed.to_list_of(nested), vec![1, 2, 3]);
    }
}
