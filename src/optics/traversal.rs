//! Traversal optics: read and rewrite every focus of a source.
//!
//! A Traversal reaches zero or more foci. It is both a
//! [`Fold`](super::Fold) (enumerate the foci) and a
//! [`Setter`](super::Setter) (rewrite every focus), and composing two
//! traversals visits the inner foci of every outer focus in order.

use std::marker::PhantomData;

use super::fold::Fold;
use super::setter::Setter;

/// A Traversal focuses zero or more elements of a source, and can both
/// enumerate and rewrite them.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The modified focus type
pub trait Traversal<S, T, A, B> {
    /// Maps every focus to `R` and reduces the results, in focus order,
    /// starting from the neutral element.
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R;

    /// Applies `lift` to every focus and rebuilds the source.
    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: Fn(A) -> B;

    /// Replaces every focus with the same value.
    fn set(&self, value: B, source: S) -> T
    where
        B: Clone,
    {
        self.over(|_| value.clone(), source)
    }

    /// Collects every focus into a `Vec`, in focus order.
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

    /// Combines this traversal with another one.
    ///
    /// The composition visits the inner foci of each outer focus before
    /// moving on to the next outer focus.
    fn focus<A2, B2, Tr2>(self, other: Tr2) -> ComposedTraversal<Self, Tr2, A, B>
    where
        Self: Sized,
        Tr2: Traversal<A, B, A2, B2>,
    {
        ComposedTraversal::new(self, other)
    }

    /// Widens this traversal to a read-only [`Fold`].
    fn to_fold(self) -> TraversalAsFold<Self, T, B>
    where
        Self: Sized,
    {
        TraversalAsFold::new(self)
    }

    /// Widens this traversal to a write-only [`Setter`].
    fn to_setter(self) -> TraversalAsSetter<Self>
    where
        Self: Sized,
    {
        TraversalAsSetter::new(self)
    }
}

/// A traversal composed of two traversals.
pub struct ComposedTraversal<Tr1, Tr2, A, B> {
    first: Tr1,
    second: Tr2,
    _marker: PhantomData<(A, B)>,
}

impl<Tr1, Tr2, A, B> ComposedTraversal<Tr1, Tr2, A, B> {
    /// Creates a new `ComposedTraversal` from an outer and an inner
    /// traversal.
    #[must_use]
    pub const fn new(first: Tr1, second: Tr2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, A2, B2, Tr1, Tr2> Traversal<S, T, A2, B2> for ComposedTraversal<Tr1, Tr2, A, B>
where
    Tr1: Traversal<S, T, A, B>,
    Tr2: Traversal<A, B, A2, B2>,
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

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: Fn(A2) -> B2,
    {
        self.first
            .over(|focus| self.second.over(&lift, focus), source)
    }
}

impl<Tr1: Clone, Tr2: Clone, A, B> Clone for ComposedTraversal<Tr1, Tr2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// A traversal widened to a read-only fold.
pub struct TraversalAsFold<Tr, T, B> {
    traversal: Tr,
    _marker: PhantomData<(T, B)>,
}

impl<Tr, T, B> TraversalAsFold<Tr, T, B> {
    /// Creates a new `TraversalAsFold` from a traversal.
    #[must_use]
    pub const fn new(traversal: Tr) -> Self {
        Self {
            traversal,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, Tr> Fold<S, A> for TraversalAsFold<Tr, T, B>
where
    Tr: Traversal<S, T, A, B>,
{
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R,
    {
        self.traversal.fold_map(neutral, reducer, map, source)
    }
}

impl<Tr: Clone, T, B> Clone for TraversalAsFold<Tr, T, B> {
    fn clone(&self) -> Self {
        Self {
            traversal: self.traversal.clone(),
            _marker: PhantomData,
        }
    }
}

/// A traversal widened to a write-only setter.
pub struct TraversalAsSetter<Tr> {
    traversal: Tr,
}

impl<Tr> TraversalAsSetter<Tr> {
    /// Creates a new `TraversalAsSetter` from a traversal.
    #[must_use]
    pub const fn new(traversal: Tr) -> Self {
        Self { traversal }
    }
}

impl<S, T, A, B, Tr> Setter<S, T, A, B> for TraversalAsSetter<Tr>
where
    Tr: Traversal<S, T, A, B>,
{
    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: Fn(A) -> B,
    {
        self.traversal.over(lift, source)
    }
}

impl<Tr: Clone> Clone for TraversalAsSetter<Tr> {
    fn clone(&self) -> Self {
        Self {
            traversal: self.traversal.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::sequence::VecTraversal;

    #[test]
    fn test_over_rewrites_every_focus() {
        let traversal = VecTraversal::<i32, i32>::new();
        assert_eq!(traversal.over(|n| n * 2, vec![1, 2, 3]), vec![2, 4, 6]);
        assert_eq!(traversal.over(|n| n * 2, Vec::new()), Vec::<i32>::new());
    }

    #[test]
    fn test_over_changes_focus_type() {
        let traversal = VecTraversal::<i32, String>::new();
        assert_eq!(
            traversal.over(|n| n.to_string(), vec![1, 2]),
            vec!["1".to_string(), "2".to_string()]
        );
    }

    #[test]
    fn test_set_replaces_every_focus() {
        let traversal = VecTraversal::<i32, i32>::new();
        assert_eq!(traversal.set(0, vec![1, 2, 3]), vec![0, 0, 0]);
    }

    #[test]
    fn test_to_list_of_preserves_order() {
        let traversal = VecTraversal::<i32, i32>::new();
        assert_eq!(traversal.to_list_of(vec![3, 1, 2]), vec![3, 1, 2]);
    }

    #[test]
    fn test_composed_traversal_visits_in_order() {
        let composed = VecTraversal::<Vec<i32>, Vec<i32>>::new().focus(VecTraversal::<i32, i32>::new());

        let source = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(composed.to_list_of(source.clone()), vec![1, 2, 3]);
        assert_eq!(
            composed.over(|n| n + 10, source),
            vec![vec![11, 12], vec![], vec![13]]
        );
    }

    #[test]
    fn test_fold_map_left_to_right() {
        let traversal = VecTraversal::<i32, i32>::new();
        let joined = traversal.fold_map(
            String::new(),
            |left, right| left + &right,
            |n| n.to_string(),
            vec![1, 2, 3],
        );
        assert_eq!(joined, "123");
    }
}
