//! AffineTraversal optics: read and rewrite at most one focus.
//!
//! An AffineTraversal combines a partial getter with a setter over the
//! same focus. Its primitives are `get_or_modify`, which either yields
//! the focus or returns the (possibly rebuilt) source, and `set`. Both
//! [`Lens`](super::Lens) and [`Prism`](super::Prism) widen into it, so
//! it is the natural meet when a lens is composed with a prism.

use std::marker::PhantomData;

use crate::either::Either;

use super::affine_fold::AffineFold;
use super::traversal::Traversal;

/// An AffineTraversal focuses at most one element of a source and can
/// rewrite it in place.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The modified focus type
pub trait AffineTraversal<S, T, A, B> {
    /// Retrieves the focus, or the rebuilt source when the focus is
    /// absent.
    fn get_or_modify(&self, source: S) -> Either<T, A>;

    /// Replaces the focus with `value`, leaving sources without a focus
    /// rebuilt unchanged.
    fn set(&self, value: B, source: S) -> T;

    /// Retrieves the focus, or `None` when it is absent.
    fn preview(&self, source: S) -> Option<A> {
        self.get_or_modify(source).right()
    }

    /// Applies `lift` to the focus (if any) and rebuilds the source.
    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A) -> B,
        S: Clone,
    {
        match self.get_or_modify(source.clone()) {
            Either::Left(modified) => modified,
            Either::Right(focus) => self.set(lift(focus), source),
        }
    }

    /// Maps the focus (if any) to `R` and folds it into the neutral
    /// element.
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R,
    {
        match self.preview(source) {
            Some(focus) => reducer(neutral, map(focus)),
            None => neutral,
        }
    }

    /// Combines this affine traversal with another one.
    fn focus<A2, B2, At2>(self, other: At2) -> ComposedAffineTraversal<Self, At2, A, B>
    where
        Self: Sized,
        At2: AffineTraversal<A, B, A2, B2>,
    {
        ComposedAffineTraversal::new(self, other)
    }

    /// Widens this affine traversal to a [`Traversal`] over zero or one
    /// elements.
    fn to_traversal(self) -> AffineTraversalAsTraversal<Self, S>
    where
        Self: Sized,
    {
        AffineTraversalAsTraversal::new(self)
    }

    /// Widens this affine traversal to a read-only
    /// [`AffineFold`](super::AffineFold).
    fn to_affine_fold(self) -> AffineTraversalAsAffineFold<Self, T, B>
    where
        Self: Sized,
    {
        AffineTraversalAsAffineFold::new(self)
    }
}

/// An affine traversal composed of two affine traversals.
pub struct ComposedAffineTraversal<At1, At2, A, B> {
    first: At1,
    second: At2,
    _marker: PhantomData<(A, B)>,
}

impl<At1, At2, A, B> ComposedAffineTraversal<At1, At2, A, B> {
    /// Creates a new `ComposedAffineTraversal` from an outer and an inner
    /// affine traversal.
    #[must_use]
    pub const fn new(first: At1, second: At2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, A2, B2, At1, At2> AffineTraversal<S, T, A2, B2>
    for ComposedAffineTraversal<At1, At2, A, B>
where
    S: Clone,
    At1: AffineTraversal<S, T, A, B>,
    At2: AffineTraversal<A, B, A2, B2>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A2> {
        match self.first.get_or_modify(source.clone()) {
            Either::Left(modified) => Either::Left(modified),
            Either::Right(focus) => match self.second.get_or_modify(focus) {
                Either::Left(rebuilt) => Either::Left(self.first.set(rebuilt, source)),
                Either::Right(inner) => Either::Right(inner),
            },
        }
    }

    fn set(&self, value: B2, source: S) -> T {
        match self.first.get_or_modify(source.clone()) {
            Either::Left(modified) => modified,
            Either::Right(focus) => self.first.set(self.second.set(value, focus), source),
        }
    }

    fn preview(&self, source: S) -> Option<A2> {
        self.first
            .preview(source)
            .and_then(|focus| self.second.preview(focus))
    }
}

impl<At1: Clone, At2: Clone, A, B> Clone for ComposedAffineTraversal<At1, At2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// An affine traversal widened to a traversal over zero or one elements.
pub struct AffineTraversalAsTraversal<At, S> {
    affine_traversal: At,
    _marker: PhantomData<S>,
}

impl<At, S> AffineTraversalAsTraversal<At, S> {
    /// Creates a new `AffineTraversalAsTraversal` from an affine
    /// traversal.
    #[must_use]
    pub const fn new(affine_traversal: At) -> Self {
        Self {
            affine_traversal,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, At> Traversal<S, T, A, B> for AffineTraversalAsTraversal<At, S>
where
    S: Clone,
    At: AffineTraversal<S, T, A, B>,
{
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R,
    {
        self.affine_traversal.fold_map(neutral, reducer, map, source)
    }

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: Fn(A) -> B,
    {
        self.affine_traversal.over(lift, source)
    }

    fn set(&self, value: B, source: S) -> T {
        self.affine_traversal.set(value, source)
    }
}

impl<At: Clone, S> Clone for AffineTraversalAsTraversal<At, S> {
    fn clone(&self) -> Self {
        Self {
            affine_traversal: self.affine_traversal.clone(),
            _marker: PhantomData,
        }
    }
}

/// An affine traversal widened to a read-only affine fold.
pub struct AffineTraversalAsAffineFold<At, T, B> {
    affine_traversal: At,
    _marker: PhantomData<(T, B)>,
}

impl<At, T, B> AffineTraversalAsAffineFold<At, T, B> {
    /// Creates a new `AffineTraversalAsAffineFold` from an affine
    /// traversal.
    #[must_use]
    pub const fn new(affine_traversal: At) -> Self {
        Self {
            affine_traversal,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, At> AffineFold<S, A> for AffineTraversalAsAffineFold<At, T, B>
where
    At: AffineTraversal<S, T, A, B>,
{
    fn preview(&self, source: S) -> Option<A> {
        self.affine_traversal.preview(source)
    }
}

impl<At: Clone, T, B> Clone for AffineTraversalAsAffineFold<At, T, B> {
    fn clone(&self) -> Self {
        Self {
            affine_traversal: self.affine_traversal.clone(),
            _marker: PhantomData,
        }
    }
}
