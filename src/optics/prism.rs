//! Prism optics: match one case of a sum type and build it back.
//!
//! A Prism focuses the payload of a single variant. Its primitives are
//! `get_or_modify`, which either matches the variant or returns the
//! rebuilt source, and `review`, which constructs a source from a
//! payload. This makes a prism a [`Review`](super::Review) as well as an
//! [`AffineTraversal`](super::AffineTraversal).

use std::marker::PhantomData;

use crate::either::Either;

use super::affine_traversal::AffineTraversal;
use super::traversal::Traversal;

/// A Prism focuses the payload of one case of a sum type.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The modified focus type
pub trait Prism<S, T, A, B> {
    /// Matches the focused case, or returns the rebuilt source when the
    /// source is a different case.
    fn get_or_modify(&self, source: S) -> Either<T, A>;

    /// Constructs a source from a payload.
    fn review(&self, value: B) -> T;

    /// Retrieves the focus, or `None` when the source is a different
    /// case.
    fn preview(&self, source: S) -> Option<A> {
        self.get_or_modify(source).right()
    }

    /// Applies `lift` to the focus (if the case matches) and rebuilds
    /// the source.
    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A) -> B,
    {
        match self.get_or_modify(source) {
            Either::Left(modified) => modified,
            Either::Right(focus) => self.review(lift(focus)),
        }
    }

    /// Replaces the focus with `value` when the case matches.
    fn set(&self, value: B, source: S) -> T {
        self.over(|_| value, source)
    }

    /// Maps the focus to `R` when the case matches, or returns the
    /// neutral element when it does not. The reducer is never invoked;
    /// a prism has at most one focus.
    fn fold_map<R, Rd, M>(&self, neutral: R, _reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R,
    {
        self.get_or_modify(source).fold(|_| neutral, map)
    }

    /// Combines this prism with another one.
    fn focus<A2, B2, P2>(self, other: P2) -> ComposedPrism<Self, P2, A, B>
    where
        Self: Sized,
        P2: Prism<A, B, A2, B2>,
    {
        ComposedPrism::new(self, other)
    }

    /// Widens this prism to an [`AffineTraversal`], forgetting `review`.
    fn to_affine_traversal(self) -> PrismAsAffineTraversal<Self>
    where
        Self: Sized,
    {
        PrismAsAffineTraversal::new(self)
    }

    /// Widens this prism to a [`Traversal`] over zero or one elements.
    fn to_traversal(self) -> PrismAsTraversal<Self>
    where
        Self: Sized,
    {
        PrismAsTraversal::new(self)
    }
}

/// A prism composed of two prisms.
pub struct ComposedPrism<P1, P2, A, B> {
    first: P1,
    second: P2,
    _marker: PhantomData<(A, B)>,
}

impl<P1, P2, A, B> ComposedPrism<P1, P2, A, B> {
    /// Creates a new `ComposedPrism` from an outer and an inner prism.
    #[must_use]
    pub const fn new(first: P1, second: P2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, A2, B2, P1, P2> Prism<S, T, A2, B2> for ComposedPrism<P1, P2, A, B>
where
    S: Clone,
    P1: Prism<S, T, A, B>,
    P2: Prism<A, B, A2, B2>,
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

    fn review(&self, value: B2) -> T {
        self.first.review(self.second.review(value))
    }

    fn preview(&self, source: S) -> Option<A2> {
        self.first
            .preview(source)
            .and_then(|focus| self.second.preview(focus))
    }
}

impl<P1: Clone, P2: Clone, A, B> Clone for ComposedPrism<P1, P2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// A prism widened to an affine traversal.
pub struct PrismAsAffineTraversal<P> {
    prism: P,
}

impl<P> PrismAsAffineTraversal<P> {
    /// Creates a new `PrismAsAffineTraversal` from a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }
}

impl<S, T, A, B, P> AffineTraversal<S, T, A, B> for PrismAsAffineTraversal<P>
where
    P: Prism<S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.prism.get_or_modify(source)
    }

    fn set(&self, value: B, source: S) -> T {
        self.prism.set(value, source)
    }

    fn preview(&self, source: S) -> Option<A> {
        self.prism.preview(source)
    }

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A) -> B,
        S: Clone,
    {
        self.prism.over(lift, source)
    }
}

impl<P: Clone> Clone for PrismAsAffineTraversal<P> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
        }
    }
}

/// A prism widened to a traversal over zero or one elements.
pub struct PrismAsTraversal<P> {
    prism: P,
}

impl<P> PrismAsTraversal<P> {
    /// Creates a new `PrismAsTraversal` from a prism.
    #[must_use]
    pub const fn new(prism: P) -> Self {
        Self { prism }
    }
}

impl<S, T, A, B, P> Traversal<S, T, A, B> for PrismAsTraversal<P>
where
    P: Prism<S, T, A, B>,
{
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R,
    {
        self.prism.fold_map(neutral, reducer, map, source)
    }

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: Fn(A) -> B,
    {
        self.prism.over(lift, source)
    }

    fn set(&self, value: B, source: S) -> T {
        self.prism.set(value, source)
    }
}

impl<P: Clone> Clone for PrismAsTraversal<P> {
    fn clone(&self) -> Self {
        Self {
            prism: self.prism.clone(),
        }
    }
}

/// A prism built from a pair of closures.
pub struct FunctionPrism<S, T, A, B, G, Rv> {
    get_or_modify: G,
    review: Rv,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, G, Rv> FunctionPrism<S, T, A, B, G, Rv>
where
    G: Fn(S) -> Either<T, A>,
    Rv: Fn(B) -> T,
{
    /// Creates a new `FunctionPrism` from a match function and a review
    /// function.
    pub const fn new(get_or_modify: G, review: Rv) -> Self {
        Self {
            get_or_modify,
            review,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, G, Rv> Prism<S, T, A, B> for FunctionPrism<S, T, A, B, G, Rv>
where
    G: Fn(S) -> Either<T, A>,
    Rv: Fn(B) -> T,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        (self.get_or_modify)(source)
    }

    fn review(&self, value: B) -> T {
        (self.review)(value)
    }
}

impl<S, T, A, B, G: Clone, Rv: Clone> Clone for FunctionPrism<S, T, A, B, G, Rv> {
    fn clone(&self) -> Self {
        Self {
            get_or_modify: self.get_or_modify.clone(),
            review: self.review.clone(),
            _marker: PhantomData,
        }
    }
}

/// Creates a [`Prism`] focusing the payload of a single-payload enum
/// variant.
///
/// # Examples
///
/// ```rust
/// use focal::prism;
/// use focal::optics::Prism;
///
/// #[derive(Clone, PartialEq, Debug)]
/// enum Shape {
///     Circle(f64),
///     Square(f64),
/// }
///
/// let circle = prism!(Shape, Circle);
///
/// assert_eq!(circle.preview(Shape::Circle(1.5)), Some(1.5));
/// assert_eq!(circle.preview(Shape::Square(2.0)), None);
/// assert_eq!(circle.review(3.0), Shape::Circle(3.0));
/// ```
#[macro_export]
macro_rules! prism {
    ($enum_type:ident, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type| match source {
                $enum_type::$variant(value) => $crate::either::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::either::Either::Left(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:ident < $($generic:tt),+ >, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type<$($generic),+>| match source {
                $enum_type::$variant(value) => $crate::either::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::either::Either::Left(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
    ($enum_type:path, $variant:ident) => {
        $crate::optics::FunctionPrism::new(
            |source: $enum_type| match source {
                $enum_type::$variant(value) => $crate::either::Either::Right(value),
                #[allow(unreachable_patterns)]
                other => $crate::either::Either::Left(other),
            },
            |value| $enum_type::$variant(value),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug)]
    enum Shape {
        Circle(f64),
        Square(f64),
    }

    #[test]
    fn test_get_or_modify() {
        let circle = prism!(Shape, Circle);

        assert_eq!(
            circle.get_or_modify(Shape::Circle(1.5)),
            Either::Right(1.5)
        );
        assert_eq!(
            circle.get_or_modify(Shape::Square(2.0)),
            Either::Left(Shape::Square(2.0))
        );
    }

    #[test]
    fn test_review() {
        let circle = prism!(Shape, Circle);

        assert_eq!(circle.review(3.0), Shape::Circle(3.0));
    }

    #[test]
    fn test_over_leaves_other_cases_untouched() {
        let circle = prism!(Shape, Circle);

        assert_eq!(circle.over(|radius| radius * 2.0, Shape::Circle(1.5)), Shape::Circle(3.0));
        assert_eq!(circle.over(|radius| radius * 2.0, Shape::Square(2.0)), Shape::Square(2.0));
    }

    #[test]
    fn test_set() {
        let circle = prism!(Shape, Circle);

        assert_eq!(circle.set(9.0, Shape::Circle(1.5)), Shape::Circle(9.0));
        assert_eq!(circle.set(9.0, Shape::Square(2.0)), Shape::Square(2.0));
    }

    #[test]
    fn test_fold_map() {
        let circle = prism!(Shape, Circle);

        let hit = circle.fold_map(1.0, |left, right| left + right, |radius| radius, Shape::Circle(2.0));
        assert!((hit - 2.0).abs() < f64::EPSILON);

        let miss = circle.fold_map(1.0, |left, right| left + right, |radius| radius, Shape::Square(2.0));
        assert!((miss - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_composition() {
        #[derive(Clone, PartialEq, Debug)]
        enum Tree {
            Leaf(Shape),
            Empty,
        }

        let leaf = FunctionPrism::new(
            |source: Tree| match source {
                Tree::Leaf(shape) => Either::Right(shape),
                other => Either::Left(other),
            },
            Tree::Leaf,
        );
        let leaf_circle = leaf.focus(prism!(Shape, Circle));

        assert_eq!(leaf_circle.preview(Tree::Leaf(Shape::Circle(1.0))), Some(1.0));
        assert_eq!(leaf_circle.preview(Tree::Leaf(Shape::Square(1.0))), None);
        assert_eq!(leaf_circle.preview(Tree::Empty), None);
        assert_eq!(leaf_circle.review(4.0), Tree::Leaf(Shape::Circle(4.0)));
        assert_eq!(
            leaf_circle.get_or_modify(Tree::Leaf(Shape::Square(1.0))),
            Either::Left(Tree::Leaf(Shape::Square(1.0)))
        );
    }

    #[test]
    fn test_widening() {
        use crate::optics::affine_traversal::AffineTraversal;
        use crate::optics::traversal::Traversal;

        let affine = prism!(Shape, Circle).to_affine_traversal();
        assert_eq!(affine.preview(Shape::Circle(1.0)), Some(1.0));

        let traversal = prism!(Shape, Circle).to_traversal();
        assert_eq!(traversal.to_list_of(Shape::Circle(1.0)), vec![1.0]);
        assert_eq!(traversal.to_list_of(Shape::Square(1.0)), Vec::<f64>::new());
    }
}
