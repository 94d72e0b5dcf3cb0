//! Lens optics: read and rewrite exactly one focus.
//!
//! A Lens focuses a part that every source is guaranteed to carry, such
//! as a struct field. Its primitives are `view` and `over`; because the
//! focus always exists, every read-side operation of the weaker optics
//! can be answered from `view` alone.

use std::marker::PhantomData;

use crate::either::Either;

use super::affine_traversal::AffineTraversal;
use super::getter::Getter;
use super::traversal::Traversal;

/// A Lens focuses exactly one element of a source.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The modified focus type
pub trait Lens<S, T, A, B> {
    /// Retrieves the focus.
    fn view(&self, source: S) -> A;

    /// Applies `lift` to the focus and rebuilds the source around the
    /// result.
    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A) -> B;

    /// Replaces the focus with `value`.
    fn set(&self, value: B, source: S) -> T {
        self.over(|_| value, source)
    }

    /// Always retrieves the focus; the `Left` branch is unreachable for
    /// a lens.
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        Either::Right(self.view(source))
    }

    /// Always retrieves the focus.
    fn preview(&self, source: S) -> Option<A> {
        Some(self.view(source))
    }

    /// Maps the single focus to `R`.
    fn fold_map<R, Rd, M>(&self, _neutral: R, _reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R,
    {
        map(self.view(source))
    }

    /// Combines this lens with another one.
    fn focus<A2, B2, L2>(self, other: L2) -> ComposedLens<Self, L2, A, B>
    where
        Self: Sized,
        L2: Lens<A, B, A2, B2>,
    {
        ComposedLens::new(self, other)
    }

    /// Widens this lens to a read-only [`Getter`](super::Getter).
    fn to_getter(self) -> LensAsGetter<Self, T, B>
    where
        Self: Sized,
    {
        LensAsGetter::new(self)
    }

    /// Widens this lens to an [`AffineTraversal`] whose focus is always
    /// present.
    fn to_affine_traversal(self) -> LensAsAffineTraversal<Self>
    where
        Self: Sized,
    {
        LensAsAffineTraversal::new(self)
    }

    /// Widens this lens to a [`Traversal`] over exactly one element.
    fn to_traversal(self) -> LensAsTraversal<Self>
    where
        Self: Sized,
    {
        LensAsTraversal::new(self)
    }
}

/// A lens composed of two lenses.
pub struct ComposedLens<L1, L2, A, B> {
    first: L1,
    second: L2,
    _marker: PhantomData<(A, B)>,
}

impl<L1, L2, A, B> ComposedLens<L1, L2, A, B> {
    /// Creates a new `ComposedLens` from an outer and an inner lens.
    #[must_use]
    pub const fn new(first: L1, second: L2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, A2, B2, L1, L2> Lens<S, T, A2, B2> for ComposedLens<L1, L2, A, B>
where
    L1: Lens<S, T, A, B>,
    L2: Lens<A, B, A2, B2>,
{
    fn view(&self, source: S) -> A2 {
        self.second.view(self.first.view(source))
    }

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A2) -> B2,
    {
        self.first
            .over(|focus| self.second.over(lift, focus), source)
    }
}

impl<L1: Clone, L2: Clone, A, B> Clone for ComposedLens<L1, L2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// A lens widened to a read-only getter.
pub struct LensAsGetter<L, T, B> {
    lens: L,
    _marker: PhantomData<(T, B)>,
}

impl<L, T, B> LensAsGetter<L, T, B> {
    /// Creates a new `LensAsGetter` from a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self {
            lens,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, L> Getter<S, A> for LensAsGetter<L, T, B>
where
    L: Lens<S, T, A, B>,
{
    fn view(&self, source: S) -> A {
        self.lens.view(source)
    }
}

impl<L: Clone, T, B> Clone for LensAsGetter<L, T, B> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
            _marker: PhantomData,
        }
    }
}

/// A lens widened to an affine traversal whose focus is always present.
pub struct LensAsAffineTraversal<L> {
    lens: L,
}

impl<L> LensAsAffineTraversal<L> {
    /// Creates a new `LensAsAffineTraversal` from a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }
}

impl<S, T, A, B, L> AffineTraversal<S, T, A, B> for LensAsAffineTraversal<L>
where
    L: Lens<S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.lens.get_or_modify(source)
    }

    fn set(&self, value: B, source: S) -> T {
        self.lens.set(value, source)
    }

    fn preview(&self, source: S) -> Option<A> {
        self.lens.preview(source)
    }

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A) -> B,
        S: Clone,
    {
        self.lens.over(lift, source)
    }
}

impl<L: Clone> Clone for LensAsAffineTraversal<L> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
        }
    }
}

/// A lens widened to a traversal over exactly one element.
pub struct LensAsTraversal<L> {
    lens: L,
}

impl<L> LensAsTraversal<L> {
    /// Creates a new `LensAsTraversal` from a lens.
    #[must_use]
    pub const fn new(lens: L) -> Self {
        Self { lens }
    }
}

impl<S, T, A, B, L> Traversal<S, T, A, B> for LensAsTraversal<L>
where
    L: Lens<S, T, A, B>,
{
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R,
    {
        self.lens.fold_map(neutral, reducer, map, source)
    }

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: Fn(A) -> B,
    {
        self.lens.over(lift, source)
    }

    fn set(&self, value: B, source: S) -> T {
        self.lens.set(value, source)
    }
}

impl<L: Clone> Clone for LensAsTraversal<L> {
    fn clone(&self) -> Self {
        Self {
            lens: self.lens.clone(),
        }
    }
}

/// A lens built from a pair of closures.
pub struct FunctionLens<S, T, A, B, V, St> {
    view: V,
    set: St,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, V, St> FunctionLens<S, T, A, B, V, St>
where
    V: Fn(S) -> A,
    St: Fn(B, S) -> T,
{
    /// Creates a new `FunctionLens` from a view function and a set
    /// function.
    pub const fn new(view: V, set: St) -> Self {
        Self {
            view,
            set,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, V, St> Lens<S, T, A, B> for FunctionLens<S, T, A, B, V, St>
where
    S: Clone,
    V: Fn(S) -> A,
    St: Fn(B, S) -> T,
{
    fn view(&self, source: S) -> A {
        (self.view)(source)
    }

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A) -> B,
    {
        let focus = (self.view)(source.clone());
        (self.set)(lift(focus), source)
    }

    fn set(&self, value: B, source: S) -> T {
        (self.set)(value, source)
    }
}

impl<S, T, A, B, V: Clone, St: Clone> Clone for FunctionLens<S, T, A, B, V, St> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            set: self.set.clone(),
            _marker: PhantomData,
        }
    }
}

/// Creates a [`Lens`] focusing a named field of a struct.
///
/// # Examples
///
/// ```rust
/// use focal::lens;
/// use focal::optics::Lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let x = lens!(Point, x);
///
/// assert_eq!(x.view(Point { x: 1, y: 2 }), 1);
/// assert_eq!(x.set(10, Point { x: 1, y: 2 }), Point { x: 10, y: 2 });
/// ```
#[macro_export]
macro_rules! lens {
    ($struct_type:ident, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: $struct_type| source.$field,
            |value, mut source: $struct_type| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:ident < $($generic:tt),+ >, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: $struct_type<$($generic),+>| source.$field,
            |value, mut source: $struct_type<$($generic),+>| {
                source.$field = value;
                source
            },
        )
    };
    ($struct_type:path, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: $struct_type| source.$field,
            |value, mut source: $struct_type| {
                source.$field = value;
                source
            },
        )
    };
}
