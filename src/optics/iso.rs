//! Iso optics: lossless conversion between two representations.
//!
//! An Iso is a bijection packaged as an optic. It is simultaneously a
//! [`Lens`](super::Lens) (the focus always exists) and a
//! [`Prism`](super::Prism) (the focus always rebuilds the source), and
//! unlike every other optic it can be reversed.

use std::marker::PhantomData;

use crate::either::Either;

use super::lens::Lens;
use super::prism::Prism;

/// An Iso converts losslessly between a source and a focus.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The modified focus type
pub trait Iso<S, T, A, B> {
    /// Converts a source into its focus representation.
    fn view(&self, source: S) -> A;

    /// Converts a focus back into a source.
    fn review(&self, value: B) -> T;

    /// Applies `lift` on the focus side of the conversion.
    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A) -> B,
    {
        self.review(lift(self.view(source)))
    }

    /// Replaces the source wholesale; the old source is discarded.
    fn set(&self, value: B, _source: S) -> T {
        self.review(value)
    }

    /// Always retrieves the focus; the `Left` branch is unreachable for
    /// an iso.
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

    /// Combines this iso with another one.
    fn focus<A2, B2, I2>(self, other: I2) -> ComposedIso<Self, I2, A, B>
    where
        Self: Sized,
        I2: Iso<A, B, A2, B2>,
    {
        ComposedIso::new(self, other)
    }

    /// Swaps the two sides of the conversion.
    fn reverse(self) -> ReversedIso<Self>
    where
        Self: Sized,
    {
        ReversedIso::new(self)
    }

    /// Widens this iso to a [`Lens`], forgetting `review`.
    fn to_lens(self) -> IsoAsLens<Self>
    where
        Self: Sized,
    {
        IsoAsLens::new(self)
    }

    /// Widens this iso to a [`Prism`] that always matches.
    fn to_prism(self) -> IsoAsPrism<Self>
    where
        Self: Sized,
    {
        IsoAsPrism::new(self)
    }
}

/// An iso composed of two isos.
pub struct ComposedIso<I1, I2, A, B> {
    first: I1,
    second: I2,
    _marker: PhantomData<(A, B)>,
}

impl<I1, I2, A, B> ComposedIso<I1, I2, A, B> {
    /// Creates a new `ComposedIso` from an outer and an inner iso.
    #[must_use]
    pub const fn new(first: I1, second: I2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, A2, B2, I1, I2> Iso<S, T, A2, B2> for ComposedIso<I1, I2, A, B>
where
    I1: Iso<S, T, A, B>,
    I2: Iso<A, B, A2, B2>,
{
    fn view(&self, source: S) -> A2 {
        self.second.view(self.first.view(source))
    }

    fn review(&self, value: B2) -> T {
        self.first.review(self.second.review(value))
    }
}

impl<I1: Clone, I2: Clone, A, B> Clone for ComposedIso<I1, I2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// An iso with its two sides swapped.
pub struct ReversedIso<I> {
    iso: I,
}

impl<I> ReversedIso<I> {
    /// Creates a new `ReversedIso` from an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, T, A, B, I> Iso<B, A, T, S> for ReversedIso<I>
where
    I: Iso<S, T, A, B>,
{
    fn view(&self, source: B) -> T {
        self.iso.review(source)
    }

    fn review(&self, value: S) -> A {
        self.iso.view(value)
    }
}

impl<I: Clone> Clone for ReversedIso<I> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
        }
    }
}

/// An iso widened to a lens.
pub struct IsoAsLens<I> {
    iso: I,
}

impl<I> IsoAsLens<I> {
    /// Creates a new `IsoAsLens` from an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, T, A, B, I> Lens<S, T, A, B> for IsoAsLens<I>
where
    I: Iso<S, T, A, B>,
{
    fn view(&self, source: S) -> A {
        self.iso.view(source)
    }

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A) -> B,
    {
        self.iso.over(lift, source)
    }

    fn set(&self, value: B, source: S) -> T {
        self.iso.set(value, source)
    }
}

impl<I: Clone> Clone for IsoAsLens<I> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
        }
    }
}

/// An iso widened to a prism that always matches.
pub struct IsoAsPrism<I> {
    iso: I,
}

impl<I> IsoAsPrism<I> {
    /// Creates a new `IsoAsPrism` from an iso.
    #[must_use]
    pub const fn new(iso: I) -> Self {
        Self { iso }
    }
}

impl<S, T, A, B, I> Prism<S, T, A, B> for IsoAsPrism<I>
where
    I: Iso<S, T, A, B>,
{
    fn get_or_modify(&self, source: S) -> Either<T, A> {
        self.iso.get_or_modify(source)
    }

    fn review(&self, value: B) -> T {
        self.iso.review(value)
    }

    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: FnOnce(A) -> B,
    {
        self.iso.over(lift, source)
    }
}

impl<I: Clone> Clone for IsoAsPrism<I> {
    fn clone(&self) -> Self {
        Self {
            iso: self.iso.clone(),
        }
    }
}

/// An iso built from a pair of closures.
pub struct FunctionIso<S, T, A, B, V, Rv> {
    view: V,
    review: Rv,
    _marker: PhantomData<(S, T, A, B)>,
}

impl<S, T, A, B, V, Rv> FunctionIso<S, T, A, B, V, Rv>
where
    V: Fn(S) -> A,
    Rv: Fn(B) -> T,
{
    /// Creates a new `FunctionIso` from a view function and a review
    /// function.
    pub const fn new(view: V, review: Rv) -> Self {
        Self {
            view,
            review,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, V, Rv> Iso<S, T, A, B> for FunctionIso<S, T, A, B, V, Rv>
where
    V: Fn(S) -> A,
    Rv: Fn(B) -> T,
{
    fn view(&self, source: S) -> A {
        (self.view)(source)
    }

    fn review(&self, value: B) -> T {
        (self.review)(value)
    }
}

impl<S, T, A, B, V: Clone, Rv: Clone> Clone for FunctionIso<S, T, A, B, V, Rv> {
    fn clone(&self) -> Self {
        Self {
            view: self.view.clone(),
            review: self.review.clone(),
            _marker: PhantomData,
        }
    }
}

/// Creates an [`Iso`] from a pair of conversion functions.
///
/// # Examples
///
/// ```rust
/// use focal::iso;
/// use focal::optics::Iso;
///
/// let celsius_to_fahrenheit = iso!(
///     |celsius: f64| celsius * 9.0 / 5.0 + 32.0,
///     |fahrenheit: f64| (fahrenheit - 32.0) * 5.0 / 9.0
/// );
///
/// assert!((celsius_to_fahrenheit.view(100.0) - 212.0).abs() < f64::EPSILON);
/// assert!((celsius_to_fahrenheit.review(212.0) - 100.0).abs() < f64::EPSILON);
/// ```
#[macro_export]
macro_rules! iso {
    ($view:expr, $review:expr) => {
        $crate::optics::FunctionIso::new($view, $review)
    };
}
