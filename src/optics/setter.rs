//! Setter optics for updating every focus of a structure.
//!
//! A Setter lifts a function of type `A -> B` over a function of type
//! `S -> T`, applying the function to every `A` contained in `S`. Setting
//! all foci to a single value is lifting a constant function.
//!
//! # Laws
//!
//! Every Setter must act as a lawful functor action:
//!
//! 1. `over(identity, source) == source`
//! 2. Lifting `f` after lifting `g` is lifting the composition of `f`
//!    after `g`.

use std::marker::PhantomData;

/// A Setter updates zero or more foci within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `T`: The modified source type
/// - `A`: The focus type
/// - `B`: The modified focus type
pub trait Setter<S, T, A, B> {
    /// Applies `lift` to every focus and rebuilds the source around the
    /// results.
    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: Fn(A) -> B;

    /// Replaces every focus with `value`.
    fn set(&self, value: B, source: S) -> T
    where
        B: Clone,
    {
        self.over(|_| value.clone(), source)
    }

    /// Combines this setter with another, updating the inner foci of
    /// every outer focus.
    fn focus<A2, B2, St2>(self, other: St2) -> ComposedSetter<Self, St2, A, B>
    where
        Self: Sized,
        St2: Setter<A, B, A2, B2>,
    {
        ComposedSetter::new(self, other)
    }
}

/// A setter composed of two setters.
///
/// `over` nests the lift: the outer setter rewrites each of its foci by
/// running the inner setter over it.
pub struct ComposedSetter<St1, St2, A, B> {
    first: St1,
    second: St2,
    _marker: PhantomData<(A, B)>,
}

impl<St1, St2, A, B> ComposedSetter<St1, St2, A, B> {
    /// Creates a new `ComposedSetter` from an outer and an inner setter.
    #[must_use]
    pub const fn new(first: St1, second: St2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, A2, B2, St1, St2> Setter<S, T, A2, B2> for ComposedSetter<St1, St2, A, B>
where
    St1: Setter<S, T, A, B>,
    St2: Setter<A, B, A2, B2>,
{
    fn over<F>(&self, lift: F, source: S) -> T
    where
        F: Fn(A2) -> B2,
    {
        self.first
            .over(|focus| self.second.over(&lift, focus), source)
    }
}

impl<St1: Clone, St2: Clone, A, B> Clone for ComposedSetter<St1, St2, A, B> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

impl<St1: std::fmt::Debug, St2: std::fmt::Debug, A, B> std::fmt::Debug
    for ComposedSetter<St1, St2, A, B>
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedSetter")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}
