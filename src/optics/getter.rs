//! Getter optics: total projections considered as optics.
//!
//! A Getter is simply a function `S -> A` considered as an optic, so any
//! closure of that shape is a [`Getter`] already:
//!
//! ```
//! use focal::optics::Getter;
//!
//! let length = |text: String| text.len();
//! assert_eq!(length.view("four".to_string()), 4);
//! ```

use std::marker::PhantomData;

use super::affine_fold::AffineFold;

/// A Getter projects exactly one always-present focus out of a source.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
pub trait Getter<S, A> {
    /// Views the value pointed to by this getter.
    fn view(&self, source: S) -> A;

    /// Combines this getter with another one.
    fn focus<A2, G2>(self, other: G2) -> ComposedGetter<Self, G2, A>
    where
        Self: Sized,
        G2: Getter<A, A2>,
    {
        ComposedGetter::new(self, other)
    }

    /// Widens this getter to an [`AffineFold`] whose focus is always
    /// present.
    fn to_affine_fold(self) -> GetterAsAffineFold<Self, S, A>
    where
        Self: Sized,
    {
        GetterAsAffineFold::new(self)
    }
}

impl<S, A, F> Getter<S, A> for F
where
    F: Fn(S) -> A,
{
    fn view(&self, source: S) -> A {
        self(source)
    }
}

/// A getter composed of two getters.
pub struct ComposedGetter<G1, G2, A> {
    first: G1,
    second: G2,
    _marker: PhantomData<A>,
}

impl<G1, G2, A> ComposedGetter<G1, G2, A> {
    /// Creates a new `ComposedGetter` from an outer and an inner getter.
    #[must_use]
    pub const fn new(first: G1, second: G2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, A2, G1, G2> Getter<S, A2> for ComposedGetter<G1, G2, A>
where
    G1: Getter<S, A>,
    G2: Getter<A, A2>,
{
    fn view(&self, source: S) -> A2 {
        self.second.view(self.first.view(source))
    }
}

impl<G1: Clone, G2: Clone, A> Clone for ComposedGetter<G1, G2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// A getter widened to an affine fold; `preview` always succeeds.
pub struct GetterAsAffineFold<G, S, A> {
    getter: G,
    _marker: PhantomData<(S, A)>,
}

impl<G, S, A> GetterAsAffineFold<G, S, A> {
    /// Creates a new `GetterAsAffineFold` from a getter.
    #[must_use]
    pub const fn new(getter: G) -> Self {
        Self {
            getter,
            _marker: PhantomData,
        }
    }
}

impl<G, S, A> AffineFold<S, A> for GetterAsAffineFold<G, S, A>
where
    G: Getter<S, A>,
{
    fn preview(&self, source: S) -> Option<A> {
        Some(self.getter.view(source))
    }
}

impl<G: Clone, S, A> Clone for GetterAsAffineFold<G, S, A> {
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            _marker: PhantomData,
        }
    }
}
