//! Optics over `Vec` sources.
//!
//! [`AtIndex`] is a positional lens into a `Vec` and [`VecTraversal`]
//! visits every element. `AtIndex` deliberately panics on an
//! out-of-bounds index: a lens promises its focus exists, and a `Vec`
//! cannot make that promise statically, so the check happens at access
//! time.

use std::marker::PhantomData;

use super::lens::Lens;
use super::traversal::Traversal;

/// A lens focusing the element at a fixed index of a `Vec`.
pub struct AtIndex<A> {
    index: usize,
    _marker: PhantomData<A>,
}

impl<A> AtIndex<A> {
    /// Creates a lens focusing the element at `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self {
            index,
            _marker: PhantomData,
        }
    }
}

impl<A> Lens<Vec<A>, Vec<A>, A, A> for AtIndex<A> {
    /// Retrieves the element at the index.
    ///
    /// # Panics
    ///
    /// Panics when the index is out of bounds for the source.
    fn view(&self, source: Vec<A>) -> A {
        let length = source.len();

        match source.into_iter().nth(self.index) {
            Some(element) => element,
            None => panic!("index {} out of bounds for length {length}", self.index),
        }
    }

    /// Rewrites the element at the index.
    ///
    /// # Panics
    ///
    /// Panics when the index is out of bounds for the source.
    fn over<F>(&self, lift: F, source: Vec<A>) -> Vec<A>
    where
        F: FnOnce(A) -> A,
    {
        assert!(
            self.index < source.len(),
            "index {} out of bounds for length {}",
            self.index,
            source.len()
        );

        let mut lift = Some(lift);

        source
            .into_iter()
            .enumerate()
            .map(|(position, element)| {
                if position == self.index {
                    match lift.take() {
                        Some(lift) => lift(element),
                        None => element,
                    }
                } else {
                    element
                }
            })
            .collect()
    }
}

impl<A> Clone for AtIndex<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for AtIndex<A> {}

/// A traversal over every element of a `Vec`, in index order.
pub struct VecTraversal<A, B> {
    _marker: PhantomData<(A, B)>,
}

impl<A, B> VecTraversal<A, B> {
    /// Creates a traversal over every element of a `Vec`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<A, B> Default for VecTraversal<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A, B> Traversal<Vec<A>, Vec<B>, A, B> for VecTraversal<A, B> {
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: Vec<A>) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R,
    {
        let mut accumulated = neutral;

        for element in source {
            accumulated = reducer(accumulated, map(element));
        }

        accumulated
    }

    fn over<F>(&self, lift: F, source: Vec<A>) -> Vec<B>
    where
        F: Fn(A) -> B,
    {
        source.into_iter().map(lift).collect()
    }
}

impl<A, B> Clone for VecTraversal<A, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A, B> Copy for VecTraversal<A, B> {}
