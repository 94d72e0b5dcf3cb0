//! AffineFold optics: read-only access to at most one focus.
//!
//! An AffineFold is a [`Fold`](super::Fold) that reaches at most one
//! element, or a [`Getter`](super::Getter) whose projection may be
//! partial. Its primitive is `preview`, a total function returning `None`
//! when the focus is absent.

use std::marker::PhantomData;

use super::fold::Fold;

/// An AffineFold previews at most one focus.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The focus type
pub trait AffineFold<S, A> {
    /// Retrieves the focus, or `None` when it is absent.
    fn preview(&self, source: S) -> Option<A>;

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

    /// Combines this affine fold with another one.
    ///
    /// The composition short-circuits: when the outer focus is absent the
    /// inner fold is never consulted.
    fn focus<A2, Af2>(self, other: Af2) -> ComposedAffineFold<Self, Af2, A>
    where
        Self: Sized,
        Af2: AffineFold<A, A2>,
    {
        ComposedAffineFold::new(self, other)
    }

    /// Widens this affine fold to a [`Fold`] over zero or one elements.
    fn to_fold(self) -> AffineFoldAsFold<Self, S, A>
    where
        Self: Sized,
    {
        AffineFoldAsFold::new(self)
    }
}

/// An affine fold composed of two affine folds.
pub struct ComposedAffineFold<Af1, Af2, A> {
    first: Af1,
    second: Af2,
    _marker: PhantomData<A>,
}

impl<Af1, Af2, A> ComposedAffineFold<Af1, Af2, A> {
    /// Creates a new `ComposedAffineFold` from an outer and an inner
    /// affine fold.
    #[must_use]
    pub const fn new(first: Af1, second: Af2) -> Self {
        Self {
            first,
            second,
            _marker: PhantomData,
        }
    }
}

impl<S, A, A2, Af1, Af2> AffineFold<S, A2> for ComposedAffineFold<Af1, Af2, A>
where
    Af1: AffineFold<S, A>,
    Af2: AffineFold<A, A2>,
{
    fn preview(&self, source: S) -> Option<A2> {
        self.first
            .preview(source)
            .and_then(|focus| self.second.preview(focus))
    }
}

impl<Af1: Clone, Af2: Clone, A> Clone for ComposedAffineFold<Af1, Af2, A> {
    fn clone(&self) -> Self {
        Self {
            first: self.first.clone(),
            second: self.second.clone(),
            _marker: PhantomData,
        }
    }
}

/// An affine fold widened to a fold over zero or one elements.
pub struct AffineFoldAsFold<Af, S, A> {
    affine_fold: Af,
    _marker: PhantomData<(S, A)>,
}

impl<Af, S, A> AffineFoldAsFold<Af, S, A> {
    /// Creates a new `AffineFoldAsFold` from an affine fold.
    #[must_use]
    pub const fn new(affine_fold: Af) -> Self {
        Self {
            affine_fold,
            _marker: PhantomData,
        }
    }
}

impl<Af, S, A> Fold<S, A> for AffineFoldAsFold<Af, S, A>
where
    Af: AffineFold<S, A>,
{
    fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: S) -> R
    where
        R: Clone,
        Rd: Fn(R, R) -> R,
        M: Fn(A) -> R,
    {
        self.affine_fold.fold_map(neutral, reducer, map, source)
    }
}

impl<Af: Clone, S, A> Clone for AffineFoldAsFold<Af, S, A> {
    fn clone(&self) -> Self {
        Self {
            affine_fold: self.affine_fold.clone(),
            _marker: PhantomData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    struct FirstChar;

    impl AffineFold<String, char> for FirstChar {
        fn preview(&self, source: String) -> Option<char> {
            source.chars().next()
        }
    }

    #[test]
    fn test_preview_absent_focus() {
        assert_eq!(FirstChar.preview(String::new()), None);
        assert_eq!(FirstChar.preview("hi".to_string()), Some('h'));
    }

    #[test]
    fn test_fold_map_seeds_with_neutral() {
        let total = FirstChar.fold_map(10, |left, right| left + right, |c| c as i32, "A".to_string());
        assert_eq!(total, 10 + 65);

        let empty = FirstChar.fold_map(10, |left, right| left + right, |c| c as i32, String::new());
        assert_eq!(empty, 10);
    }

    #[test]
    fn test_composition_short_circuits_on_outer_none() {
        struct CountingInner<'a>(&'a Cell<u32>);

        impl AffineFold<char, char> for CountingInner<'_> {
            fn preview(&self, source: char) -> Option<char> {
                self.0.set(self.0.get() + 1);
                Some(source)
            }
        }

        let calls = Cell::new(0);
        let composed = FirstChar.focus(CountingInner(&calls));

        assert_eq!(composed.preview(String::new()), None);
        assert_eq!(calls.get(), 0);

        assert_eq!(composed.preview("x".to_string()), Some('x'));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_widened_fold() {
        let fold = FirstChar.to_fold();
        assert_eq!(fold.to_list_of("word".to_string()), vec!['w']);
        assert_eq!(fold.to_list_of(String::new()), Vec::<char>::new());
    }
}
