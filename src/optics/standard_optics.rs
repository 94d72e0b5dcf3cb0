//! Stock optics for std types and [`Either`].

use crate::either::Either;

use super::iso::{FunctionIso, Iso};
use super::prism::{FunctionPrism, Prism};

/// The identity iso, which focuses the whole source.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{Iso, iso_identity};
///
/// let identity = iso_identity::<i32>();
///
/// assert_eq!(identity.view(7), 7);
/// assert_eq!(identity.review(7), 7);
/// ```
#[must_use]
pub fn iso_identity<T>() -> impl Iso<T, T, T, T> + Clone {
    FunctionIso::new(|source: T| source, |value: T| value)
}

/// An iso swapping the components of a pair.
#[must_use]
pub fn iso_swap<A, B>() -> impl Iso<(A, B), (A, B), (B, A), (B, A)> + Clone {
    FunctionIso::new(
        |(first, second): (A, B)| (second, first),
        |(second, first): (B, A)| (first, second),
    )
}

/// A prism focusing the `Left` payload of an [`Either`].
///
/// The prism is type-changing: rewriting the payload may change the
/// `Left` type while the `Right` type stays fixed.
#[must_use]
pub fn left_case<L, R, L2>() -> impl Prism<Either<L, R>, Either<L2, R>, L, L2> + Clone {
    FunctionPrism::new(
        |source: Either<L, R>| match source {
            Either::Left(left) => Either::Right(left),
            Either::Right(right) => Either::Left(Either::Right(right)),
        },
        Either::Left,
    )
}

/// A prism focusing the `Right` payload of an [`Either`].
#[must_use]
pub fn right_case<L, R, R2>() -> impl Prism<Either<L, R>, Either<L, R2>, R, R2> + Clone {
    FunctionPrism::new(
        |source: Either<L, R>| match source {
            Either::Right(right) => Either::Right(right),
            Either::Left(left) => Either::Left(Either::Left(left)),
        },
        Either::Right,
    )
}

/// A prism focusing the payload of an `Option::Some`.
///
/// # Examples
///
/// ```rust
/// use focal::optics::{Prism, some_case};
///
/// let some = some_case::<i32, i32>();
///
/// assert_eq!(some.preview(Some(5)), Some(5));
/// assert_eq!(some.preview(None), None);
/// assert_eq!(some.over(|n| n + 1, Some(5)), Some(6));
/// ```
#[must_use]
pub fn some_case<A, B>() -> impl Prism<Option<A>, Option<B>, A, B> + Clone {
    FunctionPrism::new(
        |source: Option<A>| match source {
            Some(focus) => Either::Right(focus),
            None => Either::Left(None),
        },
        Some,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_identity() {
        let identity = iso_identity::<String>();

        assert_eq!(identity.view("a".to_string()), "a");
        assert_eq!(identity.over(|text| text + "b", "a".to_string()), "ab");
    }

    #[test]
    fn test_iso_swap_round_trips() {
        let swap = iso_swap::<i32, char>();

        assert_eq!(swap.view((1, 'a')), ('a', 1));
        assert_eq!(swap.review(('a', 1)), (1, 'a'));
        assert_eq!(swap.over(|(c, n)| (c, n + 1), (1, 'a')), (2, 'a'));
    }

    #[test]
    fn test_left_case() {
        let left = left_case::<i32, String, i32>();

        assert_eq!(left.preview(Either::Left(1)), Some(1));
        assert_eq!(left.preview(Either::Right("r".to_string())), None);
        assert_eq!(left.review(2), Either::Left(2));
        assert_eq!(
            left.over(|n| n + 1, Either::Right("r".to_string())),
            Either::Right("r".to_string())
        );
    }

    #[test]
    fn test_left_case_changes_type() {
        let left = left_case::<i32, char, String>();

        assert_eq!(
            left.over(|n| n.to_string(), Either::Left(7)),
            Either::Left("7".to_string())
        );
        assert_eq!(
            left.over(|n| n.to_string(), Either::Right('r')),
            Either::Right('r')
        );
    }

    #[test]
    fn test_right_case() {
        let right = right_case::<char, i32, i32>();

        assert_eq!(right.preview(Either::Right(1)), Some(1));
        assert_eq!(right.preview(Either::Left('l')), None);
        assert_eq!(right.review(2), Either::Right(2));
    }

    #[test]
    fn test_some_case() {
        let some = some_case::<i32, String>();

        assert_eq!(some.preview(Some(5)), Some(5));
        assert_eq!(some.preview(None), None);
        assert_eq!(some.over(|n| n.to_string(), Some(5)), Some("5".to_string()));
        assert_eq!(some.over(|n| n.to_string(), None), None);
        assert_eq!(some.review("x".to_string()), Some("x".to_string()));
    }
}
