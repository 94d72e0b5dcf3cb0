//! Unit tests for the Either support type.
//!
//! This module covers branch selection, mapping, flat-mapping, and the
//! zero-or-one iterators of [`Either`].

use focal::either::Either;
use rstest::rstest;

// =============================================================================
// Branch Selection
// =============================================================================

#[rstest]
#[case(Either::Left(1), true, false)]
#[case(Either::Right("r"), false, true)]
fn test_is_left_is_right(
    #[case] either: Either<i32, &str>,
    #[case] is_left: bool,
    #[case] is_right: bool,
) {
    assert_eq!(either.is_left(), is_left);
    assert_eq!(either.is_right(), is_right);
}

#[test]
fn test_left_right_projections() {
    let left: Either<i32, &str> = Either::Left(1);
    assert_eq!(left.clone().left(), Some(1));
    assert_eq!(left.right(), None);

    let right: Either<i32, &str> = Either::Right("r");
    assert_eq!(right.clone().left(), None);
    assert_eq!(right.right(), Some("r"));
}

// =============================================================================
// Fold
// =============================================================================

#[test]
fn test_fold_invokes_exactly_one_branch() {
    let left: Either<i32, &str> = Either::Left(2);
    assert_eq!(left.fold(|n| n * 10, |text| text.len() as i32), 20);

    let right: Either<i32, &str> = Either::Right("abc");
    assert_eq!(right.fold(|n| n * 10, |text| text.len() as i32), 3);
}

#[test]
fn test_fold_accepts_fn_once_branches() {
    let owned = String::from("payload");
    let right: Either<i32, String> = Either::Right(String::from("x"));

    let owned_for_left = owned.clone();
    let result = right.fold(move |_| owned_for_left.clone(), move |text| owned + &text);
    assert_eq!(result, "payloadx");
}

// =============================================================================
// Mapping
// =============================================================================

#[test]
fn test_map_left_touches_only_left() {
    let left: Either<i32, &str> = Either::Left(1);
    assert_eq!(left.map_left(|n| n + 1), Either::Left(2));

    let right: Either<i32, &str> = Either::Right("r");
    assert_eq!(right.map_left(|n| n + 1), Either::Right("r"));
}

#[test]
fn test_map_right_touches_only_right() {
    let left: Either<i32, &str> = Either::Left(1);
    assert_eq!(left.map_right(str::len), Either::Left(1));

    let right: Either<i32, &str> = Either::Right("abc");
    assert_eq!(right.map_right(str::len), Either::Right(3));
}

#[test]
fn test_flat_map_preserves_choice_cardinality() {
    let parse = |text: &str| -> Either<&str, i32> {
        text.parse().map_or(Either::Left("not a number"), Either::Right)
    };

    let right: Either<&str, &str> = Either::Right("42");
    assert_eq!(right.flat_map_right(parse), Either::Right(42));

    let bad: Either<&str, &str> = Either::Right("nope");
    assert_eq!(bad.flat_map_right(parse), Either::Left("not a number"));

    let left: Either<&str, &str> = Either::Left("pass-through");
    assert_eq!(left.flat_map_right(parse), Either::Left("pass-through"));
}

// =============================================================================
// Iterators
// =============================================================================

#[test]
fn test_iter_left_yields_zero_or_one() {
    let left: Either<i32, &str> = Either::Left(1);
    assert_eq!(left.iter_left().copied().collect::<Vec<_>>(), vec![1]);
    assert_eq!(left.iter_right().count(), 0);
}

#[test]
fn test_iter_right_is_restartable() {
    let right: Either<i32, &str> = Either::Right("r");

    for _ in 0..2 {
        assert_eq!(right.iter_right().count(), 1);
    }
}

#[test]
fn test_as_ref() {
    let right: Either<i32, String> = Either::Right("r".to_string());
    let viewed: Either<&i32, &String> = right.as_ref();

    assert_eq!(viewed.right().map(String::as_str), Some("r"));
    assert!(right.is_right());
}
