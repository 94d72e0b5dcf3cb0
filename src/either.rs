//! Either type - a value that can be one of two types.
//!
//! This module provides the `Either<L, R>` type, which represents a value
//! that is either a `Left(L)` or a `Right(R)`. The optics layer uses it
//! as the result of `get_or_modify`: `Right` carries a matched focus,
//! `Left` carries the rebuilt source.
//!
//! # Examples
//!
//! ```rust
//! use focal::either::Either;
//!
//! let left: Either<i32, String> = Either::Left(42);
//! let right: Either<i32, String> = Either::Right("hello".to_string());
//!
//! // Using fold to handle both cases
//! let result = right.fold(
//!     |n| format!("Number: {n}"),
//!     |s| format!("String: {s}"),
//! );
//! assert_eq!(result, "String: hello");
//!
//! assert_eq!(left.left(), Some(42));
//! ```

/// A value that can be one of two types.
///
/// `Either<L, R>` represents a value that is either `Left(L)` or
/// `Right(R)`. By convention:
/// - `Left` carries the untouched alternative (for optics, the rebuilt
///   source of a failed match)
/// - `Right` carries the selected value (for optics, the focus)
///
/// # Type Parameters
///
/// * `L` - The type of the left value
/// * `R` - The type of the right value
///
/// # Examples
///
/// ```rust
/// use focal::either::Either;
///
/// let success: Either<String, i32> = Either::Right(42);
///
/// let doubled = success.map_right(|x| x * 2);
/// assert_eq!(doubled, Either::Right(84));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Either<L, R> {
    /// The left variant, conventionally the untouched alternative.
    Left(L),
    /// The right variant, conventionally the selected value.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert!(left.is_left());
    /// ```
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::either::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert!(right.is_right());
    /// ```
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts the `Either` into an `Option<L>`, consuming the either.
    ///
    /// Returns `Some(l)` if this is `Left(l)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::either::Either;
    ///
    /// let left: Either<i32, String> = Either::Left(42);
    /// assert_eq!(left.left(), Some(42));
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(left) => Some(left),
            Self::Right(_) => None,
        }
    }

    /// Converts the `Either` into an `Option<R>`, consuming the either.
    ///
    /// Returns `Some(r)` if this is `Right(r)`, otherwise `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::either::Either;
    ///
    /// let right: Either<i32, String> = Either::Right("hello".to_string());
    /// assert_eq!(right.right(), Some("hello".to_string()));
    /// ```
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(right) => Some(right),
        }
    }

    /// Converts from `&Either<L, R>` to `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    // =========================================================================
    // Folding
    // =========================================================================

    /// Collapses the `Either` by invoking exactly one of the two branch
    /// functions exactly once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::either::Either;
    ///
    /// let either: Either<i32, String> = Either::Left(3);
    /// let described = either.fold(
    ///     |n| format!("number {n}"),
    ///     |s| format!("text {s}"),
    /// );
    /// assert_eq!(described, "number 3");
    /// ```
    #[inline]
    pub fn fold<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Self::Left(left) => on_left(left),
            Self::Right(right) => on_right(right),
        }
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Maps the left value, leaving a `Right` untouched.
    #[inline]
    pub fn map_left<L2, F>(self, map: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> L2,
    {
        match self {
            Self::Left(left) => Either::Left(map(left)),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Maps the right value, leaving a `Left` untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use focal::either::Either;
    ///
    /// let right: Either<i32, i32> = Either::Right(2);
    /// assert_eq!(right.map_right(|n| n * 10), Either::Right(20));
    /// ```
    #[inline]
    pub fn map_right<R2, F>(self, map: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> R2,
    {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => Either::Right(map(right)),
        }
    }

    /// Chains a computation on the left value, leaving a `Right`
    /// untouched.
    #[inline]
    pub fn flat_map_left<L2, F>(self, map: F) -> Either<L2, R>
    where
        F: FnOnce(L) -> Either<L2, R>,
    {
        match self {
            Self::Left(left) => map(left),
            Self::Right(right) => Either::Right(right),
        }
    }

    /// Chains a computation on the right value, leaving a `Left`
    /// untouched.
    #[inline]
    pub fn flat_map_right<R2, F>(self, map: F) -> Either<L, R2>
    where
        F: FnOnce(R) -> Either<L, R2>,
    {
        match self {
            Self::Left(left) => Either::Left(left),
            Self::Right(right) => map(right),
        }
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator yielding the left value, or nothing for a
    /// `Right`.
    ///
    /// The iterator is finite and restartable: each call produces a
    /// fresh iterator over the same value.
    #[inline]
    pub fn iter_left(&self) -> std::option::IntoIter<&L> {
        self.as_ref().left().into_iter()
    }

    /// Returns an iterator yielding the right value, or nothing for a
    /// `Left`.
    #[inline]
    pub fn iter_right(&self) -> std::option::IntoIter<&R> {
        self.as_ref().right().into_iter()
    }
}
