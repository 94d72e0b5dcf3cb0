//! Review optics: total injections, the backwards counterpart of a
//! [`Getter`](super::Getter).
//!
//! A Review is a function `B -> T`, so any closure of that shape is a
//! [`Review`] already:
//!
//! ```
//! use focal::optics::Review;
//!
//! let wrap = |n: i32| Some(n);
//! assert_eq!(wrap.review(3), Some(3));
//! ```

/// A Review constructs a source from a focus value.
///
/// There is no `focus` composition on Review: with the closure blanket
/// impls, a plain closure is both a `Getter` and a `Review`, and a second
/// `focus` method would make calls on closures ambiguous. Composition of
/// constructors goes through [`Prism`](super::Prism) or
/// [`Iso`](super::Iso) instead.
///
/// # Type Parameters
///
/// - `T`: The constructed source type
/// - `B`: The focus type
pub trait Review<T, B> {
    /// Builds the value targeted by this review.
    fn review(&self, value: B) -> T;
}

impl<T, B, F> Review<T, B> for F
where
    F: Fn(B) -> T,
{
    fn review(&self, value: B) -> T {
        self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_review() {
        let ok = |n: i32| -> Result<i32, String> { Ok(n) };
        assert_eq!(ok.review(5), Ok(5));
    }
}
