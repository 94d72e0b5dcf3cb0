//! # focal
//!
//! A composable optics library for Rust: type-safe, allocation-conscious
//! accessors for reading, rewriting, and rebuilding immutable data.
//!
//! ## Overview
//!
//! Optics factor "where in a structure" away from "what to do there".
//! Each optic kind captures one access capability:
//!
//! - **Fold / Setter**: read or rewrite zero or more foci
//! - **Getter / Review**: project out of, or construct into, a source
//! - **`AffineFold` / `AffineTraversal`**: at most one focus
//! - **Traversal**: every element of a sequence-like source
//! - **Lens / Prism**: a guaranteed field, or one case of a sum type
//! - **Iso**: a lossless conversion, reversible with `reverse`
//!
//! Composition with `focus` is associative and yields the strongest
//! optic kind both operands support; explicit `to_*` widenings move down
//! the hierarchy when a weaker kind is needed.
//!
//! ## Feature Flags
//!
//! - `derive`: the [`Lenses`](derive@Lenses) derive macro generating a
//!   lens per struct field (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use focal::lens;
//! use focal::prelude::*;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Account {
//!     owner: String,
//!     balance: i64,
//! }
//!
//! let balance = lens!(Account, balance);
//! let account = Account {
//!     owner: "ada".to_string(),
//!     balance: 100,
//! };
//!
//! assert_eq!(balance.view(account.clone()), 100);
//! assert_eq!(balance.over(|amount| amount + 50, account).balance, 150);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use focal::prelude::*;
/// ```
pub mod prelude {

    pub use crate::either::Either;

    pub use crate::optics::*;

    #[cfg(feature = "derive")]
    pub use crate::Lenses;
}

pub mod either;

pub mod optics;

#[cfg(feature = "derive")]
pub use focal_derive::Lenses;
