//! Optics for immutable data manipulation.
//!
//! This module provides optics - composable accessors for immutable data
//! structures. Each optic kind captures one access capability, from the
//! read-only [`Fold`] up to the lossless [`Iso`], and composing two
//! optics with `focus` yields the strongest kind both sides support.
//!
//! # Optics Hierarchy
//!
//! ```text
//! Iso <: Lens
//! Iso <: Prism
//! Lens <: Getter
//! Lens <: AffineTraversal
//! Prism <: Review
//! Prism <: AffineTraversal
//! AffineTraversal <: AffineFold
//! AffineTraversal <: Traversal
//! Getter <: AffineFold
//! AffineFold <: Fold
//! Traversal <: Fold
//! Traversal <: Setter
//! ```
//!
//! # Available Optics
//!
//! - [`Fold`]: Read zero or more foci (`fold_map`, `to_list_of`)
//! - [`Setter`]: Rewrite every focus (`over`, `set`)
//! - [`Getter`]: Read exactly one focus (`view`)
//! - [`Review`]: Construct a source from a focus (`review`)
//! - [`AffineFold`]: Read at most one focus (`preview`)
//! - [`Traversal`]: Read and rewrite zero or more foci
//! - [`AffineTraversal`]: Read and rewrite at most one focus
//!   (`get_or_modify`)
//! - [`Lens`]: Read and rewrite a field that always exists
//! - [`Prism`]: Match and rebuild one case of a sum type
//! - [`Iso`]: Convert losslessly between two representations
//!
//! # Example with Lens
//!
//! ```
//! use focal::lens;
//! use focal::optics::Lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { street: String, city: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Person { name: String, address: Address }
//!
//! // Compose lenses to focus on nested fields
//! let person_street = lens!(Person, address).focus(lens!(Address, street));
//!
//! let person = Person {
//!     name: "Alice".to_string(),
//!     address: Address {
//!         street: "Main St".to_string(),
//!         city: "Tokyo".to_string(),
//!     },
//! };
//!
//! assert_eq!(person_street.view(person.clone()), "Main St");
//!
//! let updated = person_street.set("Oak Ave".to_string(), person);
//! assert_eq!(updated.address.street, "Oak Ave");
//! assert_eq!(updated.address.city, "Tokyo"); // Other fields unchanged
//! ```
//!
//! # Example with Prism
//!
//! ```
//! use focal::prism;
//! use focal::optics::Prism;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! enum Shape {
//!     Circle(f64),
//!     Square(f64),
//! }
//!
//! let circle = prism!(Shape, Circle);
//!
//! assert_eq!(circle.preview(Shape::Circle(5.0)), Some(5.0));
//! assert_eq!(circle.preview(Shape::Square(3.0)), None);
//! assert_eq!(circle.review(10.0), Shape::Circle(10.0));
//! ```
//!
//! # Example with a Lens/Prism composition
//!
//! ```
//! use focal::lens;
//! use focal::optics::{AffineTraversal, Lens, Prism, some_case};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Container { maybe_value: Option<i32> }
//!
//! let value = lens!(Container, maybe_value)
//!     .to_affine_traversal()
//!     .focus(some_case::<i32, i32>().to_affine_traversal());
//!
//! assert_eq!(value.preview(Container { maybe_value: Some(42) }), Some(42));
//! assert_eq!(value.preview(Container { maybe_value: None }), None);
//!
//! let bumped = value.over(|n| n + 1, Container { maybe_value: Some(42) });
//! assert_eq!(bumped, Container { maybe_value: Some(43) });
//! ```
//!
//! # Example with Iso
//!
//! ```
//! use focal::iso;
//! use focal::optics::Iso;
//!
//! // String <-> Vec<char> isomorphism
//! let string_chars = iso!(
//!     |s: String| s.chars().collect::<Vec<_>>(),
//!     |chars: Vec<char>| chars.into_iter().collect::<String>()
//! );
//!
//! let chars = string_chars.view("hello".to_string());
//! assert_eq!(chars, vec!['h', 'e', 'l', 'l', 'o']);
//!
//! // Roundtrip: view then review returns the original
//! assert_eq!(string_chars.review(chars), "hello");
//! ```
//!
//! # Lens Laws
//!
//! Every Lens must satisfy three laws:
//!
//! 1. **GetPut Law**: Getting and setting back yields the original.
//!    ```text
//!    lens.set(lens.view(source.clone()), source.clone()) == source
//!    ```
//!
//! 2. **PutGet Law**: Setting then getting yields the set value.
//!    ```text
//!    lens.view(lens.set(value.clone(), source)) == value
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(v2, lens.set(v1, source.clone())) == lens.set(v2, source)
//!    ```
//!
//! # Prism Laws
//!
//! Every Prism must satisfy two laws:
//!
//! 1. **PreviewReview Law**: Reviewing then previewing yields the value.
//!    ```text
//!    prism.preview(prism.review(value.clone())) == Some(value)
//!    ```
//!
//! 2. **ReviewPreview Law**: If the match succeeds, reviewing the payload
//!    rebuilds the source.
//!    ```text
//!    if prism.get_or_modify(source.clone()) == Right(focus) then
//!        prism.review(focus) == source
//!    ```
//!
//! # AffineTraversal Laws
//!
//! Every AffineTraversal must satisfy two laws (when the focus exists):
//!
//! 1. **PreviewSet Law**: Setting back the previewed focus yields the
//!    original.
//!    ```text
//!    if affine.preview(source.clone()) == Some(focus) then
//!        affine.set(focus, source.clone()) == source
//!    ```
//!
//! 2. **SetPreview Law**: Setting then previewing yields the set value.
//!    ```text
//!    if affine.preview(source.clone()).is_some() then
//!        affine.preview(affine.set(value.clone(), source)) == Some(value)
//!    ```
//!
//! # Iso Laws
//!
//! Every Iso must satisfy two laws:
//!
//! 1. **ViewReview Law**: Converting forward then backward yields the
//!    original.
//!    ```text
//!    iso.review(iso.view(source.clone())) == source
//!    ```
//!
//! 2. **ReviewView Law**: Converting backward then forward yields the
//!    original.
//!    ```text
//!    iso.view(iso.review(value.clone())) == value
//!    ```

mod affine_fold;
mod affine_traversal;
mod fold;
mod getter;
mod iso;
mod lens;
mod prism;
mod review;
mod sequence;
mod setter;
mod standard_optics;
mod traversal;

// Re-export all fold-related types and traits
pub use fold::ComposedFold;
pub use fold::Fold;

// Re-export all setter-related types and traits
pub use setter::ComposedSetter;
pub use setter::Setter;

// Re-export all getter-related types and traits
pub use getter::ComposedGetter;
pub use getter::Getter;
pub use getter::GetterAsAffineFold;

// Re-export all review-related types and traits
pub use review::Review;

// Re-export all affine-fold-related types and traits
pub use affine_fold::AffineFold;
pub use affine_fold::AffineFoldAsFold;
pub use affine_fold::ComposedAffineFold;

// Re-export all traversal-related types and traits
pub use traversal::ComposedTraversal;
pub use traversal::Traversal;
pub use traversal::TraversalAsFold;
pub use traversal::TraversalAsSetter;

// Re-export all affine-traversal-related types and traits
pub use affine_traversal::AffineTraversal;
pub use affine_traversal::AffineTraversalAsAffineFold;
pub use affine_traversal::AffineTraversalAsTraversal;
pub use affine_traversal::ComposedAffineTraversal;

// Re-export all lens-related types and traits
pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::LensAsAffineTraversal;
pub use lens::LensAsGetter;
pub use lens::LensAsTraversal;

// Re-export all prism-related types and traits
pub use prism::ComposedPrism;
pub use prism::FunctionPrism;
pub use prism::Prism;
pub use prism::PrismAsAffineTraversal;
pub use prism::PrismAsTraversal;

// Re-export all iso-related types and traits
pub use iso::ComposedIso;
pub use iso::FunctionIso;
pub use iso::Iso;
pub use iso::IsoAsLens;
pub use iso::IsoAsPrism;
pub use iso::ReversedIso;

// Re-export sequence optics
pub use sequence::AtIndex;
pub use sequence::VecTraversal;

// Re-export standard optics
pub use standard_optics::iso_identity;
pub use standard_optics::iso_swap;
pub use standard_optics::left_case;
pub use standard_optics::right_case;
pub use standard_optics::some_case;
