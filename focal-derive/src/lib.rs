//! Derive macros for focal optics.
//!
//! This crate provides the procedural macro behind `#[derive(Lenses)]`,
//! which generates a lens per struct field and a traversal per `Vec`
//! field, collected under a `{Type}Lenses` carrier type.
//!
//! # Example
//!
//! ```rust,ignore
//! use focal::Lenses;
//! use focal::optics::Lens;
//!
//! #[derive(Clone, Lenses)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated:
//! // - PointLenses::x() -> PointXLens (a Lens<Point, Point, i32, i32>)
//! // - PointLenses::y() -> PointYLens (a Lens<Point, Point, i32, i32>)
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(PointLenses::x().view(point), 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro generating lens accessors for struct fields.
///
/// For a struct `D`, the macro emits a carrier type `DLenses` whose
/// associated functions, one per field and named exactly like the field,
/// return a zero-sized lens focusing that field. Every generated optic
/// is `Copy`, `Clone`, and `Debug`, and carries the visibility of `D`
/// itself.
///
/// # Requirements
///
/// - The type must be a struct with named fields (or no fields at all;
///   zero-field structs produce an empty carrier)
///
/// # Generated Code
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// struct DFooLens; // Lens<D, D, T, T>
///
/// impl DLenses {
///     pub fn foo() -> DFooLens { ... }
/// }
/// ```
///
/// `view` moves the field out of the source; `over` rebuilds `D` with a
/// struct literal listing every field in declaration order, so sibling
/// fields are preserved untouched.
///
/// # `Vec` fields
///
/// A field of type `Vec<E>` additionally gets an `Elements` traversal
/// whose foci are per-index lenses: the field lens composed with
/// [`AtIndex`](../focal/optics/struct.AtIndex.html) for each index of
/// the current source. The lift function receives the index lens and
/// returns the replacement element:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Words {
///     words: Vec<String>,
/// }
///
/// let record = Words { words: vec!["o.O".to_string(), "^.^".to_string()] };
/// let wrapped = WordsLenses::words_elements().over(
///     |lens| format!("({})", lens.view(record.clone())),
///     record.clone(),
/// );
/// ```
///
/// Only the outermost sequence level is traversed: a `Vec<Vec<E>>` field
/// gets an `Elements` traversal over `Vec<E>` elements.
///
/// # Generics
///
/// Generic structs are supported; the generated optics and the carrier
/// repeat the struct's own type parameters:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let lens = ContainerLenses::<i32>::value();
/// assert_eq!(lens.view(Container { value: 42 }), 42);
/// ```
#[proc_macro_derive(Lenses)]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
