//! Implementation of the `#[derive(Lenses)]` macro.
//!
//! This module contains the procedural macro implementation that
//! generates per-field lens types, per-`Vec`-field element traversals,
//! and the `{Type}Lenses` carrier.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use syn::{
    parse_macro_input, Data, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident,
    PathArguments, Type,
};

/// Main implementation of the Lenses derive macro.
pub fn derive_lenses_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    TokenStream::from(expand(&input))
}

/// Expands one parsed derive input into the generated items, or into a
/// `compile_error!` invocation.
fn expand(input: &DeriveInput) -> TokenStream2 {
    match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(named_fields) => generate_lenses(input, named_fields),
            Fields::Unnamed(_) => syn::Error::new_spanned(
                &input.ident,
                "Lenses can only be derived for structs with named fields, not tuple structs.",
            )
            .to_compile_error(),
            Fields::Unit => generate_carrier(input, &[]),
        },
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Lenses can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Lenses cannot be derived for unions.")
                .to_compile_error()
        }
    }
}

/// Generates the lens and traversal types plus the carrier for a struct
/// with named fields.
fn generate_lenses(input: &DeriveInput, fields: &FieldsNamed) -> TokenStream2 {
    let fields: Vec<&Field> = fields.named.iter().collect();

    let mut items = Vec::new();
    let mut carrier_methods = Vec::new();

    for field in &fields {
        let Some(field_name) = field.ident.as_ref() else {
            continue;
        };

        items.push(generate_field_lens(input, &fields, field));
        carrier_methods.push(generate_lens_accessor(input, field_name));

        match vec_element_type(&field.ty) {
            Ok(Some(element_type)) => {
                items.push(generate_elements_traversal(
                    input,
                    &fields,
                    field,
                    element_type,
                ));
                carrier_methods.push(generate_elements_accessor(input, field_name));
            }
            Ok(None) => {}
            Err(error) => return error.to_compile_error(),
        }
    }

    let carrier = generate_carrier(input, &carrier_methods);

    quote! {
        #(#items)*
        #carrier
    }
}

/// Generates the zero-sized lens type for one field, with its `Lens`
/// impl and the marker impls.
fn generate_field_lens(input: &DeriveInput, fields: &[&Field], field: &Field) -> TokenStream2 {
    let name = &input.ident;
    let vis = &input.vis;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field_name = field.ident.as_ref().expect("named field must have ident");
    let field_type = &field.ty;
    let lens_name = lens_type_name(name, field_name);
    let lens_doc = format!("A lens focusing the `{field_name}` field of [`{name}`].");

    // Rebuild with a struct literal in declaration order; only this
    // field's slot goes through the lift function.
    let rebuild = fields.iter().map(|other| {
        let other_name = other.ident.as_ref().expect("named field must have ident");

        if other_name == field_name {
            quote! { #other_name: lift(source.#other_name) }
        } else {
            quote! { #other_name: source.#other_name }
        }
    });

    let markers = generate_marker_impls(input, &lens_name);

    quote! {
        #[doc = #lens_doc]
        #vis struct #lens_name #impl_generics (
            ::core::marker::PhantomData<fn() -> #name #ty_generics>,
        ) #where_clause;

        impl #impl_generics ::focal::optics::Lens<
            #name #ty_generics,
            #name #ty_generics,
            #field_type,
            #field_type,
        > for #lens_name #ty_generics #where_clause {
            fn view(&self, source: #name #ty_generics) -> #field_type {
                source.#field_name
            }

            fn over<F>(&self, lift: F, source: #name #ty_generics) -> #name #ty_generics
            where
                F: ::core::ops::FnOnce(#field_type) -> #field_type,
            {
                #name {
                    #(#rebuild),*
                }
            }
        }

        #markers
    }
}

/// Generates the zero-sized traversal type over the per-index lenses of
/// one `Vec` field.
fn generate_elements_traversal(
    input: &DeriveInput,
    fields: &[&Field],
    field: &Field,
    element_type: &Type,
) -> TokenStream2 {
    let name = &input.ident;
    let vis = &input.vis;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let field_name = field.ident.as_ref().expect("named field must have ident");
    let lens_name = lens_type_name(name, field_name);
    let elements_name = elements_type_name(name, field_name);
    let elements_doc = format!(
        "A traversal over the per-index lenses of the `{field_name}` field of [`{name}`]."
    );

    let index_lens = quote! {
        ::focal::optics::ComposedLens::new(
            #lens_name(::core::marker::PhantomData),
            ::focal::optics::AtIndex::new(index),
        )
    };
    let focus_type = quote! {
        ::focal::optics::ComposedLens<
            #lens_name #ty_generics,
            ::focal::optics::AtIndex<#element_type>,
            ::std::vec::Vec<#element_type>,
            ::std::vec::Vec<#element_type>,
        >
    };

    let rebuild = fields.iter().map(|other| {
        let other_name = other.ident.as_ref().expect("named field must have ident");

        if other_name == field_name {
            quote! { #other_name: replaced }
        } else {
            quote! { #other_name: source.#other_name }
        }
    });

    let markers = generate_marker_impls(input, &elements_name);

    quote! {
        #[doc = #elements_doc]
        #vis struct #elements_name #impl_generics (
            ::core::marker::PhantomData<fn() -> #name #ty_generics>,
        ) #where_clause;

        impl #impl_generics ::focal::optics::Traversal<
            #name #ty_generics,
            #name #ty_generics,
            #focus_type,
            #element_type,
        > for #elements_name #ty_generics #where_clause {
            fn fold_map<R, Rd, M>(&self, neutral: R, reducer: Rd, map: M, source: #name #ty_generics) -> R
            where
                R: ::core::clone::Clone,
                Rd: ::core::ops::Fn(R, R) -> R,
                M: ::core::ops::Fn(#focus_type) -> R,
            {
                let mut accumulated = neutral;

                for index in 0..source.#field_name.len() {
                    accumulated = reducer(accumulated, map(#index_lens));
                }

                accumulated
            }

            fn over<F>(&self, lift: F, source: #name #ty_generics) -> #name #ty_generics
            where
                F: ::core::ops::Fn(#focus_type) -> #element_type,
            {
                let replaced: ::std::vec::Vec<#element_type> = (0..source.#field_name.len())
                    .map(|index| lift(#index_lens))
                    .collect();

                #name {
                    #(#rebuild),*
                }
            }
        }

        #markers
    }
}

/// Generates the `{Type}Lenses` carrier with one accessor per generated
/// optic.
fn generate_carrier(input: &DeriveInput, methods: &[TokenStream2]) -> TokenStream2 {
    let name = &input.ident;
    let vis = &input.vis;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let carrier_name = format_ident!("{}Lenses", name);
    let carrier_doc = format!("Lenses for the fields of [`{name}`].");
    let markers = generate_marker_impls(input, &carrier_name);

    quote! {
        #[doc = #carrier_doc]
        #vis struct #carrier_name #impl_generics (
            ::core::marker::PhantomData<fn() -> #name #ty_generics>,
        ) #where_clause;

        impl #impl_generics #carrier_name #ty_generics #where_clause {
            #(#methods)*
        }

        #markers
    }
}

/// Generates the carrier accessor returning one field's lens.
fn generate_lens_accessor(input: &DeriveInput, field_name: &Ident) -> TokenStream2 {
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let lens_name = lens_type_name(&input.ident, field_name);
    let vis = &input.vis;
    let doc = format!("Returns a lens focusing the `{field_name}` field.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        #vis fn #field_name() -> #lens_name #ty_generics {
            #lens_name(::core::marker::PhantomData)
        }
    }
}

/// Generates the carrier accessor returning one `Vec` field's element
/// traversal.
fn generate_elements_accessor(input: &DeriveInput, field_name: &Ident) -> TokenStream2 {
    let (_, ty_generics, _) = input.generics.split_for_impl();
    let elements_name = elements_type_name(&input.ident, field_name);
    let method_name = format_ident!("{}_elements", field_name);
    let vis = &input.vis;
    let doc = format!("Returns a traversal over the per-index lenses of the `{field_name}` field.");

    quote! {
        #[doc = #doc]
        #[inline]
        #[must_use]
        #vis fn #method_name() -> #elements_name #ty_generics {
            #elements_name(::core::marker::PhantomData)
        }
    }
}

/// Generates `Clone`, `Copy`, and `Debug` impls that hold regardless of
/// the source type's own parameters.
fn generate_marker_impls(input: &DeriveInput, type_name: &Ident) -> TokenStream2 {
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let label = type_name.to_string();

    quote! {
        impl #impl_generics ::core::clone::Clone for #type_name #ty_generics #where_clause {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl #impl_generics ::core::marker::Copy for #type_name #ty_generics #where_clause {}

        impl #impl_generics ::core::fmt::Debug for #type_name #ty_generics #where_clause {
            fn fmt(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                formatter.write_str(#label)
            }
        }
    }
}

/// Names the generated lens type for one field.
fn lens_type_name(name: &Ident, field_name: &Ident) -> Ident {
    format_ident!("{}{}Lens", name, pascal_case(&field_name.to_string()))
}

/// Names the generated traversal type for one `Vec` field.
fn elements_type_name(name: &Ident, field_name: &Ident) -> Ident {
    format_ident!("{}{}Elements", name, pascal_case(&field_name.to_string()))
}

/// Converts a snake_case field name to PascalCase for type names.
fn pascal_case(source: &str) -> String {
    let mut result = String::with_capacity(source.len());
    let mut upper_next = true;

    for character in source.chars() {
        if character == '_' {
            upper_next = true;
        } else if upper_next {
            result.extend(character.to_uppercase());
            upper_next = false;
        } else {
            result.push(character);
        }
    }

    result
}

/// Returns the element type of a `Vec` field, `None` for non-`Vec`
/// fields, or an error when the element type cannot be read.
///
/// The check is syntactic: the last path segment must be `Vec`, with any
/// path prefix accepted.
fn vec_element_type(field_type: &Type) -> syn::Result<Option<&Type>> {
    let Type::Path(type_path) = field_type else {
        return Ok(None);
    };
    let Some(segment) = type_path.path.segments.last() else {
        return Ok(None);
    };

    if segment.ident != "Vec" {
        return Ok(None);
    }

    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return Err(syn::Error::new_spanned(
            field_type,
            "cannot determine the element type of this Vec field",
        ));
    };

    match arguments.args.first() {
        Some(GenericArgument::Type(element_type)) => Ok(Some(element_type)),
        _ => Err(syn::Error::new_spanned(
            field_type,
            "cannot determine the element type of this Vec field",
        )),
    }
}

#[cfg(test)]
mod tests {
    use syn::{parse_quote, DeriveInput};

    use super::{expand, pascal_case};

    #[test]
    fn test_pascal_case() {
        assert_eq!(pascal_case("words"), "Words");
        assert_eq!(pascal_case("max_value"), "MaxValue");
        assert_eq!(pascal_case("x"), "X");
        assert_eq!(pascal_case("already_set_"), "AlreadySet");
    }

    // ==================== expansion ====================

    #[test]
    fn test_expand_named_struct_generates_lenses_and_carrier() {
        let input: DeriveInput = parse_quote! {
            struct Point {
                x: i64,
                y: i64,
            }
        };

        let expanded = expand(&input).to_string();

        assert!(expanded.contains("PointXLens"));
        assert!(expanded.contains("PointYLens"));
        assert!(expanded.contains("PointLenses"));
        assert!(!expanded.contains("compile_error"));
    }

    #[test]
    fn test_expand_vec_field_generates_elements_traversal() {
        let input: DeriveInput = parse_quote! {
            struct Words {
                words: Vec<String>,
            }
        };

        let expanded = expand(&input).to_string();

        assert!(expanded.contains("WordsWordsLens"));
        assert!(expanded.contains("WordsWordsElements"));
        assert!(expanded.contains("words_elements"));
    }

    #[test]
    fn test_expand_is_deterministic() {
        let input: DeriveInput = parse_quote! {
            struct Inventory {
                label: String,
                quantities: Vec<u32>,
            }
        };

        assert_eq!(expand(&input).to_string(), expand(&input).to_string());
    }

    #[test]
    fn test_expand_unit_struct_generates_empty_carrier() {
        let input: DeriveInput = parse_quote! {
            struct Unit;
        };

        let expanded = expand(&input).to_string();

        assert!(expanded.contains("UnitLenses"));
        assert!(!expanded.contains("compile_error"));
    }

    // ==================== diagnostics ====================

    #[test]
    fn test_expand_rejects_enum() {
        let input: DeriveInput = parse_quote! {
            enum Direction {
                North,
                South,
            }
        };

        let expanded = expand(&input).to_string();

        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains("not enums"));
    }

    #[test]
    fn test_expand_rejects_union() {
        let input: DeriveInput = parse_quote! {
            union Register {
                word: u32,
                halves: [u16; 2],
            }
        };

        let expanded = expand(&input).to_string();

        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains("unions"));
    }

    #[test]
    fn test_expand_rejects_tuple_struct() {
        let input: DeriveInput = parse_quote! {
            struct Pair(i64, i64);
        };

        let expanded = expand(&input).to_string();

        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains("tuple structs"));
    }

    #[test]
    fn test_expand_rejects_unreadable_vec_element() {
        let input: DeriveInput = parse_quote! {
            struct Bare {
                items: Vec,
            }
        };

        let expanded = expand(&input).to_string();

        assert!(expanded.contains("compile_error"));
        assert!(expanded.contains("element type"));
    }
}
