//! Derive macros for the Unistate store
//!
//! This crate provides procedural macros that remove the boilerplate of
//! implementing `unistate_core::action::Action` by hand.
//!
//! # Available Macros
//!
//! - `#[derive(Action)]` - Implements `Action` for an action enum
//!
//! # Example
//!
//! ```
//! use unistate_core::action::Action;
//! use unistate_macros::Action;
//!
//! #[derive(Action, Clone, Debug)]
//! enum TodoAction {
//!     AddTodo { id: u64, text: String },
//!     ToggleTodo { id: u64 },
//!     #[unrecognized]
//!     Unrecognized,
//! }
//!
//! // Generated methods:
//! assert_eq!(TodoAction::ToggleTodo { id: 1 }.action_type(), "TOGGLE_TODO");
//! assert!(TodoAction::unrecognized().is_unrecognized());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Attribute, Data, DeriveInput, Fields};

/// Derive macro for Action enums
///
/// Implements `unistate_core::action::Action`:
/// - `action_type()` - The SCREAMING_SNAKE_CASE variant name (`AddTodo` → `"ADD_TODO"`),
///   identical to serde's `rename_all = "SCREAMING_SNAKE_CASE"` so the tag
///   matches the `type` field of the JSON form
/// - `unrecognized()` - The variant marked `#[unrecognized]`
/// - `is_unrecognized()` - Whether `self` is that variant
///
/// # Attributes
///
/// - `#[unrecognized]` - Marks the unit variant no reducer handles. Exactly one
///   variant must carry it.
///
/// # Panics
///
/// This macro will produce a compile error (not a runtime panic) if:
/// - Applied to a non-enum type
/// - No variant, or more than one variant, is marked `#[unrecognized]`
/// - The `#[unrecognized]` variant carries fields
///
/// # Example
///
/// ```
/// use unistate_core::action::Action;
/// use unistate_macros::Action;
///
/// #[derive(Action, Clone, Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
///     #[unrecognized]
///     Unrecognized,
/// }
///
/// assert_eq!(CounterAction::Increment.action_type(), "INCREMENT");
/// assert_eq!(CounterAction::unrecognized().action_type(), "@@UNRECOGNIZED");
/// ```
///
/// # Rejected inputs
///
/// A struct:
///
/// ```compile_fail
/// use unistate_macros::Action;
///
/// #[derive(Action, Debug)]
/// struct Increment;
/// ```
///
/// No `#[unrecognized]` variant:
///
/// ```compile_fail
/// use unistate_macros::Action;
///
/// #[derive(Action, Debug)]
/// enum CounterAction {
///     Increment,
///     Decrement,
/// }
/// ```
///
/// Two `#[unrecognized]` variants:
///
/// ```compile_fail
/// use unistate_macros::Action;
///
/// #[derive(Action, Debug)]
/// enum CounterAction {
///     Increment,
///     #[unrecognized]
///     Unknown,
///     #[unrecognized]
///     Other,
/// }
/// ```
///
/// An `#[unrecognized]` variant with fields:
///
/// ```compile_fail
/// use unistate_macros::Action;
///
/// #[derive(Action, Debug)]
/// enum CounterAction {
///     Increment,
///     #[unrecognized]
///     Unrecognized { raw: String },
/// }
/// ```
#[proc_macro_derive(Action, attributes(unrecognized))]
pub fn derive_action(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    expand_action(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Builds the `Action` impl, or the error explaining why `input` is rejected
fn expand_action(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(
            input,
            "#[derive(Action)] can only be used on enums",
        ));
    };

    let mut unrecognized_variants = data_enum
        .variants
        .iter()
        .filter(|variant| has_attribute(&variant.attrs, "unrecognized"));

    let Some(unrecognized) = unrecognized_variants.next() else {
        return Err(syn::Error::new_spanned(
            name,
            "#[derive(Action)] requires one unit variant marked #[unrecognized]",
        ));
    };

    if let Some(duplicate) = unrecognized_variants.next() {
        return Err(syn::Error::new_spanned(
            duplicate,
            "Only one variant may be marked #[unrecognized]",
        ));
    }

    if !matches!(unrecognized.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            unrecognized,
            "The #[unrecognized] variant must be a unit variant",
        ));
    }

    let unrecognized_name = &unrecognized.ident;

    // Generate action_type() match arms
    let action_type_arms = data_enum.variants.iter().map(|variant| {
        let variant_name = &variant.ident;
        let pattern = match &variant.fields {
            Fields::Named(_) => quote! { Self::#variant_name { .. } },
            Fields::Unnamed(_) => quote! { Self::#variant_name(..) },
            Fields::Unit => quote! { Self::#variant_name },
        };

        if variant_name == unrecognized_name {
            quote! { #pattern => ::unistate_core::action::UNRECOGNIZED_TYPE, }
        } else {
            let tag = screaming_snake_case(&variant_name.to_string());
            quote! { #pattern => #tag, }
        }
    });

    Ok(quote! {
        impl #impl_generics ::unistate_core::action::Action for #name #ty_generics #where_clause {
            fn action_type(&self) -> &'static str {
                match self {
                    #(#action_type_arms)*
                }
            }

            fn unrecognized() -> Self {
                Self::#unrecognized_name
            }

            fn is_unrecognized(&self) -> bool {
                matches!(self, Self::#unrecognized_name)
            }
        }
    })
}

/// Converts a `PascalCase` variant name the way serde's `SCREAMING_SNAKE_CASE` does
fn screaming_snake_case(name: &str) -> String {
    let mut tag = String::with_capacity(name.len() + 4);
    for (i, ch) in name.char_indices() {
        if i > 0 && ch.is_uppercase() {
            tag.push('_');
        }
        tag.push(ch.to_ascii_uppercase());
    }
    tag
}

/// Helper function to check if an attribute list contains a specific attribute
fn has_attribute(attrs: &[Attribute], name: &str) -> bool {
    attrs.iter().any(|attr| attr.path().is_ident(name))
}
