//! Implementation of the `#[derive(HasId)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Field, Fields, Index, Member, parse_macro_input};

/// Name of the field attribute that marks the identifier.
const ID_ATTRIBUTE: &str = "id";

/// Name of the field used when no field carries the attribute.
const DEFAULT_ID_FIELD: &str = "id";

/// Main implementation of the `HasId` derive macro.
pub fn derive_has_id_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => match select_id_field(&input, &data_struct.fields) {
            Ok((member, field)) => generate_impl(&input, &member, field),
            Err(error) => error.to_compile_error(),
        },
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "HasId can only be derived for structs, not enums. Implement HasId manually.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "HasId cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// Returns `true` if the field carries a bare `#[id]` attribute.
fn is_marked(field: &Field) -> syn::Result<bool> {
    let mut marked = false;
    for attribute in &field.attrs {
        if attribute.path().is_ident(ID_ATTRIBUTE) {
            attribute.meta.require_path_only()?;
            marked = true;
        }
    }
    Ok(marked)
}

fn member_of(position: usize, field: &Field) -> Member {
    match &field.ident {
        Some(ident) => Member::Named(ident.clone()),
        None => Member::Unnamed(Index::from(position)),
    }
}

fn is_named_id(field: &Field) -> bool {
    field
        .ident
        .as_ref()
        .is_some_and(|ident| ident == DEFAULT_ID_FIELD)
}

/// Picks the identifier field of a struct.
fn select_id_field<'a>(
    input: &DeriveInput,
    fields: &'a Fields,
) -> syn::Result<(Member, &'a Field)> {
    if matches!(fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "HasId cannot be derived for unit structs (structs with no fields).",
        ));
    }

    let mut marked = Vec::new();
    for (position, field) in fields.iter().enumerate() {
        if is_marked(field)? {
            marked.push((position, field));
        }
    }

    match marked.as_slice() {
        [(position, field)] => return Ok((member_of(*position, field), *field)),
        [_, (_, second), ..] => {
            return Err(syn::Error::new_spanned(
                second,
                "only one field can be marked with #[id]",
            ));
        }
        [] => {}
    }

    let named_id = fields
        .iter()
        .enumerate()
        .find(|(_, field)| is_named_id(field));
    if let Some((position, field)) = named_id {
        return Ok((member_of(position, field), field));
    }

    if let Fields::Unnamed(unnamed) = fields
        && unnamed.unnamed.len() == 1
    {
        let field = &unnamed.unnamed[0];
        return Ok((member_of(0, field), field));
    }

    Err(syn::Error::new_spanned(
        &input.ident,
        "HasId requires a field named `id` or a field marked with #[id]",
    ))
}

/// Generates the `HasId` impl for the selected field.
fn generate_impl(input: &DeriveInput, member: &Member, field: &Field) -> TokenStream2 {
    let name = &input.ident;
    let field_type = &field.ty;
    let (impl_generics, type_generics, where_clause) = input.generics.split_for_impl();

    quote! {
        impl #impl_generics ::utilkit::models::HasId for #name #type_generics #where_clause {
            type Id = #field_type;

            #[inline]
            fn id(&self) -> Self::Id {
                ::core::clone::Clone::clone(&self.#member)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn select(source: &str) -> syn::Result<String> {
        let input: DeriveInput = syn::parse_str(source)?;
        let Data::Struct(data_struct) = &input.data else {
            panic!("test input must be a struct");
        };
        let (member, _) = select_id_field(&input, &data_struct.fields)?;
        Ok(match member {
            Member::Named(ident) => ident.to_string(),
            Member::Unnamed(index) => index.index.to_string(),
        })
    }

    #[rstest]
    #[case("struct User { id: u64, name: String }", "id")]
    #[case("struct Session { #[id] token: String, id: u64 }", "token")]
    #[case("struct Sku(u32);", "0")]
    #[case("struct Pair(String, #[id] u32);", "1")]
    fn test_select_id_field(#[case] source: &str, #[case] expected: &str) {
        assert_eq!(select(source).unwrap(), expected);
    }

    #[rstest]
    #[case("struct Nothing { name: String }")]
    #[case("struct Pair(u32, u32);")]
    #[case("struct Unit;")]
    #[case("struct Twice { #[id] a: u32, #[id] b: u32 }")]
    #[case("struct Valued { #[id = \"x\"] a: u32 }")]
    fn test_select_id_field_rejects(#[case] source: &str) {
        assert!(select(source).is_err());
    }

    #[rstest]
    fn test_generated_impl_names_trait_path() {
        let input: DeriveInput = syn::parse_str("struct User { id: u64 }").unwrap();
        let Data::Struct(data_struct) = &input.data else {
            unreachable!();
        };
        let (member, field) = select_id_field(&input, &data_struct.fields).unwrap();
        let generated = generate_impl(&input, &member, field).to_string();

        assert!(generated.contains(":: utilkit :: models :: HasId for User"));
        assert!(generated.contains("type Id = u64"));
    }
}
