//! Derive macro for the `GraphQLType` trait.
//!
//! Describes a struct as a schema type so the compiler can synthesize default
//! selections and apply wire-name overrides for it. The struct shape IS the
//! schema type.
//!
//! # Usage
//!
//! ```ignore
//! use gqlselect_sdk::GraphQLType;
//!
//! #[derive(GraphQLType)]
//! #[graphql(rename_all = "camelCase")]
//! struct User {
//!     id: String,
//!     display_name: String,
//!     #[graphql(name = "mail")]
//!     email: Option<String>,
//!     #[graphql(nested)]
//!     team: Option<Team>,
//! }
//! ```
//!
//! Describes `User` with simple members `id`, `display_name` (wire name
//! `displayName`) and `email` (wire name `mail`), plus a composite `team`
//! member of type `<Team as GraphQLType>::type_name()`.

use heck::ToLowerCamelCase;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, LitStr, Type};

/// Derive `GraphQLType` for a struct.
///
/// Each field becomes a member of the described type:
/// - Plain fields → simple members, part of the default selection
/// - `#[graphql(nested)]` fields → composite members typed by the inner type
/// - `#[graphql(name = "...")]` → wire-name override
#[proc_macro_derive(GraphQLType, attributes(graphql))]
pub fn derive_graphql_type(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

#[derive(Default)]
struct ContainerAttrs {
    name: Option<String>,
    camel_case: bool,
}

#[derive(Default)]
struct FieldAttrs {
    name: Option<String>,
    nested: bool,
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let ident = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    input,
                    "GraphQLType can only be derived on structs with named fields",
                ));
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                input,
                "GraphQLType can only be derived on structs",
            ));
        }
    };

    let container = container_attrs(input)?;
    let type_name = container.name.unwrap_or_else(|| ident.to_string());

    let mut members = Vec::new();
    for field in fields {
        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let attrs = field_attrs(field)?;

        // Handle raw identifiers (r#type → type).
        let rust_name = field_ident.to_string();
        let declared = rust_name.strip_prefix("r#").unwrap_or(&rust_name).to_string();

        let wire = attrs.name.or_else(|| {
            let camel = declared.to_lower_camel_case();
            (container.camel_case && camel != declared).then_some(camel)
        });

        let inner_ty = unwrap_type(&field.ty);
        let is_list = is_vec(&field.ty);
        let named = if attrs.nested {
            quote! { ::gqlselect_sdk::TypeRef::named(<#inner_ty as ::gqlselect_sdk::GraphQLType>::type_name()) }
        } else {
            let scalar = type_label(inner_ty);
            quote! { ::gqlselect_sdk::TypeRef::named(#scalar) }
        };
        let ty = if is_list {
            quote! { ::gqlselect_sdk::TypeRef::list(#named) }
        } else {
            named
        };

        let mut member = if attrs.nested {
            quote! { ::gqlselect_sdk::MemberDescription::object(#declared, #ty) }
        } else {
            quote! { ::gqlselect_sdk::MemberDescription::scalar(#declared, #ty) }
        };
        if let Some(wire) = wire {
            member = quote! { #member.wire_name(#wire) };
        }
        members.push(member);
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::gqlselect_sdk::GraphQLType for #ident #ty_generics #where_clause {
            fn type_name() -> &'static str {
                #type_name
            }

            fn describe() -> ::gqlselect_sdk::TypeDescription {
                ::gqlselect_sdk::TypeDescription::object(#type_name)
                    #(.member(#members))*
            }
        }
    })
}

fn container_attrs(input: &DeriveInput) -> syn::Result<ContainerAttrs> {
    let mut attrs = ContainerAttrs::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("graphql")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                attrs.name = Some(lit.value());
                Ok(())
            } else if meta.path.is_ident("rename_all") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value() != "camelCase" {
                    return Err(meta.error("only rename_all = \"camelCase\" is supported"));
                }
                attrs.camel_case = true;
                Ok(())
            } else {
                Err(meta.error("unknown graphql container attribute"))
            }
        })?;
    }
    Ok(attrs)
}

fn field_attrs(field: &syn::Field) -> syn::Result<FieldAttrs> {
    let mut attrs = FieldAttrs::default();
    for attr in field.attrs.iter().filter(|a| a.path().is_ident("graphql")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("nested") {
                attrs.nested = true;
                Ok(())
            } else if meta.path.is_ident("name") {
                let lit: LitStr = meta.value()?.parse()?;
                attrs.name = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unknown graphql field attribute"))
            }
        })?;
    }
    Ok(attrs)
}

/// Unwrap wrapper types to get the "leaf" type.
/// `Option<Box<Foo>>` → `Foo`, `Vec<Bar>` → `Bar`, `Option<Vec<Baz>>` → `Baz`, etc.
fn unwrap_type(ty: &Type) -> &Type {
    match wrapper(ty) {
        Some((_, inner)) => unwrap_type(inner),
        None => ty,
    }
}

/// Whether a `Vec` appears anywhere in the wrapper chain.
fn is_vec(ty: &Type) -> bool {
    match wrapper(ty) {
        Some((ident, inner)) => ident == "Vec" || is_vec(inner),
        None => false,
    }
}

fn wrapper(ty: &Type) -> Option<(String, &Type)> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    let segment = type_path.path.segments.last()?;
    let ident = segment.ident.to_string();
    if ident != "Option" && ident != "Vec" && ident != "Box" {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some((ident, inner)),
        _ => None,
    }
}

/// Last path segment of a leaf type, used as its scalar name.
fn type_label(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .last()
            .map(|s| s.ident.to_string())
            .unwrap_or_default(),
        other => quote!(#other).to_string(),
    }
}
