//! `#[derive(Encodable)]` macro implementation.

use proc_macro2::TokenStream;
use quote::quote;

/// Generates code of `#[derive(Encodable)]` macro expansion.
///
/// # Errors
///
/// If the input is not a named-field (or unit) struct, a unit-variant
/// enum, or carries an unknown helper attribute.
pub(crate) fn derive(input: TokenStream) -> syn::Result<TokenStream> {
    let input = syn::parse2::<syn::DeriveInput>(input)?;
    match &input.data {
        syn::Data::Struct(data) => expand_record(&input, data),
        syn::Data::Enum(data) => expand_symbol(&input, data),
        syn::Data::Union(_) => Err(syn::Error::new_spanned(
            &input.ident,
            "#[derive(Encodable)] does not support unions",
        )),
    }
}

/// How one struct field participates in encoding.
enum FieldKind {
    /// Ordinary instance field, encoded under its declared name.
    Plain,
    /// Embedded ancestor record: fields spliced in at this position,
    /// lineage appended after the deriving type's own name.
    Base,
    /// Excluded from the document entirely.
    Skip,
}

fn field_kind(field: &syn::Field) -> syn::Result<FieldKind> {
    let mut kind = FieldKind::Plain;
    for attr in &field.attrs {
        if !attr.path().is_ident("encodable") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("base") {
                kind = FieldKind::Base;
                Ok(())
            } else if meta.path.is_ident("skip") {
                kind = FieldKind::Skip;
                Ok(())
            } else {
                Err(meta.error("expected `base` or `skip`"))
            }
        })?;
    }
    Ok(kind)
}

fn expand_record(input: &syn::DeriveInput, data: &syn::DataStruct) -> syn::Result<TokenStream> {
    let fields: Vec<&syn::Field> = match &data.fields {
        syn::Fields::Named(named) => named.named.iter().collect(),
        syn::Fields::Unit => Vec::new(),
        syn::Fields::Unnamed(_) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "#[derive(Encodable)] requires named fields; records are encoded by field name",
            ));
        }
    };

    let ident = &input.ident;
    let name = ident.to_string();
    let (impl_gens, ty_gens, where_clause) = input.generics.split_for_impl();

    let mut base: Option<&syn::Ident> = None;
    let mut field_stmts = Vec::new();
    for field in fields {
        let Some(field_ident) = &field.ident else {
            continue;
        };
        match field_kind(field)? {
            FieldKind::Skip => {}
            FieldKind::Base => {
                if base.is_some() {
                    return Err(syn::Error::new_spanned(
                        field_ident,
                        "at most one field may be marked #[encodable(base)]",
                    ));
                }
                base = Some(field_ident);
                field_stmts.push(quote! {
                    fields.extend(::jsonizer::Encodable::fields(&self.#field_ident));
                });
            }
            FieldKind::Plain => {
                let field_name = field_ident.to_string();
                field_stmts.push(quote! {
                    fields.push(::jsonizer::Field {
                        name: #field_name,
                        value: ::jsonizer::AsNode::as_node(&self.#field_ident),
                    });
                });
            }
        }
    }

    let base_lineage = base.map(|field_ident| {
        quote! {
            lineage.extend(::jsonizer::Encodable::lineage(&self.#field_ident));
        }
    });

    // A record without instance fields never mutates the accumulator.
    let mut_allow = field_stmts
        .is_empty()
        .then(|| quote! { #[allow(unused_mut)] });

    Ok(quote! {
        #[automatically_derived]
        impl #impl_gens ::jsonizer::Encodable for #ident #ty_gens #where_clause {
            fn lineage(&self) -> ::std::vec::Vec<&'static str> {
                let mut lineage = ::std::vec::Vec::new();
                lineage.push(::core::concat!(::core::module_path!(), "::", #name));
                #base_lineage
                lineage
            }

            fn fields(&self) -> ::std::vec::Vec<::jsonizer::Field<'_>> {
                #mut_allow
                let mut fields = ::std::vec::Vec::new();
                #(#field_stmts)*
                fields
            }
        }

        #[automatically_derived]
        impl #impl_gens ::jsonizer::AsNode for #ident #ty_gens #where_clause {
            fn as_node(&self) -> ::jsonizer::Node<'_> {
                ::jsonizer::Node::Record(self)
            }
        }
    })
}

fn expand_symbol(input: &syn::DeriveInput, data: &syn::DataEnum) -> syn::Result<TokenStream> {
    let mut arms = Vec::new();
    for variant in &data.variants {
        if !matches!(variant.fields, syn::Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "#[derive(Encodable)] on an enum requires unit variants; \
                 a variant carrying data has no symbolic name",
            ));
        }
        let variant_ident = &variant.ident;
        let variant_name = variant_ident.to_string();
        arms.push(quote! { Self::#variant_ident => #variant_name, });
    }

    let ident = &input.ident;
    let (impl_gens, ty_gens, where_clause) = input.generics.split_for_impl();

    let body = if arms.is_empty() {
        // Uninhabited enum: no values, nothing to name.
        quote! { match *self {} }
    } else {
        quote! { match self { #(#arms)* } }
    };

    Ok(quote! {
        #[automatically_derived]
        impl #impl_gens ::jsonizer::Symbolic for #ident #ty_gens #where_clause {
            fn symbol(&self) -> &'static str {
                #body
            }
        }

        #[automatically_derived]
        impl #impl_gens ::jsonizer::AsNode for #ident #ty_gens #where_clause {
            fn as_node(&self) -> ::jsonizer::Node<'_> {
                ::jsonizer::Node::Symbol(::jsonizer::Symbolic::symbol(self))
            }
        }
    })
}
