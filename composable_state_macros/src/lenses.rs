use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields};

use crate::has_skip;

pub fn derive_lenses(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let vis = &input.vis;
    let lenses_name = format_ident!("{}Lenses", name);

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Lenses derive does not support generic structs",
        ));
    }

    let fields = match &input.data {
        Data::Struct(data_struct) => match &data_struct.fields {
            Fields::Named(fields) => &fields.named,
            _ => {
                return Err(syn::Error::new_spanned(
                    name,
                    "Lenses derive only supports structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                name,
                "Lenses derive only supports structs",
            ))
        }
    };

    let mut lens_fns = Vec::new();
    for field in fields {
        if has_skip(&field.attrs, "lens")? {
            continue;
        }

        // Named fields always carry an ident.
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;
        let field_vis = &field.vis;
        let doc = format!("Lens focusing `{}::{}`.", name, ident);

        lens_fns.push(quote! {
            #[doc = #doc]
            #field_vis fn #ident() -> composable_state::Lens<#name, #ty> {
                composable_state::Lens::<#name, #ty>::field(
                    |whole: &#name| &whole.#ident,
                    |whole: &mut #name| &mut whole.#ident,
                )
            }
        });
    }

    let doc = format!("Field lenses for [`{}`].", name);
    Ok(quote! {
        #[doc = #doc]
        #[allow(dead_code)]
        #[derive(Debug, Clone, Copy)]
        #vis struct #lenses_name;

        #[allow(dead_code)]
        impl #lenses_name {
            #(#lens_fns)*
        }
    })
}
