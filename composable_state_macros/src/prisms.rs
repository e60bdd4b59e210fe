use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Variant};

use crate::case::snake_ident;
use crate::has_skip;

pub fn derive_prisms(input: TokenStream) -> TokenStream {
    let input = syn::parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => TokenStream::from(err.to_compile_error()),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let vis = &input.vis;
    let prisms_name = format_ident!("{}Prisms", name);

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Prisms derive does not support generic enums",
        ));
    }

    let Data::Enum(data_enum) = &input.data else {
        return Err(syn::Error::new_spanned(name, "Prisms derive only supports enums"));
    };

    let mut prism_fns = Vec::new();
    for variant in &data_enum.variants {
        if has_skip(&variant.attrs, "prism")? {
            continue;
        }
        prism_fns.push(prism_fn(name, vis, variant));
    }

    let doc = format!("Variant prisms for [`{}`].", name);
    Ok(quote! {
        #[doc = #doc]
        #[allow(dead_code)]
        #[derive(Debug, Clone, Copy)]
        #vis struct #prisms_name;

        #[allow(dead_code)]
        impl #prisms_name {
            #(#prism_fns)*
        }
    })
}

fn prism_fn(name: &syn::Ident, vis: &syn::Visibility, variant: &Variant) -> proc_macro2::TokenStream {
    let variant_name = &variant.ident;
    let fn_name = snake_ident(variant_name);
    let doc = format!("Prism focusing `{}::{}`.", name, variant_name);

    // (focus type, match pattern, previewed value, review closure)
    let (focus, pattern, matched, review) = match &variant.fields {
        Fields::Unit => (
            quote! { () },
            quote! { #name::#variant_name },
            quote! { () },
            quote! { |()| #name::#variant_name },
        ),
        Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
            let ty = &fields.unnamed[0].ty;
            (
                quote! { #ty },
                quote! { #name::#variant_name(part) },
                quote! { ::core::clone::Clone::clone(part) },
                quote! { #name::#variant_name },
            )
        }
        Fields::Unnamed(fields) => {
            let tys: Vec<_> = fields.unnamed.iter().map(|f| &f.ty).collect();
            let binds: Vec<_> = (0..tys.len()).map(|i| format_ident!("field{}", i)).collect();
            (
                quote! { (#(#tys),*) },
                quote! { #name::#variant_name(#(#binds),*) },
                quote! { (#(::core::clone::Clone::clone(#binds)),*) },
                quote! { |(#(#binds),*)| #name::#variant_name(#(#binds),*) },
            )
        }
        Fields::Named(fields) if fields.named.len() == 1 => {
            let field = &fields.named[0];
            let ty = &field.ty;
            let ident = &field.ident;
            (
                quote! { #ty },
                quote! { #name::#variant_name { #ident } },
                quote! { ::core::clone::Clone::clone(#ident) },
                quote! { |#ident| #name::#variant_name { #ident } },
            )
        }
        Fields::Named(fields) => {
            let tys: Vec<_> = fields.named.iter().map(|f| &f.ty).collect();
            let idents: Vec<_> = fields.named.iter().map(|f| &f.ident).collect();
            (
                quote! { (#(#tys),*) },
                quote! { #name::#variant_name { #(#idents),* } },
                quote! { (#(::core::clone::Clone::clone(#idents)),*) },
                quote! { |(#(#idents),*)| #name::#variant_name { #(#idents),* } },
            )
        }
    };

    quote! {
        #[doc = #doc]
        #vis fn #fn_name() -> composable_state::Prism<#name, #focus> {
            composable_state::Prism::<#name, #focus>::new(
                |whole: &#name| match whole {
                    #pattern => ::core::option::Option::Some(#matched),
                    #[allow(unreachable_patterns)]
                    _ => ::core::option::Option::None,
                },
                #review,
            )
        }
    }
}
