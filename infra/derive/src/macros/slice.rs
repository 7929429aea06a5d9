use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Error, Ident, ItemStruct};

/// Expands `#[amia_slice(FLAG)]`, where `FLAG` names a `FeatureSet` constant.
pub fn expand_slice(args: TokenStream, input: ItemStruct) -> TokenStream {
    let flag = match syn::parse2::<Ident>(args.clone()) {
        Ok(flag) => flag,
        Err(_) => {
            let span_target = if args.is_empty() { quote! { #input } } else { args };
            return Error::new_spanned(
                span_target,
                "amia_slice expects the feature flag it serves, e.g. #[amia_slice(QUESTIONS)]",
            )
            .to_compile_error();
        }
    };

    let handle = &input.ident;
    let vis = &input.vis;
    let fields = &input.fields;
    let attrs = &input.attrs;
    let inner = format_ident!("{handle}Inner");

    let body = match fields {
        syn::Fields::Named(_) => quote! { #fields },
        _ => quote! { #fields; },
    };

    quote! {
        #(#attrs)*
        #[derive(Debug, Clone)]
        #vis struct #inner #body

        #[derive(Debug, Clone)]
        #vis struct #handle {
            inner: ::std::sync::Arc<#inner>,
        }

        impl #handle {
            #[must_use]
            pub fn new(inner: #inner) -> Self {
                Self { inner: ::std::sync::Arc::new(inner) }
            }
        }

        impl ::std::ops::Deref for #handle {
            type Target = #inner;

            fn deref(&self) -> &Self::Target {
                &self.inner
            }
        }

        impl ::amia_kernel::domain::registry::FeatureSlice for #handle {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn feature(&self) -> ::amia_kernel::domain::features::FeatureSet {
                ::amia_kernel::domain::features::FeatureSet::#flag
            }
        }
    }
}
