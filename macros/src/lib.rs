use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::parse::Parser;

#[proc_macro]
pub fn gen_model(input: TokenStream) -> TokenStream {
    let mut input = syn::parse_macro_input!(input as syn::ItemStruct);

    if !input.generics.params.is_empty() {
        return quote! {
            compile_error!("Models can not be generic.")
        }
        .into();
    }

    let syn::Fields::Named(ref mut named) = input.fields else {
        return quote! {
            compile_error!("Models must use named fields.")
        }
        .into();
    };

    if !(3..=4).contains(&named.named.len()) {
        return quote! {
            compile_error!("Models must have 3 or 4 fields, one for each component of the color.")
        }
        .into();
    }

    // Make sure the specified fields are public.
    named.named.iter_mut().for_each(|f| {
        f.vis = syn::Visibility::Public(Default::default());
    });

    let field_names = named
        .named
        .iter()
        .filter_map(|f| f.ident.clone())
        .collect::<Vec<_>>();
    let field_types = named
        .named
        .iter()
        .map(|f| f.ty.clone())
        .collect::<Vec<_>>();

    // Components are plain integers, so every model is a value type.
    let attr = syn::Attribute::parse_outer
        .parse2(syn::parse_quote! {
            #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        })
        .unwrap();
    input.attrs.extend(attr);

    let struct_name = input.ident.clone();
    let notation = struct_name.to_string().to_case(Case::Flat);

    let new_impl: proc_macro2::TokenStream = quote! {
        impl #struct_name {
            /// The lowercase name of this notation, as used in functional
            /// notation, e.g. `rgb(...)`.
            pub const NOTATION: &'static str = #notation;

            /// Create a new color in this notation.
            pub const fn new(#(#field_names: #field_types),*) -> Self {
                Self {
                    #(#field_names,)*
                }
            }

            /// Return the components of this color as a tuple.
            pub fn to_tuple(&self) -> (#(#field_types),*) {
                (#(self.#field_names),*)
            }
        }

        impl From<(#(#field_types),*)> for #struct_name {
            fn from((#(#field_names),*): (#(#field_types),*)) -> Self {
                Self::new(#(#field_names),*)
            }
        }

        impl From<#struct_name> for (#(#field_types),*) {
            fn from(value: #struct_name) -> Self {
                value.to_tuple()
            }
        }
    };

    quote! {
        #input
        #new_impl
    }
    .into()
}
