use crate::model::DeriveArgSet;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl From<DeriveArgSet> for TokenStream2 {
    fn from(value: DeriveArgSet) -> Self {
        let DeriveArgSet {
            struct_name,
            description,
            prefix,
            fields,
        } = value;
        let parent = quote! { self };
        let fields: Vec<TokenStream2> = fields
            .into_iter()
            .map(|field| field.generate(&parent))
            .collect();

        let mut arg_set = match prefix {
            Some(prefix) => {
                let prefix = prefix.tokens;
                quote! {
                    ::argset::ArgSet::with_config(::argset::ArgSetConfig {
                        option_prefix: ::std::string::ToString::to_string(#prefix),
                        ..::std::default::Default::default()
                    })
                }
            }
            None => quote! { ::argset::ArgSet::new() },
        };

        if let Some(description) = description {
            let description = description.tokens;
            arg_set = quote! { #arg_set.description(#description) };
        }

        quote! {
            impl #struct_name {
                /// Declare every tagged field of this struct onto a fresh `ArgSet`.
                pub fn arg_set(&mut self) -> ::std::result::Result<::argset::ArgSet<'_>, ::argset::ConfigError> {
                    ::argset::DeclarativeBuilder::new(#arg_set)
                        #( #fields )*
                        .build()
                }
            }
        }
    }
}
