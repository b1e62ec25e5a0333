use crate::model::{DeriveField, DeriveNargs, FieldKind, SinkKind};
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

impl DeriveField {
    /// Generate the `.field(..)` call declaring this field onto a `DeriveBuilder`, borrowing it from `parent`.
    pub(crate) fn generate(self, parent: &TokenStream2) -> TokenStream2 {
        let DeriveField {
            field_name,
            name,
            kind,
            sink,
            help,
            nargs,
        } = self;
        let name = name.tokens;
        let sink = match sink {
            SinkKind::Scalar => quote! { ::argset::Scalar::new(&mut #parent.#field_name) },
            SinkKind::List => quote! { ::argset::List::new(&mut #parent.#field_name) },
        };
        let kind = match kind {
            FieldKind::Positional => quote! { ::argset::FieldKind::Positional },
            FieldKind::Optional => quote! { ::argset::FieldKind::Optional },
            FieldKind::Switch => quote! { ::argset::FieldKind::Switch },
        };
        let mut spec = quote! { ::argset::FieldSpec::new(#name).kind(#kind) };

        if let Some(help) = help {
            let help = help.tokens;
            spec = quote! { #spec.help(#help) };
        }

        if let Some(nargs) = nargs {
            let nargs = match nargs {
                DeriveNargs::Precisely(n) => quote! { ::argset::Nargs::Precisely(#n) },
                DeriveNargs::Unlimited => quote! { ::argset::Nargs::Unlimited },
            };
            spec = quote! { #spec.nargs(#nargs) };
        }

        quote! {
            .field(#sink, #spec)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DeriveValue;
    use proc_macro2::Span;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    #[test]
    fn render_field_scalar() {
        let field = DeriveField {
            field_name: ident("salary"),
            name: DeriveValue {
                tokens: quote! { "salary" },
            },
            kind: FieldKind::Positional,
            sink: SinkKind::Scalar,
            help: None,
            nargs: None,
        };

        let token_stream = field.generate(&quote! { self });

        assert_eq!(
            token_stream.to_string(),
            quote! {
                .field(
                    ::argset::Scalar::new(&mut self.salary),
                    ::argset::FieldSpec::new("salary").kind(::argset::FieldKind::Positional)
                )
            }
            .to_string()
        );
    }

    #[test]
    fn render_field_list() {
        let field = DeriveField {
            field_name: ident("emp_ids"),
            name: DeriveValue {
                tokens: quote! { "ids" },
            },
            kind: FieldKind::Optional,
            sink: SinkKind::List,
            help: Some(DeriveValue {
                tokens: quote! { "The ids." },
            }),
            nargs: Some(DeriveNargs::Unlimited),
        };

        let token_stream = field.generate(&quote! { target });

        assert_eq!(
            token_stream.to_string(),
            quote! {
                .field(
                    ::argset::List::new(&mut target.emp_ids),
                    ::argset::FieldSpec::new("ids")
                        .kind(::argset::FieldKind::Optional)
                        .help("The ids.")
                        .nargs(::argset::Nargs::Unlimited)
                )
            }
            .to_string()
        );
    }

    #[test]
    fn render_field_precisely() {
        let field = DeriveField {
            field_name: ident("pair"),
            name: DeriveValue {
                tokens: quote! { "pair" },
            },
            kind: FieldKind::Optional,
            sink: SinkKind::List,
            help: None,
            nargs: Some(DeriveNargs::Precisely(2)),
        };

        let token_stream = field.generate(&quote! { self });

        assert_eq!(
            token_stream.to_string(),
            quote! {
                .field(
                    ::argset::List::new(&mut self.pair),
                    ::argset::FieldSpec::new("pair")
                        .kind(::argset::FieldKind::Optional)
                        .nargs(::argset::Nargs::Precisely(2usize))
                )
            }
            .to_string()
        );
    }
}
