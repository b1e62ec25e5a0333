use crate::load::{argset_attributes, incompatible_error, reject_unknown};
use crate::model::{DeriveField, DeriveNargs, DeriveValue, FieldKind, SinkKind};
use quote::{quote, ToTokens};

const KINDS: [(&str, FieldKind); 3] = [
    ("positional", FieldKind::Positional),
    ("option", FieldKind::Optional),
    ("switch", FieldKind::Switch),
];

impl TryFrom<&syn::Field> for DeriveField {
    type Error = syn::Error;

    fn try_from(value: &syn::Field) -> Result<Self, Self::Error> {
        let field_name = match &value.ident {
            Some(ident) => ident.clone(),
            None => {
                return Err(syn::Error::new_spanned(
                    value,
                    "Invalid - only named fields may be tagged.",
                ))
            }
        };
        let attributes = argset_attributes(&value.attrs)?.unwrap_or_default();
        reject_unknown(
            &attributes,
            field_name.span(),
            &["positional", "option", "switch"],
            &["name", "help", "nargs"],
        )?;

        let mut kind = None;

        for (singleton, candidate) in KINDS {
            if attributes.singletons.contains(singleton) {
                if let Some((previous, _)) = kind {
                    return Err(incompatible_error(
                        &field_name,
                        format!("#[argset({previous})]"),
                        format!("#[argset({singleton})]"),
                    ));
                }

                kind.replace((singleton, candidate));
            }
        }

        let kind = kind.map_or(FieldKind::Optional, |(_, kind)| kind);
        let sink = sink_kind(&field_name, &value.ty)?;
        let nargs = match attributes.pairs.get("nargs") {
            Some(value) => Some(derive_nargs(&field_name, value)?),
            None => None,
        };

        if kind == FieldKind::Switch {
            if sink == SinkKind::List {
                return Err(incompatible_error(
                    &field_name,
                    "Vec<..>",
                    "#[argset(switch)]",
                ));
            }

            if nargs.is_some() {
                return Err(incompatible_error(
                    &field_name,
                    "#[argset(switch)]",
                    "#[argset(nargs = ..)]",
                ));
            }
        }

        let name = match attributes.pairs.get("name") {
            Some(value) => value.clone(),
            None => {
                let name = field_name.to_string().replace('_', "-");
                DeriveValue {
                    tokens: quote! { #name },
                }
            }
        };

        Ok(DeriveField {
            field_name,
            name,
            kind,
            sink,
            help: attributes.pairs.get("help").cloned(),
            nargs,
        })
    }
}

fn sink_kind(field_name: &syn::Ident, ty: &syn::Type) -> Result<SinkKind, syn::Error> {
    match ty {
        syn::Type::Path(path) => match path.path.segments.last() {
            Some(segment) if segment.ident == "Vec" => Ok(SinkKind::List),
            Some(_) => Ok(SinkKind::Scalar),
            None => Err(syn::Error::new(
                field_name.span(),
                "Invalid - empty field type.",
            )),
        },
        _ => Err(syn::Error::new(
            field_name.span(),
            format!(
                "Invalid - unsupported field type `{}`.",
                ty.to_token_stream()
            ),
        )),
    }
}

// Accepts `N`, `-1`, or `unlimited`.
fn derive_nargs(field_name: &syn::Ident, value: &DeriveValue) -> Result<DeriveNargs, syn::Error> {
    let invalid = || {
        syn::Error::new(
            field_name.span(),
            format!(
                "Invalid - nargs expecting a non-negative integer, `-1`, or `unlimited`, found `{}`.",
                value.tokens
            ),
        )
    };
    let expression: syn::Expr = syn::parse2(value.tokens.clone()).map_err(|_| invalid())?;

    match expression {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(int),
            ..
        }) => int
            .base10_parse::<usize>()
            .map(DeriveNargs::Precisely)
            .map_err(|_| invalid()),
        syn::Expr::Unary(syn::ExprUnary {
            op: syn::UnOp::Neg(_),
            expr,
            ..
        }) => match *expr {
            syn::Expr::Lit(syn::ExprLit {
                lit: syn::Lit::Int(int),
                ..
            }) if int.base10_digits() == "1" => Ok(DeriveNargs::Unlimited),
            _ => Err(invalid()),
        },
        syn::Expr::Path(path) if path.path.is_ident("unlimited") => Ok(DeriveNargs::Unlimited),
        _ => Err(invalid()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::assert_contains;
    use proc_macro2::Span;
    use rstest::rstest;
    use syn::parse_quote;

    fn ident(name: &str) -> syn::Ident {
        syn::Ident::new(name, Span::call_site())
    }

    #[test]
    fn construct_field_defaults() {
        let field: syn::Field = parse_quote! {
            #[argset()]
            emp_id: u32
        };

        let derive_field = DeriveField::try_from(&field).unwrap();

        assert_eq!(
            derive_field,
            DeriveField {
                field_name: ident("emp_id"),
                name: DeriveValue {
                    tokens: quote! { "emp-id" },
                },
                kind: FieldKind::Optional,
                sink: SinkKind::Scalar,
                help: None,
                nargs: None,
            }
        );
    }

    #[test]
    fn construct_field() {
        let field: syn::Field = parse_quote! {
            #[argset(positional, name = "id", help = "The ids.", nargs = 3)]
            emp_id: std::vec::Vec<u32>
        };

        let derive_field = DeriveField::try_from(&field).unwrap();

        assert_eq!(
            derive_field,
            DeriveField {
                field_name: ident("emp_id"),
                name: DeriveValue {
                    tokens: quote! { "id" },
                },
                kind: FieldKind::Positional,
                sink: SinkKind::List,
                help: Some(DeriveValue {
                    tokens: quote! { "The ids." },
                }),
                nargs: Some(DeriveNargs::Precisely(3)),
            }
        );
    }

    #[rstest]
    #[case(quote! { 0 }, DeriveNargs::Precisely(0))]
    #[case(quote! { 2 }, DeriveNargs::Precisely(2))]
    #[case(quote! { -1 }, DeriveNargs::Unlimited)]
    #[case(quote! { unlimited }, DeriveNargs::Unlimited)]
    fn construct_nargs(#[case] tokens: proc_macro2::TokenStream, #[case] expected: DeriveNargs) {
        let nargs = derive_nargs(&ident("field"), &DeriveValue { tokens }).unwrap();
        assert_eq!(nargs, expected);
    }

    #[rstest]
    #[case(quote! { -2 })]
    #[case(quote! { "3" })]
    #[case(quote! { many })]
    #[case(quote! { 1.5 })]
    fn construct_nargs_invalid(#[case] tokens: proc_macro2::TokenStream) {
        let error = derive_nargs(&ident("field"), &DeriveValue { tokens }).unwrap_err();
        assert_contains!(error.to_string(), "Invalid - nargs expecting");
    }

    #[rstest]
    #[case(parse_quote! { #[argset(positional, option)] a: u32 }, "`#[argset(positional)]` and `#[argset(option)]`")]
    #[case(parse_quote! { #[argset(option, switch)] a: bool }, "`#[argset(option)]` and `#[argset(switch)]`")]
    #[case(parse_quote! { #[argset(switch)] a: Vec<bool> }, "`Vec<..>` and `#[argset(switch)]`")]
    #[case(parse_quote! { #[argset(switch, nargs = 1)] a: bool }, "`#[argset(switch)]` and `#[argset(nargs = ..)]`")]
    #[case(parse_quote! { #[argset(short = 'a')] a: bool }, "unknown attribute `short`")]
    #[case(parse_quote! { #[argset(required)] a: bool }, "unknown attribute `required`")]
    #[case(parse_quote! { #[argset()] a: (u32, u32) }, "unsupported field type")]
    fn construct_field_invalid(#[case] field: syn::Field, #[case] expected: &str) {
        let error = DeriveField::try_from(&field).unwrap_err();
        assert_contains!(error.to_string(), expected);
    }
}
