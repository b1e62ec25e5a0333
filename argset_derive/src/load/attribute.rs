use crate::model::{DeriveValue, IntermediateAttributes};
use quote::ToTokens;
use std::collections::{HashMap, HashSet};

impl TryFrom<&syn::Attribute> for IntermediateAttributes {
    type Error = syn::Error;

    fn try_from(value: &syn::Attribute) -> Result<Self, Self::Error> {
        let attributes_parser =
            syn::punctuated::Punctuated::<syn::Expr, syn::Token![,]>::parse_terminated;
        let expressions = value.parse_args_with(attributes_parser)?;
        let mut singletons = HashSet::default();
        let mut pairs = HashMap::default();

        for expression in expressions {
            match expression {
                syn::Expr::Assign(assignment) => {
                    let left = assignment.left.to_token_stream().to_string();

                    if pairs.contains_key(&left) {
                        return Err(syn::Error::new_spanned(
                            assignment,
                            format!("Invalid - attribute `{left}` specified more than once."),
                        ));
                    }

                    pairs.insert(
                        left,
                        DeriveValue {
                            tokens: assignment.right.to_token_stream(),
                        },
                    );
                }
                syn::Expr::Path(ref path) => match path.path.get_ident() {
                    Some(ident) => {
                        singletons.insert(ident.to_string());
                    }
                    None => {
                        return Err(syn::Error::new_spanned(
                            &expression,
                            "Invalid - expecting a plain attribute name.",
                        ));
                    }
                },
                _ => {
                    return Err(syn::Error::new_spanned(
                        &expression,
                        format!(
                            "Invalid - unparseable attribute `{}`.",
                            expression.to_token_stream()
                        ),
                    ));
                }
            };
        }

        Ok(Self { singletons, pairs })
    }
}
