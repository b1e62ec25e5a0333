mod attribute;
mod field;
mod parser;

use crate::model::IntermediateAttributes;

pub(self) fn incompatible_error(
    field_name: &syn::Ident,
    left: impl Into<String>,
    right: impl Into<String>,
) -> syn::Error {
    syn::Error::new(
        field_name.span(),
        format!(
            "Invalid - field cannot be both `{}` and `{}`.",
            left.into(),
            right.into(),
        ),
    )
}

// Collects the `#[argset(..)]` attribute, if present.
pub(self) fn argset_attributes(
    attrs: &[syn::Attribute],
) -> Result<Option<IntermediateAttributes>, syn::Error> {
    let mut attributes = None;

    for attribute in attrs {
        if attribute.path().is_ident("argset") {
            if attributes.is_some() {
                return Err(syn::Error::new_spanned(
                    attribute,
                    "Invalid - `#[argset(..)]` may only be specified once.",
                ));
            }

            attributes.replace(IntermediateAttributes::try_from(attribute)?);
        }
    }

    Ok(attributes)
}

pub(self) fn reject_unknown(
    attributes: &IntermediateAttributes,
    span: proc_macro2::Span,
    singletons: &[&str],
    pairs: &[&str],
) -> Result<(), syn::Error> {
    let mut unknown: Vec<&String> = attributes
        .singletons
        .iter()
        .filter(|s| !singletons.contains(&s.as_str()))
        .chain(
            attributes
                .pairs
                .keys()
                .filter(|p| !pairs.contains(&p.as_str())),
        )
        .collect();
    unknown.sort();

    match unknown.first() {
        Some(name) => Err(syn::Error::new(
            span,
            format!("Invalid - unknown attribute `{name}`."),
        )),
        None => Ok(()),
    }
}
