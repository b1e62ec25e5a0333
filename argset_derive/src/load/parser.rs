use crate::load::{argset_attributes, reject_unknown};
use crate::model::{DeriveArgSet, DeriveField};

impl TryFrom<syn::DeriveInput> for DeriveArgSet {
    type Error = syn::Error;

    fn try_from(value: syn::DeriveInput) -> Result<Self, Self::Error> {
        let attributes = argset_attributes(&value.attrs)?.unwrap_or_default();
        reject_unknown(
            &attributes,
            value.ident.span(),
            &[],
            &["description", "prefix"],
        )?;

        let fields = match &value.data {
            syn::Data::Struct(syn::DataStruct {
                fields: syn::Fields::Named(fields),
                ..
            }) => fields
                .named
                .iter()
                // Only the tagged fields participate.
                .filter(|field| field.attrs.iter().any(|a| a.path().is_ident("argset")))
                .map(DeriveField::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            syn::Data::Struct(_) => Vec::default(),
            _ => {
                return Err(syn::Error::new(
                    value.ident.span(),
                    "Invalid - `ArgSetFrom` may only be derived on a struct.",
                ))
            }
        };

        Ok(DeriveArgSet {
            struct_name: value.ident.clone(),
            description: attributes.pairs.get("description").cloned(),
            prefix: attributes.pairs.get("prefix").cloned(),
            fields,
        })
    }
}
