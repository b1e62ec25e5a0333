use proc_macro2::TokenStream as TokenStream2;
use std::collections::{HashMap, HashSet};

#[derive(Debug, Clone)]
pub struct DeriveValue {
    pub tokens: TokenStream2,
}

impl PartialEq for DeriveValue {
    fn eq(&self, other: &Self) -> bool {
        self.tokens.to_string() == other.tokens.to_string()
    }
}

impl Eq for DeriveValue {}

/// The raw contents of an `#[argset(..)]` attribute.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct IntermediateAttributes {
    pub singletons: HashSet<String>,
    pub pairs: HashMap<String, DeriveValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Positional,
    Optional,
    Switch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Scalar,
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeriveNargs {
    Precisely(usize),
    Unlimited,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveField {
    pub field_name: syn::Ident,
    pub name: DeriveValue,
    pub kind: FieldKind,
    pub sink: SinkKind,
    pub help: Option<DeriveValue>,
    pub nargs: Option<DeriveNargs>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct DeriveArgSet {
    pub struct_name: syn::Ident,
    pub description: Option<DeriveValue>,
    pub prefix: Option<DeriveValue>,
    pub fields: Vec<DeriveField>,
}
