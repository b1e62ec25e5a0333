extern crate proc_macro;

mod generate;
mod load;
mod model;

use crate::model::DeriveArgSet;
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;

/// Derive an `arg_set(&mut self)` method which binds the `#[argset(..)]` tagged fields to an `ArgSet`.
///
/// Field attributes: `positional`, `option` (the default), `switch`, `name = ".."`, `help = ".."`, `nargs = N | -1 | unlimited`.
/// Struct attributes: `description = ".."`, `prefix = ".."`.
#[proc_macro_derive(ArgSetFrom, attributes(argset))]
pub fn arg_set_from(input: TokenStream) -> TokenStream {
    let derive_input = syn::parse_macro_input!(input as syn::DeriveInput);

    match DeriveArgSet::try_from(derive_input) {
        Ok(arg_set) => TokenStream2::from(arg_set).into(),
        Err(error) => error.to_compile_error().into(),
    }
}
