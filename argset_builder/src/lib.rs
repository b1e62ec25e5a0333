//! Builder module for `argset`.
//! See [documentation root](https://docs.rs/argset/latest/argset/index.html) for full details.
#![deny(missing_docs)]
mod api;
mod constant;
mod model;
mod parser;
#[allow(missing_docs)]
pub mod prelude;

pub use api::*;
pub use model::*;
pub use parser::{Action, ArgParser, ArgSet, ArgSetConfig, ConfigError, HelpMode, ParseError};

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
