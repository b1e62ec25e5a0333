//! Traits which, typically, may be imported without concern: `use argset::prelude::*`.

pub use crate::api::{FromToken, Sink};
