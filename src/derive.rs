//! Derive Api for `argset` configuration.
//!
//! ### Getting Started
//! Instrument a struct `S` with `#[derive(ArgSetFrom)]`, and tag each Cli field with `#[argset(..)]`.
//! This generates `S::arg_set(&mut self) -> Result<ArgSet<'_>, ConfigError>`, which binds every tagged field.
//! Untagged fields are left alone.
//!
//! ```no_run
#![doc = include_str!("../demos/derived.rs")]
//! ```
//!
//! ### Struct Attributes
//! * `#[argset(description = "..")]` sets the [description](../struct.ArgSet.html#method.description) of the argument set.
//! * `#[argset(prefix = "..")]` sets the [option prefix](../struct.ArgSetConfig.html) (default `--`).
//!
//! ### Field Attributes
//! * `#[argset(positional)]`, `#[argset(option)]` or `#[argset(switch)]` selects the kind of argument.
//! Only one may be used on the same field; the default is `option`.
//! * `#[argset(name = "..")]` sets the Cli name.
//! The default is the field name, with `_` replaced by `-`.
//! * `#[argset(help = "..")]` sets the help message.
//! * `#[argset(nargs = N)]` sets [Nargs](../enum.Nargs.html): a non-negative integer for `Precisely(N)`, or `unlimited` (equivalently `-1`) for `Unlimited`.
//! `switch` fields may not set `nargs`.
//!
//! A field of type `Vec<T>` binds a [`List`](../struct.List.html); anything else binds a [`Scalar`](../struct.Scalar.html).
//!
//! ```ignore
//! #[derive(ArgSetFrom)]
//! struct Parameters {
//!     #[argset(positional)]
//!     quick: usize,
//!     // the above generates:
//!     //  .field(Scalar::new(&mut self.quick), FieldSpec::new("quick").kind(FieldKind::Positional))
//!
//!     #[argset(help = "how brown")]
//!     brown_fox: f64,
//!     // the above generates:
//!     //  .field(Scalar::new(&mut self.brown_fox), FieldSpec::new("brown-fox").kind(FieldKind::Optional).help("how brown"))
//!
//!     #[argset(nargs = 2)]
//!     jumps: Vec<u32>,
//!     // the above generates:
//!     //  .field(List::new(&mut self.jumps), FieldSpec::new("jumps").kind(FieldKind::Optional).nargs(Nargs::Precisely(2)))
//!
//!     #[argset(switch, name = "lazy")]
//!     is_lazy: bool,
//!     // the above generates:
//!     //  .field(Scalar::new(&mut self.is_lazy), FieldSpec::new("lazy").kind(FieldKind::Switch))
//! }
//! ```
//!
//! Invalid combinations are rejected at compile time where they are visible to the macro (ex: `switch` on a `Vec<T>`).
//! The remainder (ex: `switch` on a non-`bool` type) are reported by `arg_set()` as a [`ConfigError`](../enum.ConfigError.html).

pub use argset_derive::*;
