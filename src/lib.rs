//! `argset` is a command line parser for Rust built around an *argument set*.
//!
//! An argument set is an ordered list of positional arguments plus a keyed table of optional arguments.
//! Each argument binds one of your variables through a typed sink, so the caller never converts `&str -> T` by hand.
//! Parsing walks the Cli tokens once, left to right, and assigns onto the bound variables as it goes.
//!
//! # Usage
//! via [derive Api](./derive/index.html):
//! ```no_run
#![doc = include_str!("../demos/derived.rs")]
//! ```
//! or via builder Api (this page):
//! ```no_run
#![doc = include_str!("../demos/manual.rs")]
//! ```
//!
//! The builder demo generates the following Cli program:
//! ```console
//! $ manual --help
//! usage: manual [--department DEPARTMENT] [--emp-id [EMP_ID ...]] [--help] [--is-intern] SALARY
//!
//! Record an employee's salary.
//!
//! positional arguments:
//!  SALARY                    The yearly salary.                   f64        0
//!
//! options:
//!  --department DEPARTMENT   The department.                      String     engineering
//!  --emp-id [EMP_ID ...]     The employee ids.                    Vec<i32>   []
//!  --help                    Show this help message and exit.
//!  --is-intern               Whether the employee is an intern.   bool       false
//!
//! $ manual 1200.5 --emp-id 7 8
//! salary: 1200.5
//! emp_ids: [7, 8]
//! department: engineering
//! intern: false
//!
//! $ manual --emp-id 7 8 1200.5
//! Parse error: invalid value for '--emp-id': '1200.5' cannot convert to i32: invalid syntax.
//! --emp-id 7 8 1200.5
//! ^
//!
//! $ manual 1200.5 --is-intern 3
//! Parse error: unknown positional argument '3'.
//! 1200.5 --is-intern 3
//!                    ^
//! ```
//!
//! # Builder Api
//! Configure `argset` by starting with an [`ArgSet`] and `add`ing [`Argument`]s.
//! There are three ways to declare an argument:
//! * [`Argument::positional`]: matched by position, in registration order.
//! Every positional argument must be given on the Cli.
//! * [`Argument::optional`]: matched by the `--NAME` flag (the prefix is configurable via [`ArgSetConfig`]).
//! * [`Argument::switch`]: an optional argument which consumes no tokens, ex: `--verbose`.
//!
//! Each argument takes a *sink* which binds the variable:
//! * [`Scalar`]: a single value of any `T: FromToken`.
//! * [`List`]: a `Vec<T>` of any `T: FromToken`, which is *replaced* by the matched tokens.
//!
//! Implement [`FromToken`](./prelude/trait.FromToken.html) to parse your own type from a single token, or [`Sink`](./prelude/trait.Sink.html) for full control.
//!
//! ### Nargs
//! The number of tokens an argument consumes is its [`Nargs`].
//! ```console
//! Argument     | Nargs         | Syntax                  | Description
//! ----------------------------------------------------------------------------------------
//! positional   | Precisely(1)  | NAME                    | precisely 1 (default)
//! positional   | Precisely(n)  | NAME .. NAME            | precisely n
//! positional   | Unlimited     | [NAME ...]              | every remaining token
//! optional     | Precisely(1)  | [--NAME NAME]           | precisely 1 (default)
//! optional     | Precisely(n)  | [--NAME NAME .. NAME]   | precisely n
//! optional     | Unlimited     | [--NAME [NAME ...]]     | every remaining token
//! switch       | Precisely(0)  | [--NAME]                | precisely 0 (only legal value)
//! ```
//!
//! Illegal combinations are rejected with a [`ConfigError`] before anything is parsed.
//!
//! ### Defaults
//! `argset` does not set defaults; the initial value of each bound variable is its default.
//! The help message displays these initial values.
//!
//! # Cli Semantics
//! * A token starting with the option prefix must name a declared optional argument, and may only be given once.
//! * Any other token is claimed by the next unclaimed positional argument.
//! * An optional argument claims the `Nargs` tokens following its flag, whatever their shape.
//! `Unlimited` claims the rest of the Cli.
//! * Once the tokens run out, every positional argument must have been claimed.
//! * `--help` prints the help message; see [`HelpMode`] for how it interacts with the rule above.
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events from the parser state machine.
extern crate self as argset;

pub mod derive;
pub use argset_builder::*;
