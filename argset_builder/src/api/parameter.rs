use crate::api::{ConversionError, Sink};
use crate::model::Nargs;
use crate::parser::{AnonymousSink, ConfigError};

pub(crate) struct AnonymousCapture<'a, T: 'a> {
    field: Box<dyn Sink<T> + 'a>,
}

impl<'a, T> AnonymousCapture<'a, T> {
    pub(crate) fn bind(field: impl Sink<T> + 'a) -> Self {
        Self {
            field: Box::new(field),
        }
    }
}

impl<'a, T> AnonymousSink for AnonymousCapture<'a, T> {
    fn set(&mut self, tokens: &[&str]) -> Result<(), ConversionError> {
        self.field.set(tokens)
    }

    fn describe(&self) -> String {
        self.field.describe()
    }

    fn is_switch(&self) -> bool {
        self.field.is_switch()
    }

    fn type_name(&self) -> String {
        short_type_name(std::any::type_name::<T>())
    }
}

// Strips module paths from a type name: `alloc::vec::Vec<isize>` becomes `Vec<isize>`.
fn short_type_name(full: &str) -> String {
    let mut out = String::default();
    let mut segment = String::default();
    let mut chars = full.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            segment.clear();
        } else if c.is_alphanumeric() || c == '_' {
            segment.push(c);
        } else {
            out.push_str(&segment);
            segment.clear();
            out.push(c);
        }
    }

    out.push_str(&segment);
    out
}

/// Whether an argument is bound by position or by its `--NAME` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentClass {
    /// Bound by registration order.
    Positional,
    /// Bound by the prefixed flag token.
    Optional,
}

impl std::fmt::Display for ArgumentClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgumentClass::Positional => write!(f, "positional"),
            ArgumentClass::Optional => write!(f, "optional"),
        }
    }
}

/// An argument declaration: a [`Sink`] paired with its Cli metadata.
///
/// Construct via [`Argument::positional`], [`Argument::optional`], or [`Argument::switch`].
/// Each constructor establishes the default `Nargs`; use [`Argument::with_nargs`] to deviate.
///
/// ### Example
/// ```
/// # use argset_builder as argset;
/// use argset::{Argument, ArgumentClass, List, Nargs, Scalar};
///
/// let mut level: u32 = 0;
/// let mut items: Vec<u32> = Vec::default();
/// let level = Argument::positional(Scalar::new(&mut level), "The level.");
/// let items = Argument::optional(List::new(&mut items), "The items.")
///     .with_nargs(Nargs::Unlimited)
///     .unwrap();
///
/// assert_eq!(level.class(), ArgumentClass::Positional);
/// assert_eq!(level.nargs(), Nargs::Precisely(1));
/// assert_eq!(items.nargs(), Nargs::Unlimited);
/// ```
pub struct Argument<'a> {
    class: ArgumentClass,
    sink: Box<dyn AnonymousSink + 'a>,
    help: String,
    nargs: Nargs,
}

impl<'a> std::fmt::Debug for Argument<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{class}[{t}, {nargs}, {help}]",
            class = self.class,
            t = self.sink.type_name(),
            nargs = self.nargs,
            help = self.help,
        )
    }
}

impl<'a> Argument<'a> {
    /// Create a positional argument, consuming precisely 1 token.
    pub fn positional<T: 'a>(field: impl Sink<T> + 'a, help: impl Into<String>) -> Self {
        Self::anonymous(
            ArgumentClass::Positional,
            Box::new(AnonymousCapture::bind(field)),
            help,
            Nargs::Precisely(1),
        )
    }

    /// Create an optional argument.
    /// Switch type sinks (ex: `Scalar<bool>`) consume 0 tokens, all others precisely 1 token.
    pub fn optional<T: 'a>(field: impl Sink<T> + 'a, help: impl Into<String>) -> Self {
        let nargs = if field.is_switch() {
            Nargs::Precisely(0)
        } else {
            Nargs::Precisely(1)
        };

        Self::anonymous(
            ArgumentClass::Optional,
            Box::new(AnonymousCapture::bind(field)),
            help,
            nargs,
        )
    }

    /// Create a switch: an optional argument consuming 0 tokens, activated by its mere presence.
    /// The sink must be a switch type.
    pub fn switch<T: 'a>(
        field: impl Sink<T> + 'a,
        help: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if !field.is_switch() {
            return Err(ConfigError::NotSwitchType {
                type_name: short_type_name(std::any::type_name::<T>()),
            });
        }

        Ok(Self::optional(field, help))
    }

    pub(crate) fn anonymous(
        class: ArgumentClass,
        sink: Box<dyn AnonymousSink + 'a>,
        help: impl Into<String>,
        nargs: Nargs,
    ) -> Self {
        Self {
            class,
            sink,
            help: help.into(),
            nargs,
        }
    }

    /// Change the `Nargs` of this argument.
    ///
    /// Fails when the argument would consume 0 tokens without being a switch option,
    /// or when a switch option would consume any tokens.
    pub fn set_nargs(&mut self, nargs: Nargs) -> Result<(), ConfigError> {
        match self.class {
            ArgumentClass::Positional if nargs.is_zero() => {
                return Err(ConfigError::ZeroNargs { class: self.class });
            }
            ArgumentClass::Optional if self.sink.is_switch() && !nargs.is_zero() => {
                return Err(ConfigError::SwitchNargs { nargs });
            }
            ArgumentClass::Optional if nargs.is_zero() && !self.sink.is_switch() => {
                return Err(ConfigError::ZeroNargs { class: self.class });
            }
            _ => {}
        };

        self.nargs = nargs;
        Ok(())
    }

    /// Builder form of [`Argument::set_nargs`].
    pub fn with_nargs(mut self, nargs: Nargs) -> Result<Self, ConfigError> {
        self.set_nargs(nargs)?;
        Ok(self)
    }

    /// Whether this argument is positional or optional.
    pub fn class(&self) -> ArgumentClass {
        self.class
    }

    /// The number of tokens consumed per occurrence.
    pub fn nargs(&self) -> Nargs {
        self.nargs
    }

    /// The help message.
    pub fn help(&self) -> &str {
        &self.help
    }

    /// Whether this is an optional argument consuming 0 tokens.
    pub fn is_switch(&self) -> bool {
        self.class == ArgumentClass::Optional && self.sink.is_switch() && self.nargs.is_zero()
    }

    /// The short type name of the bound variable.
    pub fn type_name(&self) -> String {
        self.sink.type_name()
    }

    /// Describe the current value of the bound variable.
    pub fn describe(&self) -> String {
        self.sink.describe()
    }

    pub(crate) fn set(&mut self, tokens: &[&str]) -> Result<(), ConversionError> {
        self.sink.set(tokens)
    }
}
