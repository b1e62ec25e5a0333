use crate::api::{Argument, Sink};
use crate::model::Nargs;
use crate::parser::{ArgSet, ConfigError};

/// How a declared field is bound on the Cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A positional argument (default `Nargs::Precisely(1)`).
    Positional,
    /// An optional argument (default `Nargs::Precisely(1)`, or `0` for switch type sinks).
    Optional,
    /// A switch option; `Nargs` may only be `0`.
    Switch,
}

/// The declaration of a single field: its Cli name, help message, kind, and `Nargs`.
///
/// Used with [`DeclarativeBuilder::field`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    help: String,
    kind: FieldKind,
    nargs: Option<Nargs>,
}

impl FieldSpec {
    /// Declare an optional field with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            help: String::default(),
            kind: FieldKind::Optional,
            nargs: None,
        }
    }

    /// Set the kind of this field.
    pub fn kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Set the help message of this field.
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.help = help.into();
        self
    }

    /// Override the default `Nargs` of this field.
    pub fn nargs(mut self, nargs: Nargs) -> Self {
        self.nargs.replace(nargs);
        self
    }
}

/// Construct an [`ArgSet`] from a list of field declarations.
///
/// This is the entry point used by `#[derive(ArgSetFrom)]`, but it may equally be used by hand.
/// The first declaration error is deferred and reported by [`DeclarativeBuilder::build`].
///
/// ### Example
/// ```
/// # use argset_builder as argset;
/// use argset::{ArgSet, DeclarativeBuilder, FieldKind, FieldSpec, List, Nargs, Scalar};
///
/// let mut salary: f64 = 0.0;
/// let mut emp_id: Vec<i32> = vec![-1];
/// let mut intern: bool = false;
/// let mut arg_set = DeclarativeBuilder::new(ArgSet::new())
///     .field(
///         Scalar::new(&mut salary),
///         FieldSpec::new("salary").kind(FieldKind::Positional).help("Employee salary."),
///     )
///     .field(List::new(&mut emp_id), FieldSpec::new("emp-id").nargs(Nargs::Precisely(3)))
///     .field(Scalar::new(&mut intern), FieldSpec::new("is-intern").kind(FieldKind::Switch))
///     .build()
///     .unwrap();
///
/// arg_set
///     .parse_tokens(&["3.4", "--is-intern", "--emp-id", "8", "3", "1"])
///     .unwrap();
/// drop(arg_set);
///
/// assert_eq!(salary, 3.4);
/// assert_eq!(emp_id, vec![8, 3, 1]);
/// assert!(intern);
/// ```
pub struct DeclarativeBuilder<'a> {
    arg_set: ArgSet<'a>,
    deferred_error: Option<ConfigError>,
}

impl<'a> DeclarativeBuilder<'a> {
    /// Start declaring fields onto the `arg_set`.
    pub fn new(arg_set: ArgSet<'a>) -> Self {
        Self {
            arg_set,
            deferred_error: None,
        }
    }

    /// Declare a field bound to `sink`.
    pub fn field<T: 'a>(mut self, sink: impl Sink<T> + 'a, spec: FieldSpec) -> Self {
        if self.deferred_error.is_some() {
            return self;
        }

        let FieldSpec {
            name,
            help,
            kind,
            nargs,
        } = spec;
        let argument = match kind {
            FieldKind::Positional => Ok(Argument::positional(sink, help)),
            FieldKind::Optional => Ok(Argument::optional(sink, help)),
            FieldKind::Switch => Argument::switch(sink, help),
        };
        let argument = match (argument, nargs) {
            (Ok(argument), Some(nargs)) => argument.with_nargs(nargs),
            (result, None) => result,
            (Err(error), _) => Err(error),
        };

        match argument {
            Ok(argument) => {
                self.arg_set = self.arg_set.add(name, argument);
            }
            Err(error) => {
                self.deferred_error.replace(ConfigError::Field {
                    field: name,
                    cause: Box::new(error),
                });
            }
        }

        self
    }

    /// Finalize the declarations, reporting the first declaration error (if any).
    pub fn build(self) -> Result<ArgSet<'a>, ConfigError> {
        match self.deferred_error {
            Some(error) => Err(error),
            None => Ok(self.arg_set),
        }
    }
}
