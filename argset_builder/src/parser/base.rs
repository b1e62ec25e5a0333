use std::collections::{HashMap, HashSet};
use thiserror::Error;

use crate::api::{Argument, ArgumentClass, ConversionError};
use crate::constant::*;
use crate::model::Nargs;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// An error in the configuration of arguments, reported before any parsing takes place.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A positional argument, or a non-switch optional argument, configured to consume 0 tokens.
    #[error("{class} argument must consume at least 1 token.")]
    ZeroNargs {
        /// The class of the offending argument.
        class: ArgumentClass,
    },
    /// A switch option configured to consume tokens.
    #[error("switch argument always consumes 0 tokens (found {nargs}).")]
    SwitchNargs {
        /// The rejected `Nargs`.
        nargs: Nargs,
    },
    /// A switch declared over a sink that cannot be activated without tokens.
    #[error("'{type_name}' cannot be used as a switch.")]
    NotSwitchType {
        /// The short type name of the sink.
        type_name: String,
    },
    /// An argument registered under the wrong class.
    #[error("argument '{name}' is not {expected}.")]
    Misplaced {
        /// The name of the argument.
        name: String,
        /// The class it was registered under.
        expected: ArgumentClass,
    },
    /// A field of a declarative builder failed to declare.
    #[error("invalid field '{field}': {cause}")]
    Field {
        /// The name of the field.
        field: String,
        /// The declaration error.
        #[source]
        cause: Box<ConfigError>,
    },
}

/// An error while parsing the Cli tokens.
/// Every error is terminal: parsing stops at the first error encountered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A prefixed token that matches no optional argument.
    #[error("unknown optional argument '{name}'.")]
    UnknownOption {
        /// The offending token.
        name: String,
    },
    /// An optional argument specified more than once.
    #[error("optional argument '{name}' already given.")]
    DuplicateOption {
        /// The offending flag.
        name: String,
    },
    /// A token arriving after every positional argument has been claimed.
    #[error("unknown positional argument '{token}'.")]
    UnknownPositional {
        /// The offending token.
        token: String,
    },
    /// Too few tokens remaining to satisfy the `Nargs` of an argument.
    #[error("not enough tokens for '{argument}' (required={required}, given={given}).")]
    InsufficientArgs {
        /// The argument name (for options, including the prefix).
        argument: String,
        /// The tokens required.
        required: usize,
        /// The tokens found.
        given: usize,
    },
    /// The input ended before every positional argument was specified.
    #[error("value for positional argument '{argument}' not given.")]
    MissingPositional {
        /// The first unspecified positional argument.
        argument: String,
    },
    /// A sink rejected its tokens.
    #[error("invalid value for '{argument}': {cause}")]
    Value {
        /// The argument name (for options, including the prefix).
        argument: String,
        /// The conversion error.
        #[source]
        cause: ConversionError,
    },
}

/// Behaviour to set an implicit generic type T from input tokens.
///
/// We use this at the middle/top of the argument set object graph so that different types may all be held in a single argument set.
pub(crate) trait AnonymousSink {
    fn set(&mut self, tokens: &[&str]) -> Result<(), ConversionError>;

    fn describe(&self) -> String;

    fn is_switch(&self) -> bool;

    fn type_name(&self) -> String;
}

// Backs the implicit help switch; the request itself is tracked by the parse.
#[derive(Default)]
struct HelpSwitch {}

impl AnonymousSink for HelpSwitch {
    fn set(&mut self, _tokens: &[&str]) -> Result<(), ConversionError> {
        Ok(())
    }

    fn describe(&self) -> String {
        "false".to_string()
    }

    fn is_switch(&self) -> bool {
        true
    }

    fn type_name(&self) -> String {
        "bool".to_string()
    }
}

/// The behaviour of the implicit help switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpMode {
    /// No help switch is registered.
    Disabled,
    /// `--help` is registered, but help is only reported once the positional arguments are complete.
    Checked,
    /// `--help` is registered and stops parsing immediately, bypassing the positional argument check.
    Immediate,
}

/// The configuration of an [`ArgSet`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSetConfig {
    /// The prefix identifying optional arguments on the Cli.
    pub option_prefix: String,
    /// The behaviour of the implicit help switch.
    pub help: HelpMode,
}

impl Default for ArgSetConfig {
    fn default() -> Self {
        Self {
            option_prefix: DEFAULT_OPTION_PREFIX.to_string(),
            help: HelpMode::Immediate,
        }
    }
}

/// The result of a successful parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Every token was dispatched, and every positional argument was specified.
    Complete,
    /// The help switch was encountered.
    PrintHelp,
}

/// A set of positional and optional arguments, along with the state machine to parse tokens into them.
///
/// ### Example
/// ```
/// # use argset_builder as argset;
/// use argset::{Argument, ArgSet, Action, Scalar};
///
/// let mut pos1: isize = 0;
/// let mut opt1: String = String::default();
/// let mut sw1: bool = false;
/// let mut arg_set = ArgSet::new()
///     .add("pos1", Argument::positional(Scalar::new(&mut pos1), "pos1 help"))
///     .add("opt1", Argument::optional(Scalar::new(&mut opt1), "opt1 help"))
///     .add("sw1", Argument::optional(Scalar::new(&mut sw1), "sw1 help"));
///
/// let action = arg_set.parse_tokens(&["42", "--opt1", "hello", "--sw1"]).unwrap();
/// drop(arg_set);
///
/// assert_eq!(action, Action::Complete);
/// assert_eq!(pos1, 42);
/// assert_eq!(&opt1, "hello");
/// assert!(sw1);
/// ```
pub struct ArgSet<'a> {
    description: Option<String>,
    option_prefix: String,
    help: HelpMode,
    help_key: Option<String>,
    positionals: Vec<(String, Argument<'a>)>,
    optionals: HashMap<String, Argument<'a>>,
}

impl<'a> std::fmt::Debug for ArgSet<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArgSet")
            .field("option_prefix", &self.option_prefix)
            .field("help", &self.help)
            .field("positionals", &self.positionals)
            .field("optionals", &self.optionals)
            .finish()
    }
}

impl<'a> Default for ArgSet<'a> {
    fn default() -> Self {
        Self::new()
    }
}

// The position of the classification automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Init,
    ConsumePositional,
    ConsumeOptional,
    Done,
}

impl<'a> ArgSet<'a> {
    /// Create an argument set with the default configuration: `--` options and an immediate `--help` switch.
    pub fn new() -> Self {
        Self::with_config(ArgSetConfig::default())
    }

    /// Create an argument set with the given configuration.
    pub fn with_config(config: ArgSetConfig) -> Self {
        let ArgSetConfig {
            option_prefix,
            help,
        } = config;
        let mut arg_set = Self {
            description: None,
            option_prefix,
            help,
            help_key: None,
            positionals: Vec::default(),
            optionals: HashMap::default(),
        };

        if help != HelpMode::Disabled {
            let help_key = format!("{}{HELP_NAME}", arg_set.option_prefix);
            arg_set.optionals.insert(
                help_key.clone(),
                Argument::anonymous(
                    ArgumentClass::Optional,
                    Box::new(HelpSwitch::default()),
                    HELP_MESSAGE,
                    Nargs::Precisely(0),
                ),
            );
            arg_set.help_key.replace(help_key);
        }

        arg_set
    }

    /// Document the description of this argument set.
    /// If repeated, only the final description will apply.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description.replace(description.into());
        self
    }

    /// Add an argument, dispatching on its [`ArgumentClass`].
    ///
    /// The order of positional arguments corresponds to their positional order during parsing.
    /// Re-adding an optional argument under the same name replaces it.
    pub fn add(mut self, name: impl Into<String>, argument: Argument<'a>) -> Self {
        let name = name.into();

        match argument.class() {
            ArgumentClass::Positional => self.positionals.push((name, argument)),
            ArgumentClass::Optional => self.insert_optional(name, argument),
        };

        self
    }

    /// Append a positional argument.
    pub fn add_positional(
        &mut self,
        name: impl Into<String>,
        argument: Argument<'a>,
    ) -> Result<(), ConfigError> {
        let name = name.into();

        if argument.class() != ArgumentClass::Positional {
            return Err(ConfigError::Misplaced {
                name,
                expected: ArgumentClass::Positional,
            });
        }

        self.positionals.push((name, argument));
        Ok(())
    }

    /// Add an optional argument, matched on the Cli via `option_prefix + name`.
    /// Re-adding the same name replaces the previous argument.
    pub fn add_optional(
        &mut self,
        name: impl Into<String>,
        argument: Argument<'a>,
    ) -> Result<(), ConfigError> {
        let name = name.into();

        if argument.class() != ArgumentClass::Optional {
            return Err(ConfigError::Misplaced {
                name,
                expected: ArgumentClass::Optional,
            });
        }

        self.insert_optional(name, argument);
        Ok(())
    }

    fn insert_optional(&mut self, name: String, argument: Argument<'a>) {
        let key = format!("{}{name}", self.option_prefix);

        if self.help_key.as_ref() == Some(&key) {
            self.help_key = None;
        }

        self.optionals.insert(key, argument);
    }

    /// The description of this argument set.
    pub fn get_description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The prefix identifying optional arguments.
    pub fn option_prefix(&self) -> &str {
        &self.option_prefix
    }

    /// The flag of the implicit help switch, if registered.
    pub(crate) fn help_flag(&self) -> Option<&str> {
        self.help_key.as_deref()
    }

    /// The positional arguments, in registration order.
    pub fn positionals(&self) -> impl Iterator<Item = (&str, &Argument<'a>)> {
        self.positionals
            .iter()
            .map(|(name, argument)| (name.as_str(), argument))
    }

    /// The optional arguments keyed by their prefixed flag, sorted by flag.
    pub fn optionals(&self) -> impl Iterator<Item = (&str, &Argument<'a>)> {
        let mut optionals: Vec<(&str, &Argument<'a>)> = self
            .optionals
            .iter()
            .map(|(flag, argument)| (flag.as_str(), argument))
            .collect();
        optionals.sort_by(|a, b| a.0.cmp(b.0));
        optionals.into_iter()
    }

    /// Parse the tokens into the arguments' sinks.
    ///
    /// Tokens are classified strictly left to right in a single pass:
    /// * A token starting with the option prefix must name an unseen optional argument, which then claims its `Nargs` tokens.
    /// * Any other token is claimed by the next unclaimed positional argument.
    ///
    /// Sinks are assigned as their tokens are classified, so an error leaves earlier assignments in place.
    /// Parsing again re-runs the classification from scratch.
    pub fn parse_tokens(&mut self, tokens: &[&str]) -> Result<Action, ParseError> {
        self.consume(tokens).map_err(|(_, error)| error)
    }

    /// Parse as per [`ArgSet::parse_tokens`], returning the index of the offending token on error.
    pub(crate) fn consume(&mut self, tokens: &[&str]) -> Result<Action, (usize, ParseError)> {
        let mut state = State::Init;
        let mut cursor = 0;
        let mut next_positional = 0;
        let mut seen: HashSet<&str> = HashSet::default();
        let mut help_requested = false;

        loop {
            #[cfg(feature = "tracing_debug")]
            {
                debug!("{state:?} at token {cursor}/{}.", tokens.len());
            }

            state = match state {
                State::Init => match tokens.get(cursor) {
                    None => State::Done,
                    Some(token) if token.starts_with(&self.option_prefix) => {
                        if !self.optionals.contains_key(*token) {
                            return Err((
                                cursor,
                                ParseError::UnknownOption {
                                    name: token.to_string(),
                                },
                            ));
                        }

                        if !seen.insert(*token) {
                            return Err((
                                cursor,
                                ParseError::DuplicateOption {
                                    name: token.to_string(),
                                },
                            ));
                        }

                        State::ConsumeOptional
                    }
                    Some(token) => {
                        if next_positional >= self.positionals.len() {
                            return Err((
                                cursor,
                                ParseError::UnknownPositional {
                                    token: token.to_string(),
                                },
                            ));
                        }

                        State::ConsumePositional
                    }
                },
                State::ConsumePositional => {
                    let (name, argument) = &mut self.positionals[next_positional];
                    let values = claim(tokens, cursor, argument.nargs())
                        .map_err(|counts| insufficient(cursor, name.as_str(), counts))?;
                    argument
                        .set(values)
                        .map_err(|cause| invalid(cursor, name.as_str(), cause))?;
                    next_positional += 1;
                    cursor += values.len();
                    State::Init
                }
                State::ConsumeOptional => {
                    let flag = tokens[cursor];

                    if self.help_key.as_deref() == Some(flag) {
                        help_requested = true;

                        if self.help == HelpMode::Immediate {
                            #[cfg(feature = "tracing_debug")]
                            {
                                debug!("Help requested, stopping at token {cursor}.");
                            }

                            return Ok(Action::PrintHelp);
                        }
                    }

                    // Init only transitions here for a registered flag.
                    let argument = self
                        .optionals
                        .get_mut(flag)
                        .expect("internal error - optional argument must be registered");
                    let values = claim(tokens, cursor + 1, argument.nargs())
                        .map_err(|counts| insufficient(cursor, flag, counts))?;
                    argument
                        .set(values)
                        .map_err(|cause| invalid(cursor, flag, cause))?;
                    cursor += values.len() + 1;
                    State::Init
                }
                State::Done => {
                    if let Some((name, _)) = self.positionals.get(next_positional) {
                        return Err((
                            cursor,
                            ParseError::MissingPositional {
                                argument: name.clone(),
                            },
                        ));
                    }

                    return Ok(if help_requested {
                        Action::PrintHelp
                    } else {
                        Action::Complete
                    });
                }
            };
        }
    }
}

// Claims the tokens starting at `start`, or reports the (required, available) counts.
fn claim<'t, 's>(
    tokens: &'t [&'s str],
    start: usize,
    nargs: Nargs,
) -> Result<&'t [&'s str], (usize, usize)> {
    let available = tokens.len().saturating_sub(start);

    match nargs {
        Nargs::Unlimited => Ok(&tokens[start.min(tokens.len())..]),
        Nargs::Precisely(n) if n <= available => Ok(&tokens[start..start + n]),
        Nargs::Precisely(n) => Err((n, available)),
    }
}

fn insufficient(cursor: usize, name: &str, counts: (usize, usize)) -> (usize, ParseError) {
    let (required, given) = counts;

    #[cfg(feature = "tracing_debug")]
    {
        debug!("Argument '{name}' requires {required} tokens, but only {given} remain.");
    }

    (
        cursor,
        ParseError::InsufficientArgs {
            argument: name.to_string(),
            required,
            given,
        },
    )
}

fn invalid(cursor: usize, name: &str, cause: ConversionError) -> (usize, ParseError) {
    (
        cursor,
        ParseError::Value {
            argument: name.to_string(),
            cause,
        },
    )
}
