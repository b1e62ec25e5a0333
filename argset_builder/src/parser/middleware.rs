use std::env;
use std::io::Write;

use crate::parser::base::*;
use crate::parser::interface::{ConsoleInterface, UserInterface, WriterInterface};
use crate::parser::printer::Printer;
use crate::parser::ErrorContext;

/// The command line parser: an [`ArgSet`] bound to a program name and the console.
///
/// ### Example
/// ```
/// # use argset_builder as argset;
/// use argset::{ArgParser, ArgSet, Argument, Scalar};
///
/// let mut verbose: bool = false;
/// let parser = ArgParser::new(
///     "program",
///     ArgSet::new().add("verbose", Argument::optional(Scalar::new(&mut verbose), "Be loud.")),
/// );
///
/// assert!(parser.usage().starts_with("usage: program [--help] [--verbose]"));
/// parser.parse_tokens(&["--verbose"]).unwrap();
/// assert!(verbose);
/// ```
pub struct ArgParser<'a> {
    program: String,
    arg_set: ArgSet<'a>,
    printer: Printer,
    user_interface: Box<dyn UserInterface + 'a>,
}

impl<'a> ArgParser<'a> {
    /// Create a command line parser which prints to the console.
    pub fn new(program: impl Into<String>, arg_set: ArgSet<'a>) -> Self {
        Self::with_interface(
            program,
            arg_set,
            Printer::terminal(),
            Box::new(ConsoleInterface::default()),
        )
    }

    pub(crate) fn with_interface(
        program: impl Into<String>,
        arg_set: ArgSet<'a>,
        printer: Printer,
        user_interface: Box<dyn UserInterface + 'a>,
    ) -> Self {
        Self {
            program: program.into(),
            arg_set,
            printer,
            user_interface,
        }
    }

    /// Send the help and error output to `writer`, instead of stdout and stderr.
    pub fn output(mut self, writer: impl Write + 'a) -> Self {
        self.user_interface = Box::new(WriterInterface::new(writer));
        self
    }

    /// Render the usage message.
    pub fn usage(&self) -> String {
        self.printer
            .help_lines(&self.program, &self.arg_set)
            .join("\n")
    }

    /// Run the command line parser against the input tokens.
    ///
    /// If the parser encounters an error (ex: unknown option, un-convertible token, etc), it prints the error along with the offending token and returns `Err(1)`.
    ///
    /// If the help switch is encountered, the parser prints the usage message and returns `Err(0)`.
    /// See [`HelpMode`] for when help takes effect.
    ///
    /// Variables bound before the point of error retain their new values.
    pub fn parse_tokens(self, tokens: &[&str]) -> Result<(), i32> {
        let ArgParser {
            program,
            mut arg_set,
            printer,
            user_interface,
        } = self;

        match arg_set.consume(tokens) {
            Ok(Action::Complete) => Ok(()),
            Ok(Action::PrintHelp) => {
                printer.print_help(&program, &arg_set, &*user_interface);
                Err(0)
            }
            Err((offset, parse_error)) => {
                user_interface.print_error(parse_error);
                user_interface.print_error_context(ErrorContext::new(offset, tokens));
                Err(1)
            }
        }
    }

    /// Run the command line parser against the Cli [`env::args`].
    ///
    /// Behaves as per [`ArgParser::parse_tokens`], except that instead of returning `Err(code)` it exits with `code` (via `std::process::exit`).
    pub fn parse(self) {
        let command_input: Vec<String> = env::args().skip(1).collect();
        match self.parse_tokens(
            command_input
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .as_slice(),
        ) {
            Ok(()) => {}
            Err(exit_code) => {
                std::process::exit(exit_code);
            }
        };
    }
}
