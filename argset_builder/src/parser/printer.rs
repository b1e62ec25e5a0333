use terminal_size::{terminal_size, Width};

use crate::model::Nargs;
use crate::parser::interface::UserInterface;
use crate::parser::{ArgSet, Columns, MINIMUM_MIDDLE_WIDTH};

const PADDING_WIDTH: usize = 3;
const MAIN_INDENT: usize = 1;

struct Row {
    left: String,
    help: String,
    rights: Vec<String>,
}

/// Renders the usage message of an [`ArgSet`].
pub(crate) struct Printer {
    terminal_width: Option<usize>,
}

impl Printer {
    pub(crate) fn terminal() -> Self {
        let terminal_width = if let Some((Width(terminal_width), _)) = terminal_size() {
            Some(terminal_width as usize)
        } else {
            None
        };

        Self::new(terminal_width)
    }

    pub(crate) fn new(terminal_width: Option<usize>) -> Self {
        Self { terminal_width }
    }

    pub(crate) fn help_lines(&self, program: &str, arg_set: &ArgSet) -> Vec<String> {
        let mut summary = vec![format!("usage: {program}")];
        let mut positional_rows = Vec::default();
        let mut optional_rows = Vec::default();

        for (flag, argument) in arg_set.optionals() {
            let name = flag.strip_prefix(arg_set.option_prefix()).unwrap_or(flag);
            let grammar = grammar(name, argument.nargs());
            let left = if grammar.is_empty() {
                flag.to_string()
            } else {
                format!("{flag} {grammar}")
            };
            summary.push(format!("[{left}]"));
            // The help switch has no meaningful type or default.
            let rights = if arg_set.help_flag() == Some(flag) {
                Vec::default()
            } else {
                vec![argument.type_name(), argument.describe()]
            };
            optional_rows.push(Row {
                left,
                help: argument.help().to_string(),
                rights,
            });
        }

        for (name, argument) in arg_set.positionals() {
            let left = grammar(name, argument.nargs());
            summary.push(left.clone());
            positional_rows.push(Row {
                left,
                help: argument.help().to_string(),
                rights: vec![argument.type_name(), argument.describe()],
            });
        }

        let columns = self.columns(positional_rows.iter().chain(optional_rows.iter()));
        let mut lines = vec![summary.join(" ")];

        if let Some(description) = arg_set.get_description() {
            lines.push(String::default());
            lines.push(description.to_string());
        }

        for (title, rows) in [
            ("positional arguments:", &positional_rows),
            ("options:", &optional_rows),
        ] {
            if rows.is_empty() {
                continue;
            }

            lines.push(String::default());
            lines.push(title.to_string());

            for row in rows {
                lines.extend(columns.render(MAIN_INDENT, &row.left, &row.help, &row.rights));
            }
        }

        lines
    }

    pub(crate) fn print_help(
        &self,
        program: &str,
        arg_set: &ArgSet,
        user_interface: &(impl UserInterface + ?Sized),
    ) {
        for line in self.help_lines(program, arg_set) {
            user_interface.print(line);
        }
    }

    fn columns<'r>(&self, rows: impl Iterator<Item = &'r Row>) -> Columns {
        let mut columns = Columns {
            padding: PADDING_WIDTH,
            left: 1,
            middle: MAIN_INDENT + 2,
            rights: Vec::default(),
        };

        for Row { left, help, rights } in rows {
            columns.left = std::cmp::max(columns.left, left.len());
            columns.middle = std::cmp::max(columns.middle, help.len() + MAIN_INDENT);

            for (i, right) in rights.iter().enumerate() {
                let width = std::cmp::max(1, right.len());

                if i >= columns.rights.len() {
                    columns.rights.push(width);
                } else if columns.rights[i] < width {
                    columns.rights[i] = width;
                }
            }
        }

        match self.terminal_width {
            Some(terminal_width) => columns.fit(terminal_width),
            None => {
                columns.middle = std::cmp::min(columns.middle, MINIMUM_MIDDLE_WIDTH);
                columns
            }
        }
    }
}

// Ex: `emp-id` with 2 tokens becomes `EMP_ID EMP_ID`.
fn grammar(name: &str, nargs: Nargs) -> String {
    let example = name.to_ascii_uppercase().replace('-', "_");

    match nargs {
        Nargs::Precisely(n) => vec![example; n].join(" "),
        Nargs::Unlimited => format!("[{example} ...]"),
    }
}

/// Marks the token at which parsing failed.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct ErrorContext {
    offset: usize,
    tokens: Vec<String>,
}

impl ErrorContext {
    /// `offset` is the index of the offending token, or the token count when the input ended prematurely.
    pub(crate) fn new(offset: usize, tokens: &[&str]) -> Self {
        Self {
            offset,
            tokens: tokens.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let projection = self.tokens.join(" ");
        let column = if self.offset < self.tokens.len() {
            self.tokens[..self.offset]
                .iter()
                .map(|token| token.len() + 1)
                .sum::<usize>()
        } else if projection.is_empty() {
            0
        } else {
            projection.len() + 1
        };

        write!(f, "{projection}\n{:column$}^", "")
    }
}
