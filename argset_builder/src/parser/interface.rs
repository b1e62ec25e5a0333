use crate::parser::{ErrorContext, ParseError};
use std::cell::RefCell;
use std::io::Write;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

// Target 95% of the total width.
const TARGET_TOTAL_FACTOR: f64 = 0.95;

// Assuming an average word length of 5, 17 fits precisely 3 words with a space between them.
pub(crate) const MINIMUM_MIDDLE_WIDTH: usize = 17;

/// The widths of a help table: `left | middle | rights...`, separated by `padding`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Columns {
    pub(crate) padding: usize,
    pub(crate) left: usize,
    pub(crate) middle: usize,
    pub(crate) rights: Vec<usize>,
}

impl Columns {
    /// Choose the middle width so the table fits within `total_width`.
    /// The middle never drops below `MINIMUM_MIDDLE_WIDTH`, even if that overflows the total.
    pub(crate) fn fit(mut self, total_width: usize) -> Self {
        let non_middle = self.left
            + self.padding
            + self.rights.iter().map(|r| r + self.padding).sum::<usize>();
        let target_width = (total_width as f64 * TARGET_TOTAL_FACTOR) as usize;
        let wanted = std::cmp::max(self.middle, MINIMUM_MIDDLE_WIDTH);

        self.middle = if wanted + non_middle <= target_width {
            wanted
        } else if non_middle < total_width {
            std::cmp::max(
                std::cmp::min(wanted, total_width - non_middle),
                MINIMUM_MIDDLE_WIDTH,
            )
        } else {
            MINIMUM_MIDDLE_WIDTH
        };

        #[cfg(feature = "tracing_debug")]
        {
            debug!(
                "Columns {non_middle} with total {total_width}, selecting middle: {}.",
                self.middle
            );
        }

        self
    }

    /// Render a single row, wrapping the middle column across as many lines as necessary.
    /// The right columns only appear on the first line.
    pub(crate) fn render(
        &self,
        indent: usize,
        left: &str,
        middle: &str,
        rights: &[String],
    ) -> Vec<String> {
        assert!(left.len() <= self.left, "internal error - left overflow");
        assert!(
            rights.len() <= self.rights.len(),
            "internal error - too many rights"
        );
        let padding = " ".repeat(self.padding);
        let middle_width = std::cmp::max(self.middle.saturating_sub(indent), 2);
        let mut lines = wrap(middle, middle_width).into_iter();
        let first = lines.next().unwrap_or_default();
        let mut row = format!(
            "{:indent$}{left:left_width$}{padding}{first:middle_width$}",
            "",
            left_width = self.left,
        );

        for (item, &width) in rights.iter().zip(self.rights.iter()) {
            assert!(item.len() <= width, "internal error - right overflow");
            row.push_str(&format!("{padding}{item:width$}"));
        }

        let mut out = vec![row.trim_end().to_string()];

        for line in lines {
            out.push(format!(
                "{:indent$}{:left_width$}{padding}{line}",
                "",
                "",
                left_width = self.left,
            ));
        }

        out
    }
}

// Break the paragraph into lines of at most `width`, hyphenating words that are too long on their own.
fn wrap(paragraph: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::default();
    let mut current = String::default();

    for word in paragraph.split_whitespace() {
        if !current.is_empty() && current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }

        let mut rest = word;

        while rest.chars().count() > width {
            let cut = rest
                .char_indices()
                .nth(width - 1)
                .map_or(rest.len(), |(i, _)| i);
            let (head, tail) = rest.split_at(cut);
            lines.push(format!("{head}-"));
            rest = tail;
        }

        current.push_str(rest);
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// The output channel of the Cli.
pub(crate) trait UserInterface {
    fn print(&self, message: String);
    fn print_error(&self, error: ParseError);
    fn print_error_context(&self, error_context: ErrorContext);
}

#[derive(Default)]
pub(crate) struct ConsoleInterface {}

impl UserInterface for ConsoleInterface {
    fn print(&self, message: String) {
        println!("{message}");
    }

    fn print_error(&self, error: ParseError) {
        eprintln!("Parse error: {error}");
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        eprintln!("{error_context}");
    }
}

/// Sends messages and errors alike to a single writer.
pub(crate) struct WriterInterface<W: Write> {
    writer: RefCell<W>,
}

impl<W: Write> WriterInterface<W> {
    pub(crate) fn new(writer: W) -> Self {
        Self {
            writer: RefCell::new(writer),
        }
    }
}

// Nothing is left to report a failed write to, so it is dropped.
impl<W: Write> UserInterface for WriterInterface<W> {
    fn print(&self, message: String) {
        writeln!(self.writer.borrow_mut(), "{message}").ok();
    }

    fn print_error(&self, error: ParseError) {
        writeln!(self.writer.borrow_mut(), "Parse error: {error}").ok();
    }

    fn print_error_context(&self, error_context: ErrorContext) {
        writeln!(self.writer.borrow_mut(), "{error_context}").ok();
    }
}

#[cfg(test)]
pub(crate) mod util {
    use crate::parser::{ErrorContext, ParseError, UserInterface};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    pub(crate) struct InMemoryInterface {
        message: RefCell<Vec<String>>,
        error: RefCell<Option<String>>,
        error_context: RefCell<Option<ErrorContext>>,
    }

    impl UserInterface for InMemoryInterface {
        fn print(&self, message: String) {
            self.message.borrow_mut().push(message);
        }

        fn print_error(&self, error: ParseError) {
            // Assumes print_error() is only ever called once.
            self.error
                .borrow_mut()
                .replace(format!("Parse error: {error}"));
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            self.error_context.borrow_mut().replace(error_context);
        }
    }

    // Lets a test keep a handle on the interface it hands over to the parser.
    impl<T: UserInterface> UserInterface for Rc<T> {
        fn print(&self, message: String) {
            (**self).print(message);
        }

        fn print_error(&self, error: ParseError) {
            (**self).print_error(error);
        }

        fn print_error_context(&self, error_context: ErrorContext) {
            (**self).print_error_context(error_context);
        }
    }

    impl InMemoryInterface {
        pub(crate) fn consume(&self) -> (Option<String>, Option<String>, Option<ErrorContext>) {
            let message = self.message.take();

            (
                if message.is_empty() {
                    None
                } else {
                    Some(message.join("\n"))
                },
                self.error.take(),
                self.error_context.take(),
            )
        }

        pub(crate) fn consume_message(&self) -> String {
            let (message, error, error_context) = self.consume();
            assert_eq!(error, None);
            assert_eq!(error_context, None);
            message.unwrap()
        }
    }
}
