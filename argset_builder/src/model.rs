/// The number of tokens an argument consumes per occurrence.
///
/// Inspired by argparse: <https://docs.python.org/3/library/argparse.html#nargs>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
    /// `N`: Precisely `N` tokens.
    /// `0` is only legal for switch options.
    Precisely(usize),
    /// Every remaining token on the Cli, regardless of its shape.
    Unlimited,
}

impl Nargs {
    pub(crate) fn is_zero(&self) -> bool {
        matches!(self, Nargs::Precisely(0))
    }
}

impl std::fmt::Display for Nargs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Nargs::Precisely(n) => write!(f, "{n}"),
            Nargs::Unlimited => write!(f, "*"),
        }
    }
}
