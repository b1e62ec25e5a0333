pub(crate) const DEFAULT_OPTION_PREFIX: &str = "--";
pub(crate) const HELP_NAME: &str = "help";
pub(crate) const HELP_MESSAGE: &str = "Show this help message and exit.";
