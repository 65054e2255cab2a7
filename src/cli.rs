//! Command-line argument parsing.
//!
//! Folio takes no configuration on the command line; the only flags are
//! `--version` and `--help`. Anything else runs the TUI.

/// Parsed CLI command to execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui,
}

/// Parse command-line arguments and return the appropriate command.
///
/// # Examples
///
/// ```
/// use folio::cli::{parse_args, CliCommand};
///
/// let args = vec!["folio".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    for arg in args.skip(1) {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            _ => {}
        }
    }
    CliCommand::RunTui
}

/// Usage text printed for `--help`.
pub const USAGE: &str = "\
folio - a single-page personal portfolio for the terminal

USAGE:
    folio [FLAGS]

FLAGS:
    -h, --help       Show this message
    -V, --version    Show version information

KEYS:
    Up/Down, PgUp/PgDn   Scroll the page
    1-5                  Jump to a section
    Left/Right           Switch project filter / timeline tab
    t                    Toggle light/dark theme
    m                    Open/close the section menu
    Enter                Focus the contact form (on the Contact section)
    b                    Back to top (when the control is visible)
    q, Ctrl+C            Quit
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_flag() {
        let args = vec!["folio".to_string(), "--version".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
    }

    #[test]
    fn test_parse_short_version_flag() {
        let args = vec!["folio".to_string(), "-V".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flag() {
        let args = vec!["folio".to_string(), "--help".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::Help);
    }

    #[test]
    fn test_no_args_runs_tui() {
        let args = vec!["folio".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui);
    }

    #[test]
    fn test_unknown_args_run_tui() {
        let args = vec!["folio".to_string(), "--whatever".to_string()];
        assert_eq!(parse_args(args.into_iter()), CliCommand::RunTui);
    }
}
