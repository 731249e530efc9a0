//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use cookie_checker::DEFAULT_READ_TIMEOUT_SECS;

/// Batch-validate Netscape cookie files against a target service.
///
/// Every `.txt` file directly under DIRECTORY is parsed, validated with one
/// GET request, and sorted into `works/` or `dead_cookies/`. Unparseable
/// files stay in place.
#[derive(Parser, Debug)]
#[command(name = "cookie-checker")]
#[command(author, version, about)]
pub struct Args {
    /// Directory containing the `.txt` cookie files
    pub directory: PathBuf,

    /// Target URL the cookies are validated against
    #[arg(short, long, default_value = "https://netflix.com")]
    pub url: String,

    /// Per-request timeout in seconds (1-300)
    #[arg(short, long, default_value_t = DEFAULT_READ_TIMEOUT_SECS, value_parser = clap::value_parser!(u64).range(1..=300))]
    pub timeout: u64,

    /// Write the run transcript to <DIRECTORY>/checker_logs/
    #[arg(long)]
    pub log: bool,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error log output (report lines still print)
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_directory_is_required() {
        let result = Args::try_parse_from(["cookie-checker"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_cli_defaults() {
        let args = Args::try_parse_from(["cookie-checker", "cookies"]).unwrap();
        assert_eq!(args.directory, PathBuf::from("cookies"));
        assert_eq!(args.url, "https://netflix.com");
        assert_eq!(args.timeout, 30); // DEFAULT_READ_TIMEOUT_SECS
        assert!(!args.log);
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_url_override() {
        let args =
            Args::try_parse_from(["cookie-checker", "cookies", "--url", "https://example.com"])
                .unwrap();
        assert_eq!(args.url, "https://example.com");
    }

    #[test]
    fn test_cli_timeout_flag() {
        let args = Args::try_parse_from(["cookie-checker", "cookies", "-t", "5"]).unwrap();
        assert_eq!(args.timeout, 5);
    }

    #[test]
    fn test_cli_timeout_zero_rejected() {
        let result = Args::try_parse_from(["cookie-checker", "cookies", "-t", "0"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_cli_timeout_over_max_rejected() {
        let result = Args::try_parse_from(["cookie-checker", "cookies", "-t", "301"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_log_flag() {
        let args = Args::try_parse_from(["cookie-checker", "cookies", "--log"]).unwrap();
        assert!(args.log);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["cookie-checker", "cookies", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_cli_quiet_flag() {
        let args = Args::try_parse_from(["cookie-checker", "cookies", "--quiet"]).unwrap();
        assert!(args.quiet);
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let result = Args::try_parse_from(["cookie-checker", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_flag_shows_version() {
        let result = Args::try_parse_from(["cookie-checker", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let result = Args::try_parse_from(["cookie-checker", "cookies", "--invalid-flag"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
