use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "striptar")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract tar archives with strip-components support")]
#[command(
    long_about = "StripTar extracts a .tar.xz, .tar.gz, or plain tar archive into a \
                  destination directory, stripping leading path components from each \
                  member. It never shells out to external archivers, and it skips \
                  symlink and hard-link members so extraction also works on platforms \
                  where creating links requires elevated privileges."
)]
#[command(after_help = "EXAMPLES:\n  \
    striptar php-8.3.26.tar.xz ./php-src 1\n  \
    striptar sqlsrv.tgz ./ext/sqlsrv\n  \
    striptar vendor.tar ./vendor 0 --quiet")]
pub struct Cli {
    /// Path to the archive (.tar.xz, .txz, .tar.gz, .tgz, or plain tar)
    pub archive: PathBuf,

    /// Destination directory (created if missing)
    pub destination: PathBuf,

    /// Number of leading path components to strip from member names
    #[arg(default_value_t = 1)]
    pub strip_components: usize,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output
    Human,
    /// Plain text output
    Plain,
}

impl Cli {
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }
}

/// Usage text printed when too few positional arguments are supplied.
/// Goes to standard output, unlike clap's default stderr rendering.
pub fn usage() -> String {
    format!(
        "Usage: {name} <archive_path> <destination> [strip_components]\n\
         \n\
         Examples:\n  \
         {name} php-8.3.26.tar.xz ./php-src 1\n  \
         {name} sqlsrv.tgz ./ext/sqlsrv\n",
        name = "striptar"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_components_defaults_to_one() {
        let cli = Cli::try_parse_from(["striptar", "a.tar.gz", "out"]).unwrap();
        assert_eq!(cli.strip_components, 1);
        assert_eq!(cli.archive, PathBuf::from("a.tar.gz"));
        assert_eq!(cli.destination, PathBuf::from("out"));
    }

    #[test]
    fn test_explicit_strip_components() {
        let cli = Cli::try_parse_from(["striptar", "a.tar.xz", "out", "3"]).unwrap();
        assert_eq!(cli.strip_components, 3);

        let cli = Cli::try_parse_from(["striptar", "a.tar", "out", "0"]).unwrap();
        assert_eq!(cli.strip_components, 0);
    }

    #[test]
    fn test_missing_positionals_fail_to_parse() {
        assert!(Cli::try_parse_from(["striptar"]).is_err());
        assert!(Cli::try_parse_from(["striptar", "a.tar.gz"]).is_err());
    }

    #[test]
    fn test_negative_strip_components_rejected() {
        assert!(Cli::try_parse_from(["striptar", "a.tar.gz", "out", "-1"]).is_err());
        assert!(Cli::try_parse_from(["striptar", "a.tar.gz", "out", "many"]).is_err());
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["striptar", "a.tar.gz", "out", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli::try_parse_from(["striptar", "a.tar.gz", "out", "-vv"]).unwrap();
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::try_parse_from(["striptar", "a.tar.gz", "out", "--quiet"]).unwrap();
        assert_eq!(cli.verbosity_level(), 0);
    }

    #[test]
    fn test_usage_names_two_examples() {
        let text = usage();
        assert!(text.starts_with("Usage: striptar"));
        assert_eq!(text.matches("\n  striptar").count(), 2);
    }
}
