pub mod cli;
pub mod error;
pub mod extractor;
pub mod format;
pub mod ui;

// Public API re-exports
pub use cli::{Cli, OutputFormat};
pub use error::{Result, StripTarError, UserFriendlyError};
pub use extractor::{strip_member_name, ExtractionSummary, TarExtractor};
pub use format::Compression;
pub use ui::{OutputFormatter, OutputMode, ProgressManager};

use std::path::{Path, PathBuf};

/// One extraction invocation: which archive, where to, how many leading
/// path components to drop. Constructed once and never mutated.
#[derive(Debug, Clone)]
pub struct ExtractionRequest {
    pub archive: PathBuf,
    pub destination: PathBuf,
    pub strip_components: usize,
}

/// Main library interface: wires the archive reader, the extractor, and the
/// terminal output together for one invocation.
pub struct StripTar {
    request: ExtractionRequest,
    output_formatter: OutputFormatter,
    progress_manager: ProgressManager,
}

impl StripTar {
    pub fn new(request: ExtractionRequest, output_mode: OutputMode, verbose: u8, quiet: bool) -> Self {
        let output_formatter = OutputFormatter::new(output_mode, verbose, quiet);
        let progress_manager = ProgressManager::new(!quiet);

        Self {
            request,
            output_formatter,
            progress_manager,
        }
    }

    /// Create a StripTar instance from CLI arguments
    pub fn from_cli(cli_args: &Cli) -> Self {
        let request = ExtractionRequest {
            archive: cli_args.archive.clone(),
            destination: cli_args.destination.clone(),
            strip_components: cli_args.strip_components,
        };
        let output_mode = match cli_args.output_format {
            cli::OutputFormat::Human => OutputMode::Human,
            cli::OutputFormat::Plain => OutputMode::Plain,
        };

        Self::new(request, output_mode, cli_args.verbose, cli_args.quiet)
    }

    /// Run the extraction described by the request.
    ///
    /// Opens the archive with the decompressor selected by its filename
    /// suffix and streams the members into the destination. Skip notices for
    /// link members are printed as they are encountered. Any decompression,
    /// parse, or write failure surfaces as a single `Err`; whatever was
    /// written before it stays on disk.
    pub fn extract(&self) -> Result<ExtractionSummary> {
        self.output_formatter.debug(&format!(
            "Detected compression: {}",
            Compression::from_path(&self.request.archive)
        ));
        let reader = format::open_archive(&self.request.archive)?;

        let spinner = self.progress_manager.create_spinner("Extracting archive");
        let extractor = TarExtractor::new(self.request.strip_components);
        let result = extractor.extract(reader, &self.request.destination, |member| {
            spinner.suspend(|| {
                self.output_formatter.notice(&format!(
                    "Skipping link: {} (cannot be created without elevated privileges on this platform)",
                    member
                ));
            });
        });
        spinner.finish_and_clear();

        let summary = result?;
        self.output_formatter.info(&format!(
            "Wrote {} files and {} directories ({} bytes); skipped {} links, discarded {} stripped members",
            summary.files_written,
            summary.dirs_created,
            summary.bytes_written,
            summary.links_skipped,
            summary.members_stripped,
        ));

        Ok(summary)
    }

    pub fn request(&self) -> &ExtractionRequest {
        &self.request
    }

    pub fn output_formatter(&self) -> &OutputFormatter {
        &self.output_formatter
    }

    /// Handle error with user-friendly output
    pub fn handle_error(&self, error: &StripTarError) {
        self.output_formatter.print_user_friendly_error(error);
    }
}

/// Convenience function to extract an archive with no terminal output.
pub fn extract_simple(
    archive: &Path,
    destination: &Path,
    strip_components: usize,
) -> Result<ExtractionSummary> {
    let request = ExtractionRequest {
        archive: archive.to_path_buf(),
        destination: destination.to_path_buf(),
        strip_components,
    };
    StripTar::new(request, OutputMode::Plain, 0, true).extract()
}

/// Get version information
pub fn version_info() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
