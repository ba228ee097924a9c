use clap::Parser;
use std::process;
use striptar::{cli, Cli, StripTar, StripTarError};

fn main() {
    let exit_code = run();
    process::exit(exit_code);
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return handle_parse_error(e),
    };

    let app = StripTar::from_cli(&cli);

    if !cli.archive.exists() {
        app.handle_error(&StripTarError::ArchiveNotFound {
            path: cli.archive.display().to_string(),
        });
        return 1;
    }

    app.output_formatter().start_operation(&format!(
        "Extracting {} to {} (strip-components={})",
        cli.archive.display(),
        cli.destination.display(),
        cli.strip_components,
    ));

    match app.extract() {
        Ok(_summary) => {
            app.output_formatter()
                .success("Extraction completed successfully");
            0
        }
        Err(e) => {
            app.handle_error(&e);
            app.output_formatter().error("Extraction failed");
            1
        }
    }
}

fn handle_parse_error(error: clap::Error) -> i32 {
    use clap::error::ErrorKind;

    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            0
        }
        // Usage goes to stdout with exit code 1, not clap's stderr/2.
        _ => {
            print!("{}", cli::usage());
            1
        }
    }
}
