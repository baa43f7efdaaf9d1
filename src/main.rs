use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;
use tsv_workbook::{CombineRequest, Result, ToolError, combine, logging};

const USAGE: &str = "Usage: tsv-workbook working_directory output_file.xlsx file_extension";

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            error.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            std::process::exit(1);
        }
    };

    match run(cli) {
        Ok(()) => {}
        Err(error @ ToolError::NoMatchingFiles { .. }) => {
            println!("{error}");
            std::process::exit(1);
        }
        Err(error) => {
            eprintln!("error: {error}");
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    logging::init()?;

    let request = CombineRequest::new(cli.working_directory, cli.output_file, &cli.file_extension);
    let summary = combine(&request)?;

    println!(
        "Combined {} {} files into '{}'",
        summary.file_count(),
        request.extension,
        request.output.display()
    );
    Ok(())
}

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Combine the tab-delimited files of a directory into one Excel workbook."
)]
struct Cli {
    /// Directory containing the input files.
    working_directory: PathBuf,

    /// Workbook to create; an existing file is overwritten.
    output_file: PathBuf,

    /// Extension of the files to combine, without the leading dot.
    file_extension: String,
}
