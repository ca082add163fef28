use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use sheet_inspect::fixture::{
    DEFAULT_OUTPUT_PATH, DEFAULT_SAMPLE_PATH, FixtureOutcome, generate_upload_script,
};
use sheet_inspect::logging::init_logging;

/// Embed a sample workbook into a script that replays its upload in the browser
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sample workbook to embed
    #[arg(long, short = 's', default_value = DEFAULT_SAMPLE_PATH)]
    sample: PathBuf,

    /// Where to write the generated script
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match generate_upload_script(&cli.sample, &cli.output)? {
        FixtureOutcome::Written { output, .. } => {
            println!("JS snippet created at {}", output.display());
        }
        FixtureOutcome::SampleMissing(_) => println!("File not found"),
    }

    Ok(())
}
