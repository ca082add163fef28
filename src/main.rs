use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;
use std::path::PathBuf;

use sheet_inspect::inspect::{self, InspectConfig, OutputFormat, SheetErrorPolicy};
use sheet_inspect::logging::init_logging;
use sheet_inspect::preview::DEFAULT_PREVIEW_ROWS;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Excel file path
    file_path: Option<PathBuf>,

    /// Column whose empty cells are filled from the row above
    #[arg(long, short = 'd', default_value = inspect::DEFAULT_DATE_COLUMN)]
    date_column: String,

    /// Columns to show, in order (comma separated)
    #[arg(
        long,
        short = 'c',
        value_delimiter = ',',
        default_values_t = inspect::DEFAULT_EXPECTED_COLUMNS.map(String::from)
    )]
    columns: Vec<String>,

    /// Number of rows to preview per sheet
    #[arg(long, short = 'n', default_value_t = DEFAULT_PREVIEW_ROWS)]
    rows: usize,

    /// Print the previews as JSON
    #[arg(long, short = 'j')]
    json: bool,

    /// Keep going with the next sheet when one sheet cannot be read
    #[arg(long, short = 'k')]
    keep_going: bool,
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    // No path: show usage and leave quietly
    let Some(file_path) = cli.file_path else {
        println!("{}", Cli::command().render_usage());
        return Ok(());
    };

    let config = InspectConfig {
        date_column: cli.date_column,
        expected_columns: cli.columns,
        preview_rows: cli.rows,
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        },
        on_sheet_error: if cli.keep_going {
            SheetErrorPolicy::Continue
        } else {
            SheetErrorPolicy::Stop
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    inspect::run(&file_path, &config, &mut out);

    Ok(())
}
