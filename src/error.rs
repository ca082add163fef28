use std::path::PathBuf;

use thiserror::Error;

pub type InspectResult<T> = Result<T, InspectError>;

#[derive(Error, Debug)]
pub enum InspectError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("unable to parse Excel file {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("unable to read worksheet '{sheet}': {source}")]
    Sheet {
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}
