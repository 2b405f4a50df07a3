use std::path::PathBuf;

use bound_core::model::RectangleError;
use itertools::Itertools;

use crate::filter::CopyFailure;

#[derive(thiserror::Error, Debug)]
pub enum BoundError {
    #[error("{0}")]
    InvalidUserInput(String),
    #[error(transparent)]
    InvalidRectangle(#[from] RectangleError),
    #[error("error reading from '{path}': {message}")]
    ReadError { path: PathBuf, message: String },
    #[error("error writing to '{path}': {message}")]
    WriteError { path: PathBuf, message: String },
    #[error("failed to copy {count} matching file(s): {details}")]
    CopyFailures { count: usize, details: String },
    #[error("{0}")]
    InternalError(String),
}

/// collects the copy failures of a run into a single error
pub fn copy_failures_error(failures: &[CopyFailure]) -> BoundError {
    let concatenated = failures
        .iter()
        .map(|f| format!("{}: {}", f.file_name, f.reason))
        .join("\n  ");
    BoundError::CopyFailures {
        count: failures.len(),
        details: format!("[\n  {concatenated}\n]"),
    }
}
