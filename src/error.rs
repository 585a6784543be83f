use crate::patterns::PatternError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("could not read pattern file {}: {source}", .path.display())]
    PatternFile { path: PathBuf, source: io::Error },
    #[error("invalid pattern: {0}")]
    Pattern(#[from] PatternError),
    #[error("could not write summary: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
