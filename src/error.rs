use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScormError {
    #[error("invalid UTF-8 in {}", path.display())]
    Encoding { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScormError>;
