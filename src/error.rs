use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Missing filePath attribute for a file action")]
    MissingFilePath,

    #[error("No input provided: pass an export file or pipe it on stdin")]
    EmptyInput,
}

pub type Result<T> = std::result::Result<T, Error>;
