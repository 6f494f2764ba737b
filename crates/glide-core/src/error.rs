use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid content width: {0} (width must be at least 1 column)")]
    InvalidWidth(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Content error: {0}")]
    Content(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
