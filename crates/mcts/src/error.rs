use thiserror::Error;

#[derive(Error, Debug)]
pub enum MctsError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown search policy {0:?} (expected \"naive\" or \"smart\")")]
    UnknownPolicy(String),
}

pub type Result<T> = std::result::Result<T, MctsError>;
