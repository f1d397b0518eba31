use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    #[error("Invalid configuration: {key}={value}")]
    InvalidConfig { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, AppError>;
