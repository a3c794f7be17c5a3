//! Error types and conversions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("'{0}' isn't a valid material")]
    UnknownMaterial(String),

    #[error("Item '{item}' not found in recipes for '{material}'")]
    UnknownItem { item: String, material: String },

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
