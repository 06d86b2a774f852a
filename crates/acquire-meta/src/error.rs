//! Error types for acquire-meta

use std::path::PathBuf;

use crate::product::Product;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the catalog and the configuration layer.
///
/// Payloads are plain data so the error can be shared between callers
/// waiting on the same deduplicated prompt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("Product {product} cannot be installed as a Python module")]
    NotInstallable { product: Product },

    #[error("Unknown product: {name}")]
    UnknownProduct { name: String },

    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration at {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    #[error("Failed to write configuration at {path}: {message}")]
    ConfigWrite { path: PathBuf, message: String },
}
