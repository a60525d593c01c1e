//! Error types for loss construction and evaluation.

use thiserror::Error;

/// Raised while building a loss; never recovered.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("unsupported proxy distribution: {0}")]
    UnsupportedProxy(String),

    #[error("unsupported distance: {0}")]
    UnsupportedDistance(String),

    #[error("unsupported matching strategy: {0}")]
    UnsupportedStrategy(String),

    #[error("unsupported device: {0} (only cpu)")]
    UnsupportedDevice(String),

    /// The prior must lie strictly inside (0, 1).
    #[error("prior must be in (0, 1), got {0}")]
    InvalidPrior(f64),

    #[error("num_bins must be at least 1, got {0}")]
    InvalidBinCount(usize),
}

/// Raised when a batch handed to the loss is malformed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("outputs and labels differ in length: {outputs} outputs, {labels} labels")]
    LengthMismatch { outputs: usize, labels: usize },

    /// Labels are 1 (known positive) or 0 (unlabeled); anything else is rejected.
    #[error("label at index {index} is {value}, expected 0 or 1")]
    InvalidLabel { index: usize, value: f64 },

    #[error("output at index {index} is NaN")]
    NonFiniteOutput { index: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LossError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),
}

pub type Result<T> = std::result::Result<T, LossError>;
