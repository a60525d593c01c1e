pub mod error;
pub mod config;
pub mod activation;
pub mod distance;
pub mod loss;

// Convenience re-exports
pub use error::{ConfigError, LossError, ShapeError};
pub use config::{Device, DistanceKind, LossConfig, MatchingStrategy, ProxyKind};
pub use activation::sigmoid::Sigmoid;
pub use loss::label_distribution::{LabelDistributionLoss, LossOutput};
