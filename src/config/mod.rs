pub mod kinds;
pub mod loss_config;

pub use kinds::{Device, DistanceKind, MatchingStrategy, ProxyKind};
pub use loss_config::LossConfig;
