pub mod batch;
pub mod histogram;
pub mod label_distribution;
pub mod proxy;

pub use batch::PuBatch;
pub use histogram::SoftHistogram;
pub use label_distribution::{LabelDistributionLoss, LossOutput};
pub use proxy::ProxyDistributions;
