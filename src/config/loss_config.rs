use serde::{Deserialize, Serialize};

use crate::config::kinds::{Device, DistanceKind, MatchingStrategy, ProxyKind};
use crate::error::ConfigError;

fn default_num_bins() -> usize {
    1
}

/// Everything needed to build a `LabelDistributionLoss`.
///
/// Only `prior` is required when deserializing; the remaining fields fall back
/// to one bin, the polar proxy, the L1 distance, mean matching and the CPU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LossConfig {
    /// Fraction of true positives inside the unlabeled population, in (0, 1).
    pub prior: f64,
    /// Number of histogram bins; bin centers are `k / num_bins` for `k = 0..=num_bins`.
    #[serde(default = "default_num_bins")]
    pub num_bins: usize,
    #[serde(default)]
    pub proxy: ProxyKind,
    #[serde(default)]
    pub distance: DistanceKind,
    #[serde(default)]
    pub strategy: MatchingStrategy,
    #[serde(default)]
    pub device: Device,
}

impl LossConfig {
    pub fn new(prior: f64) -> Self {
        LossConfig {
            prior,
            num_bins: default_num_bins(),
            proxy: ProxyKind::default(),
            distance: DistanceKind::default(),
            strategy: MatchingStrategy::default(),
            device: Device::default(),
        }
    }

    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }

    pub fn with_proxy(mut self, proxy: ProxyKind) -> Self {
        self.proxy = proxy;
        self
    }

    pub fn with_distance(mut self, distance: DistanceKind) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_strategy(mut self, strategy: MatchingStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_device(mut self, device: Device) -> Self {
        self.device = device;
        self
    }

    /// Checks the numeric invariants the selectors cannot encode.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.prior.is_finite() && self.prior > 0.0 && self.prior < 1.0) {
            return Err(ConfigError::InvalidPrior(self.prior));
        }
        if self.num_bins == 0 {
            return Err(ConfigError::InvalidBinCount(self.num_bins));
        }
        Ok(())
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `LossConfig` from a JSON file written by `save_json`
    /// (or by hand; omitted fields take their defaults).
    pub fn load_json(path: &str) -> std::io::Result<LossConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }
}
