use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Shape of the ideal score histograms the loss matches against.
///
/// - `Polar` — positives pile up in the last bin (score 1), negatives in the
///   first bin (score 0). Only meaningful with two bins (`num_bins == 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProxyKind {
    #[default]
    Polar,
}

/// Distance used to compare scores (or histograms) with their targets.
///
/// - `L1` — mean absolute difference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistanceKind {
    #[default]
    L1,
}

/// Which quantity of each label subset is pushed toward its proxy.
///
/// - `MeanMatching`      — per-score distance to the proxy mean (1 for
///   positives, the prior for unlabeled). The default.
/// - `HistogramMatching` — distance between the soft histogram of the subset
///   and the full proxy distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchingStrategy {
    #[default]
    MeanMatching,
    HistogramMatching,
}

/// Memory space the derived constants live in. Everything is computed on the
/// host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Device {
    #[default]
    Cpu,
}

impl FromStr for ProxyKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "polar" => Ok(ProxyKind::Polar),
            other => Err(ConfigError::UnsupportedProxy(other.to_string())),
        }
    }
}

impl FromStr for DistanceKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L1" | "l1" => Ok(DistanceKind::L1),
            other => Err(ConfigError::UnsupportedDistance(other.to_string())),
        }
    }
}

impl FromStr for MatchingStrategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" | "mean_matching" => Ok(MatchingStrategy::MeanMatching),
            "histogram" | "histogram_matching" => Ok(MatchingStrategy::HistogramMatching),
            other => Err(ConfigError::UnsupportedStrategy(other.to_string())),
        }
    }
}

impl FromStr for Device {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("cpu") {
            Ok(Device::Cpu)
        } else {
            Err(ConfigError::UnsupportedDevice(s.to_string()))
        }
    }
}

impl fmt::Display for DistanceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceKind::L1 => f.write_str("L1"),
        }
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyKind::Polar => f.write_str("polar"),
        }
    }
}
