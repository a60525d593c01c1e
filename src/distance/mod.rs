pub mod l1;

pub use l1::L1Distance;

use crate::config::kinds::DistanceKind;

// Dispatch from the configured selector to the concrete distance.
impl DistanceKind {
    pub fn distance(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        match self {
            DistanceKind::L1 => L1Distance::loss(predicted, expected),
        }
    }

    pub fn gradient(&self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        match self {
            DistanceKind::L1 => L1Distance::derivative(predicted, expected),
        }
    }

    pub fn distance_to(&self, predicted: &[f64], target: f64) -> f64 {
        match self {
            DistanceKind::L1 => L1Distance::loss_to(predicted, target),
        }
    }

    pub fn gradient_to(&self, predicted: &[f64], target: f64) -> Vec<f64> {
        match self {
            DistanceKind::L1 => L1Distance::derivative_to(predicted, target),
        }
    }
}
