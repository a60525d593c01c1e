pub struct L1Distance;

impl L1Distance {
    /// Scalar L1: mean(|predicted - expected|). Zero for empty input.
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        if predicted.is_empty() {
            return 0.0;
        }
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| (p - y).abs())
            .sum::<f64>() / n
    }

    /// Per-element subgradient w.r.t. `predicted`: sign(p - y) / n  (0 when equal)
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        let n = predicted.len() as f64;
        predicted.iter().zip(expected.iter())
            .map(|(p, y)| {
                let diff = p - y;
                if diff > 0.0 { 1.0 / n } else if diff < 0.0 { -1.0 / n } else { 0.0 }
            })
            .collect()
    }

    /// L1 against a single constant target, without materializing it.
    pub fn loss_to(predicted: &[f64], target: f64) -> f64 {
        if predicted.is_empty() {
            return 0.0;
        }
        predicted.iter().map(|p| (p - target).abs()).sum::<f64>() / predicted.len() as f64
    }

    pub fn derivative_to(predicted: &[f64], target: f64) -> Vec<f64> {
        let n = predicted.len() as f64;
        predicted.iter()
            .map(|p| {
                let diff = p - target;
                if diff > 0.0 { 1.0 / n } else if diff < 0.0 { -1.0 / n } else { 0.0 }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn mean_absolute_difference() {
        assert_abs_diff_eq!(L1Distance::loss(&[0.0, 1.0, 0.5], &[1.0, 1.0, 0.0]), 0.5);
        assert_abs_diff_eq!(L1Distance::loss_to(&[0.2, 0.8], 0.5), 0.3, epsilon = 1e-12);
        assert_eq!(L1Distance::loss(&[], &[]), 0.0);
    }

    #[test]
    fn subgradient_is_zero_at_equality() {
        let grad = L1Distance::derivative(&[0.0, 1.0, 2.0, 3.0], &[1.0, 1.0, 1.0, 1.0]);
        assert_eq!(grad, vec![-0.25, 0.0, 0.25, 0.25]);
        assert_eq!(L1Distance::derivative_to(&[0.5, 0.1], 0.5), vec![0.0, -0.5]);
    }
}
