/// Differentiable (triangular-kernel) histogram over fixed bin centers.
///
/// Each score `s` adds `step − |s − t_k|` to every bin center `t_k` within one
/// bin width, and the total is divided by `n · step`.
pub struct SoftHistogram;

impl SoftHistogram {
    /// Returns one value per bin center. Empty input gives all zeros.
    pub fn compute(scores: &[f64], centers: &[f64], step: f64) -> Vec<f64> {
        let mut hist = vec![0.0; centers.len()];
        if scores.is_empty() {
            return hist;
        }
        for &s in scores {
            for (h, &t) in hist.iter_mut().zip(centers.iter()) {
                let d = (s - t).abs();
                if d <= step {
                    *h += step - d;
                }
            }
        }
        let norm = scores.len() as f64 * step;
        hist.iter_mut().for_each(|h| *h /= norm);
        hist
    }

    /// Vector-Jacobian product: given ∂L/∂hist (one entry per bin), returns
    /// ∂L/∂scores.
    ///
    /// ∂hist_k/∂s_i = −sign(s_i − t_k) / (n·step) inside the kernel support,
    /// 0 outside, with sign(0) = 0.
    pub fn backward(scores: &[f64], centers: &[f64], step: f64, upstream: &[f64]) -> Vec<f64> {
        let norm = scores.len() as f64 * step;
        scores.iter()
            .map(|&s| {
                centers.iter().zip(upstream.iter())
                    .filter(|&(&t, _)| (s - t).abs() <= step)
                    .map(|(&t, &g)| {
                        let diff = s - t;
                        let sign = if diff > 0.0 { 1.0 } else if diff < 0.0 { -1.0 } else { 0.0 };
                        -sign * g / norm
                    })
                    .sum::<f64>()
            })
            .collect()
    }
}
