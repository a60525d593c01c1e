use crate::config::kinds::ProxyKind;

/// Prior-dependent constants, built once when the loss is constructed.
///
/// - `step`            — bin width, `1 / num_bins`
/// - `bin_edges`       — bin centers `k / num_bins` for `k = 0..=num_bins`
/// - `proxy_positive`  — ideal histogram of known-positive scores
/// - `proxy_negative`  — ideal histogram of negative scores
/// - `proxy_mixture`   — `prior·proxy_positive + (1 − prior)·proxy_negative`,
///                       the ideal histogram of the unlabeled population
/// - `frac_prior`      — weight of the unlabeled term, `1 / (2·prior)`
#[derive(Debug, Clone, PartialEq)]
pub struct ProxyDistributions {
    pub step: f64,
    pub bin_edges: Vec<f64>,
    pub proxy_positive: Vec<f64>,
    pub proxy_negative: Vec<f64>,
    pub proxy_mixture: Vec<f64>,
    pub frac_prior: f64,
}

impl ProxyDistributions {
    /// Expects a validated prior in (0, 1) and `num_bins >= 1`.
    pub fn new(prior: f64, num_bins: usize, proxy: ProxyKind) -> ProxyDistributions {
        let size = num_bins + 1;
        let step = 1.0 / num_bins as f64;
        // k / n rather than accumulated steps so the last center is exactly 1.
        let bin_edges = (0..size).map(|k| k as f64 / num_bins as f64).collect();

        let (proxy_positive, proxy_negative) = match proxy {
            ProxyKind::Polar => {
                let mut p = vec![0.0; size];
                let mut n = vec![0.0; size];
                p[size - 1] = 1.0;
                n[0] = 1.0;
                (p, n)
            }
        };

        let proxy_mixture = proxy_positive.iter().zip(proxy_negative.iter())
            .map(|(p, n)| prior * p + (1.0 - prior) * n)
            .collect();

        ProxyDistributions {
            step,
            bin_edges,
            proxy_positive,
            proxy_negative,
            proxy_mixture,
            frac_prior: 1.0 / (2.0 * prior),
        }
    }

    pub fn num_bins(&self) -> usize {
        self.bin_edges.len() - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn is_one_hot(v: &[f64]) -> bool {
        v.iter().filter(|&&x| x == 1.0).count() == 1 && v.iter().all(|&x| x == 0.0 || x == 1.0)
    }

    #[test]
    fn single_bin_constants() {
        let proxies = ProxyDistributions::new(0.3, 1, ProxyKind::Polar);
        assert_eq!(proxies.step, 1.0);
        assert_eq!(proxies.bin_edges, vec![0.0, 1.0]);
        assert_eq!(proxies.proxy_positive, vec![0.0, 1.0]);
        assert_eq!(proxies.proxy_negative, vec![1.0, 0.0]);
        assert_abs_diff_eq!(proxies.proxy_mixture[0], 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(proxies.proxy_mixture[1], 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(proxies.frac_prior, 1.0 / 0.6, epsilon = 1e-12);
    }

    #[test]
    fn mixture_is_prior_weighted_sum_for_any_bin_count() {
        for num_bins in [1, 2, 5, 10] {
            for prior in [0.05, 0.5, 0.93] {
                let proxies = ProxyDistributions::new(prior, num_bins, ProxyKind::Polar);
                assert_eq!(proxies.bin_edges.len(), num_bins + 1);
                assert_eq!(proxies.num_bins(), num_bins);
                assert!(is_one_hot(&proxies.proxy_positive));
                assert!(is_one_hot(&proxies.proxy_negative));
                for k in 0..=num_bins {
                    let expected = prior * proxies.proxy_positive[k]
                        + (1.0 - prior) * proxies.proxy_negative[k];
                    assert_abs_diff_eq!(proxies.proxy_mixture[k], expected, epsilon = 1e-12);
                }
            }
        }
    }

    #[test]
    fn bin_centers_span_unit_interval() {
        let proxies = ProxyDistributions::new(0.5, 10, ProxyKind::Polar);
        assert_eq!(proxies.bin_edges[0], 0.0);
        assert_eq!(proxies.bin_edges[10], 1.0);
        assert_abs_diff_eq!(proxies.bin_edges[3], 0.3, epsilon = 1e-12);
        assert_abs_diff_eq!(proxies.step, 0.1, epsilon = 1e-12);
    }
}
