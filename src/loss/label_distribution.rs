use tracing::{debug, info, warn};

use crate::config::kinds::{Device, DistanceKind, MatchingStrategy, ProxyKind};
use crate::config::loss_config::LossConfig;
use crate::error::Result;
use crate::loss::batch::PuBatch;
use crate::loss::histogram::SoftHistogram;
use crate::loss::proxy::ProxyDistributions;

/// Result of one loss evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct LossOutput {
    /// `positive_term + frac_prior · unlabeled_term`
    pub loss: f64,
    /// `l_p`; 0 when the batch has no known positives.
    pub positive_term: f64,
    /// `l_u` before weighting; 0 when the batch has no unlabeled examples.
    pub unlabeled_term: f64,
    /// ∂loss/∂output, one entry per example in batch order.
    pub grad: Vec<f64>,
}

/// Label Distribution Loss for positive-unlabeled binary classification.
///
/// Scores are `sigmoid(outputs)`. Known positives (label 1) are pushed toward
/// the positive proxy and unlabeled examples (label 0) toward the mixture
/// proxy, whose positive mass is the class prior:
///
///   loss = l_p + l_u / (2·prior)
///
/// With `MatchingStrategy::MeanMatching` (default) `l_p = mean|s_p − 1|` and
/// `l_u = mean|s_u − prior|`. With `HistogramMatching` each subset's soft
/// histogram is compared to the full proxy distribution instead.
///
/// The loss holds no mutable state; one instance can serve many threads.
#[derive(Debug, Clone)]
pub struct LabelDistributionLoss {
    config: LossConfig,
    proxies: ProxyDistributions,
}

impl LabelDistributionLoss {
    pub fn new(config: LossConfig) -> Result<LabelDistributionLoss> {
        config.validate()?;

        if config.proxy == ProxyKind::Polar && config.num_bins > 1 {
            warn!(
                num_bins = config.num_bins,
                "polar proxy puts all mass on the end bins; it is only meaningful with num_bins = 1"
            );
        }

        let proxies = ProxyDistributions::new(config.prior, config.num_bins, config.proxy);

        info!(
            prior = config.prior,
            num_bins = config.num_bins,
            proxy = %config.proxy,
            distance = %config.distance,
            strategy = ?config.strategy,
            device = ?config.device,
            "label distribution loss ready"
        );
        info!(ground_truth_p = ?proxies.proxy_positive, ground_truth_u = ?proxies.proxy_mixture, "proxy distributions");

        Ok(LabelDistributionLoss { config, proxies })
    }

    /// Builds the loss from selector names, e.g. `("polar", "L1")`.
    ///
    /// Unknown names fail before any constant is computed.
    pub fn from_names(
        prior: f64,
        device: Device,
        num_bins: usize,
        proxy: &str,
        dist: &str,
    ) -> Result<LabelDistributionLoss> {
        let proxy: ProxyKind = proxy.parse()?;
        let distance: DistanceKind = dist.parse()?;
        let config = LossConfig::new(prior)
            .with_device(device)
            .with_num_bins(num_bins)
            .with_proxy(proxy)
            .with_distance(distance);
        LabelDistributionLoss::new(config)
    }

    /// Same constants, different matching strategy.
    pub fn with_strategy(mut self, strategy: MatchingStrategy) -> LabelDistributionLoss {
        self.config.strategy = strategy;
        self
    }

    pub fn config(&self) -> &LossConfig {
        &self.config
    }

    pub fn proxies(&self) -> &ProxyDistributions {
        &self.proxies
    }

    pub fn prior(&self) -> f64 {
        self.config.prior
    }

    pub fn frac_prior(&self) -> f64 {
        self.proxies.frac_prior
    }

    /// Soft histogram of `scores` (expected in [0, 1]) over the bin centers.
    pub fn histogram(&self, scores: &[f64]) -> Vec<f64> {
        SoftHistogram::compute(scores, &self.proxies.bin_edges, self.proxies.step)
    }

    /// Scalar loss for a batch of raw outputs and PU labels.
    pub fn forward(&self, outputs: &[f64], labels: &[f64]) -> Result<f64> {
        self.compute(outputs, labels).map(|out| out.loss)
    }

    /// ∂loss/∂output for a batch of raw outputs and PU labels.
    pub fn backward(&self, outputs: &[f64], labels: &[f64]) -> Result<Vec<f64>> {
        self.compute(outputs, labels).map(|out| out.grad)
    }

    pub fn compute(&self, outputs: &[f64], labels: &[f64]) -> Result<LossOutput> {
        let batch = PuBatch::new(outputs, labels)?;

        let s_p = batch.positive_scores();
        let s_u = batch.unlabeled_scores();

        let (positive_term, g_p) = self.subset_term(&s_p, &self.proxies.proxy_positive, 1.0);
        let (unlabeled_term, g_u) =
            self.subset_term(&s_u, &self.proxies.proxy_mixture, self.config.prior);

        let frac_prior = self.proxies.frac_prior;
        let loss = positive_term + frac_prior * unlabeled_term;

        // Chain through the sigmoid: ∂s/∂z = s·(1 − s).
        let mut grad = vec![0.0; batch.len()];
        for (&i, g) in batch.positive.iter().zip(g_p.iter()) {
            let s = batch.scores[i];
            grad[i] = g * s * (1.0 - s);
        }
        for (&i, g) in batch.unlabeled.iter().zip(g_u.iter()) {
            let s = batch.scores[i];
            grad[i] = frac_prior * g * s * (1.0 - s);
        }

        debug!(
            n_positive = s_p.len(),
            n_unlabeled = s_u.len(),
            l_p = positive_term,
            l_u = unlabeled_term,
            loss,
            "label distribution loss"
        );

        Ok(LossOutput { loss, positive_term, unlabeled_term, grad })
    }

    /// Distance of one subset to its target, and its gradient w.r.t. the
    /// subset's scores. `mean_target` is the proxy's mean score, used by
    /// mean matching; histogram matching compares against `proxy` itself.
    fn subset_term(&self, scores: &[f64], proxy: &[f64], mean_target: f64) -> (f64, Vec<f64>) {
        if scores.is_empty() {
            return (0.0, Vec::new());
        }
        let dist = self.config.distance;
        match self.config.strategy {
            MatchingStrategy::MeanMatching => (
                dist.distance_to(scores, mean_target),
                dist.gradient_to(scores, mean_target),
            ),
            MatchingStrategy::HistogramMatching => {
                let hist = self.histogram(scores);
                let value = dist.distance(&hist, proxy);
                let upstream = dist.gradient(&hist, proxy);
                let grad = SoftHistogram::backward(
                    scores,
                    &self.proxies.bin_edges,
                    self.proxies.step,
                    &upstream,
                );
                (value, grad)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, LossError};
    use approx::assert_abs_diff_eq;

    #[test]
    fn from_names_rejects_unknown_distance_and_proxy() {
        let err = LabelDistributionLoss::from_names(0.5, Device::Cpu, 1, "polar", "L2").unwrap_err();
        assert_eq!(err, LossError::Config(ConfigError::UnsupportedDistance("L2".into())));

        let err = LabelDistributionLoss::from_names(0.5, Device::Cpu, 1, "uniform", "L1").unwrap_err();
        assert_eq!(err, LossError::Config(ConfigError::UnsupportedProxy("uniform".into())));
    }

    #[test]
    fn new_rejects_invalid_prior() {
        let err = LabelDistributionLoss::new(LossConfig::new(1.0)).unwrap_err();
        assert_eq!(err, LossError::Config(ConfigError::InvalidPrior(1.0)));
    }

    #[test]
    fn exposes_constants() {
        let loss = LabelDistributionLoss::from_names(0.25, Device::Cpu, 1, "polar", "L1").unwrap();
        assert_eq!(loss.prior(), 0.25);
        assert_abs_diff_eq!(loss.frac_prior(), 2.0);
        assert_eq!(loss.proxies().proxy_positive, vec![0.0, 1.0]);
        assert_eq!(loss.config().strategy, MatchingStrategy::MeanMatching);
    }

    #[test]
    fn empty_batch_yields_zero() {
        let loss = LabelDistributionLoss::new(LossConfig::new(0.5)).unwrap();
        let out = loss.compute(&[], &[]).unwrap();
        assert_eq!(out.loss, 0.0);
        assert!(out.grad.is_empty());
    }

    #[test]
    fn strategy_can_be_swapped_after_construction() {
        let loss = LabelDistributionLoss::new(LossConfig::new(0.5))
            .unwrap()
            .with_strategy(MatchingStrategy::HistogramMatching);
        assert_eq!(loss.config().strategy, MatchingStrategy::HistogramMatching);
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<LabelDistributionLoss>();
    }
}
