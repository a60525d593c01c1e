// Small demo: evaluates the label distribution loss on a synthetic PU batch.
// Set RUST_LOG=debug to see the per-call term values.
use rand::Rng;
use tracing_subscriber::EnvFilter;

use ferrite_pu::{LabelDistributionLoss, LossConfig, LossError, MatchingStrategy};

const PRIOR: f64 = 0.4;
const BATCH: usize = 64;

fn main() -> Result<(), LossError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Positives score high; the unlabeled half is a PRIOR-weighted mix.
    let mut rng = rand::thread_rng();
    let mut outputs = Vec::with_capacity(BATCH);
    let mut labels = Vec::with_capacity(BATCH);
    for i in 0..BATCH {
        let labeled = i % 2 == 0;
        let positive = labeled || rng.gen_bool(PRIOR);
        let centre = if positive { 2.0 } else { -2.0 };
        outputs.push(centre + rng.gen_range(-1.5..1.5));
        labels.push(if labeled { 1.0 } else { 0.0 });
    }

    let mean = LabelDistributionLoss::new(LossConfig::new(PRIOR))?;
    let hist = mean.clone().with_strategy(MatchingStrategy::HistogramMatching);

    for (name, loss) in [("mean matching", &mean), ("histogram matching", &hist)] {
        let out = loss.compute(&outputs, &labels)?;
        let grad_norm = out.grad.iter().map(|g| g * g).sum::<f64>().sqrt();
        println!(
            "{name:>18}: loss = {:.6}  (l_p = {:.6}, l_u = {:.6}, |grad| = {:.6})",
            out.loss, out.positive_term, out.unlabeled_term, grad_norm
        );
    }

    Ok(())
}
