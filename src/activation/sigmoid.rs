/// Logistic function mapping raw outputs to scores in (0, 1).
pub struct Sigmoid;

impl Sigmoid {
    /// σ(x) = 1 / (1 + e^(−x)), evaluated so neither branch overflows.
    pub fn function(x: f64) -> f64 {
        if x >= 0.0 {
            1.0 / (1.0 + (-x).exp())
        } else {
            let e = x.exp();
            e / (1.0 + e)
        }
    }

    /// σ'(x) = σ(x)·(1 − σ(x))
    pub fn derivative(x: f64) -> f64 {
        let fx = Sigmoid::function(x);
        fx * (1.0 - fx)
    }

    pub fn apply(xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| Sigmoid::function(x)).collect()
    }
}
