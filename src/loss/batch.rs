use crate::activation::sigmoid::Sigmoid;
use crate::error::ShapeError;

/// A validated batch split by label.
///
/// `positive` and `unlabeled` hold indices into the original batch so
/// per-subset gradients can be scattered back in order.
#[derive(Debug, Clone)]
pub struct PuBatch {
    pub scores: Vec<f64>,
    pub positive: Vec<usize>,
    pub unlabeled: Vec<usize>,
}

impl PuBatch {
    /// Checks lengths, label domain and NaN outputs, then applies the sigmoid
    /// and partitions by label.
    pub fn new(outputs: &[f64], labels: &[f64]) -> Result<PuBatch, ShapeError> {
        if outputs.len() != labels.len() {
            return Err(ShapeError::LengthMismatch {
                outputs: outputs.len(),
                labels: labels.len(),
            });
        }

        let mut positive = Vec::new();
        let mut unlabeled = Vec::new();
        for (index, &value) in labels.iter().enumerate() {
            if value == 1.0 {
                positive.push(index);
            } else if value == 0.0 {
                unlabeled.push(index);
            } else {
                return Err(ShapeError::InvalidLabel { index, value });
            }
        }

        if let Some(index) = outputs.iter().position(|x| x.is_nan()) {
            return Err(ShapeError::NonFiniteOutput { index });
        }

        Ok(PuBatch {
            scores: Sigmoid::apply(outputs),
            positive,
            unlabeled,
        })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn positive_scores(&self) -> Vec<f64> {
        self.positive.iter().map(|&i| self.scores[i]).collect()
    }

    pub fn unlabeled_scores(&self) -> Vec<f64> {
        self.unlabeled.iter().map(|&i| self.scores[i]).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partitions_by_label_in_order() {
        let batch = PuBatch::new(&[0.0, 1.0, -1.0, 2.0], &[1.0, 0.0, 0.0, 1.0]).unwrap();
        assert_eq!(batch.positive, vec![0, 3]);
        assert_eq!(batch.unlabeled, vec![1, 2]);
        assert_eq!(batch.len(), 4);
        assert_eq!(batch.positive_scores()[0], 0.5);
    }

    #[test]
    fn rejects_length_mismatch() {
        let err = PuBatch::new(&[0.0, 1.0], &[1.0]).unwrap_err();
        assert_eq!(err, ShapeError::LengthMismatch { outputs: 2, labels: 1 });
    }

    #[test]
    fn rejects_labels_outside_zero_one() {
        let err = PuBatch::new(&[0.0, 1.0, 2.0], &[1.0, -1.0, 0.0]).unwrap_err();
        assert_eq!(err, ShapeError::InvalidLabel { index: 1, value: -1.0 });
        assert!(PuBatch::new(&[0.0], &[0.5]).is_err());
    }

    #[test]
    fn rejects_nan_outputs() {
        let err = PuBatch::new(&[0.0, f64::NAN], &[1.0, 0.0]).unwrap_err();
        assert_eq!(err, ShapeError::NonFiniteOutput { index: 1 });
    }

    #[test]
    fn empty_batch_is_valid() {
        let batch = PuBatch::new(&[], &[]).unwrap();
        assert!(batch.is_empty());
        assert!(batch.positive.is_empty() && batch.unlabeled.is_empty());
    }
}
