use serde::Deserialize;

use crate::error::{Error, Result};
use crate::inference::traits::ClassifierModel;
use crate::inference::vector::SparseVector;

/// Multinomial logistic regression deserialized from `model.json`: one weight
/// row and one intercept per class, class labels index-aligned with both.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifier {
    classes: Vec<String>,
    coef: Vec<Vec<f64>>,
    intercept: Vec<f64>,
}

impl LinearClassifier {
    #[cfg(test)]
    pub fn from_parts(classes: Vec<String>, coef: Vec<Vec<f64>>, intercept: Vec<f64>) -> Self {
        Self {
            classes,
            coef,
            intercept,
        }
    }

    fn decision_scores(&self, features: &SparseVector) -> Result<Vec<f64>> {
        let mut scores = Vec::with_capacity(self.classes.len());
        for (class_idx, label) in self.classes.iter().enumerate() {
            let row = self.coef.get(class_idx).ok_or_else(|| {
                Error::Prediction(format!("no weight row for class {:?}", label))
            })?;
            let intercept = self.intercept.get(class_idx).copied().ok_or_else(|| {
                Error::Prediction(format!("no intercept for class {:?}", label))
            })?;

            let mut score = intercept;
            for (column, value) in features.iter() {
                let weight = row.get(column).copied().ok_or_else(|| {
                    Error::Prediction(format!(
                        "feature column {} out of range for class {:?} ({} weights)",
                        column,
                        label,
                        row.len()
                    ))
                })?;
                score += weight * value;
            }
            scores.push(score);
        }
        Ok(scores)
    }
}

impl ClassifierModel for LinearClassifier {
    fn predict_proba(&self, features: &SparseVector) -> Result<Vec<f64>> {
        let scores = self.decision_scores(features)?;
        Ok(softmax(&scores))
    }

    fn classes(&self) -> &[String] {
        &self.classes
    }
}

/// Numerically stable softmax (max-shifted before exponentiation).
fn softmax(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exps: Vec<f64> = scores.iter().map(|s| (s - max).exp()).collect();
    let sum: f64 = exps.iter().sum();
    exps.iter().map(|e| e / sum).collect()
}
