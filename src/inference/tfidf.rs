use std::collections::HashMap;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::inference::traits::Vectorizer;
use crate::inference::vector::SparseVector;

/// Fitted tf-idf vectorizer deserialized from `vectorizer.json`: a term ->
/// column map plus one idf weight per column, exported by the training
/// pipeline.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    #[cfg(test)]
    pub fn from_parts(vocabulary: HashMap<String, usize>, idf: Vec<f64>) -> Self {
        Self { vocabulary, idf }
    }

    pub fn vocabulary_size(&self) -> usize {
        self.idf.len()
    }
}

impl Vectorizer for TfidfVectorizer {
    fn transform(&self, text: &str) -> Result<SparseVector> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for token in tokenize(text) {
            if let Some(&column) = self.vocabulary.get(token.as_str()) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut columns: Vec<usize> = counts.keys().copied().collect();
        columns.sort_unstable();

        let mut values = Vec::with_capacity(columns.len());
        for &column in &columns {
            let idf = self.idf.get(column).copied().ok_or_else(|| {
                Error::Prediction(format!(
                    "vocabulary column {} has no idf weight (vectorizer has {})",
                    column,
                    self.idf.len()
                ))
            })?;
            values.push(counts[&column] * idf);
        }

        let mut vector = SparseVector::new(columns, values, self.idf.len());
        vector.l2_normalize();
        Ok(vector)
    }
}

/// Lowercased word tokens of length >= 2, the same token rule the training
/// pipeline fits the vocabulary with. Single-character tokens carry no
/// signal and are dropped.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| t.chars().count() >= 2)
        .map(|t| t.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_vectorizer() -> TfidfVectorizer {
        let vocabulary: HashMap<String, usize> = [
            ("python".to_string(), 0),
            ("django".to_string(), 1),
            ("react".to_string(), 2),
        ]
        .into_iter()
        .collect();
        TfidfVectorizer::from_parts(vocabulary, vec![1.0, 2.0, 3.0])
    }

    #[test]
    fn test_tokenize_lowercases_and_drops_short_tokens() {
        assert_eq!(
            tokenize("Python, Django & C"),
            vec!["python".to_string(), "django".to_string()]
        );
        assert_eq!(tokenize("web_dev"), vec!["web_dev".to_string()]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_transform_weights_and_normalizes() {
        let vectorizer = sample_vectorizer();
        let v = vectorizer.transform("python django python").unwrap();
        // raw tf*idf: python = 2*1.0, django = 1*2.0, then l2 normalized
        let entries: Vec<(usize, f64)> = v.iter().collect();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].0, 0);
        assert_eq!(entries[1].0, 1);
        assert!((entries[0].1 - entries[1].1).abs() < 1e-12);
        assert!((v.l2_norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_vocabulary_tokens_are_ignored() {
        let vectorizer = sample_vectorizer();
        let v = vectorizer.transform("haskell prolog").unwrap();
        assert!(v.is_empty());
        assert_eq!(v.dim(), 3);
    }

    #[test]
    fn test_empty_input_yields_zero_vector() {
        let vectorizer = sample_vectorizer();
        let v = vectorizer.transform("").unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn test_transform_is_deterministic() {
        let vectorizer = sample_vectorizer();
        let a = vectorizer.transform("react python").unwrap();
        let b = vectorizer.transform("react python").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_idf_weight_is_a_prediction_error() {
        let vocabulary: HashMap<String, usize> = [("python".to_string(), 7)].into_iter().collect();
        let vectorizer = TfidfVectorizer::from_parts(vocabulary, vec![1.0]);
        let err = vectorizer.transform("python").unwrap_err();
        assert!(matches!(err, Error::Prediction(_)));
    }

    #[test]
    fn test_deserializes_from_artifact_json() {
        let json = r#"{"vocabulary": {"python": 0, "react": 1}, "idf": [1.2, 3.4]}"#;
        let vectorizer: TfidfVectorizer = serde_json::from_str(json).unwrap();
        assert_eq!(vectorizer.vocabulary_size(), 2);
    }
}
