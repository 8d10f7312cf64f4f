use crate::error::Result;
use crate::inference::vector::SparseVector;

/// A fitted text-to-features transformer. Implementations are loaded from a
/// serialized artifact and never refit at inference time.
pub trait Vectorizer: Send + Sync {
    fn transform(&self, text: &str) -> Result<SparseVector>;
}

/// A trained classifier exposing per-class probabilities. Index `i` of the
/// probability vector corresponds to index `i` of `classes()`; that pairing
/// is the artifact producer's contract and is not re-verified here.
pub trait ClassifierModel: Send + Sync {
    fn predict_proba(&self, features: &SparseVector) -> Result<Vec<f64>>;
    fn classes(&self) -> &[String];
}
