pub mod artifacts;
pub mod config;
pub mod error;
pub mod inference;
pub mod models;
pub mod predictor;
pub mod taxonomy;

pub use artifacts::{load_artifacts, ArtifactPaths};
pub use config::Config;
pub use error::{Error, Result};
pub use inference::{ClassifierModel, LinearClassifier, SparseVector, TfidfVectorizer, Vectorizer};
pub use models::Recommendation;
pub use predictor::{Predictor, TOP_N};
pub use taxonomy::normalize_category;
