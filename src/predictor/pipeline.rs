use std::cmp::Ordering;

use crate::artifacts::{load_artifacts, ArtifactPaths};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::inference::{ClassifierModel, Vectorizer};
use crate::models::Recommendation;
use crate::taxonomy::normalize_category;

/// How many ranked categories a prediction returns at most.
pub const TOP_N: usize = 5;

pub struct Predictor {
    model: Box<dyn ClassifierModel>,
    vectorizer: Box<dyn Vectorizer>,
}

impl Predictor {
    pub fn new(
        model: impl ClassifierModel + 'static,
        vectorizer: impl Vectorizer + 'static,
    ) -> Self {
        Self {
            model: Box::new(model),
            vectorizer: Box::new(vectorizer),
        }
    }

    /// Load both artifacts from the configured model directory.
    pub fn load(config: &Config) -> Result<Self> {
        let paths = ArtifactPaths::in_dir(&config.model_dir);
        let (model, vectorizer) = load_artifacts(&paths)?;
        Ok(Self::new(model, vectorizer))
    }

    /// Rank categories for a list of skill strings: join, vectorize, score,
    /// take the top 5 by descending probability, normalize labels.
    pub fn predict(&self, skills: &[String]) -> Result<Vec<Recommendation>> {
        let skills_text = skills.join(" ");
        tracing::debug!(skills = skills.len(), text = %skills_text, "predicting categories");

        let features = self.vectorizer.transform(&skills_text)?;
        let proba = self.model.predict_proba(&features)?;
        let classes = self.model.classes();

        // Order of exactly-equal probabilities is whatever the unstable sort
        // produces; callers must not rely on it.
        let mut ranked: Vec<usize> = (0..proba.len()).collect();
        ranked.sort_unstable_by(|&a, &b| {
            proba[b].partial_cmp(&proba[a]).unwrap_or(Ordering::Equal)
        });
        ranked.truncate(TOP_N);

        ranked
            .into_iter()
            .map(|idx| {
                let label = classes.get(idx).ok_or_else(|| {
                    Error::Prediction(format!(
                        "probability index {} has no class label ({} classes)",
                        idx,
                        classes.len()
                    ))
                })?;
                Ok(Recommendation::new(normalize_category(label), proba[idx]))
            })
            .collect()
    }
}
