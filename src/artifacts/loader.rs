use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::inference::{ClassifierModel, LinearClassifier, TfidfVectorizer};

/// Locations of the two artifact files inside a model directory.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub vectorizer: PathBuf,
}

impl ArtifactPaths {
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            model: dir.join("model.json"),
            vectorizer: dir.join("vectorizer.json"),
        }
    }

    pub fn exist(&self) -> bool {
        self.model.exists() && self.vectorizer.exists()
    }
}

/// Load both artifacts. A missing file and an unreadable/corrupt file are
/// distinct failures so the caller's diagnostic can say which happened.
pub fn load_artifacts(paths: &ArtifactPaths) -> Result<(LinearClassifier, TfidfVectorizer)> {
    let model: LinearClassifier = load_artifact(&paths.model)?;
    let vectorizer: TfidfVectorizer = load_artifact(&paths.vectorizer)?;

    tracing::debug!(
        classes = model.classes().len(),
        vocabulary = vectorizer.vocabulary_size(),
        "loaded model artifacts"
    );

    Ok((model, vectorizer))
}

fn load_artifact<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::ArtifactNotFound(path.to_path_buf()));
    }

    let raw = fs::read_to_string(path).map_err(|e| Error::ArtifactLoad {
        path: path.to_path_buf(),
        cause: e.to_string(),
    })?;

    serde_json::from_str(&raw).map_err(|e| Error::ArtifactLoad {
        path: path.to_path_buf(),
        cause: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const MODEL_JSON: &str = r#"{
        "classes": ["python", "js"],
        "coef": [[1.0, 0.0], [0.0, 1.0]],
        "intercept": [0.0, 0.0]
    }"#;

    const VECTORIZER_JSON: &str = r#"{
        "vocabulary": {"python": 0, "react": 1},
        "idf": [1.0, 2.0]
    }"#;

    fn write_artifacts(dir: &Path) -> ArtifactPaths {
        let paths = ArtifactPaths::in_dir(dir);
        fs::write(&paths.model, MODEL_JSON).unwrap();
        fs::write(&paths.vectorizer, VECTORIZER_JSON).unwrap();
        paths
    }

    #[test]
    fn test_load_valid_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(dir.path());
        assert!(paths.exist());

        let (model, vectorizer) = load_artifacts(&paths).unwrap();
        assert_eq!(model.classes(), ["python", "js"]);
        assert_eq!(vectorizer.vocabulary_size(), 2);
    }

    #[test]
    fn test_missing_model_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::in_dir(dir.path());
        fs::write(&paths.vectorizer, VECTORIZER_JSON).unwrap();

        let err = load_artifacts(&paths).unwrap_err();
        match err {
            Error::ArtifactNotFound(path) => assert_eq!(path, paths.model),
            other => panic!("expected ArtifactNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_vectorizer_file_names_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ArtifactPaths::in_dir(dir.path());
        fs::write(&paths.model, MODEL_JSON).unwrap();

        let err = load_artifacts(&paths).unwrap_err();
        match err {
            Error::ArtifactNotFound(path) => assert_eq!(path, paths.vectorizer),
            other => panic!("expected ArtifactNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_corrupt_model_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(dir.path());
        fs::write(&paths.model, "not json at all").unwrap();

        let err = load_artifacts(&paths).unwrap_err();
        match err {
            Error::ArtifactLoad { path, .. } => assert_eq!(path, paths.model),
            other => panic!("expected ArtifactLoad, got {:?}", other),
        }
    }

    #[test]
    fn test_wrong_shape_json_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let paths = write_artifacts(dir.path());
        fs::write(&paths.vectorizer, r#"{"unexpected": true}"#).unwrap();

        let err = load_artifacts(&paths).unwrap_err();
        assert!(matches!(err, Error::ArtifactLoad { .. }));
    }
}
