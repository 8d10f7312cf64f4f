use std::env;
use std::path::PathBuf;

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct Config {
    pub model_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let model_dir = resolve_model_dir(env::var("SKILLREC_MODEL_DIR").ok())?;
        Ok(Self { model_dir })
    }

    pub fn with_model_dir(model_dir: PathBuf) -> Self {
        Self { model_dir }
    }
}

fn resolve_model_dir(override_dir: Option<String>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) if dir.trim().is_empty() => Err(Error::Config(
            "SKILLREC_MODEL_DIR is set but empty".to_string(),
        )),
        Some(dir) => Ok(PathBuf::from(dir)),
        None => Ok(default_model_dir()),
    }
}

/// The `model` directory shipped alongside the installed binary: one level
/// above the executable's own directory, falling back to `./model` when the
/// executable path cannot be resolved.
fn default_model_dir() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| {
            exe.parent()
                .and_then(|dir| dir.parent())
                .map(|root| root.join("model"))
        })
        .unwrap_or_else(|| PathBuf::from("model"))
}
