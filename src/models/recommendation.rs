use serde::{Deserialize, Serialize};

/// One ranked category suggestion returned to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub category: String,
    pub probability: f64,
}

impl Recommendation {
    pub fn new(category: impl Into<String>, probability: f64) -> Self {
        Self {
            category: category.into(),
            probability,
        }
    }
}
