//! Mood-boosting tip value object.

use serde::{Deserialize, Serialize};

/// A short categorized suggestion, e.g. `Physical: take a walk`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tip {
    pub category: String,
    pub content: String,
}

impl Tip {
    pub fn new(category: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            content: content.into(),
        }
    }
}
