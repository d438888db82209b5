//! HTTP DTOs for content endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::content::Tip;

/// Query parameters for the tips endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TipsParams {
    /// When given, return this many random distinct tips instead of the
    /// whole list.
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuoteResponse {
    pub quote: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct FactResponse {
    pub fact: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TipsResponse {
    pub tips: Vec<Tip>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tips_response_serializes_category_and_content() {
        let response = TipsResponse {
            tips: vec![Tip::new("Physical", "Take a walk")],
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["tips"][0]["category"], "Physical");
        assert_eq!(json["tips"][0]["content"], "Take a walk");
    }
}
