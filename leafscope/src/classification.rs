//! Leaf identification records
//!
//! The species classifier is an external service; this module only models
//! its JSON reply and decides whether the analysis views should be shown.

use crate::{ViewError, ViewResult};
use serde::{Deserialize, Serialize};

/// Structured reply of the leaf identification service.
///
/// Serialized with camelCase keys:
///
/// ```json
/// {"isLeaf": true, "species": "Red maple", "scientificName": "Acer rubrum",
///  "confidence": 0.91, "description": "Palmate, three lobes"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeafIdentification {
    /// Whether the image shows a leaf at all
    pub is_leaf: bool,
    /// Common name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub species: Option<String>,
    /// Binomial name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,
    /// Classifier confidence in `[0, 1]`
    pub confidence: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Why the image was judged not to be a leaf
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl LeafIdentification {
    /// Parse and validate a JSON record.
    pub fn from_json(json: &str) -> ViewResult<Self> {
        let record: LeafIdentification = serde_json::from_str(json)?;
        record.validate()?;
        Ok(record)
    }

    /// Serialize to compact JSON.
    pub fn to_json(&self) -> ViewResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Check that `confidence` is a finite value in `[0, 1]`.
    pub fn validate(&self) -> ViewResult<()> {
        if !self.confidence.is_finite() || !(0.0..=1.0).contains(&self.confidence) {
            return Err(ViewError::InvalidClassification(format!(
                "confidence {} is outside [0, 1]",
                self.confidence
            )));
        }
        Ok(())
    }

    /// Whether the analysis views should be offered for this image.
    pub fn shows_analysis(&self) -> bool {
        self.is_leaf
    }

    /// One-line human summary.
    pub fn summary(&self) -> String {
        let pct = (self.confidence * 100.0).round();
        if !self.is_leaf {
            return match &self.reason {
                Some(reason) => format!("not a leaf ({pct}% confidence): {reason}"),
                None => format!("not a leaf ({pct}% confidence)"),
            };
        }
        let name = self.species.as_deref().unwrap_or("unidentified leaf");
        match &self.scientific_name {
            Some(sci) => format!("{name} ({sci}), {pct}% confidence"),
            None => format!("{name}, {pct}% confidence"),
        }
    }
}
