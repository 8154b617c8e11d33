//! Synthesis record - one extracted synthesis event

use crate::category::MaterialCategory;
use serde::{Deserialize, Serialize};

/// A single extracted synthesis event
///
/// Every parameter field is optional: papers rarely report a complete set,
/// and the model returns `null` for anything it could not find. All fields
/// serialize explicitly (as `null` in JSON, empty cells in CSV) so a batch
/// of records stays structurally homogeneous regardless of which fields a
/// given paper happened to populate.
///
/// `category` is never trusted from model output: the pipeline overwrites
/// it with the requested extraction category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRecord {
    /// Material class the extraction was requested for
    pub category: MaterialCategory,

    /// Chemical precursor (e.g., "zinc nitrate hexahydrate")
    #[serde(default)]
    pub precursor: Option<String>,

    /// Reaction temperature, kept verbatim including units (e.g., "180°C")
    #[serde(default)]
    pub temperature: Option<String>,

    /// Synthesis method (e.g., "hydrothermal", "sol-gel")
    #[serde(default)]
    pub method: Option<String>,

    /// Reaction solvent (e.g., "deionized water", "DMF")
    #[serde(default)]
    pub solvent: Option<String>,

    /// Reaction time, kept verbatim including units (e.g., "12 h")
    #[serde(default)]
    pub reaction_time: Option<String>,

    /// The source sentence(s) the parameters were extracted from
    #[serde(default)]
    pub text_snippet: Option<String>,

    /// Heuristic reliability score in [0, 1], when scoring is enabled
    #[serde(default)]
    pub confidence: Option<f64>,

    /// Marker set when the model output could not be parsed at all
    #[serde(default)]
    pub error: Option<String>,
}

impl SynthesisRecord {
    /// Create an empty record for the given category
    pub fn new(category: MaterialCategory) -> Self {
        Self {
            category,
            precursor: None,
            temperature: None,
            method: None,
            solvent: None,
            reaction_time: None,
            text_snippet: None,
            confidence: None,
            error: None,
        }
    }

    /// Whether this record is an error marker rather than extracted data
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_is_empty() {
        let record = SynthesisRecord::new(MaterialCategory::MetalOxides);
        assert_eq!(record.category, MaterialCategory::MetalOxides);
        assert!(record.precursor.is_none());
        assert!(record.confidence.is_none());
        assert!(!record.is_error());
    }

    #[test]
    fn test_json_round_trip() {
        let mut record = SynthesisRecord::new(MaterialCategory::CarbonBased);
        record.precursor = Some("glucose".to_string());
        record.temperature = Some("800°C".to_string());
        record.confidence = Some(0.42);

        let json = serde_json::to_string(&record).unwrap();
        let parsed: SynthesisRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, parsed);
    }

    #[test]
    fn test_missing_fields_decode_to_none() {
        let parsed: SynthesisRecord =
            serde_json::from_str(r#"{"category": "Metal Sulfides"}"#).unwrap();
        assert_eq!(parsed.category, MaterialCategory::MetalSulfides);
        assert!(parsed.temperature.is_none());
        assert!(parsed.error.is_none());
    }

    #[test]
    fn test_serializes_absent_fields_as_null() {
        let record = SynthesisRecord::new(MaterialCategory::MetalOxides);
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();
        assert!(json.get("precursor").unwrap().is_null());
        assert!(json.get("confidence").unwrap().is_null());
    }
}
