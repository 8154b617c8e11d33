//! Normalize raw model output into synthesis records
//!
//! The generative backend is supposed to return a JSON array, but in
//! practice wraps it in Markdown fences, leaks Unicode escape sequences
//! into field values, double-encodes UTF-8, or returns something that is
//! not JSON at all. This module absorbs all of that: it never returns an
//! error and never panics on model output. A completely unparsable
//! response becomes a single error-marked record so one bad document can
//! never abort a batch.

use nanosynth_domain::{MaterialCategory, SynthesisRecord};
use serde_json::{Map, Value};
use tracing::{error, warn};

/// Marker stored in `SynthesisRecord::error` when parsing failed outright
pub const INVALID_FORMAT_MARKER: &str = "Invalid response format";

/// Turn a raw model response into records for the requested category
///
/// A top-level JSON object is treated as a one-element array. Whatever
/// category the model claimed is discarded; every record carries the
/// requested one.
pub fn normalize(raw_response: &str, category: MaterialCategory) -> Vec<SynthesisRecord> {
    let stripped = strip_code_fence(raw_response);

    let parsed: Value = match serde_json::from_str(stripped) {
        Ok(value) => value,
        Err(e) => {
            error!("Failed to parse model response as JSON: {}", e);
            error!("Full response: {}", raw_response);
            return vec![invalid_format_record(category)];
        }
    };

    let entries = match parsed {
        Value::Array(items) => items,
        Value::Object(_) => vec![parsed],
        other => {
            error!("Model response is neither object nor array: {}", other);
            return vec![invalid_format_record(category)];
        }
    };

    let mut records = Vec::with_capacity(entries.len());
    for (idx, entry) in entries.into_iter().enumerate() {
        match entry {
            Value::Object(map) => records.push(record_from_entry(map, category)),
            _ => warn!(index = idx, "Skipping non-object entry in model output"),
        }
    }
    records
}

/// The record emitted when the response could not be parsed at all
fn invalid_format_record(category: MaterialCategory) -> SynthesisRecord {
    let mut record = SynthesisRecord::new(category);
    record.error = Some(INVALID_FORMAT_MARKER.to_string());
    record
}

/// Strip a surrounding Markdown code fence, tagged `json` or bare
fn strip_code_fence(response: &str) -> &str {
    let trimmed = response.trim();

    if let Some(inner) = trimmed
        .strip_prefix("```json")
        .and_then(|rest| rest.strip_suffix("```"))
    {
        return inner.trim();
    }
    if let Some(inner) = trimmed
        .strip_prefix("```")
        .and_then(|rest| rest.strip_suffix("```"))
    {
        return inner.trim();
    }
    trimmed
}

/// Build a record from one parsed entry, forcing the category
fn record_from_entry(entry: Map<String, Value>, category: MaterialCategory) -> SynthesisRecord {
    let mut record = SynthesisRecord::new(category);
    record.precursor = text_field(&entry, "precursor");
    record.temperature = text_field(&entry, "temperature");
    record.method = text_field(&entry, "method");
    record.solvent = text_field(&entry, "solvent");
    record.reaction_time = text_field(&entry, "reaction_time");
    record.text_snippet = text_field(&entry, "text_snippet");
    record
}

/// Read a field leniently: strings are repaired, null/missing become
/// `None`, and non-string scalars keep their JSON rendering untouched
fn text_field(entry: &Map<String, Value>, key: &str) -> Option<String> {
    match entry.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(repair_field(s, key)),
        Some(other) => Some(other.to_string()),
    }
}

/// Repair a string field's encoding artifacts
///
/// Two stages, each contained: literal `°` / `⋅` escape
/// sequences become their characters, then mojibake markers trigger a
/// latin-1 reinterpretation. A failed reinterpretation keeps the value
/// from the first stage.
fn repair_field(value: &str, field: &str) -> String {
    let repaired = value.replace("\\u00b0", "°").replace("\\u22c5", "⋅");

    if repaired.contains('Â') || repaired.contains('â') {
        match redecode_double_utf8(&repaired) {
            Some(decoded) => return decoded,
            None => warn!(field, "Failed to re-decode mojibake, keeping original value"),
        }
    }
    repaired
}

/// Undo one round of latin-1-as-UTF-8 double encoding
///
/// Characters above U+00FF cannot have come from a latin-1 misread and
/// are dropped, mirroring a lossy re-encode; the byte string must then
/// decode as strict UTF-8 or the repair is rejected.
fn redecode_double_utf8(s: &str) -> Option<String> {
    let bytes: Vec<u8> = s
        .chars()
        .filter(|&c| (c as u32) <= 0xFF)
        .map(|c| c as u8)
        .collect();
    String::from_utf8(bytes).ok()
}
