//! Output writers for extracted records.

use crate::error::Result;
use nanosynth_domain::SynthesisRecord;
use std::path::Path;
use tracing::{info, warn};

/// Save records as a pretty-printed JSON array.
pub fn save_to_json(records: &[SynthesisRecord], path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;

    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, records)?;

    info!(path = %path.display(), records = records.len(), "Saved extracted parameters");
    Ok(())
}

/// Save records as CSV with a header row.
pub fn save_to_csv(records: &[SynthesisRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        warn!("No data to save to CSV");
        return Ok(());
    }
    ensure_parent_dir(path)?;

    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!(path = %path.display(), records = records.len(), "Saved extracted parameters");
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}
