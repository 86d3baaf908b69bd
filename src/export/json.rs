use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::consts::EXPORT_FORMAT;
use crate::core::Result;
use crate::demo::{self, DemoSample};

/// Build the export document for a set of samples
pub fn demo_document(samples: &[DemoSample]) -> serde_json::Value {
    json!({
        "export_format": EXPORT_FORMAT,
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "total_samples": samples.len(),
        "samples": samples,
    })
}

/// Write every demonstration sample to `path` as pretty-printed JSON.
///
/// Returns the number of samples written.
pub fn export_demo_to_json<P: AsRef<Path>>(path: P) -> Result<usize> {
    let samples = demo::samples()?;
    let export = demo_document(&samples);

    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&export)?)?;
    info!(
        "Exported {} sample(s) → {}",
        samples.len(),
        path.as_ref().display()
    );

    Ok(samples.len())
}
