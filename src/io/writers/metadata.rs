use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::processing::pipeline::SpriteReport;
use crate::io::writers::WriterError;

/// Write the processing report as a JSON sidecar next to the output file,
/// replacing the output's extension with `.json`. Returns the sidecar path.
pub fn create_metadata_sidecar(
    report: &SpriteReport,
    output: &Path,
) -> Result<PathBuf, WriterError> {
    let sidecar = output.with_extension("json");
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(&sidecar, json)?;
    info!("Created metadata sidecar: {:?}", sidecar);
    Ok(sidecar)
}
