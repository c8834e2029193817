use serde::Serialize;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::info;

use crate::config::FlattenConfig;
use crate::error::{FlattenError, Result};
use crate::parser::Dataset;
use crate::transform::flatten;

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenSummary {
    pub records: usize,
    pub output: PathBuf,
}

/// Pretty-print `value` as JSON into `path`.
///
/// The document is written to a temporary file next to `path` and renamed over
/// it once fully flushed, so a failed write never leaves a partial file behind.
/// An existing target keeps its permissions; a new one gets the umask default.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let io_error = |source: std::io::Error| FlattenError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = create_temp(dir, path).map_err(io_error)?;
    let mut writer = BufWriter::new(temp);

    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
        FlattenError::Serialization {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.write_all(b"\n").map_err(io_error)?;

    let temp = writer
        .into_inner()
        .map_err(|e| io_error(e.into_error()))?;
    temp.as_file().sync_all().map_err(io_error)?;
    temp.persist(path).map_err(|e| io_error(e.error))?;

    Ok(())
}

/// Temp file in `dir` carrying the mode a plain write to `target` would get
fn create_temp(dir: &Path, target: &Path) -> io::Result<NamedTempFile> {
    let mut builder = tempfile::Builder::new();

    // open(2) applies the umask to this mode
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let temp = builder.tempfile_in(dir)?;
    if let Ok(metadata) = fs::metadata(target) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }
    Ok(temp)
}

/// Load the tables from `config.data_dir`, flatten them and write the sheet
pub fn convert_to_json(config: &FlattenConfig) -> Result<FlattenSummary> {
    let dataset = Dataset::load(&config.data_dir)?;
    let records = flatten(&dataset, &config.options)?;

    write_json_atomic(&config.output, &records)?;
    info!(
        records = records.len(),
        output = %config.output.display(),
        "Wrote JSON sheet"
    );

    Ok(FlattenSummary {
        records: records.len(),
        output: config.output.clone(),
    })
}
