//! Output Module
//!
//! Serializes the parsed database to its JSON document and reads it back.
//!
//! ## Document Shape
//! ```text
//! {
//!   "index":  { "<class key>": [<spell id>, ...], ... },
//!   "spells": { "<spell id>": { <record> }, ... }
//! }
//! ```
//!
//! Writes go to a temporary sibling file that is renamed into place, so
//! a failed run never leaves a partial document behind.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::classifier::ParsedDatabase;
use crate::error::{ExtractError, Result};

/// Size and checksum of a written document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStats {
    pub bytes: usize,
    pub crc32: u32,
}

/// Serialize `database` to JSON bytes
pub fn to_json(database: &ParsedDatabase, pretty: bool) -> Result<Vec<u8>> {
    let bytes = if pretty {
        serde_json::to_vec_pretty(database)?
    } else {
        serde_json::to_vec(database)?
    };
    Ok(bytes)
}

/// Write `database` to `path`, replacing any existing file
pub fn write_database(database: &ParsedDatabase, path: &Path, pretty: bool) -> Result<OutputStats> {
    let bytes = to_json(database, pretty)?;
    let stats = OutputStats {
        bytes: bytes.len(),
        crc32: crc32fast::hash(&bytes),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let temp_path = temp_path_for(path)?;
    {
        let mut writer = BufWriter::new(File::create(&temp_path)?);
        writer.write_all(&bytes)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
    }
    fs::rename(&temp_path, path)?;

    tracing::info!(
        "Wrote {} ({} bytes, crc32={:08x})",
        path.display(),
        stats.bytes,
        stats.crc32
    );
    Ok(stats)
}

/// Read a document written by [`write_database`]
pub fn read_database(path: &Path) -> Result<ParsedDatabase> {
    if !path.is_file() {
        return Err(ExtractError::MissingInput(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| ExtractError::Config(format!("Output path has no file name: {}", path.display())))?;
    let mut temp_name = name.to_os_string();
    temp_name.push(".tmp");
    Ok(path.with_file_name(temp_name))
}
