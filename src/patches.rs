//! Editorial patch overlay.
//!
//! A patch directory holds JSON objects mapping `Abbrev:Chapter:Verse` keys to
//! [`PatchEntry`] values. Files are applied in filename order, so a later file
//! overrides an earlier one for the same key.

use crate::generate::GenerateError;
use crate::models::PatchEntry;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

pub type PatchSet = HashMap<String, PatchEntry>;

/// Key under which a verse's patch is stored.
pub fn patch_key(abbrev: &str, chapter: u32, verse: u32) -> String {
    format!("{}:{}:{}", abbrev, chapter, verse)
}

/// Load every `*.json` file in `dir`. A missing directory yields no patches.
pub fn load_patches(dir: &Path) -> Result<PatchSet, GenerateError> {
    let mut patches = PatchSet::new();

    if !dir.is_dir() {
        tracing::warn!(dir = %dir.display(), "patch directory not found; continuing without patches");
        return Ok(patches);
    }

    for path in patch_files(dir)? {
        let content = fs::read_to_string(&path).map_err(|source| GenerateError::Io {
            path: path.clone(),
            source,
        })?;
        let entries: HashMap<String, PatchEntry> =
            serde_json::from_str(&content).map_err(|source| GenerateError::Patch {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(path = %path.display(), entries = entries.len(), "loaded patch file");
        patches.extend(entries);
    }

    Ok(patches)
}

/// `*.json` files directly under `dir`, sorted by file name.
fn patch_files(dir: &Path) -> Result<Vec<PathBuf>, GenerateError> {
    let io_err = |source| GenerateError::Io {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(files)
}
