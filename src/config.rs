//! Filesystem layout of the corpora and the generator's outputs.
//!
//! Defaults are relative to the working directory. The CLI overlays any
//! explicitly given path onto these.

use std::path::{Path, PathBuf};

pub const DEFAULT_TEXTS_DIR: &str = "texts";
pub const DEFAULT_PATCHES_DIR: &str = "patches";
pub const DEFAULT_OUTPUT: &str = "site/src/data/bible.json";
pub const DEFAULT_SEARCH_INDEX: &str = "site/public/search-index.json";

/// Where each translation's source files live
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusPaths {
    pub douay_rheims: PathBuf,
    pub vulgate: PathBuf,
    pub septuagint_dir: PathBuf,
    pub hebrew_dir: PathBuf,
}

impl CorpusPaths {
    /// Standard layout under a single texts directory.
    pub fn from_texts_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            douay_rheims: root.join("douay-rheims").join("douay-rheims.txt"),
            vulgate: root.join("vulgate").join("vulgate.tsv"),
            septuagint_dir: root.join("septuagint"),
            hebrew_dir: root.join("hebrew"),
        }
    }
}

impl Default for CorpusPaths {
    fn default() -> Self {
        Self::from_texts_dir(DEFAULT_TEXTS_DIR)
    }
}

/// Inputs and outputs of the canonical generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Douay-Rheims prose file the canonical document is built from
    pub source: PathBuf,
    pub patches_dir: PathBuf,
    /// Canonical `bible.json`
    pub output: PathBuf,
    /// Flattened search index JSON
    pub search_index: PathBuf,
}

impl GeneratorConfig {
    /// Standard layout under a project root.
    pub fn from_project_root(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            source: CorpusPaths::from_texts_dir(root.join(DEFAULT_TEXTS_DIR)).douay_rheims,
            patches_dir: root.join(DEFAULT_PATCHES_DIR),
            output: root.join(DEFAULT_OUTPUT),
            search_index: root.join(DEFAULT_SEARCH_INDEX),
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: CorpusPaths::default().douay_rheims,
            patches_dir: PathBuf::from(DEFAULT_PATCHES_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            search_index: PathBuf::from(DEFAULT_SEARCH_INDEX),
        }
    }
}
