//! Memoized per-file parse cache.
//!
//! Source files are immutable inputs, so a parsed index is built on first
//! access and kept until [`FileCache::clear`]. Each path owns a `OnceCell`;
//! the map lock is only held to fetch the cell, and the cell's
//! `get_or_try_init` makes concurrent first readers of one file wait for a
//! single parse. Failed reads are not cached.

use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

pub struct FileCache<T> {
    entries: Mutex<HashMap<PathBuf, Arc<OnceCell<Arc<T>>>>>,
    parses: AtomicUsize,
}

impl<T> Default for FileCache<T> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            parses: AtomicUsize::new(0),
        }
    }
}

impl<T> FileCache<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `path`, reading and parsing it on first use.
    pub fn get_or_load<F>(&self, path: &Path, parse: F) -> io::Result<Arc<T>>
    where
        F: FnOnce(&str) -> T,
    {
        let cell = {
            let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
            Arc::clone(entries.entry(path.to_path_buf()).or_default())
        };

        let value = cell.get_or_try_init(|| {
            let content = std::fs::read_to_string(path)?;
            let parsed = parse(&content);
            self.parses.fetch_add(1, Ordering::Relaxed);
            tracing::debug!(path = %path.display(), bytes = content.len(), "parsed source file");
            Ok::<_, io::Error>(Arc::new(parsed))
        })?;

        Ok(Arc::clone(value))
    }

    /// Drop every cached value so edited sources are re-read.
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of files currently held in parsed form.
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .values()
            .filter(|cell| cell.get().is_some())
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total parses performed since construction.
    pub fn parse_count(&self) -> usize {
        self.parses.load(Ordering::Relaxed)
    }
}
