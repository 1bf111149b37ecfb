//! Hebrew outline files (`* <chapter>` headings, `<verse>. text` items).

use super::{insert_verse, BookVerses, VerseSource};
use crate::books::BookEntry;
use crate::cache::FileCache;
use crate::lookup::LookupError;
use crate::translations::Translation;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use std::sync::Arc;

static CHAPTER_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\*\s+([0-9]+)\s*$").unwrap());
static VERSE_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)\.\s+(.+)$").unwrap());

/// Parse one outline file. Verse items before the first heading are ignored.
pub fn parse_hebrew(key: &str, content: &str) -> BookVerses {
    let mut verses = BookVerses::new();
    let mut chapter = 0u32;

    for raw in content.lines() {
        let line = raw.trim();

        if let Some(caps) = CHAPTER_HEADING.captures(line) {
            chapter = caps[1].parse().unwrap_or(0);
            continue;
        }

        if chapter == 0 {
            continue;
        }
        if let Some(caps) = VERSE_ITEM.captures(line) {
            if let Ok(verse) = caps[1].parse::<u32>() {
                insert_verse(&mut verses, key, chapter, verse, caps[2].trim().to_string());
            }
        }
    }

    verses
}

pub struct HebrewSource {
    dir: PathBuf,
    cache: FileCache<BookVerses>,
}

impl HebrewSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: FileCache::new(),
        }
    }

    pub fn file_for(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.org"))
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl VerseSource for HebrewSource {
    fn translation(&self) -> Translation {
        Translation::Hebrew
    }

    fn load_book(&self, book: &BookEntry) -> Result<Option<Arc<BookVerses>>, LookupError> {
        let Some(stem) = book.hebrew else {
            if book.is_deuterocanonical() {
                return Err(LookupError::Deuterocanonical {
                    book: book.name.to_string(),
                });
            }
            return Err(LookupError::NotAvailable {
                book: book.name.to_string(),
                translation: Translation::Hebrew,
            });
        };

        let path = self.file_for(stem);
        match self.cache.get_or_load(&path, |content| parse_hebrew(stem, content)) {
            Ok(verses) => Ok(Some(verses)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "hebrew file unreadable");
                Err(LookupError::FileUnreadable {
                    book: book.name.to_string(),
                    translation: Translation::Hebrew,
                })
            }
        }
    }

    fn missing_book(&self, book: &BookEntry) -> LookupError {
        LookupError::NoChapters {
            book: book.name.to_string(),
            translation: Translation::Hebrew,
        }
    }
}
