//! Septuagint word-per-line files, one per book.
//!
//! Each line is `<book>.<chapter>.<verse> <word> ...`; a verse's text is its
//! words joined with single spaces in file order.

use super::{BookVerses, VerseSource};
use crate::books::BookEntry;
use crate::cache::FileCache;
use crate::lookup::LookupError;
use crate::models::VerseRecord;
use crate::translations::Translation;
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;
use std::sync::Arc;

static WORD_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)\s+(.+)$").unwrap());

/// Parse one book file. `key` is recorded as the book of every verse.
pub fn parse_septuagint(key: &str, content: &str) -> BookVerses {
    let mut verses = BookVerses::new();

    for line in content.lines() {
        let Some(caps) = WORD_LINE.captures(line) else {
            continue;
        };
        let (Ok(chapter), Ok(verse)) = (caps[2].parse::<u32>(), caps[3].parse::<u32>()) else {
            continue;
        };
        let word = caps[4].trim();
        if word.is_empty() {
            continue;
        }

        let record = verses.entry((chapter, verse)).or_insert_with(|| VerseRecord {
            book: key.to_string(),
            chapter,
            verse,
            text: String::new(),
        });
        if !record.text.is_empty() {
            record.text.push(' ');
        }
        record.text.push_str(word);
    }

    verses
}

pub struct SeptuagintSource {
    dir: PathBuf,
    cache: FileCache<BookVerses>,
}

impl SeptuagintSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            cache: FileCache::new(),
        }
    }

    pub fn file_for(&self, stem: &str) -> PathBuf {
        self.dir.join(format!("{stem}.txt"))
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}

impl VerseSource for SeptuagintSource {
    fn translation(&self) -> Translation {
        Translation::Septuagint
    }

    fn load_book(&self, book: &BookEntry) -> Result<Option<Arc<BookVerses>>, LookupError> {
        let Some(stem) = book.lxx else {
            return Err(LookupError::NotAvailable {
                book: book.name.to_string(),
                translation: Translation::Septuagint,
            });
        };

        let path = self.file_for(stem);
        match self.cache.get_or_load(&path, |content| parse_septuagint(stem, content)) {
            Ok(verses) => Ok(Some(verses)),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "septuagint file unreadable");
                Err(LookupError::FileUnreadable {
                    book: book.name.to_string(),
                    translation: Translation::Septuagint,
                })
            }
        }
    }

    fn missing_book(&self, book: &BookEntry) -> LookupError {
        LookupError::NoChapters {
            book: book.name.to_string(),
            translation: Translation::Septuagint,
        }
    }
}
