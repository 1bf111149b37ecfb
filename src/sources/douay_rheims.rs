//! Douay-Rheims prose file.
//!
//! The file is a long run of `<Book> Chapter <n>` headers, `<c>:<v>. text`
//! verse lines, wrapped continuation lines, and interleaved commentary
//! paragraphs introduced by a capitalized word followed by four dots.

use super::{insert_verse, BookVerses, CorpusIndex, VerseSource};
use crate::books::BookEntry;
use crate::cache::FileCache;
use crate::lookup::LookupError;
use crate::translations::Translation;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

pub(crate) static CHAPTER_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_\s]+?) Chapter ([0-9]+)$").unwrap());
pub(crate) static VERSE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]+):([0-9]+)\.\s*(.*)$").unwrap());

static COMMENTARY_ONE_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][a-z]+\.\.\.\.").unwrap());
static COMMENTARY_TWO_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+ [a-z]+\.\.\.\.").unwrap());

/// `Word....` at the start of a line opens a commentary note.
pub(crate) fn is_commentary(line: &str) -> bool {
    COMMENTARY_ONE_WORD.is_match(line)
}

/// Lookup also skips the two-word form, e.g. `Lamb of....` style notes.
fn is_lookup_commentary(line: &str) -> bool {
    COMMENTARY_ONE_WORD.is_match(line) || COMMENTARY_TWO_WORD.is_match(line)
}

/// Accumulates the verse currently being read.
struct OpenVerse {
    chapter: u32,
    verse: u32,
    parts: Vec<String>,
}

/// Parse the whole prose file into per-book verse maps.
///
/// Books are keyed by their lowercased header name so that lookups are
/// case-insensitive.
pub fn parse_douay_rheims(content: &str) -> CorpusIndex {
    let mut books: HashMap<String, BookVerses> = HashMap::new();
    let mut book: Option<String> = None;
    let mut chapter = 0u32;
    let mut open: Option<OpenVerse> = None;

    let mut flush = |book: &Option<String>, open: &mut Option<OpenVerse>| {
        if let (Some(name), Some(v)) = (book, open.take()) {
            let text = v.parts.join(" ").trim().to_string();
            let verses = books.entry(name.to_lowercase()).or_default();
            insert_verse(verses, name, v.chapter, v.verse, text);
        }
    };

    for raw in content.lines() {
        let line = raw.trim();

        if let Some(caps) = CHAPTER_HEADER.captures(line) {
            flush(&book, &mut open);
            book = Some(caps[1].trim().to_string());
            chapter = caps[2].parse().unwrap_or(0);
            continue;
        }

        if book.is_some() {
            if let Some(caps) = VERSE_LINE.captures(line) {
                flush(&book, &mut open);
                // The verse line's own chapter number wins over the header
                chapter = caps[1].parse().unwrap_or(chapter);
                let verse = caps[2].parse().unwrap_or(0);
                open = Some(OpenVerse {
                    chapter,
                    verse,
                    parts: vec![caps[3].to_string()],
                });
                continue;
            }
        }

        if let Some(v) = open.as_mut() {
            if !line.is_empty() && !is_lookup_commentary(line) {
                v.parts.push(line.to_string());
            }
        }
    }
    flush(&book, &mut open);

    CorpusIndex::from_books(books)
}

pub struct DouayRheimsSource {
    path: PathBuf,
    cache: FileCache<CorpusIndex>,
}

impl DouayRheimsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: FileCache::new(),
        }
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    pub fn load(&self) -> Result<Arc<CorpusIndex>, LookupError> {
        self.cache
            .get_or_load(&self.path, parse_douay_rheims)
            .map_err(|e| LookupError::source_unreadable(Translation::DouayRheims, &self.path, &e))
    }
}

impl VerseSource for DouayRheimsSource {
    fn translation(&self) -> Translation {
        Translation::DouayRheims
    }

    fn load_book(&self, book: &BookEntry) -> Result<Option<Arc<BookVerses>>, LookupError> {
        let Some(native) = book.dr else {
            return Err(LookupError::NotAvailable {
                book: book.name.to_string(),
                translation: Translation::DouayRheims,
            });
        };
        Ok(self.load()?.book(&native.to_lowercase()))
    }

    fn missing_book(&self, book: &BookEntry) -> LookupError {
        LookupError::BookNotFound {
            book: book.name.to_string(),
            translation: Translation::DouayRheims,
        }
    }
}
