//! Format parsers for the four corpora.
//!
//! Every source parses its raw files into [`BookVerses`] maps keyed by
//! `(chapter, verse)`, caches them per file, and answers lookups through the
//! shared [`select_verses`] algorithm so that range and error semantics are
//! identical across formats.

pub mod douay_rheims;
pub mod hebrew;
pub mod septuagint;
pub mod vulgate;

pub use douay_rheims::DouayRheimsSource;
pub use hebrew::HebrewSource;
pub use septuagint::SeptuagintSource;
pub use vulgate::VulgateSource;

use crate::books::BookEntry;
use crate::lookup::LookupError;
use crate::models::{VerseRecord, VerseSpec};
use crate::translations::Translation;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// One book's verses ordered by `(chapter, verse)`
pub type BookVerses = BTreeMap<(u32, u32), VerseRecord>;

/// Parsed contents of a multi-book source file, keyed by native book name
#[derive(Debug, Default)]
pub struct CorpusIndex {
    books: HashMap<String, Arc<BookVerses>>,
}

impl CorpusIndex {
    pub fn from_books(books: HashMap<String, BookVerses>) -> Self {
        Self {
            books: books.into_iter().map(|(k, v)| (k, Arc::new(v))).collect(),
        }
    }

    pub fn book(&self, key: &str) -> Option<Arc<BookVerses>> {
        self.books.get(key).cloned()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    pub fn verse_count(&self) -> usize {
        self.books.values().map(|b| b.len()).sum()
    }
}

/// Parsed size of one book, as reported by [`VerseSource::summarize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookSummary {
    pub chapters: u32,
    pub verses: usize,
}

/// A corpus that can answer chapter and verse lookups.
pub trait VerseSource: Send + Sync {
    fn translation(&self) -> Translation;

    /// Load (or fetch from cache) the parsed verses of `book`.
    ///
    /// `Ok(None)` means the source was readable but the book never appeared
    /// in it.
    fn load_book(&self, book: &BookEntry) -> Result<Option<Arc<BookVerses>>, LookupError>;

    /// Error reported when the book is absent from the parsed data.
    fn missing_book(&self, book: &BookEntry) -> LookupError;

    fn lookup(
        &self,
        book: &BookEntry,
        chapter: u32,
        spec: Option<VerseSpec>,
    ) -> Result<Vec<VerseRecord>, LookupError> {
        let verses = self.load_book(book)?;
        select_verses(verses.as_deref(), book, chapter, spec, self.translation())
            .map_err(|missing| missing.unwrap_or_else(|| self.missing_book(book)))
    }

    fn format(&self, _book: &BookEntry, chapter: u32, verses: &[VerseRecord]) -> String {
        format_verses(chapter, verses)
    }

    fn summarize(&self, book: &BookEntry) -> Result<BookSummary, LookupError> {
        match self.load_book(book)? {
            Some(verses) if !verses.is_empty() => Ok(BookSummary {
                chapters: max_chapter(&verses),
                verses: verses.len(),
            }),
            _ => Err(self.missing_book(book)),
        }
    }
}

fn max_chapter(verses: &BookVerses) -> u32 {
    verses.keys().next_back().map(|&(chapter, _)| chapter).unwrap_or(0)
}

/// Pick the requested chapter (and optional verse range) out of a book.
///
/// `Err(None)` signals that the book had no entries at all; the caller turns
/// that into its format-specific "not found" error.
pub(crate) fn select_verses(
    verses: Option<&BookVerses>,
    book: &BookEntry,
    chapter: u32,
    spec: Option<VerseSpec>,
    translation: Translation,
) -> Result<Vec<VerseRecord>, Option<LookupError>> {
    let verses = match verses {
        Some(v) if !v.is_empty() => v,
        _ => return Err(None),
    };

    let in_chapter: Vec<VerseRecord> = verses
        .range((chapter, 0)..=(chapter, u32::MAX))
        .map(|(_, record)| record.clone())
        .collect();

    if in_chapter.is_empty() {
        return Err(Some(LookupError::ChapterOutOfRange {
            book: book.name.to_string(),
            max_chapter: max_chapter(verses),
            translation,
        }));
    }

    let Some(spec) = spec else {
        return Ok(in_chapter);
    };

    let max_verse = in_chapter.last().map(|v| v.verse).unwrap_or(0);
    if spec.start > max_verse {
        return Err(Some(LookupError::VerseOutOfRange {
            book: book.name.to_string(),
            chapter,
            max_verse,
            translation,
        }));
    }

    Ok(in_chapter
        .into_iter()
        .filter(|v| spec.contains(v.verse))
        .collect())
}

/// `<chapter>:<verse> <text>` per line.
pub fn format_verses(chapter: u32, verses: &[VerseRecord]) -> String {
    verses
        .iter()
        .map(|v| format!("{}:{} {}", chapter, v.verse, v.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Insert or overwrite; later duplicates of a key win.
pub(crate) fn insert_verse(verses: &mut BookVerses, book: &str, chapter: u32, verse: u32, text: String) {
    if text.is_empty() {
        return;
    }
    verses.insert(
        (chapter, verse),
        VerseRecord {
            book: book.to_string(),
            chapter,
            verse,
            text,
        },
    );
}
