//! Lookup orchestration: resolve user input, dispatch to a source, format.
//!
//! [`Library`] owns one source per translation (and therefore one parse cache
//! per source). Every failure is a [`LookupError`] whose `Display` text is the
//! exact message shown to the reader.

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::books::{all_books, resolve_book, suggest_book, BookEntry};
use crate::config::CorpusPaths;
use crate::models::VerseSpec;
use crate::sources::{
    BookSummary, DouayRheimsSource, HebrewSource, SeptuagintSource, VerseSource, VulgateSource,
};
use crate::translations::{available_translations, resolve_translation, Translation};
use crate::verse_spec::parse_verse_spec;

/// Lookup errors. The display text is the user-facing message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("Unknown translation \"{input}\". Available translations:\n{}", available_translations())]
    UnknownTranslation { input: String },

    #[error("Unknown book \"{input}\".{}", did_you_mean(.suggestion.as_deref()))]
    UnknownBook {
        input: String,
        suggestion: Option<String>,
    },

    #[error("Invalid chapter \"{input}\". Must be a positive number.")]
    InvalidChapter { input: String },

    #[error("Invalid verse \"{input}\". Use a number (e.g., 1) or range (e.g., 1-5).")]
    InvalidVerse { input: String },

    #[error("Book \"{book}\" not found in {}.", .translation.source_name())]
    BookNotFound {
        book: String,
        translation: Translation,
    },

    #[error("No chapters found for \"{book}\" in {}.", .translation.source_name())]
    NoChapters {
        book: String,
        translation: Translation,
    },

    #[error("{book} only has {max_chapter} chapters{}.", .translation.range_suffix())]
    ChapterOutOfRange {
        book: String,
        max_chapter: u32,
        translation: Translation,
    },

    #[error("{book} {chapter} only has {max_verse} verses{}.", .translation.range_suffix())]
    VerseOutOfRange {
        book: String,
        chapter: u32,
        max_verse: u32,
        translation: Translation,
    },

    #[error("Book \"{book}\" not available in {}.", .translation.source_name())]
    NotAvailable {
        book: String,
        translation: Translation,
    },

    #[error("Hebrew text not available for {book} (deuterocanonical). Try: lxx, vulgate, dr")]
    Deuterocanonical { book: String },

    #[error("Could not read {} file for \"{book}\".", .translation.source_name())]
    FileUnreadable {
        book: String,
        translation: Translation,
    },

    #[error("Could not read {} source {}: {reason}", .translation.source_name(), .path.display())]
    SourceUnreadable {
        translation: Translation,
        path: PathBuf,
        reason: String,
    },

    #[error("No verses found.")]
    NoVerses,
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    match suggestion {
        Some(name) => format!(" Did you mean \"{}\"?", name),
        None => String::new(),
    }
}

/// Coarse classification of lookup failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    UnresolvableAlias,
    MalformedInput,
    OutOfRange,
    Unavailable,
    Empty,
    Io,
}

impl LookupError {
    pub(crate) fn source_unreadable(translation: Translation, path: &Path, err: &io::Error) -> Self {
        tracing::warn!(%translation, path = %path.display(), error = %err, "source file unreadable");
        LookupError::SourceUnreadable {
            translation,
            path: path.to_path_buf(),
            reason: err.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            LookupError::UnknownTranslation { .. } | LookupError::UnknownBook { .. } => {
                ErrorKind::UnresolvableAlias
            }
            LookupError::InvalidChapter { .. } | LookupError::InvalidVerse { .. } => {
                ErrorKind::MalformedInput
            }
            LookupError::ChapterOutOfRange { .. } | LookupError::VerseOutOfRange { .. } => {
                ErrorKind::OutOfRange
            }
            LookupError::BookNotFound { .. }
            | LookupError::NoChapters { .. }
            | LookupError::NotAvailable { .. }
            | LookupError::Deuterocanonical { .. } => ErrorKind::Unavailable,
            LookupError::NoVerses => ErrorKind::Empty,
            LookupError::FileUnreadable { .. } | LookupError::SourceUnreadable { .. } => {
                ErrorKind::Io
            }
        }
    }
}

/// Serializable lookup outcome; exactly one field is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<String, LookupError>> for LookupResponse {
    fn from(result: Result<String, LookupError>) -> Self {
        match result {
            Ok(output) => LookupResponse {
                output: Some(output),
                error: None,
            },
            Err(e) => LookupResponse {
                output: None,
                error: Some(e.to_string()),
            },
        }
    }
}

/// Per-book outcome of [`Library::verify`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookCheck {
    pub book: &'static BookEntry,
    pub result: Result<BookSummary, LookupError>,
}

/// The four corpora behind one set of paths.
pub struct Library {
    paths: CorpusPaths,
    douay_rheims: DouayRheimsSource,
    vulgate: VulgateSource,
    septuagint: SeptuagintSource,
    hebrew: HebrewSource,
}

impl Library {
    pub fn new(paths: CorpusPaths) -> Self {
        Self {
            douay_rheims: DouayRheimsSource::new(&paths.douay_rheims),
            vulgate: VulgateSource::new(&paths.vulgate),
            septuagint: SeptuagintSource::new(&paths.septuagint_dir),
            hebrew: HebrewSource::new(&paths.hebrew_dir),
            paths,
        }
    }

    pub fn from_texts_dir(root: impl AsRef<Path>) -> Self {
        Self::new(CorpusPaths::from_texts_dir(root))
    }

    pub fn paths(&self) -> &CorpusPaths {
        &self.paths
    }

    pub fn source(&self, translation: Translation) -> &dyn VerseSource {
        match translation {
            Translation::DouayRheims => &self.douay_rheims,
            Translation::Vulgate => &self.vulgate,
            Translation::Septuagint => &self.septuagint,
            Translation::Hebrew => &self.hebrew,
        }
    }

    /// Look up a chapter or verse range and render it with a header.
    ///
    /// All four arguments are raw user input: translation and book go through
    /// the alias registries, chapter must be a positive integer, and verse is
    /// a single number or an inclusive `a-b` range.
    pub fn lookup_verse(
        &self,
        translation: &str,
        book: &str,
        chapter: &str,
        verse: Option<&str>,
    ) -> Result<String, LookupError> {
        let translation_key = resolve_translation(translation).ok_or_else(|| {
            LookupError::UnknownTranslation {
                input: translation.to_string(),
            }
        })?;

        let entry = resolve_book(book).ok_or_else(|| LookupError::UnknownBook {
            input: book.to_string(),
            suggestion: suggest_book(book).map(str::to_string),
        })?;

        let chapter_num = parse_chapter(chapter)?;

        let spec = parse_verse_spec(verse).map_err(|_| LookupError::InvalidVerse {
            input: verse.unwrap_or_default().to_string(),
        })?;

        tracing::debug!(
            translation = %translation_key,
            book = entry.id,
            chapter = chapter_num,
            ?spec,
            "lookup"
        );

        let source = self.source(translation_key);
        let verses = source.lookup(entry, chapter_num, spec)?;
        if verses.is_empty() {
            return Err(LookupError::NoVerses);
        }

        let header = format_header(entry, chapter_num, spec, translation_key);
        let rule = "─".repeat(header.chars().count());
        let body = source.format(entry, chapter_num, &verses);
        Ok(format!("{}\n{}\n{}", header, rule, body))
    }

    /// [`Library::lookup_verse`] folded into the `{output, error}` contract.
    pub fn lookup_response(
        &self,
        translation: &str,
        book: &str,
        chapter: &str,
        verse: Option<&str>,
    ) -> LookupResponse {
        self.lookup_verse(translation, book, chapter, verse).into()
    }

    /// Load every book the translation carries and report its size.
    ///
    /// Books are loaded in parallel; results come back in registry order.
    pub fn verify(&self, translation: Translation, show_progress: bool) -> Vec<BookCheck> {
        let books: Vec<&'static BookEntry> = all_books()
            .iter()
            .filter(|b| b.is_available_in(translation))
            .collect();

        if show_progress {
            eprintln!(
                "Verifying {} books in {}...",
                books.len(),
                translation.display_name()
            );
        }

        let progress = if show_progress {
            let pb = ProgressBar::new(books.len() as u64);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("#>-"),
            );
            Some(pb)
        } else {
            None
        };

        let source = self.source(translation);
        let checks: Vec<BookCheck> = books
            .par_iter()
            .map(|&book| {
                let result = source.summarize(book);
                if let Some(ref pb) = progress {
                    pb.set_message(book.name);
                    pb.inc(1);
                }
                BookCheck { book, result }
            })
            .collect();

        if let Some(pb) = progress {
            pb.finish_with_message("Done");
        }

        checks
    }

    /// Forget every parsed file so edited sources are re-read.
    pub fn clear_caches(&self) {
        self.douay_rheims.clear_cache();
        self.vulgate.clear_cache();
        self.septuagint.clear_cache();
        self.hebrew.clear_cache();
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new(CorpusPaths::default())
    }
}

/// Digits only; `parse` alone would also take a leading `+`.
fn parse_chapter(input: &str) -> Result<u32, LookupError> {
    let invalid = || LookupError::InvalidChapter {
        input: input.to_string(),
    };
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    match input.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(invalid()),
    }
}

/// `<Book> <chapter>[:<start>[-<end>]] (<translation>)`
fn format_header(
    book: &BookEntry,
    chapter: u32,
    spec: Option<VerseSpec>,
    translation: Translation,
) -> String {
    let reference = match spec {
        None => format!("{} {}", book.name, chapter),
        Some(s) if s.is_single() => format!("{} {}:{}", book.name, chapter, s.start),
        Some(s) => format!("{} {}:{}-{}", book.name, chapter, s.start, s.end),
    };
    format!("{} ({})", reference, translation.display_name())
}
