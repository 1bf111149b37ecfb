//! Scholastic Bible Library
//!
//! Verse lookup across four text traditions (Douay-Rheims, Latin Vulgate,
//! Septuagint, Hebrew Masoretic) and generation of a canonical, patched
//! Douay-Rheims document with a flattened search index.
//!
//! # Example
//!
//! ```no_run
//! use scholastic_bible::prelude::*;
//!
//! let library = Library::from_texts_dir("texts");
//!
//! // Translation and book accept loose aliases
//! let passage = library.lookup_verse("latin", "Gen", "1", Some("1-3")).unwrap();
//! println!("{}", passage);
//! ```
//!
//! # Generator Example
//!
//! ```no_run
//! use scholastic_bible::prelude::*;
//!
//! let config = GeneratorConfig::default();
//! let (document, report) = generate(&config, false).unwrap();
//!
//! let index = build_search_index(&document);
//! let stats = search_index_stats(&document);
//! println!("{} books, {} indexed verses", report.books, index.verses.len());
//! println!("{} chapters with summary", stats.chapters_with_summary);
//! ```

pub mod books;
pub mod cache;
pub mod config;
pub mod db;
pub mod generate;
pub mod index;
pub mod lookup;
pub mod models;
pub mod output;
pub mod patches;
pub mod sources;
pub mod translations;
pub mod verse_spec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::books::{
        all_books, book_by_id, book_by_name, list_books, resolve_book, suggest_book, BookEntry,
        BookRegistry,
    };
    pub use crate::cache::FileCache;
    pub use crate::config::{CorpusPaths, GeneratorConfig};
    pub use crate::db::{export_database, load_corpus_stats, load_verse_text, DbError};
    pub use crate::generate::{
        build_document, generate, load_document, parse_annotated, AnnotatedCorpus, GenerateError,
    };
    pub use crate::index::{build_search_index, search_index_stats};
    pub use crate::lookup::{BookCheck, ErrorKind, Library, LookupError, LookupResponse};
    pub use crate::models::{
        BookDocument, CanonicalDocument, ChapterDocument, CorpusStats, GenerateReport, PatchEntry,
        SearchEntry, SearchIndex, SearchIndexStats, Testament, VerseDocument, VerseRecord,
        VerseSpec,
    };
    pub use crate::output::{
        print_corpus_stats, print_generate_summary, print_search_index_summary,
        print_verification, write_json, write_json_file, OutputError,
    };
    pub use crate::patches::{load_patches, patch_key, PatchSet};
    pub use crate::sources::{
        format_verses, BookSummary, BookVerses, DouayRheimsSource, HebrewSource,
        SeptuagintSource, VerseSource, VulgateSource,
    };
    pub use crate::translations::{
        available_translations, list_translations, resolve_translation, Translation,
    };
    pub use crate::verse_spec::{parse_verse_spec, VerseSpecError};
}

// Re-export commonly used types at the crate root
pub use lookup::{Library, LookupError, LookupResponse};
pub use models::{CanonicalDocument, VerseRecord, VerseSpec};
pub use translations::Translation;
