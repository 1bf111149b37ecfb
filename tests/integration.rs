//! Integration tests for scholastic-bible.
//!
//! These run lookups, verification and generation against the small corpora
//! under `tests/fixtures/`.

use std::path::PathBuf;
use std::sync::Arc;

use scholastic_bible::books::{resolve_book, suggest_book};
use scholastic_bible::config::GeneratorConfig;
use scholastic_bible::db::{export_database, load_corpus_stats};
use scholastic_bible::generate::{generate, load_document, parse_annotated};
use scholastic_bible::index::{build_search_index, search_index_stats};
use scholastic_bible::lookup::{ErrorKind, Library, LookupError};
use scholastic_bible::sources::douay_rheims::parse_douay_rheims;
use scholastic_bible::translations::Translation;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

fn library() -> Library {
    Library::from_texts_dir(fixtures().join("texts"))
}

/// Lookup that is expected to succeed, split into (header, rule, body lines).
fn lookup_ok(translation: &str, book: &str, chapter: &str, verse: Option<&str>) -> (String, String, Vec<String>) {
    let output = library()
        .lookup_verse(translation, book, chapter, verse)
        .unwrap_or_else(|e| panic!("lookup failed: {}", e));
    let mut lines = output.lines().map(str::to_string);
    let header = lines.next().unwrap();
    let rule = lines.next().unwrap();
    (header, rule, lines.collect())
}

fn lookup_err(translation: &str, book: &str, chapter: &str, verse: Option<&str>) -> LookupError {
    library()
        .lookup_verse(translation, book, chapter, verse)
        .unwrap_err()
}

// ============================================================================
// Lookup
// ============================================================================

#[test]
fn test_vulgate_single_verse() {
    let (header, rule, body) = lookup_ok("vulgate", "Genesis", "1", Some("1"));

    assert_eq!(header, "Genesis 1:1 (Latin Vulgate)");
    assert_eq!(rule, "─".repeat(header.chars().count()));
    assert_eq!(body, vec!["1:1 In principio creavit Deus caelum et terram."]);
}

#[test]
fn test_aliases_give_identical_output() {
    let lib = library();
    let canonical = lib.lookup_verse("vulgate", "Genesis", "1", None).unwrap();

    for (translation, book) in [("latin", "gen"), ("VUL", "Gn"), ("Vulgate", "GENESIS")] {
        assert_eq!(
            lib.lookup_verse(translation, book, "1", None).unwrap(),
            canonical,
            "{} {}",
            translation,
            book
        );
    }
}

#[test]
fn test_vulgate_text_keeps_inner_tabs() {
    let (_, _, body) = lookup_ok("vulgate", "Matthew", "1", None);
    assert_eq!(body, vec!["1:1 liber generationis Iesu Christi\tfilii David"]);
}

#[test]
fn test_douay_rheims_chapter_with_continuations() {
    let (header, _, body) = lookup_ok("dr", "Genesis", "1", None);

    assert_eq!(header, "Genesis 1 (Douay-Rheims)");
    assert_eq!(body.len(), 3);
    assert_eq!(
        body[1],
        "1:2 And the earth was void and empty, and darkness was upon the face of the deep; and the spirit of God moved over the waters."
    );
    assert!(body.iter().all(|line| !line.contains("Holy Ghost")));
}

#[test]
fn test_douay_rheims_skips_two_word_commentary() {
    let (_, _, body) = lookup_ok("douay", "Matt", "1", Some("1"));
    assert_eq!(
        body,
        vec!["1:1 The book of the generation of Jesus Christ, the son of David, the son of Abraham."]
    );
}

#[test]
fn test_range_lookup() {
    let (header, _, body) = lookup_ok("hebrew", "Genesis", "1", Some("2-3"));

    assert_eq!(header, "Genesis 1:2-3 (Hebrew Masoretic)");
    assert_eq!(body.len(), 2);
    assert!(body[0].starts_with("1:2 "));
    assert!(body[1].starts_with("1:3 "));
}

#[test]
fn test_range_past_chapter_end_is_clipped() {
    let (_, _, body) = lookup_ok("dr", "Genesis", "1", Some("2-40"));
    assert_eq!(body.len(), 2);
}

#[test]
fn test_septuagint_words_joined() {
    let (header, _, body) = lookup_ok("greek", "Genesis", "1", None);

    assert_eq!(header, "Genesis 1 (Septuagint (Greek))");
    assert_eq!(body[0], "1:1 ἐν ἀρχῇ ἐποίησεν ὁ θεὸς τὸν οὐρανὸν καὶ τὴν γῆν");
    assert_eq!(body[1], "1:2 ἡ δὲ γῆ ἦν ἀόρατος");
}

#[test]
fn test_chapter_out_of_range_reports_true_maximum() {
    assert_eq!(
        lookup_err("dr", "Genesis", "999", None).to_string(),
        "Genesis only has 3 chapters."
    );
    assert_eq!(
        lookup_err("lxx", "Genesis", "9", None).to_string(),
        "Genesis only has 2 chapters in Septuagint."
    );
    assert_eq!(
        lookup_err("hebrew", "Genesis", "3", None).to_string(),
        "Genesis only has 2 chapters in Hebrew."
    );
}

#[test]
fn test_verse_out_of_range() {
    let err = lookup_err("dr", "Genesis", "1", Some("5"));
    assert_eq!(err.to_string(), "Genesis 1 only has 3 verses.");
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_reversed_range_finds_nothing() {
    let err = lookup_err("vulgate", "Genesis", "1", Some("3-1"));
    assert_eq!(err.to_string(), "No verses found.");
    assert_eq!(err.kind(), ErrorKind::Empty);
}

#[test]
fn test_hebrew_deuterocanonical() {
    let err = lookup_err("hebrew", "Tobias", "1", None);
    assert_eq!(
        err.to_string(),
        "Hebrew text not available for Tobias (deuterocanonical). Try: lxx, vulgate, dr"
    );
    assert_eq!(err.kind(), ErrorKind::Unavailable);
}

#[test]
fn test_book_missing_from_source() {
    assert_eq!(
        lookup_err("vulgate", "Exodus", "1", None).to_string(),
        "Book \"Exodus\" not found in Vulgate."
    );
    assert_eq!(
        lookup_err("dr", "Exodus", "1", None).to_string(),
        "Book \"Exodus\" not found in Douay-Rheims."
    );
    assert_eq!(
        lookup_err("lxx", "Exodus", "1", None).to_string(),
        "Could not read Septuagint file for \"Exodus\"."
    );
    assert_eq!(
        lookup_err("hebrew", "Matthew", "1", None).to_string(),
        "Book \"Matthew\" not available in Hebrew."
    );
}

#[test]
fn test_unknown_book_suggestion() {
    assert_eq!(
        lookup_err("dr", "Dueteronomy", "1", None).to_string(),
        "Unknown book \"Dueteronomy\". Did you mean \"Deuteronomy\"?"
    );
    assert_eq!(suggest_book("Geneses"), Some("Genesis"));
    // Substring matching already resolves this spelling
    assert_eq!(resolve_book("Geneses").map(|b| b.id), Some("genesis"));
}

#[test]
fn test_lookup_response_contract() {
    let lib = library();

    let ok = lib.lookup_response("vulgate", "Ruth", "1", Some("1"));
    assert!(ok.error.is_none());
    assert!(ok.output.unwrap().ends_with("1:1 in diebus unius iudicis"));

    let failed = lib.lookup_response("vulgate", "Ruth", "abc", None);
    assert!(failed.output.is_none());
    assert_eq!(
        failed.error.as_deref(),
        Some("Invalid chapter \"abc\". Must be a positive number.")
    );
}

// ============================================================================
// Caching and concurrency
// ============================================================================

#[test]
fn test_repeated_and_concurrent_lookups_agree() {
    let lib = Arc::new(library());
    let expected = lib.lookup_verse("dr", "Genesis", "2", None).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let lib = Arc::clone(&lib);
            std::thread::spawn(move || {
                let translation = if i % 2 == 0 { "dr" } else { "english" };
                lib.lookup_verse(translation, "Genesis", "2", None).unwrap()
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }

    lib.clear_caches();
    assert_eq!(lib.lookup_verse("dr", "Genesis", "2", None).unwrap(), expected);
}

#[test]
fn test_parsing_is_deterministic() {
    let content =
        std::fs::read_to_string(fixtures().join("texts/douay-rheims/douay-rheims.txt")).unwrap();

    let first = parse_douay_rheims(&content);
    let second = parse_douay_rheims(&content);
    assert_eq!(first.book_count(), 3);
    for book in ["genesis", "ruth", "matthew"] {
        assert_eq!(first.book(book), second.book(book));
    }

    assert_eq!(parse_annotated(&content), parse_annotated(&content));
}

// ============================================================================
// Verification
// ============================================================================

#[test]
fn test_verify_vulgate() {
    let checks = library().verify(Translation::Vulgate, false);
    assert_eq!(checks.len(), 73);

    let genesis = &checks[0];
    assert_eq!(genesis.book.id, "genesis");
    let summary = genesis.result.as_ref().unwrap();
    assert_eq!(summary.chapters, 2);
    assert_eq!(summary.verses, 4);

    let loaded: Vec<&str> = checks
        .iter()
        .filter(|c| c.result.is_ok())
        .map(|c| c.book.id)
        .collect();
    assert_eq!(loaded, vec!["genesis", "ruth", "matthew"]);
}

#[test]
fn test_verify_septuagint_skips_unmapped_books() {
    let checks = library().verify(Translation::Septuagint, false);

    assert!(checks.iter().all(|c| c.book.id != "ecclesiastes"));
    assert!(checks.iter().all(|c| c.book.lxx.is_some()));

    let genesis = checks.iter().find(|c| c.book.id == "genesis").unwrap();
    assert_eq!(genesis.result.as_ref().unwrap().verses, 3);

    let exodus = checks.iter().find(|c| c.book.id == "exodus").unwrap();
    assert_eq!(exodus.result.as_ref().unwrap_err().kind(), ErrorKind::Io);
}

// ============================================================================
// Generator, search index, database
// ============================================================================

fn generator_config(out: &std::path::Path) -> GeneratorConfig {
    GeneratorConfig {
        source: fixtures().join("texts/douay-rheims/douay-rheims.txt"),
        patches_dir: fixtures().join("patches"),
        output: out.join("site/src/data/bible.json"),
        search_index: out.join("site/public/search-index.json"),
    }
}

#[test]
fn test_generate_document() {
    let dir = tempfile::tempdir().unwrap();
    let config = generator_config(dir.path());

    let (document, report) = generate(&config, false).unwrap();

    let ids: Vec<&str> = document.books.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["genesis", "ruth", "matthew"]);

    assert_eq!(report.patches_loaded, 2);
    assert_eq!(report.chapter_summaries, 4);
    assert_eq!(report.book_introductions, 2);
    assert_eq!(report.books, 3);
    assert_eq!(report.chapters, 5);
    assert_eq!(report.verses, 10);
    assert_eq!(report.patched_verses, 2);
    assert_eq!(report.skipped_books.len(), 70);

    // Patch overlay, with the later file winning
    let genesis = document.book("genesis").unwrap();
    let first = &genesis.chapters[0].verses[0];
    assert!(first.patched);
    assert_eq!(first.text, "In the beginning God created heaven and earth.");
    assert_eq!(first.footnotes.len(), 2);

    let second = &genesis.chapters[0].verses[1];
    assert!(!second.patched);
    assert!(second.footnotes.is_empty());
    assert!(second.text.starts_with("And the earth was void and empty"));

    assert_eq!(genesis.edit_count, 1);
    assert_eq!(genesis.footnote_count, 2);
    assert_eq!(
        genesis.chapters[0].summary.as_deref(),
        Some("God createth heaven and earth, and all things therein, in six days.")
    );
    assert_eq!(genesis.chapters[2].summary, None);
    assert!(genesis
        .introduction
        .as_deref()
        .unwrap()
        .starts_with("This book is so called"));

    // Footnote-only patch keeps the source text
    let ruth = document.book("ruth").unwrap();
    let ruth_2 = &ruth.chapters[0].verses[1];
    assert!(ruth_2.patched);
    assert_eq!(ruth_2.text, "He was named Elimelech, and his wife Noemi.");
    assert_eq!(ruth_2.footnotes, vec!["Noemi: in Hebrew, Naomi."]);

    // Title text does not leak into the previous book's last verse
    assert_eq!(
        genesis.chapters[2].verses[0].text,
        "Now the serpent was more subtle than any of the beasts of the earth."
    );

    // The generator only skips single-word commentary
    let matthew = document.book("matthew").unwrap();
    assert!(matthew.chapters[0].verses[0].text.ends_with("Son of.... Christ is called the son of David."));
    assert_eq!(matthew.introduction, None);

    // Written output reads back identically
    assert_eq!(load_document(&config.output).unwrap(), document);
}

#[test]
fn test_generate_missing_source_names_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = generator_config(dir.path());
    config.source = dir.path().join("missing.txt");

    let err = generate(&config, false).unwrap_err();
    assert!(err.to_string().contains("missing.txt"));
    assert!(!config.output.exists());
}

#[test]
fn test_search_index_and_database_export() {
    let dir = tempfile::tempdir().unwrap();
    let config = generator_config(dir.path());
    let (document, _) = generate(&config, false).unwrap();

    let index = build_search_index(&document);
    let stats = search_index_stats(&document);
    assert_eq!(stats.total_verses, 10);
    assert_eq!(stats.verses_with_footnotes, 2);
    assert_eq!(stats.chapters_with_summary, 4);

    let entry = &index.verses[0];
    assert_eq!(entry.id, "genesis-1-1");
    assert_eq!(entry.reference, "Genesis 1:1");

    let db_path = dir.path().join("bible.db");
    export_database(&document, &db_path).unwrap();
    let corpus = load_corpus_stats(&db_path).unwrap();
    assert_eq!(corpus.books, 3);
    assert_eq!(corpus.chapters, 5);
    assert_eq!(corpus.verses, 10);
    assert_eq!(corpus.patched_verses, 2);
    assert_eq!(corpus.footnotes, 3);
    assert_eq!(corpus.chapter_summaries, 4);
}
