//! Canonical document generator.
//!
//! Re-reads the Douay-Rheims prose file with a richer grammar than lookup
//! uses: besides verses it keeps book introductions (text after an all-caps
//! title line) and chapter summaries (text between a chapter header and its
//! first verse). The parsed books are then laid out in registry order with
//! the editorial patch overlay applied.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::books::{all_books, BookEntry};
use crate::config::GeneratorConfig;
use crate::models::{
    BookDocument, CanonicalDocument, ChapterDocument, GenerateReport, VerseDocument,
};
use crate::output::{write_json_file, OutputError};
use crate::patches::{load_patches, patch_key, PatchSet};
use crate::sources::douay_rheims::{is_commentary, CHAPTER_HEADER, VERSE_LINE};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid patch file {}: {source}", .path.display())]
    Patch {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid canonical document {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Output(#[from] OutputError),
}

static BOOK_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(?:THE\s+(?:(?:FIRST|SECOND|THIRD|FOURTH|CATHOLIC|HOLY)\s+)?(?:BOOK|EPISTLE|GOSPEL|ACTS|PROPHECY|LAMENTATIONS|CANTICLE|APOCALYPSE)|ECCLESIASTES|ECCLESIASTICUS|SOLOMON['\x{2019}]S CANTICLE)",
    )
    .unwrap()
});

/// Title lines as printed in the source, mapped to book ids.
const BOOK_TITLES: &[(&str, &str)] = &[
    ("THE BOOK OF GENESIS", "genesis"),
    ("THE BOOK OF EXODUS", "exodus"),
    ("THE BOOK OF LEVITICUS", "leviticus"),
    ("THE BOOK OF NUMBERS", "numbers"),
    ("THE BOOK OF DEUTERONOMY", "deuteronomy"),
    ("THE BOOK OF JOSUE", "josue"),
    ("THE BOOK OF JUDGES", "judges"),
    ("THE BOOK OF RUTH", "ruth"),
    ("THE FIRST BOOK OF SAMUEL, OTHERWISE CALLED THE FIRST BOOK OF KINGS", "1-samuel"),
    ("THE SECOND BOOK OF SAMUEL, OTHERWISE CALLED THE SECOND BOOK OF KINGS", "2-samuel"),
    ("THE THIRD BOOK OF KINGS", "1-kings"),
    ("THE FOURTH BOOK OF KINGS", "2-kings"),
    ("THE FIRST BOOK OF PARALIPOMENON", "1-chronicles"),
    ("THE SECOND BOOK OF PARALIPOMENON", "2-chronicles"),
    ("THE FIRST BOOK OF ESDRAS", "ezra"),
    ("THE BOOK OF NEHEMIAS, WHICH IS CALLED THE SECOND OF ESDRAS", "nehemiah"),
    ("THE BOOK OF TOBIAS", "tobias"),
    ("THE BOOK OF JUDITH", "judith"),
    ("THE BOOK OF ESTHER", "esther"),
    ("THE BOOK OF JOB", "job"),
    ("THE BOOK OF PSALMS", "psalms"),
    ("THE BOOK OF PROVERBS", "proverbs"),
    ("ECCLESIASTES", "ecclesiastes"),
    ("SOLOMON'S CANTICLE OF CANTICLES", "canticles"),
    ("THE BOOK OF WISDOM", "wisdom"),
    ("ECCLESIASTICUS", "ecclesiasticus"),
    ("THE PROPHECY OF ISAIAS", "isaias"),
    ("THE PROPHECY OF JEREMIAS", "jeremias"),
    ("THE LAMENTATIONS OF JEREMIAS", "lamentations"),
    ("THE PROPHECY OF BARUCH", "baruch"),
    ("THE PROPHECY OF EZECHIEL", "ezechiel"),
    ("THE PROPHECY OF DANIEL", "daniel"),
    ("THE PROPHECY OF OSEE", "osee"),
    ("THE PROPHECY OF JOEL", "joel"),
    ("THE PROPHECY OF AMOS", "amos"),
    ("THE PROPHECY OF ABDIAS", "abdias"),
    ("THE PROPHECY OF JONAS", "jonas"),
    ("THE PROPHECY OF MICHEAS", "micheas"),
    ("THE PROPHECY OF NAHUM", "nahum"),
    ("THE PROPHECY OF HABACUC", "habacuc"),
    ("THE PROPHECY OF SOPHONIAS", "sophonias"),
    ("THE PROPHECY OF AGGEUS", "aggeus"),
    ("THE PROPHECY OF ZACHARIAS", "zacharias"),
    ("THE PROPHECY OF MALACHIAS", "malachias"),
    ("THE FIRST BOOK OF MACHABEES", "1-machabees"),
    ("THE SECOND BOOK OF MACHABEES", "2-machabees"),
    ("THE HOLY GOSPEL OF JESUS CHRIST ACCORDING TO SAINT MATTHEW", "matthew"),
    ("THE HOLY GOSPEL OF JESUS CHRIST ACCORDING TO ST. MARK", "mark"),
    ("THE HOLY GOSPEL OF JESUS CHRIST ACCORDING TO ST. LUKE", "luke"),
    ("THE HOLY GOSPEL OF JESUS CHRIST ACCORDING TO ST. JOHN", "john"),
    ("THE ACTS OF THE APOSTLES", "acts"),
    ("THE EPISTLE OF ST. PAUL THE APOSTLE TO THE ROMANS", "romans"),
    ("THE FIRST EPISTLE OF ST. PAUL TO THE CORINTHIANS", "1-corinthians"),
    ("THE SECOND EPISTLE OF ST. PAUL TO THE CORINTHIANS", "2-corinthians"),
    ("THE EPISTLE OF ST. PAUL TO THE GALATIANS", "galatians"),
    ("THE EPISTLE OF ST. PAUL TO THE EPHESIANS", "ephesians"),
    ("THE EPISTLE OF ST. PAUL TO THE PHILIPPIANS", "philippians"),
    ("THE EPISTLE OF ST. PAUL TO THE COLOSSIANS", "colossians"),
    ("THE FIRST EPISTLE OF ST. PAUL TO THE THESSALONIANS", "1-thessalonians"),
    ("THE SECOND EPISTLE OF ST. PAUL TO THE THESSALONIANS", "2-thessalonians"),
    ("THE FIRST EPISTLE OF ST. PAUL TO TIMOTHY", "1-timothy"),
    ("THE SECOND EPISTLE OF ST. PAUL TO TIMOTHY", "2-timothy"),
    ("THE EPISTLE OF ST. PAUL TO TITUS", "titus"),
    ("THE EPISTLE OF ST. PAUL TO PHILEMON", "philemon"),
    ("THE EPISTLE OF ST. PAUL TO THE HEBREWS", "hebrews"),
    ("THE CATHOLIC EPISTLE OF ST. JAMES THE APOSTLE", "james"),
    ("THE FIRST EPISTLE OF ST. PETER THE APOSTLE", "1-peter"),
    ("THE SECOND EPISTLE OF ST. PETER THE APOSTLE", "2-peter"),
    ("THE FIRST EPISTLE OF ST. JOHN THE APOSTLE", "1-john"),
    ("THE SECOND EPISTLE OF ST. JOHN THE APOSTLE", "2-john"),
    ("THE THIRD EPISTLE OF ST. JOHN THE APOSTLE", "3-john"),
    ("THE CATHOLIC EPISTLE OF ST. JUDE", "jude"),
    ("THE APOCALYPSE OF ST. JOHN THE APOSTLE", "apocalypse"),
];

/// Douay-Rheims chapter-header names whose book id differs from the
/// lowercased name. The Vulgate numbering of Kings is the main source of
/// confusion here.
const DR_NAME_EXCEPTIONS: &[(&str, &str)] = &[
    ("1 kings", "1-samuel"),
    ("2 kings", "2-samuel"),
    ("3 kings", "1-kings"),
    ("4 kings", "2-kings"),
    ("1 paralipomenon", "1-chronicles"),
    ("2 paralipomenon", "2-chronicles"),
    ("1 esdras", "ezra"),
    ("2 esdras", "nehemiah"),
    ("canticle of canticles", "canticles"),
    ("1 machabees", "1-machabees"),
    ("2 machabees", "2-machabees"),
    ("1 corinthians", "1-corinthians"),
    ("2 corinthians", "2-corinthians"),
    ("1 thessalonians", "1-thessalonians"),
    ("2 thessalonians", "2-thessalonians"),
    ("1 timothy", "1-timothy"),
    ("2 timothy", "2-timothy"),
    ("1 peter", "1-peter"),
    ("2 peter", "2-peter"),
    ("1 john", "1-john"),
    ("2 john", "2-john"),
    ("3 john", "3-john"),
];

/// Map a title line to its book id, trying typographic apostrophes as `'`.
pub fn book_id_for_title(title: &str) -> Option<&'static str> {
    let lookup = |t: &str| BOOK_TITLES.iter().find(|(k, _)| *k == t).map(|&(_, id)| id);
    lookup(title).or_else(|| lookup(title.replace(['\u{2018}', '\u{2019}'], "'").as_str()))
}

/// Map a chapter-header book name to its book id.
///
/// Simple names map to themselves; numbered and renamed books go through
/// [`DR_NAME_EXCEPTIONS`]; as a last resort the registry's own native name is
/// compared case-insensitively.
pub fn book_id_for_dr_name(name: &str) -> Option<&'static str> {
    let normalized = name.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

    if let Some(&(_, id)) = DR_NAME_EXCEPTIONS.iter().find(|(k, _)| *k == normalized) {
        return Some(id);
    }
    all_books()
        .iter()
        .find(|b| b.id == normalized || b.dr.is_some_and(|dr| dr.to_lowercase() == normalized))
        .map(|b| b.id)
}

/// One verse as read from the prose file, before patching
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVerse {
    pub number: u32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedBook {
    pub name: String,
    /// Verses in file order; duplicates are kept
    pub chapters: BTreeMap<u32, Vec<ParsedVerse>>,
}

/// Everything the annotated grammar extracts from the prose file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotatedCorpus {
    /// Books in the order their first chapter header appeared
    pub books: Vec<ParsedBook>,
    /// Summary text keyed by (header book name, chapter)
    pub chapter_summaries: HashMap<(String, u32), String>,
    /// (title line, introduction) in first-seen order
    pub introductions: Vec<(String, String)>,
}

impl AnnotatedCorpus {
    pub fn book(&self, name: &str) -> Option<&ParsedBook> {
        self.books.iter().find(|b| b.name == name)
    }

    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters.values())
            .map(Vec::len)
            .sum()
    }

    fn push_verse(&mut self, book: &str, chapter: u32, verse: ParsedVerse) {
        let index = match self.books.iter().position(|b| b.name == book) {
            Some(i) => i,
            None => {
                self.books.push(ParsedBook {
                    name: book.to_string(),
                    chapters: BTreeMap::new(),
                });
                self.books.len() - 1
            }
        };
        self.books[index].chapters.entry(chapter).or_default().push(verse);
    }

    fn set_introduction(&mut self, title: &str, text: String) {
        match self.introductions.iter_mut().find(|(t, _)| t == title) {
            Some(entry) => entry.1 = text,
            None => self.introductions.push((title.to_string(), text)),
        }
    }
}

/// Parser state for [`parse_annotated`]
#[derive(Default)]
struct AnnotatedParser {
    corpus: AnnotatedCorpus,
    book: Option<String>,
    chapter: Option<u32>,
    verse: Option<u32>,
    verse_text: Vec<String>,
    summary: Vec<String>,
    intro: Vec<String>,
    title: Option<String>,
    in_summary: bool,
    in_intro: bool,
}

impl AnnotatedParser {
    fn save_verse(&mut self) {
        let parts = std::mem::take(&mut self.verse_text);
        let (Some(book), Some(chapter), Some(number)) = (&self.book, self.chapter, self.verse) else {
            return;
        };
        let text = parts.join(" ").trim().to_string();
        if text.is_empty() {
            return;
        }
        self.corpus.push_verse(book, chapter, ParsedVerse { number, text });
    }

    fn save_summary(&mut self) {
        let parts = std::mem::take(&mut self.summary);
        self.in_summary = false;
        if let (Some(book), Some(chapter)) = (&self.book, self.chapter) {
            if !parts.is_empty() {
                self.corpus
                    .chapter_summaries
                    .insert((book.clone(), chapter), parts.join(" ").trim().to_string());
            }
        }
    }

    fn save_intro(&mut self) {
        let parts = std::mem::take(&mut self.intro);
        self.in_intro = false;
        if let Some(title) = self.title.clone() {
            if !parts.is_empty() {
                self.corpus.set_introduction(&title, parts.join(" ").trim().to_string());
            }
        }
    }

    fn line(&mut self, line: &str) {
        if BOOK_TITLE.is_match(line) && line == line.to_uppercase() {
            self.save_intro();
            self.title = Some(line.to_string());
            self.in_intro = true;
            return;
        }

        if let Some(caps) = CHAPTER_HEADER.captures(line) {
            self.save_verse();
            self.save_summary();
            self.save_intro();
            self.book = Some(caps[1].to_string());
            self.chapter = caps[2].parse().ok();
            self.verse = None;
            self.in_summary = true;
            return;
        }

        if self.book.is_some() {
            if let Some(caps) = VERSE_LINE.captures(line) {
                if self.in_summary {
                    self.save_summary();
                }
                self.save_verse();
                if let Ok(chapter) = caps[1].parse() {
                    self.chapter = Some(chapter);
                }
                self.verse = caps[2].parse().ok();
                self.verse_text = vec![caps[3].to_string()];
                return;
            }
        }

        if line.is_empty() || is_commentary(line) {
            return;
        }
        if self.in_intro {
            self.intro.push(line.to_string());
        } else if self.in_summary {
            self.summary.push(line.to_string());
        } else if self.verse.is_some() {
            self.verse_text.push(line.to_string());
        }
    }
}

/// Parse the prose file with the annotated grammar.
///
/// Only the pending verse is flushed at end of input; an introduction or
/// summary with no following chapter or verse is dropped.
pub fn parse_annotated(content: &str) -> AnnotatedCorpus {
    let mut parser = AnnotatedParser::default();
    for raw in content.lines() {
        parser.line(raw.trim());
    }
    parser.save_verse();
    parser.corpus
}

/// Lay the parsed corpus out in registry order with patches applied.
pub fn build_document(
    corpus: &AnnotatedCorpus,
    patches: &PatchSet,
) -> (CanonicalDocument, GenerateReport) {
    let mut report = GenerateReport {
        patches_loaded: patches.len(),
        chapter_summaries: corpus.chapter_summaries.len(),
        book_introductions: corpus.introductions.len(),
        ..Default::default()
    };
    let mut books = Vec::new();

    for entry in all_books() {
        let Some(parsed) = corpus
            .books
            .iter()
            .find(|b| book_id_for_dr_name(&b.name) == Some(entry.id))
        else {
            tracing::warn!(book = entry.name, "no data found; skipping");
            report.skipped_books.push(entry.name.to_string());
            continue;
        };

        let book = build_book(entry, parsed, corpus, patches, &mut report);
        report.chapters += book.chapters.len();
        books.push(book);
    }

    report.books = books.len();
    (CanonicalDocument { books }, report)
}

fn build_book(
    entry: &BookEntry,
    parsed: &ParsedBook,
    corpus: &AnnotatedCorpus,
    patches: &PatchSet,
    report: &mut GenerateReport,
) -> BookDocument {
    let mut chapters = Vec::with_capacity(parsed.chapters.len());
    let mut book_edits = 0;
    let mut book_footnotes = 0;

    for (&number, parsed_verses) in &parsed.chapters {
        let mut ordered: Vec<&ParsedVerse> = parsed_verses.iter().collect();
        ordered.sort_by_key(|v| v.number);

        let mut edit_count = 0;
        let mut footnote_count = 0;
        let mut verses = Vec::with_capacity(ordered.len());

        for verse in ordered {
            let patch = patches.get(&patch_key(entry.abbrev, number, verse.number));
            if let Some(p) = patch {
                edit_count += 1;
                footnote_count += p.footnotes.as_ref().map_or(0, |f| f.len() as u32);
            }

            let text = patch
                .and_then(|p| p.text.as_deref())
                .filter(|t| !t.is_empty())
                .unwrap_or(&verse.text)
                .to_string();

            verses.push(VerseDocument {
                number: verse.number,
                text,
                footnotes: patch.and_then(|p| p.footnotes.clone()).unwrap_or_default(),
                patched: patch.is_some(),
            });
        }

        report.verses += verses.len();
        report.patched_verses += edit_count as usize;
        book_edits += edit_count;
        book_footnotes += footnote_count;

        chapters.push(ChapterDocument {
            number,
            summary: corpus
                .chapter_summaries
                .get(&(parsed.name.clone(), number))
                .cloned(),
            verses,
            edit_count,
            footnote_count,
        });
    }

    let introduction = corpus
        .introductions
        .iter()
        .find(|(title, _)| book_id_for_title(title) == Some(entry.id))
        .map(|(_, intro)| intro.clone());

    BookDocument {
        id: entry.id.to_string(),
        name: entry.name.to_string(),
        abbrev: entry.abbrev.to_string(),
        testament: entry.testament,
        introduction,
        chapters,
        edit_count: book_edits,
        footnote_count: book_footnotes,
    }
}

/// Read the source and patches, build the document and write it out.
pub fn generate(
    config: &GeneratorConfig,
    show_progress: bool,
) -> Result<(CanonicalDocument, GenerateReport), GenerateError> {
    if show_progress {
        eprintln!("Parsing Douay-Rheims text...");
    }
    let content = read_source(&config.source)?;
    let corpus = parse_annotated(&content);
    tracing::info!(
        books = corpus.books.len(),
        verses = corpus.verse_count(),
        "parsed annotated source"
    );

    if show_progress {
        eprintln!("Loading patches...");
    }
    let patches = load_patches(&config.patches_dir)?;
    if show_progress {
        eprintln!("  Found {} patches", patches.len());
        eprintln!("  Found {} chapter summaries", corpus.chapter_summaries.len());
        eprintln!("  Found {} book introductions", corpus.introductions.len());
        eprintln!("Building structured data...");
    }

    let (document, report) = build_document(&corpus, &patches);
    tracing::info!(
        books = report.books,
        chapters = report.chapters,
        verses = report.verses,
        skipped = report.skipped_books.len(),
        "built canonical document"
    );

    write_json_file(&document, &config.output, true)?;
    tracing::info!(path = %config.output.display(), "wrote canonical document");

    Ok((document, report))
}

/// Read back a previously generated `bible.json`.
pub fn load_document(path: &Path) -> Result<CanonicalDocument, GenerateError> {
    let content = read_source(path)?;
    serde_json::from_str(&content).map_err(|source| GenerateError::Document {
        path: path.to_path_buf(),
        source,
    })
}

fn read_source(path: &Path) -> Result<String, GenerateError> {
    fs::read_to_string(path).map_err(|source| GenerateError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PatchEntry;

    const SAMPLE: &str = "\
THE BOOK OF GENESIS

This book is so called from its treating of the generation.

Genesis Chapter 1

God createth heaven and earth.

1:1. In the beginning God created heaven, and earth.

1:2. And the earth was void and empty, and darkness was upon the face of the
deep.

Spirit.... The Holy Ghost.

Genesis Chapter 2

2:2. And on the seventh day God ended his work.

2:1. So the heavens and the earth were finished.

SOLOMON\u{2019}S CANTICLE OF CANTICLES

This divine song.

Canticle Of Canticles Chapter 1

1:1. Let him kiss me with the kiss of his mouth.
";

    #[test]
    fn test_annotated_parse_extracts_all_parts() {
        let corpus = parse_annotated(SAMPLE);

        let genesis = corpus.book("Genesis").unwrap();
        assert_eq!(genesis.chapters.len(), 2);
        assert_eq!(
            genesis.chapters[&1][1].text,
            "And the earth was void and empty, and darkness was upon the face of the deep."
        );
        assert_eq!(
            corpus.chapter_summaries[&("Genesis".to_string(), 1)],
            "God createth heaven and earth."
        );
        assert_eq!(corpus.introductions.len(), 2);
        assert_eq!(corpus.introductions[0].0, "THE BOOK OF GENESIS");
        assert_eq!(
            corpus.introductions[0].1,
            "This book is so called from its treating of the generation."
        );
    }

    #[test]
    fn test_mixed_case_title_is_not_a_title() {
        let corpus = parse_annotated("The Book of Genesis\nGenesis Chapter 1\n1:1. In the beginning\n");
        assert!(corpus.introductions.is_empty());
    }

    #[test]
    fn test_book_id_for_dr_name() {
        assert_eq!(book_id_for_dr_name("Genesis"), Some("genesis"));
        assert_eq!(book_id_for_dr_name("1  Kings"), Some("1-samuel"));
        assert_eq!(book_id_for_dr_name("3 Kings"), Some("1-kings"));
        assert_eq!(book_id_for_dr_name("1 Paralipomenon"), Some("1-chronicles"));
        assert_eq!(book_id_for_dr_name("Canticle Of Canticles"), Some("canticles"));
        assert_eq!(book_id_for_dr_name("First Book Of Samuel"), Some("1-samuel"));
        assert_eq!(book_id_for_dr_name("Unknown"), None);
    }

    #[test]
    fn test_book_id_for_title_normalizes_apostrophes() {
        assert_eq!(book_id_for_title("SOLOMON\u{2019}S CANTICLE OF CANTICLES"), Some("canticles"));
        assert_eq!(book_id_for_title("SOLOMON'S CANTICLE OF CANTICLES"), Some("canticles"));
        assert_eq!(book_id_for_title("THE BOOK OF ENOCH"), None);
    }

    #[test]
    fn test_build_document_orders_and_patches() {
        let corpus = parse_annotated(SAMPLE);
        let mut patches = PatchSet::new();
        patches.insert(
            "Gen:1:1".to_string(),
            PatchEntry {
                text: Some("In the beginning God created heaven and earth.".to_string()),
                footnotes: Some(vec!["a".to_string(), "b".to_string()]),
            },
        );
        patches.insert(
            "Gen:2:1".to_string(),
            PatchEntry {
                text: Some(String::new()),
                footnotes: None,
            },
        );

        let (doc, report) = build_document(&corpus, &patches);

        assert_eq!(doc.books.len(), 2);
        assert_eq!(doc.books[0].id, "genesis");
        assert_eq!(doc.books[1].id, "canticles");

        let genesis = &doc.books[0];
        let first = &genesis.chapters[0].verses[0];
        assert!(first.patched);
        assert_eq!(first.text, "In the beginning God created heaven and earth.");
        assert_eq!(first.footnotes.len(), 2);
        assert!(!genesis.chapters[0].verses[1].patched);
        assert!(genesis.chapters[0].verses[1].footnotes.is_empty());

        // Verses sorted; an empty patch text keeps the source text
        let chapter_two = &genesis.chapters[1];
        assert_eq!(chapter_two.verses[0].number, 1);
        assert!(chapter_two.verses[0].patched);
        assert_eq!(
            chapter_two.verses[0].text,
            "So the heavens and the earth were finished."
        );

        assert_eq!(genesis.chapters[0].edit_count, 1);
        assert_eq!(genesis.chapters[0].footnote_count, 2);
        assert_eq!(genesis.edit_count, 2);
        assert_eq!(genesis.footnote_count, 2);
        assert_eq!(
            genesis.introduction.as_deref(),
            Some("This book is so called from its treating of the generation.")
        );
        assert_eq!(doc.books[1].introduction.as_deref(), Some("This divine song."));
        assert_eq!(genesis.chapters[1].summary, None);

        assert_eq!(report.books, 2);
        assert_eq!(report.chapters, 3);
        assert_eq!(report.verses, 5);
        assert_eq!(report.patched_verses, 2);
        assert_eq!(report.skipped_books.len(), 71);
    }
}
