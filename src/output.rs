//! Output helpers: JSON writers and console reports.

use crate::lookup::BookCheck;
use crate::models::{CorpusStats, GenerateReport, SearchIndexStats};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Write any serializable value as JSON.
pub fn write_json<W: Write, T: Serialize>(
    value: &T,
    writer: &mut W,
    pretty: bool,
) -> Result<(), OutputError> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    writer.write_all(json.as_bytes())?;
    Ok(())
}

/// Write JSON to a file, creating parent directories as needed.
pub fn write_json_file<T: Serialize>(value: &T, path: &Path, pretty: bool) -> Result<(), OutputError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    write_json(value, &mut file, pretty)?;
    file.flush()?;
    Ok(())
}

/// Print the generator report to stdout.
pub fn print_generate_summary(report: &GenerateReport, output: &Path) {
    println!("Generated {}", output.display());
    println!("  {} books", report.books);
    println!("  {} chapters", report.chapters);
    println!("  {} verses", report.verses);
    println!("  {} patched verses", report.patched_verses);
    if !report.skipped_books.is_empty() {
        println!("  Skipped (no data): {}", report.skipped_books.join(", "));
    }
}

pub fn print_search_index_summary(stats: &SearchIndexStats, output: &Path) {
    println!("Search index: {}", output.display());
    println!("  Total verses: {}", stats.total_verses);
    println!("  Verses with footnotes: {}", stats.verses_with_footnotes);
    println!("  Chapters with summary: {}", stats.chapters_with_summary);
}

pub fn print_corpus_stats(stats: &CorpusStats) {
    println!("=== Corpus Statistics ===");
    println!("Books: {}", stats.books);
    println!("Chapters: {}", stats.chapters);
    println!("Verses: {}", stats.verses);
    println!("Patched verses: {}", stats.patched_verses);
    println!("Footnotes: {}", stats.footnotes);
    println!("Chapter summaries: {}", stats.chapter_summaries);
}

/// One line per book: `abbrev  name  chapters/verses` or the load error.
pub fn format_book_check(check: &BookCheck) -> String {
    match &check.result {
        Ok(summary) => format!(
            "  {:<6} {:<25} {:>4} chapters {:>6} verses",
            check.book.abbrev, check.book.name, summary.chapters, summary.verses
        ),
        Err(e) => format!("  {:<6} {:<25} ERROR: {}", check.book.abbrev, check.book.name, e),
    }
}

/// Print verification results; returns the number of failed books.
pub fn print_verification(checks: &[BookCheck]) -> usize {
    for check in checks {
        println!("{}", format_book_check(check));
    }
    let failed = checks.iter().filter(|c| c.result.is_err()).count();
    println!();
    println!("{} books checked, {} failed", checks.len(), failed);
    failed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::books::book_by_id;
    use crate::lookup::LookupError;
    use crate::sources::BookSummary;
    use crate::translations::Translation;

    #[test]
    fn test_write_json_compact_and_pretty() {
        let stats = SearchIndexStats {
            total_verses: 2,
            verses_with_footnotes: 1,
            chapters_with_summary: 0,
        };

        let mut compact = Vec::new();
        write_json(&stats, &mut compact, false).unwrap();
        let compact = String::from_utf8(compact).unwrap();
        assert!(!compact.contains('\n'));
        assert!(compact.contains("\"total_verses\":2"));

        let mut pretty = Vec::new();
        write_json(&stats, &mut pretty, true).unwrap();
        assert!(String::from_utf8(pretty).unwrap().contains('\n'));
    }

    #[test]
    fn test_write_json_file_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site").join("data").join("out.json");

        write_json_file(&[1, 2, 3], &path, false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[1,2,3]");
    }

    #[test]
    fn test_format_book_check() {
        let genesis = book_by_id("genesis").unwrap();
        let ok = BookCheck {
            book: genesis,
            result: Ok(BookSummary {
                chapters: 50,
                verses: 1533,
            }),
        };
        let line = format_book_check(&ok);
        assert!(line.contains("Gen"));
        assert!(line.contains("50 chapters"));
        assert!(line.contains("1533 verses"));

        let failed = BookCheck {
            book: genesis,
            result: Err(LookupError::FileUnreadable {
                book: "Genesis".to_string(),
                translation: Translation::Septuagint,
            }),
        };
        assert!(format_book_check(&failed).contains("ERROR: Could not read Septuagint file"));
    }
}
