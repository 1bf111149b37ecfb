//! SQLite export of the canonical document.

use crate::models::{CanonicalDocument, CorpusStats};
use rusqlite::{params, Connection, Result};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const SCHEMA: &str = "
    DROP TABLE IF EXISTS footnotes;
    DROP TABLE IF EXISTS verses;
    DROP TABLE IF EXISTS chapters;
    DROP TABLE IF EXISTS books;

    CREATE TABLE books (
        id            TEXT PRIMARY KEY,
        position      INTEGER NOT NULL,
        name          TEXT NOT NULL,
        abbrev        TEXT NOT NULL,
        testament     TEXT NOT NULL,
        introduction  TEXT
    );
    CREATE TABLE chapters (
        book_id  TEXT NOT NULL REFERENCES books(id),
        number   INTEGER NOT NULL,
        summary  TEXT,
        PRIMARY KEY (book_id, number)
    );
    CREATE TABLE verses (
        book_id  TEXT NOT NULL,
        chapter  INTEGER NOT NULL,
        number   INTEGER NOT NULL,
        text     TEXT NOT NULL,
        patched  INTEGER NOT NULL
    );
    CREATE INDEX idx_verses_ref ON verses(book_id, chapter, number);
    CREATE TABLE footnotes (
        book_id   TEXT NOT NULL,
        chapter   INTEGER NOT NULL,
        verse     INTEGER NOT NULL,
        position  INTEGER NOT NULL,
        text      TEXT NOT NULL
    );
";

/// Write the document into `db_path`, replacing any previous export.
///
/// The whole export runs in a single transaction.
pub fn export_database(document: &CanonicalDocument, db_path: &Path) -> Result<(), DbError> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut conn = Connection::open(db_path)?;
    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA)?;

    {
        let mut insert_book = tx.prepare(
            "INSERT INTO books (id, position, name, abbrev, testament, introduction)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        )?;
        let mut insert_chapter =
            tx.prepare("INSERT INTO chapters (book_id, number, summary) VALUES (?1, ?2, ?3)")?;
        let mut insert_verse = tx.prepare(
            "INSERT INTO verses (book_id, chapter, number, text, patched) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;
        let mut insert_footnote = tx.prepare(
            "INSERT INTO footnotes (book_id, chapter, verse, position, text) VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        for (position, book) in document.books.iter().enumerate() {
            insert_book.execute(params![
                book.id,
                position as i64,
                book.name,
                book.abbrev,
                book.testament.as_str(),
                book.introduction,
            ])?;

            for chapter in &book.chapters {
                insert_chapter.execute(params![book.id, chapter.number, chapter.summary])?;

                for verse in &chapter.verses {
                    insert_verse.execute(params![
                        book.id,
                        chapter.number,
                        verse.number,
                        verse.text,
                        verse.patched,
                    ])?;
                    for (i, note) in verse.footnotes.iter().enumerate() {
                        insert_footnote.execute(params![
                            book.id,
                            chapter.number,
                            verse.number,
                            i as i64,
                            note,
                        ])?;
                    }
                }
            }
        }
    }

    tx.commit()?;
    Ok(())
}

/// Load corpus statistics from an exported database
pub fn load_corpus_stats(db_path: &Path) -> Result<CorpusStats, DbError> {
    let conn = Connection::open(db_path)?;

    let books: u64 = conn.query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;

    let chapters: u64 = conn.query_row("SELECT COUNT(*) FROM chapters", [], |row| row.get(0))?;

    let (verses, patched_verses): (u64, u64) = conn.query_row(
        "SELECT COUNT(*), COALESCE(SUM(patched), 0) FROM verses",
        [],
        |row| Ok((row.get(0)?, row.get(1)?)),
    )?;

    let footnotes: u64 = conn.query_row("SELECT COUNT(*) FROM footnotes", [], |row| row.get(0))?;

    let chapter_summaries: u64 = conn.query_row(
        "SELECT COUNT(*) FROM chapters WHERE summary IS NOT NULL",
        [],
        |row| row.get(0),
    )?;

    Ok(CorpusStats {
        books,
        chapters,
        verses,
        patched_verses,
        footnotes,
        chapter_summaries,
    })
}

/// Text of one verse from an exported database, if present.
pub fn load_verse_text(
    db_path: &Path,
    book_id: &str,
    chapter: u32,
    verse: u32,
) -> Result<Option<String>, DbError> {
    let conn = Connection::open(db_path)?;
    let mut stmt = conn.prepare(
        "SELECT text FROM verses WHERE book_id = ?1 AND chapter = ?2 AND number = ?3",
    )?;
    let mut rows = stmt.query(params![book_id, chapter, verse])?;

    match rows.next()? {
        Some(row) => Ok(Some(row.get(0)?)),
        None => Ok(None),
    }
}
