//! Flattened per-verse search index derived from the canonical document.

use crate::models::{CanonicalDocument, SearchEntry, SearchIndex, SearchIndexStats};

/// One entry per verse, in document order.
///
/// Footnotes are attached only when present; the chapter summary rides on
/// the chapter's first verse.
pub fn build_search_index(document: &CanonicalDocument) -> SearchIndex {
    let mut verses = Vec::with_capacity(document.verse_count());

    for book in &document.books {
        for chapter in &book.chapters {
            for verse in &chapter.verses {
                verses.push(SearchEntry {
                    id: format!("{}-{}-{}", book.id, chapter.number, verse.number),
                    reference: format!("{} {}:{}", book.name, chapter.number, verse.number),
                    book: book.id.clone(),
                    book_name: book.name.clone(),
                    chapter: chapter.number,
                    verse: verse.number,
                    text: verse.text.clone(),
                    footnotes: (!verse.footnotes.is_empty()).then(|| verse.footnotes.clone()),
                    summary: if verse.number == 1 {
                        chapter.summary.clone()
                    } else {
                        None
                    },
                });
            }
        }
    }

    SearchIndex { verses }
}

/// Counts for the index built from `document`.
///
/// Summaries are counted per chapter, so a chapter whose first verse is
/// missing still counts even though no entry carries its summary.
pub fn search_index_stats(document: &CanonicalDocument) -> SearchIndexStats {
    let chapters = || document.books.iter().flat_map(|b| b.chapters.iter());
    let verses = || chapters().flat_map(|c| c.verses.iter());

    SearchIndexStats {
        total_verses: verses().count(),
        verses_with_footnotes: verses().filter(|v| !v.footnotes.is_empty()).count(),
        chapters_with_summary: chapters()
            .filter(|c| c.summary.as_deref().is_some_and(|s| !s.is_empty()))
            .count(),
    }
}

impl SearchIndex {
    /// Entries for one book, by id.
    pub fn for_book<'a>(&'a self, book_id: &'a str) -> impl Iterator<Item = &'a SearchEntry> + 'a {
        self.verses.iter().filter(move |v| v.book == book_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookDocument, ChapterDocument, Testament, VerseDocument};

    fn verse(number: u32, footnotes: &[&str]) -> VerseDocument {
        VerseDocument {
            number,
            text: format!("verse {}", number),
            footnotes: footnotes.iter().map(|s| s.to_string()).collect(),
            patched: !footnotes.is_empty(),
        }
    }

    fn sample_document() -> CanonicalDocument {
        CanonicalDocument {
            books: vec![BookDocument {
                id: "1-john".to_string(),
                name: "1 John".to_string(),
                abbrev: "1John".to_string(),
                testament: Testament::New,
                introduction: None,
                chapters: vec![
                    ChapterDocument {
                        number: 1,
                        summary: Some("The word of life.".to_string()),
                        verses: vec![verse(1, &[]), verse(2, &["note"])],
                        edit_count: 1,
                        footnote_count: 1,
                    },
                    ChapterDocument {
                        number: 2,
                        summary: None,
                        verses: vec![verse(1, &[])],
                        edit_count: 0,
                        footnote_count: 0,
                    },
                ],
                edit_count: 1,
                footnote_count: 1,
            }],
        }
    }

    #[test]
    fn test_entries_and_ids() {
        let index = build_search_index(&sample_document());

        assert_eq!(index.verses.len(), 3);
        let first = &index.verses[0];
        assert_eq!(first.id, "1-john-1-1");
        assert_eq!(first.reference, "1 John 1:1");
        assert_eq!(first.book_name, "1 John");
        assert_eq!(first.summary.as_deref(), Some("The word of life."));
        assert!(first.footnotes.is_none());

        let second = &index.verses[1];
        assert!(second.summary.is_none());
        assert_eq!(second.footnotes, Some(vec!["note".to_string()]));
        assert_eq!(index.for_book("1-john").count(), 3);
        assert_eq!(index.for_book("genesis").count(), 0);
    }

    #[test]
    fn test_stats() {
        let stats = search_index_stats(&sample_document());
        assert_eq!(
            stats,
            SearchIndexStats {
                total_verses: 3,
                verses_with_footnotes: 1,
                chapters_with_summary: 1,
            }
        );
    }

    #[test]
    fn test_summary_counted_without_first_verse() {
        let mut document = sample_document();
        let chapter = &mut document.books[0].chapters[1];
        chapter.summary = Some("Walking in the light.".to_string());
        chapter.verses = vec![verse(2, &[])];

        let index = build_search_index(&document);
        assert_eq!(index.verses.iter().filter(|v| v.summary.is_some()).count(), 1);
        assert_eq!(search_index_stats(&document).chapters_with_summary, 2);

        document.books[0].chapters[1].summary = Some(String::new());
        assert_eq!(search_index_stats(&document).chapters_with_summary, 1);
    }
}
