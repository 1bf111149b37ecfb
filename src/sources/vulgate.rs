//! Latin Vulgate tab-separated file.
//!
//! Columns: full name, abbreviation, book number, chapter, verse, text. Text
//! may itself contain tabs, so every column after the fifth is rejoined.

use super::{insert_verse, BookVerses, CorpusIndex, VerseSource};
use crate::books::BookEntry;
use crate::cache::FileCache;
use crate::lookup::LookupError;
use crate::translations::Translation;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

const MIN_FIELDS: usize = 6;

/// Parse TSV rows into per-book maps keyed by the exact name column.
pub fn parse_vulgate(content: &str) -> CorpusIndex {
    let mut books: HashMap<String, BookVerses> = HashMap::new();

    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }
        let (Ok(chapter), Ok(verse)) = (fields[3].trim().parse::<u32>(), fields[4].trim().parse::<u32>()) else {
            continue;
        };
        let text = fields[5..].join("\t").replace('\r', "");
        let name = fields[0];
        insert_verse(books.entry(name.to_string()).or_default(), name, chapter, verse, text);
    }

    CorpusIndex::from_books(books)
}

pub struct VulgateSource {
    path: PathBuf,
    cache: FileCache<CorpusIndex>,
}

impl VulgateSource {
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
            .get_or_load(&self.path, parse_vulgate)
            .map_err(|e| LookupError::source_unreadable(Translation::Vulgate, &self.path, &e))
    }
}

impl VerseSource for VulgateSource {
    fn translation(&self) -> Translation {
        Translation::Vulgate
    }

    fn load_book(&self, book: &BookEntry) -> Result<Option<Arc<BookVerses>>, LookupError> {
        let Some(native) = book.vulgate else {
            return Err(LookupError::NotAvailable {
                book: book.name.to_string(),
                translation: Translation::Vulgate,
            });
        };
        Ok(self.load()?.book(native))
    }

    fn missing_book(&self, book: &BookEntry) -> LookupError {
        LookupError::BookNotFound {
            book: book.name.to_string(),
            translation: Translation::Vulgate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rows() {
        let content = "Genesis\tGen\t1\t1\t1\tIn principio creavit Deus caelum et terram.\r\n\
                       Genesis\tGen\t1\t1\t2\tTerra autem erat inanis et vacua\r\n";
        let index = parse_vulgate(content);
        let genesis = index.book("Genesis").unwrap();

        assert_eq!(genesis.len(), 2);
        assert_eq!(
            genesis[&(1, 1)].text,
            "In principio creavit Deus caelum et terram."
        );
    }

    #[test]
    fn test_text_tabs_are_preserved() {
        let index = parse_vulgate("Psalms\tPs\t19\t22\t1\tin finem\tpro susceptione\n");
        assert_eq!(index.book("Psalms").unwrap()[&(22, 1)].text, "in finem\tpro susceptione");
    }

    #[test]
    fn test_short_and_blank_rows_are_skipped() {
        let index = parse_vulgate("\n   \nGenesis\tGen\t1\t1\n");
        assert_eq!(index.book_count(), 0);
    }

    #[test]
    fn test_book_names_are_exact() {
        let index = parse_vulgate("Genesis\tGen\t1\t1\t1\tIn principio\n");
        assert!(index.book("Genesis").is_some());
        assert!(index.book("genesis").is_none());
    }

    #[test]
    fn test_duplicate_row_last_wins() {
        let index = parse_vulgate("Ruth\tRu\t8\t1\t1\tfirst\nRuth\tRu\t8\t1\t1\tsecond\n");
        assert_eq!(index.book("Ruth").unwrap()[&(1, 1)].text, "second");
    }
}
