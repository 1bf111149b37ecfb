//! Data structures shared by the lookup engine and the canonical generator.

use serde::{Deserialize, Serialize};

/// Which half of the canon a book belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Testament {
    Old,
    New,
}

impl Testament {
    pub fn as_str(&self) -> &'static str {
        match self {
            Testament::Old => "old",
            Testament::New => "new",
        }
    }
}

/// A single verse as produced by one of the format parsers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseRecord {
    pub book: String, // Native book name or file key of the source format
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

/// Inclusive verse range requested by a caller (start == end for one verse)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerseSpec {
    pub start: u32,
    pub end: u32,
}

impl VerseSpec {
    pub fn single(verse: u32) -> Self {
        Self {
            start: verse,
            end: verse,
        }
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    pub fn contains(&self, verse: u32) -> bool {
        self.start <= verse && verse <= self.end
    }
}

// ============================================================================
// Canonical document (generator output)
// ============================================================================

/// Root of the generated `bible.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CanonicalDocument {
    pub books: Vec<BookDocument>,
}

impl CanonicalDocument {
    pub fn book(&self, id: &str) -> Option<&BookDocument> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn chapter_count(&self) -> usize {
        self.books.iter().map(|b| b.chapters.len()).sum()
    }

    pub fn verse_count(&self) -> usize {
        self.books
            .iter()
            .flat_map(|b| b.chapters.iter())
            .map(|c| c.verses.len())
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDocument {
    pub id: String,
    pub name: String,
    pub abbrev: String,
    pub testament: Testament,
    pub introduction: Option<String>,
    pub chapters: Vec<ChapterDocument>,
    pub edit_count: u32,
    pub footnote_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterDocument {
    pub number: u32,
    pub summary: Option<String>,
    pub verses: Vec<VerseDocument>,
    pub edit_count: u32,
    pub footnote_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerseDocument {
    pub number: u32,
    pub text: String,
    pub footnotes: Vec<String>,
    pub patched: bool,
}

/// An editorial override keyed by `Abbrev:Chapter:Verse` in a patch file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatchEntry {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub footnotes: Option<Vec<String>>,
}

/// Counters collected during one generator run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateReport {
    pub patches_loaded: usize,
    pub chapter_summaries: usize,
    pub book_introductions: usize,
    pub books: usize,
    pub chapters: usize,
    pub verses: usize,
    pub patched_verses: usize,
    pub skipped_books: Vec<String>,
}

// ============================================================================
// Search index
// ============================================================================

/// One flattened verse for client-side search
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub id: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub book: String,
    pub book_name: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footnotes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIndex {
    pub verses: Vec<SearchEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchIndexStats {
    pub total_verses: usize,
    pub verses_with_footnotes: usize,
    pub chapters_with_summary: usize,
}

/// Counts read back from an exported corpus database
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats {
    pub books: u64,
    pub chapters: u64,
    pub verses: u64,
    pub patched_verses: u64,
    pub footnotes: u64,
    pub chapter_summaries: u64,
}
