//! Canonical book registry.
//!
//! One [`BookEntry`] per book of the Douay-Rheims canon (46 + 27), in
//! canonical order. Each entry carries its aliases and the native key under
//! which every source format stores it. Resolution goes through an alias
//! table built once, in declaration order, so fuzzy tie-breaks are
//! reproducible.

use crate::models::Testament;
use crate::translations::{normalize_name, Translation};
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Maximum edit distance for a "did you mean" suggestion
pub const SUGGESTION_MAX_DISTANCE: usize = 3;

/// Static description of one canonical book
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub abbrev: &'static str,
    pub testament: Testament,
    pub aliases: &'static [&'static str],
    pub dr: Option<&'static str>,      // Book name in the prose file headers
    pub vulgate: Option<&'static str>, // Book name column of the TSV
    pub lxx: Option<&'static str>,     // File stem under the septuagint dir
    pub hebrew: Option<&'static str>,  // File stem under the hebrew dir
}

impl BookEntry {
    /// The format-native key for this book, if the translation contains it.
    pub fn native_key(&self, translation: Translation) -> Option<&'static str> {
        match translation {
            Translation::DouayRheims => self.dr,
            Translation::Vulgate => self.vulgate,
            Translation::Septuagint => self.lxx,
            Translation::Hebrew => self.hebrew,
        }
    }

    pub fn is_available_in(&self, translation: Translation) -> bool {
        self.native_key(translation).is_some()
    }

    /// Books of the Latin and Greek canons absent from the Hebrew source set.
    pub fn is_deuterocanonical(&self) -> bool {
        DEUTEROCANONICAL.contains(&self.id)
    }
}

const DEUTEROCANONICAL: &[&str] = &[
    "tobias",
    "judith",
    "wisdom",
    "ecclesiasticus",
    "baruch",
    "1-machabees",
    "2-machabees",
];

#[allow(clippy::too_many_arguments)]
const fn ot(
    id: &'static str,
    name: &'static str,
    abbrev: &'static str,
    aliases: &'static [&'static str],
    dr: &'static str,
    vulgate: &'static str,
    lxx: Option<&'static str>,
    hebrew: Option<&'static str>,
) -> BookEntry {
    BookEntry {
        id,
        name,
        abbrev,
        testament: Testament::Old,
        aliases,
        dr: Some(dr),
        vulgate: Some(vulgate),
        lxx,
        hebrew,
    }
}

/// New Testament books exist only in the Latin and English corpora, under
/// their canonical names.
const fn nt(
    id: &'static str,
    name: &'static str,
    abbrev: &'static str,
    aliases: &'static [&'static str],
) -> BookEntry {
    BookEntry {
        id,
        name,
        abbrev,
        testament: Testament::New,
        aliases,
        dr: Some(name),
        vulgate: Some(name),
        lxx: None,
        hebrew: None,
    }
}

pub static BOOKS: &[BookEntry] = &[
    // Pentateuch
    ot("genesis", "Genesis", "Gen", &["gen", "gn"], "Genesis", "Genesis", Some("01.Genesis"), Some("gen")),
    ot("exodus", "Exodus", "Exod", &["exod", "exo", "ex"], "Exodus", "Exodus", Some("02.Exodus"), Some("exo")),
    ot("leviticus", "Leviticus", "Lev", &["lev", "lv"], "Leviticus", "Leviticus", Some("03.Leviticus"), Some("lev")),
    ot("numbers", "Numbers", "Num", &["num", "nm"], "Numbers", "Numbers", Some("04.Numeri"), Some("num")),
    ot("deuteronomy", "Deuteronomy", "Deut", &["deut", "dt"], "Deuteronomy", "Deuteronomy", Some("05.Deuteronomium"), Some("deu")),
    // Historical books
    ot("josue", "Josue", "Jos", &["joshua", "josh", "jos"], "Josue", "Joshua", Some("06.Josue"), Some("jos")),
    ot("judges", "Judges", "Judg", &["judg", "jdg", "jg"], "Judges", "Judges", Some("08.Judices"), Some("jdg")),
    ot("ruth", "Ruth", "Ruth", &["rth", "ru"], "Ruth", "Ruth", Some("10.Ruth"), Some("rut")),
    ot("1-samuel", "1 Samuel", "1Sam", &["1sam", "1sm", "1regum"], "First Book Of Samuel", "1 Samuel", Some("11.Regnorum_I"), Some("1sam")),
    ot("2-samuel", "2 Samuel", "2Sam", &["2sam", "2sm", "2regum"], "Second Book Of Samuel", "2 Samuel", Some("12.Regnorum_II"), Some("2sam")),
    ot("1-kings", "1 Kings", "1Kgs", &["1kgs", "1ki", "3kings"], "Third Book Of Kings", "1 Kings", Some("13.Regnorum_III"), Some("1kings")),
    // The TSV spells this one "2 King".
    ot("2-kings", "2 Kings", "2Kgs", &["2kgs", "2ki", "4kings"], "Fourth Book Of Kings", "2 King", Some("14.Regnorum_IV"), Some("2kings")),
    ot("1-chronicles", "1 Chronicles", "1Chr", &["1chr", "1chron", "1paralipomenon"], "First Book Of Paralipomenon", "1 Chronicles", Some("15.Paralipomenon_I"), Some("1chron")),
    ot("2-chronicles", "2 Chronicles", "2Chr", &["2chr", "2chron", "2paralipomenon"], "Second Book Of Paralipomenon", "2 Chronicles", Some("16.Paralipomenon_II"), Some("2chron")),
    // Ezra and Nehemiah share one Hebrew file.
    ot("ezra", "Ezra", "Ezra", &["ezr", "1esdras"], "First Book Of Esdras", "Ezra", Some("17.Esdras_A"), Some("2ezr")),
    ot("nehemiah", "Nehemiah", "Neh", &["neh", "ne", "2esdras", "nehemias"], "Nehemias", "Nehemiah", Some("18.Esdras_B"), Some("2ezr")),
    ot("tobias", "Tobias", "Tob", &["tobit", "tb"], "Tobias", "Tobit", Some("21.Tobias"), None),
    ot("judith", "Judith", "Jdt", &["jdth", "jth"], "Judith", "Judith", Some("20.Judith"), None),
    ot("esther", "Esther", "Esth", &["esth", "est"], "Esther", "Esther", Some("19.Esther"), Some("est")),
    // Wisdom books
    ot("job", "Job", "Job", &["jb"], "Job", "Job", Some("32.Job"), Some("job")),
    ot("psalms", "Psalms", "Ps", &["ps", "pss", "psalm"], "Psalms", "Psalms", Some("27.Psalmi"), Some("psah")),
    ot("proverbs", "Proverbs", "Prov", &["prov", "prv", "pr"], "Proverbs", "Proverbs", Some("29.Proverbia"), Some("pro")),
    ot("ecclesiastes", "Ecclesiastes", "Eccl", &["eccl", "ecc", "qoheleth", "qoh"], "Ecclesiastes", "Ecclesiastes", None, Some("ecc")),
    ot("canticles", "Canticle of Canticles", "Song", &["song", "songofsongs", "sos", "canticle", "sg"], "Canticle Of Canticles", "Song of Solomon", Some("31.Canticum"), Some("sng")),
    ot("wisdom", "Wisdom", "Wis", &["wis", "wisdomofsolomon", "ws"], "Wisdom", "Wisdom", Some("33.Sapientia_Salomonis"), None),
    ot("ecclesiasticus", "Ecclesiasticus", "Sir", &["sir", "sirach", "ben sira"], "Ecclesiasticus", "Sirach", Some("34.Ecclesiasticus"), None),
    // Major prophets
    ot("isaias", "Isaias", "Isa", &["isaiah", "isa", "is"], "Isaias", "Isaiah", Some("48.Isaias"), Some("isa")),
    ot("jeremias", "Jeremias", "Jer", &["jeremiah", "jer", "jr"], "Jeremias", "Jeremiah", Some("49.Jeremias"), Some("jer")),
    ot("lamentations", "Lamentations", "Lam", &["lam", "la"], "Lamentations", "Lamentations", Some("51.Threni_seu_Lamentationes"), Some("lam")),
    ot("baruch", "Baruch", "Bar", &["bar", "ba"], "Baruch", "Baruch", Some("50.Baruch"), None),
    ot("ezechiel", "Ezechiel", "Ezek", &["ezekiel", "ezek", "ez"], "Ezechiel", "Ezekiel", Some("53.Ezechiel"), Some("eze")),
    ot("daniel", "Daniel", "Dan", &["dan", "dn"], "Daniel", "Daniel", Some("57.Daniel_Theodotionis_versio"), Some("dan")),
    // Minor prophets
    ot("osee", "Osee", "Hos", &["hosea", "hos", "ho"], "Osee", "Hosea", Some("36.Osee"), Some("hos")),
    ot("joel", "Joel", "Joel", &["jl"], "Joel", "Joel", Some("39.Joel"), Some("joel")),
    ot("amos", "Amos", "Amos", &["am"], "Amos", "Amos", Some("37.Amos"), Some("amo")),
    ot("abdias", "Abdias", "Obad", &["obadiah", "obad", "ob"], "Abdias", "Obadiah", Some("40.Abdias"), Some("oba")),
    ot("jonas", "Jonas", "Jonah", &["jonah", "jon", "jnh"], "Jonas", "Jonah", Some("41.Jonas"), Some("jon")),
    ot("micheas", "Micheas", "Mic", &["micah", "mic", "mi"], "Micheas", "Micah", Some("38.Michaeas"), Some("mic")),
    ot("nahum", "Nahum", "Nah", &["nah", "na"], "Nahum", "Nahum", Some("42.Nahum"), Some("nahum")),
    ot("habacuc", "Habacuc", "Hab", &["habakkuk", "hab", "hb"], "Habacuc", "Habakkuk", Some("43.Habacuc"), Some("hab")),
    ot("sophonias", "Sophonias", "Zeph", &["zephaniah", "zeph", "zep"], "Sophonias", "Zephaniah", Some("44.Sophonias"), Some("zep")),
    ot("aggeus", "Aggeus", "Hag", &["haggai", "hag", "hg"], "Aggeus", "Haggai", Some("45.Aggaeus"), Some("hag")),
    ot("zacharias", "Zacharias", "Zech", &["zechariah", "zech", "zec"], "Zacharias", "Zechariah", Some("46.Zacharias"), Some("zec")),
    ot("malachias", "Malachias", "Mal", &["malachi", "mal", "ml"], "Malachias", "Malachi", Some("47.Malachias"), Some("mal")),
    ot("1-machabees", "1 Machabees", "1Macc", &["1macc", "1maccabees", "1mac"], "First Book Of Machabees", "1 Maccabees", Some("23.Machabaeorum_i"), None),
    ot("2-machabees", "2 Machabees", "2Macc", &["2macc", "2maccabees", "2mac"], "Second Book Of Machabees", "2 Maccabees", Some("24.Machabaeorum_ii"), None),
    // New Testament
    nt("matthew", "Matthew", "Matt", &["matt", "mt"]),
    nt("mark", "Mark", "Mark", &["mk", "mrk"]),
    nt("luke", "Luke", "Luke", &["lk", "luk"]),
    nt("john", "John", "John", &["jn", "jhn"]),
    nt("acts", "Acts", "Acts", &["act", "actsoftheapostles"]),
    nt("romans", "Romans", "Rom", &["rom", "rm"]),
    nt("1-corinthians", "1 Corinthians", "1Cor", &["1cor", "1co"]),
    nt("2-corinthians", "2 Corinthians", "2Cor", &["2cor", "2co"]),
    nt("galatians", "Galatians", "Gal", &["gal"]),
    nt("ephesians", "Ephesians", "Eph", &["eph", "ephes"]),
    nt("philippians", "Philippians", "Phil", &["phil", "php"]),
    nt("colossians", "Colossians", "Col", &["col"]),
    nt("1-thessalonians", "1 Thessalonians", "1Thess", &["1thess", "1th"]),
    nt("2-thessalonians", "2 Thessalonians", "2Thess", &["2thess", "2th"]),
    nt("1-timothy", "1 Timothy", "1Tim", &["1tim", "1ti"]),
    nt("2-timothy", "2 Timothy", "2Tim", &["2tim", "2ti"]),
    nt("titus", "Titus", "Titus", &["tit"]),
    nt("philemon", "Philemon", "Phlm", &["phlm", "phm", "philem"]),
    nt("hebrews", "Hebrews", "Heb", &["hebr"]),
    nt("james", "James", "Jas", &["jas", "jm"]),
    nt("1-peter", "1 Peter", "1Pet", &["1pet", "1pt"]),
    nt("2-peter", "2 Peter", "2Pet", &["2pet", "2pt"]),
    nt("1-john", "1 John", "1John", &["1jn", "1jhn"]),
    nt("2-john", "2 John", "2John", &["2jn", "2jhn"]),
    nt("3-john", "3 John", "3John", &["3jn", "3jhn"]),
    nt("jude", "Jude", "Jude", &["jud"]),
    nt("apocalypse", "Apocalypse", "Rev", &["rev", "revelation", "apoc", "rv"]),
];

/// Alias table over [`BOOKS`]: an ordered list for scans plus a hash index
/// for exact matches.
#[derive(Debug)]
pub struct BookRegistry {
    aliases: Vec<(String, usize)>,
    index: HashMap<String, usize>,
    collisions: Vec<AliasCollision>,
}

/// Two books claiming the same normalized alias
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasCollision {
    pub alias: String,
    pub kept: &'static str,
    pub dropped: &'static str,
}

static REGISTRY: Lazy<BookRegistry> = Lazy::new(|| BookRegistry::build(BOOKS));

impl BookRegistry {
    /// Build the alias table from id, canonical name, abbreviation and the
    /// alias list of every book. The first claimant of an alias keeps it.
    pub fn build(books: &'static [BookEntry]) -> Self {
        let mut aliases = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut collisions = Vec::new();

        for (book_idx, book) in books.iter().enumerate() {
            let names = [book.id, book.name, book.abbrev]
                .into_iter()
                .chain(book.aliases.iter().copied());

            for name in names {
                let alias = normalize_name(name);
                match index.get(&alias) {
                    Some(&owner) if owner == book_idx => {}
                    Some(&owner) => collisions.push(AliasCollision {
                        alias,
                        kept: books[owner].id,
                        dropped: book.id,
                    }),
                    None => {
                        index.insert(alias.clone(), book_idx);
                        aliases.push((alias, book_idx));
                    }
                }
            }
        }

        Self {
            aliases,
            index,
            collisions,
        }
    }

    pub fn global() -> &'static BookRegistry {
        &REGISTRY
    }

    pub fn collisions(&self) -> &[AliasCollision] {
        &self.collisions
    }

    /// Exact alias match, then substring fallback ranked by length difference.
    pub fn resolve(&self, input: &str) -> Option<usize> {
        let normalized = normalize_name(input);
        if normalized.is_empty() {
            return None;
        }

        if let Some(&idx) = self.index.get(&normalized) {
            return Some(idx);
        }

        let input_len = normalized.chars().count();
        self.aliases
            .iter()
            .filter(|(alias, _)| alias.contains(&normalized) || normalized.contains(alias.as_str()))
            // min_by_key keeps the first of equal keys, i.e. scan order
            .min_by_key(|(alias, _)| alias.chars().count().abs_diff(input_len))
            .map(|&(_, idx)| idx)
    }

    /// Closest alias by edit distance, within [`SUGGESTION_MAX_DISTANCE`].
    pub fn suggest(&self, input: &str) -> Option<usize> {
        let normalized = normalize_name(input);
        if normalized.is_empty() {
            return None;
        }

        let mut best: Option<(usize, usize)> = None;
        for (alias, idx) in &self.aliases {
            let distance = strsim::levenshtein(&normalized, alias);
            if distance > SUGGESTION_MAX_DISTANCE {
                continue;
            }
            match best {
                Some((best_distance, _)) if distance >= best_distance => {}
                _ => best = Some((distance, *idx)),
            }
        }

        best.map(|(_, idx)| idx)
    }
}

/// All canonical books in declaration order.
pub fn all_books() -> &'static [BookEntry] {
    BOOKS
}

pub fn book_by_id(id: &str) -> Option<&'static BookEntry> {
    BOOKS.iter().find(|b| b.id == id)
}

pub fn book_by_name(name: &str) -> Option<&'static BookEntry> {
    BOOKS.iter().find(|b| b.name == name)
}

/// Resolve free-form user input to a canonical book.
pub fn resolve_book(input: &str) -> Option<&'static BookEntry> {
    REGISTRY.resolve(input).map(|idx| &BOOKS[idx])
}

/// Canonical name of the closest book, for error messages only.
pub fn suggest_book(input: &str) -> Option<&'static str> {
    REGISTRY.suggest(input).map(|idx| BOOKS[idx].name)
}

/// Availability table for the `books` command.
pub fn list_books() -> String {
    let mark = |book: &BookEntry, t: Translation| if book.is_available_in(t) { '✓' } else { ' ' };

    let mut lines = vec!["Available books:".to_string(), String::new()];
    for book in BOOKS {
        lines.push(format!(
            "  {:<6} {:<25} [DR{} VUL{} LXX{} HEB{}]",
            book.abbrev,
            book.name,
            mark(book, Translation::DouayRheims),
            mark(book, Translation::Vulgate),
            mark(book, Translation::Septuagint),
            mark(book, Translation::Hebrew),
        ));
    }
    lines.join("\n")
}
