//! Translation registry: free-form names to the four supported traditions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four supported text traditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Translation {
    /// Douay-Rheims (English), line-oriented prose file
    #[serde(rename = "dr")]
    DouayRheims,
    /// Latin Vulgate, tab-separated rows
    Vulgate,
    /// Septuagint (Greek), one word-per-line file per book
    #[serde(rename = "lxx")]
    Septuagint,
    /// Hebrew Masoretic, one outline file per book
    Hebrew,
}

impl Translation {
    pub const ALL: [Translation; 4] = [
        Translation::Vulgate,
        Translation::DouayRheims,
        Translation::Septuagint,
        Translation::Hebrew,
    ];

    /// Short key used on the command line and in listings
    pub fn key(&self) -> &'static str {
        match self {
            Translation::DouayRheims => "dr",
            Translation::Vulgate => "vulgate",
            Translation::Septuagint => "lxx",
            Translation::Hebrew => "hebrew",
        }
    }

    /// Name shown in lookup headers
    pub fn display_name(&self) -> &'static str {
        match self {
            Translation::DouayRheims => "Douay-Rheims",
            Translation::Vulgate => "Latin Vulgate",
            Translation::Septuagint => "Septuagint (Greek)",
            Translation::Hebrew => "Hebrew Masoretic",
        }
    }

    /// Name used inside parser error messages
    pub fn source_name(&self) -> &'static str {
        match self {
            Translation::DouayRheims => "Douay-Rheims",
            Translation::Vulgate => "Vulgate",
            Translation::Septuagint => "Septuagint",
            Translation::Hebrew => "Hebrew",
        }
    }

    /// Suffix appended to range errors. The single-file sources omit it.
    pub fn range_suffix(&self) -> String {
        match self {
            Translation::DouayRheims | Translation::Vulgate => String::new(),
            Translation::Septuagint | Translation::Hebrew => format!(" in {}", self.source_name()),
        }
    }
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Alias table, already in normalized form.
const TRANSLATION_ALIASES: &[(&str, Translation)] = &[
    ("dr", Translation::DouayRheims),
    ("douay", Translation::DouayRheims),
    ("douayrheims", Translation::DouayRheims),
    ("english", Translation::DouayRheims),
    ("vulgate", Translation::Vulgate),
    ("vul", Translation::Vulgate),
    ("latin", Translation::Vulgate),
    ("lxx", Translation::Septuagint),
    ("septuagint", Translation::Septuagint),
    ("greek", Translation::Septuagint),
    ("hebrew", Translation::Hebrew),
    ("heb", Translation::Hebrew),
    ("masoretic", Translation::Hebrew),
];

/// Lowercase and strip whitespace, hyphens and underscores.
pub fn normalize_name(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve a translation alias. There is no fuzzy fallback.
pub fn resolve_translation(input: &str) -> Option<Translation> {
    let normalized = normalize_name(input);
    TRANSLATION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|&(_, translation)| translation)
}

/// One `  key: Display Name` line per translation, for error messages.
pub fn available_translations() -> String {
    Translation::ALL
        .iter()
        .map(|t| format!("  {}: {}", t.key(), t.display_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable alias listing for the `translations` command.
pub fn list_translations() -> String {
    let mut lines = vec!["Available translations:".to_string(), String::new()];
    for translation in [
        Translation::DouayRheims,
        Translation::Vulgate,
        Translation::Septuagint,
        Translation::Hebrew,
    ] {
        let aliases: Vec<&str> = TRANSLATION_ALIASES
            .iter()
            .filter(|(_, t)| *t == translation)
            .map(|(alias, _)| *alias)
            .collect();
        lines.push(format!(
            "  {:<28} {}",
            aliases.join(", "),
            translation.display_name()
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_translation_aliases() {
        assert_eq!(resolve_translation("dr"), Some(Translation::DouayRheims));
        assert_eq!(resolve_translation("Douay-Rheims"), Some(Translation::DouayRheims));
        assert_eq!(resolve_translation("douay_rheims"), Some(Translation::DouayRheims));
        assert_eq!(resolve_translation("ENGLISH"), Some(Translation::DouayRheims));
        assert_eq!(resolve_translation("Latin"), Some(Translation::Vulgate));
        assert_eq!(resolve_translation("vul"), Some(Translation::Vulgate));
        assert_eq!(resolve_translation("Greek"), Some(Translation::Septuagint));
        assert_eq!(resolve_translation(" LXX "), Some(Translation::Septuagint));
        assert_eq!(resolve_translation("masoretic"), Some(Translation::Hebrew));
    }

    #[test]
    fn test_resolve_translation_has_no_fuzzy_fallback() {
        assert_eq!(resolve_translation("vulgat"), None);
        assert_eq!(resolve_translation("kjv"), None);
        assert_eq!(resolve_translation(""), None);
    }

    #[test]
    fn test_available_translations_lists_all_keys() {
        let listing = available_translations();
        assert_eq!(listing.lines().count(), 4);
        assert!(listing.contains("  vulgate: Latin Vulgate"));
        assert!(listing.contains("  dr: Douay-Rheims"));
        assert!(listing.contains("  lxx: Septuagint (Greek)"));
        assert!(listing.contains("  hebrew: Hebrew Masoretic"));
    }

    #[test]
    fn test_range_suffix() {
        assert_eq!(Translation::DouayRheims.range_suffix(), "");
        assert_eq!(Translation::Vulgate.range_suffix(), "");
        assert_eq!(Translation::Septuagint.range_suffix(), " in Septuagint");
        assert_eq!(Translation::Hebrew.range_suffix(), " in Hebrew");
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("1 Kings"), "1kings");
        assert_eq!(normalize_name("Song_of-Songs"), "songofsongs");
        assert_eq!(normalize_name("  "), "");
    }
}
