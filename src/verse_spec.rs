//! Parsing of verse tokens such as `5` or `5-9`.

use crate::models::VerseSpec;
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

static RANGE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)-([0-9]+)$").unwrap());
static SINGLE_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)$").unwrap());

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("malformed verse token {0:?}")]
pub struct VerseSpecError(pub String);

/// Parse a verse token.
///
/// `None` or an empty token means the whole chapter. A reversed range such as
/// `9-5` parses fine and simply selects nothing.
pub fn parse_verse_spec(input: Option<&str>) -> Result<Option<VerseSpec>, VerseSpecError> {
    let token = match input {
        Some(token) if !token.is_empty() => token,
        _ => return Ok(None),
    };

    if let Some(caps) = RANGE_PATTERN.captures(token) {
        let start = parse_verse_number(&caps[1], token)?;
        let end = parse_verse_number(&caps[2], token)?;
        return Ok(Some(VerseSpec { start, end }));
    }

    if let Some(caps) = SINGLE_PATTERN.captures(token) {
        let verse = parse_verse_number(&caps[1], token)?;
        return Ok(Some(VerseSpec::single(verse)));
    }

    Err(VerseSpecError(token.to_string()))
}

fn parse_verse_number(digits: &str, token: &str) -> Result<u32, VerseSpecError> {
    match digits.parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(VerseSpecError(token.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_verse() {
        assert_eq!(parse_verse_spec(Some("5")), Ok(Some(VerseSpec { start: 5, end: 5 })));
    }

    #[test]
    fn test_range() {
        assert_eq!(parse_verse_spec(Some("5-9")), Ok(Some(VerseSpec { start: 5, end: 9 })));
    }

    #[test]
    fn test_reversed_range_is_not_an_error() {
        assert_eq!(parse_verse_spec(Some("9-5")), Ok(Some(VerseSpec { start: 9, end: 5 })));
    }

    #[test]
    fn test_whole_chapter() {
        assert_eq!(parse_verse_spec(None), Ok(None));
        assert_eq!(parse_verse_spec(Some("")), Ok(None));
    }

    #[test]
    fn test_malformed() {
        for token in ["abc", "5-", "-5", "5-9-12", " 5", "5a", "1,2", "0", "0-3", "99999999999"] {
            assert!(parse_verse_spec(Some(token)).is_err(), "token {token:?}");
        }
    }
}
