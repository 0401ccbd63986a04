//! Note identifier: ULIDs for new notes, any non-empty token for loaded ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::Hash;
use std::str::FromStr;
use std::sync::{LazyLock, Mutex, PoisonError};
use ulid::{Generator, Ulid};

/// Number of characters shown when an id is abbreviated.
const PREFIX_LEN: usize = 10;

/// Process-wide generator so ids created in the same millisecond still sort
/// in creation order.
static GENERATOR: LazyLock<Mutex<Generator>> = LazyLock::new(|| Mutex::new(Generator::new()));

/// A unique identifier for a note.
///
/// Freshly created notes get a ULID (26-character Crockford Base32). Ids
/// minted by one process are strictly increasing, even within the same
/// millisecond.
/// Documents written by older versions used numeric ids such as
/// `"17000000000001"`; those are accepted verbatim so existing collections
/// keep their identities.
///
/// # Examples
///
/// ```
/// use memo::domain::NoteId;
///
/// let id = NoteId::new();
/// assert_eq!(id.as_str().len(), 26);
///
/// let legacy: NoteId = "17000000000001".parse().unwrap();
/// assert_eq!(legacy.as_str(), "17000000000001");
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct NoteId(String);

impl NoteId {
    /// Creates a new ULID-backed NoteId with the current timestamp.
    pub fn new() -> Self {
        let mut generator = GENERATOR.lock().unwrap_or_else(PoisonError::into_inner);
        // Overflow needs 2^80 ids in one millisecond.
        let ulid = generator.generate().unwrap_or_else(|_| Ulid::new());
        Self(ulid.to_string())
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the first 10 characters of the id (the whole id if shorter).
    ///
    /// For ULIDs the first 10 characters encode the creation millisecond,
    /// which is enough to tell notes apart in listings.
    pub fn prefix(&self) -> &str {
        match self.0.char_indices().nth(PREFIX_LEN) {
            Some((idx, _)) => &self.0[..idx],
            None => &self.0,
        }
    }
}

impl Default for NoteId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteId(\"{}\")", self.0)
    }
}

/// Error returned when parsing an invalid note id.
#[derive(Debug, Clone)]
pub struct ParseNoteIdError {
    value: String,
    reason: &'static str,
}

impl ParseNoteIdError {
    /// Returns the invalid value that caused this error.
    pub fn invalid_value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseNoteIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid note id '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for ParseNoteIdError {}

impl FromStr for NoteId {
    type Err = ParseNoteIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseNoteIdError {
                value: s.to_string(),
                reason: "id cannot be empty",
            });
        }
        if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(ParseNoteIdError {
                value: s.to_string(),
                reason: "id cannot contain whitespace or control characters",
            });
        }
        Ok(NoteId(s.to_string()))
    }
}

impl Serialize for NoteId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for NoteId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    #[test]
    fn new_creates_valid_ulid() {
        let id = NoteId::new();
        let s = id.to_string();
        assert_eq!(s.len(), 26, "ULID should be 26 characters");
        assert!(Ulid::from_string(&s).is_ok());
    }

    #[test]
    fn prefix_returns_first_10_chars() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(id.prefix(), "01HQ3K5M7N");
    }

    #[test]
    fn prefix_of_short_id_is_whole_id() {
        let id: NoteId = "17000".parse().unwrap();
        assert_eq!(id.prefix(), "17000");
    }

    #[test]
    fn parse_accepts_legacy_numeric_id() {
        let id: NoteId = "17000000000001".parse().expect("legacy ids should parse");
        assert_eq!(id.as_str(), "17000000000001");
    }

    #[test]
    fn parse_rejects_empty() {
        let err = "".parse::<NoteId>().unwrap_err();
        assert!(err.to_string().contains("cannot be empty"));
    }

    #[test]
    fn parse_rejects_whitespace() {
        let err = "abc def".parse::<NoteId>().unwrap_err();
        assert_eq!(err.invalid_value(), "abc def");
    }

    #[test]
    fn multiple_new_ids_are_unique() {
        let ids: Vec<NoteId> = (0..100).map(|_| NoteId::new()).collect();
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(ids.len(), unique.len(), "all generated IDs should be unique");
    }

    #[test]
    fn new_ids_are_strictly_increasing() {
        let ids: Vec<String> = (0..2000).map(|_| NoteId::new().to_string()).collect();
        for pair in ids.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort before {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn serde_roundtrip_as_plain_string() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\"");
        let parsed: NoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn deserialize_rejects_empty_string() {
        let result: Result<NoteId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }

    #[test]
    fn debug_format() {
        let id: NoteId = "01HQ3K5M7NXJK4QZPW8V2R6T9Y".parse().unwrap();
        assert_eq!(format!("{:?}", id), "NoteId(\"01HQ3K5M7NXJK4QZPW8V2R6T9Y\")");
    }
}
