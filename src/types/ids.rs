use super::ValidationError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use url::Url;
use uuid::Uuid;

/// A Notion object identifier, tagged with the kind of object it names.
///
/// Notion accepts ids with or without dashes; both parse to the same value.
pub struct Id<T> {
    uuid: Uuid,
    _kind: PhantomData<fn() -> T>,
}

#[derive(Debug)]
pub enum PageKind {}
#[derive(Debug)]
pub enum BlockKind {}
#[derive(Debug)]
pub enum DatabaseKind {}

pub type PageId = Id<PageKind>;
pub type BlockId = Id<BlockKind>;
pub type DatabaseId = Id<DatabaseKind>;

lazy_static::lazy_static! {
    // Dashed or compact, at the very end of the candidate
    static ref TRAILING_ID: Regex = Regex::new(
        r"(?i)([0-9a-f]{8}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{12})$"
    ).expect("trailing id pattern is valid");
}

impl<T> Id<T> {
    /// Accepts a compact or dashed id, or a Notion URL ending in one
    /// (`https://www.notion.so/Title-<id>`, optionally with `?v=` or `?p=`).
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ValidationError::EmptyField("id"));
        }

        let uuid = if input.starts_with("http://") || input.starts_with("https://") {
            id_from_url(input)?
        } else {
            exact_id(input)?
        };

        Ok(Self::from_uuid(uuid))
    }

    pub fn new_v4() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _kind: PhantomData,
        }
    }

    /// 32 lowercase hex digits, the form Notion uses in page URLs.
    pub fn compact(&self) -> String {
        self.uuid.as_simple().to_string()
    }

    /// The dashed form used in API paths.
    pub fn to_dashed(&self) -> String {
        self.uuid.as_hyphenated().to_string()
    }
}

fn exact_id(candidate: &str) -> Result<Uuid, ValidationError> {
    match TRAILING_ID.captures(candidate) {
        Some(captures) if captures[1].len() == candidate.len() => {
            Uuid::try_parse(&captures[1].replace('-', ""))
                .map_err(|e| ValidationError::InvalidId(format!("'{}': {}", candidate, e)))
        }
        _ => Err(ValidationError::InvalidId(format!(
            "'{}' is not a 32-digit hex id",
            candidate
        ))),
    }
}

/// Peek links (`?p=<id>`) name the opened page; otherwise the id ends the last path segment.
fn id_from_url(input: &str) -> Result<Uuid, ValidationError> {
    let url = Url::parse(input).map_err(|e| ValidationError::InvalidUrl {
        url: input.to_string(),
        reason: e.to_string(),
    })?;

    if let Some((_, peek)) = url.query_pairs().find(|(key, _)| key == "p") {
        return exact_id(&peek);
    }

    let segment = url
        .path_segments()
        .and_then(|mut segments| segments.rfind(|s| !s.is_empty()))
        .unwrap_or_default();

    TRAILING_ID
        .captures(segment)
        .and_then(|captures| Uuid::try_parse(&captures[1].replace('-', "")).ok())
        .ok_or_else(|| ValidationError::InvalidUrl {
            url: input.to_string(),
            reason: "no Notion id at the end of the path".to_string(),
        })
}

// Manual impls: derives would require the kind parameter to implement them too.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.uuid.as_hyphenated())
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.uuid.as_hyphenated(), f)
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPACT: &str = "550e8400e29b41d4a716446655440000";

    #[test]
    fn test_id_forms() {
        for input in [
            COMPACT,
            "550E8400-E29B-41D4-A716-446655440000",
            "  550e8400-e29b-41d4-a716-446655440000 ",
            "https://www.notion.so/Test-Page-550e8400e29b41d4a716446655440000",
            "https://www.notion.so/acme/550e8400e29b41d4a716446655440000?v=1",
            "https://www.notion.so/acme/Board-0000?p=550e8400e29b41d4a716446655440000&pm=s",
        ] {
            let id = PageId::parse(input).unwrap_or_else(|e| panic!("{}: {}", input, e));
            assert_eq!(id.compact(), COMPACT, "{}", input);
        }
    }

    #[test]
    fn test_invalid_ids() {
        for input in [
            "",
            "too-short",
            "missing-id",
            "nonexistent-id-12345",
            "not-hex-chars-00000000000000000",
            "x550e8400e29b41d4a716446655440000",
            "https://www.notion.so/no-id-here",
        ] {
            assert!(PageId::parse(input).is_err(), "{} should not parse", input);
        }
    }

    #[test]
    fn test_display_and_serde_use_dashed_form() {
        let id = BlockId::parse(COMPACT).unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");

        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"550e8400-e29b-41d4-a716-446655440000\"");
        let back: BlockId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
