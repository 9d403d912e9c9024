// src/types/domain_types.rs
//! Validated values taken from configuration and tool arguments.

use super::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Token prefixes Notion issues for internal integrations.
const TOKEN_PREFIXES: [&str; 2] = ["ntn_", "secret_"];
const MIN_TOKEN_LEN: usize = 20;

/// Notion integration token. Never printed in full.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into().trim().to_string();
        let invalid = |reason: &str| ValidationError::InvalidApiKey {
            reason: reason.to_string(),
        };

        if key.is_empty() {
            return Err(invalid("token is empty"));
        }
        if token_prefix(&key).is_none() {
            return Err(invalid("token must start with 'ntn_' or 'secret_'"));
        }
        if key.len() < MIN_TOKEN_LEN {
            return Err(invalid("token is too short"));
        }

        Ok(Self(key))
    }

    /// The full token, for the `Authorization` header only.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn token_prefix(key: &str) -> Option<&'static str> {
    TOKEN_PREFIXES.into_iter().find(|prefix| key.starts_with(prefix))
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}***", token_prefix(&self.0).unwrap_or_default())
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&format_args!("{}", self)).finish()
    }
}

/// Direction in which search results are ordered by their last-edited time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// The direction keyword the Notion API expects in `sort.direction`.
    pub fn api_direction(self) -> &'static str {
        match self {
            SortOrder::Asc => "ascending",
            SortOrder::Desc => "descending",
        }
    }
}

impl FromStr for SortOrder {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Asc),
            "desc" | "descending" => Ok(SortOrder::Desc),
            other => Err(ValidationError::UnsupportedValue {
                field: "sort_order",
                value: other.to_string(),
                expected: "asc, desc",
            }),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

/// Criterion used to re-order search results locally.
///
/// Notion's search endpoint only sorts by `last_edited_time`, so that is
/// the single criterion offered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    LastEdited,
}

impl FromStr for SortBy {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "last_edited" | "last_edited_time" => Ok(SortBy::LastEdited),
            other => Err(ValidationError::UnsupportedValue {
                field: "sort_by",
                value: other.to_string(),
                expected: "last_edited",
            }),
        }
    }
}

impl fmt::Display for SortBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortBy::LastEdited => write!(f, "last_edited"),
        }
    }
}
