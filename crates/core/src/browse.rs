//! Browse request normalization.
//!
//! Raw query-string values arrive as optional strings. They are parsed,
//! bounds-checked and tokenized here into a [`BrowseParams`] before any
//! data access happens.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::{DbId, Year};

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Offset used when the client omits `offset`.
pub const DEFAULT_OFFSET: i64 = 0;

/// Page size used when the client omits `page_size`.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest accepted `page_size`.
pub const MAX_PAGE_SIZE: i64 = 50;

/// Only the first this-many search tokens take part in a query.
pub const MAX_SEARCH_TOKENS: usize = 3;

/// Longest accepted search token, in characters.
pub const MAX_SEARCH_TOKEN_CHARS: usize = 100;

// ---------------------------------------------------------------------------
// Field names reported in `InvalidInput`
// ---------------------------------------------------------------------------

pub const FIELD_OFFSET: &str = "offset";
pub const FIELD_PAGE_SIZE: &str = "page_size";
pub const FIELD_RELEASE_YEAR: &str = "release_year";
pub const FIELD_GENRE: &str = "genre";
pub const FIELD_SEARCH_TEXT: &str = "search_text";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Untyped browse query string (`?offset=&page_size=&search_text=&release_year=&genre=`).
///
/// Every field is kept as a string so that malformed numbers surface as
/// `InvalidInput` for the offending field instead of a generic rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BrowseQuery {
    pub offset: Option<String>,
    pub page_size: Option<String>,
    pub search_text: Option<String>,
    pub release_year: Option<String>,
    pub genre: Option<String>,
}

/// Validated browse request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseParams {
    pub offset: i64,
    pub page_size: i64,
    /// At most [`MAX_SEARCH_TOKENS`] non-empty tokens; empty means no text filter.
    pub search_words: Vec<String>,
    pub release_year: Option<Year>,
    pub genre: Option<DbId>,
}

impl BrowseQuery {
    /// Parse and validate against the given calendar year.
    ///
    /// Numeric fields are parsed first, then range-checked, then the search
    /// text is normalized and tokenized.
    pub fn validate(&self, current_year: Year) -> Result<BrowseParams, CoreError> {
        let offset = parse_paging_value(self.offset.as_deref(), DEFAULT_OFFSET, FIELD_OFFSET)?;
        let page_size =
            parse_paging_value(self.page_size.as_deref(), DEFAULT_PAGE_SIZE, FIELD_PAGE_SIZE)?;
        let release_year = parse_optional_int(self.release_year.as_deref(), FIELD_RELEASE_YEAR)?;
        let genre = parse_optional_int(self.genre.as_deref(), FIELD_GENRE)?;

        validate_browse_params(offset, page_size, release_year, genre, current_year)?;

        let search_words = match normalize_search_text(self.search_text.as_deref()) {
            Some(text) => tokenize_search_text(text)?,
            None => Vec::new(),
        };

        Ok(BrowseParams {
            offset,
            page_size,
            search_words,
            release_year,
            genre,
        })
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Parse a paging value, falling back to `default` when absent or blank.
pub fn parse_paging_value(
    raw: Option<&str>,
    default: i64,
    field: &'static str,
) -> Result<i64, CoreError> {
    match raw {
        Some(s) if !s.trim().is_empty() => s.trim().parse().map_err(|_| CoreError::invalid(field)),
        _ => Ok(default),
    }
}

/// Parse an optional integer filter; absent or blank yields `None`.
pub fn parse_optional_int<T: std::str::FromStr>(
    raw: Option<&str>,
    field: &'static str,
) -> Result<Option<T>, CoreError> {
    match raw {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| CoreError::invalid(field)),
        _ => Ok(None),
    }
}

/// Parse a path id that must be a positive integer.
pub fn validate_positive_id(raw: &str, field: &'static str) -> Result<DbId, CoreError> {
    match raw.trim().parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(CoreError::invalid(field)),
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// Range-check already-parsed browse values.
///
/// `release_year` must lie strictly between 0 and `current_year`.
pub fn validate_browse_params(
    offset: i64,
    page_size: i64,
    release_year: Option<Year>,
    genre: Option<DbId>,
    current_year: Year,
) -> Result<(), CoreError> {
    if offset < 0 {
        return Err(CoreError::invalid(FIELD_OFFSET));
    }
    if page_size <= 0 || page_size > MAX_PAGE_SIZE {
        return Err(CoreError::invalid(FIELD_PAGE_SIZE));
    }
    if let Some(year) = release_year {
        if year <= 0 || year >= current_year {
            return Err(CoreError::invalid(FIELD_RELEASE_YEAR));
        }
    }
    if let Some(genre) = genre {
        if genre <= 0 {
            return Err(CoreError::invalid(FIELD_GENRE));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Search text
// ---------------------------------------------------------------------------

/// Trim the raw search text; whitespace-only input becomes `None`.
pub fn normalize_search_text(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

/// Split search text into at most [`MAX_SEARCH_TOKENS`] tokens.
///
/// Tokens past the cap are dropped without inspection. A kept token longer
/// than [`MAX_SEARCH_TOKEN_CHARS`] or containing a NUL byte is rejected.
pub fn tokenize_search_text(text: &str) -> Result<Vec<String>, CoreError> {
    text.split_whitespace()
        .take(MAX_SEARCH_TOKENS)
        .map(|token| {
            if token.chars().count() > MAX_SEARCH_TOKEN_CHARS || token.contains('\0') {
                Err(CoreError::invalid(FIELD_SEARCH_TEXT))
            } else {
                Ok(token.to_string())
            }
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
