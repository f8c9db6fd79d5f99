//! Browse response envelope.

use serde::Serialize;

use super::title::Title;

/// One page of browse results.
///
/// No total count is computed; a page shorter than `page_size` is the last.
#[derive(Debug, Clone, Serialize)]
pub struct BrowsePage {
    pub offset: i64,
    pub page_size: i64,
    pub results: Vec<Title>,
}
