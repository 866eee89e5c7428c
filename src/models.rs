//! Data models for harvested announcement articles.

use serde::{Deserialize, Serialize};

/// One qualifying article from a section listing.
///
/// Records are immutable once extracted and are kept in discovery order:
/// sections in enumeration order, pages ascending within a section,
/// articles in document order within a page. No deduplication is
/// performed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArticleRecord {
    /// The article headline, trimmed.
    pub title: String,
    /// Publish date in `YYYY-MM-DD` form.
    pub date: String,
    /// Absolute URL of the article.
    pub link: String,
}
