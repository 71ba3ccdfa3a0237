//! Error types for relink operations.
//!
//! The rewrite engine itself has no failure mode: candidates that cannot be
//! rewritten are skipped silently. Errors only arise around the engine, when
//! parsing HTML or evaluating CSS selectors.
//!
//! # Example
//!
//! ```rust
//! use relink_core::{Document, Result};
//!
//! fn count_anchors(html: &str) -> Result<usize> {
//!     let doc = Document::parse(html)?;
//!     Ok(doc.select("a[href]")?.len())
//! }
//! ```

use thiserror::Error;

/// Main error type for link rewriting operations.
#[derive(Error, Debug)]
pub enum RelinkError {
    /// HTML parsing errors.
    ///
    /// Returned when HTML cannot be parsed, often due to malformed markup
    /// or invalid CSS selectors.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),
}

/// Result type alias for RelinkError.
///
/// This is a convenience alias for `std::result::Result<T, RelinkError>`.
pub type Result<T> = std::result::Result<T, RelinkError>;
