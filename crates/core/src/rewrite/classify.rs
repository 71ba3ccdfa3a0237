//! URL eligibility classification.
//!
//! Only same-origin references are safe to redirect: relative paths,
//! root-relative paths, and query-only references. Anything already
//! qualified with a scheme (`https:`, `mailto:`, `javascript:`, `data:`,
//! ...), protocol-relative references (`//cdn.example.com/x`), and pure
//! in-page fragments (`#section`) must never be touched.

use std::sync::LazyLock;

use regex::Regex;

/// Matches explicit schemes (RFC 3986 scheme syntax followed by a colon)
/// and protocol-relative references.
static ABSOLUTE_OR_PROTOCOL_RELATIVE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[a-zA-Z][a-zA-Z0-9+.\-]*:|//)").unwrap());

/// Returns `true` if `candidate` is eligible for rewriting.
///
/// # Example
///
/// ```rust
/// use relink_core::is_rewritable;
///
/// assert!(is_rewritable("/about"));
/// assert!(is_rewritable("img/logo.png"));
/// assert!(!is_rewritable("https://example.com/about"));
/// assert!(!is_rewritable("#top"));
/// ```
pub fn is_rewritable(candidate: &str) -> bool {
    !candidate.is_empty()
        && !candidate.starts_with('#')
        && !ABSOLUTE_OR_PROTOCOL_RELATIVE.is_match(candidate)
}
