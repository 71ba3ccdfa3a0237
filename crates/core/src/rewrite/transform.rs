//! Rewrite instructions and their resolution.
//!
//! Callers describe how links should change either as a fixed prefix string
//! or as a per-candidate callback. Both shapes are resolved once, up front,
//! into a single uniform rewrite function so the instruction's shape is not
//! re-checked for every candidate.

use super::classify::is_rewritable;

/// Where a candidate URL came from, passed to callback transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkContext<'a> {
    /// Tag name of the originating element.
    pub tag: &'a str,
    /// Name of the attribute the candidate was found in.
    pub attr: &'a str,
}

/// A rewrite instruction: a fixed prefix, or a per-candidate callback.
///
/// # Example
///
/// ```rust
/// use relink_core::{Document, Transform};
///
/// let mut doc = Document::parse(r#"<a href="/about">About</a>"#).unwrap();
/// let changed = doc.rewrite_links(Transform::prefix("https://mirror.example/"));
/// assert_eq!(changed, 1);
/// ```
pub enum Transform<'a> {
    /// Concatenate a fixed prefix with the candidate, stripped of its
    /// leading slashes (so `"https://host/"` + `"/a/b"` gives
    /// `"https://host/a/b"`, not a doubled slash).
    Prefix(String),
    /// Decide per candidate. Returning `None` or an empty string leaves
    /// that occurrence untouched.
    Callback(Box<dyn FnMut(&str, &LinkContext<'_>) -> Option<String> + 'a>),
}

impl<'a> Transform<'a> {
    /// A prefix transform.
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Transform::Prefix(prefix.into())
    }

    /// A callback transform.
    pub fn callback<F>(f: F) -> Self
    where
        F: FnMut(&str, &LinkContext<'_>) -> Option<String> + 'a,
    {
        Transform::Callback(Box::new(f))
    }
}

/// The resolved, uniform rewrite function used by the attribute handlers.
pub(crate) struct Rewriter<'a> {
    transform: Transform<'a>,
}

impl<'a> Rewriter<'a> {
    pub(crate) fn new(transform: Transform<'a>) -> Self {
        Self { transform }
    }

    /// Rewrites one candidate, or returns `None` when nothing may change:
    /// the candidate is ineligible, the transform declined, or the produced
    /// value is empty or identical to the input.
    pub(crate) fn rewrite(&mut self, candidate: &str, ctx: &LinkContext<'_>) -> Option<String> {
        if !is_rewritable(candidate) {
            return None;
        }

        let produced = match &mut self.transform {
            Transform::Prefix(prefix) => {
                Some(format!("{}{}", prefix, candidate.trim_start_matches('/')))
            }
            Transform::Callback(f) => f(candidate, ctx),
        };

        match produced {
            Some(value) if !value.is_empty() && value != candidate => Some(value),
            _ => None,
        }
    }
}
