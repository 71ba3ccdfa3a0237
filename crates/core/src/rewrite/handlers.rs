//! Attribute handlers, one per syntactic shape a URL can take inside an
//! attribute value.
//!
//! Each handler returns `Some(new_value)` only when the value actually
//! changed; anything malformed or ineligible falls through unmodified. The
//! handlers never panic on malformed input.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::transform::{LinkContext, Rewriter};

/// `url( <quote?> <url> <quote?> )` occurrences inside a style declaration
/// block. The regex crate has no backreferences, so matching quote pairs are
/// expressed as alternation branches.
static CSS_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"url\(\s*(?:"([^"]*)"|'([^']*)'|([^"')]+?))\s*\)"#).unwrap());

/// The `;url=<target>` segment of a refresh directive.
static REFRESH_URL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(;\s*url=)([^;]+)").unwrap());

/// Dispatches one attribute to the handler matching its shape.
///
/// Dispatch is on the lower-cased attribute name, plus the element tag for
/// the refresh directive. Everything else takes the generic whole-value
/// path.
pub(crate) fn rewrite_attribute(
    rewriter: &mut Rewriter<'_>,
    tag: &str,
    name: &str,
    value: &str,
) -> Option<String> {
    let ctx = LinkContext { tag, attr: name };
    match name.to_ascii_lowercase().as_str() {
        "srcset" => rewrite_srcset(rewriter, value, &ctx),
        "style" => rewrite_style(rewriter, value, &ctx),
        "content" if tag.eq_ignore_ascii_case("meta") => rewrite_refresh(rewriter, value, &ctx),
        _ => rewrite_generic(rewriter, value, &ctx),
    }
}

/// Multi-entry responsive-source lists: comma-separated `URL descriptor?`
/// entries. Descriptors ride along verbatim; entries rejoin with `", "`, so
/// reassembly itself can dirty the attribute even when no URL changed.
fn rewrite_srcset(rewriter: &mut Rewriter<'_>, value: &str, ctx: &LinkContext<'_>) -> Option<String> {
    let out = value
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            let (url, descriptor) = match entry.find(char::is_whitespace) {
                Some(idx) => entry.split_at(idx),
                None => (entry, ""),
            };
            match rewriter.rewrite(url, ctx) {
                Some(replaced) => format!("{replaced}{descriptor}"),
                None => entry.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    (out != value).then_some(out)
}

/// Inline style declaration blocks: every `url(...)` reference, preserving
/// the quote character each occurrence used. Declined occurrences stay
/// byte-identical.
fn rewrite_style(rewriter: &mut Rewriter<'_>, value: &str, ctx: &LinkContext<'_>) -> Option<String> {
    let out = CSS_URL.replace_all(value, |caps: &Captures<'_>| {
        let (quote, url) = if let Some(m) = caps.get(1) {
            ("\"", m.as_str())
        } else if let Some(m) = caps.get(2) {
            ("'", m.as_str())
        } else {
            ("", caps.get(3).map_or("", |m| m.as_str()))
        };
        match rewriter.rewrite(url, ctx) {
            Some(replaced) => format!("url({quote}{replaced}{quote})"),
            None => caps[0].to_string(),
        }
    });

    (out != value).then(|| out.into_owned())
}

/// Refresh directives: `<delay>;url=<target>`, case-insensitive on `url=`.
/// Only the target segment is replaced; the delay prefix and any trailing
/// `;`-delimited segments ride along verbatim.
fn rewrite_refresh(rewriter: &mut Rewriter<'_>, value: &str, ctx: &LinkContext<'_>) -> Option<String> {
    let out = REFRESH_URL.replace(value, |caps: &Captures<'_>| {
        match rewriter.rewrite(caps[2].trim(), ctx) {
            Some(replaced) => format!("{}{}", &caps[1], replaced),
            None => caps[0].to_string(),
        }
    });

    (out != value).then(|| out.into_owned())
}

/// Everything else: the whole trimmed value is one candidate. The original
/// value is preserved byte-for-byte when no rewrite happens; surrounding
/// whitespace is only absorbed when a rewrite is applied.
fn rewrite_generic(rewriter: &mut Rewriter<'_>, value: &str, ctx: &LinkContext<'_>) -> Option<String> {
    let out = rewriter.rewrite(value.trim(), ctx)?;
    (out != value).then_some(out)
}
