//! The link-rewriting engine.
//!
//! [`rewrite_links`] walks every element under a tree root, finds every
//! place a URL-like value can appear inside attribute values, and rewrites
//! each eligible candidate through the caller's [`Transform`]. Four value
//! shapes are understood: responsive-source lists (`srcset`), inline style
//! declaration blocks (`url(...)` references), refresh directives
//! (`<meta content="5;url=...">`), and plain whole-value references
//! (everything else, `href`/`src`/`action`/`data-*`/...).
//!
//! # Example
//!
//! ```rust
//! use relink_core::{Document, Transform};
//!
//! let html = r#"<a href="/about">About</a> <a href="https://x.com/a">Out</a>"#;
//! let mut doc = Document::parse(html).unwrap();
//! let changed = doc.rewrite_links(Transform::prefix("https://mirror.example/"));
//! assert_eq!(changed, 1);
//! assert!(doc.as_string().contains("https://mirror.example/about"));
//! ```

mod classify;
mod handlers;
mod transform;

pub use classify::is_rewritable;
pub use transform::{LinkContext, Transform};

use crate::tree::AttrTree;
use transform::Rewriter;

/// Rewrites every eligible link under the tree root, in place.
///
/// Elements are visited in document (pre-order) order, root first, and
/// attributes in their declared order, so a fixed tree and transform always
/// produce the same result. Returns the number of attributes whose value
/// actually changed; an attribute with several rewritten candidates counts
/// once. A tree with no elements yields `0`.
///
/// The pass is synchronous and stateless; a callback transform that
/// inspects the tree mid-pass may observe partially-rewritten values.
pub fn rewrite_links<T: AttrTree>(tree: &mut T, transform: Transform<'_>) -> usize {
    let mut rewriter = Rewriter::new(transform);

    // Snapshot the (element, attribute) pairs before mutating, so value
    // writes cannot disturb the walk.
    let snapshot: Vec<_> = tree
        .elements()
        .into_iter()
        .map(|el| (el, tree.tag_name(el), tree.attributes(el)))
        .collect();

    let mut changed = 0;
    for (el, tag, attrs) in snapshot {
        for (name, value) in attrs {
            if let Some(out) = handlers::rewrite_attribute(&mut rewriter, &tag, &name, &value) {
                tree.set_attribute(el, &name, &out);
                changed += 1;
            }
        }
    }

    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory tree proving the engine does not depend on scraper.
    struct FakeTree {
        elements: Vec<(String, Vec<(String, String)>)>,
    }

    impl FakeTree {
        fn new(elements: &[(&str, &[(&str, &str)])]) -> Self {
            Self {
                elements: elements
                    .iter()
                    .map(|(tag, attrs)| {
                        let attrs = attrs
                            .iter()
                            .map(|(n, v)| (n.to_string(), v.to_string()))
                            .collect();
                        (tag.to_string(), attrs)
                    })
                    .collect(),
            }
        }

        fn attr(&self, element: usize, name: &str) -> &str {
            self.elements[element]
                .1
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
                .unwrap()
        }
    }

    impl AttrTree for FakeTree {
        type Handle = usize;

        fn elements(&self) -> Vec<usize> {
            (0..self.elements.len()).collect()
        }

        fn tag_name(&self, element: usize) -> String {
            self.elements[element].0.clone()
        }

        fn attributes(&self, element: usize) -> Vec<(String, String)> {
            self.elements[element].1.clone()
        }

        fn set_attribute(&mut self, element: usize, name: &str, value: &str) {
            if let Some(attr) = self.elements[element].1.iter_mut().find(|(n, _)| n == name) {
                attr.1 = value.to_string();
            }
        }
    }

    #[test]
    fn test_empty_tree_returns_zero() {
        let mut tree = FakeTree::new(&[]);
        assert_eq!(rewrite_links(&mut tree, Transform::prefix("/p/")), 0);
    }

    #[test]
    fn test_counts_attributes_not_candidates() {
        let mut tree = FakeTree::new(&[(
            "img",
            &[("srcset", "/a.png 1x, /b.png 2x, /c.png 3x")],
        )]);
        assert_eq!(rewrite_links(&mut tree, Transform::prefix("/p/")), 1);
        assert_eq!(tree.attr(0, "srcset"), "/p/a.png 1x, /p/b.png 2x, /p/c.png 3x");
    }

    #[test]
    fn test_mixed_tree_full_pass() {
        let mut tree = FakeTree::new(&[
            ("a", &[("href", "/about"), ("title", "About us")]),
            ("a", &[("href", "https://external.com")]),
            ("img", &[("src", "img/logo.png"), ("srcset", "/a.png 1x, /b.png 2x")]),
            ("div", &[("style", "background: url('/img.png')")]),
            ("meta", &[("http-equiv", "refresh"), ("content", "5;url=/next;extra")]),
        ]);

        let changed = rewrite_links(&mut tree, Transform::prefix("/p/"));

        // href, src, srcset, style, content, plus "About us" and "refresh"
        // going through the generic path as plain relative-looking values.
        assert_eq!(tree.attr(0, "href"), "/p/about");
        assert_eq!(tree.attr(1, "href"), "https://external.com");
        assert_eq!(tree.attr(2, "src"), "/p/img/logo.png");
        assert_eq!(tree.attr(2, "srcset"), "/p/a.png 1x, /p/b.png 2x");
        assert_eq!(tree.attr(3, "style"), "background: url('/p/img.png')");
        assert_eq!(tree.attr(4, "content"), "5;url=/p/next;extra");
        assert_eq!(changed, 7);
    }

    #[test]
    fn test_callback_transform_with_context() {
        let mut tree = FakeTree::new(&[
            ("a", &[("href", "/keep")]),
            ("img", &[("src", "/rewrite")]),
        ]);

        let changed = rewrite_links(
            &mut tree,
            Transform::callback(|url, ctx| {
                (ctx.tag == "img" && ctx.attr == "src").then(|| format!("/cdn{url}"))
            }),
        );

        assert_eq!(changed, 1);
        assert_eq!(tree.attr(0, "href"), "/keep");
        assert_eq!(tree.attr(1, "src"), "/cdn/rewrite");
    }

    #[test]
    fn test_idempotent_with_absolute_prefix() {
        let mut tree = FakeTree::new(&[
            ("a", &[("href", "/about")]),
            ("img", &[("srcset", "/a.png 1x, /b.png 2x")]),
            ("div", &[("style", "background: url(/img.png)")]),
            ("meta", &[("content", "5;url=/next")]),
        ]);

        let first = rewrite_links(&mut tree, Transform::prefix("https://host/"));
        assert!(first > 0);
        let second = rewrite_links(&mut tree, Transform::prefix("https://host/"));
        assert_eq!(second, 0);
    }

    #[test]
    fn test_skip_rules_leave_tree_untouched() {
        let mut tree = FakeTree::new(&[(
            "a",
            &[
                ("href", "#frag"),
                ("data-a", "https://x.com/a"),
                ("data-b", "//cdn.com/a"),
                ("data-c", "mailto:a@b.com"),
                ("data-d", "javascript:void(0)"),
            ],
        )]);

        assert_eq!(rewrite_links(&mut tree, Transform::prefix("/p/")), 0);
        assert_eq!(tree.attr(0, "href"), "#frag");
        assert_eq!(tree.attr(0, "data-d"), "javascript:void(0)");
    }

    #[test]
    fn test_declining_callback_changes_nothing() {
        let mut tree = FakeTree::new(&[("a", &[("href", "/about")])]);
        assert_eq!(rewrite_links(&mut tree, Transform::callback(|_, _| None)), 0);
        assert_eq!(tree.attr(0, "href"), "/about");
    }
}
