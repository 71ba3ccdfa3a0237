//! HTML parsing and DOM access.
//!
//! This module provides the [`Document`] and [`Element`] types for parsing
//! HTML, querying it with CSS selectors, and rewriting link attributes in
//! place. [`Document`] implements [`AttrTree`], so it plugs directly into
//! [`rewrite_links`](crate::rewrite_links).
//!
//! # Example
//!
//! ```rust
//! use relink_core::{Document, Transform};
//!
//! let html = r#"<body><a href="/about">About</a></body>"#;
//! let mut doc = Document::parse(html).unwrap();
//! let changed = doc.rewrite_links(Transform::prefix("https://mirror.example/"));
//! assert_eq!(changed, 1);
//! ```

use ego_tree::NodeId;
use scraper::{Html, Node, Selector};

use crate::tree::AttrTree;
use crate::{RelinkError, Result, Transform};

/// Represents a parsed HTML document or fragment.
///
/// A Document wraps an HTML page and provides methods for querying elements
/// using CSS selectors, rewriting link attributes, and serializing back to
/// HTML.
///
/// # Example
///
/// ```rust
/// use relink_core::Document;
///
/// let html = "<html><head><title>Test</title></head><body><p>Hello</p></body></html>";
/// let doc = Document::parse(html).unwrap();
/// assert_eq!(doc.title(), Some("Test".to_string()));
/// ```
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a full HTML document from a string.
    ///
    /// Parsing is lenient: malformed markup is repaired rather than
    /// rejected, so this only fails in pathological cases.
    pub fn parse(html: &str) -> Result<Self> {
        Ok(Self { html: Html::parse_document(html) })
    }

    /// Parses an HTML fragment (for example a page body retrieved on its
    /// own, without the surrounding document shell).
    pub fn parse_fragment(html: &str) -> Result<Self> {
        Ok(Self { html: Html::parse_fragment(html) })
    }

    /// Gets the raw HTML representation.
    ///
    /// Returns a reference to the underlying `scraper::Html` instance.
    pub fn html(&self) -> &Html {
        &self.html
    }

    /// Gets the entire document serialized back to an HTML string.
    ///
    /// Attribute values rewritten through [`rewrite_links`] are reflected
    /// in the output.
    ///
    /// [`rewrite_links`]: Document::rewrite_links
    pub fn as_string(&self) -> String {
        self.html.html()
    }

    /// Rewrites every eligible link attribute in the document, in place.
    ///
    /// This is [`rewrite_links`](crate::rewrite_links) applied to this
    /// document; it returns the number of attributes whose value changed.
    pub fn rewrite_links(&mut self, transform: Transform<'_>) -> usize {
        crate::rewrite::rewrite_links(self, transform)
    }

    /// Selects elements using a CSS selector.
    ///
    /// # Errors
    ///
    /// Returns [`RelinkError::HtmlParseError`] if the selector is invalid.
    ///
    /// # Example
    ///
    /// ```rust
    /// use relink_core::Document;
    ///
    /// let html = r#"<p class="content">First</p><p class="content">Second</p>"#;
    /// let doc = Document::parse(html).unwrap();
    /// let elements = doc.select("p.content").unwrap();
    /// assert_eq!(elements.len(), 2);
    /// ```
    pub fn select(&'_ self, selector: &str) -> Result<Vec<Element<'_>>> {
        let sel = Selector::parse(selector)
            .map_err(|e| RelinkError::HtmlParseError(format!("Invalid selector: {}", e)))?;

        Ok(self.html.select(&sel).map(|el| Element { element: el }).collect())
    }

    /// Gets the title of the document.
    ///
    /// Returns the content of the `<title>` element if present.
    pub fn title(&self) -> Option<String> {
        let selector = Selector::parse("title").ok()?;
        self.html
            .select(&selector)
            .next()
            .map(|el| el.text().collect::<String>())
    }
}

impl AttrTree for Document {
    type Handle = NodeId;

    fn elements(&self) -> Vec<NodeId> {
        self.html
            .tree
            .root()
            .descendants()
            .filter(|node| node.value().is_element())
            .map(|node| node.id())
            .collect()
    }

    fn tag_name(&self, element: NodeId) -> String {
        match self.html.tree.get(element).map(|node| node.value()) {
            Some(Node::Element(el)) => el.name().to_lowercase(),
            _ => String::new(),
        }
    }

    fn attributes(&self, element: NodeId) -> Vec<(String, String)> {
        match self.html.tree.get(element).map(|node| node.value()) {
            Some(Node::Element(el)) => el
                .attrs
                .iter()
                .map(|(name, value)| (name.local.to_string(), value.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        if let Some(mut node) = self.html.tree.get_mut(element)
            && let Node::Element(el) = node.value()
        {
            for (qual, stored) in el.attrs.iter_mut() {
                if &*qual.local == name {
                    *stored = value.into();
                }
            }
        }
    }
}

/// A wrapper around scraper's ElementRef for read access to query results.
///
/// # Example
///
/// ```rust
/// use relink_core::Document;
///
/// let html = r#"<a href="https://example.com">Link text</a>"#;
/// let doc = Document::parse(html).unwrap();
/// let link = &doc.select("a").unwrap()[0];
///
/// assert_eq!(link.text(), "Link text");
/// assert_eq!(link.attr("href"), Some("https://example.com"));
/// ```
#[derive(Clone, Debug)]
pub struct Element<'a> {
    element: scraper::ElementRef<'a>,
}

impl<'a> Element<'a> {
    /// Gets the text content of this element.
    ///
    /// Returns the concatenation of all text nodes within this element.
    pub fn text(&self) -> String {
        self.element.text().collect()
    }

    /// Gets the value of an attribute.
    ///
    /// Returns `None` if the attribute is not present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.element.value().attr(name)
    }

    /// Gets the tag name of this element.
    ///
    /// Returns the lowercase tag name (e.g., "div", "a", "span").
    pub fn tag_name(&self) -> String {
        self.element.value().name().to_lowercase()
    }
}
