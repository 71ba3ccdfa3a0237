//! Minimal tree surface the rewrite engine walks.
//!
//! The engine does not depend on any concrete markup-tree implementation.
//! Anything that can enumerate its elements and get/set attribute values can
//! be rewritten, which keeps the engine testable against an in-memory tree
//! without a real rendering environment. [`Document`](crate::Document)
//! implements this trait on top of `scraper`.

/// Capability interface for a markup tree with attribute access.
///
/// Implementations must enumerate elements in document (pre-order) order,
/// with the root element first when the root itself carries attributes, and
/// must report attributes in their declared order on each element. The
/// engine never adds or removes attributes; [`set_attribute`] is only ever
/// called with the name of an attribute previously reported by
/// [`attributes`].
///
/// [`set_attribute`]: AttrTree::set_attribute
/// [`attributes`]: AttrTree::attributes
pub trait AttrTree {
    /// Opaque handle identifying one element for the duration of a pass.
    type Handle: Copy;

    /// All elements under the root in document order, root included.
    ///
    /// An empty vector means there is nothing to rewrite; the engine then
    /// returns a count of zero without touching the tree.
    fn elements(&self) -> Vec<Self::Handle>;

    /// The element's tag name. Case is preserved as stored; the engine
    /// compares tags case-insensitively.
    fn tag_name(&self, element: Self::Handle) -> String;

    /// The element's attributes as (name, value) pairs in declared order.
    fn attributes(&self, element: Self::Handle) -> Vec<(String, String)>;

    /// Replace the value of an existing attribute in place.
    fn set_attribute(&mut self, element: Self::Handle, name: &str, value: &str);
}
