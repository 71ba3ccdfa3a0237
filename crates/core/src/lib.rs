pub mod error;
pub mod parse;
pub mod rewrite;
pub mod tree;

pub use error::{RelinkError, Result};
pub use parse::{Document, Element};
pub use rewrite::{LinkContext, Transform, is_rewritable, rewrite_links};
pub use tree::AttrTree;
