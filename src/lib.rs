//! htmlnode
//!
//! A minimal HTML node tree with an escaping renderer. Build a tree from
//! element, attribute and text constructors, then render it to any writer.
//! Text content and attribute values are HTML-escaped at render time; tag
//! names and attribute keys are written verbatim.
//!
//! # Example
//!
//! ```
//! use htmlnode::prelude::*;
//!
//! let mut page = div([class("container")]);
//! page.add([h1([text("Welcome!")])]);
//!
//! assert_eq!(
//!     page.to_string(),
//!     r#"<div class="container"><h1>Welcome!</h1></div>"#
//! );
//!
//! let mut out: Vec<u8> = Vec::new();
//! page.render(&mut out)?;
//! # Ok::<(), htmlnode::Error>(())
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod attrs;
pub mod elements;
pub mod escape;
pub mod node;
pub mod render;

pub use node::{Attribute, Element, Node};
pub use render::{FmtSink, IoSink, Renderer, Sink};

/// Everything needed to build and render trees: `use htmlnode::prelude::*`.
pub mod prelude {
    pub use crate::attrs::*;
    pub use crate::elements::*;
    pub use crate::{Attribute, Element, Node, RenderConfig, Renderer, VoidStyle};
}

/// How self-closing elements are terminated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VoidStyle {
    /// `<img src="x"/>`
    #[default]
    Compact,
    /// `<img src="x" />`
    Spaced,
    /// `<img src="x">`
    Html5,
}

impl VoidStyle {
    pub fn terminator(self) -> &'static str {
        match self {
            VoidStyle::Compact => "/>",
            VoidStyle::Spaced => " />",
            VoidStyle::Html5 => ">",
        }
    }
}

/// Configuration for a [`Renderer`]
///
/// The default produces the compact form used throughout the docs and tests:
/// void elements end in `/>` with no space before it.
///
/// # Examples
///
/// ```
/// let cfg = htmlnode::RenderConfig::default();
/// assert_eq!(cfg.void_style, htmlnode::VoidStyle::Compact);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Terminator for self-closing elements. Their children are never
    /// rendered, whatever the style.
    pub void_style: VoidStyle,
}

/// Render `node` to `w` with the default configuration.
pub fn render<W: std::io::Write + ?Sized>(node: &Node, w: &mut W) -> Result<()> {
    node.render(w)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.void_style, VoidStyle::Compact);
        assert_eq!(config.void_style.terminator(), "/>");
    }

    #[test]
    fn test_render_free_function() {
        let node = Node::Text("a&b".to_string());
        let mut out: Vec<u8> = Vec::new();
        render(&node, &mut out).unwrap();
        assert_eq!(out, b"a&amp;b");
    }
}
