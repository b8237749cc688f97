//! Rendering node trees to an output sink
//!
//! The renderer is a depth-first, pre-order walk: open tag, attributes in
//! insertion order, `>` (or the void terminator), children in insertion
//! order, close tag. Every piece is written straight to the sink; the first
//! failed write aborts the walk and is returned unchanged.

use std::fmt;
use std::io;

use log::debug;

use crate::escape::escape_into;
use crate::node::{Attribute, Element, Node};
use crate::{RenderConfig, Result};

/// An append-only text destination.
pub trait Sink {
    fn put(&mut self, s: &str) -> io::Result<()>;
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn put(&mut self, s: &str) -> io::Result<()> {
        (**self).put(s)
    }
}

/// Sink over any [`io::Write`] (files, sockets, `Vec<u8>`, stdout).
///
/// Pieces are written as they are produced; wrap the writer in a
/// `BufWriter` when it is unbuffered.
#[derive(Debug)]
pub struct IoSink<W> {
    inner: W,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn put(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_all(s.as_bytes())
    }
}

/// Sink over any [`fmt::Write`] (`String`, `fmt::Formatter`).
///
/// A `fmt::Error` surfaces as an `io::Error` of kind `Other`.
#[derive(Debug)]
pub struct FmtSink<W> {
    inner: W,
}

impl<W: fmt::Write> FmtSink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> Sink for FmtSink<W> {
    fn put(&mut self, s: &str) -> io::Result<()> {
        self.inner.write_str(s).map_err(io::Error::other)
    }
}

/// Serializes nodes using a [`RenderConfig`].
///
/// The renderer only reads the tree, so one tree can be rendered any number
/// of times (and from several threads at once while nobody mutates it).
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `node` to a byte writer.
    pub fn render<W: io::Write + ?Sized>(&self, node: &Node, w: &mut W) -> Result<()> {
        self.render_to_sink(node, &mut IoSink::new(w))
    }

    /// Render `node` to a text writer.
    pub fn render_fmt<W: fmt::Write + ?Sized>(&self, node: &Node, w: &mut W) -> Result<()> {
        self.render_to_sink(node, &mut FmtSink::new(w))
    }

    pub fn render_to_sink<S: Sink + ?Sized>(&self, node: &Node, sink: &mut S) -> Result<()> {
        self.node(node, sink)?;
        Ok(())
    }

    pub fn render_to_string(&self, node: &Node) -> String {
        let mut out = String::new();
        // pushing to a String never fails
        let _ = self.render_fmt(node, &mut out);
        out
    }

    fn node<S: Sink + ?Sized>(&self, node: &Node, sink: &mut S) -> io::Result<()> {
        match node {
            Node::Element(el) => self.element(el, sink),
            Node::Attribute(attr) => self.attribute(attr, sink),
            Node::Text(text) => escape_into(sink, text),
        }
    }

    // <tag [attrs]>[children]</tag>, or <tag [attrs]/> when self-closing
    fn element<S: Sink + ?Sized>(&self, el: &Element, sink: &mut S) -> io::Result<()> {
        sink.put("<")?;
        sink.put(el.tag())?;
        for attr in el.attributes() {
            sink.put(" ")?;
            self.attribute(attr, sink)?;
        }

        if el.is_self_closing() {
            if !el.children().is_empty() {
                debug!(
                    "<{}> is self-closing; dropping {} child node(s)",
                    el.tag(),
                    el.children().len()
                );
            }
            return sink.put(self.config.void_style.terminator());
        }

        sink.put(">")?;
        for child in el.children() {
            self.node(child, sink)?;
        }
        sink.put("</")?;
        sink.put(el.tag())?;
        sink.put(">")
    }

    // key[="value"]; an empty value leaves a bare boolean attribute
    fn attribute<S: Sink + ?Sized>(&self, attr: &Attribute, sink: &mut S) -> io::Result<()> {
        sink.put(&attr.key)?;
        if !attr.value.is_empty() {
            sink.put("=\"")?;
            escape_into(sink, &attr.value)?;
            sink.put("\"")?;
        }
        Ok(())
    }
}

impl Node {
    /// Render this node with the default configuration.
    pub fn render<W: io::Write + ?Sized>(&self, w: &mut W) -> Result<()> {
        Renderer::default().render(self, w)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Renderer::default()
            .render_fmt(self, f)
            .map_err(|_| fmt::Error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Element;
    use crate::VoidStyle;

    /// Accepts `budget` writes, then fails every write after that.
    struct FailingSink {
        budget: usize,
        written: String,
    }

    impl Sink for FailingSink {
        fn put(&mut self, s: &str) -> io::Result<()> {
            if self.budget == 0 {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
            }
            self.budget -= 1;
            self.written.push_str(s);
            Ok(())
        }
    }

    fn text(s: &str) -> Node {
        Node::Text(s.to_string())
    }

    fn sample() -> Node {
        Node::Element(Element::new(
            "div",
            vec![
                Node::Attribute(Attribute::new("class", "c")),
                Node::Element(Element::new("span", vec![text("a")])),
                text("b"),
            ],
        ))
    }

    #[test]
    fn first_failure_aborts_with_partial_output() {
        let mut sink = FailingSink {
            budget: 3,
            written: String::new(),
        };
        let err = Renderer::default()
            .render_to_sink(&sample(), &mut sink)
            .unwrap_err();

        assert_eq!(sink.written, "<div ");
        let source = err.io_error().expect("sink error");
        assert_eq!(source.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn io_and_fmt_outputs_agree() {
        let node = sample();
        let mut bytes: Vec<u8> = Vec::new();
        node.render(&mut bytes).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), node.to_string());
        assert_eq!(node.to_string(), r#"<div class="c"><span>a</span>b</div>"#);
    }

    #[test]
    fn attribute_root_renders_bare() {
        let attr = Node::Attribute(Attribute::new("title", "a<b"));
        assert_eq!(attr.to_string(), r#"title="a&lt;b""#);
        assert_eq!(Node::Attribute(Attribute::boolean("hidden")).to_string(), "hidden");
    }

    #[test]
    fn void_styles() {
        let img = Node::Element(Element::void(
            "img",
            vec![Node::Attribute(Attribute::new("src", "/a.png"))],
        ));
        let render = |style| {
            Renderer::new(RenderConfig { void_style: style }).render_to_string(&img)
        };
        assert_eq!(render(VoidStyle::Compact), r#"<img src="/a.png"/>"#);
        assert_eq!(render(VoidStyle::Spaced), r#"<img src="/a.png" />"#);
        assert_eq!(render(VoidStyle::Html5), r#"<img src="/a.png">"#);
    }

    #[test]
    fn self_closing_drops_children() {
        let mut el = Element::void("input", Vec::new());
        el.add(vec![text("ignored"), Node::Element(Element::new("b", Vec::new()))]);
        assert_eq!(Node::Element(el).to_string(), "<input/>");
    }
}
