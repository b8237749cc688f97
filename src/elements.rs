//! Element constructors
//!
//! Each constructor takes a mixed list of attribute and content nodes and
//! returns one element node. Attribute nodes become the element's
//! attributes, everything else its children, both in the order given.
//!
//! ```
//! use htmlnode::prelude::*;
//!
//! let link = a([href("/docs"), text("Docs")]);
//! assert_eq!(link.to_string(), r#"<a href="/docs">Docs</a>"#);
//! ```

use crate::node::{Element, Node};

/// An element with any tag name.
pub fn element<I>(tag: impl Into<String>, nodes: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    Node::Element(Element::new(tag, nodes))
}

/// A self-closing element with any tag name, rendered as `<tag .../>`.
pub fn void_element<I>(tag: impl Into<String>, nodes: I) -> Node
where
    I: IntoIterator<Item = Node>,
{
    Node::Element(Element::void(tag, nodes))
}

macro_rules! elements {
    ($($(#[$doc:meta])* $name:ident => $tag:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<I>(nodes: I) -> Node
            where
                I: IntoIterator<Item = Node>,
            {
                element($tag, nodes)
            }
        )*
    };
}

macro_rules! void_elements {
    ($($(#[$doc:meta])* $name:ident => $tag:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $name<I>(nodes: I) -> Node
            where
                I: IntoIterator<Item = Node>,
            {
                void_element($tag, nodes)
            }
        )*
    };
}

elements! {
    /// `<a>`; set the destination with [`href`](crate::attrs::href).
    a => "a";
    /// `<button>`
    button => "button";
    /// `<div>`
    div => "div";
    /// `<form>`
    form => "form";
    /// `<h1>`
    h1 => "h1";
    /// `<h2>`
    h2 => "h2";
    /// `<h3>`
    h3 => "h3";
    /// `<label>`
    label => "label";
    /// `<li>`
    li => "li";
    /// `<p>`
    p => "p";
    /// `<span>`
    span => "span";
    /// `<ul>`
    ul => "ul";
}

void_elements! {
    /// `<br/>`
    br => "br";
    /// `<hr/>`
    hr => "hr";
    /// `<img/>`
    img => "img";
    /// `<input/>`
    input => "input";
}
