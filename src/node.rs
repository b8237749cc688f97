//! The node tree: elements, attributes and text leaves
//!
//! Trees are built bottom-up by the constructors in [`crate::elements`] and
//! [`crate::attrs`], optionally extended with [`Node::add`], then rendered.
//! Attribute nodes passed alongside children are split out by [`partition`]
//! so they only ever live in an element's attribute list.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A single HTML node
///
/// - `Element`: a tag such as `<div>` with attributes and children
/// - `Attribute`: a `key="value"` pair, or a bare boolean attribute when the
///   value is empty
/// - `Text`: literal text content, escaped when rendered (never when stored)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Node {
    Element(Element),
    Attribute(Attribute),
    Text(String),
}

/// An attribute on an element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    /// Attribute name, written verbatim
    pub key: String,
    /// Attribute value; empty means a boolean attribute (`disabled`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
}

impl Attribute {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A key-only attribute such as `required`
    pub fn boolean(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: String::new(),
        }
    }

    pub fn is_boolean(&self) -> bool {
        self.value.is_empty()
    }
}

/// An HTML element
///
/// The attribute and child lists keep insertion order and are only reachable
/// through the constructors and [`Element::add`]. A self-closing element
/// renders without children or a closing tag even if children were added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ElementRepr")]
pub struct Element {
    tag: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    attributes: Vec<Attribute>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Node>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    self_closing: bool,
}

impl Element {
    /// Create an element, splitting `nodes` into attributes and children
    pub fn new<I>(tag: impl Into<String>, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        let (attributes, children) = partition(nodes);
        Self {
            tag: tag.into(),
            attributes,
            children,
            self_closing: false,
        }
    }

    /// Create a self-closing (void) element such as `<img/>`
    pub fn void<I>(tag: impl Into<String>, nodes: I) -> Self
    where
        I: IntoIterator<Item = Node>,
    {
        Self {
            self_closing: true,
            ..Self::new(tag, nodes)
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn is_self_closing(&self) -> bool {
        self.self_closing
    }

    /// Append nodes after the existing ones. Attribute nodes go to the
    /// attribute list, everything else to the children.
    pub fn add<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = Node>,
    {
        let (attributes, children) = partition(nodes);
        self.attributes.extend(attributes);
        self.children.extend(children);
        self
    }
}

impl Node {
    /// Append nodes to an element. Attribute and text nodes have nowhere to
    /// put them, so the call is ignored for those variants.
    pub fn add<I>(&mut self, nodes: I) -> &mut Self
    where
        I: IntoIterator<Item = Node>,
    {
        match self {
            Node::Element(el) => {
                el.add(nodes);
            }
            Node::Attribute(attr) => {
                warn!("add() called on attribute '{}'; ignoring", attr.key)
            }
            Node::Text(_) => warn!("add() called on a text node; ignoring"),
        }
        self
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        match self {
            Node::Element(el) => Some(el),
            _ => None,
        }
    }

    /// Load a node tree from its JSON form, e.g.
    /// `{"element": {"tag": "p", "children": [{"text": "hi"}]}}`.
    ///
    /// Attribute nodes found in a `children` list are moved to the element's
    /// attributes, as with [`Node::add`].
    ///
    /// Nesting depth is unbounded: anything `to_json` produces reads back.
    pub fn from_json(input: &str) -> Result<Node> {
        let mut json = serde_json::Deserializer::from_str(input);
        json.disable_recursion_limit();
        let node = Node::deserialize(serde_stacker::Deserializer::new(&mut json))?;
        json.end()?;
        Ok(node)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl From<Attribute> for Node {
    fn from(attr: Attribute) -> Self {
        Node::Attribute(attr)
    }
}

/// Split a mixed node list into (attributes, children), each in input order.
/// Shared by every element constructor and by `add`.
pub(crate) fn partition<I>(nodes: I) -> (Vec<Attribute>, Vec<Node>)
where
    I: IntoIterator<Item = Node>,
{
    let mut attributes = Vec::new();
    let mut children = Vec::new();
    for node in nodes {
        match node {
            Node::Attribute(attr) => attributes.push(attr),
            other => children.push(other),
        }
    }
    (attributes, children)
}

// Wire shape of an element; children are re-partitioned on the way in.
#[derive(Deserialize)]
struct ElementRepr {
    tag: String,
    #[serde(default)]
    attributes: Vec<Attribute>,
    #[serde(default)]
    children: Vec<Node>,
    #[serde(default)]
    self_closing: bool,
}

impl From<ElementRepr> for Element {
    fn from(repr: ElementRepr) -> Self {
        let mut el = Element {
            tag: repr.tag,
            attributes: repr.attributes,
            children: Vec::new(),
            self_closing: repr.self_closing,
        };
        el.add(repr.children);
        el
    }
}
