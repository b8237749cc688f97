//! Attribute and text constructors
//!
//! Nothing is escaped or validated here; values are escaped when rendered.
//! An empty value renders as a bare boolean attribute.

use crate::node::{Attribute, Node};

/// A generic attribute: `key="value"`, or just `key` when `value` is empty.
pub fn attr(key: impl Into<String>, value: impl Into<String>) -> Node {
    Node::Attribute(Attribute::new(key, value))
}

/// A text node. Content is HTML-escaped during rendering.
pub fn text(content: impl Into<String>) -> Node {
    Node::Text(content.into())
}

macro_rules! value_attrs {
    ($($(#[$doc:meta])* $name:ident => $key:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $name(value: impl Into<String>) -> Node {
                attr($key, value)
            }
        )*
    };
}

macro_rules! boolean_attrs {
    ($($(#[$doc:meta])* $name:ident => $key:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $name() -> Node {
                Node::Attribute(Attribute::boolean($key))
            }
        )*
    };
}

value_attrs! {
    /// `alt="value"`
    alt => "alt";
    /// `class="value"`
    class => "class";
    /// `href="value"`
    href => "href";
    /// `id="value"`
    id => "id";
    /// `name="value"`
    name => "name";
    /// `placeholder="value"`
    placeholder => "placeholder";
    /// `src="value"`
    src => "src";
    /// `title="value"`
    title => "title";
    /// `type="value"`, e.g. for inputs and buttons
    type_ => "type";
    /// `value="value"`
    value => "value";
}

boolean_attrs! {
    /// `checked`
    checked => "checked";
    /// `disabled`
    disabled => "disabled";
    /// `required`
    required => "required";
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_value(node: Node) -> (String, String) {
        match node {
            Node::Attribute(a) => (a.key, a.value),
            other => panic!("expected attribute, got {:?}", other),
        }
    }

    #[test]
    fn fixed_keys() {
        assert_eq!(key_value(class("c")), ("class".into(), "c".into()));
        assert_eq!(key_value(type_("text")), ("type".into(), "text".into()));
        assert_eq!(key_value(placeholder("p")), ("placeholder".into(), "p".into()));
    }

    #[test]
    fn boolean_attrs_have_no_value() {
        for node in [disabled(), required(), checked()] {
            let (_, value) = key_value(node);
            assert!(value.is_empty());
        }
    }

    #[test]
    fn values_are_stored_raw() {
        assert_eq!(key_value(href("/a?b=1&c=<2>")).1, "/a?b=1&c=<2>");
        assert_eq!(text("<b>"), Node::Text("<b>".to_string()));
    }

    #[test]
    fn empty_generic_value_is_boolean() {
        assert_eq!(attr("hidden", "").to_string(), "hidden");
        assert_eq!(attr("data-x", "1").to_string(), r#"data-x="1""#);
    }
}
