use htmlnode::prelude::*;

#[test]
fn built_tree_survives_json() {
    let mut node = div([class("container")]);
    node.add([
        h1([text("Welcome!")]),
        input([id("i"), type_("text"), required()]),
    ]);

    let json = node.to_json().expect("serialize");
    let back = Node::from_json(&json).expect("deserialize");
    assert_eq!(back, node);
    assert_eq!(back.to_string(), node.to_string());
}

#[test]
fn hand_written_json_renders() {
    let json = r#"
    {"element": {
        "tag": "div",
        "children": [
            {"attribute": {"key": "class", "value": "container"}},
            {"element": {"tag": "img", "self_closing": true,
                         "attributes": [{"key": "src", "value": "/a.png"}],
                         "children": [{"text": "dropped"}]}},
            {"text": "a & b"}
        ]
    }}"#;
    let node = Node::from_json(json).expect("parse");
    assert_eq!(
        node.to_string(),
        r#"<div class="container"><img src="/a.png"/>a &amp; b</div>"#
    );
}

#[test]
fn missing_tag_is_rejected() {
    let err = Node::from_json(r#"{"element": {"children": []}}"#).unwrap_err();
    assert!(err.to_string().starts_with("Invalid node tree"));
}

#[test]
fn deep_tree_survives_json() {
    let mut node = div([text("end")]);
    for _ in 0..500 {
        node = div([node]);
    }

    let json = node.to_json().expect("serialize");
    let back = Node::from_json(&json).expect("deserialize deep tree");
    assert_eq!(back.to_string(), node.to_string());
    assert_eq!(back, node);
}

#[test]
fn trailing_input_is_rejected() {
    let err = Node::from_json(r#"{"text": "a"} {"text": "b"}"#).unwrap_err();
    assert!(err.to_string().starts_with("Invalid node tree"));
}
