//! Thin helpers over `markup5ever_rcdom` nodes: attribute and class
//! lookup, element iteration and text extraction.

use markup5ever_rcdom::{Handle, NodeData};

/// Lowercase tag name, or `None` for non-element nodes.
pub fn tag_name(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.as_ref().to_string()),
        _ => None,
    }
}

pub fn attr(node: &Handle, attr_name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == attr_name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// The full class attribute, as written.
pub fn class_attr(node: &Handle) -> Option<String> {
    attr(node, "class")
}

pub fn has_class(node: &Handle, class: &str) -> bool {
    class_attr(node)
        .map(|c| c.split_whitespace().any(|part| part == class))
        .unwrap_or(false)
}

pub fn has_id(node: &Handle, id: &str) -> bool {
    attr(node, "id").as_deref() == Some(id)
}

/// Element children only, skipping text and comment nodes.
pub fn child_elements(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|c| matches!(c.data, NodeData::Element { .. }))
        .cloned()
        .collect()
}

/// Concatenated text of all descendant text nodes, whitespace-trimmed.
pub fn text_content(node: &Handle) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out.trim().to_string()
}

fn collect_text(node: &Handle, out: &mut String) {
    match &node.data {
        NodeData::Text { contents } => out.push_str(&contents.borrow()),
        _ => {
            for child in node.children.borrow().iter() {
                collect_text(child, out);
            }
        }
    }
}

/// Direct text of a node, ignoring element children.
pub fn own_text(node: &Handle) -> String {
    let mut out = String::new();
    for child in node.children.borrow().iter() {
        if let NodeData::Text { contents } = &child.data {
            out.push_str(&contents.borrow());
        }
    }
    out.trim().to_string()
}

/// Depth-first search for the first element matching a predicate.
pub fn find_descendant<F>(node: &Handle, pred: &F) -> Option<Handle>
where
    F: Fn(&Handle) -> bool,
{
    for child in child_elements(node) {
        if pred(&child) {
            return Some(child);
        }
        if let Some(found) = find_descendant(&child, pred) {
            return Some(found);
        }
    }
    None
}

/// The `<body>` element html5ever wraps every parsed fragment in.
pub fn find_body(document: &Handle) -> Option<Handle> {
    find_descendant(document, &|n| tag_name(n).as_deref() == Some("body"))
}
