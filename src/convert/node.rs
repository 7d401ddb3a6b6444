// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Recursive node conversion.

use roxmltree::NodeType;

use super::attribute::{self, AttributeMap};
use super::namespace;
use crate::writer;
use crate::{ConversionContext, Options};

/// Root attributes emitted by the document wrapper instead.
const WRAPPER_ATTRIBUTES: &[&str] = &["width", "height", "viewBox"];

/// Node conversion settings.
#[derive(Clone, Copy, Debug)]
pub struct State<'a> {
    /// Emit only the root content, without the `svg.svg(...)` call.
    pub(crate) exclude_root: bool,
    pub(crate) opt: &'a Options,
}

impl<'a> State<'a> {
    /// A state for a regular conversion.
    pub fn new(opt: &'a Options) -> Self {
        State {
            exclude_root: false,
            opt,
        }
    }

    /// A state that emits only the root element content.
    pub fn without_root(opt: &'a Options) -> Self {
        State {
            exclude_root: true,
            opt,
        }
    }
}

pub(crate) fn is_defs(node: roxmltree::Node) -> bool {
    node.is_element() && node.tag_name().name() == "defs"
}

/// Converts a node and its children.
///
/// Text nodes are handled by their parent element.
pub fn convert(node: roxmltree::Node, state: &State, ctx: &mut ConversionContext) -> String {
    match node.node_type() {
        NodeType::Element => convert_element(node, state, ctx),
        NodeType::Comment => {
            ctx.info("Converting a comment.");
            writer::line_comment(node.text().unwrap_or_default())
        }
        NodeType::PI => match node.pi() {
            Some(pi) => {
                ctx.info(format!("Converting the '{}' processing instruction.", pi.target));
                match pi.value {
                    Some(value) => writer::line_comment(&format!("{} {}", pi.target, value)),
                    None => writer::line_comment(pi.target),
                }
            }
            None => String::new(),
        },
        NodeType::Root | NodeType::Text => String::new(),
    }
}

fn convert_element(node: roxmltree::Node, state: &State, ctx: &mut ConversionContext) -> String {
    let label = node.tag_name().name();
    ctx.info(format!("Converting the '{}' element.", label));

    let is_root = node.parent_element().is_none();
    let inner_only = is_root && state.exclude_root;

    let child_state = State {
        exclude_root: false,
        ..*state
    };

    let mut children = Vec::new();
    for child in node.children() {
        if inner_only && is_defs(child) {
            continue;
        }

        children.push(convert(child, &child_state, ctx));
    }

    let mut attrs = AttributeMap::from_node(node);
    if inner_only {
        for name in WRAPPER_ATTRIBUTES {
            attrs.remove(name);
        }
    }

    let mut statements = namespace::convert(node);
    statements.extend(attribute::convert(&attrs, state.opt, ctx));

    let text = element_text(node);
    if !text.is_empty() {
        statements.push(writer::quote(&text));
    }

    let content = writer::join([writer::join(&statements), writer::join(&children)]);

    if inner_only {
        content
    } else {
        writer::call(label, &content)
    }
}

/// Returns the trimmed concatenation of element's direct text children.
fn element_text(node: roxmltree::Node) -> String {
    let mut text = String::new();
    for child in node.children().filter(|n| n.is_text()) {
        text.push_str(child.text().unwrap_or_default());
    }

    text.trim().to_string()
}
