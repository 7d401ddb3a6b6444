// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Namespace bindings.

use crate::writer;

const XML_NAMESPACE_NS: &str = "http://www.w3.org/XML/1998/namespace";

/// A namespace binding.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Binding<'a> {
    /// `None` for the default namespace.
    pub prefix: Option<&'a str>,
    /// Never empty.
    pub uri: &'a str,
}

impl Binding<'_> {
    /// Returns `svg.xmlns := "uri"` or `svg.xmlns_prefix := "uri"`.
    pub fn to_statement(&self) -> String {
        match self.prefix {
            Some(prefix) => writer::assign_str(&format!("xmlns_{}", prefix), self.uri),
            None => writer::assign_str("xmlns", self.uri),
        }
    }
}

/// Returns namespaces declared by the element itself.
pub fn declared<'a>(node: roxmltree::Node<'a, '_>) -> Vec<Binding<'a>> {
    let parent = node.parent_element();
    node.namespaces()
        .filter(|ns| !ns.uri().is_empty() && ns.uri() != XML_NAMESPACE_NS)
        .filter(|ns| match parent {
            Some(parent) => !parent
                .namespaces()
                .any(|p| p.name() == ns.name() && p.uri() == ns.uri()),
            None => true,
        })
        .map(|ns| Binding {
            prefix: ns.name(),
            uri: ns.uri(),
        })
        .collect()
}

/// Returns the namespace binding chain of the element.
///
/// Declarations of the element itself go first, then the ones of its parent
/// and so on up to the root. A redeclared prefix appears once per scope.
pub fn in_scope<'a>(node: roxmltree::Node<'a, '_>) -> Vec<Binding<'a>> {
    node.ancestors()
        .filter(|n| n.is_element())
        .flat_map(declared)
        .collect()
}

/// Converts all namespaces in scope of the element into statements.
///
/// Nested elements repeat the bindings they inherit.
pub fn convert(node: roxmltree::Node) -> Vec<String> {
    in_scope(node).iter().map(Binding::to_statement).collect()
}
