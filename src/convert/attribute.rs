// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Attribute classification and rewriting.

use super::{style, transform};
use crate::writer;
use crate::{ConversionContext, Options};

pub(crate) const CLASS_MEMBER: &str = "cls";
pub(crate) const ID_MEMBER: &str = "idAttr";
pub(crate) const STOP_COLOR_MEMBER: &str = "stopColor";

/// DSL members that don't match the SVG attribute name.
pub(crate) const RENAMED_MEMBERS: &[(&str, &str)] = &[
    (CLASS_MEMBER, "class"),
    (ID_MEMBER, "id"),
    (STOP_COLOR_MEMBER, "stop-color"),
];

/// An ordered attributes list.
///
/// Namespace-qualified attributes are stored as `prefix:name`.
#[derive(Clone, Default, Debug)]
pub struct AttributeMap {
    entries: Vec<(String, String)>,
}

impl AttributeMap {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects element's attributes in declaration order.
    pub fn from_node(node: roxmltree::Node) -> Self {
        let mut map = AttributeMap::new();
        for attr in node.attributes() {
            let name = match attr.namespace().and_then(|uri| node.lookup_prefix(uri)) {
                Some(prefix) => format!("{}:{}", prefix, attr.name()),
                None => attr.name().to_string(),
            };

            map.insert(name, attr.value().to_string());
        }

        map
    }

    /// Inserts an attribute.
    ///
    /// An existing attribute keeps its position and gets a new value.
    pub fn insert<N: Into<String>, V: Into<String>>(&mut self, name: N, value: V) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Returns an attribute value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Removes an attribute and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks that there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

/// An attribute category.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AttributeKind {
    /// `class`
    Class,
    /// `style`
    Style,
    /// `fill` referencing a paint server, like `url(#gradient)`.
    PaintServer,
    /// Any `prefix:name` attribute.
    Namespaced,
    /// `transform`
    Transform,
    /// `d`, `points`, `viewBox` and `preserveAspectRatio`.
    Geometry,
    /// `id`
    Id,
    /// `stop-color`
    StopColor,
    /// Everything else.
    Generic,
}

type Matcher = fn(&str, &str) -> bool;
type Converter = fn(&str, &str, &Options, &mut ConversionContext) -> String;

struct Rule {
    kind: AttributeKind,
    matches: Matcher,
    convert: Converter,
}

// Order matters. The first matching rule wins.
static RULES: &[Rule] = &[
    Rule {
        kind: AttributeKind::Class,
        matches: |name, _| name == "class",
        convert: convert_class,
    },
    Rule {
        kind: AttributeKind::Style,
        matches: |name, _| name == "style",
        convert: convert_style,
    },
    Rule {
        kind: AttributeKind::PaintServer,
        matches: |name, value| name == "fill" && value.trim_start().starts_with("url("),
        convert: convert_paint_server,
    },
    Rule {
        kind: AttributeKind::Namespaced,
        matches: |name, _| name.contains(':'),
        convert: convert_namespaced,
    },
    Rule {
        kind: AttributeKind::Transform,
        matches: |name, _| name == "transform",
        convert: convert_transform,
    },
    Rule {
        kind: AttributeKind::Geometry,
        matches: |name, _| matches!(name, "d" | "points" | "viewBox" | "preserveAspectRatio"),
        convert: convert_geometry,
    },
    Rule {
        kind: AttributeKind::Id,
        matches: |name, _| name == "id",
        convert: convert_id,
    },
    Rule {
        kind: AttributeKind::StopColor,
        matches: |name, _| name == "stop-color",
        convert: convert_stop_color,
    },
];

static GENERIC_RULE: Rule = Rule {
    kind: AttributeKind::Generic,
    matches: |_, _| true,
    convert: convert_generic,
};

fn find_rule(name: &str, value: &str) -> &'static Rule {
    RULES
        .iter()
        .find(|rule| (rule.matches)(name, value))
        .unwrap_or(&GENERIC_RULE)
}

/// Returns the category of an attribute.
pub fn classify(name: &str, value: &str) -> AttributeKind {
    find_rule(name, value).kind
}

/// Converts a single attribute into a statement.
pub fn convert_attribute(
    name: &str,
    value: &str,
    opt: &Options,
    ctx: &mut ConversionContext,
) -> String {
    ctx.info(format!("Processing attribute '{}'.", name));
    let rule = find_rule(name, value);
    (rule.convert)(name, value, opt, ctx)
}

/// Converts attributes into statements, preserving their order.
pub fn convert(attrs: &AttributeMap, opt: &Options, ctx: &mut ConversionContext) -> Vec<String> {
    attrs
        .iter()
        .map(|(name, value)| convert_attribute(name, value, opt, ctx))
        .collect()
}

fn convert_class(_: &str, value: &str, _: &Options, _: &mut ConversionContext) -> String {
    writer::assign_str(CLASS_MEMBER, value)
}

fn convert_style(name: &str, value: &str, _: &Options, ctx: &mut ConversionContext) -> String {
    writer::assign(name, &style::convert(value, ctx))
}

fn convert_paint_server(name: &str, value: &str, _: &Options, _: &mut ConversionContext) -> String {
    writer::assign_str(name, value)
}

fn convert_namespaced(name: &str, value: &str, _: &Options, _: &mut ConversionContext) -> String {
    format!(
        "svgAttr({}, StringAsIsCodec, None) := {}",
        writer::quote(name),
        writer::quote(value)
    )
}

fn convert_transform(name: &str, value: &str, opt: &Options, ctx: &mut ConversionContext) -> String {
    writer::assign(name, &transform::convert(value, opt, ctx))
}

fn convert_geometry(name: &str, value: &str, _: &Options, ctx: &mut ConversionContext) -> String {
    ctx.info(format!("Passing geometry attribute '{}' through as is.", name));
    writer::assign_str(name, value)
}

fn convert_id(_: &str, value: &str, _: &Options, _: &mut ConversionContext) -> String {
    writer::assign_str(ID_MEMBER, value)
}

fn convert_stop_color(_: &str, value: &str, _: &Options, _: &mut ConversionContext) -> String {
    writer::assign_str(STOP_COLOR_MEMBER, value)
}

fn convert_generic(name: &str, value: &str, _: &Options, _: &mut ConversionContext) -> String {
    writer::assign_str(name, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn convert_one(name: &str, value: &str) -> String {
        let mut ctx = ConversionContext::new();
        convert_attribute(name, value, &Options::default(), &mut ctx)
    }

    #[test]
    fn classification() {
        assert_eq!(classify("class", "a"), AttributeKind::Class);
        assert_eq!(classify("style", "fill:red"), AttributeKind::Style);
        assert_eq!(classify("fill", "url(#g)"), AttributeKind::PaintServer);
        assert_eq!(classify("fill", "red"), AttributeKind::Generic);
        assert_eq!(classify("xlink:href", "#a"), AttributeKind::Namespaced);
        assert_eq!(classify("transform", "scale(2)"), AttributeKind::Transform);
        assert_eq!(classify("d", "M0 0"), AttributeKind::Geometry);
        assert_eq!(classify("points", "0,0 1,1"), AttributeKind::Geometry);
        assert_eq!(classify("viewBox", "0 0 1 1"), AttributeKind::Geometry);
        assert_eq!(classify("preserveAspectRatio", "none"), AttributeKind::Geometry);
        assert_eq!(classify("id", "a"), AttributeKind::Id);
        assert_eq!(classify("stop-color", "red"), AttributeKind::StopColor);
        assert_eq!(classify("stroke-width", "2"), AttributeKind::Generic);
    }

    #[test]
    fn statements() {
        assert_eq!(convert_one("class", "icon big"), "svg.cls := \"icon big\"");
        assert_eq!(
            convert_one("style", "fill:red; stroke:blue"),
            "svg.style := Map(\"fill\" -> \"red\", \"stroke\" -> \"blue\")"
        );
        assert_eq!(convert_one("fill", "url(#g)"), "svg.fill := \"url(#g)\"");
        assert_eq!(
            convert_one("xlink:href", "#a"),
            "svgAttr(\"xlink:href\", StringAsIsCodec, None) := \"#a\""
        );
        assert_eq!(
            convert_one("transform", "translate(10 20)"),
            "svg.transform := \"translate(10,20)\""
        );
        assert_eq!(convert_one("d", "M0 0"), "svg.d := \"M0 0\"");
        assert_eq!(convert_one("id", "a"), "svg.idAttr := \"a\"");
        assert_eq!(convert_one("stop-color", "red"), "svg.stopColor := \"red\"");
        assert_eq!(convert_one("stroke-width", "2"), "svg.`stroke-width` := \"2\"");
        assert_eq!(convert_one("type", "matrix"), "svg.`type` := \"matrix\"");
    }

    #[test]
    fn attribute_order_is_preserved() {
        let doc = roxmltree::Document::parse(
            "<rect x='1' y='2' width='3' height='4' fill='red'/>"
        ).unwrap();
        let attrs = AttributeMap::from_node(doc.root_element());

        let mut ctx = ConversionContext::new();
        let list = convert(&attrs, &Options::default(), &mut ctx);
        assert_eq!(
            list,
            vec![
                "svg.x := \"1\"",
                "svg.y := \"2\"",
                "svg.width := \"3\"",
                "svg.height := \"4\"",
                "svg.fill := \"red\"",
            ]
        );
        assert_eq!(ctx.log().len(), 5);
    }

    #[test]
    fn geometry_is_logged_twice() {
        let mut ctx = ConversionContext::new();
        convert_attribute("d", "M0 0", &Options::default(), &mut ctx);
        assert_eq!(ctx.log().len(), 2);
    }

    #[test]
    fn namespaced_keys() {
        let doc = roxmltree::Document::parse(
            "<svg xmlns:xlink='http://www.w3.org/1999/xlink' xlink:href='#a' xml:space='preserve'/>"
        ).unwrap();
        let attrs = AttributeMap::from_node(doc.root_element());
        assert_eq!(attrs.get("xlink:href"), Some("#a"));
        assert_eq!(attrs.get("xml:space"), Some("preserve"));
    }

    #[test]
    fn map_keeps_position() {
        let mut attrs = AttributeMap::new();
        attrs.insert("a", "1");
        attrs.insert("b", "2");
        attrs.insert("a", "3");
        let list: Vec<_> = attrs.iter().collect();
        assert_eq!(list, vec![("a", "3"), ("b", "2")]);
        assert_eq!(attrs.remove("a"), Some("3".to_string()));
        assert_eq!(attrs.len(), 1);
    }
}
