// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Whole document assembly.

use std::str::FromStr;

use svgtypes::{Length, LengthUnit};

use super::node::{self, State};
use crate::writer;
use crate::{ConversionContext, Error, Options};

const PLACEHOLDER_TITLE: &str = "SVG image";

/// Parses an SVG text and converts it into a Scala source file.
///
/// `file_name` is used for the object name and the header.
pub fn convert(
    text: &str,
    file_name: &str,
    opt: &Options,
    ctx: &mut ConversionContext,
) -> Result<String, Error> {
    let xml_opt = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..Default::default()
    };

    let doc = roxmltree::Document::parse_with_options(text, xml_opt)?;
    let root = doc.root_element();

    let view_box = view_box(root, ctx);

    let state = State::new(opt);

    // Comments and processing instructions outside the root element.
    let prolog: Vec<String> = doc
        .root()
        .children()
        .filter(|n| !n.is_element())
        .map(|n| node::convert(n, &state, ctx))
        .collect();

    let defs: Vec<String> = root
        .children()
        .filter(|n| node::is_defs(*n))
        .map(|n| node::convert(n, &state, ctx))
        .collect();

    let body = node::convert(root, &State::without_root(opt), ctx);

    let mut wrapper = vec![
        writer::assign("width", "size.toString"),
        writer::assign("height", "size.toString"),
    ];
    if let Some(view_box) = view_box {
        wrapper.push(writer::assign_str("viewBox", &view_box));
    }
    wrapper.extend(prolog);
    wrapper.extend(defs);
    wrapper.push(body);

    let mut s = String::new();
    s.push_str(&header(file_name, opt));
    s.push('\n');
    s.push_str(&doc_comment(&doc));
    s.push('\n');
    s.push_str(&format!("object {} {{\n", writer::ident(&module_name(file_name))));
    s.push_str(&format!(
        "  def apply(size: Int = {}): SvgElement = {}\n",
        opt.default_size,
        writer::indent(&writer::call("svg", &writer::join(&wrapper)), 1).trim_start()
    ));
    s.push_str("}\n");

    Ok(s)
}

fn header(file_name: &str, opt: &Options) -> String {
    let mut s = format!("// Generated by svg2laminar from {}.\n", file_name);
    if !opt.package.is_empty() {
        s.push_str(&format!("package {}\n", opt.package));
    }
    s.push('\n');
    s.push_str("import com.raquo.laminar.api.L._\n");
    s.push_str("import com.raquo.laminar.codecs.StringAsIsCodec\n");
    s
}

/// Returns the object name for an input file: its base name with the first letter upper-cased.
pub fn module_name(file_name: &str) -> String {
    let stem = std::path::Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name);

    let mut chars = stem.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Returns the root `viewBox`, or builds one from `width` and `height`.
pub fn view_box(root: roxmltree::Node, ctx: &mut ConversionContext) -> Option<String> {
    if let Some(view_box) = root.attribute("viewBox") {
        return Some(view_box.trim().to_string());
    }

    let size = root
        .attribute("width")
        .zip(root.attribute("height"))
        .and_then(|(w, h)| Some((parse_size(w)?, parse_size(h)?)));

    match size {
        Some((w, h)) => {
            ctx.info("The viewBox was built from the width and height attributes.");
            Some(format!("0 0 {} {}", writer::number(w), writer::number(h)))
        }
        None => {
            ctx.warn("The root element has neither a viewBox nor a valid width and height.");
            None
        }
    }
}

fn parse_size(text: &str) -> Option<f64> {
    let length = Length::from_str(text).ok()?;
    if length.unit == LengthUnit::Percent {
        return None;
    }

    Some(length.number)
}

/// Builds a Scaladoc comment from the first `title` and `desc` elements.
fn doc_comment(doc: &roxmltree::Document) -> String {
    let find_text = |name: &str| {
        doc.descendants()
            .find(|n| n.is_element() && n.tag_name().name() == name)
            .map(|n| {
                let text: String = n
                    .descendants()
                    .filter(|n| n.is_text())
                    .filter_map(|n| n.text())
                    .collect();
                // Must not close the comment.
                text.trim().replace("*/", "* /")
            })
            .filter(|s| !s.is_empty())
    };

    let title = find_text("title").unwrap_or_else(|| PLACEHOLDER_TITLE.to_string());

    let mut s = String::from("/**\n");
    push_comment_lines(&mut s, &title);
    if let Some(desc) = find_text("desc") {
        s.push_str(" *\n");
        push_comment_lines(&mut s, &desc);
    }
    s.push_str(" */\n");
    s
}

fn push_comment_lines(s: &mut String, text: &str) {
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            s.push_str(" *\n");
        } else {
            s.push_str(" * ");
            s.push_str(line);
            s.push('\n');
        }
    }
}
