// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Scala source code primitives.

use std::borrow::Cow;
use std::fmt::Write;

/// The object all SVG tags and attributes are accessed through.
pub const SVG_OBJECT: &str = "svg";

const INDENT: &str = "  ";

#[rustfmt::skip]
const KEYWORDS: &[&str] = &[
    "abstract", "case", "catch", "class", "def", "do", "else", "extends", "false", "final",
    "finally", "for", "forSome", "if", "implicit", "import", "lazy", "macro", "match", "new",
    "null", "object", "override", "package", "private", "protected", "return", "sealed",
    "super", "this", "throw", "trait", "true", "try", "type", "val", "var", "while", "with",
    "yield",
];

/// Checks that `name` can be used as a Scala identifier without backticks.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = match chars.next() {
        Some(c) => c.is_ascii_alphabetic() || c == '_',
        None => return false,
    };

    first_ok && chars.all(|c| c.is_ascii_alphanumeric() || c == '_') && !KEYWORDS.contains(&name)
}

/// Returns `name` as a Scala identifier, wrapped in backticks when required.
pub fn ident(name: &str) -> Cow<'_, str> {
    if is_identifier(name) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("`{}`", name.replace('`', "")))
    }
}

/// Returns `text` as a Scala string literal.
pub fn quote(text: &str) -> String {
    let mut s = String::with_capacity(text.len() + 2);
    s.push('"');
    for c in text.chars() {
        match c {
            '"' => s.push_str("\\\""),
            '\\' => s.push_str("\\\\"),
            '\n' => s.push_str("\\n"),
            '\r' => s.push_str("\\r"),
            '\t' => s.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(s, "\\u{:04x}", c as u32);
            }
            c => s.push(c),
        }
    }
    s.push('"');
    s
}

/// Formats a number in the shortest form, like `10` or `2.5`.
pub fn number(n: f64) -> String {
    if n == 0.0 {
        // Hides the negative zero.
        return "0".to_string();
    }

    n.to_string()
}

/// Returns `svg.<name> := <value>`.
pub fn assign(name: &str, value: &str) -> String {
    format!("{}.{} := {}", SVG_OBJECT, ident(name), value)
}

/// Returns `svg.<name> := "<value>"`.
pub fn assign_str(name: &str, value: &str) -> String {
    assign(name, &quote(value))
}

/// Joins statements with comma separators, one per line.
///
/// Empty statements are skipped.
pub fn join<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut s = String::new();
    for item in items {
        let item = item.as_ref();
        if item.is_empty() {
            continue;
        }

        if !s.is_empty() {
            s.push_str(",\n");
        }
        s.push_str(item);
    }

    s
}

/// Indents every non-empty line of `text` by `depth` levels.
pub fn indent(text: &str, depth: usize) -> String {
    let prefix = INDENT.repeat(depth);
    let mut s = String::with_capacity(text.len());
    for (i, line) in text.lines().enumerate() {
        if i != 0 {
            s.push('\n');
        }

        if !line.is_empty() {
            s.push_str(&prefix);
            s.push_str(line);
        }
    }

    s
}

/// Returns `svg.<name>(<content>)` with the content on its own, indented lines.
pub fn call(name: &str, content: &str) -> String {
    if content.is_empty() {
        format!("{}.{}()", SVG_OBJECT, ident(name))
    } else {
        format!("{}.{}(\n{}\n)", SVG_OBJECT, ident(name), indent(content, 1))
    }
}

/// Renders `text` as a sequence of `//` comments.
pub fn line_comment(text: &str) -> String {
    let mut s = String::new();
    for line in text.trim().lines() {
        if !s.is_empty() {
            s.push('\n');
        }

        let line = line.trim_end();
        if line.is_empty() {
            s.push_str("//");
        } else {
            s.push_str("// ");
            s.push_str(line);
        }
    }

    if s.is_empty() {
        s.push_str("//");
    }

    s
}
