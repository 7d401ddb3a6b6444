// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Inline `style` parsing.

use crate::writer;
use crate::ConversionContext;

/// A single `name: value` style declaration.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub struct Declaration<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

/// Parses an inline `style` attribute value.
///
/// A declaration must have exactly one colon. Others are reported and skipped.
pub fn parse<'a>(text: &'a str, ctx: &mut ConversionContext) -> Vec<Declaration<'a>> {
    let mut declarations = Vec::new();
    for segment in text.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let parts: Vec<&str> = segment.split(':').map(str::trim).collect();
        match parts.as_slice() {
            [name, value] => {
                declarations.push(Declaration {
                    name: *name,
                    value: *value,
                });
            }
            _ => ctx.warn(format!("Invalid style declaration: {}", segment)),
        }
    }

    declarations
}

/// Converts an inline `style` attribute value into a Scala `Map` literal.
pub fn convert(text: &str, ctx: &mut ConversionContext) -> String {
    let entries: Vec<String> = parse(text, ctx)
        .iter()
        .map(|d| format!("{} -> {}", writer::quote(d.name), writer::quote(d.value)))
        .collect();

    format!("Map({})", entries.join(", "))
}
