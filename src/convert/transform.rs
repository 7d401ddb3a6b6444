// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! `transform` attribute parsing.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::writer;
use crate::{ConversionContext, Options};

static FUNCTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"([A-Za-z_][A-Za-z0-9_-]*)\s*\(([^()]*)\)").expect("valid transform pattern")
});

/// A single transform function.
///
/// Unlike [`svgtypes::TransformListToken`], keeps track of omitted optional arguments.
#[derive(Clone, Copy, PartialEq, Debug)]
#[allow(missing_docs)]
pub enum ParsedTransform {
    Matrix {
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    },
    Translate {
        tx: f64,
        ty: Option<f64>,
    },
    Scale {
        sx: f64,
        sy: Option<f64>,
    },
    Rotate {
        angle: f64,
        cx: Option<f64>,
        cy: Option<f64>,
    },
    SkewX {
        angle: f64,
    },
    SkewY {
        angle: f64,
    },
}

impl ParsedTransform {
    /// A replacement for unsupported and incomplete functions.
    pub const FALLBACK: ParsedTransform = ParsedTransform::Translate { tx: 0.0, ty: None };

    /// Creates a transform from a function name and its arguments.
    ///
    /// Returns `None` for unknown functions and when arguments are missing.
    pub fn from_function(name: &str, args: &[f64]) -> Option<Self> {
        let ts = match (name, args) {
            ("matrix", &[a, b, c, d, e, f]) => ParsedTransform::Matrix { a, b, c, d, e, f },
            ("translate", &[tx, ref rest @ ..]) => ParsedTransform::Translate {
                tx,
                ty: rest.first().copied(),
            },
            ("scale", &[sx, ref rest @ ..]) => ParsedTransform::Scale {
                sx,
                sy: rest.first().copied(),
            },
            ("rotate", &[angle, ref rest @ ..]) => ParsedTransform::Rotate {
                angle,
                cx: rest.first().copied(),
                cy: rest.get(1).copied(),
            },
            ("skewX", &[angle, ..]) => ParsedTransform::SkewX { angle },
            ("skewY", &[angle, ..]) => ParsedTransform::SkewY { angle },
            _ => return None,
        };

        Some(ts)
    }

    /// Returns the SVG function name.
    pub fn name(&self) -> &'static str {
        match *self {
            ParsedTransform::Matrix { .. } => "matrix",
            ParsedTransform::Translate { .. } => "translate",
            ParsedTransform::Scale { .. } => "scale",
            ParsedTransform::Rotate { .. } => "rotate",
            ParsedTransform::SkewX { .. } => "skewX",
            ParsedTransform::SkewY { .. } => "skewY",
        }
    }

    fn args(&self) -> Vec<f64> {
        match *self {
            ParsedTransform::Matrix { a, b, c, d, e, f } => vec![a, b, c, d, e, f],
            ParsedTransform::Translate { tx, ty } => std::iter::once(tx).chain(ty).collect(),
            ParsedTransform::Scale { sx, sy } => std::iter::once(sx).chain(sy).collect(),
            ParsedTransform::Rotate { angle, cx, cy } => {
                std::iter::once(angle).chain(cx).chain(cy).collect()
            }
            ParsedTransform::SkewX { angle } | ParsedTransform::SkewY { angle } => vec![angle],
        }
    }
}

impl fmt::Display for ParsedTransform {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let args: Vec<String> = self.args().into_iter().map(writer::number).collect();
        write!(f, "{}({})", self.name(), args.join(","))
    }
}

/// A transform function as it is written in the attribute.
#[derive(Clone, PartialEq, Debug)]
pub struct Function<'a> {
    /// The whole `name(args)` text.
    pub text: &'a str,
    /// The function name, like `translate`.
    pub name: &'a str,
    /// Unparsed arguments.
    pub args: Vec<&'a str>,
}

/// Splits a `transform` attribute value into functions.
///
/// Anything between functions is ignored.
pub fn functions(text: &str) -> Vec<Function<'_>> {
    FUNCTION
        .captures_iter(text)
        .filter_map(|caps| {
            let text = caps.get(0)?.as_str();
            let name = caps.get(1)?.as_str();
            let args = caps
                .get(2)?
                .as_str()
                .split(|c: char| c == ',' || c.is_ascii_whitespace())
                .filter(|s| !s.is_empty())
                .collect();
            Some(Function { text, name, args })
        })
        .collect()
}

/// Parses a number. Returns `None` on error.
pub fn parse_number(text: &str) -> Option<f64> {
    svgtypes::Number::from_str(text.trim()).ok().map(|n| n.0)
}

/// Parses a single argument.
///
/// Compact number lists without separators, like `10-20` or `.5.5`,
/// yield several numbers.
pub fn parse_argument(text: &str) -> Option<Vec<f64>> {
    if let Some(n) = parse_number(text) {
        return Some(vec![n]);
    }

    svgtypes::NumberListParser::from(text)
        .collect::<Result<Vec<f64>, _>>()
        .ok()
        .filter(|list| !list.is_empty())
}

/// Parses a `transform` attribute value.
///
/// Malformed numbers are replaced with zero, unsupported functions with
/// [`ParsedTransform::FALLBACK`].
pub fn parse(text: &str) -> Vec<ParsedTransform> {
    functions(text)
        .iter()
        .map(|func| {
            let mut args = Vec::with_capacity(func.args.len());
            for arg in &func.args {
                args.extend(parse_argument(arg).unwrap_or_else(|| vec![0.0]));
            }

            ParsedTransform::from_function(func.name, &args).unwrap_or(ParsedTransform::FALLBACK)
        })
        .collect()
}

/// Writes a transforms list back to the SVG notation.
pub fn serialize(list: &[ParsedTransform]) -> String {
    let parts: Vec<String> = list.iter().map(|ts| ts.to_string()).collect();
    parts.join(" ")
}

/// Converts a `transform` attribute value into a Scala string literal,
/// reporting every fallback to `ctx`.
pub fn convert(text: &str, opt: &Options, ctx: &mut ConversionContext) -> String {
    let funcs = functions(text);
    if funcs.is_empty() {
        ctx.warn(format!("Transform '{}' has no functions.", text));
    }

    let mut list = Vec::with_capacity(funcs.len());
    for func in &funcs {
        let mut args = Vec::with_capacity(func.args.len());
        for arg in &func.args {
            match parse_argument(arg) {
                Some(list) => args.extend(list),
                None => {
                    ctx.warn(format!("Invalid number '{}' in '{}'. Using 0.", arg, func.text));
                    args.push(0.0);
                }
            }
        }

        let ts = match ParsedTransform::from_function(func.name, &args) {
            Some(ts) => ts,
            None => {
                let msg = format!(
                    "Unsupported transform '{}' was replaced with '{}'.",
                    func.text,
                    ParsedTransform::FALLBACK
                );

                if opt.strict_transforms {
                    ctx.warn(msg);
                } else {
                    ctx.info(msg);
                }

                ParsedTransform::FALLBACK
            }
        };

        list.push(ts);
    }

    writer::quote(&serialize(&list))
}
