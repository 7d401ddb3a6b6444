// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A lexical comparison of the original SVG and the generated code.
//!
//! Only names are compared. Both texts are scanned with the same patterns,
//! which understand the SVG markup as well as the Laminar notation,
//! so the result is a heuristic and not a structural comparison.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::convert::attribute::RENAMED_MEMBERS;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        static $name: Lazy<Regex> = Lazy::new(|| Regex::new($re).expect("valid pattern"));
    };
}

pattern!(XML_DECLARATION, r"<\?xml\s[^>]*\?>");
pattern!(MARKUP_ELEMENT, r"<([A-Za-z_][\w.:-]*)[\s/>]");
pattern!(MARKUP_ATTRIBUTE, r#"\b([A-Za-z_][\w.:-]*)\s*=\s*["']"#);
pattern!(DSL_ELEMENT, r"\bsvg\.(`[^`\n]+`|[A-Za-z_]\w*)\(");
pattern!(DSL_ATTRIBUTE, r"\bsvg\.(`[^`\n]+`|[A-Za-z_]\w*)\s*:=");
pattern!(DSL_NAMED_ATTRIBUTE, r#"\bsvgAttr\("([^"]+)""#);

/// A validation outcome.
#[derive(Clone, PartialEq, Debug)]
pub struct ValidationResult {
    valid: bool,
    differences: Vec<String>,
}

impl ValidationResult {
    /// A result for a conversion that produced no code.
    pub(crate) fn skipped() -> Self {
        ValidationResult {
            valid: false,
            differences: vec!["Validation was skipped because the conversion failed.".to_string()],
        }
    }

    /// Checks that all the original names are present in the generated code.
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns human-readable differences.
    pub fn differences(&self) -> &[String] {
        &self.differences
    }
}

#[derive(Default, Debug)]
struct Vocabulary {
    elements: BTreeSet<String>,
    attributes: BTreeSet<String>,
}

impl Vocabulary {
    fn scan(text: &str) -> Self {
        // Quotes inside generated string literals are escaped.
        let text = text.replace("\\\"", "\"");
        let text = XML_DECLARATION.replace_all(&text, "");
        let mut vocabulary = Vocabulary::default();

        let captured = |re: &Regex| -> Vec<String> {
            re.captures_iter(&text)
                .filter_map(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
                .collect()
        };

        for name in captured(&MARKUP_ELEMENT) {
            vocabulary.elements.insert(local_name(&name).to_string());
        }

        for name in captured(&DSL_ELEMENT) {
            vocabulary.elements.insert(name.trim_matches('`').to_string());
        }

        vocabulary.attributes.extend(captured(&MARKUP_ATTRIBUTE));
        vocabulary.attributes.extend(captured(&DSL_NAMED_ATTRIBUTE));

        for member in captured(&DSL_ATTRIBUTE) {
            vocabulary.attributes.insert(member_to_attribute(&member));
        }

        vocabulary
    }
}

fn local_name(name: &str) -> &str {
    name.rsplit(':').next().unwrap_or(name)
}

fn member_to_attribute(member: &str) -> String {
    let member = member.trim_matches('`');

    if let Some((_, name)) = RENAMED_MEMBERS.iter().find(|(m, _)| *m == member) {
        return name.to_string();
    }

    if let Some(prefix) = member.strip_prefix("xmlns_") {
        return format!("xmlns:{}", prefix);
    }

    member.to_string()
}

fn difference(
    kind: &str,
    original: &BTreeSet<String>,
    generated: &BTreeSet<String>,
) -> Option<String> {
    let missing: Vec<&str> = original
        .difference(generated)
        .map(|s| s.as_str())
        .collect();

    if missing.is_empty() {
        None
    } else {
        Some(format!("Missing {}: {}", kind, missing.join(", ")))
    }
}

/// Checks that all element and attribute names from `original` are present in `generated`.
pub fn validate(original: &str, generated: &str) -> ValidationResult {
    let original = Vocabulary::scan(original);
    let generated = Vocabulary::scan(generated);

    let differences: Vec<String> = [
        difference("elements", &original.elements, &generated.elements),
        difference("attributes", &original.attributes, &generated.attributes),
    ]
    .into_iter()
    .flatten()
    .collect();

    ValidationResult {
        valid: differences.is_empty(),
        differences,
    }
}
