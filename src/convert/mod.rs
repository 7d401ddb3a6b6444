// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! SVG to Laminar conversion.

pub mod attribute;
pub mod document;
pub mod namespace;
pub mod node;
pub mod style;
pub mod transform;

pub use attribute::{AttributeKind, AttributeMap};
pub use node::State;
pub use transform::ParsedTransform;
