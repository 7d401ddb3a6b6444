// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Conversion options.
#[derive(Clone, Debug)]
pub struct Options {
    /// The default value of the `size` parameter of the generated factory.
    ///
    /// Default: 48
    pub default_size: u32,

    /// The package clause of the generated files.
    ///
    /// Default: `icons`
    pub package: String,

    /// The extension of the generated files, without a leading dot.
    ///
    /// Default: `scala`
    pub extension: String,

    /// Report unsupported or incomplete transform functions as warnings.
    ///
    /// Such functions are always replaced with `translate(0)`.
    /// By default, the replacement is only mentioned in the log.
    ///
    /// Default: false
    pub strict_transforms: bool,
}

impl Default for Options {
    fn default() -> Options {
        Options {
            default_size: 48,
            package: "icons".to_string(),
            extension: "scala".to_string(),
            strict_transforms: false,
        }
    }
}

impl Options {
    /// Returns the name of the file generated for `stem`.
    pub fn output_file_name(&self, stem: &str) -> String {
        if self.extension.is_empty() {
            stem.to_string()
        } else {
            format!("{}.{}", stem, self.extension)
        }
    }
}
