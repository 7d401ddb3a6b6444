// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Diagnostics collected during a single file conversion.
///
/// All three logs are append-only. Each entry is also forwarded
/// to the [`log`] facade.
#[derive(Clone, Default, Debug)]
pub struct ConversionContext {
    log: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl ConversionContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an info entry.
    pub fn info<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        log::info!("{}", msg);
        self.log.push(msg);
    }

    /// Appends a warning.
    pub fn warn<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        log::warn!("{}", msg);
        self.warnings.push(msg);
    }

    /// Appends an error.
    pub fn error<S: Into<String>>(&mut self, msg: S) {
        let msg = msg.into();
        log::error!("{}", msg);
        self.errors.push(msg);
    }

    /// Returns info entries.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Returns warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consumes the context and returns `(log, warnings, errors)`.
    pub(crate) fn into_parts(self) -> (Vec<String>, Vec<String>, Vec<String>) {
        (self.log, self.warnings, self.errors)
    }
}
