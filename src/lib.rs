// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/*!
`svg2laminar` converts SVG files into [Laminar](https://laminar.dev) source code.

Every SVG element becomes a `svg.<tag>(...)` call and every attribute
a `svg.<name> := "<value>"` statement:

```text
<svg viewBox="0 0 24 24">          object Icon {
    <path d="M0 0"/>          =>     def apply(size: Int = 48): SvgElement = svg.svg(
</svg>                                 svg.width := size.toString,
                                       svg.height := size.toString,
                                       svg.viewBox := "0 0 24 24",
                                       svg.path(
                                         svg.d := "M0 0"
                                       )
                                     )
                                   }
```

Comments, processing instructions and text are preserved.
`style` and `transform` attributes are parsed and rewritten.

After the conversion, the generated code is compared with the original SVG
using a simple lexical heuristic: all element and attribute names from
the SVG must be present in the code. See [`validate`] for details.

All the diagnostics are collected into a [`ConversionContext`]
and end up in a [`ConversionResult`].
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

use std::io::Write;
use std::path::Path;

mod context;
pub mod convert;
mod error;
mod options;
pub mod validate;
pub mod writer;

pub use context::ConversionContext;
pub use error::Error;
pub use options::Options;
pub use validate::ValidationResult;

/// A single file conversion outcome.
#[derive(Clone, Debug)]
pub struct ConversionResult {
    file_name: String,
    code: String,
    original: String,
    validation: ValidationResult,
    log: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
}

impl ConversionResult {
    fn new(
        file_name: String,
        code: String,
        original: String,
        validation: ValidationResult,
        ctx: ConversionContext,
    ) -> Self {
        let (log, warnings, errors) = ctx.into_parts();
        ConversionResult {
            file_name,
            code,
            original,
            validation,
            log,
            warnings,
            errors,
        }
    }

    fn failed(file_name: String, ctx: ConversionContext) -> Self {
        Self::new(
            file_name,
            String::new(),
            String::new(),
            ValidationResult::skipped(),
            ctx,
        )
    }

    /// Returns the input file name.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the generated code.
    ///
    /// Empty when the conversion has failed.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the original SVG text.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Returns the validation result.
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Returns info messages.
    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// Returns warnings, including validation differences.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Checks that the conversion has no errors and passed the validation.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty() && self.validation.is_valid()
    }
}

/// Converts an SVG text into Scala source code.
///
/// `file_name` is the name of the original file, like `icon.svg`.
/// The generated object is named after it.
pub fn convert_str(
    text: &str,
    file_name: &str,
    opt: &Options,
    ctx: &mut ConversionContext,
) -> Result<String, Error> {
    convert::document::convert(text, file_name, opt, ctx)
}

/// Converts an SVG file.
///
/// The generated code is saved into the `output` directory
/// or printed to the stdout when `output` is `None`.
///
/// `input` must be a readable file and `output` an existing writable directory.
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    opt: &Options,
) -> Result<ConversionResult, Error> {
    let mut ctx = ConversionContext::new();
    convert_path(input, output, opt, &mut ctx)
}

/// Converts all `.svg` files in a directory.
///
/// Files are processed in the directory listing order.
/// Unlike [`convert_file`], a failed file doesn't stop the conversion
/// and produces a result with errors instead.
pub fn convert_directory(
    input: &Path,
    output: Option<&Path>,
    opt: &Options,
) -> Result<Vec<ConversionResult>, Error> {
    if !input.is_dir() {
        return Err(Error::NotADirectory(input.to_path_buf()));
    }

    let mut results = Vec::new();
    for entry in std::fs::read_dir(input)? {
        let path = entry?.path();
        if !is_svg_file_name(&path) {
            continue;
        }

        let mut ctx = ConversionContext::new();
        let result = match convert_path(&path, output, opt, &mut ctx) {
            Ok(result) => result,
            Err(e) => {
                ctx.error(e.to_string());
                ConversionResult::failed(file_name(&path), ctx)
            }
        };

        results.push(result);
    }

    Ok(results)
}

fn convert_path(
    input: &Path,
    output: Option<&Path>,
    opt: &Options,
    ctx: &mut ConversionContext,
) -> Result<ConversionResult, Error> {
    if !input.is_file() {
        return Err(Error::NotAFile(input.to_path_buf()));
    }

    if let Some(dir) = output {
        check_output_dir(dir)?;
    }

    let file_name = file_name(input);
    log::info!("Converting '{}'.", input.display());

    let data = std::fs::read(input).map_err(|_| Error::NotAFile(input.to_path_buf()))?;
    let original = decode(&data)?;
    let code = convert_str(&original, &file_name, opt, ctx)?;

    match output {
        Some(dir) => {
            let stem = input
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or(&file_name);
            let path = dir.join(opt.output_file_name(stem));
            match std::fs::write(&path, &code) {
                Ok(()) => ctx.info(format!("Saved to '{}'.", path.display())),
                Err(e) => ctx.error(format!("Failed to write '{}' cause {}.", path.display(), e)),
            }
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            if let Err(e) = handle.write_all(code.as_bytes()) {
                ctx.error(format!("Failed to write to the stdout cause {}.", e));
            }
        }
    }

    let validation = validate::validate(&original, &code);
    for diff in validation.differences() {
        ctx.warn(diff.clone());
    }

    Ok(ConversionResult::new(
        file_name,
        code,
        original,
        validation,
        std::mem::take(ctx),
    ))
}

fn check_output_dir(dir: &Path) -> Result<(), Error> {
    match std::fs::metadata(dir) {
        Ok(ref meta) if meta.is_dir() && !meta.permissions().readonly() => Ok(()),
        _ => Err(Error::OutputNotWritable(dir.to_path_buf())),
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn is_svg_file_name(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase().ends_with(".svg"))
        .unwrap_or(false)
}

/// Decodes SVG or SVGZ data into a string.
fn decode(data: &[u8]) -> Result<String, Error> {
    if data.starts_with(&[0x1f, 0x8b]) {
        let data = decompress_svgz(data)?;
        String::from_utf8(data).map_err(|_| Error::NotAnUtf8Str)
    } else {
        std::str::from_utf8(data)
            .map(|s| s.to_string())
            .map_err(|_| Error::NotAnUtf8Str)
    }
}

/// Decompresses an SVGZ file.
pub fn decompress_svgz(data: &[u8]) -> Result<Vec<u8>, Error> {
    use std::io::Read;

    let mut decoder = flate2::read::GzDecoder::new(data);
    let mut decoded = Vec::with_capacity(data.len() * 2);
    decoder
        .read_to_end(&mut decoded)
        .map_err(|_| Error::MalformedGZip)?;
    Ok(decoded)
}
