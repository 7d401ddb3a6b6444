// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::path::PathBuf;
use std::process;

use pico_args::Arguments;

use svg2laminar::{ConversionResult, Options};

const HELP: &str = "\
svg2laminar converts SVG files into Laminar (Scala.js) source code.

USAGE:
  svg2laminar [OPTIONS] <in-svg> [out-dir]  # from file to a directory or stdout
  svg2laminar [OPTIONS] <in-dir> [out-dir]  # all .svg files from a directory

OPTIONS:
  -h, --help                        Prints help information
  -V, --version                     Prints version information

  --size N                          Sets the default size of generated elements
                                    [default: 48] [possible values: 1..4096 (inclusive)]
  --package NAME                    Sets the package of generated files.
                                    An empty string disables the package clause
                                    [default: icons]
  --extension EXT                   Sets the extension of generated files
                                    [default: scala]
  --strict-transforms               Reports unknown transform functions as warnings
  --verbose                         Prints conversion progress
  --quiet                           Disables warnings

ARGS:
  <in-svg>                          Input file
  <in-dir>                          Input directory
  <out-dir>                         Output directory.
                                    The code is printed to the stdout when not set
";

#[derive(Debug)]
struct Args {
    size: u32,
    package: Option<String>,
    extension: Option<String>,
    strict_transforms: bool,
    verbose: bool,
    quiet: bool,

    input: Option<PathBuf>,
    output: Option<PathBuf>,
}

fn collect_args() -> Result<Args, pico_args::Error> {
    let mut input = Arguments::from_env();

    if input.contains(["-h", "--help"]) {
        print!("{}", HELP);
        process::exit(0);
    }

    if input.contains(["-V", "--version"]) {
        println!("{}", env!("CARGO_PKG_VERSION"));
        process::exit(0);
    }

    Ok(Args {
        size: input.opt_value_from_fn("--size", parse_size)?.unwrap_or(48),
        package: input.opt_value_from_str("--package")?,
        extension: input.opt_value_from_fn("--extension", parse_extension)?,
        strict_transforms: input.contains("--strict-transforms"),
        verbose: input.contains("--verbose"),
        quiet: input.contains("--quiet"),

        input: input.opt_free_from_str()?,
        output: input.opt_free_from_str()?,
    })
}

fn parse_size(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| "invalid number")?;

    if (1..=4096).contains(&n) {
        Ok(n)
    } else {
        Err("size out of bounds".to_string())
    }
}

fn parse_extension(s: &str) -> Result<String, String> {
    let ext = s.trim_start_matches('.');
    if ext.is_empty() {
        return Err("extension cannot be empty".to_string());
    }

    Ok(ext.to_string())
}

fn main() {
    let args = match collect_args() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    };

    if !args.quiet {
        if let Ok(()) = log::set_logger(&LOGGER) {
            let level = if args.verbose {
                log::LevelFilter::Info
            } else {
                log::LevelFilter::Warn
            };
            log::set_max_level(level);
        }
    }

    match process(args) {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("Error: {}.", e);
            process::exit(1);
        }
    }
}

/// Returns `false` when any file has errors.
fn process(args: Args) -> Result<bool, String> {
    let input = match args.input {
        Some(ref v) => v.as_path(),
        None => {
            eprint!("{}", HELP);
            return Ok(false);
        }
    };

    let mut opt = Options {
        default_size: args.size,
        strict_transforms: args.strict_transforms,
        ..Options::default()
    };

    if let Some(package) = args.package {
        opt.package = package;
    }

    if let Some(extension) = args.extension {
        opt.extension = extension;
    }

    let output = args.output.as_deref();
    let results = if input.is_dir() {
        svg2laminar::convert_directory(input, output, &opt).map_err(|e| e.to_string())?
    } else {
        vec![svg2laminar::convert_file(input, output, &opt).map_err(|e| e.to_string())?]
    };

    // The generated code occupies the stdout when there is no output directory.
    let report_to_stdout = output.is_some();
    let mut ok = true;
    for result in &results {
        let report = report(result);
        if report_to_stdout {
            print!("{}", report);
        } else {
            eprint!("{}", report);
        }

        ok &= result.errors().is_empty();
    }

    if results.is_empty() {
        log::warn!("No SVG files were found in '{}'.", input.display());
    }

    if let Some(dir) = output {
        log::info!("{} file(s) saved to '{}'.", results.len(), dir.display());
    }

    Ok(ok)
}

fn report(result: &ConversionResult) -> String {
    let status = if result.validation().is_valid() {
        "valid"
    } else {
        "invalid"
    };

    let mut s = format!(
        "{}: {}, {} info, {} warning(s), {} error(s)\n",
        result.file_name(),
        status,
        result.log().len(),
        result.warnings().len(),
        result.errors().len(),
    );

    for error in result.errors() {
        s.push_str("  ");
        s.push_str(error);
        s.push('\n');
    }

    s
}

/// A simple stderr logger.
static LOGGER: SimpleLogger = SimpleLogger;
struct SimpleLogger;
impl log::Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if self.enabled(record.metadata()) {
            let target = if !record.target().is_empty() {
                record.target()
            } else {
                record.module_path().unwrap_or_default()
            };

            let line = record.line().unwrap_or(0);
            let args = record.args();

            match record.level() {
                log::Level::Error => eprintln!("Error (in {}:{}): {}", target, line, args),
                log::Level::Warn => eprintln!("Warning (in {}:{}): {}", target, line, args),
                log::Level::Info => eprintln!("Info (in {}:{}): {}", target, line, args),
                log::Level::Debug => eprintln!("Debug (in {}:{}): {}", target, line, args),
                log::Level::Trace => eprintln!("Trace (in {}:{}): {}", target, line, args),
            }
        }
    }

    fn flush(&self) {}
}
