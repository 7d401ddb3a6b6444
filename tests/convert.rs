use std::io::Write;

use svg2laminar::{ConversionContext, Error, Options};

fn convert(text: &str) -> (String, ConversionContext) {
    let mut ctx = ConversionContext::new();
    let code = svg2laminar::convert_str(text, "icon.svg", &Options::default(), &mut ctx).unwrap();
    (code, ctx)
}

#[test]
fn simple_icon() {
    let svg = "<svg viewBox='0 0 24 24'><path d='M0 0'/></svg>";
    let (code, ctx) = convert(svg);

    assert_eq!(
        code,
        "\
// Generated by svg2laminar from icon.svg.
package icons

import com.raquo.laminar.api.L._
import com.raquo.laminar.codecs.StringAsIsCodec

/**
 * SVG image
 */

object Icon {
  def apply(size: Int = 48): SvgElement = svg.svg(
    svg.width := size.toString,
    svg.height := size.toString,
    svg.viewBox := \"0 0 24 24\",
    svg.path(
      svg.d := \"M0 0\"
    )
  )
}
"
    );

    assert!(ctx.errors().is_empty());
    assert!(ctx.warnings().is_empty());
    assert!(svg2laminar::validate::validate(svg, &code).is_valid());
}

#[test]
fn view_box_from_size() {
    let (code, ctx) = convert("<svg width='100' height='50'><rect/></svg>");
    assert!(code.contains("svg.viewBox := \"0 0 100 50\""));
    assert!(!code.contains("svg.width := \"100\""));
    assert!(ctx.warnings().is_empty());
}

#[test]
fn no_view_box() {
    let (code, ctx) = convert("<svg><rect/></svg>");
    assert!(!code.contains("viewBox"));
    assert_eq!(ctx.warnings().len(), 1);
    assert!(ctx.errors().is_empty());
}

#[test]
fn defs_are_emitted_once() {
    let svg = "
    <svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 10 10'>
        <defs>
            <linearGradient id='lg1'>
                <stop offset='0' stop-color='red'/>
            </linearGradient>
        </defs>
        <rect fill='url(#lg1)' width='10' height='10'/>
    </svg>
    ";

    let (code, ctx) = convert(svg);
    assert_eq!(code.matches("svg.defs(").count(), 1);
    assert!(code.contains("svg.idAttr := \"lg1\""));
    assert!(code.contains("svg.stopColor := \"red\""));
    assert!(code.contains("svg.fill := \"url(#lg1)\""));
    assert!(code.contains("svg.xmlns := \"http://www.w3.org/2000/svg\""));

    // The defs go before the content.
    let defs = code.find("svg.defs(").unwrap();
    let rect = code.find("svg.rect(").unwrap();
    assert!(defs < rect);

    assert!(ctx.errors().is_empty());
    assert!(svg2laminar::validate::validate(svg, &code).is_valid());
}

#[test]
fn title_and_comments() {
    let svg = "<?xml version='1.0' encoding='UTF-8'?>
<!-- Created by hand -->
<svg viewBox='0 0 1 1'>
    <title>Home</title>
    <!-- roof -->
    <path d='M0 0'/>
</svg>";

    let (code, _) = convert(svg);
    assert!(code.contains("/**\n * Home\n */"));
    assert!(code.contains("// Created by hand"));
    assert!(code.contains("// roof"));
    assert!(code.contains("svg.title(\n      \"Home\"\n    )"));
    assert!(!code.contains("<?xml"));
    assert!(svg2laminar::validate::validate(svg, &code).is_valid());
}

#[test]
fn style_and_transform() {
    let svg = "<svg viewBox='0 0 1 1'>
    <g style='fill: red; stroke:blue' transform='translate(10, 20) rotate(45)'/>
</svg>";

    let (code, ctx) = convert(svg);
    assert!(code.contains("svg.style := Map(\"fill\" -> \"red\", \"stroke\" -> \"blue\")"));
    assert!(code.contains("svg.transform := \"translate(10,20) rotate(45)\""));
    assert!(ctx.warnings().is_empty());
}

#[test]
fn namespaced_attributes() {
    let svg = "<svg xmlns='http://www.w3.org/2000/svg' \
                    xmlns:xlink='http://www.w3.org/1999/xlink' viewBox='0 0 1 1'>
    <use xlink:href='#a'/>
</svg>";

    let (code, _) = convert(svg);
    assert!(code.contains("svg.xmlns_xlink := \"http://www.w3.org/1999/xlink\""));
    assert!(code.contains("svgAttr(\"xlink:href\", StringAsIsCodec, None) := \"#a\""));
    assert!(svg2laminar::validate::validate(svg, &code).is_valid());
}

#[test]
fn inherited_namespaces() {
    let svg = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 1 1'><g><rect/></g></svg>";
    let (code, _) = convert(svg);

    assert!(code.contains(
        "\
    svg.g(
      svg.xmlns := \"http://www.w3.org/2000/svg\",
      svg.rect(
        svg.xmlns := \"http://www.w3.org/2000/svg\"
      )
    )"
    ));

    // The root, `g` and `rect`.
    assert_eq!(code.matches("svg.xmlns := ").count(), 3);
}

#[test]
fn custom_options() {
    let opt = Options {
        default_size: 24,
        package: String::new(),
        ..Options::default()
    };

    let mut ctx = ConversionContext::new();
    let code = svg2laminar::convert_str("<svg/>", "arrow-left.svg", &opt, &mut ctx).unwrap();
    assert!(code.contains("def apply(size: Int = 24)"));
    assert!(!code.contains("package"));
    assert!(code.contains("object `Arrow-left` {"));
}

#[test]
fn malformed_xml() {
    let mut ctx = ConversionContext::new();
    let res = svg2laminar::convert_str("<svg><g></svg>", "a.svg", &Options::default(), &mut ctx);
    assert!(matches!(res, Err(Error::ParsingFailed(_))));
}

#[test]
fn convert_file_to_directory() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    let input = input_dir.path().join("icon.svg");
    std::fs::write(&input, "<svg viewBox='0 0 24 24'><path d='M0 0'/></svg>").unwrap();

    let res = svg2laminar::convert_file(&input, Some(output_dir.path()), &Options::default())
        .unwrap();

    assert!(res.is_ok(), "{:?}", res);
    assert_eq!(res.file_name(), "icon.svg");
    assert!(res.code().contains("object Icon {"));
    assert!(res.original().contains("<path"));

    let saved = std::fs::read_to_string(output_dir.path().join("icon.scala")).unwrap();
    assert_eq!(saved, res.code());
}

#[test]
fn convert_svgz() {
    let input_dir = tempfile::tempdir().unwrap();
    let output_dir = tempfile::tempdir().unwrap();

    let input = input_dir.path().join("icon.svgz");
    let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
    encoder
        .write_all(b"<svg viewBox='0 0 24 24'><circle r='5'/></svg>")
        .unwrap();
    std::fs::write(&input, encoder.finish().unwrap()).unwrap();

    let res = svg2laminar::convert_file(&input, Some(output_dir.path()), &Options::default())
        .unwrap();

    assert!(res.is_ok(), "{:?}", res);
    assert!(res.code().contains("svg.r := \"5\""));
    assert!(output_dir.path().join("icon.scala").exists());
}

#[test]
fn malformed_svgz() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svgz");
    std::fs::write(&input, [0x1f, 0x8b, 0x00, 0x01]).unwrap();

    let res = svg2laminar::convert_file(&input, Some(dir.path()), &Options::default());
    assert!(matches!(res, Err(Error::MalformedGZip)));
}

#[test]
fn not_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    std::fs::write(&input, [b'<', 0xff, 0xfe, b'>']).unwrap();

    let res = svg2laminar::convert_file(&input, Some(dir.path()), &Options::default());
    assert!(matches!(res, Err(Error::NotAnUtf8Str)));
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("missing.svg");

    let res = svg2laminar::convert_file(&input, Some(dir.path()), &Options::default());
    assert!(matches!(res, Err(Error::NotAFile(_))));

    // A directory is not a file either.
    let res = svg2laminar::convert_file(dir.path(), None, &Options::default());
    assert!(matches!(res, Err(Error::NotAFile(_))));
}

#[test]
fn missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    std::fs::write(&input, "<svg/>").unwrap();

    let output = dir.path().join("out");
    let res = svg2laminar::convert_file(&input, Some(&output), &Options::default());
    assert!(matches!(res, Err(Error::OutputNotWritable(_))));

    // An output path must be a directory.
    let res = svg2laminar::convert_file(&input, Some(&input), &Options::default());
    assert!(matches!(res, Err(Error::OutputNotWritable(_))));
}

#[test]
fn read_only_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("icon.svg");
    std::fs::write(&input, "<svg/>").unwrap();

    let output = tempfile::tempdir().unwrap();
    let mut perms = std::fs::metadata(output.path()).unwrap().permissions();
    perms.set_readonly(true);
    std::fs::set_permissions(output.path(), perms.clone()).unwrap();

    let res = svg2laminar::convert_file(&input, Some(output.path()), &Options::default());
    assert!(matches!(res, Err(Error::OutputNotWritable(_))));

    perms.set_readonly(false);
    std::fs::set_permissions(output.path(), perms).unwrap();
}
