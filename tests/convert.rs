use prodo::libs::convert::{self, ImageTarget};
use std::fs;

#[test]
fn test_text_to_pdf_produces_pdf_magic_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("doc.pdf");

    convert::text_to_pdf("doc", "Hello, world!\nSecond line.", &output).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_text_to_pdf_handles_long_content() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("long.pdf");

    // Enough lines to flow onto a second page, plus one very long line
    let mut text = "word ".repeat(400);
    for i in 0..80 {
        text.push_str(&format!("\nline {}", i));
    }

    convert::text_to_pdf("long", &text, &output).unwrap();
    assert!(fs::read(&output).unwrap().starts_with(b"%PDF"));
}

#[test]
fn test_text_to_docx_produces_zip_container() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("doc.docx");

    convert::text_to_docx("First paragraph\nSecond paragraph", &output).unwrap();

    // DOCX is a zip archive; PK is the zip local-file-header signature
    let bytes = fs::read(&output).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn test_image_conversion_png_to_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("pixel.png");
    let output = dir.path().join("pixel.jpeg");

    let img = image::RgbaImage::from_pixel(4, 4, image::Rgba([255, 0, 0, 255]));
    img.save(&input).unwrap();

    convert::convert_image(&input, ImageTarget::Jpeg, &output).unwrap();

    let converted = image::open(&output).unwrap();
    assert_eq!(converted.width(), 4);
    assert_eq!(converted.height(), 4);
}

#[test]
fn test_image_target_extension_matching() {
    // jpg and jpeg denote the same format
    assert!(ImageTarget::Jpeg.matches_extension("jpg"));
    assert!(ImageTarget::Jpeg.matches_extension("jpeg"));
    assert!(!ImageTarget::Jpeg.matches_extension("png"));
    assert!(ImageTarget::Png.matches_extension("png"));
    assert!(!ImageTarget::Webp.matches_extension("jpeg"));
}

#[test]
fn test_read_text_utf8() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("utf8.txt");
    fs::write(&path, "plain utf-8 çontent").unwrap();

    assert_eq!(convert::read_text(&path).unwrap(), "plain utf-8 çontent");
}

#[test]
fn test_read_text_falls_back_for_legacy_encoding() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("latin1.txt");
    // "café" in Windows-1252: the 0xE9 byte is invalid UTF-8
    fs::write(&path, [0x63, 0x61, 0x66, 0xE9]).unwrap();

    assert_eq!(convert::read_text(&path).unwrap(), "café");
}
