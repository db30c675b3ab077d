//! Local file converters: text to PDF, text to DOCX, image re-encoding.
//!
//! These run entirely on this machine; only Word-to-PDF needs the external
//! conversion service (`api::converter`). Text inputs are decoded with
//! encoding_rs so non-UTF-8 files still convert instead of erroring out.

use anyhow::Result;
use encoding_rs::{UTF_8, WINDOWS_1252};
use image::ImageFormat;
use printpdf::{BuiltinFont, Mm, PdfDocument};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

// A4 page geometry in millimeters
const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN: f32 = 20.0;
const FONT_SIZE: f32 = 12.0;
const LINE_HEIGHT: f32 = 6.0;

/// Characters per wrapped line; sized for Times Roman 12pt inside the margins.
const WRAP_COLUMNS: usize = 90;

/// Image formats accepted as conversion input, by file extension.
pub const IMAGE_INPUT_FORMATS: &[&str] = &["jpeg", "jpg", "png", "webp", "gif", "bmp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ImageTarget {
    Jpeg,
    Png,
    Webp,
}

impl ImageTarget {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageTarget::Jpeg => "jpeg",
            ImageTarget::Png => "png",
            ImageTarget::Webp => "webp",
        }
    }

    /// True when `ext` already denotes this format (jpg and jpeg are the same).
    pub fn matches_extension(&self, ext: &str) -> bool {
        match self {
            ImageTarget::Jpeg => ext == "jpeg" || ext == "jpg",
            _ => ext == self.extension(),
        }
    }

    fn format(&self) -> ImageFormat {
        match self {
            ImageTarget::Jpeg => ImageFormat::Jpeg,
            ImageTarget::Png => ImageFormat::Png,
            ImageTarget::Webp => ImageFormat::WebP,
        }
    }
}

/// Reads a text file, tolerating non-UTF-8 content. UTF-8 (with BOM) is
/// tried first; on decode errors the content is reinterpreted as
/// Windows-1252, which covers the common legacy exports.
pub fn read_text(path: &Path) -> Result<String> {
    let bytes = fs::read(path)?;
    let (text, _, had_errors) = UTF_8.decode(&bytes);
    if !had_errors {
        return Ok(text.into_owned());
    }
    let (text, _, _) = WINDOWS_1252.decode(&bytes);
    Ok(text.into_owned())
}

/// Renders plain text into an A4 PDF (Times Roman 12pt), wrapping long
/// lines and flowing onto additional pages as needed.
pub fn text_to_pdf(title: &str, text: &str, output: &Path) -> Result<()> {
    let (doc, page, layer) = PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    let font = doc.add_builtin_font(BuiltinFont::TimesRoman)?;

    let mut current_layer = doc.get_page(page).get_layer(layer);
    let mut y = PAGE_HEIGHT - MARGIN;

    for line in wrap_lines(text) {
        if y < MARGIN {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            current_layer = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_HEIGHT - MARGIN;
        }
        current_layer.use_text(line, FONT_SIZE, Mm(MARGIN), Mm(y), &font);
        y -= LINE_HEIGHT;
    }

    doc.save(&mut BufWriter::new(File::create(output)?))?;
    Ok(())
}

/// Writes plain text into a DOCX document, one paragraph per input line.
pub fn text_to_docx(text: &str, output: &Path) -> Result<()> {
    use docx_rs::{Docx, Paragraph, Run};

    let mut docx = Docx::new();
    for line in text.lines() {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(line)));
    }

    let file = File::create(output)?;
    docx.build().pack(file)?;
    Ok(())
}

/// Re-encodes an image file into the target format. JPEG has no alpha
/// channel, so sources are flattened to RGB for that target.
pub fn convert_image(input: &Path, target: ImageTarget, output: &Path) -> Result<()> {
    let img = image::open(input)?;
    match target {
        ImageTarget::Jpeg => image::DynamicImage::ImageRgb8(img.to_rgb8()).save_with_format(output, target.format())?,
        _ => img.save_with_format(output, target.format())?,
    }
    Ok(())
}

/// Splits text into display lines, wrapping anything longer than the page
/// column at whitespace when possible.
fn wrap_lines(text: &str) -> Vec<String> {
    let mut lines = Vec::new();
    for raw in text.lines() {
        if raw.chars().count() <= WRAP_COLUMNS {
            lines.push(raw.to_string());
            continue;
        }
        let mut current = String::new();
        for word in raw.split_whitespace() {
            if !current.is_empty() && current.chars().count() + word.chars().count() + 1 > WRAP_COLUMNS {
                lines.push(std::mem::take(&mut current));
            }
            // A single word longer than the column gets hard-split
            if word.chars().count() > WRAP_COLUMNS {
                let mut chunk = String::new();
                for c in word.chars() {
                    chunk.push(c);
                    if chunk.chars().count() == WRAP_COLUMNS {
                        lines.push(std::mem::take(&mut chunk));
                    }
                }
                current = chunk;
            } else {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(word);
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
