//! Minimal PDF writer.
//!
//! Produces PDF 1.4 files using the built-in Type1 Helvetica fonts and
//! absolute-positioned text, which is all the invoice template needs. Text
//! operations accumulate per page into a content stream; `finish` assembles
//! the object table, cross-reference table and trailer.

use std::fmt::Write as _;

/// Page size in points (A4 portrait).
pub const PAGE_WIDTH: f64 = 595.0;
pub const PAGE_HEIGHT: f64 = 842.0;

/// Built-in fonts available to pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    fn resource_name(self) -> &'static str {
        match self {
            Font::Helvetica => "F1",
            Font::HelveticaBold => "F2",
        }
    }
}

/// Coarse width estimate for Helvetica text at the given size.
///
/// The average glyph advance in Helvetica is close to half an em, which is
/// accurate enough to center the title and right-align the totals block.
pub fn text_width(text: &str, size: f64) -> f64 {
    text.chars().count() as f64 * size * 0.5
}

#[derive(Debug, Default)]
struct Page {
    content: String,
}

/// PDF document under construction.
#[derive(Debug, Default)]
pub struct PdfWriter {
    pages: Vec<Page>,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new page; subsequent text lands on it.
    pub fn add_page(&mut self) {
        self.pages.push(Page::default());
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Show `text` with its left baseline at `(x, y)`, in points measured
    /// from the top-left corner of the current page.
    pub fn text(&mut self, text: &str, x: f64, y: f64, size: f64, font: Font) {
        if self.pages.is_empty() {
            self.add_page();
        }
        if let Some(page) = self.pages.last_mut() {
            // PDF coordinates grow upward from the bottom-left corner.
            let baseline = PAGE_HEIGHT - y;
            let _ = writeln!(
                page.content,
                "BT /{} {size} Tf {x:.2} {baseline:.2} Td ({}) Tj ET",
                font.resource_name(),
                escape(text),
            );
        }
    }

    /// Assemble the final PDF bytes.
    ///
    /// Object layout: 1 catalog, 2 page tree, 3-4 fonts, then for each page
    /// `i` (0-based): `5 + 2i` page dictionary, `6 + 2i` content stream.
    pub fn finish(mut self) -> Vec<u8> {
        if self.pages.is_empty() {
            self.add_page();
        }
        let page_count = self.pages.len();
        let object_count = 4 + 2 * page_count;

        let mut buf: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::with_capacity(object_count);
        buf.extend_from_slice(b"%PDF-1.4\n");

        let kids = (0..page_count)
            .map(|i| format!("{} 0 R", 5 + 2 * i))
            .collect::<Vec<_>>()
            .join(" ");

        write_object(&mut buf, &mut offsets, 1, "<< /Type /Catalog /Pages 2 0 R >>");
        write_object(
            &mut buf,
            &mut offsets,
            2,
            &format!("<< /Type /Pages /Kids [{kids}] /Count {page_count} >>"),
        );
        write_object(
            &mut buf,
            &mut offsets,
            3,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
             /Encoding /WinAnsiEncoding >>",
        );
        write_object(
            &mut buf,
            &mut offsets,
            4,
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold \
             /Encoding /WinAnsiEncoding >>",
        );
        for (i, page) in self.pages.iter().enumerate() {
            let page_object = 5 + 2 * i;
            let content_object = page_object + 1;
            write_object(
                &mut buf,
                &mut offsets,
                page_object,
                &format!(
                    "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> \
                     /Contents {content_object} 0 R >>"
                ),
            );
            write_object(
                &mut buf,
                &mut offsets,
                content_object,
                &format!(
                    "<< /Length {} >>\nstream\n{}endstream",
                    page.content.len(),
                    page.content
                ),
            );
        }

        // Cross-reference table: every entry is exactly 20 bytes.
        let xref_offset = buf.len();
        let mut xref = format!("xref\n0 {}\n0000000000 65535 f \n", object_count + 1);
        for offset in &offsets {
            let _ = writeln!(xref, "{offset:010} 00000 n ");
        }
        buf.extend_from_slice(xref.as_bytes());
        buf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_offset}\n%%EOF\n",
                object_count + 1
            )
            .as_bytes(),
        );
        buf
    }
}

fn write_object(buf: &mut Vec<u8>, offsets: &mut Vec<usize>, number: usize, body: &str) {
    offsets.push(buf.len());
    buf.extend_from_slice(format!("{number} 0 obj\n{body}\nendobj\n").as_bytes());
}

/// Escape text for a PDF literal string.
///
/// The fonts are declared with /WinAnsiEncoding, so ASCII passes through,
/// the Latin-1 range is emitted as octal escapes, and anything without a
/// single-byte WinAnsi code falls back to `?`.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            c if c.is_ascii() => out.push(c),
            c => match u32::from(c) {
                code @ 0xA0..=0xFF => {
                    let _ = write!(out, "\\{code:03o}");
                }
                _ => out.push('?'),
            },
        }
    }
    out
}
