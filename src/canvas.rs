//! PDF drawing surface built on pdf-writer
//!
//! Provides a ReportLab-like canvas: commands go to the current page's
//! content stream, `show_page` closes it, `save` assembles the document.

use std::path::Path;

use log::{debug, info};
use pdf_writer::{Content, Finish, Name, Pdf, Rect as PdfRect, Ref, Str};

use crate::error::CardResult;
use crate::font_registry::{Font, FontRegistry};
use crate::surface::DrawSurface;
use crate::types::{Color, Rect};
use crate::unicode_utils::unicode_to_winansi;

/// Bezier control distance for a quarter circle of radius 1
const KAPPA: f64 = 0.552_284_75;

/// Text state; PDF text objects need the font set inside each one
#[derive(Clone, Debug)]
struct CanvasState {
    font: Font,
    font_size: f64,
}

impl Default for CanvasState {
    fn default() -> Self {
        Self {
            font: Font::Helvetica,
            font_size: 12.0,
        }
    }
}

/// Multi-page PDF canvas with fixed page size
pub struct PdfCanvas {
    pdf: Pdf,
    page_width: f64,
    page_height: f64,
    page_tree_id: Ref,
    next_ref_id: i32,
    fonts: FontRegistry,
    pages: Vec<Ref>,
    content: Content,
    state: CanvasState,
    page_dirty: bool,
}

impl PdfCanvas {
    pub fn new(page_width: f64, page_height: f64) -> Self {
        let mut pdf = Pdf::new();
        let catalog_id = Ref::new(1);
        let page_tree_id = Ref::new(2);
        pdf.catalog(catalog_id).pages(page_tree_id);

        let mut next_ref_id = 3;
        let fonts = FontRegistry::register_builtin(&mut pdf, || {
            let id = Ref::new(next_ref_id);
            next_ref_id += 1;
            id
        });

        Self {
            pdf,
            page_width,
            page_height,
            page_tree_id,
            next_ref_id,
            fonts,
            pages: Vec::new(),
            content: Content::new(),
            state: CanvasState::default(),
            page_dirty: false,
        }
    }

    fn next_ref(&mut self) -> Ref {
        let r = Ref::new(self.next_ref_id);
        self.next_ref_id += 1;
        r
    }

    /// Number of pages closed so far
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Close the current page: write its content stream and page object
    fn finish_page(&mut self) {
        let content = std::mem::replace(&mut self.content, Content::new());
        let page_id = self.next_ref();
        let content_id = self.next_ref();
        self.pdf.stream(content_id, &content.finish());

        let mut page = self.pdf.page(page_id);
        page.media_box(PdfRect::new(
            0.0,
            0.0,
            self.page_width as f32,
            self.page_height as f32,
        ));
        page.parent(self.page_tree_id);
        page.contents(content_id);
        self.fonts.write_resources(&mut page.resources());
        page.finish();

        self.pages.push(page_id);
        // every page starts from the default graphics state
        self.state = CanvasState::default();
        self.page_dirty = false;
        debug!("Closed page {}", self.pages.len());
    }

    /// Assemble the document and return its bytes
    pub fn finish(mut self) -> Vec<u8> {
        if self.page_dirty || self.pages.is_empty() {
            self.finish_page();
        }
        let count = self.pages.len() as i32;
        self.pdf
            .pages(self.page_tree_id)
            .kids(self.pages.iter().copied())
            .count(count);
        self.pdf.finish()
    }

    /// Assemble the document and write it to `path`
    ///
    /// Returns the number of pages written.
    pub fn save(self, path: &Path) -> CardResult<usize> {
        let pages = self.pages.len() + usize::from(self.page_dirty || self.pages.is_empty());
        let bytes = self.finish();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, &bytes)?;

        info!(
            "PDF saved to: {} ({} pages, {} bytes)",
            path.display(),
            pages,
            bytes.len()
        );
        Ok(pages)
    }

    fn font_name(&self) -> Name<'static> {
        self.state.font.resource_name()
    }
}

impl DrawSurface for PdfCanvas {
    fn set_dash(&mut self, pattern: &[f64], phase: f64) {
        self.content
            .set_dash_pattern(pattern.iter().map(|&v| v as f32), phase as f32);
    }

    fn clear_dash(&mut self) {
        self.content.set_dash_pattern(std::iter::empty::<f32>(), 0.0);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.content
            .set_stroke_rgb(color.r as f32, color.g as f32, color.b as f32);
    }

    fn set_line_width(&mut self, width: f64) {
        self.content.set_line_width(width as f32);
    }

    fn rect(&mut self, rect: Rect) {
        self.content.rect(
            rect.x as f32,
            rect.y as f32,
            rect.width as f32,
            rect.height as f32,
        );
        self.content.stroke();
        self.page_dirty = true;
    }

    fn round_rect(&mut self, rect: Rect, radius: f64) {
        // Clamp radius to half of the smaller dimension
        let r = radius.min(rect.width.min(rect.height) / 2.0).max(0.0);
        if r <= 0.0 {
            self.rect(rect);
            return;
        }

        let (x, y, w, h) = (rect.x, rect.y, rect.width, rect.height);
        let c = r * KAPPA;
        let p = |v: f64| v as f32;

        self.content.move_to(p(x + r), p(y + h));
        self.content.line_to(p(x + w - r), p(y + h));
        self.content.cubic_to(
            p(x + w - r + c), p(y + h),
            p(x + w), p(y + h - r + c),
            p(x + w), p(y + h - r),
        );
        self.content.line_to(p(x + w), p(y + r));
        self.content.cubic_to(
            p(x + w), p(y + r - c),
            p(x + w - r + c), p(y),
            p(x + w - r), p(y),
        );
        self.content.line_to(p(x + r), p(y));
        self.content.cubic_to(
            p(x + r - c), p(y),
            p(x), p(y + r - c),
            p(x), p(y + r),
        );
        self.content.line_to(p(x), p(y + h - r));
        self.content.cubic_to(
            p(x), p(y + h - r + c),
            p(x + r - c), p(y + h),
            p(x + r), p(y + h),
        );
        self.content.close_path();
        self.content.stroke();
        self.page_dirty = true;
    }

    fn set_font(&mut self, font: Font, size: f64) {
        self.state.font = font;
        self.state.font_size = size;
    }

    fn draw_string(&mut self, x: f64, y: f64, text: &str) {
        let bytes = unicode_to_winansi(text);
        let font_name = self.font_name();
        self.content.begin_text();
        self.content.set_font(font_name, self.state.font_size as f32);
        self.content.next_line(x as f32, y as f32);
        self.content.show(Str(&bytes));
        self.content.end_text();
        self.page_dirty = true;
    }

    fn draw_centred_string(&mut self, x: f64, y: f64, text: &str) {
        let width = self.state.font.string_width(text, self.state.font_size);
        self.draw_string(x - width / 2.0, y, text);
    }

    fn show_page(&mut self) {
        self.finish_page();
    }
}
