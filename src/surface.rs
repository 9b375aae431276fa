//! Drawing surface abstraction
//!
//! The layout engine only issues absolute-coordinate commands; what they
//! turn into (PDF operators, a recorded list) is up to the surface.

use crate::font_registry::Font;
use crate::types::{Color, Rect};

/// Stateful, strictly sequential drawing target
///
/// Coordinates are PDF points with the origin at the bottom-left of the page.
pub trait DrawSurface {
    fn set_dash(&mut self, pattern: &[f64], phase: f64);
    fn clear_dash(&mut self);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_width(&mut self, width: f64);
    /// Stroke a rectangle outline
    fn rect(&mut self, rect: Rect);
    /// Stroke a rectangle outline with rounded corners
    fn round_rect(&mut self, rect: Rect, radius: f64);
    fn set_font(&mut self, font: Font, size: f64);
    /// Draw text with its baseline starting at (x, y)
    fn draw_string(&mut self, x: f64, y: f64, text: &str);
    /// Draw text horizontally centred on x, baseline at y
    fn draw_centred_string(&mut self, x: f64, y: f64, text: &str);
    /// Close the current page and start a new one
    fn show_page(&mut self);
}

/// One recorded surface command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetDash { pattern: Vec<f64>, phase: f64 },
    ClearDash,
    SetStrokeColor(Color),
    SetLineWidth(f64),
    Rect(Rect),
    RoundRect { rect: Rect, radius: f64 },
    SetFont { font: Font, size: f64 },
    DrawString { x: f64, y: f64, text: String },
    DrawCentredString { x: f64, y: f64, text: String },
    ShowPage,
}

/// Surface that records commands instead of drawing them
#[derive(Debug, Default, Clone)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    /// Number of page breaks issued so far
    pub fn page_breaks(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::ShowPage))
            .count()
    }

    /// Text of every string drawn, in order
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::DrawString { text, .. } | DrawCommand::DrawCentredString { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

impl DrawSurface for CommandRecorder {
    fn set_dash(&mut self, pattern: &[f64], phase: f64) {
        self.commands.push(DrawCommand::SetDash {
            pattern: pattern.to_vec(),
            phase,
        });
    }

    fn clear_dash(&mut self) {
        self.commands.push(DrawCommand::ClearDash);
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetStrokeColor(color));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn rect(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Rect(rect));
    }

    fn round_rect(&mut self, rect: Rect, radius: f64) {
        self.commands.push(DrawCommand::RoundRect { rect, radius });
    }

    fn set_font(&mut self, font: Font, size: f64) {
        self.commands.push(DrawCommand::SetFont { font, size });
    }

    fn draw_string(&mut self, x: f64, y: f64, text: &str) {
        self.commands.push(DrawCommand::DrawString {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn draw_centred_string(&mut self, x: f64, y: f64, text: &str) {
        self.commands.push(DrawCommand::DrawCentredString {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn show_page(&mut self) {
        self.commands.push(DrawCommand::ShowPage);
    }
}
