//! Vertical placement of short text blocks
//!
//! Computes baselines for N lines inside a fixed box so the block sits in the
//! middle regardless of N. Horizontal placement is left to the caller.

use crate::config::NameTextStyle;
use crate::types::cm;

/// Baseline calculator for a block of equally sized lines (PDF points)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextBlockCenterer {
    pub line_height: f64,
    /// Extra distance added to `line_height` between consecutive baselines
    pub line_spacing: f64,
    /// Fixed nudge applied to the first baseline when there are several lines
    pub baseline_fudge: f64,
}

impl TextBlockCenterer {
    pub fn new(line_height: f64, line_spacing: f64, baseline_fudge: f64) -> Self {
        Self {
            line_height,
            line_spacing,
            baseline_fudge,
        }
    }

    pub fn from_style(style: &NameTextStyle) -> Self {
        Self::new(
            cm(style.line_height_cm),
            cm(style.line_spacing_cm),
            cm(style.baseline_fudge_cm),
        )
    }

    /// Baseline of the first line
    ///
    /// A single line is centred on the box midpoint using half a line height
    /// as correction, not the font's ascent/descent. Several lines split the
    /// free height into `n + 1` equal gaps; the first baseline sits one gap
    /// and one line below the box top, lowered further by `baseline_fudge`.
    /// Lines that do not fit are not clipped.
    pub fn start_baseline(&self, line_count: usize, box_top: f64, box_height: f64) -> f64 {
        if line_count == 1 {
            return box_top - box_height / 2.0 - self.line_height / 2.0;
        }
        let n = line_count as f64;
        let gap = (box_height - n * self.line_height) / (n + 1.0);
        box_top - gap - self.line_height - self.baseline_fudge
    }

    /// Baseline of line `index` (0-based) given the first baseline
    pub fn baseline(&self, start: f64, index: usize) -> f64 {
        start - index as f64 * (self.line_height + self.line_spacing)
    }

    /// All baselines for `line_count` lines, top to bottom
    pub fn baselines(&self, line_count: usize, box_top: f64, box_height: f64) -> Vec<f64> {
        if line_count == 0 {
            return Vec::new();
        }
        let start = self.start_baseline(line_count, box_top, box_height);
        (0..line_count).map(|i| self.baseline(start, i)).collect()
    }
}
