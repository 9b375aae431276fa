//! Geometric and colour primitives shared by the layout engine and surfaces

/// PDF points per centimetre
pub const POINTS_PER_CM: f64 = 72.0 / 2.54;

/// Convert centimetres to PDF points
pub fn cm(value: f64) -> f64 {
    value * POINTS_PER_CM
}

/// Rectangle anchored at its bottom-left corner (PDF coordinates, y up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }
}

/// RGB colour, components in 0.0..=1.0
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn gray(level: f64) -> Self {
        Self::rgb(level, level, level)
    }

    pub fn black() -> Self {
        Self::gray(0.0)
    }
}
