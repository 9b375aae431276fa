//! Layout configuration
//!
//! Every length that shapes a card or a page is a named value here, in
//! centimetres unless the name says otherwise. The defaults reproduce the
//! reference cards: 18 x 11.85 cm, two per A4 page.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};
use crate::types::cm;

/// Page and grid geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutGeometry {
    pub card_width_cm: f64,
    pub card_height_cm: f64,
    /// Left margin, also the horizontal gap between columns
    pub margin_x_cm: f64,
    /// Top margin, also the vertical gap between rows
    pub margin_y_cm: f64,
    pub columns_per_page: usize,
    pub rows_per_page: usize,
    pub page_width_cm: f64,
    pub page_height_cm: f64,
}

impl Default for LayoutGeometry {
    fn default() -> Self {
        Self {
            card_width_cm: 18.0,
            card_height_cm: 11.85,
            margin_x_cm: 1.5,
            margin_y_cm: 1.0,
            columns_per_page: 1,
            rows_per_page: 2,
            page_width_cm: 21.0,
            page_height_cm: 29.7,
        }
    }
}

impl LayoutGeometry {
    pub fn card_width(&self) -> f64 {
        cm(self.card_width_cm)
    }

    pub fn card_height(&self) -> f64 {
        cm(self.card_height_cm)
    }

    pub fn margin_x(&self) -> f64 {
        cm(self.margin_x_cm)
    }

    pub fn margin_y(&self) -> f64 {
        cm(self.margin_y_cm)
    }

    pub fn page_width(&self) -> f64 {
        cm(self.page_width_cm)
    }

    pub fn page_height(&self) -> f64 {
        cm(self.page_height_cm)
    }

    pub fn cards_per_page(&self) -> usize {
        self.rows_per_page * self.columns_per_page
    }

    pub fn validate(&self) -> CardResult<()> {
        if self.rows_per_page == 0 || self.columns_per_page == 0 {
            return Err(CardError::InvalidConfig(format!(
                "grid must have at least one row and one column (got {}x{})",
                self.rows_per_page, self.columns_per_page
            )));
        }
        let sizes = [
            ("card_width_cm", self.card_width_cm),
            ("card_height_cm", self.card_height_cm),
            ("page_width_cm", self.page_width_cm),
            ("page_height_cm", self.page_height_cm),
        ];
        for (name, value) in sizes {
            if !(value > 0.0) {
                return Err(CardError::InvalidConfig(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Outer dashed cut guide
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderStyle {
    /// Dash on/off lengths in points
    pub dash_pt: Vec<f64>,
    pub gray: f64,
}

impl Default for BorderStyle {
    fn default() -> Self {
        Self {
            dash_pt: vec![3.0, 3.0],
            gray: 0.6,
        }
    }
}

/// Rounded frame holding the occupant names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameBoxStyle {
    /// Horizontal inset from both card edges
    pub inset_cm: f64,
    /// Gap between the card top and the box top
    pub top_margin_cm: f64,
    pub height_cm: f64,
    pub corner_radius_pt: f64,
    pub line_width_pt: f64,
}

impl Default for NameBoxStyle {
    fn default() -> Self {
        Self {
            inset_cm: 1.0,
            top_margin_cm: 0.7,
            height_cm: 5.0,
            corner_radius_pt: 13.0,
            line_width_pt: 4.0,
        }
    }
}

/// Occupant name text inside the name box
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameTextStyle {
    pub font_size_pt: f64,
    pub line_height_cm: f64,
    /// Extra step between consecutive baselines
    pub line_spacing_cm: f64,
    /// Downward nudge of the first baseline for two or more lines
    pub baseline_fudge_cm: f64,
}

impl Default for NameTextStyle {
    fn default() -> Self {
        Self {
            font_size_pt: 33.0,
            line_height_cm: 0.8,
            line_spacing_cm: 0.9,
            baseline_fudge_cm: 0.1,
        }
    }
}

/// Large room identifier in the lower-left area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomLabelStyle {
    pub font_size_pt: f64,
    /// Offset of the centre line to the right of a quarter card width
    pub center_offset_cm: f64,
    pub baseline_cm: f64,
}

impl Default for RoomLabelStyle {
    fn default() -> Self {
        Self {
            font_size_pt: 150.0,
            center_offset_cm: 1.0,
            baseline_cm: 1.2,
        }
    }
}

/// Housekeeping column on the right-hand side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleStyle {
    /// Column anchor as a fraction of the card width
    pub column_fraction: f64,
    /// Label x offset from the anchor
    pub label_offset_cm: f64,
    /// Value x offset from the anchor
    pub value_offset_cm: f64,
    pub label_font_size_pt: f64,
    pub value_font_size_pt: f64,
    pub full_label: String,
    pub partial_label: String,
    pub full_label_baseline_cm: f64,
    pub full_value_baseline_cm: f64,
    pub partial_label_baseline_cm: f64,
    pub partial_1_baseline_cm: f64,
    pub partial_2_baseline_cm: f64,
}

impl Default for ScheduleStyle {
    fn default() -> Self {
        Self {
            column_fraction: 3.0 / 5.0,
            label_offset_cm: -0.5,
            value_offset_cm: 0.5,
            label_font_size_pt: 21.0,
            value_font_size_pt: 19.0,
            full_label: "Pulizia Completa".to_string(),
            partial_label: "Ripristino".to_string(),
            full_label_baseline_cm: 4.8,
            full_value_baseline_cm: 3.8,
            partial_label_baseline_cm: 2.9,
            partial_1_baseline_cm: 1.9,
            partial_2_baseline_cm: 0.9,
        }
    }
}

/// Visual constants for one card
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    pub border: BorderStyle,
    pub name_box: NameBoxStyle,
    pub names: NameTextStyle,
    pub room_label: RoomLabelStyle,
    pub schedule: ScheduleStyle,
}

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geometry: LayoutGeometry,
    pub style: CardStyle,
}

impl Config {
    /// Parse a JSON configuration; missing keys keep their defaults
    pub fn from_json(text: &str) -> CardResult<Self> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file, or the defaults when `path` is `None`
    pub fn load(path: Option<&Path>) -> CardResult<Self> {
        match path {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                Self::from_json(&text)
            }
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> CardResult<()> {
        self.geometry.validate()
    }
}
