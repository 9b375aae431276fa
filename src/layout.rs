//! Card layout engine
//!
//! Turns one [`RoomCard`] into draw commands at a given origin. All offsets
//! are relative to the card's bottom-left corner and come from
//! [`CardStyle`]; nothing is measured from the text except string widths
//! for centring.

use crate::config::{CardStyle, LayoutGeometry};
use crate::font_registry::Font;
use crate::merge::RoomCard;
use crate::surface::DrawSurface;
use crate::text_layout::TextBlockCenterer;
use crate::types::{cm, Color, Rect};

/// Draws cards with a fixed geometry and style
pub struct CardLayoutEngine<'a> {
    geometry: &'a LayoutGeometry,
    style: &'a CardStyle,
    names: TextBlockCenterer,
}

impl<'a> CardLayoutEngine<'a> {
    pub fn new(geometry: &'a LayoutGeometry, style: &'a CardStyle) -> Self {
        Self {
            geometry,
            style,
            names: TextBlockCenterer::from_style(&style.names),
        }
    }

    /// Card footprint at the given origin
    pub fn card_rect(&self, origin_x: f64, origin_y: f64) -> Rect {
        Rect::new(
            origin_x,
            origin_y,
            self.geometry.card_width(),
            self.geometry.card_height(),
        )
    }

    /// Rounded frame around the occupant names
    pub fn name_box(&self, origin_x: f64, origin_y: f64) -> Rect {
        let nb = &self.style.name_box;
        let card = self.card_rect(origin_x, origin_y);
        let height = cm(nb.height_cm);
        Rect::new(
            card.x + cm(nb.inset_cm),
            card.top() - cm(nb.top_margin_cm) - height,
            card.width - 2.0 * cm(nb.inset_cm),
            height,
        )
    }

    /// Draw every element of `card` with its bottom-left corner at the origin
    pub fn render_card<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        origin_x: f64,
        origin_y: f64,
        card: &RoomCard,
    ) {
        self.draw_border(surface, origin_x, origin_y);
        self.draw_name_box(surface, origin_x, origin_y);
        self.draw_names(surface, origin_x, origin_y, card.occupant_names());
        self.draw_room_key(surface, origin_x, origin_y, card.room_key());
        self.draw_schedule(surface, origin_x, origin_y, card);
    }

    fn draw_border<S: DrawSurface + ?Sized>(&self, surface: &mut S, x: f64, y: f64) {
        let border = &self.style.border;
        surface.set_dash(&border.dash_pt, 0.0);
        surface.set_stroke_color(Color::gray(border.gray));
        surface.rect(self.card_rect(x, y));
        surface.clear_dash();
        surface.set_stroke_color(Color::black());
    }

    fn draw_name_box<S: DrawSurface + ?Sized>(&self, surface: &mut S, x: f64, y: f64) {
        surface.set_line_width(self.style.name_box.line_width_pt);
        surface.round_rect(self.name_box(x, y), self.style.name_box.corner_radius_pt);
        surface.set_line_width(1.0);
    }

    fn draw_names<S: DrawSurface + ?Sized>(&self, surface: &mut S, x: f64, y: f64, names: &[String]) {
        let card = self.card_rect(x, y);
        let nb = &self.style.name_box;
        let box_top = card.top() - cm(nb.top_margin_cm);

        surface.set_font(Font::HelveticaBold, self.style.names.font_size_pt);
        let baselines = self.names.baselines(names.len(), box_top, cm(nb.height_cm));
        for (name, baseline) in names.iter().zip(baselines) {
            surface.draw_centred_string(card.center_x(), baseline, name);
        }
    }

    fn draw_room_key<S: DrawSurface + ?Sized>(&self, surface: &mut S, x: f64, y: f64, room_key: &str) {
        let label = &self.style.room_label;
        let width = self.geometry.card_width();
        surface.set_font(Font::HelveticaBold, label.font_size_pt);
        surface.draw_centred_string(
            x + width / 4.0 + cm(label.center_offset_cm),
            y + cm(label.baseline_cm),
            room_key,
        );
    }

    fn draw_schedule<S: DrawSurface + ?Sized>(&self, surface: &mut S, x: f64, y: f64, card: &RoomCard) {
        let s = &self.style.schedule;
        let anchor = x + self.geometry.card_width() * s.column_fraction;
        let label_x = anchor + cm(s.label_offset_cm);
        let value_x = anchor + cm(s.value_offset_cm);
        let schedule = card.schedule();

        surface.set_font(Font::HelveticaBold, s.label_font_size_pt);
        surface.draw_string(label_x, y + cm(s.full_label_baseline_cm), &s.full_label);
        surface.set_font(Font::Helvetica, s.value_font_size_pt);
        surface.draw_string(value_x, y + cm(s.full_value_baseline_cm), &schedule.full);

        surface.set_font(Font::HelveticaBold, s.label_font_size_pt);
        surface.draw_string(label_x, y + cm(s.partial_label_baseline_cm), &s.partial_label);
        surface.set_font(Font::Helvetica, s.value_font_size_pt);
        surface.draw_string(value_x, y + cm(s.partial_1_baseline_cm), &schedule.partial_1);
        surface.draw_string(value_x, y + cm(s.partial_2_baseline_cm), &schedule.partial_2);
    }
}
