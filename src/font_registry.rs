//! Built-in PDF fonts used on the cards and their metrics
//!
//! Cards only use the base-14 Helvetica faces, so no font program is
//! embedded. Advance widths come from the Adobe AFM files (1/1000 em) and
//! are needed to centre strings horizontally.

use pdf_writer::{Name, Pdf, Ref};

/// Base-14 font faces available to the drawing surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Font {
    Helvetica,
    HelveticaBold,
}

impl Font {
    pub const ALL: [Font; 2] = [Font::Helvetica, Font::HelveticaBold];

    /// PostScript name written as BaseFont
    pub fn base_font(self) -> Name<'static> {
        match self {
            Font::Helvetica => Name(b"Helvetica"),
            Font::HelveticaBold => Name(b"Helvetica-Bold"),
        }
    }

    /// Resource name used inside content streams
    pub fn resource_name(self) -> Name<'static> {
        match self {
            Font::Helvetica => Name(b"F1"),
            Font::HelveticaBold => Name(b"F2"),
        }
    }

    /// Width of `text` in points at the given size
    pub fn string_width(self, text: &str, size: f64) -> f64 {
        let units: u32 = text.chars().map(|ch| self.char_width(ch) as u32).sum();
        units as f64 * size / 1000.0
    }

    fn char_width(self, ch: char) -> u16 {
        let table = match self {
            Font::Helvetica => &HELVETICA_WIDTHS,
            Font::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        };
        match ch {
            ' '..='~' => table[ch as usize - 0x20],
            // dotless-i accents are wider than plain 'i' in the regular face
            'ì' | 'í' | 'î' | 'ï' => 278,
            _ => match base_letter(ch) {
                Some(base) => table[base as usize - 0x20],
                None => DEFAULT_WIDTH,
            },
        }
    }
}

const DEFAULT_WIDTH: u16 = 556;

/// Unaccented letter with the same advance width in the Helvetica AFMs
fn base_letter(ch: char) -> Option<char> {
    let base = match ch {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'À' | 'Á' | 'Â' | 'Ã' | 'Ä' | 'Å' => 'A',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'È' | 'É' | 'Ê' | 'Ë' => 'E',
        'Ì' | 'Í' | 'Î' | 'Ï' => 'I',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'Ò' | 'Ó' | 'Ô' | 'Õ' | 'Ö' => 'O',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'Ù' | 'Ú' | 'Û' | 'Ü' => 'U',
        'ç' => 'c',
        'Ç' => 'C',
        'ñ' => 'n',
        'Ñ' => 'N',
        'ý' | 'ÿ' => 'y',
        'Ý' => 'Y',
        _ => return None,
    };
    Some(base)
}

/// Helvetica advance widths for 0x20..=0x7E (WinAnsi)
#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for 0x20..=0x7E (WinAnsi)
#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

/// Font objects registered in a PDF document
pub struct FontRegistry {
    fonts: Vec<(Font, Ref)>,
}

impl FontRegistry {
    /// Write a Type1 font dictionary for every card font
    ///
    /// `next_ref` hands out object ids; the registry keeps the mapping so
    /// each page can list the fonts in its resources.
    pub fn register_builtin(pdf: &mut Pdf, mut next_ref: impl FnMut() -> Ref) -> Self {
        let mut fonts = Vec::with_capacity(Font::ALL.len());
        for font in Font::ALL {
            let id = next_ref();
            pdf.type1_font(id)
                .base_font(font.base_font())
                .encoding_predefined(Name(b"WinAnsiEncoding"));
            fonts.push((font, id));
        }
        Self { fonts }
    }

    /// Write all registered fonts into page Resources
    pub fn write_resources(&self, resources: &mut pdf_writer::writers::Resources<'_>) {
        let mut dict = resources.fonts();
        for (font, id) in &self.fonts {
            dict.pair(font.resource_name(), *id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_width_ascii() {
        // "Ab" = 667 + 556 in Helvetica
        let w = Font::Helvetica.string_width("Ab", 10.0);
        assert!((w - 12.23).abs() < 1e-9);
        // Bold 'b' is wider
        let wb = Font::HelveticaBold.string_width("Ab", 10.0);
        assert!((wb - 13.33).abs() < 1e-9);
    }

    #[test]
    fn test_accented_letters_use_base_width() {
        assert_eq!(
            Font::Helvetica.string_width("è", 12.0),
            Font::Helvetica.string_width("e", 12.0)
        );
        assert_eq!(Font::Helvetica.string_width("ì", 1000.0), 278.0);
    }

    #[test]
    fn test_registry_assigns_ids() {
        let mut pdf = Pdf::new();
        let mut next = 10;
        let registry = FontRegistry::register_builtin(&mut pdf, || {
            next += 1;
            Ref::new(next)
        });
        assert_eq!(
            registry.fonts,
            vec![(Font::Helvetica, Ref::new(11)), (Font::HelveticaBold, Ref::new(12))]
        );
    }
}
