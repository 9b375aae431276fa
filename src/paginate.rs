//! Grid pagination
//!
//! Cards fill a column top to bottom, then the next column to the right,
//! then the next page.

use crate::config::LayoutGeometry;
use crate::merge::RoomCard;

/// Slot assigned to one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub page: usize,
    pub row: usize,
    pub column: usize,
    /// Bottom-left corner of the card in page coordinates
    pub origin_x: f64,
    pub origin_y: f64,
}

impl GridCell {
    /// Cell for the card at sequence position `index`
    pub fn for_index(index: usize, geometry: &LayoutGeometry) -> Self {
        let rows = geometry.rows_per_page;
        let row = index % rows;
        let column = (index / rows) % geometry.columns_per_page;
        let page = index / geometry.cards_per_page();

        let origin_x = geometry.margin_x()
            + column as f64 * (geometry.card_width() + geometry.margin_x());
        let origin_y = geometry.page_height()
            - (geometry.margin_y() + (row + 1) as f64 * (geometry.card_height() + geometry.margin_y()));

        Self {
            page,
            row,
            column,
            origin_x,
            origin_y,
        }
    }
}

/// A card with its slot
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub index: usize,
    pub cell: GridCell,
    pub card: &'a RoomCard,
    /// The previous page is full; break before drawing this card
    pub starts_new_page: bool,
}

/// Iterator over placements in card order
pub struct Placements<'a> {
    cards: std::iter::Enumerate<std::slice::Iter<'a, RoomCard>>,
    geometry: &'a LayoutGeometry,
}

impl<'a> Iterator for Placements<'a> {
    type Item = Placement<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (index, card) = self.cards.next()?;
        let per_page = self.geometry.cards_per_page();
        Some(Placement {
            index,
            cell: GridCell::for_index(index, self.geometry),
            card,
            starts_new_page: index > 0 && index % per_page == 0,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cards.size_hint()
    }
}

/// Assign every card to a grid cell
///
/// The geometry must have at least one row and one column
/// (see [`LayoutGeometry::validate`]).
pub fn paginate<'a>(cards: &'a [RoomCard], geometry: &'a LayoutGeometry) -> Placements<'a> {
    Placements {
        cards: cards.iter().enumerate(),
        geometry,
    }
}

/// Number of pages needed for `card_count` cards
pub fn page_count(card_count: usize, geometry: &LayoutGeometry) -> usize {
    card_count.div_ceil(geometry.cards_per_page())
}
