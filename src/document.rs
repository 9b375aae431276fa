//! Room card document: load, merge, select, paginate, draw, save
//!
//! ## Data Flow
//!
//! ```text
//! occupants + schedules → merge → RoomCard list → select → paginate → layout → PDF
//! ```
//!
//! Fatal problems (unreadable datasets, write failures) are returned as
//! [`CardError`]. Lookup misses become [`Diagnostic`]s and the run goes on.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::canvas::PdfCanvas;
use crate::config::Config;
use crate::dataset::{load_occupants, load_schedules, OccupantRecord, ScheduleEntry};
use crate::error::{CardResult, Diagnostic};
use crate::layout::CardLayoutEngine;
use crate::merge::{merge, RoomCard};
use crate::paginate::paginate;
use crate::surface::DrawSurface;

/// Result of drawing the cards onto a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub cards: usize,
    pub pages: usize,
}

/// Outcome of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// The document was written to `path`
    Written {
        path: PathBuf,
        cards: usize,
        pages: usize,
    },
    /// No card survived selection; nothing was written
    Empty,
}

/// Ordered room cards plus the configuration used to lay them out
pub struct RoomCardDocument {
    config: Config,
    cards: Vec<RoomCard>,
    diagnostics: Vec<Diagnostic>,
}

impl RoomCardDocument {
    /// Read both datasets and merge them
    ///
    /// Both files are read completely before any card is built.
    pub fn load(occupants: &Path, schedules: &Path, config: Config) -> CardResult<Self> {
        config.validate()?;
        info!("Loading datasets {} and {}", occupants.display(), schedules.display());
        let occupants = load_occupants(occupants)?;
        let schedules = load_schedules(schedules)?;
        Ok(Self::from_records(&occupants, &schedules, config))
    }

    pub fn from_records(
        occupants: &[OccupantRecord],
        schedules: &[ScheduleEntry],
        config: Config,
    ) -> Self {
        let merged = merge(occupants, schedules);
        info!("Prepared {} room cards", merged.cards.len());
        Self {
            config,
            cards: merged.cards,
            diagnostics: merged.diagnostics,
        }
    }

    pub fn cards(&self) -> &[RoomCard] {
        &self.cards
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Non-fatal problems found so far, in the order they occurred
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Keep only the rooms named in a comma-separated list
    ///
    /// Keys are trimmed and empty entries skipped. With no usable key at all
    /// every card is kept; otherwise unknown keys are reported and only the
    /// requested cards remain, in their original order.
    pub fn select(&mut self, selection: Option<&str>) {
        let requested: Vec<&str> = selection
            .unwrap_or("")
            .split(',')
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .collect();
        if requested.is_empty() {
            return;
        }

        let mut keep = HashSet::new();
        for key in requested {
            if self.cards.iter().any(|c| c.room_key() == key) {
                keep.insert(key.to_string());
            } else {
                warn!("Room {key} does not exist");
                self.diagnostics.push(Diagnostic::UnknownRoom(key.to_string()));
            }
        }
        self.cards.retain(|c| keep.contains(c.room_key()));
        debug!("Selection kept {} cards", self.cards.len());
    }

    /// Draw all cards, breaking pages when the grid is full
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) -> RenderSummary {
        let geometry = &self.config.geometry;
        let engine = CardLayoutEngine::new(geometry, &self.config.style);
        let mut pages = 0;

        for placement in paginate(&self.cards, geometry) {
            if placement.starts_new_page {
                surface.show_page();
            }
            let cell = placement.cell;
            debug!(
                "Card for room {} on page {} row {} column {}",
                placement.card.room_key(),
                cell.page + 1,
                cell.row,
                cell.column
            );
            engine.render_card(surface, cell.origin_x, cell.origin_y, placement.card);
            pages = cell.page + 1;
        }

        RenderSummary {
            cards: self.cards.len(),
            pages,
        }
    }

    /// Render to a PDF file at `output`
    ///
    /// Returns [`Generation::Empty`] without touching the filesystem when
    /// there is nothing to draw.
    pub fn generate(&self, output: &Path) -> CardResult<Generation> {
        if self.cards.is_empty() {
            warn!("No room cards to print; no file generated");
            return Ok(Generation::Empty);
        }
        self.config.validate()?;

        let geometry = &self.config.geometry;
        let mut canvas = PdfCanvas::new(geometry.page_width(), geometry.page_height());
        let summary = self.render(&mut canvas);
        let pages = canvas.save(output)?;

        Ok(Generation::Written {
            path: output.to_path_buf(),
            cards: summary.cards,
            pages,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CommandRecorder;

    fn schedule(key: &str) -> ScheduleEntry {
        ScheduleEntry {
            room_key: key.to_string(),
            full_cleaning: "LUN 9:00".to_string(),
            partial_cleaning_1: "MER 10:00".to_string(),
            partial_cleaning_2: "VEN 11:00".to_string(),
        }
    }

    fn document(keys: &[&str]) -> RoomCardDocument {
        let occupants: Vec<_> = keys
            .iter()
            .map(|k| OccupantRecord::new(k, &format!("Ospite {k}"), ""))
            .collect();
        let schedules: Vec<_> = keys.iter().map(|k| schedule(k)).collect();
        RoomCardDocument::from_records(&occupants, &schedules, Config::default())
    }

    fn keys(doc: &RoomCardDocument) -> Vec<&str> {
        doc.cards().iter().map(|c| c.room_key()).collect()
    }

    #[test]
    fn test_select_known_and_unknown() {
        let mut doc = document(&["1", "2", "3"]);
        doc.select(Some("2,9"));
        assert_eq!(keys(&doc), vec!["2"]);
        assert_eq!(doc.diagnostics(), &[Diagnostic::UnknownRoom("9".to_string())]);
    }

    #[test]
    fn test_blank_selection_keeps_everything() {
        for selection in [None, Some(""), Some("  "), Some(" , ,")] {
            let mut doc = document(&["1", "2", "3"]);
            doc.select(selection);
            assert_eq!(keys(&doc), vec!["1", "2", "3"]);
            assert!(doc.diagnostics().is_empty());
        }
    }

    #[test]
    fn test_selection_preserves_dataset_order() {
        let mut doc = document(&["1", "2", "3"]);
        doc.select(Some(" 3 , 1"));
        assert_eq!(keys(&doc), vec!["1", "3"]);
    }

    #[test]
    fn test_selection_matching_nothing_empties() {
        let mut doc = document(&["1", "2"]);
        doc.select(Some("7"));
        assert!(doc.cards().is_empty());
        assert_eq!(doc.diagnostics().len(), 1);
    }

    #[test]
    fn test_render_breaks_pages() {
        let doc = document(&["1", "2", "3", "4", "5"]);
        let mut rec = CommandRecorder::new();
        let summary = doc.render(&mut rec);
        assert_eq!(summary, RenderSummary { cards: 5, pages: 3 });
        assert_eq!(rec.page_breaks(), 2);
    }

    #[test]
    fn test_render_is_repeatable() {
        let doc = document(&["1", "2", "3"]);
        let mut first = CommandRecorder::new();
        let mut second = CommandRecorder::new();
        doc.render(&mut first);
        doc.render(&mut second);
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn test_empty_render_issues_nothing() {
        let mut doc = document(&["1"]);
        doc.select(Some("2"));
        let mut rec = CommandRecorder::new();
        let summary = doc.render(&mut rec);
        assert_eq!(summary.pages, 0);
        assert!(rec.commands().is_empty());
    }

    #[test]
    fn test_generate_empty_writes_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cartellini_stanze.pdf");
        let mut doc = document(&["1"]);
        doc.select(Some("42"));
        assert_eq!(doc.generate(&output).unwrap(), Generation::Empty);
        assert!(!output.exists());
    }

    #[test]
    fn test_generate_writes_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("cartellini_stanze.pdf");
        let doc = document(&["1", "2", "3"]);
        match doc.generate(&output).unwrap() {
            Generation::Written { path, cards, pages } => {
                assert_eq!(path, output);
                assert_eq!(cards, 3);
                assert_eq!(pages, 2);
            }
            Generation::Empty => panic!("expected a document"),
        }
        let bytes = std::fs::read(&output).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }
}
