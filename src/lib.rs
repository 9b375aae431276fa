//! Room card generator
//!
//! Merges a room occupant dataset with a housekeeping schedule dataset and
//! renders one printable card per room into a paginated PDF built with
//! pdf-writer.

pub mod canvas;
pub mod config;
pub mod dataset;
pub mod document;
pub mod error;
pub mod font_registry;
pub mod layout;
pub mod merge;
pub mod paginate;
pub mod roster;
pub mod surface;
pub mod text_layout;
pub mod types;
pub mod unicode_utils;

pub use config::{CardStyle, Config, LayoutGeometry};
pub use document::{Generation, RenderSummary, RoomCardDocument};
pub use error::{CardError, CardResult, Diagnostic};
pub use merge::{RoomCard, Schedule, NOT_AVAILABLE};
pub use surface::{CommandRecorder, DrawCommand, DrawSurface};
