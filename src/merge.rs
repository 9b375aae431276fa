//! Joining occupants with housekeeping schedules

use std::collections::HashMap;

use log::warn;

use crate::dataset::{OccupantRecord, ScheduleEntry};
use crate::error::Diagnostic;

/// Placeholder for schedule data that is not available
pub const NOT_AVAILABLE: &str = "N/D";

/// Cleaning times printed on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub full: String,
    pub partial_1: String,
    pub partial_2: String,
}

impl Schedule {
    pub fn not_available() -> Self {
        Self {
            full: NOT_AVAILABLE.to_string(),
            partial_1: NOT_AVAILABLE.to_string(),
            partial_2: NOT_AVAILABLE.to_string(),
        }
    }
}

impl From<&ScheduleEntry> for Schedule {
    fn from(entry: &ScheduleEntry) -> Self {
        Self {
            full: entry.full_cleaning.clone(),
            partial_1: entry.partial_cleaning_1.clone(),
            partial_2: entry.partial_cleaning_2.clone(),
        }
    }
}

/// Everything printed on one card; immutable once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCard {
    room_key: String,
    occupant_names: Vec<String>,
    schedule: Schedule,
}

impl RoomCard {
    /// Build a card; blank names are dropped, at most two are kept
    pub fn new(room_key: &str, names: [&str; 2], schedule: Schedule) -> Self {
        let occupant_names = names
            .iter()
            .map(|n| n.trim())
            .filter(|n| !n.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            room_key: room_key.trim().to_string(),
            occupant_names,
            schedule,
        }
    }

    pub fn room_key(&self) -> &str {
        &self.room_key
    }

    pub fn occupant_names(&self) -> &[String] {
        &self.occupant_names
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }
}

/// Merge output: cards in occupant order plus lookup misses
#[derive(Debug, Default)]
pub struct Merged {
    pub cards: Vec<RoomCard>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Schedule entries indexed by trimmed room key, first occurrence wins
pub struct ScheduleIndex<'a> {
    by_key: HashMap<&'a str, &'a ScheduleEntry>,
}

impl<'a> ScheduleIndex<'a> {
    pub fn build(schedules: &'a [ScheduleEntry]) -> Self {
        let mut by_key = HashMap::with_capacity(schedules.len());
        for entry in schedules {
            let key = entry.room_key.trim();
            if by_key.contains_key(key) {
                warn!("Duplicate schedule for room {key}; keeping the first one");
                continue;
            }
            by_key.insert(key, entry);
        }
        Self { by_key }
    }

    pub fn get(&self, room_key: &str) -> Option<&'a ScheduleEntry> {
        self.by_key.get(room_key.trim()).copied()
    }
}

/// Join every occupant record with its schedule
///
/// Rooms without a schedule get [`NOT_AVAILABLE`] in all three fields and a
/// [`Diagnostic::MissingSchedule`].
pub fn merge(occupants: &[OccupantRecord], schedules: &[ScheduleEntry]) -> Merged {
    let index = ScheduleIndex::build(schedules);
    let mut merged = Merged::default();

    for record in occupants {
        let room_key = record.room_key.trim();
        let schedule = match index.get(room_key) {
            Some(entry) => Schedule::from(entry),
            None => {
                warn!("Schedule not found for room {room_key}, using defaults");
                merged
                    .diagnostics
                    .push(Diagnostic::MissingSchedule(room_key.to_string()));
                Schedule::not_available()
            }
        };
        merged.cards.push(RoomCard::new(
            room_key,
            [record.occupant_1.as_str(), record.occupant_2.as_str()],
            schedule,
        ));
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(key: &str, full: &str) -> ScheduleEntry {
        ScheduleEntry {
            room_key: key.to_string(),
            full_cleaning: full.to_string(),
            partial_cleaning_1: format!("{full} p1"),
            partial_cleaning_2: format!("{full} p2"),
        }
    }

    #[test]
    fn test_matched_schedule_copied_verbatim() {
        let schedules = vec![entry("1", "LUN 9:00"), entry("2", "MAR 9:30")];
        let occupants = vec![OccupantRecord::new("2", "Anna", "Marta")];

        let merged = merge(&occupants, &schedules);
        assert!(merged.diagnostics.is_empty());
        let card = &merged.cards[0];
        assert_eq!(card.schedule().full, "MAR 9:30");
        assert_eq!(card.schedule().partial_1, "MAR 9:30 p1");
        assert_eq!(card.schedule().partial_2, "MAR 9:30 p2");
    }

    #[test]
    fn test_missing_schedule_uses_sentinel() {
        let merged = merge(&[OccupantRecord::new("5", "Anna", "")], &[entry("1", "LUN")]);
        let card = &merged.cards[0];
        assert_eq!(card.schedule(), &Schedule::not_available());
        assert_eq!(card.schedule().full, "N/D");
        assert_eq!(
            merged.diagnostics,
            vec![Diagnostic::MissingSchedule("5".to_string())]
        );
    }

    #[test]
    fn test_keys_match_after_trimming() {
        let schedules = vec![entry(" 3 ", "GIO")];
        let occupants = vec![OccupantRecord {
            room_key: "3  ".to_string(),
            occupant_1: "Paolo".to_string(),
            occupant_2: String::new(),
        }];
        let merged = merge(&occupants, &schedules);
        assert!(merged.diagnostics.is_empty());
        assert_eq!(merged.cards[0].room_key(), "3");
    }

    #[test]
    fn test_first_duplicate_schedule_wins() {
        let schedules = vec![entry("1", "first"), entry("1", "second")];
        let merged = merge(&[OccupantRecord::new("1", "", "")], &schedules);
        assert_eq!(merged.cards[0].schedule().full, "first");
    }

    #[test]
    fn test_blank_names_removed() {
        let cases = [
            (["Anna", "Marta"], vec!["Anna", "Marta"]),
            (["", "Marta"], vec!["Marta"]),
            (["  ", "\t"], vec![]),
            (["Anna", " "], vec!["Anna"]),
        ];
        for (names, expected) in cases {
            let card = RoomCard::new("1", names, Schedule::not_available());
            assert!(card.occupant_names().len() <= 2);
            assert_eq!(card.occupant_names(), expected.as_slice());
        }
    }

    #[test]
    fn test_output_order_follows_occupants() {
        let schedules = vec![entry("1", "a"), entry("2", "b"), entry("3", "c")];
        let occupants = vec![
            OccupantRecord::new("3", "x", ""),
            OccupantRecord::new("1", "y", ""),
            OccupantRecord::new("2", "z", ""),
        ];
        let keys: Vec<_> = merge(&occupants, &schedules)
            .cards
            .iter()
            .map(|c| c.room_key().to_string())
            .collect();
        assert_eq!(keys, vec!["3", "1", "2"]);
    }
}
