//! Occupant dataset maintenance: listing rooms and changing who lives there

use std::fmt::Write as _;

use crate::dataset::OccupantRecord;

/// Marker that removes an occupant instead of replacing it
pub const CLEAR_MARKER: &str = "-";

/// What an occupant update did to the dataset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Existing room changed
    Updated,
    /// Existing room already had the requested names
    Unchanged,
    /// Room was not in the dataset and has been appended
    Added,
    /// Neither name was given
    NothingRequested,
}

impl UpdateOutcome {
    /// Whether the dataset must be written back
    pub fn is_modified(self) -> bool {
        matches!(self, UpdateOutcome::Updated | UpdateOutcome::Added)
    }
}

fn resolve(input: &str) -> String {
    if input.trim() == CLEAR_MARKER {
        String::new()
    } else {
        input.trim().to_string()
    }
}

/// Change the occupants of `room`
///
/// `None`, an empty string or only spaces leave a slot alone, [`CLEAR_MARKER`] empties
/// it, anything else replaces it. Only the first row for the room is
/// touched; an unknown room is appended.
pub fn apply_occupant_update(
    records: &mut Vec<OccupantRecord>,
    room: &str,
    first: Option<&str>,
    second: Option<&str>,
) -> UpdateOutcome {
    let room = room.trim();
    let first = first.filter(|s| !s.trim().is_empty());
    let second = second.filter(|s| !s.trim().is_empty());
    if first.is_none() && second.is_none() {
        return UpdateOutcome::NothingRequested;
    }

    match records.iter_mut().find(|r| r.room_key == room) {
        Some(record) => {
            let mut changed = false;
            for (slot, input) in [(&mut record.occupant_1, first), (&mut record.occupant_2, second)] {
                if let Some(input) = input {
                    let value = resolve(input);
                    if *slot != value {
                        *slot = value;
                        changed = true;
                    }
                }
            }
            if changed {
                UpdateOutcome::Updated
            } else {
                UpdateOutcome::Unchanged
            }
        }
        None => {
            records.push(OccupantRecord::new(
                room,
                &first.map(resolve).unwrap_or_default(),
                &second.map(resolve).unwrap_or_default(),
            ));
            UpdateOutcome::Added
        }
    }
}

/// Text table of rooms and occupants, optionally for a single room
pub fn format_rooms(records: &[OccupantRecord], room: Option<&str>) -> String {
    let rule = "=".repeat(60);
    let mut out = String::new();
    let _ = writeln!(out, " {rule}");
    let _ = writeln!(out, " {:<6}   {:<20}   {:<20}", "CAMERA", "STUDENTE 1", "STUDENTE 2");
    let _ = writeln!(out, " {}", "-".repeat(60));
    for record in records
        .iter()
        .filter(|r| room.map_or(true, |k| r.room_key == k.trim()))
    {
        let _ = writeln!(
            out,
            " {:<6}   {:<20}   {:<20}",
            record.room_key, record.occupant_1, record.occupant_2
        );
    }
    let _ = writeln!(out, " {rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<OccupantRecord> {
        vec![
            OccupantRecord::new("1", "Mario Rossi", "Luca Bianchi"),
            OccupantRecord::new("2", "Anna Verdi", ""),
        ]
    }

    #[test]
    fn test_replace_one_slot() {
        let mut records = roster();
        let outcome = apply_occupant_update(&mut records, "1", None, Some("Paolo Neri"));
        assert_eq!(outcome, UpdateOutcome::Updated);
        assert_eq!(records[0].occupant_1, "Mario Rossi");
        assert_eq!(records[0].occupant_2, "Paolo Neri");
    }

    #[test]
    fn test_clear_marker_empties_slot() {
        let mut records = roster();
        let outcome = apply_occupant_update(&mut records, "1", Some("-"), None);
        assert_eq!(outcome, UpdateOutcome::Updated);
        assert_eq!(records[0].occupant_1, "");
    }

    #[test]
    fn test_same_names_unchanged() {
        let mut records = roster();
        let outcome = apply_occupant_update(&mut records, "2", Some("Anna Verdi"), Some("-"));
        assert_eq!(outcome, UpdateOutcome::Unchanged);
        assert!(!outcome.is_modified());
    }

    #[test]
    fn test_unknown_room_appended() {
        let mut records = roster();
        let outcome = apply_occupant_update(&mut records, "9", Some("Giulia"), Some("-"));
        assert_eq!(outcome, UpdateOutcome::Added);
        assert_eq!(records.len(), 3);
        assert_eq!(records[2], OccupantRecord::new("9", "Giulia", ""));
    }

    #[test]
    fn test_no_input_does_nothing() {
        let mut records = roster();
        assert_eq!(
            apply_occupant_update(&mut records, "9", Some(""), None),
            UpdateOutcome::NothingRequested
        );
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_blank_names_leave_slots_alone() {
        let mut records = roster();
        assert_eq!(
            apply_occupant_update(&mut records, "1", Some("   "), Some("\t")),
            UpdateOutcome::NothingRequested
        );
        assert_eq!(records[0], OccupantRecord::new("1", "Mario Rossi", "Luca Bianchi"));

        let outcome = apply_occupant_update(&mut records, "1", Some("  "), Some("Sara Blu"));
        assert_eq!(outcome, UpdateOutcome::Updated);
        assert_eq!(records[0], OccupantRecord::new("1", "Mario Rossi", "Sara Blu"));
    }

    #[test]
    fn test_format_single_room() {
        let table = format_rooms(&roster(), Some("2"));
        assert!(table.contains("Anna Verdi"));
        assert!(!table.contains("Mario Rossi"));
        assert!(table.contains("CAMERA"));
    }
}
