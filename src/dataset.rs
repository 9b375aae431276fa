//! Occupant and schedule datasets
//!
//! Both files are `;`-separated with a header row. They are read fully into
//! memory before anything is rendered.

use std::path::Path;

use csv::StringRecord;
use log::debug;
use serde::Serialize;

use crate::error::{CardError, CardResult};
use crate::unicode_utils::decode_dataset;

const OCCUPANT_COLUMNS: [&str; 3] = ["CAMERA", "STUDENTE 1", "STUDENTE 2"];
const SCHEDULE_COLUMNS: [&str; 7] = ["CAMERA", "C", "C-ORE", "R1", "R1-ORE", "R2", "R2-ORE"];

/// One row of the occupant dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OccupantRecord {
    #[serde(rename = "CAMERA")]
    pub room_key: String,
    #[serde(rename = "STUDENTE 1")]
    pub occupant_1: String,
    #[serde(rename = "STUDENTE 2")]
    pub occupant_2: String,
}

impl OccupantRecord {
    pub fn new(room_key: &str, occupant_1: &str, occupant_2: &str) -> Self {
        Self {
            room_key: room_key.trim().to_string(),
            occupant_1: occupant_1.trim().to_string(),
            occupant_2: occupant_2.trim().to_string(),
        }
    }
}

/// Housekeeping schedule of one room
///
/// Each field is the day flag and the time joined by a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleEntry {
    pub room_key: String,
    pub full_cleaning: String,
    pub partial_cleaning_1: String,
    pub partial_cleaning_2: String,
}

/// Header positions of the expected columns
///
/// The first column is the room key and must be present. Other columns may
/// be absent from the header or cut short on a row; they read as empty.
struct Columns<const N: usize> {
    indexes: [Option<usize>; N],
}

impl<const N: usize> Columns<N> {
    fn locate(headers: &StringRecord, names: [&str; N]) -> CardResult<Self> {
        let indexes = names.map(|name| headers.iter().position(|h| h == name));
        if indexes[0].is_none() {
            return Err(CardError::MissingColumn(names[0].to_string()));
        }
        Ok(Self { indexes })
    }

    fn field<'r>(&self, record: &'r StringRecord, column: usize) -> &'r str {
        self.indexes[column]
            .and_then(|i| record.get(i))
            .unwrap_or("")
    }
}

fn reader(text: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(text.as_bytes())
}

/// Parse occupant rows from dataset text
pub fn parse_occupants(text: &str) -> CardResult<Vec<OccupantRecord>> {
    let mut rdr = reader(text);
    let columns = Columns::locate(rdr.headers()?, OCCUPANT_COLUMNS)?;
    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(OccupantRecord::new(
            columns.field(&record, 0),
            columns.field(&record, 1),
            columns.field(&record, 2),
        ));
    }
    Ok(rows)
}

/// Parse schedule rows from dataset text
pub fn parse_schedules(text: &str) -> CardResult<Vec<ScheduleEntry>> {
    let mut rdr = reader(text);
    let columns = Columns::locate(rdr.headers()?, SCHEDULE_COLUMNS)?;
    let joined = |record: &StringRecord, flag: usize| {
        format!("{} {}", columns.field(record, flag), columns.field(record, flag + 1))
    };
    let mut entries = Vec::new();
    for record in rdr.records() {
        let record = record?;
        entries.push(ScheduleEntry {
            room_key: columns.field(&record, 0).trim().to_string(),
            full_cleaning: joined(&record, 1),
            partial_cleaning_1: joined(&record, 3),
            partial_cleaning_2: joined(&record, 5),
        });
    }
    Ok(entries)
}

/// Attach the dataset path to a low-level CSV error
fn in_dataset(path: &Path, err: CardError) -> CardError {
    match err {
        CardError::CsvError(source) => CardError::DatasetParse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}

fn read_dataset(path: &Path) -> CardResult<String> {
    let bytes = std::fs::read(path).map_err(|source| CardError::DatasetRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_dataset(&bytes))
}

pub fn load_occupants(path: &Path) -> CardResult<Vec<OccupantRecord>> {
    let text = read_dataset(path)?;
    let records = parse_occupants(&text).map_err(|e| in_dataset(path, e))?;
    debug!("Loaded {} occupant rows from {}", records.len(), path.display());
    Ok(records)
}

pub fn load_schedules(path: &Path) -> CardResult<Vec<ScheduleEntry>> {
    let text = read_dataset(path)?;
    let entries = parse_schedules(&text).map_err(|e| in_dataset(path, e))?;
    debug!("Loaded {} schedule rows from {}", entries.len(), path.display());
    Ok(entries)
}

/// Serialize occupant rows with the dataset header
pub fn write_occupants<W: std::io::Write>(writer: W, records: &[OccupantRecord]) -> CardResult<()> {
    let mut out = csv::WriterBuilder::new().delimiter(b';').from_writer(writer);
    for record in records {
        out.serialize(record)?;
    }
    out.flush()?;
    Ok(())
}

/// Rewrite the occupant dataset (UTF-8)
pub fn save_occupants(path: &Path, records: &[OccupantRecord]) -> CardResult<()> {
    let mut buf = Vec::new();
    write_occupants(&mut buf, records)?;
    std::fs::write(path, buf)?;
    Ok(())
}
