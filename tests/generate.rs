use std::fs;
use std::path::Path;

use room_cards::{
    CardError, CommandRecorder, Config, Diagnostic, Generation, RoomCardDocument, NOT_AVAILABLE,
};

const OCCUPANTS: &str = "CAMERA;STUDENTE 1;STUDENTE 2\n\
1;Mario Rossi;Luca Bianchi\n\
2;Anna Verdi;\n\
3;;\n\
4;Giulia Neri;Sara Blu\n\
5;Paolo Gialli;\n";

const SCHEDULES: &str = "CAMERA;C;C-ORE;R1;R1-ORE;R2;R2-ORE\n\
1;LUN;9:00;MER;10:00;VEN;11:00\n\
2;MAR;9:30;GIO;10:30;SAB;11:30\n\
3;MER;8:00;VEN;8:30;DOM;9:00\n\
4;GIO;14:00;SAB;15:00;LUN;16:00\n";

fn write_datasets(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
    let occupants = dir.join("nomiStudenti.csv");
    let schedules = dir.join("datiStanze.csv");
    fs::write(&occupants, OCCUPANTS).unwrap();
    fs::write(&schedules, SCHEDULES).unwrap();
    (occupants, schedules)
}

#[test]
fn full_run_writes_three_pages() {
    let dir = tempfile::tempdir().unwrap();
    let (occupants, schedules) = write_datasets(dir.path());
    let output = dir.path().join("cartellini_stanze.pdf");

    let doc = RoomCardDocument::load(&occupants, &schedules, Config::default()).unwrap();
    assert_eq!(doc.cards().len(), 5);
    assert_eq!(
        doc.diagnostics(),
        &[Diagnostic::MissingSchedule("5".to_string())]
    );
    let room_5 = &doc.cards()[4];
    assert_eq!(room_5.schedule().partial_2, NOT_AVAILABLE);
    assert!(doc.cards()[2].occupant_names().is_empty());

    let generation = doc.generate(&output).unwrap();
    assert_eq!(
        generation,
        Generation::Written {
            path: output.clone(),
            cards: 5,
            pages: 3
        }
    );
    let bytes = fs::read(&output).unwrap();
    let text = String::from_utf8_lossy(&bytes);
    assert!(text.contains("/Count 3"));
}

#[test]
fn selection_matching_nothing_leaves_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let (occupants, schedules) = write_datasets(dir.path());
    let output = dir.path().join("cartellini_stanze.pdf");

    let mut doc = RoomCardDocument::load(&occupants, &schedules, Config::default()).unwrap();
    doc.select(Some("99, 100"));
    assert_eq!(doc.generate(&output).unwrap(), Generation::Empty);
    assert!(!output.exists());
    assert!(doc
        .diagnostics()
        .contains(&Diagnostic::UnknownRoom("100".to_string())));
}

#[test]
fn identical_inputs_give_identical_commands_and_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let (occupants, schedules) = write_datasets(dir.path());

    let run = |name: &str| {
        let doc = RoomCardDocument::load(&occupants, &schedules, Config::default()).unwrap();
        let mut rec = CommandRecorder::new();
        doc.render(&mut rec);
        let output = dir.path().join(name);
        doc.generate(&output).unwrap();
        (rec.into_commands(), fs::read(output).unwrap())
    };

    let (commands_a, pdf_a) = run("a.pdf");
    let (commands_b, pdf_b) = run("b.pdf");
    assert_eq!(commands_a, commands_b);
    assert_eq!(pdf_a, pdf_b);
}

#[test]
fn missing_dataset_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let (occupants, _) = write_datasets(dir.path());
    let missing = dir.path().join("nope.csv");

    let err = RoomCardDocument::load(&occupants, &missing, Config::default())
        .err()
        .unwrap();
    assert!(matches!(err, CardError::DatasetRead { .. }));
}
