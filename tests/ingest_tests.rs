use rdowntime::errors::AppError;
use rdowntime::ingest::{IngestOptions, load_file};
use std::env;
use std::fs;
use std::path::PathBuf;

fn fixture(name: &str, content: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("{}_rdowntime_ingest.csv", name));
    fs::write(&path, content).expect("write fixture");
    path
}

#[test]
fn semicolon_file_with_title_row_and_decimal_comma() {
    let path = fixture(
        "semicolon_title",
        "Planta Norte;;\n\
         ID Equipo;Fecha y Hora;Contador Parcial\n\
         cnc-7;03/03/2025 06:15;12,5\n\
         cnc-7;03-03-2025 06:20:30;-1\n\
         cnc-7;2025-03-03T06:25:00;\n",
    );
    let opts = IngestOptions {
        delimiter: b';',
        header_row: 1,
    };

    let out = load_file(&path, &opts).unwrap();

    assert_eq!(out.stats.rows, 3);
    assert_eq!(out.stats.dropped(), 0);
    assert!(out.events.iter().all(|e| e.machine == "CNC-7"));
    assert_eq!(out.events[0].partial, Some(12.5));
    assert_eq!(out.events[1].partial, Some(-1.0));
    assert_eq!(out.events[2].partial, None);
    assert_eq!(out.events[1].timestamp.format("%H:%M:%S").to_string(), "06:20:30");
}

#[test]
fn accented_headers_are_recognized() {
    let path = fixture("accented", "Fecha,Id Máquina\n2025-03-03 07:00,m1\n");

    let out = load_file(&path, &IngestOptions::default()).unwrap();
    assert_eq!(out.events.len(), 1);
    assert_eq!(out.events[0].machine, "M1");
}

#[test]
fn missing_file_is_an_io_error() {
    let path = env::temp_dir().join("rdowntime_ingest_does_not_exist.csv");
    fs::remove_file(&path).ok();

    let err = load_file(&path, &IngestOptions::default()).unwrap_err();
    assert!(matches!(err, AppError::Io(_)));
}
