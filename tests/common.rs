#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, isolated from the user's real config and colors.
pub fn rdt() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("rdowntime_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rdowntime");
    cmd.env("HOME", &home).env("NO_COLOR", "1");
    cmd
}

/// Write `content` to a fresh CSV file inside the system temp dir.
pub fn write_fixture(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdowntime_events.csv", name));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write fixture");
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Two machines on Monday 2025-03-03 and one on Friday 2025-03-07.
///
/// PRESS-1 Monday: active from 06:00 to 11:00 every two minutes, then silent
/// until 13:00, then active every two minutes until the end of the shift.
pub fn sample_events() -> String {
    let mut csv = String::from("Fecha,Id Equipo,Parcial\n");

    let mut minute = 6 * 60;
    while minute < 16 * 60 {
        let in_silence = (11 * 60 + 1..13 * 60).contains(&minute);
        if !in_silence {
            csv.push_str(&format!(
                "2025-03-03 {:02}:{:02}:00,PRESS-1,1\n",
                minute / 60,
                minute % 60
            ));
        }
        minute += 2;
    }

    csv.push_str("2025-03-03 05:30:00,LATHE-2,\n");
    csv.push_str("2025-03-07 05:30:00,press-1,\n");
    csv
}

/// Fixture file with `sample_events()`.
pub fn sample_fixture(name: &str) -> String {
    write_fixture(name, &sample_events())
}
