mod common;
use common::{rdt, sample_fixture, write_fixture};
use predicates::prelude::*;
use predicates::str::contains;

#[test]
fn test_analyze_reports_lunch_split() {
    let data = sample_fixture("analyze_lunch");

    rdt()
        .args(["--data", &data, "analyze", "press-1", "2025-03-03"])
        .assert()
        .success()
        .stdout(contains("Machine PRESS-1"))
        .stdout(contains("2 intervals"))
        .stdout(contains("11:00:00"))
        .stdout(contains("12:40:00"))
        .stdout(contains("80.0 min"))
        .stdout(contains("15.38%"));
}

#[test]
fn test_analyze_accepts_day_first_date() {
    let data = sample_fixture("analyze_day_first");

    rdt()
        .args(["--data", &data, "analyze", "LATHE-2", "03/03/2025"])
        .assert()
        .success()
        .stdout(contains("520.0 min"))
        .stdout(contains("100.00%"));
}

#[test]
fn test_analyze_no_data_is_not_an_error() {
    let data = sample_fixture("analyze_no_data");

    rdt()
        .args(["--data", &data, "analyze", "LATHE-2", "2025-03-07"])
        .assert()
        .success()
        .stdout(contains("No events for machine LATHE-2 on 2025-03-07"));
}

#[test]
fn test_analyze_rejects_threshold_out_of_range() {
    let data = sample_fixture("analyze_bad_threshold");

    rdt()
        .args(["--data", &data, "analyze", "PRESS-1", "2025-03-03", "-t", "31"])
        .assert()
        .failure()
        .stderr(contains("31"));
}

#[test]
fn test_analyze_rejects_bad_date() {
    let data = sample_fixture("analyze_bad_date");

    rdt()
        .args(["--data", &data, "analyze", "PRESS-1", "2025-13-45"])
        .assert()
        .failure()
        .stderr(contains("2025-13-45"));
}

#[test]
fn test_analyze_with_counter_and_strip() {
    let data = sample_fixture("analyze_counter_strip");

    rdt()
        .args([
            "--data",
            &data,
            "analyze",
            "PRESS-1",
            "2025-03-03",
            "--counter",
            "--strip",
        ])
        .assert()
        .success()
        .stdout(contains("Partial counter (in shift): 241"))
        .stdout(contains("06:00"))
        .stdout(contains("16:00"));
}

#[test]
fn test_list_machines_and_dates() {
    let data = sample_fixture("list_all");

    rdt()
        .args(["--data", &data, "list"])
        .assert()
        .success()
        .stdout(contains("PRESS-1"))
        .stdout(contains("LATHE-2"));

    rdt()
        .args(["--data", &data, "list", "--machine", "press-1"])
        .assert()
        .success()
        .stdout(contains("2025-03-03"))
        .stdout(contains("2025-03-07"));
}

#[test]
fn test_batch_covers_every_machine_and_date() {
    let data = sample_fixture("batch_all");

    rdt()
        .args(["--data", &data, "batch"])
        .assert()
        .success()
        .stdout(contains("PRESS-1"))
        .stdout(contains("LATHE-2"))
        .stdout(contains("no events"))
        .stdout(contains("15.38"));
}

#[test]
fn test_batch_skip_empty_and_bad_period() {
    let data = sample_fixture("batch_skip_empty");

    rdt()
        .args(["--data", &data, "batch", "--skip-empty", "-m", "lathe-2"])
        .assert()
        .success()
        .stdout(contains("LATHE-2"))
        .stdout(contains("no events").not());

    rdt()
        .args(["--data", &data, "batch", "--period", "2025-99"])
        .assert()
        .failure();
}

#[test]
fn test_missing_columns_are_reported() {
    let data = write_fixture("missing_columns", "when,who\n2025-03-03 09:00,M1\n");

    rdt()
        .args(["--data", &data, "list"])
        .assert()
        .failure()
        .stderr(contains("column"));
}

#[test]
fn test_missing_data_file_is_reported() {
    rdt()
        .args(["--data", "/nonexistent/rdowntime/events.csv", "list"])
        .assert()
        .failure();
}

#[test]
fn test_init_in_test_mode_writes_nothing() {
    rdt()
        .args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));
}

#[test]
fn test_strip_cell_out_of_range_is_rejected() {
    let data = sample_fixture("strip_cell_range");

    for cell in ["0", "601", "9223372036854775807"] {
        rdt()
            .args([
                "--data",
                &data,
                "analyze",
                "PRESS-1",
                "2025-03-03",
                "--strip",
                "--cell",
                cell,
            ])
            .assert()
            .code(2)
            .stderr(contains("--cell"));
    }
}

#[test]
fn test_batch_refuses_oversized_range() {
    let data = sample_fixture("batch_huge_range");

    rdt()
        .args(["--data", &data, "batch", "--period", "0001:9999"])
        .assert()
        .failure()
        .stderr(contains("limit"));
}
