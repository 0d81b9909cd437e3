use assert_cmd::Command;
use predicates::prelude::*;

use crate::common;

fn apt_filter() -> Command {
    Command::new(env!("CARGO_BIN_EXE_apt_filter"))
}

#[test]
fn shows_help() {
    apt_filter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("apt_filter"));
}

#[test]
fn counts_the_whole_dataset_without_constraints() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args(["--data", data.to_str().unwrap(), "--count-only"])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn district_constraint_narrows_the_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args(["--data", data.to_str().unwrap(), "--dong", "서초동", "--count-only"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn narrowed_price_range_drops_unpriced_complexes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args([
            "--data",
            data.to_str().unwrap(),
            "--min-avg-price",
            "100000",
            "--count-only",
        ])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn explicit_default_range_keeps_unpriced_complexes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args([
            "--data",
            data.to_str().unwrap(),
            "--min-avg-price",
            "60000",
            "--max-avg-price",
            "300000",
            "--count-only",
        ])
        .assert()
        .success()
        .stdout("7\n");
}

#[test]
fn table_output_lists_matching_names() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args(["--data", data.to_str().unwrap(), "--name", "래미안"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("서초래미안에스티지")
                .and(predicate::str::contains("방배래미안타워"))
                .and(predicate::str::contains("2 of 7 complexes")),
        );
}

#[test]
fn json_output_carries_a_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args([
            "--data",
            data.to_str().unwrap(),
            "--only-with-transactions",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"summary\"")
                .and(predicate::str::contains("\"matched\": 5"))
                .and(predicate::str::contains("\"total\": 7")),
        );
}

#[test]
fn csv_output_has_a_header_row() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args(["--data", data.to_str().unwrap(), "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "dong,name,avg_price,pyeong_price,transactions\n",
        ));
}

#[test]
fn top_limits_listed_rows_but_not_the_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args([
            "--data",
            data.to_str().unwrap(),
            "--format",
            "csv",
            "--sort",
            "avg-price",
            "--desc",
            "--top",
            "1",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("반포아크로리버")
                .and(predicate::str::contains("서초푸른마을").not()),
        );
}

#[test]
fn by_dong_appends_district_counts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args(["--data", data.to_str().unwrap(), "--by-dong"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[By District]").and(predicate::str::contains("서초동")));
}

#[test]
fn missing_dataset_aborts_with_a_diagnostic() {
    apt_filter()
        .args(["--data", "no/such/file.geojson", "--count-only"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read dataset"));
}

#[test]
fn inverted_range_aborts_with_a_diagnostic() {
    let dir = tempfile::tempdir().expect("tempdir");
    let data = common::write_dataset(dir.path());

    apt_filter()
        .args([
            "--data",
            data.to_str().unwrap(),
            "--min-avg-price",
            "200000",
            "--max-avg-price",
            "100000",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("average price"));
}
