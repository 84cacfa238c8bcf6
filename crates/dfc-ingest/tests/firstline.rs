//! File-backed tests for first-line extraction and record iteration.

use std::fs;

use dfc_ingest::{IngestError, RecordReader, first_line};
use dfc_model::Options;
use tempfile::tempdir;

#[test]
fn reads_first_line_from_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("data.csv");
    fs::write(&path, "id,name,dose\n1,alice,10\n2,bob,20\n").expect("write file");

    let opts = Options::default();
    let line = first_line(&path, &opts).expect("first line");
    assert_eq!(line, "id,name,dose");
}

#[test]
fn reads_first_line_from_bom_prefixed_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("bom.csv");
    fs::write(&path, b"\xEF\xBB\xBFid,name\n1,alice\n").expect("write file");

    let opts = Options::default();
    let line = first_line(&path, &opts).expect("first line");
    assert_eq!(line, "id,name");
}

#[test]
fn missing_file_is_an_open_error() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("absent.csv");

    let opts = Options::default();
    let err = first_line(&path, &opts).expect_err("must fail");
    assert!(matches!(err, IngestError::FileOpen { .. }));
}

#[test]
fn record_reader_streams_file_in_order() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("body.csv");
    fs::write(&path, "id,name\n1,alice\n\n2,bob").expect("write file");

    let opts = Options::default();
    let records: Vec<Vec<String>> = RecordReader::open(&path, &opts)
        .expect("open")
        .map(|record| record.expect("record"))
        .collect();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], vec!["id", "name"]);
    assert_eq!(records[2], vec![""]);
    assert_eq!(records[3], vec!["2", "bob"]);
}

#[test]
fn windows_1252_file_decodes_per_label() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("latin.csv");
    fs::write(&path, b"nom,ville\nren\xE9,montr\xE9al\n").expect("write file");

    let opts = Options::default().with_encoding("windows-1252");
    let records: Vec<Vec<String>> = RecordReader::open(&path, &opts)
        .expect("open")
        .map(|record| record.expect("record"))
        .collect();
    assert_eq!(records[1], vec!["ren\u{e9}", "montr\u{e9}al"]);
}
