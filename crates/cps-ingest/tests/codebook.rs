//! File-level tests for codebook loading.

use cps_ingest::read_codebook;
use cps_model::VariableLookup;

#[test]
fn reads_a_comma_delimited_codebook_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("varlist.csv");
    std::fs::write(
        &path,
        "name,variable label or new name,comments\n\
         PRTAGE,Age,\n\
         Work_Experience,Work experience,renamed from *PEMLR*\n\
         PRTAGE,Age (revised),\n",
    )
    .expect("write codebook");

    let records = read_codebook(&path).expect("read codebook");
    assert_eq!(records.len(), 3);

    let lookup = VariableLookup::from_records(&records);
    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.get("PRTAGE"), Some("Age (revised)"));
    assert_eq!(lookup.get("Work_Experience"), Some("Work experience"));
}

#[test]
fn reads_a_pipe_delimited_codebook_from_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("varlist.txt");
    std::fs::write(
        &path,
        "name|variable label or new name|comments\n\
         HOURLY_WAGE|Hourly wage|created from PRERNHLY\n",
    )
    .expect("write codebook");

    let records = read_codebook(&path).expect("read codebook");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "HOURLY_WAGE");
    assert_eq!(records[0].comments.as_deref(), Some("created from PRERNHLY"));
}

#[test]
fn missing_file_is_fatal() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let error = read_codebook(&dir.path().join("absent.csv")).unwrap_err();
    assert!(error.to_string().contains("read codebook"));
}
