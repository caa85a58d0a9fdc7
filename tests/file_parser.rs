use std::{fs, path::PathBuf};

use mesonet::{parse_file, read_file, Config, Error, MesonetFile, Parameter, TimeComparable};
use time::macros::{date, datetime};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name)
}

#[test]
fn parses_a_station_day() {
    let file = read_file(fixture("20180102stil.mts"), &Config::default()).unwrap();
    assert_eq!(file.date(), date!(2018 - 01 - 02));
    assert_eq!(file.header_timestamp_string(), "2018-01-02T00:00:00 UTC");
    assert_eq!(file.columns().station(), 0);
    assert_eq!(file.columns().time(), 2);
    assert_eq!(file.columns().parameter(Parameter::Srad), 9);
    assert_eq!(file.columns().parameter(Parameter::Ta9m), 10);

    let records = file.records();
    assert_eq!(records.len(), 7);
    assert!(records.iter().all(|record| record.station_id() == "STIL"));

    let peak = &records[4];
    assert_eq!(peak.minute_offset(), 1130);
    assert_eq!((peak.hour(), peak.minute()), (18, 50));
    assert_eq!(peak.measurement(Parameter::Srad).value(), 447.0);
    assert_eq!(peak.measurement_by_name("tair").unwrap().value(), -6.6);
    assert!(peak.older_than("2018-01-02T18:51:00 UTC").unwrap());
}

#[test]
fn records_keep_file_order() {
    let records = parse_file(fixture("20180102okce.mts")).unwrap();
    let offsets: Vec<i32> = records.iter().map(|record| record.minute_offset()).collect();
    assert_eq!(offsets, [0, 300, 485, 500, 700, 1130, 1300, 1435]);
    assert_eq!(records[3].timestamp(), datetime!(2018-01-02 8:20 UTC));
}

#[test]
fn bad_copyright_yields_no_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("20180102stil.mts");
    let contents = fs::read_to_string(fixture("20180102stil.mts")).unwrap();
    fs::write(&path, contents.replacen("101", "100", 1)).unwrap();

    match parse_file(&path) {
        Err(Error::InvalidCopyright { found }) => assert_eq!(found, "100"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn missing_file_is_reported_with_a_timestamp() {
    let path = fixture("19991231nope.mts");
    let err = parse_file(&path).unwrap_err();
    assert!(matches!(err, Error::FileNotFound { .. }));

    let message = err.to_string();
    assert!(message.starts_with('['), "{message}");
    assert!(message.contains(" UTC] file "), "{message}");
    assert!(message.ends_with("19991231nope.mts does not exist"), "{message}");
}

#[test]
fn string_and_file_parsing_agree() {
    let path = fixture("20180102okcn.mts");
    let contents = fs::read_to_string(&path).unwrap();
    let from_str: MesonetFile = contents.parse().unwrap();
    assert_eq!(from_str.records(), parse_file(&path).unwrap().as_slice());
}
