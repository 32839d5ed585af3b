use std::fs;

use mars_export::series::{HEADER, Row, write_rows};
use mars_export::{json, writer_for_path};
use serde::Serialize;

#[test]
fn series_csv_has_header_and_rows() {
    let mut buffer = Vec::new();
    let rows = vec![
        Row {
            utc: "2021-02-18T20:55:00Z",
            msd: 52304.5,
            mtc: "10:53:23",
            ls_deg: 5.65,
            mars_year: 34,
            season: "northern spring",
        },
        Row {
            utc: "2021-02-19T20:55:00Z",
            msd: 52305.5,
            mtc: "10:14:05",
            ls_deg: 6.1,
            mars_year: 34,
            season: "northern spring",
        },
    ];
    write_rows(&mut buffer, rows).expect("csv write");

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], HEADER.join(","));
    assert_eq!(
        lines[1],
        "2021-02-18T20:55:00Z,52304.5,10:53:23,5.65,34,northern spring"
    );
}

#[test]
fn empty_series_still_writes_header() {
    let mut buffer = Vec::new();
    write_rows(&mut buffer, Vec::<Row<'_>>::new()).expect("csv write");
    assert_eq!(String::from_utf8(buffer).unwrap().trim_end(), HEADER.join(","));
}

#[derive(Serialize)]
struct Reading {
    mtc: &'static str,
    msd: f64,
}

#[test]
fn json_is_written_to_nested_path() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out/nested/snapshot.json");
    {
        let writer = writer_for_path(&path).expect("writer");
        json::write_pretty(
            writer,
            &Reading {
                mtc: "12:00:00",
                msd: 1.5,
            },
        )
        .expect("json write");
    }
    let text = fs::read_to_string(&path).expect("json file");
    let value: serde_json::Value = serde_json::from_str(&text).expect("valid json");
    assert_eq!(value["mtc"], "12:00:00");
    assert_eq!(value["msd"], 1.5);
}
