//! Load strips line terminators; save joins with \n and no trailing newline.

mod common;

use hosts_merge::document;
use hosts_merge::report::NullReporter;
use std::fs;

#[test]
fn load_normalizes_line_endings() {
    let dir = common::temp_dir();
    let path = dir.path().join("hosts");
    fs::write(&path, "127.0.0.1 localhost\r\n::1 localhost\n\n  10.0.0.1  spaced  \n").unwrap();

    let lines = document::load(&path, &NullReporter).unwrap();
    assert_eq!(
        lines,
        common::lines(&["127.0.0.1 localhost", "::1 localhost", "", "  10.0.0.1  spaced  "])
    );
}

#[test]
fn save_has_no_trailing_newline() {
    let dir = common::temp_dir();
    let path = dir.path().join("hosts");
    document::save(&path, &common::lines(&["a", "b"]), &NullReporter).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb");
}

#[test]
fn load_missing_file_names_path() {
    let dir = common::temp_dir();
    let path = dir.path().join("nope");
    let err = document::load(&path, &NullReporter).unwrap_err();
    assert!(format!("{err:#}").contains("nope"));
}

#[test]
fn load_strips_bare_carriage_return_on_last_line() {
    let dir = common::temp_dir();
    let path = dir.path().join("hosts");
    fs::write(&path, "a\r\nb\r").unwrap();

    let lines = document::load(&path, &NullReporter).unwrap();
    assert_eq!(lines, common::lines(&["a", "b"]));

    document::save(&path, &lines, &NullReporter).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb");
}
