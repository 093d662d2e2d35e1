mod common;

use common::*;
use std::process::{Command, Output};
use tempfile::tempdir;

fn glyphmap(args: &[&std::ffi::OsStr]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_glyphmap"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run glyphmap binary")
}

#[test]
fn test_success_exits_zero_and_writes_maps() {
    let dir = tempdir().unwrap();
    write_raw(dir.path(), "font1.json", EXAMPLE_JSON);

    let output = glyphmap(&[dir.path().as_os_str()]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stderr.is_empty());
    assert_eq!(read(dir.path(), "font1.txt"), EXAMPLE_TXT);
}

#[test]
fn test_failure_exits_one_and_names_the_file() {
    let dir = tempdir().unwrap();
    write_raw(dir.path(), "broken.json", "{\"name\": ");

    let output = glyphmap(&[dir.path().as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("error: "), "stderr: {}", stderr);
    assert!(stderr.contains("broken.json"), "stderr: {}", stderr);
    assert!(!dir.path().join("broken.txt").exists());
}

#[test]
fn test_missing_directory_exits_one() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nowhere");

    let output = glyphmap(&[missing.as_os_str()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nowhere"));
}

#[test]
fn test_too_many_arguments_are_refused() {
    let dir = tempdir().unwrap();
    write_raw(dir.path(), "font1.json", EXAMPLE_JSON);

    let output = glyphmap(&[dir.path().as_os_str(), dir.path().as_os_str()]);

    assert_ne!(output.status.code(), Some(0));
    assert!(!dir.path().join("font1.txt").exists());
}
