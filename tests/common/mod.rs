#![allow(dead_code)]

use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};

/// The descriptor from the format documentation.
pub const EXAMPLE_JSON: &str = r#"{"name":"Sans","size":12,"bold":true,"italic":false,"characters":{"A":{"x":1,"y":2,"width":3,"height":4,"originX":5,"originY":6,"advance":7}}}"#;

/// The character map `EXAMPLE_JSON` must produce when stored as `font1.json`.
pub const EXAMPLE_TXT: &str = "# Character map for texture font1.png\n\
Sans, 12, bold\n\
# Format: ordinal, x, y, width, height, origin x, origin y, advance\n   \
65,     1,     2,     3,     4,     5,     6,     7\n";

/// Create glyph metrics JSON
pub fn glyph(x: i64, y: i64, width: i64, height: i64, origin_x: i64, origin_y: i64, advance: i64) -> Value {
    json!({
        "x": x,
        "y": y,
        "width": width,
        "height": height,
        "originX": origin_x,
        "originY": origin_y,
        "advance": advance
    })
}

/// Create a font descriptor document
///
/// `json!` objects serialize with sorted keys, so use raw strings when the
/// order of `characters` matters.
pub fn font(name: &str, size: Value, bold: bool, italic: bool, characters: Value) -> Value {
    json!({
        "name": name,
        "size": size,
        "bold": bold,
        "italic": italic,
        "characters": characters
    })
}

/// Create a font with `count` ASCII glyphs starting at `!`
pub fn ascii_font(name: &str, count: u8) -> Value {
    let characters: serde_json::Map<String, Value> = (0..count)
        .map(|i| {
            let ch = char::from(b'!' + i);
            let x = i64::from(i) * 10;
            (ch.to_string(), glyph(x, 0, 8, 12, 1, 10, 9))
        })
        .collect();
    font(name, json!(16), false, false, Value::Object(characters))
}

pub fn write_json(dir: &Path, file: &str, value: &Value) -> PathBuf {
    write_raw(dir, file, &serde_json::to_string_pretty(value).unwrap())
}

pub fn write_raw(dir: &Path, file: &str, contents: &str) -> PathBuf {
    let path = dir.join(file);
    fs::write(&path, contents).unwrap();
    path
}

pub fn read(dir: &Path, file: &str) -> String {
    fs::read_to_string(dir.join(file)).unwrap()
}

/// Sorted file names in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
