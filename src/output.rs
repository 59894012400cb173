use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

/// Serializes the given value as indented JSON, four spaces per level.
///
/// serde_json's stock pretty printer indents by two, and the artifact we
/// produce has always been four-space indented, so we supply our own
/// formatter rather than calling `to_string_pretty`.
pub fn to_pretty_json(value: &serde_json::Value) -> Result<String, serde_json::Error> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    // serde_json only ever emits valid UTF-8.
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Writes the rendered text to disk, truncating any previous artifact.
///
/// The handle is opened, written, and closed within this one call, so it is
/// released on every exit path.
pub fn persist(path: &Path, contents: &str) -> io::Result<()> {
    fs::write(path, contents)
}
