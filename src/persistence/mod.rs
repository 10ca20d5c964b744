//! Roster file persistence
//!
//! Rosters are plain JSON arrays on disk. Saves are pretty-printed with
//! 4-space indentation and go through a temp sibling plus rename, so an
//! interrupted write never leaves a partial roster at the destination path.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::RosterError;

/// Load a roster from a JSON file whose top-level value is an array.
pub fn load_roster(path: &Path) -> Result<Vec<Value>, RosterError> {
    let text = fs::read_to_string(path).map_err(|source| RosterError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let parsed: Value = serde_json::from_str(&text).map_err(|source| RosterError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Array(characters) = parsed else {
        return Err(RosterError::NotAnArray {
            path: path.to_path_buf(),
        });
    };

    log::info!("Loaded {} characters from {}", characters.len(), path.display());
    Ok(characters)
}

/// Save a roster as a pretty-printed JSON array.
///
/// Output is UTF-8 with non-ASCII characters emitted literally.
pub fn save_roster(path: &Path, characters: &[Value]) -> Result<(), RosterError> {
    let write_err = |source: std::io::Error| RosterError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    characters
        .serialize(&mut ser)
        .map_err(|source| write_err(source.into()))?;
    buf.push(b'\n');

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, &buf).map_err(write_err)?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(source));
    }

    log::info!("Saved {} characters to {}", characters.len(), path.display());
    Ok(())
}
