use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;
use verso_types::Song;

use crate::error::RunError;

/// Read the song collection from a JSON file
pub fn load_collection(path: &Path) -> Result<Vec<Song>, RunError> {
    let data = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => RunError::InputNotFound(path.to_path_buf()),
        _ => RunError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let value: Value = serde_json::from_slice(&data).map_err(RunError::InputMalformed)?;

    let Value::Array(items) = value else {
        return Err(RunError::InputShapeInvalid(
            "top-level value is not an array".to_string(),
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            Song::from_value(item).ok_or_else(|| {
                RunError::InputShapeInvalid(format!("song {} is not an object", index + 1))
            })
        })
        .collect()
}

/// Write the collection as indented JSON, keeping non-ASCII text literal
pub fn save_collection(path: &Path, songs: &[Song]) -> Result<(), RunError> {
    let write_error = |source: io::Error| RunError::OutputWriteError {
        path: path.to_path_buf(),
        source,
    };

    let json = serde_json::to_string_pretty(songs).map_err(|e| write_error(e.into()))?;
    fs::write(path, json).map_err(write_error)
}
