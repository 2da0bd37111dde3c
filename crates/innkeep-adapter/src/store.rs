//! Store - Load and save an ordered list of records in one JSON file
//!
//! `load` never fails. A missing file and a corrupt file both come back as
//! "no records", but tagged so the caller can tell them apart. Only the
//! file as a whole can be corrupt: array elements that do not decode as `T`
//! are skipped. Load as `serde_json::Value` to keep every element.
//! `save` replaces the file atomically through a sibling temp file.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use shared::WriteError;
use tracing::{debug, warn};

const INDENT: &[u8] = b"    ";

/// Result of reading a collection file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome<T> {
    /// The file held a JSON array of records
    Loaded(Vec<T>),
    /// The file does not exist
    Missing,
    /// The file exists but could not be used
    Corrupt { reason: String },
}

impl<T> LoadOutcome<T> {
    /// Collapse to a record list; `Missing` and `Corrupt` become empty
    pub fn into_records(self) -> Vec<T> {
        match self {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Missing | LoadOutcome::Corrupt { .. } => Vec::new(),
        }
    }

    pub fn is_corrupt(&self) -> bool {
        matches!(self, LoadOutcome::Corrupt { .. })
    }

    pub fn health(&self) -> CollectionHealth {
        match self {
            LoadOutcome::Loaded(records) => CollectionHealth::Ok {
                records: records.len(),
            },
            LoadOutcome::Missing => CollectionHealth::Missing,
            LoadOutcome::Corrupt { reason } => CollectionHealth::Corrupt {
                reason: reason.clone(),
            },
        }
    }
}

/// Record-free summary of a `LoadOutcome`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionHealth {
    Ok { records: usize },
    Missing,
    Corrupt { reason: String },
}

impl core::fmt::Display for CollectionHealth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CollectionHealth::Ok { records } => write!(f, "ok ({} records)", records),
            CollectionHealth::Missing => write!(f, "missing"),
            CollectionHealth::Corrupt { reason } => write!(f, "corrupt: {}", reason),
        }
    }
}

/// Load a record list from `path`
pub fn load<T: DeserializeOwned>(path: &Path) -> LoadOutcome<T> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "collection file missing, treating as empty");
            return LoadOutcome::Missing;
        }
        Err(e) => return corrupt(path, format!("unreadable: {}", e)),
    };

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => return corrupt(path, format!("invalid JSON: {}", e)),
    };

    let elements = match value {
        serde_json::Value::Array(elements) => elements,
        other => {
            return corrupt(
                path,
                format!("expected a JSON array, found {}", json_kind(&other)),
            )
        }
    };

    let total = elements.len();
    let records: Vec<T> = elements
        .into_iter()
        .filter_map(|element| serde_json::from_value(element).ok())
        .collect();
    if records.len() < total {
        warn!(
            path = %path.display(),
            skipped = total - records.len(),
            "skipping records with an unexpected shape"
        );
    }

    debug!(path = %path.display(), records = records.len(), "loaded collection");
    LoadOutcome::Loaded(records)
}

/// Replace the contents of `path` with `records`, pretty-printed with 4-space indentation
pub fn save<T: Serialize>(path: &Path, records: &[T]) -> shared::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    records.serialize(&mut serializer)?;

    let temp_path = temp_path_for(path);
    if let Err(source) = write_synced(&temp_path, &buf) {
        let _ = fs::remove_file(&temp_path);
        return Err(WriteError {
            path: temp_path,
            source,
        }
        .into());
    }
    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(WriteError {
            path: path.to_path_buf(),
            source,
        }
        .into());
    }

    debug!(path = %path.display(), records = records.len(), "saved collection");
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// `dir/hotels.json` -> `dir/.hotels.json.tmp`
fn temp_path_for(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", file_name))
}

fn corrupt<T>(path: &Path, reason: String) -> LoadOutcome<T> {
    warn!(path = %path.display(), %reason, "collection file is corrupt, treating as empty");
    LoadOutcome::Corrupt { reason }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{HotelRecord, ReservationRecord};
    use tempfile::TempDir;

    fn hotel(name: &str, rooms: u32) -> HotelRecord {
        HotelRecord {
            name: name.to_string(),
            location: "Chile".to_string(),
            rooms,
            available_rooms: rooms,
        }
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        let hotels = vec![hotel("Hotel Pucon", 15), hotel("Hotel Ankor Wat", 40)];

        save(&path, &hotels).unwrap();

        assert_eq!(load::<HotelRecord>(&path), LoadOutcome::Loaded(hotels));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let outcome = load::<HotelRecord>(&dir.path().join("nope.json"));

        assert_eq!(outcome, LoadOutcome::Missing);
        assert!(outcome.into_records().is_empty());
    }

    #[test]
    fn test_load_invalid_syntax_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        fs::write(&path, "[{\"name\": \"Hotel Pucon\",").unwrap();

        let outcome = load::<HotelRecord>(&path);
        assert!(outcome.is_corrupt());
        assert!(outcome.into_records().is_empty());
    }

    #[test]
    fn test_load_object_root_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("reservations.json");
        fs::write(&path, r#"{"customer": "Ardash Hdez", "hotel": "Hotel Pucon"}"#).unwrap();

        match load::<ReservationRecord>(&path) {
            LoadOutcome::Corrupt { reason } => assert!(reason.contains("an object")),
            other => panic!("expected corrupt outcome, got {:?}", other),
        }
    }

    #[test]
    fn test_load_skips_records_with_wrong_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        fs::write(
            &path,
            r#"[
                {"name": "Hotel Pucon", "location": "Chile", "rooms": 15, "available_rooms": 15},
                {"name": "Hotel Sakura", "location": "Japan", "rooms": 25}
            ]"#,
        )
        .unwrap();

        assert_eq!(
            load::<HotelRecord>(&path),
            LoadOutcome::Loaded(vec![hotel("Hotel Pucon", 15)])
        );
    }

    #[test]
    fn test_load_as_values_keeps_every_element() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        fs::write(&path, r#"[{"name": "Hotel Sakura"}, 7, {"name": "Hotel Pucon", "stars": 5}]"#)
            .unwrap();

        let values = load::<serde_json::Value>(&path).into_records();
        assert_eq!(values.len(), 3);
        assert_eq!(values[2]["stars"], 5);
    }

    #[test]
    fn test_load_empty_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        fs::write(&path, "[]").unwrap();

        assert_eq!(load::<HotelRecord>(&path), LoadOutcome::Loaded(Vec::new()));
    }

    #[test]
    fn test_save_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");

        save(&path, &[hotel("Hotel Pucon", 15)]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("[\n    {\n        \"name\": \"Hotel Pucon\""));
        assert!(content.contains("\n        \"available_rooms\": 15\n    }\n]"));
    }

    #[test]
    fn test_save_replaces_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        fs::write(&path, "not json at all").unwrap();

        save::<HotelRecord>(&path, &[]).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
        let leftovers: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|n| n != "hotels.json")
            .collect();
        assert!(leftovers.is_empty(), "unexpected files: {:?}", leftovers);
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("data").join("nested").join("hotels.json");

        save(&path, &[hotel("Hotel Pucon", 15)]).unwrap();

        assert_eq!(load::<HotelRecord>(&path).into_records().len(), 1);
    }

    #[test]
    fn test_save_writes_utf8_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("hotels.json");
        let mut record = hotel("Hotel Pucón", 3);
        record.location = "Región de la Araucanía".to_string();

        save(&path, &[record.clone()]).unwrap();

        assert!(fs::read_to_string(&path).unwrap().contains("Hotel Pucón"));
        assert_eq!(load::<HotelRecord>(&path), LoadOutcome::Loaded(vec![record]));
    }

    #[test]
    fn test_health_display() {
        assert_eq!(
            LoadOutcome::Loaded(vec![hotel("a", 1)]).health().to_string(),
            "ok (1 records)"
        );
        assert_eq!(LoadOutcome::<HotelRecord>::Missing.health().to_string(), "missing");
    }
}
