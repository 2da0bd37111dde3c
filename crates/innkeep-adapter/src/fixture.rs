//! Fixture - Seed dataset loading and priming
//!
//! A seed file is a single JSON object:
//!
//! ```json
//! { "hotels": [...], "customers": [...], "reservations": [...] }
//! ```
//!
//! Any missing key is an empty list, as is a key that is not a list. A file
//! that can not be read, parsed, or is not an object yields an empty seed.
//! Records are passed through as they are, whatever their shape.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use shared::StoreConfig;
use tracing::{info, warn};

use crate::store;

/// Seed collections, kept as raw JSON so priming copies every record verbatim
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub hotels: Vec<Value>,
    pub customers: Vec<Value>,
    pub reservations: Vec<Value>,
}

impl SeedData {
    pub fn is_empty(&self) -> bool {
        self.hotels.is_empty() && self.customers.is_empty() && self.reservations.is_empty()
    }
}

/// Read a seed file, falling back to an empty seed when the file is unusable
pub fn load_seed(path: &Path) -> SeedData {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return empty_seed(path, format!("unreadable: {}", e)),
    };

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => return empty_seed(path, format!("invalid JSON: {}", e)),
    };

    let Value::Object(root) = value else {
        return empty_seed(path, "expected a JSON object at the top level".to_string());
    };

    SeedData {
        hotels: collection(path, &root, "hotels"),
        customers: collection(path, &root, "customers"),
        reservations: collection(path, &root, "reservations"),
    }
}

/// Overwrite the three collection files named by `config` with `seed`
pub fn prime(config: &StoreConfig, seed: &SeedData) -> shared::Result<()> {
    store::save(&config.hotels_path(), &seed.hotels)?;
    store::save(&config.customers_path(), &seed.customers)?;
    store::save(&config.reservations_path(), &seed.reservations)?;

    info!(
        hotels = seed.hotels.len(),
        customers = seed.customers.len(),
        reservations = seed.reservations.len(),
        data_dir = %config.data_dir.display(),
        "primed collections from seed"
    );
    Ok(())
}

/// One key of the seed object; missing means empty
fn collection(path: &Path, root: &Map<String, Value>, key: &str) -> Vec<Value> {
    match root.get(key) {
        None => Vec::new(),
        Some(Value::Array(records)) => records.clone(),
        Some(_) => {
            warn!(path = %path.display(), key, "seed key is not a list, using an empty one");
            Vec::new()
        }
    }
}

fn empty_seed(path: &Path, reason: String) -> SeedData {
    warn!(path = %path.display(), %reason, "could not load seed file, using empty defaults");
    SeedData::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{CustomerRecord, HotelRecord, ReservationRecord};
    use crate::store::LoadOutcome;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_keys_default_to_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test_data.json");
        fs::write(
            &path,
            r#"{"customers": [{"name": "Pryha Terima", "email": "pryha@example.com"}]}"#,
        )
        .unwrap();

        let seed = load_seed(&path);
        assert!(seed.hotels.is_empty());
        assert_eq!(seed.customers.len(), 1);
        assert!(seed.reservations.is_empty());
    }

    #[test]
    fn test_non_object_root_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test_data.json");
        fs::write(&path, r#"[{"hotels": []}]"#).unwrap();

        assert!(load_seed(&path).is_empty());
    }

    #[test]
    fn test_missing_and_invalid_files_are_empty() {
        let dir = TempDir::new().unwrap();
        assert!(load_seed(&dir.path().join("absent.json")).is_empty());

        let path = dir.path().join("broken.json");
        fs::write(&path, "{\"hotels\": [").unwrap();
        assert!(load_seed(&path).is_empty());
    }

    #[test]
    fn test_malformed_record_keeps_the_rest_of_the_seed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("test_data.json");
        fs::write(
            &path,
            r#"{
                "hotels": [
                    {"name": "Hotel Ankor Wat", "location": "Cambodia", "rooms": 40, "available_rooms": 40},
                    {"name": "Hotel Sakura", "location": "Japan", "rooms": 25}
                ],
                "customers": [{"name": "Pryha Terima", "email": "pryha@example.com"}],
                "reservations": "none"
            }"#,
        )
        .unwrap();

        let seed = load_seed(&path);
        assert_eq!(seed.hotels.len(), 2);
        assert_eq!(seed.customers.len(), 1);
        assert!(seed.reservations.is_empty());

        let config = StoreConfig::in_dir(dir.path());
        prime(&config, &seed).unwrap();
        assert_eq!(
            store::load::<Value>(&config.hotels_path()).into_records(),
            seed.hotels
        );
        assert_eq!(
            store::load::<HotelRecord>(&config.hotels_path()).into_records().len(),
            1
        );
    }

    #[test]
    fn test_prime_overwrites_collections() {
        let dir = TempDir::new().unwrap();
        let config = StoreConfig::in_dir(dir.path());
        fs::write(config.hotels_path(), "garbage").unwrap();

        let seed = SeedData {
            hotels: vec![json!({
                "name": "Hotel Ankor Wat",
                "location": "Cambodia",
                "rooms": 40,
                "available_rooms": 40
            })],
            customers: Vec::new(),
            reservations: vec![json!({"customer": "Pryha Terima", "hotel": "Hotel Ankor Wat"})],
        };
        prime(&config, &seed).unwrap();

        assert_eq!(
            store::load::<HotelRecord>(&config.hotels_path()),
            LoadOutcome::Loaded(vec![HotelRecord {
                name: "Hotel Ankor Wat".to_string(),
                location: "Cambodia".to_string(),
                rooms: 40,
                available_rooms: 40,
            }])
        );
        assert_eq!(
            store::load::<CustomerRecord>(&config.customers_path()),
            LoadOutcome::Loaded(Vec::new())
        );
        assert_eq!(
            store::load::<ReservationRecord>(&config.reservations_path()),
            LoadOutcome::Loaded(vec![ReservationRecord {
                customer: "Pryha Terima".to_string(),
                hotel: "Hotel Ankor Wat".to_string(),
            }])
        );
    }
}
