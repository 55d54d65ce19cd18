//! Load/save of an inventory as a flat JSON object on disk.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use stockbook_inventory::Inventory;

/// File name used when the caller does not pick one.
pub const DEFAULT_INVENTORY_PATH: &str = "inventory.json";

/// Storage-layer error.
///
/// Missing files and undecodable content never surface here; `load` degrades
/// those to an empty inventory. What remains is genuinely unexpected IO.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("io failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not encode inventory: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Load the inventory persisted at `path`.
///
/// A missing file is a cold start: logged at warning level and treated as an
/// empty inventory. A file that does not parse as a name-to-quantity object
/// is logged at error level and likewise yields an empty inventory (the data
/// is discarded, not repaired). Any other read failure is returned to the
/// caller.
pub fn load(path: impl AsRef<Path>) -> Result<Inventory, PersistError> {
    let path = path.as_ref();
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(source) if source.kind() == ErrorKind::NotFound => {
            tracing::warn!(
                "inventory file {} not found; starting with an empty inventory",
                path.display()
            );
            return Ok(Inventory::new());
        }
        Err(source) => {
            return Err(PersistError::Io {
                path: path.to_owned(),
                source,
            });
        }
    };

    match serde_json::from_str(&raw) {
        Ok(inventory) => Ok(inventory),
        Err(err) => {
            tracing::error!("could not decode inventory file {}: {err}", path.display());
            Ok(Inventory::new())
        }
    }
}

/// Write `inventory` to `path` as a 4-space-indented JSON object, replacing
/// any existing content. Not atomic against concurrent writers.
pub fn save(inventory: &Inventory, path: impl AsRef<Path>) -> Result<(), PersistError> {
    let path = path.as_ref();

    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    inventory.serialize(&mut serializer)?;

    fs::write(path, buf).map_err(|source| PersistError::Io {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> Inventory {
        let mut inventory = Inventory::new();
        inventory.add("apple", 10, None).unwrap();
        inventory.add("banana", 3, None).unwrap();
        inventory
    }

    #[test]
    fn round_trips_inventory_through_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        let inventory = sample();
        save(&inventory, &path).unwrap();
        let loaded = load(&path).unwrap();

        assert_eq!(loaded, inventory);
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let loaded = load(dir.path().join("absent.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, "{ not json").unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn wrong_shape_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");
        fs::write(&path, r#"{"apple": "ten"}"#).unwrap();

        let loaded = load(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn writes_four_space_indented_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        save(&sample(), &path).unwrap();
        let written = fs::read_to_string(&path).unwrap();

        assert_eq!(written, "{\n    \"apple\": 10,\n    \"banana\": 3\n}");
    }

    #[test]
    fn save_replaces_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("inventory.json");

        save(&sample(), &path).unwrap();
        let mut smaller = Inventory::new();
        smaller.add("kiwi", 1, None).unwrap();
        save(&smaller, &path).unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded, smaller);
    }
}
