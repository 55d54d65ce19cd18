//! Persistence layer: JSON file storage for inventories.

pub mod json_file;

pub use json_file::{DEFAULT_INVENTORY_PATH, PersistError, load, save};
