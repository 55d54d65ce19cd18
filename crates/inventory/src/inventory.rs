use std::collections::HashMap;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use stockbook_core::{StoreError, StoreResult};

use crate::journal::Journal;

/// Stock level below which an item counts as running low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u64 = 5;

/// Insertion-ordered mapping from item name to quantity on hand.
///
/// The caller owns the mapping and threads it through every operation; no
/// operation retains a reference past its own call. Iteration and the
/// serialized form both follow first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    quantities: HashMap<String, u64>,
    order: Vec<String>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.quantities.contains_key(name)
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.order
            .iter()
            .map(|name| (name.as_str(), self.quantity_of(name)))
    }

    /// Record `quantity` more of `name`, creating the entry if absent.
    ///
    /// Rejects empty (or all-whitespace) item names: the rejection is logged
    /// at error level and the mapping is left untouched. A successful add is
    /// logged at info level, appended to the optional caller-owned journal,
    /// and returns the new total on hand.
    pub fn add(
        &mut self,
        name: &str,
        quantity: u64,
        journal: Option<&mut Journal>,
    ) -> StoreResult<u64> {
        if name.trim().is_empty() {
            tracing::error!("invalid item name provided; add skipped");
            return Err(StoreError::validation("item name cannot be empty"));
        }

        let total = match self.quantities.get_mut(name) {
            Some(stored) => {
                *stored = stored.saturating_add(quantity);
                *stored
            }
            None => {
                self.order.push(name.to_owned());
                self.quantities.insert(name.to_owned(), quantity);
                quantity
            }
        };

        if let Some(journal) = journal {
            journal.record(format!("added {quantity} of {name}"));
        }
        tracing::info!("added {quantity} of {name}");

        Ok(total)
    }

    /// Take `quantity` of `name` out of stock.
    ///
    /// Draining the stored quantity to zero or below deletes the entry
    /// outright; a zero quantity is never stored. Removing an unknown item
    /// is logged at warning level and leaves the mapping untouched.
    pub fn remove(&mut self, name: &str, quantity: u64) -> StoreResult<()> {
        match self.quantities.get_mut(name) {
            Some(stored) if *stored > quantity => {
                *stored -= quantity;
                Ok(())
            }
            Some(_) => {
                self.quantities.remove(name);
                self.order.retain(|n| n != name);
                Ok(())
            }
            None => {
                tracing::warn!("attempted to remove '{name}', which is not in the inventory");
                Err(StoreError::missing_item(name))
            }
        }
    }

    /// Quantity on hand for `name`, or 0 if absent. Never fails.
    pub fn quantity_of(&self, name: &str) -> u64 {
        self.quantities.get(name).copied().unwrap_or(0)
    }

    /// Names with quantity strictly below `threshold`, in insertion order.
    pub fn low_items(&self, threshold: u64) -> Vec<&str> {
        self.iter()
            .filter(|(_, quantity)| *quantity < threshold)
            .map(|(name, _)| name)
            .collect()
    }

    /// Overwrite the stored quantity, keeping first-insertion order for
    /// repeated keys.
    fn set(&mut self, name: String, quantity: u64) {
        if !self.quantities.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.quantities.insert(name, quantity);
    }
}

impl Serialize for Inventory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (name, quantity) in self.iter() {
            map.serialize_entry(name, &quantity)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Inventory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct InventoryVisitor;

        impl<'de> Visitor<'de> for InventoryVisitor {
            type Value = Inventory;

            fn expecting(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str("a map of item names to non-negative quantities")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Inventory, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut inventory = Inventory::new();
                while let Some((name, quantity)) = access.next_entry::<String, u64>()? {
                    inventory.set(name, quantity);
                }
                Ok(inventory)
            }
        }

        deserializer.deserialize_map(InventoryVisitor)
    }
}
