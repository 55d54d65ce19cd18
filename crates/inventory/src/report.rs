//! Human-readable stock listing.

use std::fmt::Write as _;

use crate::inventory::Inventory;

/// Render the full listing: a fixed banner, one `name -> quantity` line per
/// item in insertion order, and an explicit notice when there is nothing to
/// list.
pub fn render(inventory: &Inventory) -> String {
    let mut out = String::from("--- Items Report ---\n");
    if inventory.is_empty() {
        out.push_str("Inventory is empty.\n");
    }
    for (name, quantity) in inventory.iter() {
        let _ = writeln!(out, "{name} -> {quantity}");
    }
    out.push_str("--------------------\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_items_in_insertion_order() {
        let mut inventory = Inventory::new();
        inventory.add("banana", 20, None).unwrap();
        inventory.add("apple", 7, None).unwrap();
        assert_eq!(
            render(&inventory),
            "--- Items Report ---\nbanana -> 20\napple -> 7\n--------------------\n"
        );
    }

    #[test]
    fn empty_inventory_gets_an_explicit_notice() {
        assert_eq!(
            render(&Inventory::new()),
            "--- Items Report ---\nInventory is empty.\n--------------------\n"
        );
    }
}
