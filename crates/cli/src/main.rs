use stockbook_inventory::{DEFAULT_LOW_STOCK_THRESHOLD, Inventory, Journal, report};
use stockbook_persist::DEFAULT_INVENTORY_PATH;

/// Fixed demonstration run: load, a few stock movements (including two that
/// get rejected and logged), the standard queries, the report, save.
fn run(inventory: &mut Inventory, journal: &mut Journal) {
    let _ = inventory.add("apple", 10, Some(journal));
    let _ = inventory.add("banana", 20, Some(journal));
    let _ = inventory.add("", 10, Some(journal));
    let _ = inventory.remove("apple", 3);
    let _ = inventory.remove("orange", 1);

    println!("Apple stock: {}", inventory.quantity_of("apple"));
    println!(
        "Low items: {:?}",
        inventory.low_items(DEFAULT_LOW_STOCK_THRESHOLD)
    );

    print!("{}", report::render(inventory));
}

fn main() -> anyhow::Result<()> {
    stockbook_observability::init();

    let mut inventory = stockbook_persist::load(DEFAULT_INVENTORY_PATH)?;
    let mut journal = Journal::new();

    run(&mut inventory, &mut journal);

    stockbook_persist::save(&inventory, DEFAULT_INVENTORY_PATH)?;
    tracing::info!("inventory run complete; {} journal entries", journal.len());

    Ok(())
}
