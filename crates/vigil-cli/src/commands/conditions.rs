use comfy_table::{ContentArrangement, Table};
use vigil_conditions::Catalog;

pub fn list() -> Result<(), String> {
    let catalog = Catalog::standard();

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Label", "Icon"]);
    for entry in catalog.entries() {
        table.add_row(vec![&entry.id, &entry.label, &entry.icon]);
    }
    println!("{table}");
    println!();
    println!("  {} conditions", catalog.entries().len());
    Ok(())
}

pub fn show(id: &str) -> Result<(), String> {
    let catalog = Catalog::standard();
    let entry = catalog
        .by_id(id)
        .ok_or_else(|| format!("unknown condition: \"{id}\""))?;
    println!("{}  ({})", entry.label, entry.id);
    println!("  icon: {}", entry.icon);
    Ok(())
}
