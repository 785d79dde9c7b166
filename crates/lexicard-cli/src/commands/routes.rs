//! The `lexicard routes` command.

use anyhow::Result;
use comfy_table::Table;

use lexicard_core::routing::ROUTES;

pub fn execute() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Path", "Name", "Title"]);
    for route in ROUTES {
        table.add_row(vec![route.path, route.name, route.title]);
    }
    println!("{table}");
    Ok(())
}
