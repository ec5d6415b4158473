//! The `decoquiz list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

pub fn execute() -> Result<()> {
    let banks = decoquiz_core::content::builtin_banks()?;

    let mut table = Table::new();
    table.set_header(vec!["Locale", "Id", "Title", "Questions"]);
    for bank in &banks {
        table.add_row(vec![
            Cell::new(bank.locale()),
            Cell::new(bank.id()),
            Cell::new(bank.title()),
            Cell::new(bank.len()),
        ]);
    }

    println!("{table}");
    println!("\nRun one with: decoquiz run --locale <LOCALE>");
    Ok(())
}
