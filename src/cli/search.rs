//! Search command implementation

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::format;
use crate::prompt::Console;
use crate::store::ContactStore;

pub fn run<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    term: &str,
) -> Result<()> {
    let contacts = store.search(term)?;
    let out = console.out();

    if contacts.is_empty() {
        writeln!(out, "\nNo contacts found matching '{}'.", term)?;
        return Ok(());
    }

    writeln!(out, "\nSearch results for '{}':", term)?;
    format::write_contact_table(out, &contacts, store.clock().today())?;
    Ok(())
}
