//! Delete command implementation

use log::info;
use std::io::{BufRead, Write};

use crate::error::{Result, TrackerError};
use crate::prompt::Console;
use crate::store::ContactStore;

pub fn run<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    id: i64,
) -> Result<()> {
    let contact = store.get_contact(id)?.ok_or(TrackerError::NotFound(id))?;
    let notes = store.count_notes(id)?;

    let question = format!(
        "Delete {} (ID: {}) and {} note(s)? (y/n): ",
        contact.name, id, notes
    );
    if !console.confirm(&question)? {
        writeln!(console.out(), "Deletion cancelled.")?;
        return Ok(());
    }

    store.delete_contact(id)?;
    info!("contact {} deleted", id);
    writeln!(console.out(), "\n✓ Deleted contact: {}", contact.name)?;
    Ok(())
}
