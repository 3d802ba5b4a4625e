//! Note command implementation

use std::io::{BufRead, Write};

use crate::error::{Result, TrackerError};
use crate::prompt::Console;
use crate::store::ContactStore;

pub fn run<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    id: i64,
    text: &str,
) -> Result<()> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TrackerError::validation("Note text cannot be empty."));
    }

    let contact = store.get_contact(id)?.ok_or(TrackerError::NotFound(id))?;
    store.add_note(id, text)?;
    writeln!(console.out(), "\n✓ Note added to {}.", contact.name)?;
    Ok(())
}
