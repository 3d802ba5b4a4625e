//! View command implementation

use std::io::{BufRead, Write};

use crate::error::{Result, TrackerError};
use crate::format;
use crate::prompt::Console;
use crate::store::ContactStore;

pub fn run<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    id: i64,
) -> Result<()> {
    let contact = store.get_contact(id)?.ok_or(TrackerError::NotFound(id))?;
    let notes = store.get_notes(id)?;

    format::write_contact_detail(console.out(), &contact, &notes, store.clock().today())?;
    Ok(())
}
