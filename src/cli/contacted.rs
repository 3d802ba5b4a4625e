//! Contacted command implementation

use std::io::{BufRead, Write};

use crate::error::{Result, TrackerError};
use crate::model::{parse_date, DATE_FORMAT};
use crate::prompt::Console;
use crate::store::ContactStore;

/// Sets the last contact date to `date`, or today when omitted.
pub fn run<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    id: i64,
    date: Option<&str>,
) -> Result<()> {
    let date = match date {
        Some(date) => parse_date(date)?,
        None => store.clock().today(),
    };

    let contact = store.get_contact(id)?.ok_or(TrackerError::NotFound(id))?;
    store.set_last_contact(id, date)?;

    let out = console.out();
    writeln!(out, "\n✓ Marked {} as contacted.", contact.name)?;
    writeln!(out, "  Last contact date set to: {}", date.format(DATE_FORMAT))?;
    Ok(())
}
