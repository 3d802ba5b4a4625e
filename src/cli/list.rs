//! List command implementation

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::format;
use crate::model::Status;
use crate::prompt::Console;
use crate::store::ContactStore;

/// `all` or `-` in the status slot means "any status", so a platform filter
/// can be given on its own.
fn status_filter(arg: Option<&str>) -> Result<Option<Status>> {
    match arg {
        None | Some("all") | Some("-") => Ok(None),
        Some(status) => Ok(Some(status.parse()?)),
    }
}

pub fn run<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    status: Option<&str>,
    platform: Option<&str>,
) -> Result<()> {
    let contacts = store.list_contacts(status_filter(status)?, platform)?;
    let out = console.out();

    if contacts.is_empty() {
        writeln!(out, "\nNo contacts found.")?;
        return Ok(());
    }

    writeln!(out)?;
    format::write_contact_table(out, &contacts, store.clock().today())?;
    writeln!(out, "Total: {} contact(s)", contacts.len())?;

    Ok(())
}
