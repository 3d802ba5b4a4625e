//! Add command implementation

use log::info;
use std::io::{BufRead, Write};

use super::non_blank;
use crate::error::{Result, TrackerError};
use crate::model::{parse_date, NewContact, Status};
use crate::prompt::{Console, Parsed};
use crate::store::ContactStore;

pub fn run<R: BufRead, W: Write>(store: &ContactStore, console: &mut Console<R, W>) -> Result<()> {
    writeln!(console.out(), "\n--- Add New Contact ---")?;

    let Some(name) = non_blank(console.ask("Name: ")?) else {
        return Err(TrackerError::validation("Name is required."));
    };
    let platform = non_blank(console.ask("Platform (Tinder/Bumble/Hinge/etc.): ")?);
    let phone = non_blank(console.ask("Phone number (optional): ")?);

    let today = store.clock().today();
    let first_contact_date = console.ask_until(
        "First contact date (YYYY-MM-DD, or press Enter for today): ",
        |answer| {
            if answer.is_empty() {
                Parsed::Value(today)
            } else {
                Parsed::from_result(parse_date(answer))
            }
        },
    )?;

    let status = console.ask_until("Status (active/dating/ghosted/ended) [active]: ", |answer| {
        if answer.is_empty() {
            Parsed::Value(Status::default())
        } else {
            Parsed::from_result(answer.parse::<Status>())
        }
    })?;

    let id = store.create_contact(&NewContact {
        name: name.clone(),
        platform,
        phone,
        first_contact_date,
        status,
    })?;
    info!("contact {} added", id);
    writeln!(console.out(), "\n✓ Added contact: {} (ID: {})", name, id)?;

    let note = non_blank(console.ask("Add an initial note? (Enter note or press Enter to skip): ")?);
    if let Some(note) = note {
        store.add_note(id, &note)?;
        writeln!(console.out(), "\n✓ Note added to {}.", name)?;
    }

    Ok(())
}
