//! Update command implementation

use chrono::NaiveDate;
use std::io::{BufRead, Write};

use super::non_blank;
use crate::error::{Result, TrackerError};
use crate::model::{parse_date, ContactUpdate, Status, DATE_FORMAT};
use crate::prompt::{Console, Parsed};
use crate::store::ContactStore;

fn keep_or_date(answer: &str) -> Parsed<Option<NaiveDate>> {
    if answer.is_empty() {
        Parsed::Value(None)
    } else {
        Parsed::from_result(parse_date(answer).map(Some))
    }
}

fn keep_or_status(answer: &str) -> Parsed<Option<Status>> {
    if answer.is_empty() {
        Parsed::Value(None)
    } else {
        Parsed::from_result(answer.parse::<Status>().map(Some))
    }
}

/// Re-prompts every field; a blank answer keeps the current value.
pub fn run<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    id: i64,
) -> Result<()> {
    let contact = store.get_contact(id)?.ok_or(TrackerError::NotFound(id))?;

    writeln!(console.out(), "\n--- Update Contact: {} ---", contact.name)?;
    writeln!(console.out(), "(Press Enter to keep current value)")?;

    let name = non_blank(console.ask(&format!("Name [{}]: ", contact.name))?);
    let platform = non_blank(console.ask(&format!(
        "Platform [{}]: ",
        contact.platform.as_deref().unwrap_or("None")
    ))?);
    let phone = non_blank(console.ask(&format!(
        "Phone [{}]: ",
        contact.phone.as_deref().unwrap_or("None")
    ))?);
    let first_contact_date = console.ask_until(
        &format!(
            "First contact date [{}]: ",
            contact.first_contact_date.format(DATE_FORMAT)
        ),
        keep_or_date,
    )?;
    let last_contact_date = console.ask_until(
        &format!(
            "Last contact date [{}]: ",
            contact
                .last_contact_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_else(|| "Never".to_string())
        ),
        keep_or_date,
    )?;
    let status = console.ask_until(&format!("Status [{}]: ", contact.status), keep_or_status)?;

    let update = ContactUpdate {
        name,
        platform,
        phone,
        first_contact_date,
        last_contact_date,
        status,
    };

    if update.is_empty() {
        writeln!(console.out(), "\nNo changes made.")?;
        return Ok(());
    }

    store.update_contact(id, &update)?;
    writeln!(console.out(), "\n✓ Contact {} updated successfully.", id)?;
    Ok(())
}
