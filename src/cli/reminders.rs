//! Reminders command implementation

use chrono::NaiveDate;
use std::io::{BufRead, Write};

use crate::error::Result;
use crate::format;
use crate::model::Contact;
use crate::prompt::Console;
use crate::store::ContactStore;

/// A contact that has gone quiet for too long.
#[derive(Debug)]
pub struct Reminder {
    pub contact: Contact,
    pub days_quiet: i64,
}

/// Open (active or dating) contacts whose last contact, or first contact
/// when never contacted, is more than `threshold_days` before `today`.
/// Stalest first; equal staleness keeps id order.
pub fn due(contacts: Vec<Contact>, today: NaiveDate, threshold_days: i64) -> Vec<Reminder> {
    let mut reminders: Vec<Reminder> = contacts
        .into_iter()
        .filter(|c| c.status.is_open())
        .map(|contact| Reminder {
            days_quiet: (today - contact.reference_date()).num_days(),
            contact,
        })
        .filter(|r| r.days_quiet > threshold_days)
        .collect();

    reminders.sort_by(|a, b| {
        b.days_quiet
            .cmp(&a.days_quiet)
            .then(a.contact.id.cmp(&b.contact.id))
    });
    reminders
}

pub fn run<R: BufRead, W: Write>(
    store: &ContactStore,
    console: &mut Console<R, W>,
    threshold_days: i64,
) -> Result<()> {
    let today = store.clock().today();
    let reminders = due(store.list_contacts(None, None)?, today, threshold_days);
    let out = console.out();

    if reminders.is_empty() {
        writeln!(out, "\n✓ All active contacts have been contacted recently!")?;
        return Ok(());
    }

    writeln!(out, "\n{}", "=".repeat(60))?;
    writeln!(out, "  REMINDERS - Contacts to reach out to:")?;
    writeln!(out, "{}", "=".repeat(60))?;
    for reminder in &reminders {
        let contact = &reminder.contact;
        writeln!(
            out,
            "  • {} ({}) - Last contact: {}",
            contact.name,
            contact.platform.as_deref().unwrap_or("Unknown platform"),
            format::format_last_contact(Some(contact.reference_date()), today),
        )?;
    }
    writeln!(out, "{}", "=".repeat(60))?;
    Ok(())
}
