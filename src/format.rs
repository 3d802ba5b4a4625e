//! Text rendering: relative durations, the contact table and the detail view.

use chrono::NaiveDate;
use std::io::{self, Write};

use crate::model::{Contact, Note, DATE_FORMAT};

const TABLE_WIDTH: usize = 80;
const DETAIL_WIDTH: usize = 60;

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// How long a contact has been going on, e.g. "3 weeks" or "1 year, 2 months".
pub fn format_duration(start: NaiveDate, today: NaiveDate) -> String {
    let days = (today - start).num_days();
    match days {
        d if d < 0 => "Not yet".to_string(),
        0 => "Today".to_string(),
        1..=6 => plural(days, "day"),
        7..=29 => plural(days / 7, "week"),
        30..=364 => plural(days / 30, "month"),
        _ => {
            let years = plural(days / 365, "year");
            let months = (days % 365) / 30;
            if months > 0 {
                format!("{}, {}", years, plural(months, "month"))
            } else {
                years
            }
        }
    }
}

/// How long ago the last contact was, or "Never".
pub fn format_last_contact(last: Option<NaiveDate>, today: NaiveDate) -> String {
    let Some(last) = last else {
        return "Never".to_string();
    };
    let days = (today - last).num_days();
    match days {
        d if d < 0 => last.format(DATE_FORMAT).to_string(),
        0 => "Today".to_string(),
        1 => "Yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        7..=29 => format!("{} ago", plural(days / 7, "week")),
        _ => format!("{} ({} days ago)", last.format(DATE_FORMAT), days),
    }
}

/// Shortens `text` to at most `width` characters, marking the cut with "...".
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let kept: String = text.chars().take(width.saturating_sub(3)).collect();
    format!("{}...", kept)
}

fn write_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", "=".repeat(TABLE_WIDTH))?;
    writeln!(
        out,
        "{:<4} {:<20} {:<12} {:<15} {:<15} {:<10}",
        "ID", "Name", "Platform", "Talking For", "Last Contact", "Status"
    )?;
    writeln!(out, "{}", "=".repeat(TABLE_WIDTH))
}

/// Writes the contact table used by `list` and `search`.
pub fn write_contact_table(
    out: &mut impl Write,
    contacts: &[Contact],
    today: NaiveDate,
) -> io::Result<()> {
    write_header(out)?;

    for contact in contacts {
        let platform = contact.platform.as_deref().unwrap_or("-");
        writeln!(
            out,
            "{:<4} {:<20} {:<12} {:<15} {:<15} {:<10}",
            contact.id,
            truncate(&contact.name, 20),
            truncate(platform, 12),
            format_duration(contact.first_contact_date, today),
            format_last_contact(contact.last_contact_date, today),
            contact.status,
        )?;
    }

    writeln!(out, "{}", "=".repeat(TABLE_WIDTH))
}

/// Writes every field of a contact followed by its notes, oldest first.
pub fn write_contact_detail(
    out: &mut impl Write,
    contact: &Contact,
    notes: &[Note],
    today: NaiveDate,
) -> io::Result<()> {
    let rule = "=".repeat(DETAIL_WIDTH);
    let thin = "-".repeat(DETAIL_WIDTH);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "  CONTACT DETAILS - ID: {}", contact.id)?;
    writeln!(out, "{}", rule)?;
    writeln!(out, "  Name:              {}", contact.name)?;
    writeln!(
        out,
        "  Platform:          {}",
        contact.platform.as_deref().unwrap_or("Not specified")
    )?;
    writeln!(
        out,
        "  Phone:             {}",
        contact.phone.as_deref().unwrap_or("Not specified")
    )?;
    writeln!(out, "  Status:            {}", contact.status)?;
    writeln!(out, "{}", thin)?;
    writeln!(
        out,
        "  First Contact:     {}",
        contact.first_contact_date.format(DATE_FORMAT)
    )?;
    writeln!(
        out,
        "  Talking For:       {}",
        format_duration(contact.first_contact_date, today)
    )?;
    writeln!(
        out,
        "  Last Contact:      {}",
        format_last_contact(contact.last_contact_date, today)
    )?;
    writeln!(
        out,
        "  Added:             {}",
        contact.created_at.format("%Y-%m-%d %H:%M:%S")
    )?;
    writeln!(out, "{}", rule)?;

    if notes.is_empty() {
        writeln!(out, "\n  No notes yet. Use 'note' command to add notes.")?;
    } else {
        writeln!(out, "\n  NOTES:")?;
        writeln!(out, "{}", thin)?;
        for note in notes {
            writeln!(out, "  [{}]", note.created_at.format("%Y-%m-%d %H:%M:%S"))?;
            writeln!(out, "  {}", note.text)?;
            writeln!(out)?;
        }
    }

    writeln!(out, "{}", rule)
}
