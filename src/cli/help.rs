//! Help command implementation

use std::io::{BufRead, Write};

use crate::error::Result;
use crate::prompt::Console;

pub const HELP: &str = r#"
================================================================================
                         DATING CONTACT TRACKER - HELP
================================================================================
  COMMANDS:

  list [status] [platform]  - List all contacts (optional filters)
  add                       - Add a new contact (interactive)
  view <id>                 - View detailed contact info and notes
  update <id>               - Update contact information (interactive)
  delete <id>               - Delete a contact and its notes
  note <id> <text>          - Add a note to a contact
  contacted <id> [date]     - Mark contact as contacted (default: today)
  search <term>             - Search contacts by name or notes
  reminders                 - Show contacts to reach out to
  help                      - Show this help message
  quit                      - Exit the program

  STATUSES:  active, dating, ghosted, ended  (use 'all' to skip in list)
  PLATFORMS: Tinder, Bumble, Hinge, OkCupid, etc.
  DATES:     YYYY-MM-DD
================================================================================"#;

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<()> {
    writeln!(console.out(), "{}", HELP)?;
    Ok(())
}
