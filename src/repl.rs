//! Read-eval-print loop: line parsing and dispatch to the command handlers.

use log::{debug, error};
use std::io::{BufRead, Write};

use crate::cli::{add, contacted, delete, help, list, note, reminders, search, update, view};
use crate::config::Config;
use crate::error::{Result, TrackerError};
use crate::prompt::Console;
use crate::store::ContactStore;

/// One parsed input line.
#[derive(Debug, PartialEq)]
pub enum Command<'a> {
    List {
        status: Option<&'a str>,
        platform: Option<&'a str>,
    },
    Add,
    View(i64),
    Update(i64),
    Delete(i64),
    Note {
        id: i64,
        text: &'a str,
    },
    Contacted {
        id: i64,
        date: Option<&'a str>,
    },
    Search(&'a str),
    Reminders,
    Help,
    Quit,
}

/// Whether the loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

fn parse_id(token: &str) -> Result<i64> {
    token
        .parse()
        .map_err(|_| TrackerError::validation("Invalid ID. Please provide a number."))
}

fn usage(text: &str) -> TrackerError {
    TrackerError::validation(format!("Usage: {}", text))
}

/// Splits off the first whitespace-delimited token; the rest is returned
/// with its inner spacing intact.
fn split_first(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.find(char::is_whitespace) {
        Some(at) => (&text[..at], text[at..].trim()),
        None => (text, ""),
    }
}

impl<'a> Command<'a> {
    /// Parses a non-empty input line. The command name is case-insensitive;
    /// arguments keep their case.
    pub fn parse(line: &'a str) -> Result<Self> {
        let (name, rest) = split_first(line);
        let args: Vec<&str> = rest.split_whitespace().collect();

        let command = match name.to_ascii_lowercase().as_str() {
            "list" => match args[..] {
                [] => Command::List {
                    status: None,
                    platform: None,
                },
                [status] => Command::List {
                    status: Some(status),
                    platform: None,
                },
                [status, platform] => Command::List {
                    status: Some(status),
                    platform: Some(platform),
                },
                _ => return Err(usage("list [status] [platform]")),
            },
            "add" => Command::Add,
            "view" => match args[..] {
                [id] => Command::View(parse_id(id)?),
                _ => return Err(usage("view <id>")),
            },
            "update" => match args[..] {
                [id] => Command::Update(parse_id(id)?),
                _ => return Err(usage("update <id>")),
            },
            "delete" => match args[..] {
                [id] => Command::Delete(parse_id(id)?),
                _ => return Err(usage("delete <id>")),
            },
            "note" => {
                let (id, text) = split_first(rest);
                if id.is_empty() || text.is_empty() {
                    return Err(usage("note <id> <note text>"));
                }
                Command::Note {
                    id: parse_id(id)?,
                    text,
                }
            }
            "contacted" => match args[..] {
                [id] => Command::Contacted {
                    id: parse_id(id)?,
                    date: None,
                },
                [id, date] => Command::Contacted {
                    id: parse_id(id)?,
                    date: Some(date),
                },
                _ => return Err(usage("contacted <id> [date]")),
            },
            "search" => {
                if rest.is_empty() {
                    return Err(usage("search <term>"));
                }
                Command::Search(rest)
            }
            "reminders" => Command::Reminders,
            "help" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(TrackerError::UnknownCommand(name.to_string())),
        };
        Ok(command)
    }
}

/// An interactive session: the open store plus the console it talks through.
pub struct Session<R, W> {
    store: ContactStore,
    config: Config,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: ContactStore, config: Config, input: R, out: W) -> Self {
        Self {
            store,
            config,
            console: Console::new(input, out),
        }
    }

    /// Ends the session, handing back the store and the output sink.
    pub fn into_parts(self) -> (ContactStore, W) {
        (self.store, self.console.into_output())
    }

    /// Runs until `quit` or end of input.
    ///
    /// Command failures are reported and the loop continues; only a failure
    /// to write to the output ends it early.
    pub fn run(&mut self) -> Result<()> {
        self.write_banner()?;

        loop {
            write!(self.console.out(), "\n> ")?;
            self.console.out().flush()?;

            let Some(line) = self.console.read_line()? else {
                writeln!(self.console.out())?;
                break;
            };

            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) => self.report(&err)?,
            }
        }

        writeln!(self.console.out(), "\nGoodbye!")?;
        Ok(())
    }

    /// Executes one input line. Blank lines do nothing.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(Flow::Continue);
        }

        let command = Command::parse(line)?;
        debug!("dispatching {:?}", command);

        let store = &self.store;
        let console = &mut self.console;
        match command {
            Command::List { status, platform } => list::run(store, console, status, platform)?,
            Command::Add => add::run(store, console)?,
            Command::View(id) => view::run(store, console, id)?,
            Command::Update(id) => update::run(store, console, id)?,
            Command::Delete(id) => delete::run(store, console, id)?,
            Command::Note { id, text } => note::run(store, console, id, text)?,
            Command::Contacted { id, date } => contacted::run(store, console, id, date)?,
            Command::Search(term) => search::run(store, console, term)?,
            Command::Reminders => {
                reminders::run(store, console, self.config.reminders.threshold_days)?
            }
            Command::Help => help::run(console)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn report(&mut self, err: &TrackerError) -> Result<()> {
        if err.is_user_error() {
            writeln!(self.console.out(), "{}", err)?;
        } else {
            error!("command failed: {}", err);
            writeln!(self.console.out(), "Error: {}", err)?;
        }
        Ok(())
    }

    fn write_banner(&mut self) -> Result<()> {
        let out = self.console.out();
        writeln!(out, "\n{}", "=".repeat(60))?;
        writeln!(out, "       DATING CONTACT TRACKER")?;
        writeln!(out, "       Track your dating connections")?;
        writeln!(out, "{}", "=".repeat(60))?;
        writeln!(out, "  Type 'help' for available commands or 'quit' to exit")?;
        writeln!(out, "{}", "=".repeat(60))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_filters() {
        assert_eq!(
            Command::parse("list").unwrap(),
            Command::List {
                status: None,
                platform: None
            }
        );
        assert_eq!(
            Command::parse("LIST dating Hinge").unwrap(),
            Command::List {
                status: Some("dating"),
                platform: Some("Hinge")
            }
        );
    }

    #[test]
    fn test_parse_note_keeps_remainder_verbatim() {
        assert_eq!(
            Command::parse("note 3 Likes  hiking, hates \"mornings\"").unwrap(),
            Command::Note {
                id: 3,
                text: "Likes  hiking, hates \"mornings\""
            }
        );
    }

    #[test]
    fn test_parse_search_keeps_remainder_verbatim() {
        assert_eq!(
            Command::parse("search  Coffee  Shop ").unwrap(),
            Command::Search("Coffee  Shop")
        );
    }

    #[test]
    fn test_parse_contacted_optional_date() {
        assert_eq!(
            Command::parse("contacted 1").unwrap(),
            Command::Contacted { id: 1, date: None }
        );
        assert_eq!(
            Command::parse("contacted 1 2025-12-15").unwrap(),
            Command::Contacted {
                id: 1,
                date: Some("2025-12-15")
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        let err = Command::parse("view abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid ID. Please provide a number.");

        let err = Command::parse("note 1").unwrap_err();
        assert_eq!(err.to_string(), "Usage: note <id> <note text>");

        let err = Command::parse("search").unwrap_err();
        assert_eq!(err.to_string(), "Usage: search <term>");

        let err = Command::parse("dance").unwrap_err();
        assert!(matches!(err, TrackerError::UnknownCommand(ref name) if name == "dance"));
    }

    #[test]
    fn test_parse_rejects_extra_arguments() {
        let err = Command::parse("contacted 1 2025-12-15 oops").unwrap_err();
        assert_eq!(err.to_string(), "Usage: contacted <id> [date]");

        let err = Command::parse("list active Tinder extra").unwrap_err();
        assert_eq!(err.to_string(), "Usage: list [status] [platform]");

        let err = Command::parse("view 1 2").unwrap_err();
        assert_eq!(err.to_string(), "Usage: view <id>");

        let err = Command::parse("delete").unwrap_err();
        assert_eq!(err.to_string(), "Usage: delete <id>");
    }

    #[test]
    fn test_quit_aliases() {
        for line in ["quit", "exit", "q", "QUIT"] {
            assert_eq!(Command::parse(line).unwrap(), Command::Quit);
        }
    }
}
