//! Command handlers, one module per REPL command.
//!
//! Every handler receives the open store and the console explicitly and
//! returns a `TrackerError` for anything the dispatcher should report.

pub mod add;
pub mod contacted;
pub mod delete;
pub mod help;
pub mod list;
pub mod note;
pub mod reminders;
pub mod search;
pub mod update;
pub mod view;

/// Treats a blank (or missing) answer as "not given".
pub(crate) fn non_blank(answer: Option<String>) -> Option<String> {
    answer.filter(|a| !a.is_empty())
}
