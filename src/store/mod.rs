//! Contact storage with SQLite
//!
//! One connection is opened for the lifetime of the process and owned by
//! `ContactStore`; callers receive it explicitly, there is no global handle.

mod schema;

use chrono::{NaiveDate, NaiveDateTime};
use log::debug;
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use crate::clock::{Clock, SystemClock};
use crate::error::{Result, TrackerError};
use crate::model::{Contact, ContactUpdate, NewContact, Note, Status};

pub use schema::SCHEMA;

const CONTACT_COLUMNS: &str = "id, name, platform, phone, first_contact_date, last_contact_date, \
     status, created_at, updated_at";

pub struct ContactStore {
    conn: Connection,
    clock: Box<dyn Clock>,
}

impl ContactStore {
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        Self::from_connection(conn, Box::new(SystemClock))
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?, Box::new(SystemClock))
    }

    fn from_connection(conn: Connection, clock: Box<dyn Clock>) -> Result<Self> {
        // Cascading note deletes depend on this; SQLite ships with it off.
        conn.pragma_update(None, "foreign_keys", true)?;
        register_unicode_lower(&conn)?;
        let store = Self { conn, clock };
        store.init()?;
        Ok(store)
    }

    /// Replaces the clock used for `created_at`/`updated_at` stamps.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    /// Creates the tables if they do not exist yet.
    pub fn init(&self) -> Result<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    // ============================================
    // CONTACTS
    // ============================================

    pub fn create_contact(&self, contact: &NewContact) -> Result<i64> {
        let now = self.clock.now();
        self.conn.execute(
            "INSERT INTO contacts (name, platform, phone, first_contact_date, last_contact_date,
                                   status, created_at, updated_at)
             VALUES (?, ?, ?, ?, NULL, ?, ?, ?)",
            params![
                contact.name,
                contact.platform,
                contact.phone,
                contact.first_contact_date,
                contact.status,
                now,
                now,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("created contact id={} status={}", id, contact.status);
        Ok(id)
    }

    pub fn get_contact(&self, id: i64) -> Result<Option<Contact>> {
        let contact = self
            .conn
            .query_row(
                &format!("SELECT {} FROM contacts WHERE id = ?", CONTACT_COLUMNS),
                params![id],
                map_contact,
            )
            .optional()?;
        Ok(contact)
    }

    /// Lists contacts in id order, optionally narrowed by exact (case
    /// sensitive) status and platform matches.
    pub fn list_contacts(
        &self,
        status: Option<Status>,
        platform: Option<&str>,
    ) -> Result<Vec<Contact>> {
        let base_query = format!("SELECT {} FROM contacts", CONTACT_COLUMNS);

        let query = match (status, platform) {
            (Some(_), Some(_)) => format!(
                "{} WHERE status = ?1 AND platform = ?2 ORDER BY id",
                base_query
            ),
            (Some(_), None) => format!("{} WHERE status = ?1 ORDER BY id", base_query),
            (None, Some(_)) => format!("{} WHERE platform = ?1 ORDER BY id", base_query),
            (None, None) => format!("{} ORDER BY id", base_query),
        };

        let mut stmt = self.conn.prepare(&query)?;

        let rows: Vec<Contact> = match (status, platform) {
            (Some(s), Some(p)) => stmt
                .query_map(params![s, p], map_contact)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
            (Some(s), None) => stmt
                .query_map(params![s], map_contact)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
            (None, Some(p)) => stmt
                .query_map(params![p], map_contact)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
            (None, None) => stmt
                .query_map([], map_contact)?
                .collect::<rusqlite::Result<Vec<_>>>()?,
        };

        Ok(rows)
    }

    /// Applies the fields present in `update`; absent fields keep their
    /// stored value.
    pub fn update_contact(&self, id: i64, update: &ContactUpdate) -> Result<()> {
        let changed = self.conn.execute(
            "UPDATE contacts SET
                 name = COALESCE(?2, name),
                 platform = COALESCE(?3, platform),
                 phone = COALESCE(?4, phone),
                 first_contact_date = COALESCE(?5, first_contact_date),
                 last_contact_date = COALESCE(?6, last_contact_date),
                 status = COALESCE(?7, status),
                 updated_at = ?8
             WHERE id = ?1",
            params![
                id,
                update.name,
                update.platform,
                update.phone,
                update.first_contact_date,
                update.last_contact_date,
                update.status,
                self.clock.now(),
            ],
        )?;

        if changed == 0 {
            return Err(TrackerError::NotFound(id));
        }
        debug!("updated contact id={}", id);
        Ok(())
    }

    pub fn set_last_contact(&self, id: i64, date: NaiveDate) -> Result<()> {
        self.update_contact(
            id,
            &ContactUpdate {
                last_contact_date: Some(date),
                ..Default::default()
            },
        )
    }

    /// Deletes a contact together with its notes.
    pub fn delete_contact(&self, id: i64) -> Result<()> {
        let tx = self.conn.unchecked_transaction()?;
        let notes = tx.execute("DELETE FROM notes WHERE contact_id = ?", params![id])?;
        let changed = tx.execute("DELETE FROM contacts WHERE id = ?", params![id])?;
        if changed == 0 {
            // Dropping the transaction rolls it back.
            return Err(TrackerError::NotFound(id));
        }
        tx.commit()?;
        debug!("deleted contact id={} notes={}", id, notes);
        Ok(())
    }

    fn contact_exists(&self, id: i64) -> Result<bool> {
        let found: Option<i64> = self
            .conn
            .query_row("SELECT 1 FROM contacts WHERE id = ?", params![id], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(found.is_some())
    }

    // ============================================
    // NOTES
    // ============================================

    pub fn add_note(&self, contact_id: i64, text: &str) -> Result<i64> {
        if !self.contact_exists(contact_id)? {
            return Err(TrackerError::NotFound(contact_id));
        }

        self.conn.execute(
            "INSERT INTO notes (contact_id, text, created_at) VALUES (?, ?, ?)",
            params![contact_id, text, self.clock.now()],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("added note id={} contact_id={}", id, contact_id);
        Ok(id)
    }

    /// Notes of one contact, oldest first.
    pub fn get_notes(&self, contact_id: i64) -> Result<Vec<Note>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, contact_id, text, created_at
             FROM notes
             WHERE contact_id = ?
             ORDER BY created_at, id",
        )?;

        let rows = stmt.query_map(params![contact_id], |row| {
            Ok(Note {
                id: row.get(0)?,
                contact_id: row.get(1)?,
                text: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;

        rows.collect::<rusqlite::Result<Vec<_>>>().map_err(Into::into)
    }

    pub fn count_notes(&self, contact_id: i64) -> Result<i64> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM notes WHERE contact_id = ?",
            params![contact_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    // ============================================
    // QUERIES
    // ============================================

    /// Contacts whose name or any note contains `term`, ignoring case
    /// (Unicode aware). Each contact appears once, in id order.
    pub fn search(&self, term: &str) -> Result<Vec<Contact>> {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        let mut stmt = self.conn.prepare(&format!(
            r#"SELECT {} FROM contacts c
               WHERE unicode_lower(c.name) LIKE ?1 ESCAPE '\'
                  OR EXISTS (SELECT 1 FROM notes n
                             WHERE n.contact_id = c.id AND unicode_lower(n.text) LIKE ?1 ESCAPE '\')
               ORDER BY c.id"#,
            CONTACT_COLUMNS
        ))?;

        let rows = stmt
            .query_map(params![pattern], map_contact)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        debug!("search matched {} contact(s)", rows.len());
        Ok(rows)
    }
}

fn map_contact(row: &rusqlite::Row) -> rusqlite::Result<Contact> {
    Ok(Contact {
        id: row.get(0)?,
        name: row.get(1)?,
        platform: row.get(2)?,
        phone: row.get(3)?,
        first_contact_date: row.get(4)?,
        last_contact_date: row.get(5)?,
        status: row.get(6)?,
        created_at: row.get::<_, NaiveDateTime>(7)?,
        updated_at: row.get::<_, NaiveDateTime>(8)?,
    })
}

/// SQLite's `lower()` and `LIKE` only fold ASCII; search compares through
/// this Rust-side lowercase instead.
fn register_unicode_lower(conn: &Connection) -> rusqlite::Result<()> {
    conn.create_scalar_function(
        "unicode_lower",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let text: Option<String> = ctx.get(0)?;
            Ok(text.map(|t| t.to_lowercase()))
        },
    )
}

/// Escapes LIKE wildcards so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
