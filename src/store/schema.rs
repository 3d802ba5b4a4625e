//! SQLite schema definition
//!
//! Dates are `YYYY-MM-DD` text, timestamps `YYYY-MM-DD HH:MM:SS` text.
//! Statements are idempotent so the schema can be applied on every open.

pub const SCHEMA: &str = r#"
-- ============================================
-- CONTACTS
-- ============================================

CREATE TABLE IF NOT EXISTS contacts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,  -- never reused, even after delete
    name TEXT NOT NULL,
    platform TEXT,                         -- 'Tinder', 'Hinge', ... free text
    phone TEXT,
    first_contact_date TEXT NOT NULL,
    last_contact_date TEXT,                -- NULL until marked as contacted
    status TEXT NOT NULL DEFAULT 'active'
        CHECK (status IN ('active', 'dating', 'ghosted', 'ended')),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_contacts_status ON contacts(status);

-- ============================================
-- NOTES
-- ============================================

CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    contact_id INTEGER NOT NULL,
    text TEXT NOT NULL,
    created_at TEXT NOT NULL,
    FOREIGN KEY(contact_id) REFERENCES contacts(id) ON DELETE CASCADE
);

CREATE INDEX IF NOT EXISTS idx_notes_contact ON notes(contact_id);
"#;
