//! Contact and note records plus the closed `Status` enumeration.

use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;
use std::str::FromStr;

use crate::error::TrackerError;

/// Date format used for every user-entered and stored date.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Where a contact stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Active,
    Dating,
    Ghosted,
    Ended,
}

impl Status {
    pub const ALL: [Status; 4] = [
        Status::Active,
        Status::Dating,
        Status::Ghosted,
        Status::Ended,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Dating => "dating",
            Status::Ghosted => "ghosted",
            Status::Ended => "ended",
        }
    }

    /// Contacts in these states are still worth following up on.
    pub fn is_open(&self) -> bool {
        matches!(self, Status::Active | Status::Dating)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Status::Active),
            "dating" => Ok(Status::Dating),
            "ghosted" => Ok(Status::Ghosted),
            "ended" => Ok(Status::Ended),
            other => Err(TrackerError::validation(format!(
                "Invalid status '{}'. Use one of: active, dating, ghosted, ended.",
                other
            ))),
        }
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Status::ALL
            .into_iter()
            .find(|s| s.as_str() == text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown status '{}'", text).into()))
    }
}

/// Parses a `YYYY-MM-DD` date as typed by the user.
pub fn parse_date(input: &str) -> Result<NaiveDate, TrackerError> {
    let input = input.trim();
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|_| {
        TrackerError::validation(format!(
            "Invalid date '{}'. Use the YYYY-MM-DD format.",
            input
        ))
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: i64,
    pub name: String,
    pub platform: Option<String>,
    pub phone: Option<String>,
    pub first_contact_date: NaiveDate,
    pub last_contact_date: Option<NaiveDate>,
    pub status: Status,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Contact {
    /// The date staleness is measured from: the last contact, or the first
    /// one when the contact was never marked as contacted.
    pub fn reference_date(&self) -> NaiveDate {
        self.last_contact_date.unwrap_or(self.first_contact_date)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Note {
    pub id: i64,
    pub contact_id: i64,
    pub text: String,
    pub created_at: NaiveDateTime,
}

/// Fields supplied when creating a contact.
#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub platform: Option<String>,
    pub phone: Option<String>,
    pub first_contact_date: NaiveDate,
    pub status: Status,
}

impl NewContact {
    pub fn new(name: impl Into<String>, first_contact_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            platform: None,
            phone: None,
            first_contact_date,
            status: Status::default(),
        }
    }

    pub fn platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = Some(platform.into());
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }
}

/// A partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactUpdate {
    pub name: Option<String>,
    pub platform: Option<String>,
    pub phone: Option<String>,
    pub first_contact_date: Option<NaiveDate>,
    pub last_contact_date: Option<NaiveDate>,
    pub status: Option<Status>,
}

impl ContactUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
