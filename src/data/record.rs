//! Row and contact types shared by the cleaning stages.

use serde::Serialize;

use crate::error::{PhonebookError, Result};

/// Column names of a cleaned phonebook, in output order.
pub const HEADER: [&str; 7] = [
    "lastname",
    "firstname",
    "surname",
    "organization",
    "position",
    "phone",
    "email",
];

/// Number of fields every input row must carry.
pub const FIELD_COUNT: usize = HEADER.len();

/// One input row as read from disk, before any normalisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RawRecord {
    /// 1-based record number in the source file. Empty lines are not counted
    /// and a quoted field spanning lines still counts once.
    pub number: u64,
    pub fields: Vec<String>,
}

impl RawRecord {
    pub fn new<I, S>(number: u64, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            number,
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// True when no field carries any text.
    pub fn is_blank(&self) -> bool {
        self.fields.iter().all(|f| f.is_empty())
    }

    /// Recognises the header row by its first two column names.
    pub fn is_header(&self) -> bool {
        matches!(
            (self.fields.first(), self.fields.get(1)),
            (Some(last), Some(first)) if last == HEADER[0] && first == HEADER[1]
        )
    }

    pub fn field(&self, index: usize) -> Result<&str> {
        self.fields
            .get(index)
            .map(String::as_str)
            .ok_or(PhonebookError::MalformedRecord {
                record: self.number,
                expected: FIELD_COUNT,
                found: self.fields.len(),
            })
    }
}

/// Deduplication key. Two different people sharing a name collide on purpose.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactKey {
    pub lastname: String,
    pub firstname: String,
}

/// A normalised phonebook entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub lastname: String,
    pub firstname: String,
    pub surname: String,
    pub organization: String,
    pub position: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    pub fn key(&self) -> ContactKey {
        ContactKey {
            lastname: self.lastname.clone(),
            firstname: self.firstname.clone(),
        }
    }

    /// Fields in [`HEADER`] order.
    pub fn fields(&self) -> [&str; FIELD_COUNT] {
        [
            self.lastname.as_str(),
            self.firstname.as_str(),
            self.surname.as_str(),
            self.organization.as_str(),
            self.position.as_str(),
            self.phone.as_str(),
            self.email.as_str(),
        ]
    }

    pub fn fields_mut(&mut self) -> [&mut String; FIELD_COUNT] {
        [
            &mut self.lastname,
            &mut self.firstname,
            &mut self.surname,
            &mut self.organization,
            &mut self.position,
            &mut self.phone,
            &mut self.email,
        ]
    }

    pub fn to_row(&self) -> Vec<String> {
        self.fields().iter().map(|f| f.to_string()).collect()
    }
}
