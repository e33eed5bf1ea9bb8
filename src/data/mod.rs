//! Contact parsing, normalisation and deduplication layer.

pub mod merge;
pub mod names;
pub mod phone;
pub mod phonebook;
pub mod record;
