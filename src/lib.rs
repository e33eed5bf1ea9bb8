//! Contact list cleaning: name splitting, phone canonicalisation and
//! duplicate merging over CSV phonebooks.

pub mod calllog;
pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod pipeline;

pub use error::{PhonebookError, Result};
