//! Duplicate folding keyed by lastname and firstname.

use indexmap::{map::Entry, IndexMap};
use tracing::info;

use super::record::{Contact, ContactKey};

/// Combine two records for the same person.
///
/// Each field keeps the value from `first` unless it is empty, in which case
/// `later` fills it in.
pub fn merge(first: &Contact, later: &Contact) -> Contact {
    let mut merged = first.clone();
    for (slot, candidate) in merged.fields_mut().into_iter().zip(later.fields()) {
        if slot.is_empty() && !candidate.is_empty() {
            *slot = candidate.to_string();
        }
    }
    merged
}

/// Result of folding a contact list.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Deduplicated {
    /// One contact per key, in first-occurrence order.
    pub contacts: Vec<Contact>,
    /// Rows folded into an earlier contact.
    pub merged: usize,
}

pub fn deduplicate<I>(contacts: I) -> Deduplicated
where
    I: IntoIterator<Item = Contact>,
{
    let mut unique: IndexMap<ContactKey, Contact> = IndexMap::new();
    let mut merged = 0usize;
    for contact in contacts {
        match unique.entry(contact.key()) {
            Entry::Occupied(mut slot) => {
                let combined = merge(slot.get(), &contact);
                slot.insert(combined);
                merged += 1;
            }
            Entry::Vacant(slot) => {
                slot.insert(contact);
            }
        }
    }
    info!(unique = unique.len(), merged, "deduplicated contacts");
    Deduplicated {
        contacts: unique.into_values().collect(),
        merged,
    }
}
