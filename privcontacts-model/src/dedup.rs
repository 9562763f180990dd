//! Duplicate removal within one category of one contact.
//!
//! Providers regularly report the same value twice, e.g. one phone number
//! once as "mobile" and once as "other". Duplicates are collapsed in two
//! passes, keeping the entry with the most specific type:
//!
//! 1. exact duplicates of the display value,
//! 2. duplicates of the search-normalized value (`+41 44 ...` vs `+4144...`).
//!
//! The second pass only merges entries whose value has a search projection.
//! Both passes are stable: survivors keep their relative input order, and
//! on equal priority the first occurrence wins.

use crate::{ContactDataEntry, ContactValue};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Removes duplicate entries and renumbers `sort_order` from 0.
///
/// Never fails; an empty input yields an empty output.
pub fn dedupe<V: ContactValue>(entries: Vec<ContactDataEntry<V>>) -> Vec<ContactDataEntry<V>> {
    let total = entries.len();

    let exact = remove_duplicates_by(entries, |entry| Some(entry.display_value()));
    let mut survivors = remove_duplicates_by(exact, ContactDataEntry::search_value);

    if survivors.len() < total {
        debug!(
            "Removed {} duplicate {} entries",
            total - survivors.len(),
            V::CATEGORY
        );
    }

    for (index, entry) in survivors.iter_mut().enumerate() {
        entry.sort_order = index;
    }
    survivors
}

/// Keeps, per key, the entry with the lowest type priority. Entries without
/// a key are always kept.
fn remove_duplicates_by<V, F>(entries: Vec<ContactDataEntry<V>>, key_of: F) -> Vec<ContactDataEntry<V>>
where
    V: ContactValue,
    F: Fn(&ContactDataEntry<V>) -> Option<String>,
{
    let mut keep = vec![true; entries.len()];
    let mut winners: HashMap<String, usize> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let Some(key) = key_of(entry) else {
            continue;
        };
        match winners.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(index);
            }
            Entry::Occupied(mut slot) => {
                let current = *slot.get();
                if entry.priority() < entries[current].priority() {
                    keep[current] = false;
                    slot.insert(index);
                } else {
                    keep[index] = false;
                }
            }
        }
    }

    entries
        .into_iter()
        .zip(keep)
        .filter_map(|(entry, kept)| kept.then_some(entry))
        .collect()
}

/// Orders entries by `sort_order` (stable) and renumbers them from 0.
pub fn enforce_contiguous_sort_order<V: ContactValue>(entries: &mut [ContactDataEntry<V>]) {
    entries.sort_by_key(|entry| entry.sort_order);
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.sort_order = index;
    }
}

/// Leaves at most one entry flagged main (the first flagged one). With
/// `assign_first`, the first entry becomes main when none is.
pub fn normalize_main_flag<V: ContactValue>(entries: &mut [ContactDataEntry<V>], assign_first: bool) {
    let mut seen_main = false;
    for entry in entries.iter_mut() {
        if entry.is_main {
            if seen_main {
                entry.is_main = false;
            }
            seen_main = true;
        }
    }

    if !seen_main && assign_first {
        if let Some(first) = entries.first_mut() {
            first.is_main = true;
        }
    }
}
