//! Notification recipients
//!
//! Pure helpers used when deciding who receives a teacher's notification:
//! `@mention` extraction and the deduplicating union of recipient lists.

pub mod mention;

use std::collections::HashSet;

pub use mention::extract_mentions;

/// Union of recipient lists without duplicates, first occurrence wins.
pub fn merge_recipients<I>(lists: I) -> Vec<String>
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut seen = HashSet::new();
    lists
        .into_iter()
        .flatten()
        .filter(|email| seen.insert(email.clone()))
        .collect()
}
