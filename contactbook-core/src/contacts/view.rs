// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Derived contact view.
//!
//! The view is a pure function of the collection, the search term and the
//! sort mode. Nothing here keeps state between calls.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use crate::contact::Contact;

/// Ordering applied to the derived view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Ascending by name.
    #[default]
    Name,
    /// Favorites first, then ascending by name within each group.
    Favorites,
}

impl SortMode {
    /// Returns the wire/CLI name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Name => "name",
            SortMode::Favorites => "favorites",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown sort mode name.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort mode: {0} (expected 'name' or 'favorites')")]
pub struct ParseSortModeError(String);

impl FromStr for SortMode {
    type Err = ParseSortModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortMode::Name),
            "favorites" | "favourites" => Ok(SortMode::Favorites),
            _ => Err(ParseSortModeError(s.to_string())),
        }
    }
}

/// Locale-aware name ordering using the CLDR root collation.
///
/// Base letters decide first, then accents, then case with lowercase
/// first, so "Émile" sorts between "Ana" and "Zoe" and "ada" precedes
/// "Ada". If the collation data cannot be loaded the collator degrades to
/// case-folded code-point order.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    /// Loads the root collation at tertiary strength.
    pub fn new() -> Self {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Tertiary);

        let collator = match Collator::try_new(&Default::default(), options) {
            Ok(collator) => Some(collator),
            Err(e) => {
                warn!(error = %e, "collation data unavailable, falling back to code-point order");
                None
            }
        };
        NameCollator { collator }
    }

    /// Compares two names.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        let ordering = match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => {
                let folded_a = a.chars().flat_map(char::to_lowercase);
                let folded_b = b.chars().flat_map(char::to_lowercase);
                folded_a.cmp(folded_b)
            }
        };
        // Keeps the order total when the collator treats distinct strings as equal.
        ordering.then_with(|| b.cmp(a))
    }

    /// Orders two contacts under the given sort mode.
    pub fn compare_contacts(&self, a: &Contact, b: &Contact, mode: SortMode) -> Ordering {
        match mode {
            SortMode::Name => self.compare(&a.name, &b.name),
            SortMode::Favorites => b
                .is_favorite
                .cmp(&a.is_favorite)
                .then_with(|| self.compare(&a.name, &b.name)),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

/// Compares two names with a one-off [`NameCollator`].
///
/// Sorting many names should reuse one collator instead.
pub fn collate(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}

/// Returns true if the contact matches the search term.
///
/// Name and email match case-insensitively; the phone number must contain
/// the term verbatim.
pub fn matches_search(contact: &Contact, term: &str) -> bool {
    let needle = term.to_lowercase();
    contact.name.to_lowercase().contains(&needle)
        || contact.email.to_lowercase().contains(&needle)
        || contact.phone().is_some_and(|phone| phone.contains(term))
}

/// Filters and sorts the collection into a new list.
///
/// The sort is stable: contacts that compare equal keep collection order.
pub fn derive_view(contacts: &[Contact], search_term: &str, mode: SortMode) -> Vec<Contact> {
    let mut view: Vec<Contact> = contacts
        .iter()
        .filter(|c| matches_search(c, search_term))
        .cloned()
        .collect();
    let collator = NameCollator::new();
    view.sort_by(|a, b| collator.compare_contacts(a, b, mode));
    view
}
