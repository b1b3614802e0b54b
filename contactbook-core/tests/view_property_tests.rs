// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property tests for contacts::view

mod common;

use std::cmp::Ordering;

use common::strategies::{contacts_strategy, search_term_strategy};
use contactbook_core::contacts::{collate, derive_view, matches_search};
use contactbook_core::{Contact, SortMode};
use proptest::prelude::*;

fn sort_mode_strategy() -> impl Strategy<Value = SortMode> {
    prop_oneof![Just(SortMode::Name), Just(SortMode::Favorites)]
}

/// Expected key for ASCII names: letters case-folded, then lowercase
/// before uppercase at the first case difference.
fn ascii_order_key(name: &str) -> (String, String) {
    let swapped = name
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            }
        })
        .collect();
    (name.to_ascii_lowercase(), swapped)
}

fn names(contacts: &[Contact]) -> Vec<&str> {
    contacts.iter().map(|c| c.name.as_str()).collect()
}

proptest! {
    /// The view holds exactly the matching contacts, each once.
    #[test]
    fn prop_view_is_matching_subset(
        contacts in contacts_strategy(),
        term in search_term_strategy(),
        mode in sort_mode_strategy(),
    ) {
        let view = derive_view(&contacts, &term, mode);

        let expected = contacts.iter().filter(|c| matches_search(c, &term)).count();
        prop_assert_eq!(view.len(), expected);
        for contact in &view {
            prop_assert!(matches_search(contact, &term));
            prop_assert!(contacts.contains(contact));
        }
    }

    /// Name mode yields non-decreasing collation order.
    #[test]
    fn prop_name_mode_is_sorted(
        contacts in contacts_strategy(),
        term in search_term_strategy(),
    ) {
        let view = derive_view(&contacts, &term, SortMode::Name);
        for pair in view.windows(2) {
            prop_assert_ne!(collate(&pair[0].name, &pair[1].name), Ordering::Greater);
        }
    }

    /// Favorites mode puts every favorite before every non-favorite and
    /// orders each group by name.
    #[test]
    fn prop_favorites_mode_partitions(
        contacts in contacts_strategy(),
        term in search_term_strategy(),
    ) {
        let view = derive_view(&contacts, &term, SortMode::Favorites);

        let split = view.iter().position(|c| !c.is_favorite).unwrap_or(view.len());
        prop_assert!(view[split..].iter().all(|c| !c.is_favorite));

        for group in [&view[..split], &view[split..]] {
            for pair in group.windows(2) {
                prop_assert_ne!(collate(&pair[0].name, &pair[1].name), Ordering::Greater);
            }
        }
    }

    /// Deriving twice gives the same result; the collection is not touched.
    #[test]
    fn prop_derive_is_idempotent(
        contacts in contacts_strategy(),
        term in search_term_strategy(),
        mode in sort_mode_strategy(),
    ) {
        let snapshot = contacts.clone();
        let first = derive_view(&contacts, &term, mode);
        let second = derive_view(&first, &term, mode);

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(contacts, snapshot);
    }

    /// For plain ASCII names the order is case-insensitive alphabetical
    /// with lowercase first on ties.
    #[test]
    fn prop_ascii_name_order(
        raw in prop::collection::vec("[a-zA-Z][a-zA-Z ]{0,10}", 0..16),
    ) {
        let contacts: Vec<Contact> = raw
            .iter()
            .enumerate()
            .map(|(i, name)| Contact::new(i as u64 + 1, name.as_str(), "x@example.com"))
            .collect();

        let view = derive_view(&contacts, "", SortMode::Name);

        let mut expected = raw.clone();
        expected.sort_by_key(|name| ascii_order_key(name));
        prop_assert_eq!(names(&view), expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    /// The empty term keeps everything.
    #[test]
    fn prop_empty_term_keeps_all(
        contacts in contacts_strategy(),
        mode in sort_mode_strategy(),
    ) {
        prop_assert_eq!(derive_view(&contacts, "", mode).len(), contacts.len());
    }
}

#[test]
fn test_equal_names_keep_collection_order() {
    let contacts = vec![
        Contact::new(1u64, "Sam", "first@example.com"),
        Contact::new(2u64, "Sam", "second@example.com"),
        Contact::new(3u64, "Al", "al@example.com"),
    ];

    let view = derive_view(&contacts, "", SortMode::Name);

    let emails: Vec<&str> = view.iter().map(|c| c.email.as_str()).collect();
    assert_eq!(
        emails,
        vec!["al@example.com", "first@example.com", "second@example.com"]
    );
}

#[test]
fn test_phone_match_is_case_sensitive_substring() {
    let contact = Contact::new(1u64, "Desk", "desk@example.com").with_phone("EXT 42");

    assert!(matches_search(&contact, "EXT"));
    assert!(matches_search(&contact, "42"));
    assert!(!matches_search(&contact, "ext 4"));
}

#[test]
fn test_accented_names_sort_with_base_letter() {
    let contacts = vec![
        Contact::new(1u64, "Zoe", "zoe@example.com"),
        Contact::new(2u64, "Émile", "emile@example.com"),
        Contact::new(3u64, "Ana", "ana@example.com"),
        Contact::new(4u64, "Eve", "eve@example.com"),
        Contact::new(5u64, "émile", "emile2@example.com"),
        Contact::new(6u64, "Ölaf", "olaf@example.com"),
        Contact::new(7u64, "Oscar", "oscar@example.com"),
    ];

    let view = derive_view(&contacts, "", SortMode::Name);

    assert_eq!(
        names(&view),
        vec!["Ana", "émile", "Émile", "Eve", "Ölaf", "Oscar", "Zoe"]
    );
}

#[test]
fn test_favorites_partition_fixed_order() {
    let contacts = vec![
        Contact::new(1u64, "Zoe", "zoe@example.com").with_favorite(true),
        Contact::new(2u64, "bob", "bob@example.com"),
        Contact::new(3u64, "Émile", "emile@example.com").with_favorite(true),
        Contact::new(4u64, "Ana", "ana@example.com"),
        Contact::new(5u64, "Ada", "ada@example.com").with_favorite(true),
        Contact::new(6u64, "Çelik", "celik@example.com"),
    ];

    let view = derive_view(&contacts, "", SortMode::Favorites);

    assert_eq!(
        names(&view),
        vec!["Ada", "Émile", "Zoe", "Ana", "bob", "Çelik"]
    );
}
