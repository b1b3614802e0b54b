// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Proptest Strategies
//!
//! Reusable strategies for property-based view tests.

use contactbook_core::Contact;
use proptest::prelude::*;

/// Strategy for names with mixed case and the odd accented letter.
pub fn name_strategy() -> impl Strategy<Value = String> {
    "[a-zA-ZéÉ][a-zA-Z éÉ]{0,12}"
}

/// Strategy for email addresses.
pub fn email_strategy() -> impl Strategy<Value = String> {
    ("[a-zA-Z]{1,8}", "[a-z]{2,6}").prop_map(|(user, domain)| format!("{}@{}.com", user, domain))
}

/// Strategy for optional phone numbers.
pub fn phone_strategy() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[0-9 +()-]{0,12}")
}

/// Strategy for search terms, biased towards short fragments.
pub fn search_term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        "[a-zA-Z]{1,3}",
        "[0-9]{1,3}",
        "[a-zA-Z@.0-9 ]{0,6}",
    ]
}

/// Strategy for a collection with unique ids.
pub fn contacts_strategy() -> impl Strategy<Value = Vec<Contact>> {
    prop::collection::vec(
        (name_strategy(), email_strategy(), phone_strategy(), any::<bool>()),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, email, phone, favorite))| {
                let mut contact = Contact::new(i as u64 + 1, name, email).with_favorite(favorite);
                contact.phone = phone;
                contact
            })
            .collect()
    })
}
