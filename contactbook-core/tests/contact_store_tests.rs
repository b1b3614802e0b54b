// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for contacts::store
//!
//! Mirror consistency against the API, failure sentinels and
//! session-change races.

mod common;

use common::{book_with, logged_in_book, seeded_api, GatedApi, EMAIL, PASSWORD};
use contactbook_core::api::MOCK_CREATED_AT;
use contactbook_core::*;

// === Loading ===

#[tokio::test]
async fn test_login_loads_server_list() {
    let (book, api, user) = logged_in_book().await;

    assert_eq!(book.contacts().len(), 3);
    assert_eq!(book.contacts().all_contacts(), api.contacts_of(&user));
    assert!(book.contacts().is_attached());
}

#[tokio::test]
async fn test_reload_picks_up_server_changes() {
    let (book, api, user) = logged_in_book().await;
    api.seed_contact(&user, &ContactDraft::new("Ada Byron", "byron@example.com"));

    assert!(book.contacts().reload().await);

    assert_eq!(book.contacts().len(), 4);
}

#[tokio::test]
async fn test_failed_reload_empties_collection() {
    let (book, api, _) = logged_in_book().await;
    api.set_offline(true);

    assert!(!book.contacts().reload().await);

    assert!(book.contacts().is_empty());
    assert!(book.contacts().view().is_empty());
}

#[tokio::test]
async fn test_detached_store_skips_network() {
    let (api, _) = seeded_api();
    let book = book_with(api.clone());
    book.start().await;

    assert!(!book.contacts().reload().await);
    assert!(book
        .contacts()
        .add_contact(&ContactDraft::new("X", "x@example.com"))
        .await
        .is_none());
    assert!(book.contacts().toggle_favorite(1u64).await.is_none());
    assert!(!book.contacts().delete_contact(1u64).await);
    assert_eq!(api.request_count(), 0);
}

// === Add ===

#[tokio::test]
async fn test_add_appends_server_record() {
    let (book, api, user) = logged_in_book().await;
    let draft = ContactDraft::new("Grace Hopper", "grace@example.com").with_phone("555-0199");

    let created = book.contacts().add_contact(&draft).await.unwrap();

    assert_eq!(created.name, "Grace Hopper");
    assert_eq!(created.created_at, MOCK_CREATED_AT);
    assert!(!created.is_favorite);
    assert_eq!(book.contacts().len(), 4);
    assert_eq!(book.contacts().get(&created.id), Some(created.clone()));
    assert_eq!(book.contacts().all_contacts(), api.contacts_of(&user));
}

#[tokio::test]
async fn test_add_rejection_leaves_collection_unchanged() {
    let (book, _, _) = logged_in_book().await;
    let before = book.contacts().all_contacts();

    let result = book
        .contacts()
        .add_contact(&ContactDraft::new("", "nobody@example.com"))
        .await;

    assert!(result.is_none());
    assert_eq!(book.contacts().all_contacts(), before);
}

#[tokio::test]
async fn test_add_network_failure_leaves_collection_unchanged() {
    let (book, api, _) = logged_in_book().await;
    let before = book.contacts().all_contacts();
    api.fail_next(ApiError::Transport("connection reset".into()));

    let result = book
        .contacts()
        .add_contact(&ContactDraft::new("Grace", "grace@example.com"))
        .await;

    assert!(result.is_none());
    assert_eq!(book.contacts().all_contacts(), before);
}

// === Update ===

#[tokio::test]
async fn test_update_replaces_matching_entry() {
    let (book, _, _) = logged_in_book().await;
    let target = book.contacts().all_contacts()[1].clone();
    let draft = ContactDraft::from(&target).with_company("Royal Society");

    let updated = book
        .contacts()
        .update_contact(target.id.clone(), &draft)
        .await
        .unwrap();

    assert_eq!(updated.company(), Some("Royal Society"));
    assert_eq!(book.contacts().get(&target.id), Some(updated));
    assert_eq!(book.contacts().len(), 3);
}

#[tokio::test]
async fn test_update_unknown_id_returns_none() {
    let (book, _, _) = logged_in_book().await;
    let before = book.contacts().all_contacts();

    let result = book
        .contacts()
        .update_contact(999u64, &ContactDraft::new("Ghost", "ghost@example.com"))
        .await;

    assert!(result.is_none());
    assert_eq!(book.contacts().all_contacts(), before);
}

// === Delete ===

#[tokio::test]
async fn test_delete_removes_entry() {
    let (book, api, user) = logged_in_book().await;
    let target = book.contacts().all_contacts()[0].id.clone();

    assert!(book.contacts().delete_contact(target.clone()).await);

    assert!(book.contacts().get(&target).is_none());
    assert_eq!(book.contacts().len(), 2);
    assert_eq!(api.contacts_of(&user).len(), 2);
}

#[tokio::test]
async fn test_delete_failure_keeps_entry() {
    let (book, api, _) = logged_in_book().await;
    let target = book.contacts().all_contacts()[0].id.clone();
    api.fail_next(ApiError::rejected(404, "Contact not found"));

    assert!(!book.contacts().delete_contact(target.clone()).await);

    assert!(book.contacts().get(&target).is_some());
}

// === Favorite ===

#[tokio::test]
async fn test_toggle_favorite_accepts_text_or_numeric_id() {
    let (book, _, _) = logged_in_book().await;
    let others: Vec<Contact> = book
        .contacts()
        .all_contacts()
        .into_iter()
        .filter(|c| c.id != Id::from(3u64))
        .collect();

    let flipped = book.contacts().toggle_favorite("3").await.unwrap();
    assert!(flipped.is_favorite);
    assert!(book.contacts().get(3u64).unwrap().is_favorite);

    let flipped_back = book.contacts().toggle_favorite(3u64).await.unwrap();
    assert!(!flipped_back.is_favorite);
    assert!(!book.contacts().get("3").unwrap().is_favorite);

    let untouched: Vec<Contact> = book
        .contacts()
        .all_contacts()
        .into_iter()
        .filter(|c| c.id != Id::from(3u64))
        .collect();
    assert_eq!(untouched, others);
}

#[tokio::test]
async fn test_favorites_sort_after_toggle() {
    let (book, _, _) = logged_in_book().await;
    book.contacts().set_sort_mode(SortMode::Favorites);

    book.contacts().toggle_favorite(2u64).await.unwrap();

    let view = book.contacts().view();
    assert_eq!(view[0].name, "Mary Somerville");
    assert_eq!(view[1].name, "Augustus De Morgan");
    assert_eq!(view[2].name, "Charles Babbage");
}

// === View ===

#[tokio::test]
async fn test_search_term_filters_view() {
    let (book, _, _) = logged_in_book().await;

    book.contacts().set_search_term("MARY");
    assert_eq!(book.contacts().view().len(), 1);

    book.contacts().set_search_term("0101");
    let view = book.contacts().view();
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].name, "Charles Babbage");

    book.contacts().set_search_term("");
    assert_eq!(book.contacts().view().len(), 3);
    assert_eq!(book.contacts().search_term(), "");
}

#[tokio::test]
async fn test_view_params_survive_logout() {
    let (book, _, _) = logged_in_book().await;
    book.contacts().set_search_term("a");
    book.contacts().set_sort_mode(SortMode::Favorites);

    book.logout();

    assert_eq!(book.contacts().search_term(), "a");
    assert_eq!(book.contacts().sort_mode(), SortMode::Favorites);
    assert!(book.contacts().view().is_empty());
}

// === Session Changes ===

#[tokio::test]
async fn test_logout_clears_collection_without_network() {
    let (book, api, _) = logged_in_book().await;
    let calls = api.request_count();

    book.logout();

    assert!(book.contacts().is_empty());
    assert!(!book.contacts().is_attached());
    assert!(book.session().user().is_none());
    assert_eq!(api.request_count(), calls);
}

#[tokio::test]
async fn test_switching_user_replaces_collection() {
    let (book, api, _) = logged_in_book().await;
    let other = api.add_account("Bob", "bob@example.com", "pw");
    api.seed_contact(&other, &ContactDraft::new("Dora", "dora@example.com"));

    book.logout();
    assert!(book.login("bob@example.com", "pw").await.success);

    let names: Vec<String> = book
        .contacts()
        .all_contacts()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, vec!["Dora".to_string()]);
}

#[tokio::test]
async fn test_result_after_logout_is_dropped() {
    let (api, _) = seeded_api();
    let gated = GatedApi::new(api.clone());
    let gate = gated.gate.clone();
    let book = ContactBookBuilder::new()
        .api(gated)
        .storage(Storage::in_memory().unwrap())
        .build()
        .unwrap();
    assert!(book.login(EMAIL, PASSWORD).await.success);

    let draft = ContactDraft::new("Late Arrival", "late@example.com");
    let (added, ()) = tokio::join!(book.contacts().add_contact(&draft), async {
        book.logout();
        gate.add_permits(1);
    });

    assert!(added.is_none());
    assert!(book.contacts().is_empty());
}

#[tokio::test]
async fn test_result_after_relogin_is_dropped() {
    let (api, _) = seeded_api();
    let gated = GatedApi::new(api.clone());
    let gate = gated.gate.clone();
    let book = ContactBookBuilder::new()
        .api(gated)
        .storage(Storage::in_memory().unwrap())
        .build()
        .unwrap();
    assert!(book.login(EMAIL, PASSWORD).await.success);

    let (flipped, ()) = tokio::join!(book.contacts().toggle_favorite(1u64), async {
        book.logout();
        assert!(book.login(EMAIL, PASSWORD).await.success);
        gate.add_permits(1);
    });

    assert!(flipped.is_none());
    // The reload after re-login predates the toggle on the server.
    assert!(!book.contacts().get(1u64).unwrap().is_favorite);
}
