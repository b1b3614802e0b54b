// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contact Store and Derived View
//!
//! - [`store`] - local mirror of the server's contact list
//! - [`view`] - filtering and sorting of that mirror

pub mod store;
pub mod view;

pub use store::ContactStore;
pub use view::{
    collate, derive_view, matches_search, NameCollator, ParseSortModeError, SortMode,
};
