// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contacts Command
//!
//! List, view, and manage contacts of the logged-in user.

use anyhow::{anyhow, bail, Result};
use contactbook_core::{Contact, ContactBook, ContactDraft, Id, SortMode};
use dialoguer::Confirm;

use super::open_session;
use crate::config::CliConfig;
use crate::display;

/// Optional field values given on the command line.
#[derive(Debug, Default)]
pub struct FieldArgs {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

impl FieldArgs {
    /// Overlays the given values on an existing draft.
    fn apply(self, mut draft: ContactDraft) -> ContactDraft {
        if let Some(name) = self.name {
            draft.name = name;
        }
        if let Some(email) = self.email {
            draft.email = email;
        }
        if self.phone.is_some() {
            draft.phone = self.phone;
        }
        if self.company.is_some() {
            draft.company = self.company;
        }
        if self.notes.is_some() {
            draft.notes = self.notes;
        }
        draft
    }
}

/// Finds a contact by ID, then by exact (case-insensitive) name.
///
/// A name shared by several contacts is rejected; the caller must use the ID.
fn resolve_contact(contacts: &[Contact], id_or_name: &str) -> Result<Contact> {
    let id = Id::from(id_or_name);
    if let Some(contact) = contacts.iter().find(|c| c.id == id) {
        return Ok(contact.clone());
    }

    let wanted = id_or_name.trim().to_lowercase();
    let mut matches = contacts.iter().filter(|c| c.name.to_lowercase() == wanted);
    match (matches.next(), matches.next()) {
        (Some(contact), None) => Ok(contact.clone()),
        (Some(_), Some(_)) => bail!(
            "Several contacts are named '{}'. Use the contact ID instead.",
            id_or_name
        ),
        (None, _) => bail!("Contact '{}' not found", id_or_name),
    }
}

fn find_contact(book: &ContactBook, id_or_name: &str) -> Result<Contact> {
    resolve_contact(&book.contacts().all_contacts(), id_or_name)
}

/// Lists contacts through the search and sort of the derived view.
pub async fn list(
    config: &CliConfig,
    search: Option<&str>,
    sort: SortMode,
    json: bool,
) -> Result<()> {
    let book = open_session(config).await?;
    let store = book.contacts();
    store.set_search_term(search.unwrap_or(""));
    store.set_sort_mode(sort);
    let view = store.view();

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if view.is_empty() {
        if store.is_empty() {
            display::info("No contacts yet. Add one with:");
            println!("  contactbook contacts add <name> <email>");
        } else {
            display::info(&format!(
                "No contacts matching '{}'",
                search.unwrap_or("")
            ));
        }
        return Ok(());
    }

    println!();
    println!("Contacts ({} of {}, by {}):", view.len(), store.len(), sort);
    println!();
    display::display_contacts_table(&view);
    println!();

    Ok(())
}

/// Shows details for a specific contact.
pub async fn show(config: &CliConfig, id: &str) -> Result<()> {
    let book = open_session(config).await?;
    let contact = find_contact(&book, id)?;
    display::display_contact_details(&contact);
    Ok(())
}

/// Creates a contact.
pub async fn add(config: &CliConfig, name: &str, email: &str, fields: FieldArgs) -> Result<()> {
    let book = open_session(config).await?;
    let draft = fields.apply(ContactDraft::new(name, email));

    let pb = display::spinner("Adding contact...");
    let created = book.contacts().add_contact(&draft).await;
    pb.finish_and_clear();

    let created = created.ok_or_else(|| anyhow!("Failed to add contact"))?;
    display::success(&format!("Added {} (ID {})", created.name, created.id));
    Ok(())
}

/// Edits a contact, keeping fields that are not given.
pub async fn edit(config: &CliConfig, id: &str, fields: FieldArgs) -> Result<()> {
    let book = open_session(config).await?;
    let existing = find_contact(&book, id)?;
    let draft = fields.apply(ContactDraft::from(&existing));

    if draft == ContactDraft::from(&existing) {
        display::info("Nothing to change");
        return Ok(());
    }

    let pb = display::spinner("Saving contact...");
    let updated = book.contacts().update_contact(&existing.id, &draft).await;
    pb.finish_and_clear();

    let updated = updated.ok_or_else(|| anyhow!("Failed to update contact"))?;
    display::success(&format!("Updated {}", updated.name));
    Ok(())
}

/// Removes a contact after confirmation.
pub async fn remove(config: &CliConfig, id: &str, yes: bool) -> Result<()> {
    let book = open_session(config).await?;
    let contact = find_contact(&book, id)?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove {} <{}>?", contact.name, contact.email))
            .default(false)
            .interact()?;
        if !confirmed {
            display::info("Cancelled");
            return Ok(());
        }
    }

    let pb = display::spinner("Removing contact...");
    let removed = book.contacts().delete_contact(&contact.id).await;
    pb.finish_and_clear();

    if !removed {
        bail!("Failed to remove contact");
    }
    display::success(&format!("Removed contact: {}", contact.name));
    Ok(())
}

/// Flips a contact's favorite flag.
pub async fn favorite(config: &CliConfig, id: &str) -> Result<()> {
    let book = open_session(config).await?;
    let contact = find_contact(&book, id)?;

    let updated = book
        .contacts()
        .toggle_favorite(&contact.id)
        .await
        .ok_or_else(|| anyhow!("Failed to update favorite"))?;

    if updated.is_favorite {
        display::success(&format!("{} is now a favorite", updated.name));
    } else {
        display::success(&format!("{} is no longer a favorite", updated.name));
    }
    Ok(())
}
