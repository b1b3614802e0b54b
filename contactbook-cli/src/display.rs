// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Terminal Output Helpers

use std::time::Duration;

use console::style;
use contactbook_core::{Contact, User};
use indicatif::{ProgressBar, ProgressStyle};
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Prints a success message.
pub fn success(message: &str) {
    println!("{} {}", style("✓").green().bold(), message);
}

/// Prints an informational message.
pub fn info(message: &str) {
    println!("{} {}", style("→").cyan(), message);
}

/// Prints a warning.
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Prints an error.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Starts a spinner on stderr. Hidden when stderr is not a terminal.
pub fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

#[derive(Tabled)]
struct ContactRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "★")]
    favorite: &'static str,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Company")]
    company: String,
}

impl From<&Contact> for ContactRow {
    fn from(contact: &Contact) -> Self {
        ContactRow {
            id: contact.id.to_string(),
            favorite: if contact.is_favorite { "★" } else { "" },
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone().unwrap_or("").to_string(),
            company: contact.company().unwrap_or("").to_string(),
        }
    }
}

/// Prints contacts as a table, in the given order.
pub fn display_contacts_table(contacts: &[Contact]) {
    let rows: Vec<ContactRow> = contacts.iter().map(ContactRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// Prints every field of one contact.
pub fn display_contact_details(contact: &Contact) {
    println!();
    let star = if contact.is_favorite {
        format!(" {}", style("★").yellow())
    } else {
        String::new()
    };
    println!("  {}{}", style(&contact.name).bold().cyan(), star);
    println!();
    println!("  {:<9} {}", style("ID").dim(), contact.id);
    println!("  {:<9} {}", style("Email").dim(), contact.email);
    if let Some(phone) = contact.phone() {
        println!("  {:<9} {}", style("Phone").dim(), phone);
    }
    if let Some(company) = contact.company() {
        println!("  {:<9} {}", style("Company").dim(), company);
    }
    if !contact.created_at.is_empty() {
        println!("  {:<9} {}", style("Added").dim(), contact.created_at);
    }
    if let Some(notes) = contact.notes() {
        println!();
        for line in notes.lines() {
            println!("  {}", line);
        }
    }
    println!();
}

/// Prints the logged-in user.
pub fn display_user(user: &User) {
    println!("  {} <{}>", style(&user.name).bold(), user.email);
    println!("  {:<9} {}", style("User ID").dim(), user.id);
}
