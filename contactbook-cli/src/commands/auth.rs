// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Session Commands
//!
//! Login, registration, logout and status.

use anyhow::{bail, Result};
use dialoguer::Password;

use super::{open_book, open_offline};
use crate::config::CliConfig;
use crate::display;

fn resolve_password(password: Option<String>, confirm: bool) -> Result<String> {
    if let Some(password) = password {
        return Ok(password);
    }
    let prompt = Password::new().with_prompt("Password");
    let password = if confirm {
        prompt
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?
    } else {
        prompt.interact()?
    };
    Ok(password)
}

/// Logs in and loads the contact list.
pub async fn login(config: &CliConfig, email: &str, password: Option<String>) -> Result<()> {
    let book = open_book(config).await?;
    let password = resolve_password(password, false)?;

    let pb = display::spinner("Logging in...");
    let outcome = book.login(email, &password).await;
    pb.finish_and_clear();

    if !outcome.success {
        bail!("{}", outcome.message);
    }

    display::success(&outcome.message);
    display::info(&format!("{} contacts loaded", book.contacts().len()));
    Ok(())
}

/// Creates an account and logs in as it.
pub async fn register(
    config: &CliConfig,
    name: &str,
    email: &str,
    password: Option<String>,
) -> Result<()> {
    let book = open_book(config).await?;
    let password = resolve_password(password, true)?;

    let pb = display::spinner("Creating account...");
    let outcome = book.register(name, email, &password).await;
    pb.finish_and_clear();

    if !outcome.success {
        bail!("{}", outcome.message);
    }

    display::success(&outcome.message);
    Ok(())
}

/// Ends the session. Makes no network call.
pub fn logout(config: &CliConfig) -> Result<()> {
    let book = open_offline(config)?;

    match book.session().user() {
        Some(user) => {
            book.logout();
            display::success(&format!("Logged out {}", user.email));
        }
        None => display::info("Not logged in"),
    }
    Ok(())
}

/// Shows the logged-in user. Makes no network call.
pub fn whoami(config: &CliConfig) -> Result<()> {
    let book = open_offline(config)?;

    match book.session().user() {
        Some(user) => display::display_user(&user),
        None => display::info("Not logged in"),
    }
    Ok(())
}

/// Reports API reachability and session state.
pub async fn status(config: &CliConfig) -> Result<()> {
    let book = open_book(config).await?;

    println!("  API:     {}", config.api_url);
    match book.health().await {
        Ok(health) if health.is_ok() => display::success("API reachable"),
        Ok(health) => display::warning(&format!("API reports status '{}'", health.status)),
        Err(e) => display::error(&format!("API unreachable: {}", e)),
    }

    match book.session().user() {
        Some(user) => display::info(&format!(
            "Logged in as {} ({} contacts)",
            user.email,
            book.contacts().len()
        )),
        None => display::info("Not logged in"),
    }
    Ok(())
}
