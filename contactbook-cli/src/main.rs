// SPDX-FileCopyrightText: 2026 Contactbook Contributors
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Contactbook CLI
//!
//! Command-line interface for Contactbook - manage contacts stored on a
//! contacts API server.

mod commands;
mod config;
mod display;

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use contactbook_core::{SortMode, DEFAULT_API_URL};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use commands::contacts::FieldArgs;
use config::CliConfig;

#[derive(Parser)]
#[command(name = "contactbook")]
#[command(version, about = "Manage your contacts from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Data directory (default: ~/.contactbook)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Contacts API base URL
    #[arg(
        long,
        global = true,
        env = "CONTACTBOOK_API_URL",
        default_value = DEFAULT_API_URL,
        value_parser = parse_api_url
    )]
    api_url: String,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    timeout: u64,
}

fn parse_api_url(raw: &str) -> Result<String, String> {
    config::parse_api_url(raw).map_err(|e| e.to_string())
}

#[derive(Subcommand)]
enum Commands {
    /// Log in to an existing account
    Login {
        /// Account email
        email: String,

        /// Password (prompted if omitted)
        #[arg(long, env = "CONTACTBOOK_PASSWORD")]
        password: Option<String>,
    },

    /// Create a new account
    Register {
        /// Your display name
        name: String,

        /// Account email
        email: String,

        /// Password (prompted if omitted)
        #[arg(long, env = "CONTACTBOOK_PASSWORD")]
        password: Option<String>,
    },

    /// Log out and forget the stored session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Check API reachability and session state
    Status,

    /// Manage your contacts
    #[command(subcommand)]
    Contacts(ContactCommands),

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
enum ContactCommands {
    /// List contacts
    List {
        /// Filter by name, email or phone
        #[arg(long, short)]
        search: Option<String>,

        /// Sort order (name, favorites)
        #[arg(long, default_value = "name")]
        sort: SortMode,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show contact details
    Show {
        /// Contact ID or name
        id: String,
    },

    /// Add a contact
    Add {
        /// Contact name
        name: String,

        /// Contact email
        email: String,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Company
        #[arg(long)]
        company: Option<String>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Edit a contact
    Edit {
        /// Contact ID or name
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email
        #[arg(long)]
        email: Option<String>,

        /// New phone number
        #[arg(long)]
        phone: Option<String>,

        /// New company
        #[arg(long)]
        company: Option<String>,

        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove a contact
    Remove {
        /// Contact ID or name
        id: String,

        /// Skip the confirmation prompt
        #[arg(long, short)]
        yes: bool,
    },

    /// Toggle a contact's favorite flag
    Favorite {
        /// Contact ID or name
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CliConfig {
        data_dir: cli.data_dir.unwrap_or_else(config::default_data_dir),
        api_url: cli.api_url,
        timeout: Duration::from_secs(cli.timeout),
    };
    debug!(
        api_url = %config.api_url,
        data_dir = %config.data_dir.display(),
        "resolved configuration"
    );

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&config, &email, password).await?;
        }
        Commands::Register {
            name,
            email,
            password,
        } => {
            commands::auth::register(&config, &name, &email, password).await?;
        }
        Commands::Logout => commands::auth::logout(&config)?,
        Commands::Whoami => commands::auth::whoami(&config)?,
        Commands::Status => commands::auth::status(&config).await?,
        Commands::Contacts(cmd) => match cmd {
            ContactCommands::List { search, sort, json } => {
                commands::contacts::list(&config, search.as_deref(), sort, json).await?;
            }
            ContactCommands::Show { id } => commands::contacts::show(&config, &id).await?,
            ContactCommands::Add {
                name,
                email,
                phone,
                company,
                notes,
            } => {
                let fields = FieldArgs {
                    phone,
                    company,
                    notes,
                    ..Default::default()
                };
                commands::contacts::add(&config, &name, &email, fields).await?;
            }
            ContactCommands::Edit {
                id,
                name,
                email,
                phone,
                company,
                notes,
            } => {
                let fields = FieldArgs {
                    name,
                    email,
                    phone,
                    company,
                    notes,
                };
                commands::contacts::edit(&config, &id, fields).await?;
            }
            ContactCommands::Remove { id, yes } => {
                commands::contacts::remove(&config, &id, yes).await?;
            }
            ContactCommands::Favorite { id } => {
                commands::contacts::favorite(&config, &id).await?;
            }
        },
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "contactbook", &mut io::stdout());
        }
    }

    Ok(())
}
