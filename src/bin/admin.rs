//! Portfolio Admin CLI
//!
//! Manages the admin login and inspects the site data file. The web panel
//! cannot change the admin credentials; this tool is the only way.
//!
//! # Usage
//!
//! ```bash
//! portfolio-admin init
//! PORTFOLIO_ADMIN_PASSWORD=... portfolio-admin set-admin jane
//! portfolio-admin hash-password hunter2
//! portfolio-admin show
//! ```
//!
//! # Environment Variables
//!
//! - `PORTFOLIO_DATA_PATH`: JSON data file (default: ./data.json)
//! - `PORTFOLIO_ADMIN_PASSWORD`: Password for `set-admin` when `--password` is not given

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use portfolio::config::Config;
use portfolio::db::{self, DataStore};
use portfolio::server::hash_password;

// ============================================================================
// CLI Structure
// ============================================================================

#[derive(Parser)]
#[command(name = "portfolio-admin")]
#[command(version)]
#[command(about = "Portfolio site administration tool")]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty data file if none exists
    Init,
    /// Set the admin username and password
    SetAdmin {
        /// Admin username
        username: String,
        /// Admin password
        #[arg(long, short, env = "PORTFOLIO_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the hash of a password
    HashPassword {
        /// Password to hash
        password: String,
    },
    /// Show a summary of the site content
    Show,
}

// ============================================================================
// Commands
// ============================================================================

fn init(store: &DataStore) -> Result<(), Box<dyn std::error::Error>> {
    if store.exists() {
        println!("Data file already exists: {}", store.path().display());
        return Ok(());
    }

    store.save(&store.load()?)?;
    println!("Created data file: {}", store.path().display());
    Ok(())
}

fn set_admin(
    store: &DataStore,
    username: String,
    password: String,
) -> Result<(), Box<dyn std::error::Error>> {
    if username.trim().is_empty() {
        return Err("Username must not be empty".into());
    }
    if password.is_empty() {
        return Err("Password must not be empty".into());
    }

    let mut doc = store.load()?;
    doc.admin.username = username;
    doc.admin.password_hash = hash_password(&password)?;
    store.save(&doc)?;

    println!("Admin set: {}", doc.admin.username);
    Ok(())
}

fn show(store: &DataStore) -> Result<(), Box<dyn std::error::Error>> {
    let doc = store.load()?;

    println!("Data file: {}", store.path().display());
    println!();

    let admin = if doc.admin.username.is_empty() {
        "(not set)"
    } else {
        doc.admin.username.as_str()
    };
    println!("Admin: {}", admin);
    println!("Name:  {}", doc.profile.name);
    println!("Title: {}", doc.profile.title);
    println!();

    println!("Skills:");
    for skill in &doc.skills {
        println!("  {}. {}: {}", skill.id, skill.category, skill.items.join(", "));
    }
    println!();

    let projects = db::list_projects(&doc);
    println!("{:<6} {:<12} {:<40}", "ID", "TYPE", "TITLE");
    println!("{}", "-".repeat(60));
    for project in projects {
        println!("{:<6} {:<12} {:<40}", project.id, project.kind, project.title);
    }
    println!();
    println!("Total: {} project(s)", projects.len());

    Ok(())
}

// ============================================================================
// Main
// ============================================================================

fn main() {
    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load(cli.config)?;
    let store = DataStore::new(config.data_path);

    match cli.command {
        Commands::Init => init(&store),
        Commands::SetAdmin { username, password } => set_admin(&store, username, password),
        Commands::HashPassword { password } => {
            println!("{}", hash_password(&password)?);
            Ok(())
        }
        Commands::Show => show(&store),
    }
}
