//! LigaMeet CLI - operator tool for the league database
//!
//! Applies migrations and runs the membership workflows (player approval,
//! join request decisions) against a PostgreSQL or SQLite database.

mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ligameet_db::{entities::account, Store};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

use config::Settings;

/// LigaMeet - league and tournament database tool
#[derive(Parser, Debug)]
#[command(name = "ligameet")]
#[command(about = "LigaMeet - league and tournament database tool")]
#[command(version = env!("GIT_TAG"))]
#[command(long_version = concat!(env!("GIT_TAG"), "\nCommit: ", env!("GIT_HASH"), "\nBuilt: ", env!("BUILD_TIME")))]
struct Cli {
    /// Database connection string (overrides the settings file)
    #[arg(long, global = true, env = "LIGAMEET_DATABASE_URL")]
    database_url: Option<String>,

    /// Settings file (default: nearest .ligameet.yml upwards from the current directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply pending schema migrations
    Migrate,

    /// Manage account mirrors
    Account {
        #[command(subcommand)]
        command: AccountCommands,
    },

    /// Inspect teams and approve players
    Team {
        #[command(subcommand)]
        command: TeamCommands,
    },

    /// Decide join requests
    JoinRequest {
        #[command(subcommand)]
        command: JoinRequestCommands,
    },
}

#[derive(Subcommand, Debug)]
enum AccountCommands {
    /// Create an account
    Add { username: String },
}

#[derive(Subcommand, Debug)]
enum TeamCommands {
    /// Show a team with its players
    Show { id: Uuid },

    /// Move a pending player to the confirmed roster
    ApprovePlayer {
        #[arg(long)]
        team: Uuid,

        #[arg(long)]
        account: Uuid,
    },
}

#[derive(Subcommand, Debug)]
enum JoinRequestCommands {
    /// Mark a request approved (membership unchanged)
    Approve { id: Uuid },

    /// Mark a request rejected
    Reject { id: Uuid },

    /// Approve a request and confirm the requester on the team
    Accept { id: Uuid },
}

fn init_logging(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .context("Failed to initialize logging filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    Ok(())
}

fn load_settings(path: Option<&PathBuf>) -> Result<Settings> {
    match path {
        Some(path) => Settings::load(path),
        None => Ok(Settings::discover()?
            .map(|(_, settings)| settings)
            .unwrap_or_default()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings(cli.config.as_ref())?;
    let log_level = if cli.verbose {
        "debug".to_string()
    } else {
        cli.log_level.clone().unwrap_or(settings.log_level.clone())
    };
    init_logging(&log_level)?;

    let database_url = cli
        .database_url
        .map(|url| config::expand_env_vars(&url))
        .unwrap_or(settings.database_url);

    let db = ligameet_db::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", database_url))?;
    ligameet_db::migrate(&db)
        .await
        .context("Failed to run migrations")?;

    let store = Store::new(db);

    match cli.command {
        Commands::Migrate => {
            println!("Schema is up to date");
        }
        Commands::Account { command } => handle_account_command(&store, command).await?,
        Commands::Team { command } => handle_team_command(&store, command).await?,
        Commands::JoinRequest { command } => handle_join_request_command(&store, command).await?,
    }

    Ok(())
}

async fn handle_account_command(store: &Store, command: AccountCommands) -> Result<()> {
    match command {
        AccountCommands::Add { username } => {
            let account = store
                .create_account(&username)
                .await
                .with_context(|| format!("Failed to create account {}", username))?;
            info!("Account {} created", account.id);
            println!("{}\t{}", account.id, account.username);
        }
    }

    Ok(())
}

async fn handle_team_command(store: &Store, command: TeamCommands) -> Result<()> {
    match command {
        TeamCommands::Show { id } => {
            let roster = store
                .team_roster(id)
                .await
                .with_context(|| format!("Failed to load team {}", id))?;

            println!("{} ({})", roster.team, roster.team.id);
            println!("type: {}", roster.team.team_type);
            println!("score: {}", roster.team.score);
            print_accounts("confirmed", &roster.confirmed);
            print_accounts("pending", &roster.pending);
            println!("participants: {}", roster.participants.len());
        }
        TeamCommands::ApprovePlayer { team, account } => {
            let moved = store
                .approve_player(team, account)
                .await
                .with_context(|| format!("Failed to approve {} on team {}", account, team))?;

            if moved {
                println!("{} confirmed on team {}", account, team);
            } else {
                println!("{} is not pending on team {}", account, team);
            }
        }
    }

    Ok(())
}

async fn handle_join_request_command(store: &Store, command: JoinRequestCommands) -> Result<()> {
    let request = match command {
        JoinRequestCommands::Approve { id } => store.approve_join_request(id).await,
        JoinRequestCommands::Reject { id } => store.reject_join_request(id).await,
        JoinRequestCommands::Accept { id } => store.accept_join_request(id).await,
    }
    .context("Failed to update join request")?;

    println!(
        "{}\t{}\taccount={}\tteam={}",
        request.id, request.status, request.account_id, request.team_id
    );
    Ok(())
}

fn print_accounts(label: &str, accounts: &[account::Model]) {
    println!("{}: {}", label, accounts.len());
    for account in accounts {
        println!("  {}\t{}", account.id, account.username);
    }
}
