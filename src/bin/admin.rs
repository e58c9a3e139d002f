//! CLI administration tool for lift-tracker.
//!
//! Provides commands for managing categories, inspecting users, cleaning up
//! sessions, viewing statistics, and performing database checks without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a category (categories have no HTTP create endpoint)
//! cargo run --bin admin -- category create --name Legs
//!
//! # List categories
//! cargo run --bin admin -- category list
//!
//! # List users, or show one user's permissions
//! cargo run --bin admin -- user list
//! cargo run --bin admin -- user show ann
//!
//! # Delete expired sessions
//! cargo run --bin admin -- session purge
//!
//! # View statistics
//! cargo run --bin admin -- stats
//! cargo run --bin admin -- stats --json
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use lift_tracker::application::services::{
    CategoryService, ExerciseService, LiftService, UserService,
};
use lift_tracker::config::{Config, mask_connection_string};
use lift_tracker::domain::repositories::{SessionRepository, UserRepository};
use lift_tracker::infrastructure::Repositories;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing lift-tracker.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage categories
    Category {
        #[command(subcommand)]
        action: CategoryAction,
    },

    /// Inspect users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage login sessions
    Session {
        #[command(subcommand)]
        action: SessionAction,
    },

    /// Show statistics
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum CategoryAction {
    /// Create a new category
    Create {
        /// Category name (prompted for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all categories
    List,
}

#[derive(Subcommand)]
enum UserAction {
    /// List all users
    List,

    /// Show a user's profile and permissions
    Show {
        /// Username
        username: String,
    },
}

#[derive(Subcommand)]
enum SessionAction {
    /// Delete expired sessions
    Purge,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;

    let repositories = Repositories::postgres(Arc::new(pool.clone()));

    match cli.command {
        Commands::Category { action } => handle_category_action(action, &repositories).await?,
        Commands::User { action } => handle_user_action(action, &repositories).await?,
        Commands::Session { action } => handle_session_action(action, &repositories).await?,
        Commands::Stats { json } => handle_stats(&repositories, json).await?,
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
    }

    Ok(())
}

/// Dispatches category commands.
async fn handle_category_action(action: CategoryAction, repos: &Repositories) -> Result<()> {
    let service = CategoryService::new(repos.categories.clone());

    match action {
        CategoryAction::Create { name, yes } => {
            println!("{}", "🏷️  Create Category".bright_blue().bold());
            println!();

            let name = match name {
                Some(n) => n,
                None => Input::new().with_prompt("Category name").interact_text()?,
            };

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Create category \"{}\"?", name.trim()))
                    .default(true)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let category = service
                .create(&name)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create category: {}", e))?;

            println!();
            println!(
                "{} {} (id {})",
                "✅ Created".green().bold(),
                category.name.cyan(),
                category.id.to_string().bright_black()
            );
            println!();
        }
        CategoryAction::List => {
            println!("{}", "📋 Categories".bright_blue().bold());
            println!();

            let categories = service
                .list()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list categories: {}", e))?;

            if categories.is_empty() {
                println!("{}", "  No categories found".yellow());
                println!();
                println!(
                    "  Create one with: {} admin category create",
                    "cargo run --bin".bright_cyan()
                );
                return Ok(());
            }

            println!(
                "  {:<5} {:<40} {:<20}",
                "ID".bright_white().bold(),
                "Name".bright_white().bold(),
                "Created".bright_white().bold()
            );
            println!("  {}", "─".repeat(67).bright_black());

            for category in &categories {
                println!(
                    "  {:<5} {:<40} {}",
                    category.id.to_string().bright_black(),
                    category.name.cyan(),
                    category
                        .date_created
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black()
                );
            }

            println!();
            println!(
                "  Total: {}",
                categories.len().to_string().bright_white().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Dispatches user inspection commands.
async fn handle_user_action(action: UserAction, repos: &Repositories) -> Result<()> {
    // Hashing is never exercised from here; the cost is irrelevant.
    let service = UserService::new(repos.users.clone(), 4);

    match action {
        UserAction::List => {
            println!("{}", "👥 Users".bright_blue().bold());
            println!();

            let users = service
                .list()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

            if users.is_empty() {
                println!("{}", "  No users found".yellow());
                return Ok(());
            }

            println!(
                "  {:<5} {:<30} {:<8} {:<18} {:<18}",
                "ID".bright_white().bold(),
                "Username".bright_white().bold(),
                "Status".bright_white().bold(),
                "Joined".bright_white().bold(),
                "Last login".bright_white().bold()
            );
            println!("  {}", "─".repeat(82).bright_black());

            for user in &users {
                let status = if user.is_active {
                    "ACTIVE".green()
                } else {
                    "INACTIVE".red()
                };
                let last_login = user
                    .last_login
                    .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                    .unwrap_or_else(|| "never".to_string());

                println!(
                    "  {:<5} {:<30} {:<8} {:<18} {}",
                    user.id.to_string().bright_black(),
                    user.username.cyan(),
                    status,
                    user.date_joined
                        .format("%Y-%m-%d %H:%M")
                        .to_string()
                        .bright_black(),
                    last_login.bright_black()
                );
            }

            println!();
            println!("  Total: {}", users.len().to_string().bright_white().bold());
            println!();
        }
        UserAction::Show { username } => {
            let user = repos
                .users
                .find_by_username(&username)
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
                .context("User not found")?;

            let permissions = service
                .permissions(user.id)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to load permissions: {}", e))?;

            println!("{}", "👤 User".bright_blue().bold());
            println!();
            println!("  ID:         {}", user.id.to_string().bright_black());
            println!("  Username:   {}", user.username.cyan());
            println!(
                "  Name:       {} {}",
                user.first_name.bright_white(),
                user.last_name.bright_white()
            );
            println!("  Staff:      {}", user.is_staff);
            println!("  Active:     {}", user.is_active);
            println!("  Permissions:");
            for permission in &permissions {
                println!("    - {}", permission.bright_white());
            }
            println!();
        }
    }

    Ok(())
}

/// Dispatches session maintenance commands.
async fn handle_session_action(action: SessionAction, repos: &Repositories) -> Result<()> {
    match action {
        SessionAction::Purge => {
            println!("{}", "🧹 Purging expired sessions...".bright_blue());

            let removed = repos
                .sessions
                .delete_expired()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to purge sessions: {}", e))?;

            println!(
                "{} {} expired session(s) removed",
                "✅".green(),
                removed.to_string().bright_white().bold()
            );
        }
    }

    Ok(())
}

/// Displays row counts for every entity.
async fn handle_stats(repos: &Repositories, json: bool) -> Result<()> {
    let categories = CategoryService::new(repos.categories.clone());
    let exercises = ExerciseService::new(repos.exercises.clone());
    let lifts = LiftService::new(repos.lifts.clone(), repos.exercises.clone());
    let users = UserService::new(repos.users.clone(), 4);

    let map_err = |e: lift_tracker::AppError| anyhow::anyhow!("Database error: {}", e);

    let categories_count = categories.count().await.map_err(map_err)?;
    let exercises_count = exercises.count().await.map_err(map_err)?;
    let lifts_count = lifts.count().await.map_err(map_err)?;
    let users_count = users.list().await.map_err(map_err)?.len();

    if json {
        let stats = serde_json::json!({
            "users": users_count,
            "categories": categories_count,
            "exercises": exercises_count,
            "lifts": lifts_count,
        });
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();
    println!(
        "  Users:      {}",
        users_count.to_string().bright_green().bold()
    );
    println!(
        "  Categories: {}",
        categories_count.to_string().bright_green().bold()
    );
    println!(
        "  Exercises:  {}",
        exercises_count.to_string().bright_green().bold()
    );
    println!(
        "  Lifts:      {}",
        lifts_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let applied: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM _sqlx_migrations WHERE success",
            )
            .fetch_one(pool)
            .await
            .unwrap_or(0);

            println!("  URL:        {}", mask_connection_string(database_url));
            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", applied.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
