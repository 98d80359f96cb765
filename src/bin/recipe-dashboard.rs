// ABOUTME: Recipe dashboard CLI - renders the list and detail pages in the terminal
// ABOUTME: Reads the API key from the environment and drives views through the navigator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Recipe Dashboard Contributors
//!
//! Usage:
//! ```bash
//! # Popular recipes with statistics
//! recipe-dashboard list
//!
//! # Vegan recipes whose title mentions tacos
//! recipe-dashboard list --query tacos --diet vegan
//!
//! # Open a deep link
//! recipe-dashboard show /recipe/716429
//!
//! # Recipe detail by id
//! recipe-dashboard detail 716429
//! ```

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use recipe_core::models::{DietSelector, FilterCriteria, RecipeId};
use recipe_dashboard::config::DashboardConfig;
use recipe_dashboard::external::SpoonacularClient;
use recipe_dashboard::logging::LoggingConfig;
use recipe_dashboard::navigator::{ActiveView, Navigator};
use recipe_dashboard::routes::Route;
use recipe_dashboard::AppResult;
use tracing::{error, info};

#[derive(Parser)]
#[command(
    name = "recipe-dashboard",
    about = "Recipe Dashboard",
    long_about = "Browse popular recipes, filter by title and diet, and inspect nutrition for one recipe."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show the recipe list with statistics
    List {
        /// Case-insensitive title filter
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        /// Diet filter: all, vegetarian, vegan, gluten-free
        #[arg(long, short = 'd', default_value = "all")]
        diet: DietSelector,
    },

    /// Render a route path such as `/` or `/recipe/716429`
    Show {
        /// Route path
        path: String,
    },

    /// Show one recipe with its nutrition charts
    Detail {
        /// Recipe id
        id: RecipeId,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    if let Err(e) = logging.init() {
        eprintln!("{e}");
    }

    match run(cli.command).await {
        Ok(page) => {
            print!("{page}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(code = ?e.code, "{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> AppResult<String> {
    let config = DashboardConfig::from_env()?;
    info!(environment = %config.environment, "Configuration ready");

    let client = SpoonacularClient::new(config.api, &config.http)?;
    let navigator = Navigator::new(Arc::new(client));

    match command {
        Command::List { query, diet } => {
            if let ActiveView::List(view) = navigator.mount(Route::Home).await {
                view.set_criteria(FilterCriteria::new(query, diet)).await;
                view.load().await;
            }
        }
        Command::Show { path } => {
            navigator.go(Route::parse(&path)?).await;
        }
        Command::Detail { id } => {
            navigator.go(Route::Recipe(id)).await;
        }
    }

    let page = navigator.render().await;
    navigator.close().await;
    Ok(page)
}
