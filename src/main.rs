// src/main.rs
// =============================================================================
// This is the entry point of the devcard CLI.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Build the fetch configuration (defaults plus CLI overrides)
// 3. Dispatch to the handler for the chosen command
// 4. Print the result and exit with a meaningful code
//
// Exit codes:
//   0 = success
//   1 = the fetch worked but there was nothing to show
//   2 = a request failed or an internal error occurred
//
// "Nothing to show" and "request failed" are printed differently on
// purpose; an empty account and a dead API are not the same situation.
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod config; // src/config.rs - who to ask about and where
mod error; // src/error.rs - fetch failure taxonomy
mod github; // src/github/ - repository fetcher
mod http; // src/http.rs - shared GET-and-decode helper
mod stackexchange; // src/stackexchange/ - profile fetcher
#[cfg(test)]
mod testing; // src/testing.rs - mock API server for tests

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};
use config::FetchConfig;
use error::FetchError;

// The #[tokio::main] attribute creates a tokio runtime and runs our async
// code inside it
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // An unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Github { user, json } => {
            let mut config = FetchConfig::default();
            if let Some(user) = user {
                config.github_user = user;
            }
            handle_github(&config, json).await
        }
        Commands::Stackoverflow {
            user_id,
            site,
            json,
        } => {
            let mut config = FetchConfig::default();
            if let Some(user_id) = user_id {
                config.stackexchange_user_id = user_id;
            }
            if let Some(site) = site {
                config.stackexchange_site = site;
            }
            handle_stackoverflow(&config, json).await
        }
        Commands::About => Ok(handle_about(&FetchConfig::default())),
    }
}

// Handles the 'github' subcommand
async fn handle_github(config: &FetchConfig, json: bool) -> Result<i32> {
    println!(
        "🔍 Fetching GitHub repositories for {}...\n",
        config.github_user
    );

    let client = config.http_client()?;

    if json {
        // JSON mode consumes through the continuation variant; the callback
        // only runs when the fetch succeeded
        match github::fetch_repositories_with(&client, config, |repos| print_json(&repos)).await {
            Ok(()) => Ok(0),
            Err(e) => Ok(report_fetch_error(e)),
        }
    } else {
        match github::fetch_repositories_text(&client, config).await {
            Ok(summary) => {
                println!("{}", summary);
                Ok(0)
            }
            Err(e) => Ok(report_fetch_error(e)),
        }
    }
}

// Handles the 'stackoverflow' subcommand
async fn handle_stackoverflow(config: &FetchConfig, json: bool) -> Result<i32> {
    println!(
        "🔍 Fetching Stack Exchange user {} on {}...\n",
        config.stackexchange_user_id, config.stackexchange_site
    );

    let client = config.http_client()?;

    if json {
        match stackexchange::fetch_profile_with(&client, config, |profile| print_json(&profile))
            .await
        {
            Ok(()) => Ok(0),
            Err(e) => Ok(report_fetch_error(e)),
        }
    } else {
        match stackexchange::fetch_profile_text(&client, config).await {
            Ok(summary) => {
                println!("{}", summary);
                Ok(0)
            }
            Err(e) => Ok(report_fetch_error(e)),
        }
    }
}

// Handles the 'about' subcommand; purely local, nothing to fetch
fn handle_about(config: &FetchConfig) -> i32 {
    println!("{}", ABOUT);
    println!("   GitHub:         {}", config.github_profile_link());
    println!("   Stack Overflow: {}", config.stackoverflow_profile_link());
    0
}

const ABOUT: &str = "\
👋 devcard shows a developer's public profiles without leaving the terminal.\n\
   Repositories come from the GitHub API, profile statistics from the\n\
   Stack Exchange API. The profiles live here:";

// Pretty-prints any serializable value for the --json modes.
//
// Serializing our own derived types cannot fail.
fn print_json<T: serde::Serialize>(value: &T) {
    let text = serde_json::to_string_pretty(value).expect("value serializes to JSON");
    println!("{}", text);
}

// Decides how a fetch failure is shown and which exit code it maps to.
//
// EmptyResult means the provider answered and there was simply nothing
// there; everything else means the request itself went wrong.
fn report_fetch_error(error: FetchError) -> i32 {
    if error.is_no_data() {
        println!("⚠️  Nothing to show: {}", error);
        1
    } else {
        eprintln!("❌ Request failed: {}", error);
        2
    }
}
