// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes. Commands mirror the profiles the tool
// knows about: `github` for the repository list, `stackoverflow` for the
// profile summary, `about` for a short introduction with links.
// =============================================================================

use clap::{Parser, Subcommand};

// This struct represents our entire CLI application
#[derive(Parser, Debug)]
#[command(
    name = "devcard",
    version,
    about = "Show a developer's GitHub repositories and Stack Overflow profile in the terminal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

// This enum defines our subcommands (github, stackoverflow, about)
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List public GitHub repositories, least-starred first
    ///
    /// Example: devcard github --user torvalds
    Github {
        /// GitHub username to look up instead of the configured default
        #[arg(long)]
        user: Option<String>,

        /// Output the repository list as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },

    /// Show a Stack Overflow profile summary (badges, questions, answers)
    ///
    /// Example: devcard stackoverflow --user-id 22656
    Stackoverflow {
        /// Numeric Stack Exchange user id instead of the configured default
        #[arg(long)]
        user_id: Option<u64>,

        /// Stack Exchange site the user id belongs to
        #[arg(long)]
        site: Option<String>,

        /// Output the profile as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },

    /// Print a short introduction and where to find the profiles
    About,
}
