// src/github/mod.rs
// =============================================================================
// This module fetches a user's public repositories from the GitHub API.
//
// Submodule:
// - fetch: the request itself, the star-count sort and the text summary
// =============================================================================

mod fetch;

// Re-export the public API so callers write `github::fetch_repositories()`
// instead of reaching into the submodule.
pub use fetch::{
    fetch_repositories, fetch_repositories_text, fetch_repositories_with, render_repositories,
    Repository,
};
