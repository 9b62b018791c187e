// src/github/fetch.rs
// =============================================================================
// Lists a user's public GitHub repositories.
//
// Strategy:
// - One GET against /users/{user}/repos (no auth, anonymous rate limit)
// - Sort the result ascending by stargazer count; the sort is stable, so
//   repositories with equal star counts keep the order GitHub sent them in
// - Hand back either the typed list or the rendered per-repo text blocks
//
// Rust concepts:
// - serde derive: the wire format maps straight onto a struct, and any
//   response fields we don't declare are simply ignored
// - Option<String>: GitHub sends `description: null` for blank descriptions
// =============================================================================

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::http::get_json;

/// One repository as the GitHub API reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name.
    pub name: String,
    /// Free-text description; `None` when the repository has none.
    pub description: Option<String>,
    /// Number of stargazers.
    pub stargazers_count: u64,
}

/// Fetches the configured user's repositories, least-starred first.
///
/// Returns the full (possibly empty) list; whether an empty list is an
/// error is the rendering step's decision, not this one's.
pub async fn fetch_repositories(
    client: &Client,
    config: &FetchConfig,
) -> Result<Vec<Repository>, FetchError> {
    let mut repos: Vec<Repository> = get_json(client, config.github_repos_url()).await?;

    // sort_by_key is a stable sort; ties keep provider order
    repos.sort_by_key(|repo| repo.stargazers_count);

    Ok(repos)
}

/// Fetches the repositories and renders them as one text summary.
pub async fn fetch_repositories_text(
    client: &Client,
    config: &FetchConfig,
) -> Result<String, FetchError> {
    let repos = fetch_repositories(client, config).await?;
    render_repositories(&repos)
}

/// Fetches the repositories and hands the sorted list to a continuation.
///
/// The callback runs only on success; any failure is returned to the
/// caller untouched instead.
pub async fn fetch_repositories_with<F>(
    client: &Client,
    config: &FetchConfig,
    on_result: F,
) -> Result<(), FetchError>
where
    F: FnOnce(Vec<Repository>),
{
    let repos = fetch_repositories(client, config).await?;
    on_result(repos);
    Ok(())
}

/// Renders one block per repository: name, description, stargazer count.
///
/// An empty list is a hard error here. A summary over zero repositories
/// would be an empty string, which a caller could not tell apart from a
/// swallowed failure.
pub fn render_repositories(repos: &[Repository]) -> Result<String, FetchError> {
    if repos.is_empty() {
        return Err(FetchError::EmptyResult {
            what: "repositories",
        });
    }

    let blocks: Vec<String> = repos
        .iter()
        .map(|repo| {
            format!(
                "{}\n\tDescription: {}\n\tStargazers: {}",
                repo.name,
                repo.description.as_deref().unwrap_or("(none)"),
                repo.stargazers_count
            )
        })
        .collect();

    Ok(blocks.join("\n"))
}
