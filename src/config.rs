// src/config.rs
// =============================================================================
// Where the fetchers point and who they ask about.
//
// The target account names used to be hardwired into the request code;
// they live here as defaults instead, next to the API base URLs. Making
// the bases part of the configuration means tests can aim the fetchers at
// a local mock server instead of the real providers.
// =============================================================================

use std::time::Duration;

use reqwest::Client;
use url::Url;

/// Default GitHub account whose repositories are listed.
pub const DEFAULT_GITHUB_USER: &str = "rettetdemdativ";

/// Default Stack Exchange numeric user id.
pub const DEFAULT_STACKEXCHANGE_USER_ID: u64 = 2593209;

/// Default Stack Exchange site the profile lives on.
pub const DEFAULT_STACKEXCHANGE_SITE: &str = "stackoverflow";

// Bounded so a dead provider cannot hang the terminal
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Everything the fetchers need to know about where and whom.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// GitHub username whose repositories are fetched.
    pub github_user: String,
    /// Base URL of the GitHub REST API.
    pub github_api_base: Url,
    /// Numeric Stack Exchange user id to look up.
    pub stackexchange_user_id: u64,
    /// Stack Exchange site the user id belongs to (e.g. "stackoverflow").
    pub stackexchange_site: String,
    /// Base URL of the Stack Exchange REST API.
    pub stackexchange_api_base: Url,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            github_user: DEFAULT_GITHUB_USER.to_string(),
            github_api_base: Url::parse("https://api.github.com")
                .expect("default GitHub API base is a valid URL"),
            stackexchange_user_id: DEFAULT_STACKEXCHANGE_USER_ID,
            stackexchange_site: DEFAULT_STACKEXCHANGE_SITE.to_string(),
            stackexchange_api_base: Url::parse("https://api.stackexchange.com")
                .expect("default Stack Exchange API base is a valid URL"),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl FetchConfig {
    /// Builds the HTTP client both fetchers share.
    ///
    /// GitHub rejects anonymous requests without a User-Agent header, so
    /// one is always sent.
    pub fn http_client(&self) -> reqwest::Result<Client> {
        Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
    }

    /// `GET /users/{user}/repos` on the GitHub API.
    pub fn github_repos_url(&self) -> Url {
        let mut url = self.github_api_base.clone();
        url.set_path(&format!("users/{}/repos", self.github_user));
        url
    }

    /// `GET /2.2/users/{id}` on the Stack Exchange API.
    pub fn stackexchange_user_url(&self) -> Url {
        self.stackexchange_url(None, "reputation")
    }

    /// `GET /2.2/users/{id}/questions`.
    pub fn stackexchange_questions_url(&self) -> Url {
        self.stackexchange_url(Some("questions"), "activity")
    }

    /// `GET /2.2/users/{id}/answers`.
    pub fn stackexchange_answers_url(&self) -> Url {
        self.stackexchange_url(Some("answers"), "activity")
    }

    // All three Stack Exchange endpoints share the same path prefix and
    // query string shape; only the trailing segment and sort key differ.
    fn stackexchange_url(&self, segment: Option<&str>, sort: &str) -> Url {
        let mut url = self.stackexchange_api_base.clone();
        let mut path = format!("2.2/users/{}", self.stackexchange_user_id);
        if let Some(segment) = segment {
            path.push('/');
            path.push_str(segment);
        }
        url.set_path(&path);
        url.query_pairs_mut()
            .append_pair("order", "desc")
            .append_pair("sort", sort)
            .append_pair("site", &self.stackexchange_site);
        url
    }

    /// Public profile page on GitHub, for the `about` command.
    pub fn github_profile_link(&self) -> String {
        format!("https://github.com/{}", self.github_user)
    }

    /// Public profile page on Stack Overflow, for the `about` command.
    pub fn stackoverflow_profile_link(&self) -> String {
        format!(
            "https://stackoverflow.com/users/{}",
            self.stackexchange_user_id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn github_repos_url_matches_the_provider_layout() {
        let config = FetchConfig::default();
        assert_eq!(
            config.github_repos_url().as_str(),
            "https://api.github.com/users/rettetdemdativ/repos"
        );
    }

    #[test]
    fn stackexchange_urls_carry_the_full_query_string() {
        let config = FetchConfig::default();
        assert_eq!(
            config.stackexchange_user_url().as_str(),
            "https://api.stackexchange.com/2.2/users/2593209?order=desc&sort=reputation&site=stackoverflow"
        );
        assert_eq!(
            config.stackexchange_questions_url().as_str(),
            "https://api.stackexchange.com/2.2/users/2593209/questions?order=desc&sort=activity&site=stackoverflow"
        );
        assert_eq!(
            config.stackexchange_answers_url().as_str(),
            "https://api.stackexchange.com/2.2/users/2593209/answers?order=desc&sort=activity&site=stackoverflow"
        );
    }

    #[test]
    fn base_url_override_is_respected() {
        let mut config = FetchConfig::default();
        config.github_api_base = Url::parse("http://127.0.0.1:8080").unwrap();
        config.github_user = "someone".to_string();
        assert_eq!(
            config.github_repos_url().as_str(),
            "http://127.0.0.1:8080/users/someone/repos"
        );
    }

    #[test]
    fn profile_links_follow_the_configured_accounts() {
        let mut config = FetchConfig::default();
        config.github_user = "octocat".to_string();
        config.stackexchange_user_id = 22656;
        assert_eq!(config.github_profile_link(), "https://github.com/octocat");
        assert_eq!(
            config.stackoverflow_profile_link(),
            "https://stackoverflow.com/users/22656"
        );
    }
}
