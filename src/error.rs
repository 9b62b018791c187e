// src/error.rs
// =============================================================================
// Failure modes shared by both fetchers.
//
// Three things can go wrong when talking to a provider:
// - the request never completes (DNS, connect, timeout, TLS)
// - the provider answers with a non-success status code
// - the provider answers 200 but the body is not the JSON we expected
// and one thing can go "right but empty": a successful response with zero
// items where the caller needs at least one.
//
// Rust concepts:
// - Enums with data: each failure variant carries its own context
// - thiserror: derives std::error::Error and Display for us
// =============================================================================

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while fetching from a provider.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be completed at all.
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered with a non-success status code.
    ///
    /// reqwest does not treat 4xx/5xx as errors on its own, so this is
    /// where a 500 from the API ends up.
    #[error("{url} returned HTTP {status}")]
    Provider { url: String, status: StatusCode },

    /// The provider answered, but the body was not the JSON we expected.
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The provider answered successfully with nothing to show.
    #[error("no {what} found")]
    EmptyResult { what: &'static str },
}

impl FetchError {
    /// True for "the call worked but there was no data", false for actual
    /// request failures. The terminal prints these two cases differently.
    pub fn is_no_data(&self) -> bool {
        matches!(self, FetchError::EmptyResult { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_result_counts_as_no_data() {
        let err = FetchError::EmptyResult {
            what: "repositories",
        };
        assert!(err.is_no_data());
        assert_eq!(err.to_string(), "no repositories found");
    }

    #[test]
    fn provider_error_is_a_request_failure() {
        let err = FetchError::Provider {
            url: "https://api.github.com/users/octocat/repos".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert!(!err.is_no_data());
        assert!(err.to_string().contains("500"));
    }
}
