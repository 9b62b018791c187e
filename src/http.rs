// src/http.rs
// =============================================================================
// The one place a request actually goes out.
//
// Both fetchers speak plain "GET this URL, give me JSON", so the
// send / status check / decode sequence lives here once. Error mapping:
// - send() failed            -> FetchError::Network
// - non-success status code  -> FetchError::Provider
// - body not the right JSON  -> FetchError::Decode
//
// The status check is not optional: reqwest happily returns Ok for a 500
// response, and without the check that 500 would surface as a confusing
// decode error on the provider's error body.
// =============================================================================

use reqwest::Client;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::FetchError;

/// Performs one GET and decodes the JSON body into `T`.
pub(crate) async fn get_json<T>(client: &Client, url: Url) -> Result<T, FetchError>
where
    T: DeserializeOwned,
{
    let response = client
        .get(url.clone())
        .send()
        .await
        .map_err(|source| FetchError::Network {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Provider {
            url: url.to_string(),
            status,
        });
    }

    response.json().await.map_err(|source| FetchError::Decode {
        url: url.to_string(),
        source,
    })
}
