// src/stackexchange/fetch.rs
// =============================================================================
// Builds a Stack Overflow profile summary out of three API calls.
//
// The Stack Exchange API has no single endpoint with everything the
// summary needs, so three requests go out at the same time:
// - /2.2/users/{id}            -> display name and badge counts
// - /2.2/users/{id}/questions  -> only the number of items matters
// - /2.2/users/{id}/answers    -> only the number of items matters
//
// The three are joined all-or-nothing: the profile is built only after
// all of them succeed, and the first failure fails the whole operation.
// There is never a partial profile with made-up zeros standing in for a
// request that failed.
//
// Rust concepts:
// - futures::try_join!: run several futures concurrently on one task and
//   stop at the first error
// - Wire types vs value types: the serde structs mirror the API envelopes,
//   the profile struct is what callers actually see
// =============================================================================

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::FetchConfig;
use crate::error::FetchError;
use crate::http::get_json;

// ---- wire types -------------------------------------------------------------

/// Envelope of the user lookup: `{"items": [{...user...}]}`.
#[derive(Debug, Deserialize)]
struct UserEnvelope {
    #[serde(default)]
    items: Vec<UserItem>,
}

#[derive(Debug, Deserialize)]
struct UserItem {
    display_name: String,
    badge_counts: BadgeCounts,
}

#[derive(Debug, Deserialize)]
struct BadgeCounts {
    gold: u64,
    silver: u64,
    bronze: u64,
}

/// Envelope of the question and answer lists. The entries themselves are
/// never inspected; the summary only counts them.
#[derive(Debug, Deserialize)]
struct ItemsEnvelope {
    #[serde(default)]
    items: Vec<serde_json::Value>,
}

// ---- value type -------------------------------------------------------------

/// The assembled profile. Built once all three responses are in, never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StackExchangeProfile {
    pub display_name: String,
    pub badge_count_gold: u64,
    pub badge_count_silver: u64,
    pub badge_count_bronze: u64,
    pub question_count: usize,
    pub answer_count: usize,
}

/// Fetches the profile with three concurrent requests joined
/// all-or-nothing.
pub async fn fetch_profile(
    client: &Client,
    config: &FetchConfig,
) -> Result<StackExchangeProfile, FetchError> {
    let (user, questions, answers) = futures::try_join!(
        get_json::<UserEnvelope>(client, config.stackexchange_user_url()),
        get_json::<ItemsEnvelope>(client, config.stackexchange_questions_url()),
        get_json::<ItemsEnvelope>(client, config.stackexchange_answers_url()),
    )?;

    build_profile(user, questions, answers)
}

/// Fetches the profile and renders it as the fixed text template.
pub async fn fetch_profile_text(
    client: &Client,
    config: &FetchConfig,
) -> Result<String, FetchError> {
    let profile = fetch_profile(client, config).await?;
    Ok(render_profile(&profile))
}

/// Fetches the profile and hands it to a continuation on success.
pub async fn fetch_profile_with<F>(
    client: &Client,
    config: &FetchConfig,
    on_result: F,
) -> Result<(), FetchError>
where
    F: FnOnce(StackExchangeProfile),
{
    let profile = fetch_profile(client, config).await?;
    on_result(profile);
    Ok(())
}

// Pure extraction step, split out so the rules are testable without any
// network in sight.
fn build_profile(
    user: UserEnvelope,
    questions: ItemsEnvelope,
    answers: ItemsEnvelope,
) -> Result<StackExchangeProfile, FetchError> {
    // An unknown user id is still HTTP 200, just with an empty items array
    let user = user
        .items
        .into_iter()
        .next()
        .ok_or(FetchError::EmptyResult {
            what: "Stack Exchange user",
        })?;

    Ok(StackExchangeProfile {
        display_name: user.display_name,
        badge_count_gold: user.badge_counts.gold,
        badge_count_silver: user.badge_counts.silver,
        badge_count_bronze: user.badge_counts.bronze,
        question_count: questions.items.len(),
        answer_count: answers.items.len(),
    })
}

/// Renders the profile into the multi-line terminal template.
pub fn render_profile(profile: &StackExchangeProfile) -> String {
    format!(
        "My StackOverflow profile:\n\
         \tUsername: {}\n\
         \tNo. of badges:\n\
         \t\tGold: {}\n\
         \t\tSilver: {}\n\
         \t\tBronze: {}\n\
         \tNo. of questions asked: {}\n\
         \tNo. of answers given: {}",
        profile.display_name,
        profile.badge_count_gold,
        profile.badge_count_silver,
        profile.badge_count_bronze,
        profile.question_count,
        profile.answer_count
    )
}
