// src/stackexchange/mod.rs
// =============================================================================
// This module builds a Stack Overflow profile summary from the Stack
// Exchange API.
//
// Submodule:
// - fetch: the three-way concurrent fetch, the profile value type and the
//   text template
// =============================================================================

mod fetch;

// Re-export the public API, mirroring the github module.
pub use fetch::{
    fetch_profile, fetch_profile_text, fetch_profile_with, render_profile, StackExchangeProfile,
};
