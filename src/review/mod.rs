// Code review pipeline
//
// A review is one round trip: build the prompt, send it to the model,
// sanitize the markdown that comes back. The pieces here are pure
// functions over their inputs; nothing is persisted between requests.

mod language;
pub mod prompt;
mod sanitize;

pub use language::detect_language;
pub use sanitize::sanitize;

use serde::Deserialize;

/// One review request as posted by the client.
///
/// Transient: constructed per call, discarded once the response is sent.
#[derive(Debug, Clone, Deserialize)]
pub struct ReviewRequest {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub language: Option<String>,
}

/// Pick the language tag for a request.
///
/// An explicit, non-empty label always wins; the sniffer only fills in a
/// missing one, and `default` applies when it abstains.
pub fn resolve_language<'a>(explicit: Option<&'a str>, code: &str, default: &'a str) -> &'a str {
    match explicit {
        Some(lang) if !lang.trim().is_empty() => lang,
        _ => detect_language(code).unwrap_or(default),
    }
}
