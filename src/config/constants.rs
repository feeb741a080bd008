// Project-wide constants
//
// Centralised here so addresses and other magic values have one
// source of truth. Import via `use crate::config::constants::*;`.

/// Default bind address for the review server (localhost only).
pub const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:8000";

/// Gemini model used when the config does not name one.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

/// Language tag used when a request carries no language and the
/// heuristic sniffer abstains.
pub const DEFAULT_LANGUAGE: &str = "javascript";

/// Environment variable holding the Gemini API key.
pub const GEMINI_KEY_ENV: &str = "GOOGLE_GEMINI_KEY";

/// Timeout for a single Gemini request, in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 60;

/// Maximum accepted request body.
///
/// 4MB is generous for source snippets while blocking obvious DoS
/// payloads.
pub const MAX_BODY_BYTES: usize = 4 * 1024 * 1024;
