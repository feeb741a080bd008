// Review model providers
//
// Abstraction over the external generative model so the HTTP layer and
// tests can swap implementations without touching the review pipeline.
// The process entry point owns the concrete client and injects it at
// construction time; there is no module-level singleton.

use async_trait::async_trait;

use crate::errors::Result;

pub mod gemini;

pub use gemini::GeminiClient;

/// Trait for generative review models
#[async_trait]
pub trait ReviewModel: Send + Sync {
    /// Send a prompt and return the model's markdown response.
    ///
    /// One call per review; the implementation does not retry.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Provider name (e.g., "gemini")
    fn name(&self) -> &str;

    /// Model identifier this provider sends requests to
    fn default_model(&self) -> &str;
}
