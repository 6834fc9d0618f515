//! LLM client trait
//!
//! Narrow seam between the review logic and the remote provider; tests
//! substitute a mock implementation.

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Call the LLM with system + user prompts, return the raw text response.
    async fn chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;

    /// Model name, for logging.
    fn model_name(&self) -> &str;
}
