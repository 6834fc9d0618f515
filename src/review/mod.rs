//! Code review via a remote LLM
//!
//! `LlmClient` is the provider seam, `OpenAiClient` the concrete
//! implementation, and `Reviewer` the façade the route handlers call.

mod llm_client;
mod openai_client;

pub use llm_client::LlmClient;
pub use openai_client::OpenAiClient;

use std::sync::Arc;

/// Fixed text returned in place of a review when the remote call fails.
pub const REVIEW_FAILURE_TEXT: &str = "Error calling OpenAI API";

const SYSTEM_PROMPT: &str = "You are a helpful assistant that reviews code.";

/// Produces code reviews for file contents.
///
/// Remote failures never propagate: they are logged and replaced with
/// [`REVIEW_FAILURE_TEXT`], so a review page always renders.
pub struct Reviewer {
    client: Arc<dyn LlmClient>,
}

impl Reviewer {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Request a review of `file_content`. Always returns markdown text,
    /// the sentinel failure text if the API call fails.
    pub async fn review(&self, file_content: &str) -> String {
        let user_prompt = format!(
            "Please review the following code in Korean:\n\n{}",
            file_content
        );
        match self.client.chat(SYSTEM_PROMPT, &user_prompt).await {
            Ok(review) => review,
            Err(e) => {
                tracing::error!("Error calling OpenAI API: {}", e);
                REVIEW_FAILURE_TEXT.to_string()
            }
        }
    }
}
