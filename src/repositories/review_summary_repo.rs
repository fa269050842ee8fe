use serde::{Deserialize, Serialize};
use thiserror::Error;

const BASE_URL: &str = "https://api.openai.com/v1";

const SYSTEM_PROMPT: &str =
    "You are a restaurant review summarizer. Highlight key positive and negative points.";

/// Only the first few reviews feed one summary.
const MAX_REVIEWS_PER_SUMMARY: usize = 5;

const SUMMARY_TEMPERATURE: f32 = 0.3;
const SUMMARY_MAX_TOKENS: u32 = 150;

#[derive(Debug, Error)]
pub enum SummarizerError {
    #[error("request to the summarization provider failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("summarization provider returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("summarization provider returned no content")]
    EmptyResponse,
}

pub struct ReviewSummaryRepo {
    http_client: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl ReviewSummaryRepo {
    pub fn new(http_client: reqwest::Client, api_key: String, model: String) -> Self {
        Self {
            http_client,
            api_key,
            model,
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the repo at a different host, for proxies and tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    pub async fn summarize_reviews(
        &self,
        review_texts: &[String],
    ) -> Result<String, SummarizerError> {
        let review_block = review_texts
            .iter()
            .take(MAX_REVIEWS_PER_SUMMARY)
            .cloned()
            .collect::<Vec<String>>()
            .join("\n\n");

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: format!("Summarize these restaurant reviews:\n\n{}", review_block),
                },
            ],
            temperature: SUMMARY_TEMPERATURE,
            max_tokens: SUMMARY_MAX_TOKENS,
        };

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SummarizerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion: ChatResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(SummarizerError::EmptyResponse);
        }
        Ok(content.trim().to_string())
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn repo_for(server: &MockServer) -> ReviewSummaryRepo {
        ReviewSummaryRepo::new(
            reqwest::Client::new(),
            "test-key".to_string(),
            "gpt-4o-mini".to_string(),
        )
        .with_base_url(server.uri())
    }

    #[tokio::test]
    async fn summarize_reviews_returns_the_model_content() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(body_partial_json(json!({"model": "gpt-4o-mini"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "  Diners love the noodles.  "}}
                ]
            })))
            .mount(&server)
            .await;

        let repo = repo_for(&server);
        let summary = repo
            .summarize_reviews(&["Great noodles".to_string()])
            .await
            .expect("summarization should succeed");
        assert_eq!(summary, "Diners love the noodles.");
    }

    #[tokio::test]
    async fn blank_model_content_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [
                    {"message": {"role": "assistant", "content": "   "}}
                ]
            })))
            .mount(&server)
            .await;

        let repo = repo_for(&server);
        let err = repo
            .summarize_reviews(&["Anything".to_string()])
            .await
            .expect_err("blank content should fail");
        assert!(matches!(err, SummarizerError::EmptyResponse));
    }
}
