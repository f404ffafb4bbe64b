//! Anthropic-backed answer generator

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::http_client::HttpClientTrait;
use crate::domain::generation::AnswerGenerator;
use crate::domain::search::SearchHit;
use crate::domain::session::Exchange;
use crate::domain::DomainError;

const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const MAX_TOKENS: u32 = 1024;

const SYSTEM_PROMPT: &str = "You are a teaching assistant for a set of course materials. \
Answer the question using the course content provided below. \
If the content does not cover the question, say so briefly.";

/// Answer generator backed by the Anthropic Messages API
#[derive(Debug)]
pub struct AnthropicGenerator<C: HttpClientTrait> {
    client: C,
    api_key: String,
    model: String,
    base_url: String,
}

impl<C: HttpClientTrait> AnthropicGenerator<C> {
    pub fn new(client: C, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::with_base_url(client, api_key, model, DEFAULT_ANTHROPIC_BASE_URL)
    }

    pub fn with_base_url(
        client: C,
        api_key: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
            base_url,
        }
    }

    fn messages_url(&self) -> String {
        format!("{}/v1/messages", self.base_url)
    }

    fn headers(&self) -> Vec<(&str, &str)> {
        vec![
            ("x-api-key", self.api_key.as_str()),
            ("anthropic-version", ANTHROPIC_VERSION),
            ("Content-Type", "application/json"),
        ]
    }

    fn build_system_prompt(context: &[SearchHit]) -> String {
        if context.is_empty() {
            return SYSTEM_PROMPT.to_string();
        }

        let mut prompt = String::from(SYSTEM_PROMPT);
        prompt.push_str("\n\nCourse content:\n");

        for hit in context {
            prompt.push_str(&format!("\n[{}]\n{}\n", hit.citation_title(), hit.content));
        }

        prompt
    }

    fn build_messages(query: &str, history: &[Exchange]) -> Vec<AnthropicMessage> {
        let mut messages = Vec::with_capacity(history.len() * 2 + 1);

        for exchange in history {
            messages.push(AnthropicMessage::user(&exchange.query));
            messages.push(AnthropicMessage::assistant(&exchange.answer));
        }

        messages.push(AnthropicMessage::user(query));
        messages
    }

    fn build_request(
        &self,
        query: &str,
        history: &[Exchange],
        context: &[SearchHit],
    ) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": MAX_TOKENS,
            "system": Self::build_system_prompt(context),
            "messages": Self::build_messages(query, history),
        })
    }

    fn parse_response(&self, json: serde_json::Value) -> Result<String, DomainError> {
        let response: AnthropicResponse = serde_json::from_value(json).map_err(|e| {
            DomainError::provider("anthropic", format!("Failed to parse response: {}", e))
        })?;

        let answer = response
            .content
            .into_iter()
            .filter_map(|block| {
                if block.content_type == "text" {
                    block.text
                } else {
                    None
                }
            })
            .collect::<Vec<_>>()
            .join("");

        if answer.is_empty() {
            return Err(DomainError::provider(
                "anthropic",
                "Response contained no text content",
            ));
        }

        Ok(answer)
    }
}

#[async_trait]
impl<C: HttpClientTrait> AnswerGenerator for AnthropicGenerator<C> {
    async fn generate_response(
        &self,
        query: &str,
        history: &[Exchange],
        context: &[SearchHit],
    ) -> Result<String, DomainError> {
        let url = self.messages_url();
        let body = self.build_request(query, history, context);

        let response = self.client.post_json(&url, self.headers(), &body).await?;

        self.parse_response(response)
    }
}

// Anthropic API types

#[derive(Debug, Serialize)]
struct AnthropicMessage {
    role: &'static str,
    content: String,
}

impl AnthropicMessage {
    fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user",
            content: content.into(),
        }
    }

    fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: "assistant",
            content: content.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    text: Option<String>,
}
