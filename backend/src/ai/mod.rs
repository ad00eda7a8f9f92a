//! AI module for scene generation.
//!
//! Uses an OpenAI-compatible chat completions API to turn a verse prompt
//! into a [`SceneConfig`]. Output is guarded: the returned JSON is extracted
//! from possible markdown fences, validated against the scene schema, then
//! deserialized. Callers fall back to [`crate::scene::rule_based_scene`]
//! when anything in this chain fails.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use studyverse_backend::ai::AiClient;
//!
//! let client = AiClient::from_env()?;
//! let scene = client.generate_scene("a lego city at night").await?;
//! ```

pub mod prompt;

use serde::Deserialize;
use std::env;

use crate::error::{AiError, AiResult};
use crate::models::SceneConfig;
use crate::validation::validate_scene;

pub use prompt::{build_messages, system_prompt, user_prompt};

/// Chat completions API client.
#[derive(Clone)]
pub struct AiClient {
    api_key: String,
    endpoint: String,
    model: String,
    max_tokens: u32,
}

/// Completions API response structure.
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: String,
}

/// Completions API error response.
#[derive(Debug, Deserialize)]
struct ApiErrorResponse {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Default number of retries.
const DEFAULT_MAX_RETRIES: u32 = 3;

/// Delay between retries in milliseconds.
const RETRY_DELAY_MS: u64 = 1000;

/// Default completions endpoint.
const DEFAULT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

impl AiClient {
    /// Create a new client with explicit API key.
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: "gpt-4o-mini".to_string(),
            max_tokens: 600,
        }
    }

    /// Create a client from environment variable `OPENAI_API_KEY`.
    pub fn from_env() -> AiResult<Self> {
        // Try loading .env file
        let _ = dotenvy::dotenv();

        let api_key = env::var("OPENAI_API_KEY").map_err(|_| AiError::MissingApiKey)?;

        Ok(Self::new(api_key))
    }

    /// Whether an API key is configured in the environment.
    pub fn key_available() -> bool {
        let _ = dotenvy::dotenv();
        env::var("OPENAI_API_KEY").is_ok()
    }

    /// Set the model to use.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Set max tokens.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Point at a different completions endpoint.
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = endpoint.to_string();
        self
    }

    /// Generate a scene config for the prompt (with retries).
    pub async fn generate_scene(&self, verse_prompt: &str) -> AiResult<SceneConfig> {
        let mut last_error = None;

        for attempt in 1..=DEFAULT_MAX_RETRIES {
            match self.try_generate_scene(verse_prompt).await {
                Ok(scene) => return Ok(scene),
                Err(e) => {
                    eprintln!(
                        "   ⚠️  Attempt {}/{} failed: {}",
                        attempt, DEFAULT_MAX_RETRIES, e
                    );
                    last_error = Some(e);

                    if attempt < DEFAULT_MAX_RETRIES {
                        eprintln!("   ↻ Retrying in {}ms...", RETRY_DELAY_MS);
                        tokio::time::sleep(tokio::time::Duration::from_millis(RETRY_DELAY_MS))
                            .await;
                    }
                }
            }
        }

        Err(last_error.unwrap_or_else(|| AiError::ApiError("Unknown error".to_string())))
    }

    /// Single attempt to generate a scene.
    async fn try_generate_scene(&self, verse_prompt: &str) -> AiResult<SceneConfig> {
        let response = self.call_api(verse_prompt).await?;
        parse_scene_from_response(&response)
    }

    /// Call the completions API.
    async fn call_api(&self, verse_prompt: &str) -> AiResult<String> {
        println!("   📡 Calling completions API...");
        println!("      Model: {}", self.model);
        println!("      Max tokens: {}", self.max_tokens);

        let client = reqwest::Client::new();

        let request_body = serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": 0.7,
            "messages": prompt::build_messages(verse_prompt),
        });

        let response = client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiError::HttpError(e.to_string()))?;

        let status = response.status();
        println!("      Response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(|e| AiError::HttpError(e.to_string()))?;

        if !status.is_success() {
            if let Ok(error) = serde_json::from_str::<ApiErrorResponse>(&body) {
                println!("      ✗ API error: {}", error.error.message);
                return Err(AiError::ApiError(error.error.message));
            }
            println!("      ✗ HTTP error: {}", status);
            return Err(AiError::ApiError(format!("HTTP {}: {}", status, body)));
        }

        let response: CompletionResponse =
            serde_json::from_str(&body).map_err(|e| AiError::InvalidResponse(e.to_string()))?;

        let text = response
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AiError::InvalidResponse("Empty response".to_string()));
        }

        println!("      ✓ Received {} bytes", text.len());
        Ok(text)
    }
}

/// Parse a scene config from the model's text response.
fn parse_scene_from_response(response: &str) -> AiResult<SceneConfig> {
    let json_str = extract_json(response);

    let value: serde_json::Value = serde_json::from_str(&json_str).map_err(|e| {
        AiError::InvalidResponse(format!(
            "Failed to parse scene JSON: {}. Response was: {}",
            e,
            &response[..response.len().min(500)]
        ))
    })?;

    validate_scene(&value)
        .map_err(|errors| AiError::InvalidResponse(format!("Schema violations: {:?}", errors)))?;

    serde_json::from_value(value).map_err(|e| AiError::InvalidResponse(e.to_string()))
}

/// Extract JSON from a response that may contain markdown code blocks.
fn extract_json(text: &str) -> String {
    // Try to find JSON in a ```json code block
    if let Some(start) = text.find("```json") {
        if let Some(end) = text[start..].find("```\n").or_else(|| text[start..].rfind("```")) {
            let json_start = start + 7; // len of "```json"
            if json_start < start + end {
                return text[json_start..start + end].trim().to_string();
            }
        }
    }

    // Try to find JSON in a generic code block
    if let Some(start) = text.find("```") {
        let after_start = start + 3;
        // Skip language identifier if present
        let content_start = text[after_start..]
            .find('\n')
            .map(|i| after_start + i + 1)
            .unwrap_or(after_start);

        if let Some(end) = text[content_start..].find("```") {
            return text[content_start..content_start + end].trim().to_string();
        }
    }

    // Try to find a raw JSON object
    if let Some(start) = text.find('{') {
        if let Some(end) = text.rfind('}') {
            if start < end {
                return text[start..=end].to_string();
            }
        }
    }

    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_json_from_code_block() {
        let response = r##"Here's the scene:

```json
{
  "title": "Misty Peaks",
  "background": "#0c1620"
}
```

Done!"##;

        let json = extract_json(response);
        assert!(json.contains("\"title\""));
        assert!(json.contains("Misty Peaks"));
    }

    #[test]
    fn test_extract_raw_json() {
        let response = r##"{"title": "Misty Peaks", "background": "#0c1620"}"##;
        let json = extract_json(response);
        assert_eq!(json, response);
    }

    #[test]
    fn test_parse_valid_scene_response() {
        let response = r##"```json
{
  "title": "Desert Dunes",
  "background": "#2a1a0c",
  "lights": [{ "type": "ambient", "intensity": 0.9, "color": "#ffe8c2" }],
  "objects": [{ "kind": "sphere", "position": [0, 0.5, 0], "rotation": [0, 0, 0], "scale": [1, 1, 1], "color": "#e9c46a", "metalness": 0.1, "roughness": 0.9 }],
  "camera": [6, 4, 8]
}
```"##;

        let scene = parse_scene_from_response(response).unwrap();
        assert_eq!(scene.title, "Desert Dunes");
        assert_eq!(scene.objects.len(), 1);
    }

    #[test]
    fn test_parse_rejects_schema_violation() {
        // "dragon" is not a valid object kind
        let response = r##"{
            "title": "Bad Scene",
            "background": "#000000",
            "lights": [{ "type": "ambient", "intensity": 0.8, "color": "#ffffff" }],
            "objects": [{ "kind": "dragon" }],
            "camera": [6, 4, 8]
        }"##;

        let err = parse_scene_from_response(response).unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(_)));
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_scene_from_response("I cannot make a scene for that.").unwrap_err();
        assert!(matches!(err, AiError::InvalidResponse(_)));
    }
}
