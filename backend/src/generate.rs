//! Scene generation orchestration.
//!
//! Decides between the AI path and the rule-based themes:
//!
//! ```text
//! ┌──────────┐     ┌─────────────┐     ┌──────────────┐
//! │  Prompt  │────▶│  AI client  │────▶│  SceneConfig │
//! │          │     │ (if key set)│     │  (validated) │
//! └──────────┘     └──────┬──────┘     └──────────────┘
//!                         │ any failure
//!                         ▼
//!                  rule_based_scene
//! ```
//!
//! The AI path never surfaces an error to the caller: every failure
//! (missing key, HTTP, parse, schema) falls back to the keyword rules.

use crate::ai::AiClient;
use crate::models::SceneConfig;
use crate::scene::rule_based_scene;

/// Generate a scene for a verse prompt.
///
/// With `offline` set (or no `OPENAI_API_KEY` in the environment) the
/// rule-based themes are used directly.
pub async fn generate_scene(prompt: &str, offline: bool) -> SceneConfig {
    if offline || !AiClient::key_available() {
        return rule_based_scene(prompt);
    }

    let client = match AiClient::from_env() {
        Ok(client) => client,
        Err(_) => return rule_based_scene(prompt),
    };

    match client.generate_scene(prompt).await {
        Ok(scene) => scene,
        Err(e) => {
            eprintln!("   ⚠️  AI generation failed, using rules: {}", e);
            rule_based_scene(prompt)
        }
    }
}
