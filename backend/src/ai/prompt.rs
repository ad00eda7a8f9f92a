//! Prompt generation for AI scene generation.
//!
//! Builds the messages sent to the model to get back a scene config.

use serde_json::{json, Value};

/// The scene config JSON schema (embedded at compile time).
const SCENE_SCHEMA: &str = include_str!("../../schemas/scene-config.json");

/// Generate the system prompt for scene generation.
pub fn system_prompt() -> String {
    format!(
        r##"You generate compact JSON scene configs for a WebGL 3D world.

Only return JSON with keys: title, background, gradient (array of 2-4 hex colors), environment (one of sunset, dawn, night, studio, city, forest, apartment, warehouse, park, lobby, none), camera [x,y,z], lights (list of {{type, intensity, position?, color}}), objects (list of {{kind in [cube, sphere, torus, cone, cylinder, tree, lego], position [x,y,z], rotation [x,y,z], scale [x,y,z], color hex, metalness, roughness, emissive?}}).

Your output MUST validate against this JSON schema EXACTLY:

```json
{scene_schema}
```

Rules:
1. Values must be reasonable floats; keep objects near the origin and above y = -1
2. Use 2-6 objects and 1-3 lights
3. Colors are hex strings like "#0fa3b1"
4. Output JSON only, no explanations or markdown"##,
        scene_schema = SCENE_SCHEMA
    )
}

/// Generate the user prompt for a verse prompt.
pub fn user_prompt(prompt: &str) -> String {
    format!("Make a scene for: {}", prompt)
}

/// Build the full chat message list for the completions API.
pub fn build_messages(prompt: &str) -> Vec<Value> {
    vec![
        json!({ "role": "system", "content": system_prompt() }),
        json!({ "role": "user", "content": user_prompt(prompt) }),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_prompt_embeds_schema() {
        let prompt = system_prompt();
        assert!(prompt.contains("\"SceneConfig\""));
        assert!(prompt.contains("cylinder"));
        assert!(prompt.contains("Output JSON only"));
    }

    #[test]
    fn test_build_messages_order() {
        let messages = build_messages("ocean");
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[1]["role"], "user");
        assert!(messages[1]["content"]
            .as_str()
            .unwrap()
            .contains("Make a scene for: ocean"));
    }
}
