//! REST API types for the scene generation endpoint.
//!
//! The response body is the [`SceneConfig`](crate::models::SceneConfig)
//! itself - the renderer consumes it directly, no wrapping envelope.

use serde::{Deserialize, Serialize};

/// Request body for `POST /generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// The verse prompt entered by the user.
    pub prompt: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_deserialization() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{ "prompt": "a lego city" }"#).unwrap();
        assert_eq!(request.prompt, "a lego city");
    }
}
