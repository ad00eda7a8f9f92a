//! Error types for the StudyVerse scene generation service.
//!
//! This module defines the error types used across the crate:
//!
//! - [`AiError`] - AI client errors
//! - [`SceneError`] - Scene loading/validation errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use thiserror::Error;

// =============================================================================
// AI Client Errors
// =============================================================================

/// Errors from the AI client.
#[derive(Debug, Error)]
pub enum AiError {
    /// Missing API key.
    #[error("Missing OPENAI_API_KEY environment variable")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// API returned an error payload.
    #[error("API error: {0}")]
    ApiError(String),

    /// Invalid response from AI.
    #[error("Invalid AI response: {0}")]
    InvalidResponse(String),
}

// =============================================================================
// Scene Errors
// =============================================================================

/// Errors while loading or checking a scene config.
#[derive(Debug, Error)]
pub enum SceneError {
    /// Scene JSON failed schema validation.
    #[error("Scene validation failed: {errors:?}")]
    SchemaError { errors: Vec<String> },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Failed to read a scene file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for AI operations.
pub type AiResult<T> = Result<T, AiError>;

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_to_scene_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "scene.json");
        let scene_err: SceneError = io_err.into();
        assert!(scene_err.to_string().contains("scene.json"));
    }

    #[test]
    fn test_json_error_converts_to_scene_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let scene_err: SceneError = json_err.into();
        assert!(scene_err.to_string().contains("JSON error"));
    }

    #[test]
    fn test_schema_error_lists_violations() {
        let err = SceneError::SchemaError {
            errors: vec!["bad kind".into()],
        };
        assert!(err.to_string().contains("bad kind"));
    }
}
