//! # StudyVerse backend - verse prompt to 3D scene config
//!
//! Turns a free-text "verse" prompt into a declarative scene config for a
//! WebGL renderer, either through an AI completions API or a set of
//! keyword-matched fallback themes.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐     ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  Prompt  │────▶│  Generator  │────▶│  Validation  │────▶│ Scene JSON  │
//! │  (text)  │     │ (AI | rules)│     │ (JSON schema)│     │ (renderer)  │
//! └──────────┘     └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use studyverse_backend::generate_scene;
//!
//! #[tokio::main]
//! async fn main() {
//!     let scene = generate_scene("a calm ocean at dawn", false).await;
//!     println!("{}", serde_json::to_string_pretty(&scene).unwrap());
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Hierarchical error types
//! - [`models`] - Scene domain models (SceneConfig, SceneLight, SceneObject)
//! - [`scene`] - Rule-based fallback themes
//! - [`ai`] - AI-powered scene generation
//! - [`generate`] - AI-or-rules orchestration
//! - [`validation`] - Scene schema validation
//! - [`api`] - HTTP API server

// Core modules
pub mod error;
pub mod models;

// Scene themes
pub mod scene;

// AI
pub mod ai;

// Orchestration
pub mod generate;

// Validation
pub mod validation;

// HTTP API
pub mod api;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{AiError, SceneError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{Environment, LightKind, ObjectKind, SceneConfig, SceneLight, SceneObject};

// =============================================================================
// Re-exports - Scene themes
// =============================================================================

pub use scene::{neon_playground, rule_based_scene};

// =============================================================================
// Re-exports - Generation
// =============================================================================

pub use ai::AiClient;
pub use generate::generate_scene;

// =============================================================================
// Re-exports - Validation
// =============================================================================

pub use validation::{is_valid, is_valid_scene, scene_schema, validate, validate_scene};

// =============================================================================
// Re-exports - API
// =============================================================================

pub use api::types::GenerateRequest;

// Server
pub mod server {
    pub use crate::api::server::start_server;
}
