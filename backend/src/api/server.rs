//! HTTP server for the scene generation API.
//!
//! # API Endpoints
//!
//! | Method | Path        | Description                        |
//! |--------|-------------|------------------------------------|
//! | GET    | `/health`   | Health check                       |
//! | POST   | `/generate` | Generate a scene config for prompt |

use axum::{
    http::{header, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tower_http::cors::CorsLayer;

use super::types::GenerateRequest;
use crate::generate::generate_scene;
use crate::models::SceneConfig;

/// Start the HTTP server.
pub async fn start_server(port: u16) -> Result<(), Box<dyn std::error::Error>> {
    // Permissive CORS for development; tighten later
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers([header::CONTENT_TYPE]);

    let app = Router::new()
        .route("/", get(health))
        .route("/health", get(health))
        .route("/generate", post(generate))
        .layer(cors);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("🚀 StudyVerse server running on http://localhost:{}", port);
    println!("   POST /generate - Generate a scene for a verse prompt");
    println!("   GET  /health   - Health check");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "studyverse",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "generate": "POST /generate",
        }
    }))
}

/// Scene generation endpoint.
///
/// An empty prompt is accepted: no keyword matches, so the caller gets
/// the default theme.
async fn generate(Json(request): Json<GenerateRequest>) -> Json<SceneConfig> {
    println!("\n🌌 NEW VERSE: {:?}", request.prompt);

    let scene = generate_scene(&request.prompt, false).await;

    println!("   Title:   {}", scene.title);
    println!("   Objects: {}", scene.objects.len());
    println!("   Lights:  {}", scene.lights.len());

    Json(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_prompt_returns_default_scene() {
        // No key in the environment: the handler must still answer with
        // the rule-based default instead of an error
        std::env::remove_var("OPENAI_API_KEY");

        let Json(scene) = generate(Json(GenerateRequest {
            prompt: String::new(),
        }))
        .await;
        assert_eq!(scene.title, "Neon Playground");
    }

    #[tokio::test]
    async fn test_keyword_prompt_selects_theme() {
        std::env::remove_var("OPENAI_API_KEY");

        let Json(scene) = generate(Json(GenerateRequest {
            prompt: "lego harbor".to_string(),
        }))
        .await;
        assert_eq!(scene.title, "Lego City");
    }
}
