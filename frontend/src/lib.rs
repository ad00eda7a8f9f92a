//! StudyVerse - Frontend Rust/Leptos Application
//!
//! A WebAssembly landing page that captures the "verse" a user wants to
//! study in and hands off to a loading view.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ParticleField (decorative, decoupled from state)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Landing                                                     │
//! │  ├── Hero (icon, title, tagline)                             │
//! │  └── VerseForm or LoadingView (selected by ViewState)        │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`state`] - View-model (verse text + Form/Loading state machine)
//! - [`components`] - UI components (Hero, VerseForm, ParticleField, ...)
//! - [`config`] - Presentation constants

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use components::*;
pub use config::*;
pub use state::{VersePrompt, ViewState};

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 StudyVerse - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=config::APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=Landing/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Landing() -> impl IntoView {
    // The page's only state: verse text + Form/Loading view.
    // Created on mount, dropped on unmount.
    let model = create_rw_signal(VersePrompt::new());

    view! {
        <div class="landing">
            <ParticleField/>

            <div class="content">
                <Hero/>

                {move || match model.with(|m| m.view().clone()) {
                    ViewState::Form => view! { <VerseForm model=model/> }.into_view(),
                    ViewState::Loading { verse } => {
                        view! { <LoadingView verse=verse/> }.into_view()
                    }
                }}
            </div>

            <Footer/>
        </div>
    }
}
