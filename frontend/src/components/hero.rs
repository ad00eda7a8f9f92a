//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-icon">
                <span class="sparkles">"✦"</span>
            </div>
            <h1>"Welcome to " <span class="accent">"StudyVerse"</span></h1>
            <p class="subtitle">
                "Step into an immersive world built around your focus, creativity, and mood."
            </p>
        </div>
    }
}
