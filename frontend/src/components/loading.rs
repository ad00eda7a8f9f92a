//! Loading view shown after a verse is submitted.
//!
//! Terminal for the page's lifetime: nothing further happens here, the
//! message is static apart from the submitted verse.

use leptos::*;

#[component]
pub fn LoadingView(
    /// The submitted verse, displayed untrimmed.
    verse: String,
) -> impl IntoView {
    view! {
        <div class="loading-view">
            <h2>"Loading " <span class="accent">{verse}</span> "..."</h2>
            <p>"Generating your personalized world ✨"</p>
        </div>
    }
}
