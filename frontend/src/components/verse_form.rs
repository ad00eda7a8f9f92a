//! Verse prompt form.
//!
//! Controlled input: the field's displayed value is always driven by the
//! view-model, and every input event writes the raw value back verbatim.
//! Submit goes through [`VersePrompt::submit`], which owns the trim guard
//! and the one-way transition to the loading view.

use leptos::ev::SubmitEvent;
use leptos::*;

use crate::state::VersePrompt;

#[component]
pub fn VerseForm(model: RwSignal<VersePrompt>) -> impl IntoView {
    let on_input = move |ev| {
        model.update(|m| m.input(&event_target_value(&ev)));
    };

    let on_submit = move |ev: SubmitEvent| {
        // Keep the browser from navigating/reloading on submit
        ev.prevent_default();
        model.update(|m| m.submit());
    };

    view! {
        <form class="verse-form" on:submit=on_submit>
            <input
                type="text"
                class="verse-input"
                placeholder="What verse would you like to be in?"
                prop:value=move || model.with(|m| m.text().to_string())
                on:input=on_input
            />
            <button type="submit" class="enter-button">
                "Enter"
                <span class="arrow">"→"</span>
            </button>
        </form>
    }
}
