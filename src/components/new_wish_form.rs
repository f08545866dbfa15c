//! New Wish Form Component
//!
//! Text input, priority and speech language selects, and the add button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::{Priority, SpeechLang};

#[component]
pub fn NewWishForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="add-wish">
            <input
                type="text"
                placeholder="input your wish"
                prop:value=move || ctx.draft.get().text
                on:input=move |ev| ctx.set_draft_text(event_target_value(&ev))
            />

            <select
                prop:value=move || ctx.draft.get().priority.as_str()
                on:change=move |ev| ctx.set_draft_priority(&event_target_value(&ev))
            >
                {Priority::ALL.into_iter().map(|priority| view! {
                    <option
                        value=priority.as_str()
                        prop:selected=move || ctx.draft.get().priority == priority
                    >
                        {priority.label()}
                    </option>
                }).collect_view()}
            </select>

            <select
                prop:value=move || ctx.draft.get().language.tag()
                on:change=move |ev| ctx.set_speech_language(&event_target_value(&ev))
            >
                {SpeechLang::ALL.into_iter().map(|lang| view! {
                    <option
                        value=lang.tag()
                        prop:selected=move || ctx.draft.get().language == lang
                    >
                        {lang.display_name()}
                    </option>
                }).collect_view()}
            </select>

            <button
                on:click=move |_| ctx.add_wish()
                style="background-color: green; color: white;"
            >
                "Add Wish"
            </button>
        </div>
    }
}
