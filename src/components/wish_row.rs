//! Wish Row Component
//!
//! One list entry: checkbox, text and a localized delete button.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::WishItem;
use crate::render::{delete_label, row_style};

#[component]
pub fn WishRow(item: WishItem) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let style = row_style(&item).to_css();
    let label = move || format!("{} ↩", delete_label(ctx.draft.get().language.tag()));

    view! {
        <div class="wish-item" style=style>
            <div>
                <input
                    type="checkbox"
                    prop:checked=item.completed
                    on:change=move |_| ctx.toggle_completed(id)
                />
                <span>{item.text}</span>
            </div>

            <button
                on:click=move |_| ctx.delete_item(id)
                style="background-color: orangered; color: white;"
            >
                {label}
            </button>
        </div>
    }
}
