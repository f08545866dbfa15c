//! Wish List Component

use leptos::prelude::*;

use crate::components::WishRow;
use crate::context::AppContext;

/// All wishes in insertion order
#[component]
pub fn WishList() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div class="wish-list">
            <For
                each=move || ctx.items.get()
                // completed is part of the key so toggled rows re-render
                key=|wish| (wish.id, wish.completed)
                children=move |wish| view! { <WishRow item=wish /> }
            />
        </div>
    }
}
