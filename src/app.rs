//! Wishlist App
//!
//! Root component: title, add form and the wish list.

use leptos::prelude::*;

use crate::components::{NewWishForm, WishList};
use crate::context::AppContext;
use crate::manager::WishlistManager;

#[component]
pub fn App(manager: WishlistManager) -> impl IntoView {
    // Provide context to all children
    provide_context(AppContext::new(manager));

    view! {
        <div class="App">
            <h1>"🎁🎄 My Wishlist 🎄🎁"</h1>

            <NewWishForm />

            <WishList />

            <h3>"🎄🎁🎄🎁🎄🎁🎄🎁🎄🎁🎄🎁🎄🎁🎄🎁"</h3>
        </div>
    }
}
