//! Wishlist Frontend Entry Point

mod app;
mod clock;
mod components;
mod config;
mod context;
mod error;
mod manager;
mod models;
mod persistence;
mod render;
mod speech;
mod state;
mod storage;
#[cfg(test)]
mod testing;

use std::rc::Rc;

use app::App;
use leptos::prelude::*;

use clock::SystemClock;
use config::AppConfig;
use manager::WishlistManager;
use speech::WebSpeech;
use storage::{BrowserStorage, KeyValueStore, MemoryStore};

/// localStorage, or an in-memory stand-in when the browser refuses access
fn open_store() -> (Box<dyn KeyValueStore>, Option<String>) {
    match BrowserStorage::open() {
        Ok(storage) => (Box::new(storage), None),
        Err(e) => (Box::new(MemoryStore::new()), Some(e.to_string())),
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let (store, store_error) = open_store();
    let config = AppConfig::load(store.as_ref());
    if let Some(level) = config.console_level() {
        console_log::init_with_level(level).ok();
    }
    if let Some(e) = store_error {
        log::warn!("wishes will not survive a reload: {}", e);
    }

    let manager = WishlistManager::new(store, Rc::new(WebSpeech::new()), Box::new(SystemClock), &config);
    mount_to_body(move || view! { <App manager=manager /> });
}
