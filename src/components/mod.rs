//! UI Components
//!
//! Leptos components for the wishlist page.

mod new_wish_form;
mod wish_list;
mod wish_row;

pub use new_wish_form::NewWishForm;
pub use wish_list::WishList;
pub use wish_row::WishRow;
