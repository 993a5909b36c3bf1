//! UI Components
//!
//! Reusable Leptos components.

mod navbar;
mod restaurant_list;

pub use navbar::Navbar;
pub use restaurant_list::RestaurantList;
