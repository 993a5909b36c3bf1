//! Navigation Bar Component
//!
//! Static link list to the app routes. Plain anchors; the router intercepts
//! same-origin clicks for client-side navigation.

use leptos::prelude::*;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav class="navbar">
            <a href="/" class="brand">"Menu Manager"</a>
            <div class="nav-links">
                <a href="/">"Home"</a>
                <a href="/upload">"Upload Menu"</a>
                <a href="/views">"Views"</a>
                <a href="/team">"Team"</a>
                <a href="/database">"Database"</a>
                <a href="/restaurants">"Restaurants"</a>
            </div>
        </nav>
    }
}
