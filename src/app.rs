//! Menu Manager Frontend App
//!
//! Application shell: navbar plus one route per page.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::Navbar;
use crate::pages::{DatabasePage, HomePage, RestaurantsPage, TeamPage, UploadPage, ViewsPage};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="content">
                <Routes fallback=|| "Not found">
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/upload") view=UploadPage />
                    <Route path=path!("/database") view=DatabasePage />
                    <Route path=path!("/views") view=ViewsPage />
                    <Route path=path!("/team") view=TeamPage />
                    <Route path=path!("/restaurants") view=RestaurantsPage />
                </Routes>
            </main>
        </Router>
    }
}
