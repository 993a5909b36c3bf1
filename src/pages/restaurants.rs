//! Restaurants Page

use leptos::prelude::*;

use crate::components::RestaurantList;

#[component]
pub fn RestaurantsPage() -> impl IntoView {
    view! {
        <div class="page restaurants-page">
            <RestaurantList />
        </div>
    }
}
