//! Restaurant List Component
//!
//! Fetch-on-mount list of restaurants rendered as name + location cards.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::Restaurant;

#[component]
pub fn RestaurantList() -> impl IntoView {
    let (restaurants, set_restaurants) = signal::<Option<Vec<Restaurant>>>(None);

    // Load restaurants on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_restaurants().await {
                Ok(loaded) => set_restaurants.set(Some(loaded)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[RESTAURANTS] Failed to load restaurants: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="restaurant-list">
            <h1>"Restaurants"</h1>
            <Show
                when=move || restaurants.read().is_some()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <div class="card-grid">
                    <For
                        each=move || restaurants.get().unwrap_or_default()
                        key=|restaurant| restaurant.id
                        children=move |restaurant| {
                            view! {
                                <div class="card">
                                    <h2>{restaurant.name.clone()}</h2>
                                    <p class="muted">{restaurant.location.clone()}</p>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
