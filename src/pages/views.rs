//! Materialized Views Page
//!
//! Displays the three pre-aggregated analytics reports. All aggregation
//! happens backend-side; this page only formats numbers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::models::AnalyticsReport;

#[component]
pub fn ViewsPage() -> impl IntoView {
    let (analytics, set_analytics) = signal::<Option<AnalyticsReport>>(None);

    // Load analytics on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_analytics().await {
                Ok(report) => set_analytics.set(Some(report)),
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[VIEWS] Failed to load analytics: {}", e).into(),
                    );
                }
            }
        });
    });

    view! {
        <div class="page views-page">
            <h1>"Materialized Views"</h1>
            <Show
                when=move || analytics.read().is_some()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <div class="card-grid">
                    <div class="card">
                        <h3>"Menu Items per Restaurant"</h3>
                        <For
                            each=move || {
                                analytics.get().map(|a| a.menu_items_per_restaurant).unwrap_or_default()
                            }
                            key=|row| row.restaurant_name.clone()
                            children=move |row| {
                                view! {
                                    <div class="report-row">
                                        <p class="report-title">{row.restaurant_name.clone()}</p>
                                        <p>{format!("Items: {}", row.total_items)}</p>
                                        <p>{format!("Avg Price: ${:.2}", row.average_price)}</p>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <div class="card">
                        <h3>"Dietary Restrictions"</h3>
                        <For
                            each=move || {
                                analytics.get().map(|a| a.dietary_restrictions).unwrap_or_default()
                            }
                            key=|row| row.restriction_type.clone()
                            children=move |row| {
                                view! {
                                    <div class="report-row">
                                        <p class="report-title">{row.restriction_type.clone()}</p>
                                        <p>{format!("Count: {}", row.item_count)}</p>
                                        <p>{format!("Percentage: {:.1}%", row.percentage)}</p>
                                    </div>
                                }
                            }
                        />
                    </div>

                    <div class="card">
                        <h3>"Price Analysis"</h3>
                        <For
                            each=move || {
                                analytics.get().map(|a| a.price_analysis).unwrap_or_default()
                            }
                            key=|row| row.restaurant_name.clone()
                            children=move |row| {
                                view! {
                                    <div class="report-row">
                                        <p class="report-title">{row.restaurant_name.clone()}</p>
                                        <p>{format!("Min: ${:.2}", row.min_price)}</p>
                                        <p>{format!("Max: ${:.2}", row.max_price)}</p>
                                        <p>{format!("Avg: ${:.2}", row.avg_price)}</p>
                                    </div>
                                }
                            }
                        />
                    </div>
                </div>
            </Show>
        </div>
    }
}
