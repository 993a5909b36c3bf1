//! Menu Database Page
//!
//! Searchable, paginated table of extracted menu items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::listing::build_listing;
use crate::models::MenuItem;

#[component]
pub fn DatabasePage() -> impl IntoView {
    // None until the first fetch resolves
    let (menu_items, set_menu_items) = signal::<Option<Vec<MenuItem>>>(None);
    let (search, set_search) = signal(String::new());
    let (current_page, set_current_page) = signal(1usize);

    // Load menu items on mount
    Effect::new(move |_| {
        spawn_local(async move {
            match api::list_menu_items().await {
                Ok(loaded) => {
                    web_sys::console::log_1(
                        &format!("[DATABASE] Loaded {} menu items", loaded.len()).into(),
                    );
                    set_menu_items.set(Some(loaded));
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[DATABASE] Failed to load menu items: {}", e).into(),
                    );
                }
            }
        });
    });

    // Re-derived from scratch on every items/search/page change
    let listing = move || build_listing(menu_items.read().as_deref(), &search.get(), current_page.get());
    let total_pages = move || listing().total_pages;

    view! {
        <div class="page database-page">
            <h1>"Menu Database"</h1>

            <div class="table-toolbar">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Search menu items..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <button class="primary-btn">"Add New Item"</button>
            </div>

            <Show
                when=move || menu_items.read().is_some()
                fallback=|| view! { <div class="loading">"Loading..."</div> }
            >
                <table class="menu-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Section"</th>
                            <th>"Description"</th>
                            <th>"Price"</th>
                            <th>"Dietary"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || listing().rows
                            key=|item| item.id
                            children=move |item| {
                                view! {
                                    <tr>
                                        <td>{item.name.clone()}</td>
                                        <td>{item.section.clone()}</td>
                                        <td>{item.description.clone()}</td>
                                        <td>{format!("${:.2}", item.price)}</td>
                                        <td>{item.dietary_restriction.clone()}</td>
                                        <td class="row-actions">
                                            <button class="ghost-btn">"Edit"</button>
                                            <button class="ghost-btn danger">"Delete"</button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>

                <div class="pagination">
                    <button
                        class="page-btn"
                        prop:disabled=move || current_page.get() <= 1
                        on:click=move |_| {
                            set_current_page.update(|p| *p = p.saturating_sub(1).max(1));
                        }
                    >
                        "Previous"
                    </button>
                    <span class="page-label">
                        {move || format!("Page {} of {}", current_page.get(), total_pages())}
                    </span>
                    <button
                        class="page-btn"
                        prop:disabled=move || current_page.get() >= total_pages()
                        on:click=move |_| {
                            let last = total_pages().max(1);
                            set_current_page.update(|p| *p = (*p + 1).min(last));
                        }
                    >
                        "Next"
                    </button>
                </div>
            </Show>
        </div>
    }
}
