//! Home Page
//!
//! Static landing page with feature cards.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>"Restaurant Menu Manager"</h1>
                <p class="muted">
                    "Upload PDFs, gather data, and create a database for your restaurant menus"
                </p>
                <a href="/upload" class="primary-btn">"Get Started"</a>
            </section>

            <section class="card-grid">
                <div class="card">
                    <h3>"Upload PDFs"</h3>
                    <p class="muted">"Easily upload your menu PDFs"</p>
                    <p>"Upload your restaurant menu PDFs and let our system process them efficiently."</p>
                </div>
                <div class="card">
                    <h3>"Create Database"</h3>
                    <p class="muted">"Automatically generate a menu database"</p>
                    <p>"Our system extracts key information from your PDFs to create a structured database."</p>
                </div>
                <div class="card">
                    <h3>"Team Collaboration"</h3>
                    <p class="muted">"Work together seamlessly"</p>
                    <p>"Collaborate with your team to manage and update your restaurant menu data."</p>
                </div>
            </section>
        </div>
    }
}
