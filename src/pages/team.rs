//! Team Page
//!
//! Static roster grid; nothing is fetched.

use leptos::prelude::*;

struct TeamMember {
    name: &'static str,
    role: &'static str,
    bio: &'static str,
}

const TEAM: &[TeamMember] = &[
    TeamMember {
        name: "Ava Martinez",
        role: "Project Manager",
        bio: "Leads project coordination and team management",
    },
    TeamMember {
        name: "Leo Chen",
        role: "Frontend Developer",
        bio: "Handles user interface and experience design",
    },
    TeamMember {
        name: "Priya Nair",
        role: "Backend Developer",
        bio: "Manages database and server-side operations",
    },
    TeamMember {
        name: "Sam Ortiz",
        role: "Data Analyst",
        bio: "Handles data processing and analytics",
    },
];

#[component]
pub fn TeamPage() -> impl IntoView {
    view! {
        <div class="page team-page">
            <h1>"Our Team"</h1>
            <div class="card-grid">
                {TEAM.iter().map(|member| {
                    view! {
                        <div class="card member-card">
                            <h3>{member.name}</h3>
                            <p class="muted">{member.role}</p>
                            <p>{member.bio}</p>
                        </div>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
