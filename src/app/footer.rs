use chrono::{DateTime, Datelike};
use leptos::prelude::*;

use super::{
    profile::{GITHUB_URL, LINKEDIN_URL},
    scroll::BrowserScroll,
};
use crate::{
    config::{OWNER_EMAIL, OWNER_NAME},
    nav::{ScrollTracker, SectionId},
};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn Footer() -> impl IntoView {
    let year = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.year().to_string())
        .unwrap_or_default();

    view! {
        <footer class="py-10 px-4 border-t border-gray-500/20">
            <nav aria-label="Quick Links" class="max-w-5xl mx-auto mb-6">
                <h3 class="mb-3 text-sm font-semibold text-center sm:text-left">"Quick Links"</h3>
                <ul class="flex flex-wrap justify-center sm:justify-start gap-4 text-sm text-gray-500">
                    {SectionId::ALL
                        .into_iter()
                        .map(|id| {
                            view! {
                                <li>
                                    <button
                                        class="hover:text-cyan-500"
                                        on:click=move |_| {
                                            ScrollTracker::new(BrowserScroll).scroll_to_section(id)
                                        }
                                    >
                                        {id.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </nav>
            <div class="flex flex-col sm:flex-row items-center justify-between gap-4 max-w-5xl mx-auto text-sm text-gray-500">
                <p>"© " {year} " " {OWNER_NAME} ". Built with Rust and Leptos."</p>
                <div class="flex gap-4">
                    <a href=format!("mailto:{OWNER_EMAIL}") class="hover:text-cyan-500">"Email"</a>
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-cyan-500">
                        "GitHub"
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class="hover:text-cyan-500">
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </footer>
    }
}
