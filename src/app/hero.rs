use leptos::prelude::*;

use super::{
    profile::{GITHUB_URL, LINKEDIN_URL, LOCATION, TAGLINE},
    scroll::BrowserScroll,
};
use crate::{
    config::OWNER_NAME,
    nav::{ScrollTracker, SectionId},
};

#[component]
pub fn Hero() -> impl IntoView {
    let go_to = |id: SectionId| ScrollTracker::new(BrowserScroll).scroll_to_section(id);

    view! {
        <section
            id=SectionId::Home.as_str()
            class="relative flex items-center justify-center min-h-screen px-4 pt-20 overflow-hidden"
        >
            <div class="absolute inset-0 -z-10 bg-gradient-to-br from-cyan-500/10 via-transparent to-purple-500/10"></div>
            <div class="max-w-3xl text-center section-content">
                <p class="mb-4 text-cyan-500 font-mono">"Hi, my name is"</p>
                <h1 class="mb-6 text-5xl sm:text-6xl font-extrabold tracking-tight">{OWNER_NAME}</h1>
                <p class="mb-2 text-xl text-gray-600 dark:text-gray-400">{TAGLINE}</p>
                <p class="mb-10 text-sm text-gray-500">"📍 " {LOCATION}</p>
                <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                    <button
                        class="px-6 py-3 rounded-md bg-cyan-500 text-white font-medium hover:bg-cyan-600 transition-colors duration-200"
                        on:click=move |_| go_to(SectionId::Projects)
                    >
                        "View my work"
                    </button>
                    <button
                        class="px-6 py-3 rounded-md border border-cyan-500 text-cyan-500 font-medium hover:bg-cyan-500/10 transition-colors duration-200"
                        on:click=move |_| go_to(SectionId::Contact)
                    >
                        "Get in touch"
                    </button>
                </div>
                <div class="flex justify-center gap-6 mt-10 text-2xl">
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" aria-label="GitHub Profile">
                        <i class="devicon-github-plain"></i>
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" aria-label="LinkedIn Profile">
                        <i class="devicon-linkedin-plain"></i>
                    </a>
                </div>
            </div>
        </section>
    }
}
