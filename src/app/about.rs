use leptos::prelude::*;

use super::profile::{ABOUT, STATS};
use crate::nav::SectionId;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-24 px-4">
            <div class="max-w-5xl mx-auto section-content">
                <h2 class="mb-12 text-3xl font-bold text-center">"About Me"</h2>
                <div class="grid gap-12 md:grid-cols-3">
                    <div class="md:col-span-2 space-y-4 leading-relaxed">
                        {ABOUT.iter().map(|p| view! { <p>{*p}</p> }).collect_view()}
                    </div>
                    <div class="grid grid-cols-3 md:grid-cols-1 gap-4">
                        {STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="p-4 rounded-lg border border-gray-500/20 text-center">
                                        <div class="text-3xl font-bold text-cyan-500">{stat.value}</div>
                                        <div class="text-sm text-gray-500">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
