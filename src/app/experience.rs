use leptos::prelude::*;

use super::profile::ROLES;
use crate::nav::SectionId;

#[component]
pub fn Experience() -> impl IntoView {
    view! {
        <section id=SectionId::Experience.as_str() class="py-24 px-4">
            <div class="max-w-3xl mx-auto section-content">
                <h2 class="mb-12 text-3xl font-bold text-center">"Experience"</h2>
                <ol class="relative border-l border-cyan-500/40 space-y-10">
                    {ROLES
                        .iter()
                        .map(|role| {
                            view! {
                                <li class="ml-6">
                                    <span class="absolute -left-1.5 mt-2 w-3 h-3 rounded-full bg-cyan-500"></span>
                                    <div class="flex flex-wrap items-baseline justify-between gap-2">
                                        <h3 class="text-lg font-semibold">
                                            {role.title}
                                            <span class="text-cyan-500">" @ " {role.company}</span>
                                        </h3>
                                        <span class="text-sm font-mono text-gray-500">{role.period}</span>
                                    </div>
                                    <ul class="mt-3 space-y-1 list-disc list-inside text-gray-600 dark:text-gray-400">
                                        {role.highlights.iter().map(|h| view! { <li>{*h}</li> }).collect_view()}
                                    </ul>
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </section>
    }
}
