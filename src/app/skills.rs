use leptos::prelude::*;

use super::profile::SKILLS;
use crate::{
    nav::SectionId,
    showcase::{filter_by, SkillCategory},
};

#[component]
pub fn Skills() -> impl IntoView {
    let (active, set_active) = signal(SkillCategory::default());

    view! {
        <section id=SectionId::Skills.as_str() class="py-24 px-4 bg-gray-500/5">
            <div class="max-w-5xl mx-auto section-content">
                <h2 class="mb-8 text-3xl font-bold text-center">"Skills"</h2>
                <div class="flex flex-wrap justify-center gap-3 mb-12" role="tablist">
                    {SkillCategory::ALL
                        .into_iter()
                        .map(|category| {
                            let selected = move || active.get() == category;
                            view! {
                                <button
                                    role="tab"
                                    aria-selected=move || selected().to_string()
                                    class=move || {
                                        if selected() {
                                            "px-4 py-2 rounded-full text-sm font-medium text-white bg-cyan-500"
                                        } else {
                                            "px-4 py-2 rounded-full text-sm font-medium border border-gray-500/30 hover:border-cyan-500 transition-colors duration-200"
                                        }
                                    }
                                    on:click=move |_| set_active.set(category)
                                >
                                    {category.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <ul class="grid gap-6 sm:grid-cols-2 md:grid-cols-3">
                    {move || {
                        filter_by(SKILLS, active.get())
                            .into_iter()
                            .map(|skill| {
                                view! {
                                    <li class="p-5 rounded-lg border border-gray-500/20">
                                        <div class="flex justify-between text-sm mb-2">
                                            <span class="font-medium">{skill.name}</span>
                                            <span class="text-gray-500">{format!("{}%", skill.level)}</span>
                                        </div>
                                        <div class="h-2 rounded-full bg-gray-500/20">
                                            <div
                                                class="h-2 rounded-full bg-cyan-500"
                                                style=format!("width: {}%", skill.level)
                                            ></div>
                                        </div>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </div>
        </section>
    }
}
