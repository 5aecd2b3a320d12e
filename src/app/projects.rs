use leptos::prelude::*;

use super::profile::PROJECTS;
use crate::{nav::SectionId, showcase::ProjectExpansion};

#[component]
pub fn Projects() -> impl IntoView {
    let (expansion, set_expansion) = signal(ProjectExpansion::default());

    view! {
        <section id=SectionId::Projects.as_str() class="py-24 px-4 bg-gray-500/5">
            <div class="max-w-5xl mx-auto section-content">
                <h2 class="mb-12 text-3xl font-bold text-center">"Projects"</h2>
                <div class="grid gap-6 sm:grid-cols-2">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| {
                            let expanded = move || expansion.get().is_expanded(index);
                            view! {
                                <article class="flex flex-col p-6 rounded-lg border border-gray-500/20 hover:border-cyan-500/60 hover:-translate-y-1 transition-all duration-200">
                                    <span class="mb-2 text-xs font-medium uppercase tracking-wide text-cyan-600 dark:text-cyan-400">
                                        {project.kind}
                                    </span>
                                    <h3 class="mb-2 text-xl font-semibold">{project.name}</h3>
                                    <p class="mb-2 text-gray-600 dark:text-gray-400">
                                        {move || {
                                            if expanded() {
                                                project.full_description
                                            } else {
                                                project.description
                                            }
                                        }}
                                    </p>
                                    <button
                                        class="self-start mb-4 text-sm font-medium text-cyan-500 hover:text-cyan-600"
                                        aria-expanded=move || expanded().to_string()
                                        on:click=move |_| set_expansion.update(|e| e.toggle(index))
                                    >
                                        {move || expansion.get().toggle_label(index)}
                                    </button>
                                    <Show when=expanded>
                                        <div class="mb-4">
                                            <h4 class="mb-2 text-sm font-semibold">"Key Highlights"</h4>
                                            <ul class="space-y-1 text-sm text-gray-600 dark:text-gray-400">
                                                {project
                                                    .highlights
                                                    .iter()
                                                    .map(|item| view! { <li>"• " {*item}</li> })
                                                    .collect_view()}
                                            </ul>
                                        </div>
                                    </Show>
                                    <div class="flex flex-wrap gap-2 mt-auto mb-4">
                                        {project
                                            .tags
                                            .iter()
                                            .map(|tag| {
                                                view! {
                                                    <span class="px-2 py-1 rounded text-xs bg-cyan-500/10 text-cyan-600 dark:text-cyan-400">
                                                        {*tag}
                                                    </span>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                    <div class="flex gap-4 text-sm font-medium">
                                        {project
                                            .source
                                            .map(|href| {
                                                view! {
                                                    <a href=href target="_blank" rel="noopener noreferrer" class="hover:text-cyan-500">
                                                        "Source →"
                                                    </a>
                                                }
                                            })}
                                        {project
                                            .demo
                                            .map(|href| {
                                                view! {
                                                    <a href=href target="_blank" rel="noopener noreferrer" class="hover:text-cyan-500">
                                                        "Live demo →"
                                                    </a>
                                                }
                                            })}
                                    </div>
                                </article>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
