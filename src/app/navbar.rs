use leptos::prelude::*;

use super::scroll::BrowserScroll;
use crate::{
    config::OWNER_NAME,
    nav::{NavigationState, ScrollTracker, SectionId},
    theme::Theme,
};

#[component]
pub fn Navbar(theme: Signal<Theme>, set_theme: WriteSignal<Theme>) -> impl IntoView {
    let tracker = StoredValue::new(ScrollTracker::new(BrowserScroll).with_scroll_to_top(true));
    let (nav, set_nav) = signal(NavigationState::default());
    let (menu_open, set_menu_open) = signal(false);

    #[cfg(feature = "hydrate")]
    {
        let sync = move || tracker.update_value(|t| set_nav.set(t.on_scroll().clone()));
        // a reload restores the old scroll offset without firing a scroll event
        Effect::new(move |_| sync());
        let handle = window_event_listener(leptos::ev::scroll, move |_| sync());
        on_cleanup(move || handle.remove());
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = set_nav;

    let go_to = move |id: SectionId| {
        set_menu_open.set(false);
        tracker.with_value(|t| t.scroll_to_section(id));
    };

    let links = move |mobile: bool| {
        SectionId::ALL
            .into_iter()
            .map(|id| {
                view! {
                    <li>
                        <button
                            class=move || {
                                let active = nav.get().active_section == id;
                                match (active, mobile) {
                                    (true, false) => "px-3 py-2 text-sm font-medium text-cyan-500 border-b-2 border-cyan-500",
                                    (false, false) => "px-3 py-2 text-sm font-medium hover:text-cyan-500 transition-colors duration-200",
                                    (true, true) => "block w-full text-left px-4 py-2 text-cyan-500 bg-cyan-500/10 rounded-md",
                                    (false, true) => "block w-full text-left px-4 py-2 hover:bg-gray-500/10 rounded-md",
                                }
                            }
                            aria-current=move || (nav.get().active_section == id).then_some("true")
                            on:click=move |_| go_to(id)
                        >
                            {id.label()}
                        </button>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <header class=move || {
            if nav.get().is_scrolled_past_threshold {
                "fixed top-0 inset-x-0 z-50 h-20 bg-white/80 dark:bg-gray-950/80 backdrop-blur shadow-lg transition-all duration-300"
            } else {
                "fixed top-0 inset-x-0 z-50 h-20 bg-transparent transition-all duration-300"
            }
        }>
            <nav class="flex items-center justify-between h-full max-w-6xl mx-auto px-4 sm:px-6 lg:px-8">
                <button
                    class="text-xl font-bold tracking-tight"
                    on:click=move |_| tracker.with_value(|t| t.scroll_to_top())
                >
                    {OWNER_NAME}
                    <span class="text-cyan-500">"."</span>
                </button>
                <ul class="hidden md:flex items-center gap-2">{links(false)}</ul>
                <div class="flex items-center gap-2">
                    <button
                        class="p-2 rounded-full hover:bg-gray-500/20 transition-colors duration-200"
                        aria-label="Toggle theme"
                        on:click=move |_| set_theme.update(|t| *t = t.toggled())
                    >
                        {move || theme.get().toggle_icon()}
                    </button>
                    <button
                        class="md:hidden p-2 rounded-md hover:bg-gray-500/20"
                        aria-label="Toggle menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </nav>
            <Show when=move || menu_open.get()>
                <ul class="md:hidden mx-4 p-2 space-y-1 rounded-lg bg-white dark:bg-gray-900 shadow-xl">
                    {links(true)}
                </ul>
            </Show>
        </header>
        <Show when=move || nav.get().show_scroll_to_top_control>
            <button
                class="fixed bottom-8 right-8 z-50 w-12 h-12 rounded-full bg-cyan-500 text-white shadow-lg hover:bg-cyan-600 transition-all duration-200"
                aria-label="Scroll to top"
                on:click=move |_| tracker.with_value(|t| t.scroll_to_top())
            >
                "↑"
            </button>
        </Show>
    }
}
