use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};

use super::clock::BrowserClock;
use super::profile::{CONTACT_INFO, SOCIAL_LINKS};
use crate::{
    config::{RelayConfig, OWNER_EMAIL},
    contact::{ContactController, ContactFormState, Field, SubmitResult},
    mail::EmailJsRelay,
    nav::SectionId,
};

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-md border border-gray-500/30 bg-transparent focus:outline-none focus:ring-2 focus:ring-cyan-500 read-only:opacity-60 transition-all duration-200";

#[component]
pub fn ContactSection() -> impl IntoView {
    let (form, set_form) = signal(ContactFormState::default());
    let (invalid, set_invalid) = signal(None::<String>);
    let config = RelayConfig::default();
    let controller = StoredValue::new_local(ContactController::with_listener(
        EmailJsRelay::new(&config),
        BrowserClock,
        config,
        move |state: &ContactFormState| set_form.set(state.clone()),
    ));

    #[cfg(feature = "hydrate")]
    on_cleanup(move || controller.with_value(|c| c.dispose()));

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.get_value();
        spawn_local(async move {
            if let SubmitResult::Rejected(e) = controller.submit().await {
                log::debug!("contact form not submitted: {e}");
                set_invalid.set(Some(e.to_string()));
            }
        });
    };
    let edit = move |field: Field, value: String| {
        set_invalid.set(None);
        controller.with_value(|c| c.update_field(field, value));
    };
    let read_only = move || !form.get().is_idle();

    view! {
        <section id=SectionId::Contact.as_str() class="py-24 px-4">
            <div class="max-w-5xl mx-auto section-content">
                <h2 class="mb-4 text-3xl font-bold text-center">"Get In Touch"</h2>
                <p class="mb-10 text-center text-gray-600 dark:text-gray-400">
                    "Have a question or a project in mind? Drop me a line, or write to "
                    <a href=format!("mailto:{OWNER_EMAIL}") class="text-cyan-500">{OWNER_EMAIL}</a>
                    "."
                </p>
                <div class="grid gap-10 md:grid-cols-5">
                    <aside class="space-y-5 md:col-span-2">
                        {CONTACT_INFO
                            .iter()
                            .map(|card| {
                                view! {
                                    <div class="p-5 rounded-lg border border-gray-500/20">
                                        <h3 class="mb-1 text-sm font-semibold text-gray-500">{card.title}</h3>
                                        {match card.href {
                                            Some(href) => {
                                                view! { <a href=href class="hover:text-cyan-500">{card.value}</a> }
                                                    .into_any()
                                            }
                                            None => view! { <p>{card.value}</p> }.into_any(),
                                        }}
                                    </div>
                                }
                            })
                            .collect_view()}
                        <div class="p-5 rounded-lg border border-gray-500/20">
                            <h3 class="mb-3 text-sm font-semibold text-gray-500">"Connect on Social Media"</h3>
                            <div class="flex gap-4">
                                {SOCIAL_LINKS
                                    .iter()
                                    .map(|link| {
                                        view! {
                                            <a href=link.href target="_blank" rel="noopener noreferrer" class="hover:text-cyan-500">
                                                {link.name}
                                            </a>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <p class="flex items-center gap-2 text-sm text-green-600">
                            <span class="w-2 h-2 rounded-full bg-green-500 animate-pulse"></span>
                            "Available for freelance opportunities"
                        </p>
                    </aside>
                    <form class="space-y-5 md:col-span-3" on:submit=on_submit>
                        <div class="grid gap-5 sm:grid-cols-2">
                            <input
                                type="text"
                                name="name"
                                placeholder="Your Name"
                                required
                                class=INPUT_CLASS
                                readonly=read_only
                                prop:value=move || form.get().fields.name
                                on:input=move |ev| edit(Field::Name, event_target_value(&ev))
                            />
                            <input
                                type="email"
                                name="email"
                                placeholder="Your Email"
                                required
                                class=INPUT_CLASS
                                readonly=read_only
                                prop:value=move || form.get().fields.email
                                on:input=move |ev| edit(Field::Email, event_target_value(&ev))
                            />
                        </div>
                        <input
                            type="text"
                            name="subject"
                            placeholder="Subject"
                            required
                            class=INPUT_CLASS
                            readonly=read_only
                            prop:value=move || form.get().fields.subject
                            on:input=move |ev| edit(Field::Subject, event_target_value(&ev))
                        />
                        <textarea
                            name="message"
                            rows="6"
                            placeholder="Your Message"
                            required
                            class=INPUT_CLASS
                            readonly=read_only
                            prop:value=move || form.get().fields.message
                            on:input=move |ev| edit(Field::Message, event_target_value(&ev))
                        ></textarea>
                        <button
                            type="submit"
                            disabled=read_only
                            class=move || form.get().phase.submit_class()
                        >
                            {move || form.get().phase.submit_label()}
                        </button>
                        <p role="status" aria-live="polite" class="min-h-6 text-center text-sm">
                            {move || {
                                invalid
                                    .get()
                                    .map(|msg| view! { <span class="text-red-600">{msg}</span> }.into_any())
                                    .or_else(|| {
                                        form.get()
                                            .phase
                                            .status_message()
                                            .map(|(tone, text)| view! { <span class=tone>{text}</span> }.into_any())
                                    })
                            }}
                        </p>
                    </form>
                </div>
            </div>
        </section>
    }
}
