//! UI Components

use std::rc::Rc;

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;

use rudy_core::content::{Accordion, CTA_LABEL, Example, Faq, Feature, Link, NavItem, RoadmapItem};
use rudy_core::{ApiClient, FormField, WaitlistWorkflow};

use crate::browser::scroll_to_section;

/// Client handle shared by the page's event handlers
pub type SharedClient = StoredValue<Rc<dyn ApiClient>, LocalStorage>;

/// Anchor that scrolls smoothly to in-page sections and navigates normally otherwise
#[component]
pub fn PageLink(
    item: NavItem,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let on_click = move |ev: MouseEvent| {
        if let Link::Section(id) = item.target {
            ev.prevent_default();
            scroll_to_section(id);
        }
    };

    view! {
        <a href=item.target.href() class=class on:click=on_click>
            {item.label}
        </a>
    }
}

/// The "Request Early Access" button, scrolling to the waitlist form
#[component]
pub fn CtaButton() -> impl IntoView {
    let item = NavItem {
        label: CTA_LABEL,
        target: Link::Section(rudy_core::content::section::WAITLIST),
    };

    view! { <PageLink item=item class="btn-hero" /> }
}

/// Grey 16:9 box standing in for a demo video
#[component]
pub fn VideoPlaceholder(
    caption: &'static str,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("bg-gray-100 rounded-lg aspect-video flex items-center justify-center {class}")>
            <div class="text-center">
                <div class="text-6xl mb-4">"🎥"</div>
                <p class="text-gray-600 font-medium">{caption}</p>
            </div>
        </div>
    }
}

#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="rounded-full bg-blue-100 w-12 h-12 flex items-center justify-center mb-6">
                <span class="text-blue-600 text-2xl">{feature.icon.glyph()}</span>
            </div>
            <h3 class="text-xl font-bold mb-3">{feature.title}</h3>
            <p class="text-gray-600">{feature.body}</p>
        </div>
    }
}

/// Text next to a video, sides swapped on wide screens when `video_first`
#[component]
pub fn ExampleRow(example: Example) -> impl IntoView {
    let (text_order, video_order) = if example.video_first {
        ("order-1 lg:order-2", "order-2 lg:order-1")
    } else {
        ("", "")
    };

    view! {
        <div class="py-16 md:py-24 bg-gray-50">
            <div class="container mx-auto px-4 md:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 items-center">
                    <div class=text_order>
                        <h3 class="text-2xl md:text-3xl font-bold mb-6">{example.title}</h3>
                        <p class="text-xl text-gray-600 leading-relaxed">{example.body}</p>
                    </div>
                    <VideoPlaceholder caption=example.video_caption class=video_order />
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn RoadmapCard(item: RoadmapItem) -> impl IntoView {
    view! {
        <div class="bg-white p-8 rounded-xl shadow-sm border border-gray-100">
            <div class="h-1 w-24 bg-blue-600 mb-6"></div>
            <h3 class="text-xl font-bold mb-4">{item.title}</h3>
            <p class="text-gray-600">{item.body}</p>
        </div>
    }
}

/// One question of a single-open accordion
#[component]
pub fn FaqItem(index: usize, faq: Faq, accordion: RwSignal<Accordion>) -> impl IntoView {
    let open = move || accordion.with(|a| a.is_open(index));

    view! {
        <div class="border border-gray-200 rounded-lg px-6">
            <button
                type="button"
                class="w-full flex justify-between items-center text-left text-lg font-medium py-4"
                aria-expanded=move || open().to_string()
                on:click=move |_| accordion.update(|a| a.toggle(index))
            >
                <span>{faq.question}</span>
                <span class=move || if open() { "rotate-180 transition-transform" } else { "transition-transform" }>
                    "⌄"
                </span>
            </button>
            <Show when=open>
                <div class="text-gray-600 pb-4">{faq.answer}</div>
            </Show>
        </div>
    }
}

/// Early-access form: four inputs, a status banner and the submit button
#[component]
pub fn WaitlistSignup(client: SharedClient) -> impl IntoView {
    let workflow = RwSignal::new(WaitlistWorkflow::new());

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(Ok(form)) = workflow.try_update(WaitlistWorkflow::begin_submit) else {
            return;
        };
        let client = client.get_value();
        spawn_local(async move {
            let outcome = client.join_waitlist(&form).await;
            workflow.try_update(|w| w.finish(outcome));
        });
    };

    let banner = move || {
        workflow.with(|w| {
            w.message().zip(w.tone()).map(|(message, tone)| {
                view! {
                    <div class=format!("p-3 rounded-md text-center {}", tone.css_class())>
                        {message.to_string()}
                    </div>
                }
            })
        })
    };

    view! {
        <form class="space-y-5" on:submit=on_submit>
            {FormField::ALL
                .into_iter()
                .map(|field| {
                    view! {
                        <div>
                            <input
                                type=field.input_type()
                                name=field.as_str()
                                placeholder=field.placeholder()
                                required=field.is_required()
                                class="w-full p-3 border border-gray-300 rounded-md"
                                prop:value=move || workflow.with(|w| w.value(field).to_string())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    workflow.update(|w| w.update(field.as_str(), value));
                                }
                            />
                        </div>
                    }
                })
                .collect_view()}
            {banner}
            <div class="pt-2">
                <button
                    type="submit"
                    disabled=move || workflow.with(WaitlistWorkflow::is_submitting)
                    class="w-full btn-hero py-6 text-lg disabled:bg-gray-400"
                >
                    {move || workflow.with(WaitlistWorkflow::button_label)}
                </button>
            </div>
        </form>
    }
}
