//! Landing Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use rudy_core::content::{
    ABOUT, APP_HOME, Accordion, BRAND, CONTACT_EMAIL, COPYRIGHT, EXAMPLES, EXAMPLES_TITLE,
    FAQ_TITLE, FAQS, FEATURES, FEATURES_INTRO, FEATURES_TITLE, FOOTER_ITEMS, HERO, LOGO_PATH,
    NAV_ITEMS, ROADMAP, ROADMAP_INTRO, ROADMAP_TITLE, RUDY_PORTRAIT, WAITLIST_FOOTNOTE,
    WAITLIST_INTRO, WAITLIST_TITLE, section,
};

use crate::api;
use crate::auth::use_auth;
use crate::browser::BrowserNavigator;
use crate::components::{
    CtaButton, ExampleRow, FaqItem, FeatureCard, PageLink, RoadmapCard, SharedClient,
    VideoPlaceholder, WaitlistSignup,
};

#[component]
pub fn LandingPage() -> impl IntoView {
    let client: SharedClient = StoredValue::new_local(api::client());

    view! {
        <div class="min-h-screen">
            <Nav client=client />
            <Hero />
            <Features />
            <Examples />
            <Roadmap />
            <About />
            <Waitlist client=client />
            <FaqSection />
            <Footer />
        </div>
    }
}

#[component]
fn Nav(client: SharedClient) -> impl IntoView {
    let auth = use_auth();

    let login = move |_| {
        let client = client.get_value();
        spawn_local(async move {
            if let Err(err) = rudy_core::login(client.as_ref(), &BrowserNavigator).await {
                leptos::logging::error!("Google login failed: {err}");
            }
        });
    };

    let account = move || match auth.user.get() {
        Some(user) => view! {
            <a
                href=APP_HOME
                title=user.label()
                class="text-blue-600 hover:text-blue-700 font-semibold transition-colors"
            >
                "Go to App"
            </a>
        }
        .into_any(),
        None => view! {
            <button
                on:click=login
                class="text-blue-600 hover:text-blue-700 font-semibold transition-colors"
            >
                "Login"
            </button>
        }
        .into_any(),
    };

    view! {
        <nav class="py-4 px-4 md:px-8 flex justify-between items-center">
            <div class="flex items-center">
                <img src=LOGO_PATH alt=format!("{BRAND} Logo") class="h-8 md:h-10" />
            </div>
            <div class="hidden md:flex items-center space-x-8">
                {NAV_ITEMS
                    .iter()
                    .map(|item| view! {
                        <PageLink
                            item=*item
                            class="text-gray-700 hover:text-blue-600 transition-colors"
                        />
                    })
                    .collect_view()}
            </div>
            <div class="flex items-center space-x-2 md:space-x-4">
                {account}
                <CtaButton />
            </div>
        </nav>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="py-16 md:py-24 bg-gradient-to-b from-white to-gray-50">
            <div class="container mx-auto px-4 md:px-8">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                    <div class="animate-fade-in">
                        <h1 class="text-3xl md:text-4xl lg:text-5xl font-bold leading-tight mb-6">
                            {HERO.title}
                        </h1>
                        <p class="text-xl md:text-2xl text-gray-600 mb-10">{HERO.pitch}</p>
                        <CtaButton />
                    </div>
                    <div class="animate-fade-in">
                        <VideoPlaceholder caption=HERO.video_caption />
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Features() -> impl IntoView {
    view! {
        <div id=section::FEATURES class="py-16 md:py-24 bg-white">
            <div class="container mx-auto px-4 md:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-8">{FEATURES_TITLE}</h2>
                <div class="flex flex-col md:flex-row items-center justify-center mb-16">
                    <div class="w-40 h-40 rounded-full overflow-hidden mb-6 md:mb-0 md:mr-8">
                        <img src=RUDY_PORTRAIT alt="Rudy" class="w-full h-full object-cover" />
                    </div>
                    <p class="text-xl text-gray-600 max-w-lg text-center md:text-left">
                        {FEATURES_INTRO}
                    </p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Examples() -> impl IntoView {
    view! {
        <div class="py-16 md:py-24 bg-gray-50">
            <div class="container mx-auto px-4 md:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-16">{EXAMPLES_TITLE}</h2>
            </div>
        </div>
        {EXAMPLES
            .iter()
            .map(|example| view! { <ExampleRow example=*example /> })
            .collect_view()}
    }
}

#[component]
fn Roadmap() -> impl IntoView {
    view! {
        <div id=section::UPCOMING class="py-16 md:py-24 bg-white">
            <div class="container mx-auto px-4 md:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-16">{ROADMAP_TITLE}</h2>
                <p class="text-xl text-gray-600 text-center mb-12 max-w-3xl mx-auto">
                    {ROADMAP_INTRO}
                </p>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10">
                    {ROADMAP
                        .iter()
                        .map(|item| view! { <RoadmapCard item=*item /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <div id=section::ABOUT class="py-16 md:py-24 bg-white">
            <div class="container mx-auto px-4 md:px-8">
                <div class="flex flex-col md:flex-row items-center gap-10">
                    <div class="md:w-1/2 order-2 md:order-1">
                        <div class="rounded-xl overflow-hidden shadow-lg">
                            <img
                                src=ABOUT.image
                                alt=ABOUT.image_alt
                                class="w-full h-auto object-cover"
                            />
                        </div>
                    </div>
                    <div class="md:w-1/2 text-center md:text-left order-1 md:order-2">
                        <h2 class="text-3xl md:text-4xl font-bold mb-6">{ABOUT.title}</h2>
                        <p class="text-xl text-gray-600 leading-relaxed mb-10">{ABOUT.body}</p>
                        <div class="flex justify-center md:justify-start">
                            <CtaButton />
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Waitlist(client: SharedClient) -> impl IntoView {
    view! {
        <div id=section::WAITLIST class="py-16 md:py-24 bg-gray-50">
            <div class="container mx-auto max-w-4xl text-center px-4 md:px-8">
                <h2 class="text-3xl md:text-4xl font-bold mb-6">{WAITLIST_TITLE}</h2>
                <p class="text-xl text-gray-600 mb-10 max-w-2xl mx-auto">{WAITLIST_INTRO}</p>
                <div class="bg-white p-8 rounded-xl shadow-sm border border-gray-100 max-w-xl mx-auto">
                    <WaitlistSignup client=client />
                </div>
                <p class="text-md text-gray-600 mt-6 max-w-2xl mx-auto">{WAITLIST_FOOTNOTE}</p>
            </div>
        </div>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    let accordion = RwSignal::new(Accordion::default());

    view! {
        <div id=section::FAQ class="py-16 md:py-24 bg-white">
            <div class="container mx-auto max-w-4xl px-4 md:px-8">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-16">{FAQ_TITLE}</h2>
                <div class="w-full space-y-4">
                    {FAQS
                        .iter()
                        .enumerate()
                        .map(|(index, faq)| view! {
                            <FaqItem index=index faq=*faq accordion=accordion />
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-white">
            <div class="container mx-auto py-12 px-4">
                <div class="flex flex-col md:flex-row justify-between items-center mb-8">
                    <div class="flex flex-wrap justify-center gap-x-8 gap-y-4">
                        {FOOTER_ITEMS
                            .iter()
                            .map(|item| view! {
                                <PageLink item=*item class="hover:text-blue-400 transition-colors" />
                            })
                            .collect_view()}
                    </div>
                </div>
                <div class="border-t border-gray-700 pt-8 mt-8 text-center md:text-left">
                    <div class="flex flex-col md:flex-row justify-between items-center">
                        <p class="text-gray-400 mb-4 md:mb-0">{COPYRIGHT}</p>
                        <div class="flex flex-wrap justify-center gap-x-6 gap-y-3">
                            <a href="#" class="text-gray-400 hover:text-white transition-colors">"Terms"</a>
                            <a href="#" class="text-gray-400 hover:text-white transition-colors">"Privacy"</a>
                            <a
                                href=format!("mailto:{CONTACT_EMAIL}")
                                class="text-gray-400 hover:text-white transition-colors"
                            >
                                {format!("Contact: {CONTACT_EMAIL}")}
                            </a>
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
