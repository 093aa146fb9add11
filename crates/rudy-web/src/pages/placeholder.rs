//! Routes that exist before their screens do

use leptos::prelude::*;

use rudy_core::content::{BRAND, Placeholder};

#[component]
pub fn PlaceholderPage(page: Placeholder) -> impl IntoView {
    view! {
        <div class="min-h-screen flex items-center justify-center bg-gray-50 px-4">
            <div class="max-w-xl text-center">
                <h1 class="text-3xl md:text-4xl font-bold mb-6">{page.title}</h1>
                <p class="text-xl text-gray-600 mb-10">{page.body}</p>
                <a href="/" class="btn-hero">{format!("Back to {BRAND}")}</a>
            </div>
        </div>
    }
}
