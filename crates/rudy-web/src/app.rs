//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use rudy_core::content::{APP_PAGE, PRICING_PAGE};

use crate::auth::AuthContext;
use crate::pages::{LandingPage, PlaceholderPage};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_context(AuthContext::default());

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/pricing") view=|| view! { <PlaceholderPage page=PRICING_PAGE /> } />
                    <Route path=path!("/campaigns") view=|| view! { <PlaceholderPage page=APP_PAGE /> } />
                </Routes>
            </main>
        </Router>
    }
}

#[cfg(test)]
mod tests {
    use rudy_core::content::{APP_HOME, PRICING_PATH};

    use super::*;

    #[test]
    fn test_placeholder_pages_match_router_paths() {
        assert_eq!(PRICING_PAGE.path, "/pricing");
        assert_eq!(PRICING_PATH, "/pricing");
        assert_eq!(APP_PAGE.path, "/campaigns");
        assert_eq!(APP_HOME, "/campaigns");
    }
}
