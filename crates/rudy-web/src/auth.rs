//! Signed-in user, shared through context

use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub email: String,
}

impl User {
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }
}

/// Populated by the app shell once a session exists; the landing page only reads it
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub user: RwSignal<Option<User>>,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self {
            user: RwSignal::new(None),
        }
    }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_default()
}
