//! Application State

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::store::WaitlistStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Runtime settings
    pub config: Arc<ServerConfig>,

    /// Waitlist signups
    pub waitlist: Arc<dyn WaitlistStore>,
}
