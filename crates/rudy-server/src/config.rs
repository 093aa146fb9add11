//! Server Configuration

use std::path::PathBuf;
use std::time::Duration;

use rudy_core::client::{DEFAULT_LATENCY, DEMO_AUTHORIZATION_URL};

/// Runtime settings, read from the environment (and `.env`)
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Listen address
    pub bind_addr: String,

    /// Directory holding the compiled frontend (`trunk build` output)
    pub static_dir: PathBuf,

    /// Where `GET /auth/login/google` sends visitors
    pub authorization_url: String,

    /// Artificial delay before a waitlist request is answered
    pub waitlist_latency: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:3000".into(),
            static_dir: PathBuf::from("static"),
            authorization_url: DEMO_AUTHORIZATION_URL.into(),
            waitlist_latency: DEFAULT_LATENCY,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or(defaults.bind_addr);
        let static_dir = std::env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let authorization_url =
            std::env::var("GOOGLE_AUTHORIZATION_URL").unwrap_or(defaults.authorization_url);
        let waitlist_latency = std::env::var("WAITLIST_LATENCY_MS")
            .ok()
            .and_then(|ms| ms.parse().ok())
            .map_or(defaults.waitlist_latency, Duration::from_millis);

        Self {
            bind_addr,
            static_dir,
            authorization_url,
            waitlist_latency,
        }
    }
}
