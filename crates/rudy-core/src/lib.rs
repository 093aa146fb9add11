//! # rudy-core
//!
//! Everything behind the Rudy landing page that is not markup.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      LandingPage (rudy-web)                  │
//! │  ┌──────────────────┐  ┌──────────────┐  ┌───────────────┐  │
//! │  │ WaitlistWorkflow │  │    login     │  │    content    │  │
//! │  └────────┬─────────┘  └──────┬───────┘  └───────────────┘  │
//! │           └──────────┬────────┘                              │
//! │               ┌──────┴──────┐                                │
//! │               │  ApiClient  │  MockApiClient | HttpApiClient │
//! │               └─────────────┘                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `ApiClient` trait lets the page run against the built-in mock or a
//! real backend without touching the workflow.

pub mod client;
pub mod content;
pub mod error;
pub mod login;
pub mod model;
pub mod workflow;

pub use client::{ApiClient, MockApiClient, Sleeper};
pub use error::{ApiError, Result, ValidationError};
pub use login::{Navigator, login};
pub use model::{FormField, LoginRedirect, WaitlistForm, WaitlistReceipt};
pub use workflow::{MessageTone, SubmissionState, WaitlistWorkflow, WorkflowError};
