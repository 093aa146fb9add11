//! HTTP Handlers

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Serialize;

use rudy_core::{LoginRedirect, WaitlistForm, WaitlistReceipt};

use crate::state::AppState;
use crate::store::{StoreError, WaitlistEntry};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub waitlist_size: usize,
}

/// Error body understood by the landing page: `detail` is shown verbatim
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
    pub code: String,
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, code: &str, detail: impl Into<String>) -> HandlerError {
    (
        status,
        Json(ErrorResponse {
            detail: detail.into(),
            code: code.into(),
        }),
    )
}

pub const DUPLICATE_DETAIL: &str = "This email is already on the waiting list.";

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let waitlist_size = state.waitlist.len().unwrap_or_else(|e| {
        tracing::warn!("Waitlist unavailable: {}", e);
        0
    });

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        waitlist_size,
    })
}

/// Where to send the visitor for Google sign-in
pub async fn login_redirect(State(state): State<AppState>) -> Json<LoginRedirect> {
    Json(LoginRedirect {
        authorization_url: Some(state.config.authorization_url.clone()),
    })
}

/// Waitlist signup
pub async fn join_waitlist(
    State(state): State<AppState>,
    payload: Result<Json<WaitlistForm>, JsonRejection>,
) -> Result<Json<WaitlistReceipt>, HandlerError> {
    let Json(form) = payload.map_err(|rejection| {
        error(rejection.status(), "INVALID_BODY", rejection.body_text())
    })?;

    form.validate().map_err(|e| {
        error(StatusCode::UNPROCESSABLE_ENTITY, "INVALID_FORM", e.user_message())
    })?;

    let duplicate = state.waitlist.contains(&form.email).map_err(|e| {
        tracing::error!("Waitlist lookup failed: {}", e);
        error(StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR", "Could not reach the waiting list.")
    })?;
    if duplicate {
        return Err(error(StatusCode::CONFLICT, "DUPLICATE_EMAIL", DUPLICATE_DETAIL));
    }

    let latency = state.config.waitlist_latency;
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }

    let entry = WaitlistEntry::from_form(form);
    let id = entry.id;
    match state.waitlist.insert(entry) {
        Ok(()) => {
            tracing::info!(%id, "New waitlist signup");
            Ok(Json(WaitlistReceipt { success: true }))
        }
        Err(StoreError::Duplicate(_)) => {
            Err(error(StatusCode::CONFLICT, "DUPLICATE_EMAIL", DUPLICATE_DETAIL))
        }
        Err(e) => {
            tracing::error!("Waitlist insert failed: {}", e);
            Err(error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "Could not reach the waiting list.",
            ))
        }
    }
}
