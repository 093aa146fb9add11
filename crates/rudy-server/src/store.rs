//! Waitlist Storage
//!
//! Entries are keyed by normalized email so the same person cannot sign up
//! twice.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use rudy_core::WaitlistForm;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} is already on the waiting list")]
    Duplicate(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// A stored signup
#[derive(Clone, Debug, Serialize)]
pub struct WaitlistEntry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub account_spent: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Build an entry from an already validated form
    pub fn from_form(form: WaitlistForm) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: form.name.trim().to_string(),
            email: normalize_email(&form.email),
            company: non_empty(&form.company),
            account_spent: non_empty(&form.account_spent),
            created_at: Utc::now(),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Waitlist storage trait
pub trait WaitlistStore: Send + Sync {
    /// Add a new entry; fails if the email is already listed
    fn insert(&self, entry: WaitlistEntry) -> Result<()>;

    fn contains(&self, email: &str) -> Result<bool>;

    fn len(&self) -> Result<usize>;
}

/// In-memory waitlist (for development)
#[derive(Default)]
pub struct MemoryWaitlistStore {
    entries: RwLock<HashMap<String, WaitlistEntry>>,
}

impl MemoryWaitlistStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<E>(_: E) -> StoreError {
    StoreError::Storage("waitlist lock poisoned".into())
}

impl WaitlistStore for MemoryWaitlistStore {
    fn insert(&self, entry: WaitlistEntry) -> Result<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        if entries.contains_key(&entry.email) {
            return Err(StoreError::Duplicate(entry.email));
        }
        entries.insert(entry.email.clone(), entry);
        Ok(())
    }

    fn contains(&self, email: &str) -> Result<bool> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.contains_key(&normalize_email(email)))
    }

    fn len(&self) -> Result<usize> {
        Ok(self.entries.read().map_err(poisoned)?.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(email: &str) -> WaitlistForm {
        WaitlistForm {
            name: " Ada ".into(),
            email: email.into(),
            company: String::new(),
            account_spent: "2k".into(),
        }
    }

    #[test]
    fn test_entry_normalization() {
        let entry = WaitlistEntry::from_form(form(" Ada@Example.com "));
        assert_eq!(entry.name, "Ada");
        assert_eq!(entry.email, "ada@example.com");
        assert_eq!(entry.company, None);
        assert_eq!(entry.account_spent.as_deref(), Some("2k"));
    }

    #[test]
    fn test_duplicate_email_rejected() {
        let store = MemoryWaitlistStore::new();
        store.insert(WaitlistEntry::from_form(form("ada@example.com"))).unwrap();

        let err = store
            .insert(WaitlistEntry::from_form(form("ADA@example.com")))
            .unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(email) if email == "ada@example.com"));
        assert_eq!(store.len().unwrap(), 1);
        assert!(store.contains("Ada@Example.com").unwrap());
    }
}
