//! Waitlist and login data types

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The waitlist signup form as typed by the visitor.
///
/// Field names match the JSON body of `POST /waiting-list`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub account_spent: String,
}

/// Addressable form inputs, keyed by their HTML `name` attribute
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Company,
    AccountSpent,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Company, Self::AccountSpent];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Company => "company",
            Self::AccountSpent => "account_spent",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.as_str() == name)
    }

    pub const fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email)
    }

    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            _ => "text",
        }
    }

    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Your email address",
            Self::Company => "Your company",
            Self::AccountSpent => "Account spent",
        }
    }
}

impl WaitlistForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Company => &self.company,
            FormField::AccountSpent => &self.account_spent,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Name => self.name = value,
            FormField::Email => self.email = value,
            FormField::Company => self.company = value,
            FormField::AccountSpent => self.account_spent = value,
        }
    }

    /// Update a field by input name. Unknown names are ignored.
    pub fn set_by_name(&mut self, name: &str, value: impl Into<String>) -> bool {
        match FormField::from_name(name) {
            Some(field) => {
                self.set(field, value);
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Same checks the browser applies to the `required` and `type="email"` inputs.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingName);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingEmail);
        }
        if !is_email_shaped(email) {
            return Err(ValidationError::InvalidEmail(email.to_string()));
        }
        Ok(())
    }
}

/// `local@domain` check matching what the browser accepts for `type="email"`.
///
/// Dotless domains such as `localhost` pass; empty domain labels do not.
pub fn is_email_shaped(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain.split('.').all(|label| {
        !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
    })
}

/// Response of `GET /auth/login/google`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRedirect {
    #[serde(default)]
    pub authorization_url: Option<String>,
}

/// Response of `POST /waiting-list`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistReceipt {
    #[serde(default)]
    pub success: bool,
}
