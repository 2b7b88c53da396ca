//! Assignee aggregate and its create/patch payloads.

use super::AssigneeValidationError;
use crate::store::{Record, record_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

record_id!(
    /// Unique identifier for an assignee record.
    AssigneeId
);

/// Role given to assignees created without one.
pub const DEFAULT_ROLE: &str = "Member";

/// Avatar given to assignees created without one.
pub const DEFAULT_AVATAR: &str = "👤";

/// Assignee aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignee {
    id: AssigneeId,
    name: String,
    email: String,
    role: String,
    avatar: String,
    created_at: DateTime<Utc>,
}

impl Assignee {
    /// Creates an assignee from validated input.
    #[must_use]
    pub fn create(id: AssigneeId, input: ValidatedAssignee, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: input.name,
            email: input.email,
            role: input.role,
            avatar: input.avatar,
            created_at,
        }
    }

    /// Returns the assignee identifier.
    #[must_use]
    pub const fn id(&self) -> AssigneeId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the role.
    #[must_use]
    pub fn role(&self) -> &str {
        &self.role
    }

    /// Returns the avatar token.
    #[must_use]
    pub fn avatar(&self) -> &str {
        &self.avatar
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns `true` when this assignee's email equals `email`, ignoring
    /// case.
    #[must_use]
    pub fn has_email(&self, email: &str) -> bool {
        self.email.to_lowercase() == email.to_lowercase()
    }

    /// Merges `patch` onto the assignee; absent fields are kept.
    pub fn apply(&mut self, patch: AssigneePatch) {
        let AssigneePatch {
            name,
            email,
            role,
            avatar,
        } = patch;
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(role) = role {
            self.role = role;
        }
        if let Some(avatar) = avatar {
            self.avatar = avatar;
        }
    }
}

impl Record for Assignee {
    type Id = AssigneeId;

    fn id(&self) -> AssigneeId {
        self.id
    }
}

/// Unvalidated input for a new assignee.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewAssignee {
    name: String,
    email: String,
    role: Option<String>,
    avatar: Option<String>,
}

impl NewAssignee {
    /// Creates input with the required fields.
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            role: None,
            avatar: None,
        }
    }

    /// Sets the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Sets the avatar.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// Checks required fields and the email format, then normalizes.
    ///
    /// The name and email are trimmed, the email is lower-cased, and blank
    /// role or avatar values fall back to [`DEFAULT_ROLE`] and
    /// [`DEFAULT_AVATAR`].
    ///
    /// # Errors
    ///
    /// Returns [`AssigneeValidationError::MissingRequiredField`] when the
    /// name or email is blank, or [`AssigneeValidationError::InvalidEmail`]
    /// when the email is malformed.
    pub fn validate(self) -> Result<ValidatedAssignee, AssigneeValidationError> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err(AssigneeValidationError::MissingRequiredField);
        }
        if !is_valid_email(email) {
            return Err(AssigneeValidationError::InvalidEmail(email.to_owned()));
        }

        Ok(ValidatedAssignee {
            name: name.to_owned(),
            email: email.to_lowercase(),
            role: non_blank_or(self.role, DEFAULT_ROLE),
            avatar: non_blank_or(self.avatar, DEFAULT_AVATAR),
        })
    }
}

/// Assignee input that passed validation; only [`NewAssignee::validate`]
/// produces it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedAssignee {
    name: String,
    email: String,
    role: String,
    avatar: String,
}

impl ValidatedAssignee {
    /// Returns the normalized, lower-cased email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Partial update for an assignee.
///
/// Updates are merged as-is; uniqueness is only checked at creation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssigneePatch {
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
    avatar: Option<String>,
}

impl AssigneePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the email.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Replaces the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Replaces the avatar.
    #[must_use]
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }
}

fn non_blank_or(value: Option<String>, fallback: &str) -> String {
    value
        .map(|raw| raw.trim().to_owned())
        .filter(|trimmed| !trimmed.is_empty())
        .unwrap_or_else(|| fallback.to_owned())
}

/// Accepts `local@domain.tld`: no whitespace, exactly one `@`, and a dot in
/// the domain with characters on both sides.
fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(index, ch)| ch == '.' && index > 0 && index + 1 < domain.len())
}
