//! Customer model matching the REST service's row format.

use serde::{Deserialize, Serialize};

/// A customer row as the service returns it.
///
/// `status` and `created_at` are assigned by the service and only displayed;
/// they default so a partial row still deserializes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub status: bool,
    #[serde(default)]
    pub created_at: String,
}

impl Customer {
    /// Rebuild a row from the pair the user submitted.
    ///
    /// The update endpoint echoes nothing useful back, so the local copy
    /// keeps only id/name/email; `status` and `created_at` fall back to
    /// their defaults. The deployed web client does the same, and both
    /// front ends must agree about the server state they mirror.
    pub fn from_draft(id: &str, draft: &CustomerDraft) -> Self {
        Self {
            id: id.to_string(),
            name: draft.name.clone(),
            email: draft.email.clone(),
            status: bool::default(),
            created_at: String::default(),
        }
    }
}

/// Request body shared by the create and update endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerDraft {
    pub name: String,
    pub email: String,
}

impl CustomerDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Response envelope of GET /read.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope {
    pub rows: Vec<Customer>,
}

/// Response envelope of POST /create.
#[derive(Debug, Deserialize)]
pub struct CreateEnvelope {
    pub rows: Customer,
}
