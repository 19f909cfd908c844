//! Customer list form: the state-synchronization component.
//!
//! Owns the in-memory customer collection and the shared name/email input
//! pair used by both the create and edit flows. The collection is a snapshot
//! of server state as of the last successful operation: rebuilt on `load`,
//! appended on `create`, patched in place on `update`, pruned on `delete`.
//! Nothing here retries or rolls back.

use crate::client::CustomerApi;
use crate::errors::AppError;
use crate::models::{Customer, CustomerDraft};

/// What a call to [`CustomerListForm::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A customer was created; carries the server-assigned id.
    Created(String),
    /// The edit target was updated.
    Updated(String),
    /// A field was blank; no request was sent and no state changed.
    Ignored,
}

/// The customer form and its local view of the remote collection.
///
/// Every mutating operation takes `&mut self` and is awaited to completion
/// before the caller can issue the next one, so two in-flight submits cannot
/// overlap.
pub struct CustomerListForm<C> {
    api: C,
    customers: Vec<Customer>,
    edit_target: Option<String>,
    name_input: String,
    email_input: String,
}

impl<C: CustomerApi> CustomerListForm<C> {
    pub fn new(api: C) -> Self {
        Self {
            api,
            customers: Vec::new(),
            edit_target: None,
            name_input: String::new(),
            email_input: String::new(),
        }
    }

    /// Current local view, in the order the server returned it.
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    /// Id of the customer currently being edited, if any.
    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    pub fn name_input(&self) -> &str {
        &self.name_input
    }

    pub fn email_input(&self) -> &str {
        &self.email_input
    }

    pub fn set_name_input(&mut self, value: impl Into<String>) {
        self.name_input = value.into();
    }

    pub fn set_email_input(&mut self, value: impl Into<String>) {
        self.email_input = value.into();
    }

    /// Replace the entire local collection with the server's sequence.
    pub async fn load(&mut self) -> Result<(), AppError> {
        let rows = self.api.list().await?;
        tracing::debug!("Loaded {} customers", rows.len());
        self.customers = rows;
        Ok(())
    }

    /// Submit the current input pair: update when in edit mode, create
    /// otherwise. A blank field makes this a silent no-op.
    ///
    /// After an attempted update, edit mode is exited and both fields are
    /// cleared whether or not the request succeeded; only the collection
    /// patch depends on success.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, AppError> {
        let name = self.name_input.clone();
        let email = self.email_input.clone();

        if name.is_empty() || email.is_empty() {
            return Ok(SubmitOutcome::Ignored);
        }

        if let Some(id) = self.edit_target.clone() {
            let result = self.update(&id, &name, &email).await;
            self.edit_target = None;
            self.clear_fields();
            return result.map(|()| SubmitOutcome::Updated(id));
        }

        let id = self.create(&name, &email).await?;
        Ok(SubmitOutcome::Created(id))
    }

    /// Create a customer and append the row the server echoes back.
    pub async fn create(&mut self, name: &str, email: &str) -> Result<String, AppError> {
        let draft = CustomerDraft::new(name, email);
        let row = self.api.create(&draft).await?;
        tracing::info!("Created customer {}", row.id);

        let id = row.id.clone();
        self.customers.push(row);
        Ok(id)
    }

    /// Update a customer, then patch the matching local entry in place.
    ///
    /// The patched entry is rebuilt from the submitted pair and keeps only
    /// id/name/email; see [`Customer::from_draft`].
    pub async fn update(&mut self, id: &str, name: &str, email: &str) -> Result<(), AppError> {
        let draft = CustomerDraft::new(name, email);
        self.api.update(id, &draft).await?;
        tracing::info!("Updated customer {}", id);

        if let Some(row) = self.customers.iter_mut().find(|c| c.id == id) {
            *row = Customer::from_draft(id, &draft);
        }
        Ok(())
    }

    /// Delete a customer, then drop the matching local entry.
    ///
    /// Removal is sequenced after the request: a failed delete leaves the
    /// entry in place. Deleting an id the collection does not hold changes
    /// nothing locally.
    pub async fn delete(&mut self, id: &str) -> Result<(), AppError> {
        self.api.delete(id).await?;
        tracing::info!("Deleted customer {}", id);

        self.customers.retain(|c| c.id != id);
        Ok(())
    }

    /// Enter edit mode for a customer and pre-fill the input pair.
    pub fn begin_edit(&mut self, id: &str, name: &str, email: &str) {
        self.edit_target = Some(id.to_string());
        self.name_input = name.to_string();
        self.email_input = email.to_string();
    }

    /// Blank both input fields.
    pub fn clear_fields(&mut self) {
        self.name_input.clear();
        self.email_input.clear();
    }
}
