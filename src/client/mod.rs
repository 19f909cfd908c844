//! HTTP collaborator for the customer service.
//!
//! The form only ever talks to the service through the [`CustomerApi`] trait;
//! [`HttpCustomerApi`] is the reqwest-backed implementation used in production.

use async_trait::async_trait;

use crate::config::Config;
use crate::errors::AppError;
use crate::models::{CreateEnvelope, Customer, CustomerDraft, ListEnvelope};

/// The four operations of the customer collection resource.
#[async_trait]
pub trait CustomerApi {
    /// GET /read - fetch the full collection.
    async fn list(&self) -> Result<Vec<Customer>, AppError>;

    /// POST /create - create a customer, returning the server's row.
    async fn create(&self, draft: &CustomerDraft) -> Result<Customer, AppError>;

    /// PATCH /update?id=<id> - update name/email; response body is ignored.
    async fn update(&self, id: &str, draft: &CustomerDraft) -> Result<(), AppError>;

    /// DELETE /delete?id=<id> - delete a customer; response body is ignored.
    async fn delete(&self, id: &str) -> Result<(), AppError>;
}

/// reqwest-backed client for the customer service.
#[derive(Clone)]
pub struct HttpCustomerApi {
    http: reqwest::Client,
    base_url: String,
}

impl HttpCustomerApi {
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Map a non-success response to an error carrying status and body.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, AppError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let body = resp.text().await.unwrap_or_default();
    Err(AppError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl CustomerApi for HttpCustomerApi {
    async fn list(&self) -> Result<Vec<Customer>, AppError> {
        let resp = self.http.get(self.url("/read")).send().await?;
        let body: ListEnvelope = check_status(resp).await?.json().await?;
        Ok(body.rows)
    }

    async fn create(&self, draft: &CustomerDraft) -> Result<Customer, AppError> {
        let resp = self
            .http
            .post(self.url("/create"))
            .json(draft)
            .send()
            .await?;
        let body: CreateEnvelope = check_status(resp).await?.json().await?;
        Ok(body.rows)
    }

    async fn update(&self, id: &str, draft: &CustomerDraft) -> Result<(), AppError> {
        let resp = self
            .http
            .patch(self.url("/update"))
            .query(&[("id", id)])
            .json(draft)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), AppError> {
        let resp = self
            .http
            .delete(self.url("/delete"))
            .query(&[("id", id)])
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }
}
