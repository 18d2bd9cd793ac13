//! Client for the remote planning service.
//!
//! The service is optional. Every call returns a [`Result`] and callers are
//! expected to treat [`FurrowError::is_remote_failure`] errors as a signal
//! to fall back to local generation rather than as user-facing failures.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::{
    error::{FurrowError, RemoteResultExt, Result},
    models::{CultivationPlan, Observation, ObservationFeedback},
    params::PlanInput,
};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// The two operations the planning service offers.
#[async_trait]
pub trait PlanApi: Send + Sync {
    /// `POST /api/plans`
    async fn create_plan(&self, input: &PlanInput) -> Result<CultivationPlan>;

    /// `POST /api/plans/{plan_id}/observations`
    async fn add_observation(
        &self,
        plan_id: &str,
        observation: &Observation,
    ) -> Result<ObservationFeedback>;
}

/// JSON-over-HTTP implementation of [`PlanApi`].
#[derive(Debug, Clone)]
pub struct HttpPlanApi {
    client: Client,
    base_url: String,
}

impl HttpPlanApi {
    /// Create a client for the service rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::Configuration` if the HTTP client cannot be
    /// constructed.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FurrowError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FurrowError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }
        response
            .json::<T>()
            .await
            .remote_context("Failed to decode service response")
    }
}

#[async_trait]
impl PlanApi for HttpPlanApi {
    async fn create_plan(&self, input: &PlanInput) -> Result<CultivationPlan> {
        let url = self.url("/api/plans");
        debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(input)
            .send()
            .await
            .remote_context("Plan request failed")?;
        Self::decode(response).await
    }

    async fn add_observation(
        &self,
        plan_id: &str,
        observation: &Observation,
    ) -> Result<ObservationFeedback> {
        let url = self.url(&format!("/api/plans/{plan_id}/observations"));
        debug!("POST {url}");
        let response = self
            .client
            .post(&url)
            .json(observation)
            .send()
            .await
            .remote_context("Observation request failed")?;
        Self::decode(response).await
    }
}
