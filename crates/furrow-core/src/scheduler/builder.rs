//! Builder for creating and configuring Scheduler instances.

use std::{sync::Arc, time::Duration};

use log::debug;

use super::Scheduler;
use crate::{
    config::Settings,
    error::Result,
    remote::{HttpPlanApi, PlanApi, DEFAULT_TIMEOUT},
};

/// Builder for creating and configuring Scheduler instances.
pub struct SchedulerBuilder {
    api_url: Option<String>,
    timeout: Duration,
    api: Option<Arc<dyn PlanApi>>,
    offline: bool,
}

impl SchedulerBuilder {
    /// Creates a new builder with no remote service.
    pub fn new() -> Self {
        Self {
            api_url: None,
            timeout: DEFAULT_TIMEOUT,
            api: None,
            offline: false,
        }
    }

    /// Apply values from loaded settings.
    pub fn with_settings(self, settings: &Settings) -> Self {
        self.with_api_url(settings.api_url.as_deref())
            .with_timeout(settings.timeout())
    }

    /// Sets the planning service base URL. `None` keeps the current value.
    pub fn with_api_url<S: AsRef<str>>(mut self, url: Option<S>) -> Self {
        if let Some(url) = url {
            self.api_url = Some(url.as_ref().to_string());
        }
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a custom service implementation instead of HTTP.
    pub fn with_api(mut self, api: Arc<dyn PlanApi>) -> Self {
        self.api = Some(api);
        self
    }

    /// Never contact the service, even if one is configured.
    pub fn offline(mut self, offline: bool) -> Self {
        self.offline = offline;
        self
    }

    /// Builds the configured scheduler.
    ///
    /// # Errors
    ///
    /// Returns `FurrowError::Configuration` if the HTTP client cannot be
    /// created.
    pub fn build(self) -> Result<Scheduler> {
        if self.offline {
            debug!("Scheduler running offline");
            return Ok(Scheduler::new(None));
        }
        if let Some(api) = self.api {
            return Ok(Scheduler::new(Some(api)));
        }
        let api = match self.api_url {
            Some(url) => {
                debug!("Scheduler using planning service at {url}");
                Some(Arc::new(HttpPlanApi::new(url, self.timeout)?) as Arc<dyn PlanApi>)
            }
            None => None,
        };
        Ok(Scheduler::new(api))
    }
}

impl Default for SchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
