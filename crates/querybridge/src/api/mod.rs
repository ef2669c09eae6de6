/*
 *  Copyright 2026 Querybridge Software
 *
 *  Licensed under the Apache License, Version 2.0 (the "License");
 *  you may not use this file except in compliance with the License.
 *  You may obtain a copy of the License at
 *
 *      http://www.apache.org/licenses/LICENSE-2.0
 *
 *  Unless required by applicable law or agreed to in writing, software
 *  distributed under the License is distributed on an "AS IS" BASIS,
 *  WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *  See the License for the specific language governing permissions and
 *  limitations under the License.
 */

//! REST client for the querybridge backend.
//!
//! The client's boundary is exactly two interactions: job submission
//! (`POST /api/set-config`, `POST /api/update-config/{id}`) and status reads
//! (`GET /api/task-status/{id}`). All persistence lives server-side; the
//! client holds no local state beyond its connection pool.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::RequestBuilder;
use tracing::debug;
use url::Url;

use crate::error::{ClientError, PollError};
use crate::models::task::StatusEnvelope;
use crate::models::{DatabaseConfigRequest, SchemaFile, SubmitResponse, TaskState, TaskStatus};
use crate::poller::{PollConfig, TaskPoller, TaskStatusSource};

/// Default per-request timeout.
const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error bodies are truncated to this many characters before being embedded
/// in a [`ClientError::Http`].
const MAX_ERROR_BODY_LEN: usize = 512;

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Absolute base URL of the backend, e.g. `https://backend.example.com`.
    pub base_url: String,
    /// Optional bearer token attached to every request.
    pub api_token: Option<String>,
    /// Per-request timeout.
    pub request_timeout: Duration,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_token: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        self.api_token = Some(token.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

/// HTTP client for the backend's submission and status endpoints.
///
/// Cloning is cheap; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    api_token: Option<String>,
    poll_config: PollConfig,
}

impl ApiClient {
    /// Builds a client from connection settings.
    ///
    /// The base URL is validated up front so a malformed one fails here
    /// rather than on the first request.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let trimmed = config.base_url.trim_end_matches('/');
        Url::parse(trimmed).map_err(|source| ClientError::InvalidBaseUrl {
            url: config.base_url.clone(),
            source,
        })?;

        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: trimmed.to_string(),
            api_token: config.api_token,
            poll_config: PollConfig::default(),
        })
    }

    /// Overrides the poll configuration used by the `*_and_wait` helpers.
    pub fn with_poll_config(mut self, poll_config: PollConfig) -> Self {
        self.poll_config = poll_config;
        self
    }

    /// Returns a poller backed by this client, carrying its poll
    /// configuration. Attach a cancellation token via
    /// [`TaskPoller::with_cancellation`] before long waits in interactive
    /// contexts.
    pub fn poller(&self) -> TaskPoller<&ApiClient> {
        TaskPoller::with_config(self, self.poll_config.clone())
    }

    /// Submits a new database configuration. Returns the raw submission
    /// envelope; pair with [`ApiClient::set_config_and_wait`] to track the
    /// resulting task.
    pub async fn set_database_config(
        &self,
        request: &DatabaseConfigRequest,
    ) -> Result<SubmitResponse, ClientError> {
        let url = format!("{}/api/set-config", self.base_url);
        self.submit_config(url, request).await
    }

    /// Submits an update to an existing database configuration.
    pub async fn update_database_config(
        &self,
        config_id: &str,
        request: &DatabaseConfigRequest,
    ) -> Result<SubmitResponse, ClientError> {
        let url = format!(
            "{}/api/update-config/{}",
            self.base_url,
            urlencoding::encode(config_id)
        );
        self.submit_config(url, request).await
    }

    /// Submits a new configuration and polls the resulting task to a
    /// terminal state.
    pub async fn set_config_and_wait<F>(
        &self,
        request: &DatabaseConfigRequest,
        on_progress: F,
    ) -> Result<TaskStatus, PollError>
    where
        F: FnMut(u8, &TaskState),
    {
        self.poller()
            .submit_and_wait(|| self.set_database_config(request), on_progress)
            .await
    }

    /// Submits a configuration update and polls the resulting task to a
    /// terminal state.
    pub async fn update_config_and_wait<F>(
        &self,
        config_id: &str,
        request: &DatabaseConfigRequest,
        on_progress: F,
    ) -> Result<TaskStatus, PollError>
    where
        F: FnMut(u8, &TaskState),
    {
        self.poller()
            .submit_and_wait(
                || self.update_database_config(config_id, request),
                on_progress,
            )
            .await
    }

    async fn submit_config(
        &self,
        url: String,
        request: &DatabaseConfigRequest,
    ) -> Result<SubmitResponse, ClientError> {
        debug!(url, db_name = %request.db_name, "submitting database configuration");

        let builder = self.authorized(self.http.post(&url));
        let builder = match &request.schema_file {
            // File uploads go as multipart; plain configurations as JSON.
            Some(file) => builder.multipart(Self::config_form(request, file)),
            None => builder.json(request),
        };

        let body = Self::success_body(builder).await?;
        serde_json::from_str(&body).map_err(|source| ClientError::Deserialize { source })
    }

    fn config_form(request: &DatabaseConfigRequest, file: &SchemaFile) -> Form {
        let mut form = Form::new()
            .text("db_url", request.db_url.clone())
            .text("db_name", request.db_name.clone())
            .text("user_id", request.user_id.clone());
        if let Some(rule) = &request.business_rule {
            form = form.text("business_rule", rule.clone());
        }
        form.part(
            "file",
            Part::bytes(file.contents.clone()).file_name(file.file_name.clone()),
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Sends the request and returns the body of a 2xx response; non-success
    /// statuses become [`ClientError::Http`] with a truncated body snippet.
    async fn success_body(builder: RequestBuilder) -> Result<String, ClientError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Truncate on a char boundary; error bodies can be HTML pages.
            let body: String = body.chars().take(MAX_ERROR_BODY_LEN).collect();
            return Err(ClientError::Http {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl TaskStatusSource for ApiClient {
    async fn task_status(&self, task_id: &str) -> Result<TaskStatus, ClientError> {
        let url = format!(
            "{}/api/task-status/{}",
            self.base_url,
            urlencoding::encode(task_id)
        );

        let body = Self::success_body(self.authorized(self.http.get(&url))).await?;
        let envelope: StatusEnvelope =
            serde_json::from_str(&body).map_err(|source| ClientError::Deserialize { source })?;
        Ok(envelope.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_base_url() {
        let result = ApiClient::new(ClientConfig::new("not a url"));
        assert!(matches!(result, Err(ClientError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn trims_trailing_slash() {
        let client = ApiClient::new(ClientConfig::new("https://backend.example.com/")).unwrap();
        assert_eq!(client.base_url, "https://backend.example.com");
    }

    #[test]
    fn config_builder_chain() {
        let config = ClientConfig::new("https://backend.example.com")
            .with_api_token("secret")
            .with_request_timeout(Duration::from_secs(5));
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
    }
}
