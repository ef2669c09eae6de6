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

//! Task Poller Module
//!
//! Converts a one-shot "submit job, get back an id" interaction into a
//! synchronous-looking asynchronous wait with progress reporting, bounded
//! retries, and a single success/failure outcome.
//!
//! The loop polls at a fixed interval, not exponential backoff: the consumer
//! is typically a progress readout, where predictable update cadence matters
//! more than shaving server load. Each iteration suspends at exactly two
//! points: the status fetch and the inter-poll sleep. A single invocation
//! holds no shared state, so any number of polls for distinct task ids can
//! run concurrently in one process without interference.
//!
//! Terminal detection is an exact match against `success` and `failed`. An
//! unrecognized status string is treated the same as "still running": it
//! burns an attempt and the loop keeps going, up to the attempt budget.
//!
//! A backend-reported `failed` task is an `Ok` return carrying the failed
//! status object; only the poller's own failure modes (exhausted budget,
//! missing task id on submission, cancellation) are errors. Callers branch
//! on [`TaskState::Failed`] for domain failures.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::error::{ClientError, PollError};
use crate::models::{SubmitResponse, TaskState, TaskStatus};

/// Default attempt budget (60 polls).
pub const DEFAULT_MAX_ATTEMPTS: u32 = 60;

/// Default fixed delay between polls (2 seconds).
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Anything that can answer "what is the current status of this task".
///
/// [`ApiClient`](crate::api::ApiClient) implements this against the real
/// backend; tests implement it with scripted responses.
#[async_trait]
pub trait TaskStatusSource: Send + Sync {
    async fn task_status(&self, task_id: &str) -> Result<TaskStatus, ClientError>;
}

#[async_trait]
impl<T: TaskStatusSource> TaskStatusSource for &T {
    async fn task_status(&self, task_id: &str) -> Result<TaskStatus, ClientError> {
        (**self).task_status(task_id).await
    }
}

/// Configuration for the task poller.
///
/// # Construction
///
/// Use [`PollConfig::builder()`]:
///
/// ```rust,ignore
/// let config = PollConfig::builder()
///     .max_attempts(30)
///     .interval(Duration::from_secs(5))
///     .build();
/// ```
///
/// Or [`PollConfig::default()`] for 60 attempts at 2-second intervals, a
/// 2-minute wall-clock ceiling.
#[derive(Debug, Clone)]
pub struct PollConfig {
    max_attempts: u32,
    interval: Duration,
}

impl PollConfig {
    /// Creates a new configuration builder with default values.
    pub fn builder() -> PollConfigBuilder {
        PollConfigBuilder::default()
    }

    /// Maximum number of status fetches before the poll gives up.
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Fixed delay between consecutive polls.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

/// Builder for [`PollConfig`].
#[derive(Debug, Default)]
pub struct PollConfigBuilder {
    max_attempts: Option<u32>,
    interval: Option<Duration>,
}

impl PollConfigBuilder {
    /// Sets the attempt budget. Values below 1 are raised to 1.
    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = Some(max_attempts.max(1));
        self
    }

    /// Sets the fixed inter-poll delay.
    pub fn interval(mut self, interval: Duration) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Builds the configuration, filling unset fields with defaults.
    pub fn build(self) -> PollConfig {
        PollConfig {
            max_attempts: self.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
            interval: self.interval.unwrap_or(DEFAULT_POLL_INTERVAL),
        }
    }
}

/// Polls a task's status until it reaches a terminal state.
///
/// Generic over the status source so the polling logic is testable without a
/// live backend. The poller carries a [`CancellationToken`]; the default
/// token never fires, so callers that ignore cancellation get the plain
/// bounded-retry behavior.
pub struct TaskPoller<S> {
    source: S,
    config: PollConfig,
    cancel: CancellationToken,
}

impl<S: TaskStatusSource> TaskPoller<S> {
    /// Creates a poller with the default configuration.
    pub fn new(source: S) -> Self {
        Self::with_config(source, PollConfig::default())
    }

    /// Creates a poller with an explicit configuration.
    pub fn with_config(source: S, config: PollConfig) -> Self {
        Self {
            source,
            config,
            cancel: CancellationToken::new(),
        }
    }

    /// Attaches a cancellation token. Cancelling the token makes an in-flight
    /// poll return [`PollError::Cancelled`] promptly, whether it is waiting
    /// on the network or sleeping between attempts.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Polls `task_id` until it reaches `success` or `failed`.
    ///
    /// `on_progress` is invoked on every successful poll, terminal ones
    /// included, in strict poll order. Progress values are reported exactly
    /// as the backend returned them.
    ///
    /// A fetch error is tolerated while attempts remain; the loop sleeps and
    /// retries. On exhaustion the poll fails with [`PollError::Timeout`],
    /// unless the final attempt itself failed to fetch, in which case that
    /// error is propagated instead of being swallowed.
    pub async fn poll<F>(&self, task_id: &str, mut on_progress: F) -> Result<TaskStatus, PollError>
    where
        F: FnMut(u8, &TaskState),
    {
        let mut last_error: Option<ClientError> = None;

        for attempt in 1..=self.config.max_attempts {
            let fetched = tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    debug!(task_id, attempt, "poll cancelled");
                    return Err(PollError::Cancelled {
                        task_id: task_id.to_string(),
                    });
                }
                result = self.source.task_status(task_id) => result,
            };

            match fetched {
                Ok(status) => {
                    last_error = None;
                    on_progress(status.progress, &status.status);

                    if status.status.is_terminal() {
                        debug!(
                            task_id,
                            attempt,
                            state = %status.status,
                            "task reached terminal state"
                        );
                        return Ok(status);
                    }
                }
                Err(e) => {
                    warn!(task_id, attempt, error = %e, "status fetch failed");
                    last_error = Some(e);
                }
            }

            // Sleep only between attempts, never after the last one.
            if attempt < self.config.max_attempts {
                tokio::select! {
                    biased;
                    _ = self.cancel.cancelled() => {
                        debug!(task_id, attempt, "poll cancelled during backoff");
                        return Err(PollError::Cancelled {
                            task_id: task_id.to_string(),
                        });
                    }
                    _ = tokio::time::sleep(self.config.interval) => {}
                }
            }
        }

        match last_error {
            Some(e) => Err(PollError::Fetch(e)),
            None => Err(PollError::Timeout {
                task_id: task_id.to_string(),
                attempts: self.config.max_attempts,
            }),
        }
    }

    /// Submits a job and waits for the resulting task to reach a terminal
    /// state.
    ///
    /// `submit` performs the submission call. Its response must carry a task
    /// id (nested or top-level, see [`SubmitResponse::task_id`]); if it does
    /// not, the call fails with [`PollError::MissingTaskId`] without a single
    /// status fetch.
    pub async fn submit_and_wait<Sub, Fut, F>(
        &self,
        submit: Sub,
        on_progress: F,
    ) -> Result<TaskStatus, PollError>
    where
        Sub: FnOnce() -> Fut,
        Fut: Future<Output = Result<SubmitResponse, ClientError>>,
        F: FnMut(u8, &TaskState),
    {
        let response = submit().await?;
        let task_id = response
            .task_id()
            .ok_or(PollError::MissingTaskId)?
            .to_string();

        info!(task_id, "job submitted, tracking until terminal");
        self.poll(&task_id, on_progress).await
    }
}
