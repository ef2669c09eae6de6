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

//! Error types for the querybridge client.
//!
//! Two layers: [`ClientError`] covers a single REST interaction (transport,
//! HTTP status, payload decoding), while [`PollError`] covers the lifecycle of
//! a polled task (submission, attempt budget, cancellation). A single failed
//! status fetch is transient and handled inside the poller; it only surfaces
//! as `PollError::Fetch` when it persists through the final attempt.
//!
//! A backend-reported `failed` task is deliberately NOT an error: the poller
//! returns the failed status object normally and callers branch on
//! [`TaskState::Failed`](crate::models::TaskState::Failed). Only the client's
//! own failure modes (timeout, missing task id, cancellation) are raised.

use thiserror::Error;

/// Errors from a single REST interaction with the backend.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The underlying HTTP request failed (connection, TLS, timeout).
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-success HTTP status.
    #[error("Backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Failed to decode response body: {source}")]
    Deserialize {
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid absolute URL.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

/// Errors from tracking an asynchronous task to completion.
#[derive(Debug, Error)]
pub enum PollError {
    /// A status fetch (or the submission call itself) failed and no attempts
    /// remained to retry it.
    #[error("Task status fetch failed: {0}")]
    Fetch(#[from] ClientError),

    /// The task never reached a terminal state within the attempt budget.
    #[error("Task '{task_id}' did not reach a terminal state within {attempts} attempts")]
    Timeout { task_id: String, attempts: u32 },

    /// The submission response carried no extractable task id; polling was
    /// never started.
    #[error("Submission response contained no task id")]
    MissingTaskId,

    /// The poll was cancelled through its cancellation token.
    #[error("Polling of task '{task_id}' was cancelled")]
    Cancelled { task_id: String },
}
