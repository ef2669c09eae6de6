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

//! # Querybridge
//!
//! Client library for the querybridge AI database query backend. The backend
//! executes long-running jobs (database configuration creation and updates,
//! schema-file processing) asynchronously: a submission call returns an opaque
//! task id, and the job's progress is observed by polling a status endpoint
//! until the task reaches a terminal state.
//!
//! The library provides:
//! - Typed models for tasks, status payloads, and the backend's response
//!   envelopes ([`models`])
//! - A REST client for the submission and status endpoints ([`api`])
//! - A task poller that converts "submit job, get back an id" into a
//!   synchronous-looking wait with progress reporting, bounded retries, and
//!   cooperative cancellation ([`poller`])
//!
//! # Example
//!
//! ```rust,ignore
//! use querybridge::{ApiClient, ClientConfig, DatabaseConfigRequest};
//!
//! let client = ApiClient::new(ClientConfig::new("https://backend.example.com"))?;
//! let request = DatabaseConfigRequest::new("mssql://db.internal:1433", "sales", "user-17");
//! let status = client
//!     .set_config_and_wait(&request, |progress, state| {
//!         println!("{progress}% [{state}]");
//!     })
//!     .await?;
//! ```

pub mod api;
pub mod error;
pub mod models;
pub mod poller;

pub use api::{ApiClient, ClientConfig};
pub use error::{ClientError, PollError};
pub use models::{DatabaseConfigRequest, SchemaFile, SubmitResponse, TaskState, TaskStatus};
pub use poller::{PollConfig, TaskPoller, TaskStatusSource};
