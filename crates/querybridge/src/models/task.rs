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

//! Task status and submission envelope models.
//!
//! A task is an asynchronous backend job identified by an opaque string. The
//! client never mutates a task; it only reads its status until the task
//! reaches a terminal state. Deletion and expiry are backend concerns.
//!
//! The backend's response envelopes have been observed in two shapes: a
//! payload wrapped in `{ "data": { ... } }`, and the payload at the top
//! level. Both the submission and status models unwrap these defensively
//! with an ordered candidate scan, first match wins.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status vocabulary reported by the backend for an asynchronous task.
///
/// The vocabulary is backend-defined. Exactly `success` and `failed` are
/// terminal; every other value, including ones this client has never seen,
/// is treated as "still running" and keeps the poller going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Pending,
    Running,
    Success,
    Failed,
    /// Any status string outside the known vocabulary. Non-terminal.
    #[serde(untagged)]
    Other(String),
}

impl TaskState {
    /// Whether this state stops polling.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TaskState::Success | TaskState::Failed)
    }
}

impl fmt::Display for TaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskState::Pending => write!(f, "pending"),
            TaskState::Running => write!(f, "running"),
            TaskState::Success => write!(f, "success"),
            TaskState::Failed => write!(f, "failed"),
            TaskState::Other(s) => write!(f, "{}", s),
        }
    }
}

/// One observation of a task from the status endpoint.
///
/// `progress` is backend-trusted: the client does not clamp it, and does not
/// require it to be monotonic across polls. `result` is only populated on
/// terminal success; `error` carries the backend's failure detail when the
/// task ends in `failed`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskStatus {
    #[serde(default)]
    pub progress: u8,
    pub status: TaskState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Wire shape of the status endpoint: either `{ "data": { ... } }` or the
/// status payload at the top level.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum StatusEnvelope {
    Wrapped { data: TaskStatus },
    Flat(TaskStatus),
}

impl StatusEnvelope {
    pub(crate) fn into_inner(self) -> TaskStatus {
        match self {
            StatusEnvelope::Wrapped { data } => data,
            StatusEnvelope::Flat(status) => status,
        }
    }
}

/// Response envelope from a job submission call.
///
/// The task id has been observed both nested (`data.task_id`) and at the top
/// level (`task_id`); [`SubmitResponse::task_id`] scans the candidates in
/// that order. The backend may also answer with a synchronous `status` field
/// when it chose not to go async, but a response without a task id never
/// starts a poll.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmitResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<SubmitData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
    /// Synchronous outcome, when the backend completed the job inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SubmitData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    task_id: Option<String>,
}

impl SubmitResponse {
    /// Extracts the task id: `data.task_id` first, then top-level `task_id`.
    pub fn task_id(&self) -> Option<&str> {
        self.data
            .as_ref()
            .and_then(|d| d.task_id.as_deref())
            .or(self.task_id.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn terminal_states() {
        assert!(TaskState::Success.is_terminal());
        assert!(TaskState::Failed.is_terminal());
        assert!(!TaskState::Pending.is_terminal());
        assert!(!TaskState::Running.is_terminal());
        assert!(!TaskState::Other("queued".to_string()).is_terminal());
    }

    #[test]
    fn unknown_status_string_is_preserved_and_non_terminal() {
        let status: TaskStatus =
            serde_json::from_value(json!({"progress": 5, "status": "validating"})).unwrap();
        assert_eq!(status.status, TaskState::Other("validating".to_string()));
        assert!(!status.status.is_terminal());
    }

    #[test]
    fn status_deserializes_known_vocabulary() {
        for (raw, expected) in [
            ("pending", TaskState::Pending),
            ("running", TaskState::Running),
            ("success", TaskState::Success),
            ("failed", TaskState::Failed),
        ] {
            let status: TaskStatus =
                serde_json::from_value(json!({"progress": 0, "status": raw})).unwrap();
            assert_eq!(status.status, expected);
        }
    }

    #[test]
    fn status_envelope_unwraps_both_shapes() {
        let wrapped: StatusEnvelope = serde_json::from_value(json!({
            "data": {"progress": 40, "status": "running"}
        }))
        .unwrap();
        assert_eq!(wrapped.into_inner().progress, 40);

        let flat: StatusEnvelope =
            serde_json::from_value(json!({"progress": 100, "status": "success"})).unwrap();
        let status = flat.into_inner();
        assert_eq!(status.progress, 100);
        assert!(status.status.is_terminal());
    }

    #[test]
    fn task_id_prefers_nested_candidate() {
        let response: SubmitResponse = serde_json::from_value(json!({
            "data": {"task_id": "nested"},
            "task_id": "flat"
        }))
        .unwrap();
        assert_eq!(response.task_id(), Some("nested"));
    }

    #[test]
    fn task_id_falls_back_to_top_level() {
        let response: SubmitResponse =
            serde_json::from_value(json!({"task_id": "flat"})).unwrap();
        assert_eq!(response.task_id(), Some("flat"));
    }

    #[test]
    fn task_id_absent() {
        let response: SubmitResponse =
            serde_json::from_value(json!({"status": "success"})).unwrap();
        assert_eq!(response.task_id(), None);
        assert_eq!(response.status.as_deref(), Some("success"));

        // An empty data object does not shadow a missing id
        let response: SubmitResponse =
            serde_json::from_value(json!({"data": {}, "task_id": "flat"})).unwrap();
        assert_eq!(response.task_id(), Some("flat"));
    }

    #[test]
    fn result_only_carried_through_when_present() {
        let status: TaskStatus = serde_json::from_value(json!({
            "progress": 100,
            "status": "success",
            "result": {"db_id": 42}
        }))
        .unwrap();
        assert_eq!(status.result, Some(json!({"db_id": 42})));

        let status: TaskStatus =
            serde_json::from_value(json!({"progress": 10, "status": "running"})).unwrap();
        assert_eq!(status.result, None);
    }
}
