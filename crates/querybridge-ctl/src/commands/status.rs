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

use anyhow::{Context, Result};

use querybridge::{ApiClient, TaskStatusSource};

use crate::commands::paint_state;

/// Fetch and print a task's status once, without waiting.
pub async fn run(client: &ApiClient, task_id: &str) -> Result<()> {
    let status = client
        .task_status(task_id)
        .await
        .with_context(|| format!("failed to fetch status of task '{task_id}'"))?;

    println!(
        "task {}: {:>3}% [{}]",
        task_id,
        status.progress,
        paint_state(&status.status)
    );
    if let Some(error) = &status.error {
        println!("  error: {error}");
    }
    if let Some(result) = &status.result {
        println!("{}", serde_json::to_string_pretty(result)?);
    }

    Ok(())
}
