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

use std::time::Duration;

use anyhow::{Context, Result};

use querybridge::{ApiClient, PollConfig, TaskPoller};

use crate::cli::Cli;
use crate::commands::{cancel_on_ctrl_c, progress_printer, report_outcome};
use crate::config::PollSettings;

/// Poll an already-submitted task until it reaches a terminal state.
pub async fn run(
    cli: &Cli,
    client: &ApiClient,
    task_id: &str,
    settings: &PollSettings,
    max_attempts: Option<u32>,
    interval_ms: Option<u64>,
) -> Result<()> {
    let config = override_config(settings, max_attempts, interval_ms);
    let poller = TaskPoller::with_config(client, config).with_cancellation(cancel_on_ctrl_c());

    let status = poller
        .poll(task_id, progress_printer(cli))
        .await
        .with_context(|| format!("waiting on task '{task_id}'"))?;

    report_outcome(cli, &status)
}

/// CLI flags win over the configuration file.
fn override_config(
    settings: &PollSettings,
    max_attempts: Option<u32>,
    interval_ms: Option<u64>,
) -> PollConfig {
    PollConfig::builder()
        .max_attempts(max_attempts.unwrap_or(settings.max_attempts))
        .interval(Duration::from_millis(
            interval_ms.unwrap_or(settings.interval_ms),
        ))
        .build()
}
