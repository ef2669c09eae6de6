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

//! Subcommand implementations.

pub mod status;
pub mod submit;
pub mod wait;

use anyhow::Result;
use colored::Colorize;
use tokio_util::sync::CancellationToken;

use querybridge::{TaskState, TaskStatus};

use crate::cli::Cli;
use crate::utils::{should_print, LogLevel};

/// Returns a token that fires on Ctrl-C, so an interactive wait can be
/// abandoned without leaving the polling loop running.
pub(crate) fn cancel_on_ctrl_c() -> CancellationToken {
    let token = CancellationToken::new();
    let handler = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            handler.cancel();
        }
    });
    token
}

/// Progress callback printing one line per poll.
pub(crate) fn progress_printer(cli: &Cli) -> impl FnMut(u8, &TaskState) + '_ {
    move |progress, state| {
        if should_print(cli, LogLevel::Info) {
            println!("  {:>3}% [{}]", progress, paint_state(state));
        }
    }
}

/// Translates a terminal status into process outcome: success prints the
/// result payload, a backend-reported failure becomes a non-zero exit.
pub(crate) fn report_outcome(cli: &Cli, status: &TaskStatus) -> Result<()> {
    match &status.status {
        TaskState::Success => {
            if should_print(cli, LogLevel::Info) {
                println!("{} task completed", "ok:".green().bold());
                if let Some(result) = &status.result {
                    println!("{}", serde_json::to_string_pretty(result)?);
                }
            }
            Ok(())
        }
        TaskState::Failed => {
            let detail = status.error.as_deref().unwrap_or("no detail provided");
            eprintln!("{} task failed: {}", "error:".red().bold(), detail);
            anyhow::bail!("task failed: {detail}")
        }
        state => anyhow::bail!("task ended in non-terminal state '{state}'"),
    }
}

pub(crate) fn paint_state(state: &TaskState) -> colored::ColoredString {
    match state {
        TaskState::Success => state.to_string().green(),
        TaskState::Failed => state.to_string().red(),
        _ => state.to_string().yellow(),
    }
}
