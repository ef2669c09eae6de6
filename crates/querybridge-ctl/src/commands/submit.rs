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

//! Database configuration submission (create and update).

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use querybridge::{ApiClient, DatabaseConfigRequest};

use crate::cli::{Cli, ConfigArgs};
use crate::commands::{cancel_on_ctrl_c, progress_printer, report_outcome};

/// Submit a new database configuration.
pub async fn run_set(cli: &Cli, client: &ApiClient, args: &ConfigArgs) -> Result<()> {
    let request = build_request(args)?;

    if args.no_wait {
        let response = client
            .set_database_config(&request)
            .await
            .context("configuration submission failed")?;
        return print_submission(&response);
    }

    let status = client
        .poller()
        .with_cancellation(cancel_on_ctrl_c())
        .submit_and_wait(
            || client.set_database_config(&request),
            progress_printer(cli),
        )
        .await
        .context("configuration submission failed")?;

    report_outcome(cli, &status)
}

/// Submit an update to an existing database configuration.
pub async fn run_update(
    cli: &Cli,
    client: &ApiClient,
    config_id: &str,
    args: &ConfigArgs,
) -> Result<()> {
    let request = build_request(args)?;

    if args.no_wait {
        let response = client
            .update_database_config(config_id, &request)
            .await
            .context("configuration update failed")?;
        return print_submission(&response);
    }

    let status = client
        .poller()
        .with_cancellation(cancel_on_ctrl_c())
        .submit_and_wait(
            || client.update_database_config(config_id, &request),
            progress_printer(cli),
        )
        .await
        .context("configuration update failed")?;

    report_outcome(cli, &status)
}

fn build_request(args: &ConfigArgs) -> Result<DatabaseConfigRequest> {
    let mut request = DatabaseConfigRequest::new(&args.db_url, &args.db_name, &args.user_id);

    if let Some(rule) = &args.business_rule {
        request = request.with_business_rule(rule);
    }

    if let Some(path) = &args.schema_file {
        let contents = fs::read(path)
            .with_context(|| format!("failed to read schema file {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("schema")
            .to_string();
        info!(file = %file_name, bytes = contents.len(), "attaching schema file");
        request = request.with_schema_file(file_name, contents);
    }

    Ok(request)
}

fn print_submission(response: &querybridge::SubmitResponse) -> Result<()> {
    match response.task_id() {
        Some(task_id) => println!("submitted, task id: {task_id}"),
        // Backend may complete small jobs inline without going async.
        None => println!(
            "submitted, completed synchronously (status: {})",
            response.status.as_deref().unwrap_or("unknown")
        ),
    }
    Ok(())
}
