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
use clap::Parser;

use querybridge::ApiClient;
use querybridge_ctl::commands;
use querybridge_ctl::config::{ConfigLoader, Validate};
use querybridge_ctl::{init_logging, Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&cli);

    let mut config = ConfigLoader::new()
        .load_config(cli.config.as_deref())
        .context("failed to load configuration")?;
    if let Some(url) = &cli.backend_url {
        config.backend.base_url = url.clone();
    }
    config.validate().context("invalid configuration")?;

    let client = ApiClient::new(config.backend.to_client_config())
        .context("failed to build backend client")?
        .with_poll_config(config.poll.to_poll_config());

    match &cli.command {
        Commands::Status { task_id } => commands::status::run(&client, task_id).await,
        Commands::Wait {
            task_id,
            max_attempts,
            interval_ms,
        } => {
            commands::wait::run(
                &cli,
                &client,
                task_id,
                &config.poll,
                *max_attempts,
                *interval_ms,
            )
            .await
        }
        Commands::SetConfig { args } => commands::submit::run_set(&cli, &client, args).await,
        Commands::UpdateConfig { config_id, args } => {
            commands::submit::run_update(&cli, &client, config_id, args).await
        }
    }
}
