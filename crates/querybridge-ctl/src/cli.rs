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

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "querybridge-ctl",
    version,
    about = "Command-line interface for querybridge database configuration and task tracking",
    long_about = "A tool for submitting database configuration jobs to the querybridge backend and tracking their asynchronous tasks to completion"
)]
pub struct Cli {
    /// Path to the configuration file (default: search querybridge.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL (overrides the configuration file)
    #[arg(long, global = true)]
    pub backend_url: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Fields shared by the set-config and update-config submissions.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// MSSQL connection string for the target database
    #[arg(long)]
    pub db_url: String,

    /// Display name of the database
    #[arg(long)]
    pub db_name: String,

    /// Operator on whose behalf the configuration is created
    #[arg(long)]
    pub user_id: String,

    /// Business rule text applied to queries against this database
    #[arg(long)]
    pub business_rule: Option<String>,

    /// Schema file uploaded alongside the configuration
    #[arg(long)]
    pub schema_file: Option<PathBuf>,

    /// Print the task id and exit instead of waiting for completion
    #[arg(long)]
    pub no_wait: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch the current status of a task once
    Status {
        /// Opaque task identifier returned at submission time
        task_id: String,
    },
    /// Poll a task until it reaches a terminal state
    Wait {
        /// Opaque task identifier returned at submission time
        task_id: String,

        /// Attempt budget (overrides the configuration file)
        #[arg(long)]
        max_attempts: Option<u32>,

        /// Delay between polls in milliseconds (overrides the configuration file)
        #[arg(long)]
        interval_ms: Option<u64>,
    },
    /// Submit a new database configuration and wait for the task
    SetConfig {
        #[command(flatten)]
        args: ConfigArgs,
    },
    /// Submit an update to an existing database configuration
    UpdateConfig {
        /// Identifier of the configuration being updated
        config_id: String,

        #[command(flatten)]
        args: ConfigArgs,
    },
}
