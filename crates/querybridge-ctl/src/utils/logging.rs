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

use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

#[derive(Debug)]
pub enum LogLevel {
    #[allow(dead_code)]
    Error,
    Info,
    Debug,
}

/// Initialise the tracing subscriber. `RUST_LOG` wins over the CLI flags.
pub fn init_logging(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // try_init: tests may initialise more than once
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}

/// Whether user-facing output at `level` should be printed given the
/// verbose/quiet flags.
pub fn should_print(cli: &Cli, level: LogLevel) -> bool {
    match level {
        LogLevel::Error => true, // Always print errors
        LogLevel::Info => !cli.quiet,
        LogLevel::Debug => cli.verbose && !cli.quiet,
    }
}
