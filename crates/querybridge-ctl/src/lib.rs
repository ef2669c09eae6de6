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

//! Operator CLI for the querybridge backend: submit database configuration
//! jobs, query task status, and wait on running tasks with a progress
//! readout.

pub mod cli;
pub mod commands;
pub mod config;
pub mod utils;

pub use cli::{Cli, Commands};
pub use utils::{init_logging, should_print, LogLevel};
