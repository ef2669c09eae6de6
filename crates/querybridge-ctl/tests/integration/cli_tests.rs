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

use clap::Parser;
use querybridge_ctl::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_status_command_parsing() {
    let args = vec!["querybridge-ctl", "status", "abc123"];

    let cli = Cli::try_parse_from(args).expect("Should parse status command");

    match cli.command {
        Commands::Status { task_id } => assert_eq!(task_id, "abc123"),
        _ => panic!("Expected Status command"),
    }
}

#[test]
fn test_wait_command_parsing_with_overrides() {
    let args = vec![
        "querybridge-ctl",
        "wait",
        "abc123",
        "--max-attempts",
        "10",
        "--interval-ms",
        "500",
    ];

    let cli = Cli::try_parse_from(args).expect("Should parse wait command");

    match cli.command {
        Commands::Wait {
            task_id,
            max_attempts,
            interval_ms,
        } => {
            assert_eq!(task_id, "abc123");
            assert_eq!(max_attempts, Some(10));
            assert_eq!(interval_ms, Some(500));
        }
        _ => panic!("Expected Wait command"),
    }
}

#[test]
fn test_wait_command_defaults_to_config_values() {
    let args = vec!["querybridge-ctl", "wait", "abc123"];

    let cli = Cli::try_parse_from(args).expect("Should parse wait command");

    match cli.command {
        Commands::Wait {
            max_attempts,
            interval_ms,
            ..
        } => {
            assert_eq!(max_attempts, None);
            assert_eq!(interval_ms, None);
        }
        _ => panic!("Expected Wait command"),
    }
}

#[test]
fn test_set_config_command_parsing() {
    let args = vec![
        "querybridge-ctl",
        "set-config",
        "--db-url",
        "mssql://db.internal:1433",
        "--db-name",
        "sales",
        "--user-id",
        "user-17",
        "--business-rule",
        "exclude test accounts",
        "--schema-file",
        "/tmp/schema.xlsx",
    ];

    let cli = Cli::try_parse_from(args).expect("Should parse set-config command");

    match cli.command {
        Commands::SetConfig { args } => {
            assert_eq!(args.db_url, "mssql://db.internal:1433");
            assert_eq!(args.db_name, "sales");
            assert_eq!(args.user_id, "user-17");
            assert_eq!(args.business_rule.as_deref(), Some("exclude test accounts"));
            assert_eq!(args.schema_file, Some(PathBuf::from("/tmp/schema.xlsx")));
            assert!(!args.no_wait);
        }
        _ => panic!("Expected SetConfig command"),
    }
}

#[test]
fn test_update_config_command_parsing() {
    let args = vec![
        "querybridge-ctl",
        "update-config",
        "cfg-42",
        "--db-url",
        "mssql://db.internal:1433",
        "--db-name",
        "sales",
        "--user-id",
        "user-17",
        "--no-wait",
    ];

    let cli = Cli::try_parse_from(args).expect("Should parse update-config command");

    match cli.command {
        Commands::UpdateConfig { config_id, args } => {
            assert_eq!(config_id, "cfg-42");
            assert!(args.no_wait);
            assert_eq!(args.business_rule, None);
        }
        _ => panic!("Expected UpdateConfig command"),
    }
}

#[test]
fn test_global_flags() {
    let args = vec![
        "querybridge-ctl",
        "--verbose",
        "--backend-url",
        "https://backend.example.com",
        "status",
        "abc123",
    ];

    let cli = Cli::try_parse_from(args).expect("Should parse global flags");

    assert!(cli.verbose);
    assert!(!cli.quiet);
    assert_eq!(
        cli.backend_url.as_deref(),
        Some("https://backend.example.com")
    );
}

#[test]
fn test_missing_required_config_field_is_rejected() {
    let args = vec![
        "querybridge-ctl",
        "set-config",
        "--db-url",
        "mssql://db.internal:1433",
    ];

    assert!(Cli::try_parse_from(args).is_err());
}
