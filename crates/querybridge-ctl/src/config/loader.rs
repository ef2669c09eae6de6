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

use regex::Regex;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{ConfigError, CtlConfig};

pub struct ConfigLoader {
    search_paths: Vec<PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default search paths.
    pub fn new() -> Self {
        let mut search_paths = Vec::new();

        // 1. Current directory
        search_paths.push(PathBuf::from("./querybridge.toml"));

        // 2. User config directory
        if let Some(config_dir) = dirs::config_dir() {
            search_paths.push(config_dir.join("querybridge").join("config.toml"));
        }

        // 3. System config directory
        search_paths.push(PathBuf::from("/etc/querybridge/config.toml"));

        Self { search_paths }
    }

    /// Create a config loader with custom search paths.
    pub fn with_search_paths(search_paths: Vec<PathBuf>) -> Self {
        Self { search_paths }
    }

    /// Load configuration from the specified file, the `QUERYBRIDGE_CONFIG`
    /// environment variable, or auto-discovery. When nothing is found and no
    /// explicit path was given, defaults are used.
    pub fn load_config(&self, config_file: Option<&Path>) -> Result<CtlConfig, ConfigError> {
        if let Some(path) = config_file {
            return self.load_config_from_file(path);
        }
        if let Ok(env_config) = env::var("QUERYBRIDGE_CONFIG") {
            return self.load_config_from_file(Path::new(&env_config));
        }
        match self.find_config_file() {
            Some(path) => self.load_config_from_file(&path),
            None => {
                debug!("no configuration file found, using defaults");
                Ok(CtlConfig::default())
            }
        }
    }

    /// Load configuration from a specific file.
    pub fn load_config_from_file(&self, path: &Path) -> Result<CtlConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        let substituted_content = self.substitute_env_vars(&content)?;
        let config = toml::from_str::<CtlConfig>(&substituted_content)?;

        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Find the first existing configuration file in search paths.
    pub fn find_config_file(&self) -> Option<PathBuf> {
        self.search_paths
            .iter()
            .find(|path| path.exists() && path.is_file())
            .cloned()
    }

    /// Substitute environment variables in configuration content.
    ///
    /// Supports `${VAR}`, `${VAR:-default}`, and `${VAR:?error message}`.
    fn substitute_env_vars(&self, content: &str) -> Result<String, ConfigError> {
        let re = Regex::new(r"\$\{([^}]+)\}").expect("static regex");
        let mut result = content.to_string();

        for cap in re.captures_iter(content) {
            let full_match = &cap[0];
            let var_expr = &cap[1];

            let replacement = self.process_var_expression(var_expr)?;
            result = result.replace(full_match, &replacement);
        }

        Ok(result)
    }

    fn process_var_expression(&self, expr: &str) -> Result<String, ConfigError> {
        if let Some((name, default)) = expr.split_once(":-") {
            return Ok(env::var(name).unwrap_or_else(|_| default.to_string()));
        }
        if let Some((name, message)) = expr.split_once(":?") {
            return env::var(name).map_err(|_| {
                ConfigError::EnvSubstitutionError(format!("{name} is not set: {message}"))
            });
        }
        env::var(expr)
            .map_err(|_| ConfigError::EnvSubstitutionError(format!("{expr} is not set")))
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
