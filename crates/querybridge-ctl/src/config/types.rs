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

use serde::{Deserialize, Serialize};
use std::time::Duration;

use querybridge::{ClientConfig, PollConfig};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CtlConfig {
    pub backend: BackendConfig,
    pub poll: PollSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    pub base_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_token: Option<String>,
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollSettings {
    pub max_attempts: u32,
    pub interval_ms: u64,
}

impl BackendConfig {
    /// Converts to the library's client settings.
    pub fn to_client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::new(&self.base_url)
            .with_request_timeout(Duration::from_secs(self.request_timeout_secs));
        if let Some(token) = &self.api_token {
            config = config.with_api_token(token);
        }
        config
    }
}

impl PollSettings {
    /// Converts to the library's poll configuration.
    pub fn to_poll_config(&self) -> PollConfig {
        PollConfig::builder()
            .max_attempts(self.max_attempts)
            .interval(Duration::from_millis(self.interval_ms))
            .build()
    }
}
