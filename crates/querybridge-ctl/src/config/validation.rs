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

use crate::config::{types::*, ValidationError};

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

impl Validate for CtlConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if let Err(e) = self.backend.validate() {
            errors.push(e);
        }
        if let Err(e) = self.poll.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else if errors.len() == 1 {
            Err(errors.into_iter().next().unwrap())
        } else {
            Err(ValidationError::Multiple { errors })
        }
    }
}

impl Validate for BackendConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl {
                url: self.base_url.clone(),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout {
                value: self.request_timeout_secs,
            });
        }
        Ok(())
    }
}

impl Validate for PollSettings {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.max_attempts == 0 {
            return Err(ValidationError::InvalidMaxAttempts {
                value: self.max_attempts,
            });
        }
        if self.interval_ms == 0 {
            return Err(ValidationError::InvalidInterval {
                value: self.interval_ms,
            });
        }
        Ok(())
    }
}
