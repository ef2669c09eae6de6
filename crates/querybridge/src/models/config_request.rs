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

//! Database configuration submission payloads.

use serde::{Deserialize, Serialize};

/// Body of a database configuration submission.
///
/// Serialized as JSON when no schema file rides along, and as a multipart
/// form otherwise (the backend processes the uploaded file server-side,
/// which is what makes these jobs long-running).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfigRequest {
    /// MSSQL connection string for the target database.
    pub db_url: String,
    /// Display name of the database within the console.
    pub db_name: String,
    /// Optional business rule text applied to queries against this database.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_rule: Option<String>,
    /// Operator on whose behalf the configuration is created.
    pub user_id: String,
    /// Optional schema file uploaded alongside the configuration.
    #[serde(skip)]
    pub schema_file: Option<SchemaFile>,
}

/// An in-memory file attached to a configuration submission.
#[derive(Debug, Clone)]
pub struct SchemaFile {
    pub file_name: String,
    pub contents: Vec<u8>,
}

impl DatabaseConfigRequest {
    pub fn new(
        db_url: impl Into<String>,
        db_name: impl Into<String>,
        user_id: impl Into<String>,
    ) -> Self {
        Self {
            db_url: db_url.into(),
            db_name: db_name.into(),
            business_rule: None,
            user_id: user_id.into(),
            schema_file: None,
        }
    }

    pub fn with_business_rule(mut self, rule: impl Into<String>) -> Self {
        self.business_rule = Some(rule.into());
        self
    }

    pub fn with_schema_file(mut self, file_name: impl Into<String>, contents: Vec<u8>) -> Self {
        self.schema_file = Some(SchemaFile {
            file_name: file_name.into(),
            contents,
        });
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_body_omits_absent_rule_and_file() {
        let request = DatabaseConfigRequest::new("mssql://host:1433", "sales", "user-17");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["db_url"], "mssql://host:1433");
        assert_eq!(value["db_name"], "sales");
        assert_eq!(value["user_id"], "user-17");
        assert!(value.get("business_rule").is_none());
        assert!(value.get("schema_file").is_none());
    }

    #[test]
    fn builder_attaches_rule_and_file() {
        let request = DatabaseConfigRequest::new("mssql://host:1433", "sales", "user-17")
            .with_business_rule("exclude test accounts")
            .with_schema_file("schema.xlsx", vec![1, 2, 3]);
        assert_eq!(
            request.business_rule.as_deref(),
            Some("exclude test accounts")
        );
        let file = request.schema_file.unwrap();
        assert_eq!(file.file_name, "schema.xlsx");
        assert_eq!(file.contents, vec![1, 2, 3]);
    }
}
