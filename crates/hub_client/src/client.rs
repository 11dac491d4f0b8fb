//! Lead hub HTTP client.
//!
//! Blocking reqwest client (no Tokio runtime required). The hub is the
//! authoritative store; this client only moves records — retry policy and
//! fallback behavior live with the reconciliation store.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use tradelink_model::LeadRecord;

use crate::wire::WireRecord;

/// Lead hub API client (blocking).
#[derive(Clone)]
pub struct HubClient {
    http: reqwest::blocking::Client,
    api_base: String,
}

/// Error type for hub operations.
#[derive(Debug)]
pub enum HubError {
    /// Network error
    Network(String),
    /// HTTP error with status code
    Http(u16, String),
    /// JSON parsing error
    Parse(String),
    /// Server returned a validation error (4xx with message)
    Validation(String),
}

impl std::fmt::Display for HubError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HubError::Network(msg) => write!(f, "Network error: {}", msg),
            HubError::Http(code, msg) => write!(f, "HTTP {}: {}", code, msg),
            HubError::Parse(msg) => write!(f, "Parse error: {}", msg),
            HubError::Validation(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HubError {}

// ── Request/response bodies ─────────────────────────────────────────

#[derive(Serialize)]
struct ImportRequest {
    rows: Vec<WireRecord>,
    #[serde(rename = "replaceExisting")]
    replace_existing: bool,
}

#[derive(Serialize)]
struct RowRequest {
    row: WireRecord,
}

#[derive(Deserialize)]
struct RecordsResponse {
    records: Vec<WireRecord>,
}

#[derive(Deserialize)]
struct RecordResponse {
    record: WireRecord,
}

impl HubClient {
    /// Create a client against the given API base URL.
    pub fn new(api_base: impl Into<String>) -> Self {
        let http = reqwest::blocking::Client::builder()
            .user_agent(format!("tlink/{}", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        let mut api_base = api_base.into();
        while api_base.ends_with('/') {
            api_base.pop();
        }

        Self { http, api_base }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Fetch every record the hub holds.
    pub fn fetch_all(&self) -> Result<Vec<LeadRecord>, HubError> {
        let url = format!("{}/lead-records", self.api_base);
        let resp = self.send(self.http.get(&url))?;
        let body: RecordsResponse = resp.json().map_err(|e| HubError::Parse(e.to_string()))?;
        body.records
            .into_iter()
            .map(|w| w.into_remote_lead().map_err(HubError::Parse))
            .collect()
    }

    /// Submit a normalized batch in one call. The hub assigns identity;
    /// its returned batch is the new canonical working set.
    pub fn import(
        &self,
        rows: &[LeadRecord],
        replace_existing: bool,
    ) -> Result<Vec<LeadRecord>, HubError> {
        let url = format!("{}/lead-records/import", self.api_base);
        let body = ImportRequest {
            rows: rows.iter().map(WireRecord::from_lead).collect(),
            replace_existing,
        };
        let resp = self.send(self.http.post(&url).json(&body))?;
        let body: RecordsResponse = resp.json().map_err(|e| HubError::Parse(e.to_string()))?;
        body.records
            .into_iter()
            .map(|w| w.into_remote_lead().map_err(HubError::Parse))
            .collect()
    }

    /// Create a single record; returns the server-assigned copy.
    pub fn create(&self, row: &LeadRecord) -> Result<LeadRecord, HubError> {
        let url = format!("{}/lead-records", self.api_base);
        let body = RowRequest {
            row: WireRecord::from_lead(row),
        };
        let resp = self.send(self.http.post(&url).json(&body))?;
        let body: RecordResponse = resp.json().map_err(|e| HubError::Parse(e.to_string()))?;
        body.record.into_remote_lead().map_err(HubError::Parse)
    }

    /// Update a persisted record; returns the server's copy.
    pub fn update(&self, id: &str, row: &LeadRecord) -> Result<LeadRecord, HubError> {
        let url = format!("{}/lead-records/{}", self.api_base, id);
        let body = RowRequest {
            row: WireRecord::from_lead(row),
        };
        let resp = self.send(self.http.put(&url).json(&body))?;
        let body: RecordResponse = resp.json().map_err(|e| HubError::Parse(e.to_string()))?;
        body.record.into_remote_lead().map_err(HubError::Parse)
    }

    /// Delete a persisted record.
    pub fn delete(&self, id: &str) -> Result<(), HubError> {
        let url = format!("{}/lead-records/{}", self.api_base, id);
        self.send(self.http.delete(&url))?;
        Ok(())
    }

    // ── Internal helpers ────────────────────────────────────────────

    fn send(
        &self,
        req: reqwest::blocking::RequestBuilder,
    ) -> Result<reqwest::blocking::Response, HubError> {
        let response = req.send().map_err(|e| HubError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().unwrap_or_default();
            if status == 422 || status == 400 {
                return Err(HubError::Validation(body));
            }
            return Err(HubError::Http(status, body));
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use tradelink_model::LeadId;

    fn lead(product: &str) -> LeadRecord {
        let mut record = LeadRecord::new();
        record.product = product.into();
        record
    }

    fn wire_json(id: &str, product: &str) -> serde_json::Value {
        serde_json::json!({ "id": id, "Product": product })
    }

    #[test]
    fn fetch_all_tags_records_remote() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "records": [wire_json("1", "Coffee"), wire_json("2", "Sesame")]
                }));
        });

        let client = HubClient::new(server.base_url());
        let records = client.fetch_all().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, LeadId::Remote("1".into()));
        assert_eq!(records[1].product, "Sesame");
    }

    #[test]
    fn fetch_all_empty_is_ok_not_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200)
                .json_body(serde_json::json!({ "records": [] }));
        });

        let client = HubClient::new(server.base_url());
        assert!(client.fetch_all().unwrap().is_empty());
    }

    #[test]
    fn import_sends_replace_flag_and_rows() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/lead-records/import")
                .json_body_includes(r#"{ "replaceExisting": true }"#);
            then.status(200).json_body(serde_json::json!({
                "records": [wire_json("10", "Coffee")]
            }));
        });

        let client = HubClient::new(server.base_url());
        let returned = client.import(&[lead("Coffee")], true).unwrap();

        mock.assert();
        assert_eq!(returned.len(), 1);
        assert_eq!(returned[0].id, LeadId::Remote("10".into()));
    }

    #[test]
    fn create_adopts_server_identity() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/lead-records");
            then.status(200).json_body(serde_json::json!({
                "record": wire_json("55", "Chickpeas")
            }));
        });

        let client = HubClient::new(server.base_url());
        let created = client.create(&lead("Chickpeas")).unwrap();
        assert_eq!(created.id, LeadId::Remote("55".into()));
    }

    #[test]
    fn update_hits_the_record_path() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT).path("/lead-records/55");
            then.status(200).json_body(serde_json::json!({
                "record": wire_json("55", "Chickpeas (updated)")
            }));
        });

        let client = HubClient::new(server.base_url());
        let updated = client.update("55", &lead("Chickpeas (updated)")).unwrap();
        mock.assert();
        assert_eq!(updated.product, "Chickpeas (updated)");
    }

    #[test]
    fn delete_is_status_only() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(DELETE).path("/lead-records/7");
            then.status(204);
        });

        let client = HubClient::new(server.base_url());
        client.delete("7").unwrap();
        mock.assert();
    }

    #[test]
    fn validation_errors_carry_the_server_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/lead-records/import");
            then.status(422).body("rows exceed the per-import limit");
        });

        let client = HubClient::new(server.base_url());
        let err = client.import(&[lead("Coffee")], true).unwrap_err();
        match err {
            HubError::Validation(msg) => assert!(msg.contains("per-import limit")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn server_errors_surface_the_status() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(503).body("maintenance");
        });

        let client = HubClient::new(server.base_url());
        match client.fetch_all().unwrap_err() {
            HubError::Http(503, msg) => assert_eq!(msg, "maintenance"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let client = HubClient::new("https://hub.example.com///");
        assert_eq!(client.api_base(), "https://hub.example.com");
    }
}
