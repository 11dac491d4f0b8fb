use std::fmt;

use tradelink_hub_client::{HubClient, HubError};
use tradelink_model::{LeadId, LeadRecord};

use crate::sample::sample_leads;

// ---------------------------------------------------------------------------
// Outcomes and errors
// ---------------------------------------------------------------------------

/// Result of [`LeadStore::load`]. Loading never fails the caller — the
/// degraded case is a named state, not an error and not a silent branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The hub answered with at least one record.
    Loaded { count: usize },
    /// The working set was populated from the built-in sample dataset.
    Fallback { reason: FallbackReason },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    /// The hub answered but holds zero records.
    RemoteEmpty,
    /// The hub could not be reached or answered with an error.
    RemoteUnreachable(String),
}

impl fmt::Display for FallbackReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RemoteEmpty => write!(f, "the hub has no records yet"),
            Self::RemoteUnreachable(msg) => write!(f, "the hub is unreachable: {msg}"),
        }
    }
}

#[derive(Debug)]
pub enum StoreError {
    /// A hub call failed; the working set was left untouched.
    Hub { op: &'static str, source: HubError },
    /// The identity does not name a record in the working set.
    UnknownId(String),
    /// Refused to submit an empty batch.
    EmptyBatch,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hub { op, source } => write!(f, "{op} failed: {source}"),
            Self::UnknownId(id) => write!(f, "no record with id '{id}' in the working set"),
            Self::EmptyBatch => write!(f, "refusing to import an empty batch"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Hub { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Single owner of the in-memory working set.
///
/// Every mutation runs to completion before the next is accepted, and a
/// failed hub call leaves the set exactly as it was. Readers get borrowed
/// views ([`records`](Self::records)) and never mutate directly.
pub struct LeadStore {
    client: HubClient,
    working_set: Vec<LeadRecord>,
    fallback_active: bool,
}

impl LeadStore {
    pub fn new(client: HubClient) -> Self {
        LeadStore {
            client,
            working_set: Vec::new(),
            fallback_active: false,
        }
    }

    /// The current working set, in insertion order.
    pub fn records(&self) -> &[LeadRecord] {
        &self.working_set
    }

    /// True when the working set is the built-in sample dataset.
    pub fn is_fallback(&self) -> bool {
        self.fallback_active
    }

    /// Fetch the authoritative set from the hub, or degrade to the sample
    /// dataset when the hub is unreachable or empty.
    pub fn load(&mut self) -> LoadOutcome {
        match self.client.fetch_all() {
            Ok(records) if records.is_empty() => {
                self.enter_fallback();
                LoadOutcome::Fallback {
                    reason: FallbackReason::RemoteEmpty,
                }
            }
            Ok(records) => {
                self.working_set = records;
                self.fallback_active = false;
                LoadOutcome::Loaded {
                    count: self.working_set.len(),
                }
            }
            Err(e) => {
                self.enter_fallback();
                LoadOutcome::Fallback {
                    reason: FallbackReason::RemoteUnreachable(e.to_string()),
                }
            }
        }
    }

    /// Submit a normalized batch in one call. On success the hub's
    /// returned batch *replaces* the entire working set (the hub owns
    /// identity assignment). On failure nothing changes locally — there
    /// is no partial merge. Returns the new working-set size.
    pub fn import_batch(
        &mut self,
        records: Vec<LeadRecord>,
        replace_existing: bool,
    ) -> Result<usize, StoreError> {
        if records.is_empty() {
            return Err(StoreError::EmptyBatch);
        }
        let returned = self
            .client
            .import(&records, replace_existing)
            .map_err(|source| StoreError::Hub {
                op: "import",
                source,
            })?;
        self.working_set = returned;
        self.fallback_active = false;
        Ok(self.working_set.len())
    }

    /// Persist one new record; on success the server-assigned copy is
    /// prepended to the working set and returned.
    pub fn add_one(&mut self, record: LeadRecord) -> Result<&LeadRecord, StoreError> {
        let created = self
            .client
            .create(&record)
            .map_err(|source| StoreError::Hub {
                op: "add",
                source,
            })?;
        // Real data displaces the sample set rather than mixing with it.
        if self.fallback_active {
            self.working_set.clear();
            self.fallback_active = false;
        }
        self.working_set.insert(0, created);
        Ok(&self.working_set[0])
    }

    /// Replace a record. Remote identities round-trip through the hub and
    /// adopt the server's response; local-only identities are edited in
    /// place with no network call.
    pub fn update_one(&mut self, id: &LeadId, record: LeadRecord) -> Result<(), StoreError> {
        let pos = self
            .position_of(id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;

        match id {
            LeadId::Remote(remote_id) => {
                let updated = self
                    .client
                    .update(remote_id, &record)
                    .map_err(|source| StoreError::Hub {
                        op: "update",
                        source,
                    })?;
                self.working_set[pos] = updated;
            }
            LeadId::Local(_) => {
                let mut record = record;
                record.id = id.clone();
                self.working_set[pos] = record;
            }
        }
        Ok(())
    }

    /// Remove a record. Remote identities are deleted on the hub first;
    /// local-only identities are a pure local removal.
    pub fn delete_one(&mut self, id: &LeadId) -> Result<(), StoreError> {
        let pos = self
            .position_of(id)
            .ok_or_else(|| StoreError::UnknownId(id.to_string()))?;

        if let LeadId::Remote(remote_id) = id {
            self.client
                .delete(remote_id)
                .map_err(|source| StoreError::Hub {
                    op: "delete",
                    source,
                })?;
        }
        self.working_set.remove(pos);
        Ok(())
    }

    // ── Internal helpers ────────────────────────────────────────────

    fn enter_fallback(&mut self) {
        self.working_set = sample_leads();
        self.fallback_active = true;
    }

    fn position_of(&self, id: &LeadId) -> Option<usize> {
        self.working_set.iter().position(|r| &r.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn lead(product: &str) -> LeadRecord {
        let mut record = LeadRecord::new();
        record.product = product.into();
        record
    }

    fn wire_json(id: &str, product: &str) -> serde_json::Value {
        serde_json::json!({ "id": id, "Product": product })
    }

    fn store_for(server: &MockServer) -> LeadStore {
        LeadStore::new(HubClient::new(server.base_url()))
    }

    #[test]
    fn load_replaces_the_working_set() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200).json_body(serde_json::json!({
                "records": [wire_json("1", "Coffee")]
            }));
        });

        let mut store = store_for(&server);
        assert_eq!(store.load(), LoadOutcome::Loaded { count: 1 });
        assert_eq!(store.records()[0].product, "Coffee");
        assert!(!store.is_fallback());
    }

    #[test]
    fn empty_hub_degrades_to_sample_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200)
                .json_body(serde_json::json!({ "records": [] }));
        });

        let mut store = store_for(&server);
        let outcome = store.load();
        assert_eq!(
            outcome,
            LoadOutcome::Fallback {
                reason: FallbackReason::RemoteEmpty
            }
        );
        assert_eq!(store.records(), sample_leads().as_slice());
        assert!(store.is_fallback());
    }

    #[test]
    fn unreachable_hub_degrades_to_sample_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(500).body("boom");
        });

        let mut store = store_for(&server);
        match store.load() {
            LoadOutcome::Fallback {
                reason: FallbackReason::RemoteUnreachable(msg),
            } => assert!(msg.contains("500")),
            other => panic!("unexpected outcome: {other:?}"),
        }
        assert!(store.is_fallback());
    }

    #[test]
    fn failed_import_leaves_working_set_untouched() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200).json_body(serde_json::json!({
                "records": [wire_json("1", "Coffee")]
            }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/lead-records/import");
            then.status(500).body("import exploded");
        });

        let mut store = store_for(&server);
        store.load();
        let before = store.records().to_vec();

        let err = store.import_batch(vec![lead("Sesame")], true).unwrap_err();
        assert!(matches!(err, StoreError::Hub { op: "import", .. }));
        assert_eq!(store.records(), before.as_slice());
    }

    #[test]
    fn empty_batch_is_refused_before_any_network_call() {
        let server = MockServer::start();
        let import_mock = server.mock(|when, then| {
            when.method(POST).path("/lead-records/import");
            then.status(200)
                .json_body(serde_json::json!({ "records": [] }));
        });

        let mut store = store_for(&server);
        assert!(matches!(
            store.import_batch(Vec::new(), true),
            Err(StoreError::EmptyBatch)
        ));
        import_mock.assert_hits(0);
    }

    #[test]
    fn local_edit_issues_no_network_call() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200)
                .json_body(serde_json::json!({ "records": [] }));
        });
        let update_mock = server.mock(|when, then| {
            when.method(PUT).path_includes("/lead-records/");
            then.status(200);
        });

        let mut store = store_for(&server);
        store.load(); // falls back to sample data (local ids)

        let id = store.records()[0].id.clone();
        let mut edited = store.records()[0].clone();
        edited.product = "Edited locally".into();

        store.update_one(&id, edited).unwrap();
        assert_eq!(store.records()[0].product, "Edited locally");
        assert_eq!(store.records()[0].id, id);
        update_mock.assert_hits(0);
    }

    #[test]
    fn remote_edit_adopts_the_server_response() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200).json_body(serde_json::json!({
                "records": [wire_json("9", "Coffee")]
            }));
        });
        let update_mock = server.mock(|when, then| {
            when.method(PUT).path("/lead-records/9");
            then.status(200).json_body(serde_json::json!({
                "record": wire_json("9", "Coffee (server copy)")
            }));
        });

        let mut store = store_for(&server);
        store.load();

        let id = LeadId::Remote("9".into());
        store.update_one(&id, lead("Coffee (client copy)")).unwrap();
        update_mock.assert();
        assert_eq!(store.records()[0].product, "Coffee (server copy)");
    }

    #[test]
    fn unknown_identity_is_reported() {
        let server = MockServer::start();
        let mut store = store_for(&server);
        let err = store
            .update_one(&LeadId::Remote("ghost".into()), lead("x"))
            .unwrap_err();
        assert!(matches!(err, StoreError::UnknownId(_)));
    }

    #[test]
    fn add_displaces_sample_data() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200)
                .json_body(serde_json::json!({ "records": [] }));
        });
        server.mock(|when, then| {
            when.method(POST).path("/lead-records");
            then.status(200).json_body(serde_json::json!({
                "record": wire_json("100", "First real lead")
            }));
        });

        let mut store = store_for(&server);
        store.load();
        assert!(store.is_fallback());

        store.add_one(lead("First real lead")).unwrap();
        assert!(!store.is_fallback());
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].id, LeadId::Remote("100".into()));
    }

    #[test]
    fn remote_delete_removes_locally_after_hub_confirms() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200).json_body(serde_json::json!({
                "records": [wire_json("5", "Coffee"), wire_json("6", "Sesame")]
            }));
        });
        let delete_mock = server.mock(|when, then| {
            when.method(DELETE).path("/lead-records/5");
            then.status(204);
        });

        let mut store = store_for(&server);
        store.load();
        store.delete_one(&LeadId::Remote("5".into())).unwrap();
        delete_mock.assert();
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].product, "Sesame");
    }

    #[test]
    fn failed_remote_delete_keeps_the_record() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/lead-records");
            then.status(200).json_body(serde_json::json!({
                "records": [wire_json("5", "Coffee")]
            }));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/lead-records/5");
            then.status(500).body("nope");
        });

        let mut store = store_for(&server);
        store.load();
        let err = store.delete_one(&LeadId::Remote("5".into())).unwrap_err();
        assert!(matches!(err, StoreError::Hub { op: "delete", .. }));
        assert_eq!(store.records().len(), 1);
    }
}
