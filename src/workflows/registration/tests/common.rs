use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::persistence::{Entity, MemoryStore, RecordStore, StoreError};
use crate::store::WorkingSet;
use crate::workflows::registration::domain::{Member, MemberDraft};
use crate::workflows::registration::service::RegistrationService;

pub(super) fn draft(name: &str, club: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        email: format!("{name}@example.com"),
        phone: "0900000000".to_string(),
        gender: "other".to_string(),
        address: "Hà Nội".to_string(),
        skills: "guitar".to_string(),
        club: club.to_string(),
        reason: "wants to join".to_string(),
    }
}

pub(super) fn build_service() -> (
    RegistrationService<RecordingStore>,
    Arc<RecordingStore>,
    Arc<WorkingSet<Member>>,
) {
    let store = Arc::new(RecordingStore::default());
    let working = Arc::new(WorkingSet::default());
    let service = RegistrationService::new(store.clone(), working.clone());
    (service, store, working)
}

/// Memory store that also records which ids received a DELETE call, so tests
/// can assert the approved-member deletion never reaches the collaborator.
#[derive(Default)]
pub(super) struct RecordingStore {
    inner: MemoryStore<Member>,
    deletes: Mutex<Vec<String>>,
}

impl RecordingStore {
    pub(super) fn deletes(&self) -> Vec<String> {
        self.deletes.lock().expect("delete log mutex poisoned").clone()
    }

    pub(super) fn records(&self) -> Vec<Member> {
        self.inner.records()
    }
}

impl RecordStore<Member> for RecordingStore {
    fn list(&self) -> Result<Vec<Member>, StoreError> {
        self.inner.list()
    }

    fn fetch(&self, id: &str) -> Result<Option<Member>, StoreError> {
        self.inner.fetch(id)
    }

    fn create(&self, record: Member) -> Result<Member, StoreError> {
        self.inner.create(record)
    }

    fn update(&self, record: &Member) -> Result<(), StoreError> {
        self.inner.update(record)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.deletes
            .lock()
            .expect("delete log mutex poisoned")
            .push(id.to_string());
        self.inner.delete(id)
    }
}

/// Collaborator that refuses everything, for failure-isolation tests.
pub(super) struct UnavailableStore;

impl RecordStore<Member> for UnavailableStore {
    fn list(&self) -> Result<Vec<Member>, StoreError> {
        Err(StoreError::Unavailable("mock api offline".to_string()))
    }

    fn fetch(&self, _id: &str) -> Result<Option<Member>, StoreError> {
        Err(StoreError::Unavailable("mock api offline".to_string()))
    }

    fn create(&self, _record: Member) -> Result<Member, StoreError> {
        Err(StoreError::Unavailable("mock api offline".to_string()))
    }

    fn update(&self, _record: &Member) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("mock api offline".to_string()))
    }

    fn delete(&self, _id: &str) -> Result<(), StoreError> {
        Err(StoreError::Unavailable("mock api offline".to_string()))
    }
}

/// Collaborator that fails updates for one specific id, for mid-batch
/// partial-application tests.
pub(super) struct FlakyStore {
    inner: MemoryStore<Member>,
    poison_id: Mutex<String>,
}

impl FlakyStore {
    pub(super) fn new() -> Self {
        Self {
            inner: MemoryStore::default(),
            poison_id: Mutex::new(String::new()),
        }
    }

    pub(super) fn poison(&self, id: &str) {
        *self.poison_id.lock().expect("poison id mutex poisoned") = id.to_string();
    }

    pub(super) fn records(&self) -> Vec<Member> {
        self.inner.records()
    }
}

impl RecordStore<Member> for FlakyStore {
    fn list(&self) -> Result<Vec<Member>, StoreError> {
        self.inner.list()
    }

    fn fetch(&self, id: &str) -> Result<Option<Member>, StoreError> {
        self.inner.fetch(id)
    }

    fn create(&self, record: Member) -> Result<Member, StoreError> {
        self.inner.create(record)
    }

    fn update(&self, record: &Member) -> Result<(), StoreError> {
        let poisoned = self.poison_id.lock().expect("poison id mutex poisoned");
        if record.id() == poisoned.as_str() {
            return Err(StoreError::Unavailable("write dropped".to_string()));
        }
        self.inner.update(record)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.inner.delete(id)
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
