use std::sync::Arc;

use super::domain::{Club, ClubDraft};
use crate::persistence::RecordStore;
use crate::store::WorkingSet;
use crate::workflows::{ensure_unique_name, WorkflowError};

/// Club CRUD with unique-name validation.
///
/// Deletion is unconditional: members still referencing the club are orphaned
/// and rendered through a name-lookup fallback. That lenience is the current
/// product behavior and must not be tightened without sign-off.
pub struct ClubService<S> {
    store: Arc<S>,
    working: Arc<WorkingSet<Club>>,
}

impl<S> ClubService<S>
where
    S: RecordStore<Club> + 'static,
{
    pub fn new(store: Arc<S>, working: Arc<WorkingSet<Club>>) -> Self {
        Self { store, working }
    }

    pub fn refresh(&self) -> Result<usize, WorkflowError> {
        let records = self.store.list()?;
        let count = records.len();
        self.working.replace_all(records);
        Ok(count)
    }

    pub fn clubs(&self) -> Vec<Club> {
        self.working.snapshot()
    }

    pub fn create(&self, draft: ClubDraft) -> Result<Club, WorkflowError> {
        self.ensure_name_free(&draft.name, None)?;
        let created = self.store.create(draft.into_club())?;
        self.working.upsert(created.clone());
        Ok(created)
    }

    pub fn update(&self, record: Club) -> Result<Club, WorkflowError> {
        if self.working.find(&record.id).is_none() {
            return Err(WorkflowError::NotFound(record.id));
        }
        self.ensure_name_free(&record.name, Some(&record.id))?;
        self.store.update(&record)?;
        self.working.upsert(record.clone());
        Ok(record)
    }

    pub fn delete(&self, id: &str) -> Result<(), WorkflowError> {
        if self.working.find(id).is_none() {
            return Err(WorkflowError::NotFound(id.to_string()));
        }
        self.store.delete(id)?;
        self.working.remove(id);
        Ok(())
    }

    fn ensure_name_free(&self, name: &str, exclude_id: Option<&str>) -> Result<(), WorkflowError> {
        let existing = self.working.snapshot();
        ensure_unique_name(
            "club",
            name,
            exclude_id,
            existing.iter().map(|club| (club.id.as_str(), club.name.as_str())),
        )
    }
}
