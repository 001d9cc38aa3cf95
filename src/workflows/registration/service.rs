use std::sync::Arc;

use chrono::Utc;

use super::domain::{approved_entry, rejected_entry, Member, MemberDraft, MemberStatus};
use crate::persistence::RecordStore;
use crate::store::WorkingSet;
use crate::workflows::{BulkReport, WorkflowError};

/// The approval workflow engine for registration applications.
///
/// Every mutation validates first, writes to the persistence collaborator,
/// and only then updates the working set, so a collaborator failure leaves
/// the in-memory state unchanged.
pub struct RegistrationService<S> {
    store: Arc<S>,
    working: Arc<WorkingSet<Member>>,
}

impl<S> RegistrationService<S>
where
    S: RecordStore<Member> + 'static,
{
    pub fn new(store: Arc<S>, working: Arc<WorkingSet<Member>>) -> Self {
        Self { store, working }
    }

    /// Reloads the working set from the collaborator. On failure the prior
    /// set is left untouched.
    pub fn refresh(&self) -> Result<usize, WorkflowError> {
        let records = self.store.list()?;
        let count = records.len();
        self.working.replace_all(records);
        Ok(count)
    }

    pub fn members(&self) -> Vec<Member> {
        self.working.snapshot()
    }

    /// Approved members of one club, as shown on the club detail screen and
    /// consumed by the export.
    pub fn approved_by_club(&self, club_id: &str) -> Vec<Member> {
        self.working
            .snapshot()
            .into_iter()
            .filter(|member| member.club == club_id && member.status == MemberStatus::Approved)
            .collect()
    }

    /// Creates a new application in the Pending state. The collaborator
    /// assigns the id.
    pub fn submit(&self, draft: MemberDraft) -> Result<Member, WorkflowError> {
        let created = self.store.create(draft.into_pending())?;
        self.working.upsert(created.clone());
        Ok(created)
    }

    /// Edits an application's form fields, keeping status and history as
    /// supplied by the caller.
    pub fn update(&self, record: Member) -> Result<Member, WorkflowError> {
        if self.working.find(&record.id).is_none() {
            return Err(WorkflowError::NotFound(record.id));
        }
        self.store.update(&record)?;
        self.working.upsert(record.clone());
        Ok(record)
    }

    /// Approves an application. Re-approving appends a duplicate history
    /// entry rather than deduplicating.
    pub fn approve(&self, id: &str) -> Result<Member, WorkflowError> {
        let mut record = self.find(id)?;
        record.status = MemberStatus::Approved;
        record.history.push(approved_entry(Utc::now()));
        self.store.update(&record)?;
        self.working.upsert(record.clone());
        Ok(record)
    }

    /// Rejects an application. The note is mandatory; a blank or
    /// whitespace-only note fails before anything is written.
    pub fn reject(&self, id: &str, note: &str) -> Result<Member, WorkflowError> {
        let note = note.trim();
        if note.is_empty() {
            return Err(WorkflowError::MissingReason);
        }
        let mut record = self.find(id)?;
        record.status = MemberStatus::Rejected;
        record.note = Some(note.to_string());
        record.history.push(rejected_entry(Utc::now(), note));
        self.store.update(&record)?;
        self.working.upsert(record.clone());
        Ok(record)
    }

    /// Removes an application. Approved records leave the working set only:
    /// the collaborator copy is retained so downstream uses of approved
    /// member data keep working. Pending and Rejected records are deleted
    /// from both.
    pub fn delete(&self, id: &str) -> Result<(), WorkflowError> {
        let record = self.find(id)?;
        if record.status == MemberStatus::Approved {
            self.working.remove(id);
            tracing::info!(
                id = %id,
                "removed approved application from the worklist; collaborator record retained"
            );
            return Ok(());
        }
        self.store.delete(id)?;
        self.working.remove(id);
        Ok(())
    }

    pub fn bulk_approve(&self, ids: &[String]) -> BulkReport {
        let mut report = BulkReport::default();
        for id in ids {
            report.record(id, self.approve(id).map(drop));
        }
        report
    }

    /// Bulk reject shares one note across the batch. The note precondition is
    /// checked once up front and aborts the whole batch; past that point each
    /// per-id write is independent.
    pub fn bulk_reject(&self, ids: &[String], note: &str) -> Result<BulkReport, WorkflowError> {
        if note.trim().is_empty() {
            return Err(WorkflowError::MissingReason);
        }
        let mut report = BulkReport::default();
        for id in ids {
            report.record(id, self.reject(id, note).map(drop));
        }
        Ok(report)
    }

    pub fn bulk_delete(&self, ids: &[String]) -> BulkReport {
        let mut report = BulkReport::default();
        for id in ids {
            report.record(id, self.delete(id));
        }
        report
    }

    fn find(&self, id: &str) -> Result<Member, WorkflowError> {
        self.working
            .find(id)
            .ok_or_else(|| WorkflowError::NotFound(id.to_string()))
    }
}
