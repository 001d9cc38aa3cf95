//! Workflow services: the administrative operations the UI drives, built on
//! the working sets and a persistence collaborator.

pub mod catalog;
pub mod clubs;
pub mod export;
pub mod registration;
pub mod reports;
pub mod statistics;

use serde::Serialize;

use crate::persistence::StoreError;

/// Failure taxonomy shared by the workflow services. Validation variants are
/// raised before any mutating collaborator call.
#[derive(Debug, thiserror::Error)]
pub enum WorkflowError {
    #[error("{entity} name already exists: {name}")]
    DuplicateName { entity: &'static str, name: String },
    #[error("a rejection reason is required")]
    MissingReason,
    #[error("{0}")]
    ReferentialConstraint(String),
    #[error("no record with id {0}")]
    NotFound(String),
    #[error(transparent)]
    Collaborator(#[from] StoreError),
}

/// Unique-name rule: case-sensitive exact match among records of the same
/// type, excluding the record under update (matched by id).
pub(crate) fn ensure_unique_name<'a, I>(
    entity: &'static str,
    candidate: &str,
    exclude_id: Option<&str>,
    existing: I,
) -> Result<(), WorkflowError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    for (id, name) in existing {
        if exclude_id == Some(id) {
            continue;
        }
        if name == candidate {
            return Err(WorkflowError::DuplicateName {
                entity,
                name: candidate.to_string(),
            });
        }
    }
    Ok(())
}

/// Per-id outcomes of a bulk operation. Each underlying write is an
/// independent unit of work: a failure is recorded and the batch continues,
/// with no rollback of earlier writes.
#[derive(Debug, Default, Serialize)]
pub struct BulkReport {
    pub applied: Vec<String>,
    pub failed: Vec<BulkFailure>,
}

#[derive(Debug, Serialize)]
pub struct BulkFailure {
    pub id: String,
    pub error: String,
}

impl BulkReport {
    pub fn record(&mut self, id: &str, result: Result<(), WorkflowError>) {
        match result {
            Ok(()) => self.applied.push(id.to_string()),
            Err(err) => self.failed.push(BulkFailure {
                id: id.to_string(),
                error: err.to_string(),
            }),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }
}
