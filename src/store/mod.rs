//! The session's working sets: the current in-memory copy of each entity
//! collection, refreshed from a persistence collaborator and mutated only by
//! the workflow services.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::persistence::Entity;
use crate::workflows::catalog::{Course, Instructor};
use crate::workflows::clubs::Club;
use crate::workflows::registration::Member;
use crate::workflows::reports::Report;

/// One entity type's working set. Single-writer per session; the mutex only
/// satisfies the server's `Send + Sync` bounds.
pub struct WorkingSet<T: Entity> {
    records: Mutex<Vec<T>>,
}

impl<T: Entity> Default for WorkingSet<T> {
    fn default() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
        }
    }
}

impl<T: Entity> WorkingSet<T> {
    pub fn snapshot(&self) -> Vec<T> {
        self.lock().clone()
    }

    /// Atomically swaps the whole working set. There is no partial overwrite:
    /// callers that fail to produce a replacement leave the prior set intact.
    pub fn replace_all(&self, records: Vec<T>) {
        *self.lock() = records;
    }

    pub fn find(&self, id: &str) -> Option<T> {
        self.lock().iter().find(|record| record.id() == id).cloned()
    }

    pub fn upsert(&self, record: T) {
        let mut records = self.lock();
        match records.iter_mut().find(|existing| existing.id() == record.id()) {
            Some(slot) => *slot = record,
            None => records.push(record),
        }
    }

    pub fn remove(&self, id: &str) -> bool {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|record| record.id() != id);
        records.len() != before
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// All working sets for one admin session, passed by handle to whichever
/// component needs read or write access.
#[derive(Default)]
pub struct Workspace {
    pub clubs: Arc<WorkingSet<Club>>,
    pub members: Arc<WorkingSet<Member>>,
    pub courses: Arc<WorkingSet<Course>>,
    pub instructors: Arc<WorkingSet<Instructor>>,
    pub reports: Arc<WorkingSet<Report>>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }
}
