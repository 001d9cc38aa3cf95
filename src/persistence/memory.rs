use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Entity, RecordStore, StoreError};

/// In-memory collaborator backing tests and demo mode. Ids are minted from a
/// per-store sequence.
pub struct MemoryStore<T: Entity> {
    records: Mutex<Vec<T>>,
    sequence: AtomicU64,
}

impl<T: Entity> Default for MemoryStore<T> {
    fn default() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            sequence: AtomicU64::new(1),
        }
    }
}

impl<T: Entity> MemoryStore<T> {
    /// Snapshot of everything the collaborator currently holds.
    pub fn records(&self) -> Vec<T> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn next_id(&self) -> String {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        format!("{}_{id:06}", T::ID_PREFIX)
    }
}

impl<T: Entity> RecordStore<T> for MemoryStore<T> {
    fn list(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.records())
    }

    fn fetch(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.lock().iter().find(|record| record.id() == id).cloned())
    }

    fn create(&self, mut record: T) -> Result<T, StoreError> {
        record.set_id(self.next_id());
        self.lock().push(record.clone());
        Ok(record)
    }

    fn update(&self, record: &T) -> Result<(), StoreError> {
        let mut records = self.lock();
        let slot = records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .ok_or(StoreError::NotFound)?;
        *slot = record.clone();
        Ok(())
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.lock();
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
