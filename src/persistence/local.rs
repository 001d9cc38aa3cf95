use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::PathBuf;

use chrono::Utc;

use super::{Entity, RecordStore, StoreError};

/// Local key-value collaborator: the whole collection lives as a JSON array
/// in one file per fixed storage key, rewritten on every mutation. This
/// mirrors the browser-storage layout the catalog data originally used, so
/// existing `danhSachKhoaHoc`/`danhSachGiangVien` payloads load unchanged.
pub struct LocalStore<T> {
    dir: PathBuf,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Entity> LocalStore<T> {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            _marker: PhantomData,
        }
    }

    fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", T::STORAGE_KEY))
    }

    fn read_all(&self) -> Result<Vec<T>, StoreError> {
        match fs::read_to_string(self.path()) {
            Ok(raw) => serde_json::from_str(&raw)
                .map_err(|err| StoreError::Malformed(err.to_string())),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(StoreError::Unavailable(err.to_string())),
        }
    }

    fn write_all(&self, records: &[T]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.dir).map_err(|err| StoreError::Unavailable(err.to_string()))?;
        let raw = serde_json::to_string(records)
            .map_err(|err| StoreError::Malformed(err.to_string()))?;
        fs::write(self.path(), raw).map_err(|err| StoreError::Unavailable(err.to_string()))
    }

    fn mint_id(&self, existing: &[T]) -> String {
        let base = format!("{}_{}", T::ID_PREFIX, Utc::now().timestamp_millis());
        let mut candidate = base.clone();
        let mut bump = 1;
        while existing.iter().any(|record| record.id() == candidate) {
            candidate = format!("{base}-{bump}");
            bump += 1;
        }
        candidate
    }
}

impl<T: Entity> RecordStore<T> for LocalStore<T> {
    fn list(&self) -> Result<Vec<T>, StoreError> {
        self.read_all()
    }

    fn fetch(&self, id: &str) -> Result<Option<T>, StoreError> {
        Ok(self.read_all()?.into_iter().find(|record| record.id() == id))
    }

    fn create(&self, mut record: T) -> Result<T, StoreError> {
        let mut records = self.read_all()?;
        record.set_id(self.mint_id(&records));
        records.push(record.clone());
        self.write_all(&records)?;
        Ok(record)
    }

    fn update(&self, record: &T) -> Result<(), StoreError> {
        let mut records = self.read_all()?;
        let slot = records
            .iter_mut()
            .find(|existing| existing.id() == record.id())
            .ok_or(StoreError::NotFound)?;
        *slot = record.clone();
        self.write_all(&records)
    }

    fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut records = self.read_all()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        if records.len() == before {
            return Err(StoreError::NotFound);
        }
        self.write_all(&records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::catalog::{Course, CourseStatus};

    fn course(name: &str) -> Course {
        Course {
            id: String::new(),
            ten_khoa_hoc: name.to_string(),
            giang_vien: "Nguyễn Văn A".to_string(),
            so_luong_hoc_vien: 0,
            mo_ta: String::new(),
            trang_thai: CourseStatus::DangMo,
        }
    }

    #[test]
    fn create_assigns_prefixed_ids_and_persists() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = LocalStore::<Course>::new(dir.path());

        let first = store.create(course("Rust")).expect("create");
        let second = store.create(course("Go")).expect("create");

        assert!(first.id.starts_with("KH_"));
        assert_ne!(first.id, second.id);

        // A fresh store over the same directory sees both records.
        let reopened = LocalStore::<Course>::new(dir.path());
        let names: Vec<String> = reopened
            .list()
            .expect("list")
            .into_iter()
            .map(|c| c.ten_khoa_hoc)
            .collect();
        assert_eq!(names, vec!["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn missing_file_reads_as_empty_collection() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = LocalStore::<Course>::new(dir.path());
        assert!(store.list().expect("list").is_empty());
    }

    #[test]
    fn update_and_delete_require_an_existing_record() {
        let dir = tempfile::tempdir().expect("temp dir");
        let store = LocalStore::<Course>::new(dir.path());

        let mut stored = store.create(course("Rust")).expect("create");
        stored.so_luong_hoc_vien = 12;
        store.update(&stored).expect("update");
        let fetched = store.fetch(&stored.id).expect("fetch").expect("present");
        assert_eq!(fetched.so_luong_hoc_vien, 12);

        assert!(matches!(store.delete("KH_missing"), Err(StoreError::NotFound)));
        store.delete(&stored.id).expect("delete");
        assert!(store.fetch(&stored.id).expect("fetch").is_none());
    }
}
