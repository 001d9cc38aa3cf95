use std::sync::Arc;

use super::domain::{Report, ReportDraft, ReportView};
use crate::persistence::RecordStore;
use crate::store::WorkingSet;
use crate::workflows::clubs::Club;
use crate::workflows::statistics::club_name;
use crate::workflows::WorkflowError;

/// Activity report CRUD plus the club-scoped listing.
///
/// There is no referential guard in either direction: deleting a club leaves
/// its reports behind, and deleting a report never touches the club. Views
/// resolve the club name through the same fallback the statistics use.
pub struct ReportService<S> {
    store: Arc<S>,
    working: Arc<WorkingSet<Report>>,
    clubs: Arc<WorkingSet<Club>>,
}

impl<S> ReportService<S>
where
    S: RecordStore<Report> + 'static,
{
    pub fn new(
        store: Arc<S>,
        working: Arc<WorkingSet<Report>>,
        clubs: Arc<WorkingSet<Club>>,
    ) -> Self {
        Self {
            store,
            working,
            clubs,
        }
    }

    pub fn refresh(&self) -> Result<usize, WorkflowError> {
        let records = self.store.list()?;
        let count = records.len();
        self.working.replace_all(records);
        Ok(count)
    }

    pub fn reports(&self) -> Vec<Report> {
        self.working.snapshot()
    }

    /// Reports with their club names attached, in working-set order.
    pub fn views(&self) -> Vec<ReportView> {
        let clubs = self.clubs.snapshot();
        self.working
            .snapshot()
            .into_iter()
            .map(|report| {
                let club_name = club_name(&clubs, &report.club_id);
                ReportView { report, club_name }
            })
            .collect()
    }

    pub fn by_club(&self, club_id: &str) -> Vec<Report> {
        self.working
            .snapshot()
            .into_iter()
            .filter(|report| report.club_id == club_id)
            .collect()
    }

    pub fn create(&self, draft: ReportDraft) -> Result<Report, WorkflowError> {
        let created = self.store.create(draft.into_report())?;
        self.working.upsert(created.clone());
        Ok(created)
    }

    pub fn update(&self, record: Report) -> Result<Report, WorkflowError> {
        if self.working.find(&record.id).is_none() {
            return Err(WorkflowError::NotFound(record.id));
        }
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::workflows::reports::ReportStatus;
    use crate::workflows::statistics::UNKNOWN_CLUB;

    fn draft(club_id: &str, title: &str) -> ReportDraft {
        ReportDraft {
            club_id: club_id.to_string(),
            title: title.to_string(),
            content: "Tổng kết hoạt động tháng".to_string(),
            date: "2024-05-01".to_string(),
            participants: 24,
            images: Vec::new(),
            status: ReportStatus::Active,
        }
    }

    fn club(id: &str, name: &str) -> Club {
        Club {
            id: id.to_string(),
            avatar: String::new(),
            name: name.to_string(),
            description: String::new(),
            chu_nhiem: String::new(),
            active: true,
        }
    }

    fn service() -> (
        ReportService<MemoryStore<Report>>,
        Arc<MemoryStore<Report>>,
        Arc<WorkingSet<Club>>,
    ) {
        let store = Arc::new(MemoryStore::default());
        let clubs = Arc::new(WorkingSet::default());
        let service = ReportService::new(store.clone(), Arc::new(WorkingSet::default()), clubs.clone());
        (service, store, clubs)
    }

    #[test]
    fn create_persists_and_lists_by_club() {
        let (service, store, _) = service();
        let report = service.create(draft("c1", "Sinh hoạt tháng 5")).expect("create");
        service.create(draft("c2", "Giải giao hữu")).expect("create");

        assert!(report.id.starts_with("BC_"));
        assert_eq!(store.records().len(), 2);

        let for_club = service.by_club("c1");
        assert_eq!(for_club.len(), 1);
        assert_eq!(for_club[0].title, "Sinh hoạt tháng 5");
    }

    #[test]
    fn update_replaces_the_record_and_requires_it_to_exist() {
        let (service, store, _) = service();
        let mut report = service.create(draft("c1", "Sinh hoạt tháng 5")).expect("create");
        report.participants = 30;
        report.status = ReportStatus::Inactive;
        service.update(report.clone()).expect("update");

        assert_eq!(store.records()[0].participants, 30);
        assert_eq!(store.records()[0].status, ReportStatus::Inactive);

        report.id = "BC_missing".to_string();
        assert!(matches!(
            service.update(report),
            Err(WorkflowError::NotFound(_))
        ));
    }

    #[test]
    fn delete_removes_the_record() {
        let (service, store, _) = service();
        let report = service.create(draft("c1", "Sinh hoạt tháng 5")).expect("create");
        service.delete(&report.id).expect("delete");

        assert!(store.records().is_empty());
        assert!(service.reports().is_empty());
        assert!(matches!(
            service.delete(&report.id),
            Err(WorkflowError::NotFound(_))
        ));
    }

    #[test]
    fn views_fall_back_when_the_club_is_gone() {
        let (service, _, clubs) = service();
        clubs.upsert(club("c1", "Chess"));
        service.create(draft("c1", "Sinh hoạt tháng 5")).expect("create");
        service.create(draft("gone", "Báo cáo mồ côi")).expect("create");

        let views = service.views();
        assert_eq!(views[0].club_name, "Chess");
        assert_eq!(views[1].club_name, UNKNOWN_CLUB);
    }
}
