//! End-to-end walk through the registration workflow against in-memory
//! collaborators, the way an admin session uses it.

use std::sync::{Arc, Mutex};

use club_admin::persistence::{MemoryStore, RecordStore, StoreError};
use club_admin::store::Workspace;
use club_admin::workflows::clubs::{ClubDraft, ClubService};
use club_admin::workflows::export::export_approved_members;
use club_admin::workflows::registration::{Member, MemberDraft, RegistrationService};
use club_admin::workflows::statistics;

fn member_draft(name: &str, club: &str) -> MemberDraft {
    MemberDraft {
        name: name.to_string(),
        email: format!("{name}@example.com"),
        phone: "0900000000".to_string(),
        gender: "female".to_string(),
        address: "Huế".to_string(),
        skills: "chess".to_string(),
        club: club.to_string(),
        reason: "wants to join".to_string(),
    }
}

/// Wraps the member store and counts DELETE calls per id.
#[derive(Default)]
struct CountingStore {
    inner: MemoryStore<Member>,
    deletes: Mutex<Vec<String>>,
}

impl CountingStore {
    fn delete_calls_for(&self, id: &str) -> usize {
        self.deletes
            .lock()
            .expect("delete log mutex poisoned")
            .iter()
            .filter(|logged| logged.as_str() == id)
            .count()
    }
}

impl RecordStore<Member> for CountingStore {
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

#[test]
fn approve_then_delete_never_reaches_the_collaborator() {
    let workspace = Workspace::new();
    let store = Arc::new(CountingStore::default());
    let service = RegistrationService::new(store.clone(), workspace.members.clone());

    let member = service.submit(member_draft("An", "CLB_1")).expect("submit");
    service.approve(&member.id).expect("approve");
    service.delete(&member.id).expect("delete");

    assert_eq!(store.delete_calls_for(&member.id), 0);
    assert!(workspace.members.is_empty());
}

#[test]
fn reject_then_delete_issues_exactly_one_collaborator_delete() {
    let workspace = Workspace::new();
    let store = Arc::new(CountingStore::default());
    let service = RegistrationService::new(store.clone(), workspace.members.clone());

    let member = service.submit(member_draft("An", "CLB_1")).expect("submit");
    service.reject(&member.id, "form incomplete").expect("reject");
    service.delete(&member.id).expect("delete");

    assert_eq!(store.delete_calls_for(&member.id), 1);
    assert!(workspace.members.is_empty());
}

#[test]
fn statistics_follow_the_working_sets_through_the_workflow() {
    let workspace = Workspace::new();
    let clubs = ClubService::new(
        Arc::new(MemoryStore::default()),
        workspace.clubs.clone(),
    );
    let registrations = RegistrationService::new(
        Arc::new(MemoryStore::default()),
        workspace.members.clone(),
    );

    let karate = clubs
        .create(ClubDraft {
            avatar: String::new(),
            name: "Karate".to_string(),
            description: String::new(),
            chu_nhiem: "Lan".to_string(),
            active: true,
        })
        .expect("create club");

    let a = registrations.submit(member_draft("An", &karate.id)).expect("submit");
    let b = registrations.submit(member_draft("Bình", &karate.id)).expect("submit");
    registrations.submit(member_draft("Chi", &karate.id)).expect("submit");
    registrations.approve(&a.id).expect("approve");
    registrations.approve(&b.id).expect("approve");

    let club_rows = statistics::per_club(&workspace.clubs.snapshot(), &workspace.members.snapshot());
    assert_eq!(club_rows.len(), 1);
    assert_eq!(club_rows[0].pending, 1);
    assert_eq!(club_rows[0].approved, 2);
    assert_eq!(club_rows[0].rejected, 0);

    let overall = statistics::totals(&workspace.clubs.snapshot(), &workspace.members.snapshot());
    assert_eq!(overall.total_clubs, 1);
    assert_eq!(overall.approved, 2);
}

#[test]
fn deleting_a_club_orphans_members_instead_of_blocking() {
    let workspace = Workspace::new();
    let clubs = ClubService::new(Arc::new(MemoryStore::default()), workspace.clubs.clone());
    let registrations = RegistrationService::new(
        Arc::new(MemoryStore::default()),
        workspace.members.clone(),
    );

    let club = clubs
        .create(ClubDraft {
            avatar: String::new(),
            name: "Drama".to_string(),
            description: String::new(),
            chu_nhiem: "Minh".to_string(),
            active: true,
        })
        .expect("create club");
    let member = registrations.submit(member_draft("An", &club.id)).expect("submit");
    registrations.approve(&member.id).expect("approve");

    clubs.delete(&club.id).expect("club delete has no referential guard");

    let members = workspace.members.snapshot();
    assert_eq!(members.len(), 1, "member survives as an orphan");
    assert_eq!(
        statistics::club_name(&workspace.clubs.snapshot(), &members[0].club),
        statistics::UNKNOWN_CLUB
    );

    // The orphan also drops out of the club-grouped export.
    let csv = export_approved_members(&workspace.clubs.snapshot(), &members, None).expect("export");
    assert_eq!(csv.lines().count(), 1, "header only");
}
