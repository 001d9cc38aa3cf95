//! Catalog consistency rules exercised against the JSON-file collaborator,
//! including a session restart over the same data directory.

use std::sync::Arc;

use club_admin::persistence::{LocalStore, RecordStore};
use club_admin::store::Workspace;
use club_admin::workflows::catalog::{
    CatalogService, Course, CourseDraft, CourseStatus, Instructor, InstructorDraft,
};
use club_admin::workflows::WorkflowError;

type FileCatalog = CatalogService<LocalStore<Course>, LocalStore<Instructor>>;

fn catalog_over(dir: &std::path::Path) -> FileCatalog {
    let workspace = Workspace::new();
    let service = CatalogService::new(
        Arc::new(LocalStore::new(dir)),
        Arc::new(LocalStore::new(dir)),
        workspace.courses.clone(),
        workspace.instructors.clone(),
    );
    service.refresh().expect("local files load");
    service
}

fn course_draft(name: &str, teacher: &str, students: u32) -> CourseDraft {
    CourseDraft {
        ten_khoa_hoc: name.to_string(),
        giang_vien: teacher.to_string(),
        so_luong_hoc_vien: students,
        mo_ta: "evening class".to_string(),
        trang_thai: CourseStatus::DangMo,
    }
}

#[test]
fn instructor_rename_propagates_and_survives_a_restart() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = catalog_over(dir.path());

    let hoa = service
        .add_instructor(InstructorDraft {
            ten_giang_vien: "Hoa".to_string(),
        })
        .expect("add instructor");
    service
        .add_instructor(InstructorDraft {
            ten_giang_vien: "Minh".to_string(),
        })
        .expect("add instructor");
    service.add_course(course_draft("Rust", "Hoa", 0)).expect("add");
    service.add_course(course_draft("Go", "Hoa", 0)).expect("add");
    let untouched = service.add_course(course_draft("Python", "Minh", 0)).expect("add");

    service
        .update_instructor(Instructor {
            id: hoa.id,
            ten_giang_vien: "Hoà Trần".to_string(),
        })
        .expect("rename");

    // A fresh session over the same directory sees the propagated names.
    let reopened = catalog_over(dir.path());
    let courses = reopened.courses();
    let renamed: Vec<&Course> = courses
        .iter()
        .filter(|course| course.giang_vien == "Hoà Trần")
        .collect();
    assert_eq!(renamed.len(), 2);
    assert_eq!(
        courses
            .iter()
            .find(|course| course.id == untouched.id)
            .expect("python course present")
            .giang_vien,
        "Minh"
    );
}

#[test]
fn referential_guards_hold_against_the_file_store() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = catalog_over(dir.path());

    let hoa = service
        .add_instructor(InstructorDraft {
            ten_giang_vien: "Hoa".to_string(),
        })
        .expect("add instructor");
    let course = service.add_course(course_draft("Rust", "Hoa", 5)).expect("add");

    assert!(matches!(
        service.delete_instructor(&hoa.id),
        Err(WorkflowError::ReferentialConstraint(_))
    ));
    assert!(matches!(
        service.delete_course(&course.id),
        Err(WorkflowError::ReferentialConstraint(_))
    ));

    // Nothing was removed from disk.
    let instructor_store = LocalStore::<Instructor>::new(dir.path());
    let course_store = LocalStore::<Course>::new(dir.path());
    assert_eq!(instructor_store.list().expect("list").len(), 1);
    assert_eq!(course_store.list().expect("list").len(), 1);
}

#[test]
fn duplicate_names_never_reach_the_file_store() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = catalog_over(dir.path());

    service
        .add_instructor(InstructorDraft {
            ten_giang_vien: "Hoa".to_string(),
        })
        .expect("add instructor");

    assert!(matches!(
        service.add_instructor(InstructorDraft {
            ten_giang_vien: "Hoa".to_string(),
        }),
        Err(WorkflowError::DuplicateName { .. })
    ));

    let instructor_store = LocalStore::<Instructor>::new(dir.path());
    assert_eq!(instructor_store.list().expect("list").len(), 1);
}
