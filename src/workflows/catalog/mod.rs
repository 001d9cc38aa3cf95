//! Course and instructor catalog.
//!
//! Courses reference their instructor by name rather than id, a
//! denormalization inherited from the existing data. Renaming an instructor
//! therefore rewrites every referencing course as part of the same logical
//! operation, and deletions are guarded by referential checks.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{Course, CourseDraft, CourseStatus, Instructor, InstructorDraft};
pub use router::catalog_router;
pub use service::CatalogService;
