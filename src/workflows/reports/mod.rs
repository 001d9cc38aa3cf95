//! Activity reports filed by clubs.
//!
//! Reports reference their club by id but are otherwise free-standing: a club
//! may be deleted while its reports remain, so read views fall back to an
//! "unknown club" label instead of failing.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{Report, ReportDraft, ReportStatus, ReportView};
pub use router::report_router;
pub use service::ReportService;
