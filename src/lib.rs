//! Administrative core for a club-management tool: membership registration
//! applications with an approval workflow, club and course/instructor CRUD
//! with cross-entity consistency rules, derived statistics, and CSV export.
//!
//! Persistence is an injected collaborator ([`persistence::RecordStore`]);
//! the workflow services own the in-memory working sets for the session.

pub mod config;
pub mod error;
pub mod persistence;
pub mod store;
pub mod telemetry;
pub mod workflows;

pub use error::AppError;
pub use store::{WorkingSet, Workspace};
pub use workflows::{BulkFailure, BulkReport, WorkflowError};
