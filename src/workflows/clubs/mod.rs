//! Club directory administration.

pub mod domain;
pub mod router;
pub mod service;

pub use domain::{Club, ClubDraft};
pub use router::club_router;
pub use service::ClubService;
