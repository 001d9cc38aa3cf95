//! Membership registration applications and the approval workflow that moves
//! them through Pending, Approved, and Rejected.

pub mod domain;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Member, MemberDraft, MemberStatus};
pub use router::registration_router;
pub use service::RegistrationService;
