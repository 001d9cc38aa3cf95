use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::persistence::Entity;

const HISTORY_TIMESTAMP: &str = "%Y-%m-%d %H:%M:%S UTC";

/// A club-membership registration application.
///
/// `history` is an advisory audit trail: an ordered, append-only sequence of
/// human-readable strings, one per status transition. It only grows until the
/// record is deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub address: String,
    pub skills: String,
    /// Id of the club the applicant registered into. The club may no longer
    /// exist; readers fall back to an "unknown club" label.
    pub club: String,
    pub reason: String,
    pub status: MemberStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default)]
    pub history: Vec<String>,
}

impl Entity for Member {
    const COLLECTION: &'static str = "students";
    const STORAGE_KEY: &'static str = "registrations";
    const ID_PREFIX: &'static str = "TV";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// Application status. Approved and Rejected look terminal but re-transition
/// is permitted: nothing blocks re-approving a rejected record or vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MemberStatus {
    Pending,
    Approved,
    Rejected,
}

impl MemberStatus {
    pub const fn label(self) -> &'static str {
        match self {
            MemberStatus::Pending => "Pending",
            MemberStatus::Approved => "Approved",
            MemberStatus::Rejected => "Rejected",
        }
    }
}

/// Form fields of a new application, before the collaborator assigns an id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub address: String,
    pub skills: String,
    pub club: String,
    pub reason: String,
}

impl MemberDraft {
    pub fn into_pending(self) -> Member {
        Member {
            id: String::new(),
            name: self.name,
            email: self.email,
            phone: self.phone,
            gender: self.gender,
            address: self.address,
            skills: self.skills,
            club: self.club,
            reason: self.reason,
            status: MemberStatus::Pending,
            note: None,
            history: Vec::new(),
        }
    }
}

pub(crate) fn approved_entry(at: DateTime<Utc>) -> String {
    format!("Admin approved at {}", at.format(HISTORY_TIMESTAMP))
}

pub(crate) fn rejected_entry(at: DateTime<Utc>, note: &str) -> String {
    format!(
        "Admin rejected at {} with reason: {note}",
        at.format(HISTORY_TIMESTAMP)
    )
}
