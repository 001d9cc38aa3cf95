use serde::{Deserialize, Serialize};

use crate::persistence::Entity;

/// An activity report filed by a club.
///
/// `images` holds already-encoded image data URLs from the original payloads;
/// this service stores and echoes them without processing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Id of the club the report belongs to. The club may have been deleted
    /// since; readers fall back to an "unknown club" label.
    #[serde(rename = "clubId")]
    pub club_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub participants: u32,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: ReportStatus,
}

impl Entity for Report {
    const COLLECTION: &'static str = "reports";
    const STORAGE_KEY: &'static str = "reports";
    const ID_PREFIX: &'static str = "BC";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportStatus {
    #[serde(rename = "active")]
    Active,
    #[serde(rename = "inactive")]
    Inactive,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportDraft {
    #[serde(rename = "clubId")]
    pub club_id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub participants: u32,
    #[serde(default)]
    pub images: Vec<String>,
    pub status: ReportStatus,
}

impl ReportDraft {
    pub fn into_report(self) -> Report {
        Report {
            id: String::new(),
            club_id: self.club_id,
            title: self.title,
            content: self.content,
            date: self.date,
            participants: self.participants,
            images: self.images,
            status: self.status,
        }
    }
}

/// A report with its club name resolved for display.
#[derive(Debug, Clone, Serialize)]
pub struct ReportView {
    #[serde(flatten)]
    pub report: Report,
    #[serde(rename = "clubName")]
    pub club_name: String,
}
