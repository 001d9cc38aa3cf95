use serde::{Deserialize, Serialize};

use crate::persistence::Entity;

/// An organizational entity members register into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Club {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default)]
    pub avatar: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Owner name, kept under its original wire spelling.
    #[serde(rename = "chuNhiem", default)]
    pub chu_nhiem: String,
    #[serde(default)]
    pub active: bool,
}

impl Entity for Club {
    const COLLECTION: &'static str = "Clb";
    const STORAGE_KEY: &'static str = "clubs";
    const ID_PREFIX: &'static str = "CLB";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClubDraft {
    #[serde(default)]
    pub avatar: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "chuNhiem", default)]
    pub chu_nhiem: String,
    #[serde(default)]
    pub active: bool,
}

impl ClubDraft {
    pub fn into_club(self) -> Club {
        Club {
            id: String::new(),
            avatar: self.avatar,
            name: self.name,
            description: self.description,
            chu_nhiem: self.chu_nhiem,
            active: self.active,
        }
    }
}
