// file: src/models/change.rs
// description: contract change entries produced by comparison, with reviewer decisions
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Addition,
    Deletion,
    Modification,
}

impl ChangeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeKind::Addition => "addition",
            ChangeKind::Deletion => "deletion",
            ChangeKind::Modification => "modification",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeStatus {
    #[default]
    Pending,
    Approved,
    Referred,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    pub id: String,
    pub kind: ChangeKind,
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_text: Option<String>,
    pub summary: String,
    pub legal_opinion: String,
    pub precedence: String,
    pub status: ChangeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
}

impl Change {
    pub fn approve(&mut self) {
        self.status = ChangeStatus::Approved;
    }

    pub fn refer(&mut self, remarks: impl Into<String>) {
        self.status = ChangeStatus::Referred;
        self.remarks = Some(remarks.into());
    }

    pub fn is_pending(&self) -> bool {
        self.status == ChangeStatus::Pending
    }
}
