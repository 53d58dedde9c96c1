// file: src/models/evaluation.rs
// description: checklist evaluation items produced by contract review
// reference: internal data structures

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvaluationStatus {
    Good,
    Warning,
    Critical,
}

impl EvaluationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationStatus::Good => "good",
            EvaluationStatus::Warning => "warning",
            EvaluationStatus::Critical => "critical",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub status: EvaluationStatus,
}

impl EvaluationItem {
    pub fn new(id: &str, question: &str, answer: &str, status: EvaluationStatus) -> Self {
        Self {
            id: id.to_string(),
            question: question.to_string(),
            answer: answer.to_string(),
            status,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub good: usize,
    pub warning: usize,
    pub critical: usize,
}

impl EvaluationSummary {
    pub fn from_items(items: &[EvaluationItem]) -> Self {
        items.iter().fold(Self::default(), |mut summary, item| {
            match item.status {
                EvaluationStatus::Good => summary.good += 1,
                EvaluationStatus::Warning => summary.warning += 1,
                EvaluationStatus::Critical => summary.critical += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.good + self.warning + self.critical
    }
}
