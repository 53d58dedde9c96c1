// file: src/analysis/comparison.rs
// description: fixed change list returned for any pair of contract versions
// reference: lookup-table strategy, swappable behind ContractComparator

use crate::analysis::ContractComparator;
use crate::models::{Change, ChangeKind, ChangeStatus, FileAttachment};
use tracing::debug;

pub struct StaticComparator {
    changes: Vec<Change>,
}

impl StaticComparator {
    pub fn new() -> Self {
        Self {
            changes: sample_changes(),
        }
    }

    pub fn with_changes(changes: Vec<Change>) -> Self {
        Self { changes }
    }
}

impl ContractComparator for StaticComparator {
    fn compare(&self, original: &FileAttachment, revised: &FileAttachment) -> Vec<Change> {
        debug!(
            "Comparing {} against {}",
            original.file_name, revised.file_name
        );
        self.changes.clone()
    }
}

impl Default for StaticComparator {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(clippy::too_many_arguments)]
fn change(
    id: &str,
    kind: ChangeKind,
    section: &str,
    old_text: Option<&str>,
    new_text: Option<&str>,
    summary: &str,
    legal_opinion: &str,
    precedence: &str,
) -> Change {
    Change {
        id: id.to_string(),
        kind,
        section: section.to_string(),
        old_text: old_text.map(str::to_string),
        new_text: new_text.map(str::to_string),
        summary: summary.to_string(),
        legal_opinion: legal_opinion.to_string(),
        precedence: precedence.to_string(),
        status: ChangeStatus::Pending,
        remarks: None,
    }
}

fn sample_changes() -> Vec<Change> {
    vec![
        change(
            "1",
            ChangeKind::Modification,
            "Section 3.2 - Payment Terms",
            Some("Payment due within 30 days of invoice date"),
            Some("Payment due within 45 days of invoice date"),
            "Payment terms extended from 30 to 45 days",
            "This change increases cash flow risk but may improve client relationships. Consider adding early payment discounts.",
            "Similar extension was accepted by Microsoft in 2023 contract negotiations, but rejected by Google in 2024 due to cash flow concerns.",
        ),
        change(
            "2",
            ChangeKind::Addition,
            "Section 7.4 - Force Majeure",
            None,
            Some("Including pandemics and cyber security incidents as force majeure events"),
            "Added pandemic and cyber incidents to force majeure clause",
            "Highly recommended addition given recent global events. Provides protection against unforeseeable circumstances.",
            "This clause has been standard practice since 2020. Accepted by 95% of Fortune 500 companies in recent contracts.",
        ),
        change(
            "3",
            ChangeKind::Deletion,
            "Section 5.1 - Liability Cap",
            Some("Liability limited to 2x annual contract value"),
            None,
            "Removed liability cap limitation",
            "Critical risk: Removing liability cap exposes organization to unlimited damages. Strongly recommend maintaining reasonable cap.",
            "Unlimited liability was rejected by Apple in 2023 and Tesla in 2024. Industry standard maintains 1-2x contract value cap.",
        ),
        change(
            "4",
            ChangeKind::Addition,
            "Section 9 - Data Protection",
            None,
            Some("GDPR and CCPA compliance requirements with annual audits"),
            "Added comprehensive data protection compliance requirements",
            "Essential addition for data handling agreements. Ensures regulatory compliance and reduces legal exposure.",
            "Standard requirement accepted by all major tech companies since GDPR implementation in 2018.",
        ),
    ]
}
