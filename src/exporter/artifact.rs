// file: src/exporter/artifact.rs
// description: placeholder text and download file names for exported documents

use crate::models::{Change, ChangeStatus, ContractTerms, ContractType};
use crate::utils::Validator;
use chrono::NaiveDate;

pub const CONTENT_PLACEHOLDER: &str =
    "[Document content would be generated here based on the template...]";

pub fn contract_text(terms: &ContractTerms) -> String {
    format!(
        "{label}\n\n\
         Enterprise: {enterprise}\n\
         Client: {client}\n\
         Effective Date: {date}\n\
         Contract Duration: {years} years\n\
         Notice Period: {months} months\n\n\
         {placeholder}\n",
        label = terms.contract_type.label(),
        enterprise = terms.enterprise_name,
        client = terms.client_name,
        date = terms.effective_date.format("%Y-%m-%d"),
        years = terms.duration_years,
        months = terms.notice_months,
        placeholder = CONTENT_PLACEHOLDER,
    )
}

/// `{template}_{client}_{YYYY-MM-DD}.{extension}`
pub fn contract_file_name(
    contract_type: ContractType,
    client_name: &str,
    date: NaiveDate,
    extension: &str,
) -> String {
    format!(
        "{}_{}_{}.{}",
        contract_type.as_str(),
        Validator::sanitize_file_component(client_name),
        date.format("%Y-%m-%d"),
        extension.trim_start_matches('.')
    )
}

pub fn comparison_file_name(date: NaiveDate, extension: &str) -> String {
    format!(
        "contract_comparison_{}.{}",
        date.format("%Y-%m-%d"),
        extension.trim_start_matches('.')
    )
}

/// Lists approved changes, then referred changes with their remarks.
/// Pending changes are left out.
pub fn comparison_report(changes: &[Change]) -> String {
    let approved: Vec<&Change> = changes
        .iter()
        .filter(|c| c.status == ChangeStatus::Approved)
        .collect();
    let referred: Vec<&Change> = changes
        .iter()
        .filter(|c| c.status == ChangeStatus::Referred)
        .collect();

    let mut report = String::from("DOCUMENT COMPARISON RESULTS\n");
    report.push_str("==========================\n\n");

    report.push_str(&format!("APPROVED CHANGES ({}):\n", approved.len()));
    for change in &approved {
        report.push_str(&format!("- {}: {}\n", change.section, change.summary));
    }

    report.push_str(&format!("\nREFERRED CHANGES ({}):\n", referred.len()));
    for change in &referred {
        report.push_str(&format!("- {}: {}\n", change.section, change.summary));
        report.push_str(&format!(
            "  Remarks: {}\n",
            change.remarks.as_deref().unwrap_or("")
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ContractComparator, StaticComparator};
    use crate::models::FileAttachment;

    fn terms() -> ContractTerms {
        ContractTerms {
            contract_type: ContractType::Nda,
            enterprise_name: "Acme".to_string(),
            client_name: "Beta Labs".to_string(),
            effective_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            duration_years: 2,
            notice_months: 3,
        }
    }

    #[test]
    fn test_contract_text_lists_terms() {
        let text = contract_text(&terms());
        assert!(text.starts_with("Non-Disclosure Agreement (NDA)"));
        assert!(text.contains("Client: Beta Labs"));
        assert!(text.contains("Contract Duration: 2 years"));
        assert!(text.contains("Notice Period: 3 months"));
        assert!(text.contains(CONTENT_PLACEHOLDER));
    }

    #[test]
    fn test_file_names() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(
            contract_file_name(ContractType::Nda, "Beta Labs", date, "docx"),
            "nda_Beta_Labs_2024-01-15.docx"
        );
        assert_eq!(
            comparison_file_name(date, ".docx"),
            "contract_comparison_2024-01-15.docx"
        );
    }

    #[test]
    fn test_report_groups_decisions() {
        let file = FileAttachment::new("a.docx", "x", vec![]);
        let mut changes = StaticComparator::new().compare(&file, &file);
        changes[0].approve();
        changes[2].refer("keep the cap");

        let report = comparison_report(&changes);
        assert!(report.contains("APPROVED CHANGES (1):"));
        assert!(report.contains("- Section 3.2 - Payment Terms: Payment terms extended from 30 to 45 days"));
        assert!(report.contains("REFERRED CHANGES (1):"));
        assert!(report.contains("  Remarks: keep the cap"));
        assert!(!report.contains("Force Majeure"));
    }
}
