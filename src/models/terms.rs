// file: src/models/terms.rs
// description: validated contract terms collected by the generate form
// reference: internal data structures

use crate::models::ContractType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractTerms {
    pub contract_type: ContractType,
    pub enterprise_name: String,
    pub client_name: String,
    pub effective_date: NaiveDate,
    pub duration_years: u32,
    pub notice_months: u32,
}

impl ContractTerms {
    pub const DURATION_YEARS: (u32, u32) = (1, 10);
    pub const NOTICE_MONTHS: (u32, u32) = (1, 12);
}
