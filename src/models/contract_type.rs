// file: src/models/contract_type.rs
// description: contract kinds offered by the generate and review flows
// reference: internal data structures

use crate::error::WorkflowError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractType {
    Msa,
    Nda,
    Sla,
    Employment,
    Vendor,
}

impl ContractType {
    pub const ALL: [ContractType; 5] = [
        ContractType::Msa,
        ContractType::Nda,
        ContractType::Sla,
        ContractType::Employment,
        ContractType::Vendor,
    ];

    /// Kinds that have a generation template. Review accepts every kind.
    pub const TEMPLATES: [ContractType; 3] =
        [ContractType::Msa, ContractType::Nda, ContractType::Sla];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Msa => "msa",
            ContractType::Nda => "nda",
            ContractType::Sla => "sla",
            ContractType::Employment => "employment",
            ContractType::Vendor => "vendor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContractType::Msa => "Master Service Agreement (MSA)",
            ContractType::Nda => "Non-Disclosure Agreement (NDA)",
            ContractType::Sla => "Service Level Agreement (SLA)",
            ContractType::Employment => "Employment Contract",
            ContractType::Vendor => "Vendor Agreement",
        }
    }

    pub fn has_template(&self) -> bool {
        Self::TEMPLATES.contains(self)
    }
}

impl fmt::Display for ContractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContractType {
    type Err = WorkflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == wanted)
            .ok_or_else(|| WorkflowError::UnknownContractType(s.to_string()))
    }
}
