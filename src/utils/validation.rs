// file: src/utils/validation.rs
// description: form and upload validation helpers
// reference: input validation patterns

use crate::error::{Result, WorkflowError};
use crate::utils::patterns::{FILE_NAME_UNSAFE, ISO_DATE, WHITESPACE_RUN};
use std::path::Path;

pub struct Validator;

impl Validator {
    /// Collects the labels of every blank field so the prompt names all of
    /// them at once.
    pub fn require_fields(fields: &[(&str, &str)]) -> Result<()> {
        let missing: Vec<&str> = fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(label, _)| *label)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(WorkflowError::missing(missing))
        }
    }

    pub fn parse_in_range(field: &str, value: &str, min: u32, max: u32) -> Result<u32> {
        let out_of_range = || WorkflowError::OutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            min,
            max,
        };

        let parsed: u32 = value.trim().parse().map_err(|_| out_of_range())?;
        if parsed < min || parsed > max {
            return Err(out_of_range());
        }
        Ok(parsed)
    }

    pub fn validate_date(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();
        let valid = ISO_DATE.is_match(trimmed)
            && chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").is_ok();

        if !valid {
            return Err(WorkflowError::InvalidInput {
                field: field.to_string(),
                message: format!("expected a YYYY-MM-DD date, got {}", value),
            });
        }
        Ok(())
    }

    pub fn validate_upload_extension(path: &Path, accepted: &[String]) -> Result<()> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match extension {
            Some(ext) if accepted.iter().any(|a| a.eq_ignore_ascii_case(&ext)) => Ok(()),
            _ => Err(WorkflowError::UnsupportedFile {
                path: path.to_path_buf(),
                accepted: accepted
                    .iter()
                    .map(|a| format!(".{}", a))
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }

    /// Makes user input safe to embed in a download file name.
    pub fn sanitize_file_component(value: &str) -> String {
        let stripped = FILE_NAME_UNSAFE.replace_all(value.trim(), "");
        WHITESPACE_RUN.replace_all(&stripped, "_").into_owned()
    }
}
