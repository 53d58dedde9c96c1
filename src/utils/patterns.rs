// file: src/utils/patterns.rs
// description: compiled regex patterns for form input and export file names
// reference: https://docs.rs/regex

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Effective dates as entered in a date picker
    pub static ref ISO_DATE: Regex = Regex::new(
        r"^\d{4}-(0[1-9]|1[0-2])-(0[1-9]|[12]\d|3[01])$"
    ).expect("ISO_DATE regex is valid");

    // Anything that should not end up in a download file name
    pub static ref FILE_NAME_UNSAFE: Regex = Regex::new(
        r#"[\\/:*?"<>|\x00-\x1f]+"#
    ).expect("FILE_NAME_UNSAFE regex is valid");

    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).expect("WHITESPACE_RUN regex is valid");
}
