//! Build-time endpoint configuration. There are no config files and no
//! environment variables; these URLs are fixed at compile time.

use pavilion_engine::EngineConfig;

/// Published spreadsheet export (CSV) backing the project listing.
pub const SHEET_EXPORT_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vT0dQeJcMruapRGG9OQYg-PdGlcO6vFYlCSBXQIg7zUK-hV5Ekjv9KDjUyXtJGGJgYcQn0rYMDnvXGV/pub?output=csv";

/// Externally hosted contact form; field identifiers live in the engine.
pub const CONTACT_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSe33ccrXB8T1h_p6Igb9we1jPr3M1Sy-YbJClcQamrxTBTa5g/formResponse";

/// Externally hosted careers application form.
pub const CAREERS_FORM_URL: &str = "https://docs.google.com/forms/d/e/1FAIpQLSf_wF1hDbVAm_zZpsBlB292qDD_FyulolP1EuZvLtJtGNt9fw/formResponse";

pub fn engine_config() -> EngineConfig {
    EngineConfig::new(SHEET_EXPORT_URL, CONTACT_FORM_URL, CAREERS_FORM_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_time_endpoints_parse() {
        engine_config().validate().expect("endpoints must be valid URLs");
    }
}
