use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// One traveler's filter profile, read once at startup and never mutated.
///
/// All text matching against listing fields is case-insensitive substring
/// matching; the values here are stored as configured.
#[derive(Debug, Clone, Deserialize)]
pub struct FilterCriteria {
    /// Per-person budget ceiling in whole Canadian dollars. Inclusive:
    /// a deal priced exactly at the budget is accepted.
    pub budget_cad: u32,
    /// Home departure city; listings departing elsewhere are rejected.
    pub departure_city: String,
    /// Resort-brand keywords; a listing title must contain at least one.
    pub keywords: Vec<String>,
    /// Destination terms that disqualify a listing outright.
    #[serde(default)]
    pub excluded_terms: Vec<String>,
}

/// Load and validate a traveler profile from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation.
pub fn load_profile(path: &Path) -> Result<FilterCriteria, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let criteria: FilterCriteria =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
            path: path.display().to_string(),
            source: e,
        })?;

    validate_profile(&criteria)?;

    Ok(criteria)
}

fn validate_profile(criteria: &FilterCriteria) -> Result<(), ConfigError> {
    if criteria.budget_cad == 0 {
        return Err(ConfigError::Validation(
            "budget_cad must be greater than zero".to_string(),
        ));
    }

    if criteria.departure_city.trim().is_empty() {
        return Err(ConfigError::Validation(
            "departure_city must be non-empty".to_string(),
        ));
    }

    if criteria.keywords.is_empty() {
        return Err(ConfigError::Validation(
            "keywords must contain at least one entry".to_string(),
        ));
    }

    if criteria.keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "keywords must not contain blank entries".to_string(),
        ));
    }

    if criteria.excluded_terms.iter().any(|t| t.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "excluded_terms must not contain blank entries".to_string(),
        ));
    }

    Ok(())
}
