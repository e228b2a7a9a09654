use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::ConfigError;

/// Named CSS queries used to locate listing fields within one vendor's page.
///
/// `departure` and `link` are optional: a vendor with no per-listing
/// departure element is treated as always departing from the traveler's home
/// city, and a vendor with no per-card link yields deals with an empty link.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectorSet {
    pub card: String,
    pub title: String,
    pub price: String,
    pub departure: Option<String>,
    pub link: Option<String>,
}

/// Static configuration for one travel vendor's deals listing page.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    pub name: String,
    pub url: String,
    pub selectors: SelectorSet,
}

#[derive(Debug, Deserialize)]
pub struct ProvidersFile {
    pub providers: Vec<ProviderConfig>,
}

/// Load and validate the provider configuration from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails
/// validation. Validation failures are fatal: they surface before any page
/// is fetched.
pub fn load_providers(path: &Path) -> Result<ProvidersFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let providers_file: ProvidersFile =
        serde_yaml::from_str(&content).map_err(|e| ConfigError::FileParse {
            path: path.display().to_string(),
            source: e,
        })?;

    validate_providers(&providers_file)?;

    Ok(providers_file)
}

fn validate_providers(providers_file: &ProvidersFile) -> Result<(), ConfigError> {
    if providers_file.providers.is_empty() {
        return Err(ConfigError::Validation(
            "provider list must not be empty".to_string(),
        ));
    }

    let mut seen_names = HashSet::new();

    for provider in &providers_file.providers {
        if provider.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "provider name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(provider.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate provider name: '{}'",
                provider.name
            )));
        }

        if !provider.url.starts_with("http://") && !provider.url.starts_with("https://") {
            return Err(ConfigError::Validation(format!(
                "provider '{}' has invalid url '{}'; must start with http:// or https://",
                provider.name, provider.url
            )));
        }

        for (field, selector) in [
            ("card", Some(&provider.selectors.card)),
            ("title", Some(&provider.selectors.title)),
            ("price", Some(&provider.selectors.price)),
            ("departure", provider.selectors.departure.as_ref()),
            ("link", provider.selectors.link.as_ref()),
        ] {
            if let Some(selector) = selector {
                if selector.trim().is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "provider '{}' has an empty {field} selector",
                        provider.name
                    )));
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "providers_test.rs"]
mod tests;
