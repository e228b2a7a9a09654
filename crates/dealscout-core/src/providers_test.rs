use super::*;

fn provider(name: &str, url: &str) -> ProviderConfig {
    ProviderConfig {
        name: name.to_string(),
        url: url.to_string(),
        selectors: SelectorSet {
            card: ".deal-card".to_string(),
            title: ".deal-title".to_string(),
            price: ".deal-price".to_string(),
            departure: Some(".deal-departure".to_string()),
            link: Some("a.deal-link".to_string()),
        },
    }
}

#[test]
fn validate_accepts_valid_providers() {
    let providers_file = ProvidersFile {
        providers: vec![
            provider("Sunwing", "https://www.sunwing.ca/en/dealzone/last-minute"),
            provider("Air Transat", "https://www.airtransat.com/en-CA/last-minute-deals"),
        ],
    };
    assert!(validate_providers(&providers_file).is_ok());
}

#[test]
fn validate_rejects_empty_list() {
    let providers_file = ProvidersFile { providers: vec![] };
    let err = validate_providers(&providers_file).unwrap_err();
    assert!(err.to_string().contains("must not be empty"));
}

#[test]
fn validate_rejects_blank_name() {
    let providers_file = ProvidersFile {
        providers: vec![provider("  ", "https://example.com/deals")],
    };
    let err = validate_providers(&providers_file).unwrap_err();
    assert!(err.to_string().contains("non-empty"));
}

#[test]
fn validate_rejects_duplicate_name_case_insensitively() {
    let providers_file = ProvidersFile {
        providers: vec![
            provider("Sunwing", "https://www.sunwing.ca/a"),
            provider("sunwing", "https://www.sunwing.ca/b"),
        ],
    };
    let err = validate_providers(&providers_file).unwrap_err();
    assert!(err.to_string().contains("duplicate provider name"));
}

#[test]
fn validate_rejects_missing_scheme() {
    let providers_file = ProvidersFile {
        providers: vec![provider("Sunwing", "www.sunwing.ca/deals")],
    };
    let err = validate_providers(&providers_file).unwrap_err();
    assert!(err.to_string().contains("invalid url"));
}

#[test]
fn validate_rejects_blank_selector() {
    let mut bad = provider("Sunwing", "https://www.sunwing.ca/deals");
    bad.selectors.price = " ".to_string();
    let providers_file = ProvidersFile {
        providers: vec![bad],
    };
    let err = validate_providers(&providers_file).unwrap_err();
    assert!(err.to_string().contains("empty price selector"));
}

#[test]
fn validate_accepts_absent_optional_selectors() {
    let mut p = provider("WestJet", "https://www.westjet.com/deals");
    p.selectors.departure = None;
    p.selectors.link = None;
    let providers_file = ProvidersFile { providers: vec![p] };
    assert!(validate_providers(&providers_file).is_ok());
}

#[test]
fn providers_yaml_round_trips() {
    let yaml = r"
providers:
  - name: Sunwing
    url: https://www.sunwing.ca/en/dealzone/last-minute
    selectors:
      card: .deal-card
      title: .deal-title
      price: .deal-price
      departure: .deal-departure
      link: a.deal-link
  - name: WestJet Vacations
    url: https://www.westjet.com/en-ca/deals-packages/vacation-deals
    selectors:
      card: .package-tile
      title: .package-name
      price: .package-price
";
    let parsed: ProvidersFile = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(parsed.providers.len(), 2);
    assert!(parsed.providers[1].selectors.departure.is_none());
    assert!(parsed.providers[1].selectors.link.is_none());
    assert!(validate_providers(&parsed).is_ok());
}

#[test]
fn load_providers_reports_missing_file() {
    let err = load_providers(Path::new("/nonexistent/providers.yaml")).unwrap_err();
    assert!(matches!(err, ConfigError::FileIo { .. }));
}
