use super::*;

fn lookup_with(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
    move |key| {
        assert_eq!(key, API_BASE_URL_ENV);
        value.map(str::to_owned)
    }
}

#[test]
fn from_lookup_defaults_to_localhost() {
    let cfg = ConsoleConfig::from_lookup(lookup_with(None)).unwrap();
    assert_eq!(cfg.api_base_url, DEFAULT_API_BASE_URL);
    assert_eq!(cfg, ConsoleConfig::default());
}

#[test]
fn from_lookup_trims_trailing_slash_and_whitespace() {
    let cfg = ConsoleConfig::from_lookup(lookup_with(Some(" https://events.example.test/ "))).unwrap();
    assert_eq!(cfg.api_base_url, "https://events.example.test");
}

#[test]
fn from_lookup_allows_empty_same_origin() {
    let cfg = ConsoleConfig::from_lookup(lookup_with(Some(""))).unwrap();
    assert_eq!(cfg, ConsoleConfig::same_origin());
}

#[test]
fn from_lookup_rejects_non_http_scheme() {
    let err = ConsoleConfig::from_lookup(lookup_with(Some("ftp://files.test"))).unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidBaseUrl { var: API_BASE_URL_ENV, value: "ftp://files.test".to_owned() }
    );
}
