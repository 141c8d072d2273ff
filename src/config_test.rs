use super::*;

#[test]
fn default_targets_local_backend() {
    let cfg = WidgetConfig::default();
    assert_eq!(cfg.base_url, DEFAULT_BASE_URL);
    assert_eq!(
        cfg.timeouts,
        HttpTimeouts { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    );
    assert_eq!(cfg.initial_mode, Mode::Mentor);
    assert!(cfg.documents_enabled);
}

#[test]
fn new_trims_trailing_slashes() {
    let cfg = WidgetConfig::new("http://127.0.0.1:8080//").unwrap();
    assert_eq!(cfg.base_url, "http://127.0.0.1:8080");
}

#[test]
fn new_rejects_garbage() {
    let err = WidgetConfig::new("not a url").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidBaseUrl(_)));
}

#[test]
fn new_rejects_non_http_scheme() {
    let err = WidgetConfig::new("ftp://example.test").unwrap_err().to_string();
    assert!(err.contains("unsupported scheme 'ftp'"));
}

#[test]
fn endpoint_joins_with_single_slash() {
    let cfg = WidgetConfig::new("http://example.test/api/").unwrap();
    assert_eq!(cfg.endpoint("/ask"), "http://example.test/api/ask");
    assert_eq!(cfg.endpoint("upload_pdf"), "http://example.test/api/upload_pdf");
}

#[test]
fn builders_override_fields() {
    let cfg = WidgetConfig::default()
        .with_timeouts(HttpTimeouts { request_secs: 5, connect_secs: 1 })
        .with_initial_mode(Mode::Pdf)
        .with_documents_enabled(false);
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 5, connect_secs: 1 });
    assert_eq!(cfg.initial_mode, Mode::Pdf);
    assert!(!cfg.documents_enabled);
}
