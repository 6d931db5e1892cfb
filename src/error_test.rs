use super::*;

#[test]
fn transport_error_display_includes_cause() {
    let err = WidgetError::Transport("connection refused".to_owned());
    assert_eq!(err.to_string(), "transport error: connection refused");
}

#[test]
fn config_error_display_names_key() {
    let err = WidgetError::Config { key: "CLARITY_API_URL", reason: "bad".to_owned() };
    assert_eq!(err.to_string(), "invalid config CLARITY_API_URL: bad");
}

#[test]
fn decode_counts_as_transport_failure() {
    assert!(WidgetError::Transport(String::new()).is_transport());
    assert!(WidgetError::Decode(String::new()).is_transport());
    assert!(!WidgetError::Dom(String::new()).is_transport());
}
