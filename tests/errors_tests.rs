use std::error::Error;
use folio::errors::FolioError;

#[test]
fn test_folio_error_implements_error_trait() {
    // Verify FolioError implements the Error trait
    fn assert_error<T: Error>(_: &T) {}

    let error = FolioError::ParseError("test error".to_string());
    assert_error(&error);
}

#[test]
fn test_folio_error_display() {
    let error = FolioError::QueueError("AccessDenied".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to submit message to queue: AccessDenied"
    );

    let error = FolioError::InferenceError("Model unavailable".to_string());
    assert_eq!(
        format!("{error}"),
        "Failed to generate answer: Model unavailable"
    );

    let error = FolioError::EmailError("Throttling".to_string());
    assert_eq!(format!("{error}"), "Failed to dispatch email: Throttling");
}

#[test]
fn test_folio_error_from_conversions() {
    let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
    let folio_err: FolioError = err.into();
    assert!(matches!(folio_err, FolioError::ParseError(_)));

    use base64::Engine;
    let err = base64::engine::general_purpose::STANDARD
        .decode("***")
        .unwrap_err();
    let folio_err: FolioError = err.into();
    match folio_err {
        FolioError::ParseError(msg) => assert!(msg.contains("base64")),
        _ => panic!("Unexpected error type"),
    }
}

#[test]
fn test_folio_error_converts_into_lambda_error() {
    let err = lambda_runtime::Error::from(FolioError::ConfigError("RECIPIENT_MAIL".to_string()));
    assert!(err.to_string().contains("RECIPIENT_MAIL"));
}
