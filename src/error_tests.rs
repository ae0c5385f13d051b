//! Tests for AutosuggestError type

use super::*;

#[test]
fn test_config_error_display() {
    let error = AutosuggestError::Config("expected `=`".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid configuration"));
    assert!(msg.contains("expected `=`"));
}

#[test]
fn test_invalid_data_error_display() {
    let error = AutosuggestError::InvalidData("missing field `name`".to_string());
    let msg = error.to_string();
    assert!(msg.contains("Invalid suggestion data"));
    assert!(msg.contains("missing field `name`"));
}

#[test]
fn test_io_error_display() {
    let error = AutosuggestError::Io("file not found".to_string());
    let msg = error.to_string();
    assert!(msg.contains("IO error"));
    assert!(msg.contains("file not found"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = AutosuggestError::from(io_err);
    assert!(matches!(err, AutosuggestError::Io(_)));
    assert!(err.to_string().contains("test error"));
}

#[test]
fn test_error_equality() {
    let err1 = AutosuggestError::Io("test".to_string());
    let err2 = AutosuggestError::Io("test".to_string());
    let err3 = AutosuggestError::Io("different".to_string());

    assert_eq!(err1, err2);
    assert_ne!(err1, err3);
}

#[test]
fn test_all_error_variants_are_cloneable() {
    let errors = vec![
        AutosuggestError::Config("test".to_string()),
        AutosuggestError::InvalidData("test".to_string()),
        AutosuggestError::Io("test".to_string()),
    ];

    for error in errors {
        let cloned = error.clone();
        assert_eq!(error, cloned);
    }
}
