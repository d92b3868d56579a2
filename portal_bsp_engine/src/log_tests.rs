use super::*;

// ============================================================================
// LogSeverity ordering
// ============================================================================

#[test]
fn test_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

// ============================================================================
// LogEntry construction
// ============================================================================

#[test]
fn test_log_entry_without_location() {
    let entry = LogEntry {
        severity: LogSeverity::Info,
        timestamp: SystemTime::now(),
        source: "portalbsp::Test".to_string(),
        message: "hello".to_string(),
        file: None,
        line: None,
    };

    assert_eq!(entry.severity, LogSeverity::Info);
    assert!(entry.file.is_none());
    assert!(entry.line.is_none());
}

#[test]
fn test_log_entry_with_location() {
    let entry = LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "portalbsp::Test".to_string(),
        message: "boom".to_string(),
        file: Some("src/scene/walker.rs"),
        line: Some(42),
    };

    assert_eq!(entry.file, Some("src/scene/walker.rs"));
    assert_eq!(entry.line, Some(42));
}

// ============================================================================
// DefaultLogger (smoke tests - output goes to stdout)
// ============================================================================

#[test]
fn test_default_logger_does_not_panic() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Debug,
        timestamp: SystemTime::now(),
        source: "portalbsp::Test".to_string(),
        message: "smoke".to_string(),
        file: None,
        line: None,
    });
}

#[test]
fn test_default_logger_with_location_does_not_panic() {
    let logger = DefaultLogger;
    logger.log(&LogEntry {
        severity: LogSeverity::Error,
        timestamp: SystemTime::now(),
        source: "portalbsp::Test".to_string(),
        message: "smoke with location".to_string(),
        file: Some("src/log.rs"),
        line: Some(1),
    });
}
