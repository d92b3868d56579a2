use super::*;
use std::sync::{Arc, Mutex};
use serial_test::serial;

/// Test logger that captures entries for inspection
struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// Logger registration
// ============================================================================

#[test]
#[serial]
fn test_set_logger_routes_messages() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: Arc::clone(&entries) });

    Engine::log(LogSeverity::Info, "portalbsp::Test", "captured".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "portalbsp::Test");
        assert_eq!(captured[0].message, "captured");
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_log_detailed_includes_location() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: Arc::clone(&entries) });

    Engine::log_detailed(
        LogSeverity::Error,
        "portalbsp::Test",
        "with location".to_string(),
        "src/engine.rs",
        7,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("src/engine.rs"));
        assert_eq!(captured[0].line, Some(7));
    }

    Engine::reset_logger();
}

#[test]
#[serial]
fn test_reset_logger_restores_default() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: Arc::clone(&entries) });
    Engine::reset_logger();

    // After reset, the capture logger must no longer receive messages
    Engine::log(LogSeverity::Info, "portalbsp::Test", "dropped".to_string());
    assert!(entries.lock().unwrap().is_empty());
}

#[test]
#[serial]
fn test_logging_macros_compile_and_dispatch() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Engine::set_logger(CaptureLogger { entries: Arc::clone(&entries) });

    crate::engine_trace!("portalbsp::Test", "trace {}", 1);
    crate::engine_debug!("portalbsp::Test", "debug {}", 2);
    crate::engine_info!("portalbsp::Test", "info {}", 3);
    crate::engine_warn!("portalbsp::Test", "warn {}", 4);
    crate::engine_error!("portalbsp::Test", "error {}", 5);

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 5);
        assert_eq!(captured[4].severity, LogSeverity::Error);
        assert!(captured[4].file.is_some());
    }

    Engine::reset_logger();
}
