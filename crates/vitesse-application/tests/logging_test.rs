use tempfile::TempDir;
use vitesse_application::logging::init_logging;
use vitesse_core::config::LoggingConfig;

#[test]
fn test_file_logging_creates_daily_log() {
    let temp_dir = TempDir::new().unwrap();
    let logs_dir = temp_dir.path().join("logs");
    let config = LoggingConfig {
        level: "info".to_string(),
        file: true,
    };

    let guard = init_logging(&config, &logs_dir).unwrap();
    assert!(guard.is_some());

    tracing::info!("logging test event");
    drop(guard);

    let entries: Vec<_> = std::fs::read_dir(&logs_dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .collect();
    assert!(
        entries.iter().any(|name| name.starts_with("vitesse.log")),
        "log files: {entries:?}"
    );

    // A second global subscriber is refused.
    assert!(init_logging(&config, &logs_dir).is_err());
}
