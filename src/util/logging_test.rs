use super::*;
use tempfile::TempDir;

// The global logger can only be installed once per process, so the whole
// lifecycle is covered by a single test.
#[test]
fn test_file_logging_then_second_init_fails() {
    let temp_dir = TempDir::new().unwrap();
    let log_dir = temp_dir.path().join("logs");

    let path = init_logging(LevelFilter::Debug, Some(&log_dir), false)
        .unwrap()
        .unwrap();
    assert_eq!(path, log_dir.join(LOG_FILE_NAME));

    crate::info!("hello from the logging test");
    log::logger().flush();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("hello from the logging test"));
    assert!(content.contains("INFO"));

    let second = init_logging(LevelFilter::Info, None, false);
    assert!(matches!(second, Err(LoggingError::AlreadyInitialized(_))));
}
