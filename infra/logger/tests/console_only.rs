use szn_logger::{LevelFilter, Logger, LoggerError};

#[test]
fn console_logger_installs_once() {
    let logger = Logger::builder()
        .name("szn-console")
        .level(LevelFilter::INFO)
        .init()
        .expect("first init should succeed");
    assert!(!logger.has_file_output(), "console-only logger owns no file guard");

    let err = Logger::builder().name("szn-console-again").init().expect_err("second init fails");
    assert!(matches!(err, LoggerError::Subscriber { .. }));
}
