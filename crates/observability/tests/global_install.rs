use tintlog_observability::{ConsoleConfig, LogError, Severity, init, try_init, try_init_with};

// The global dispatcher can only be set once per process, so this binary holds
// a single test.
#[test]
fn global_install_is_single_shot() {
    assert_eq!(
        try_init_with(ConsoleConfig::with_min_severity(Severity::Error)),
        Ok(())
    );

    let err = try_init().unwrap_err();
    assert!(matches!(err, LogError::Install(_)), "unexpected error: {err:?}");

    // Swallows the "already installed" error.
    init();

    assert!(!tracing::enabled!(tracing::Level::WARN));
    assert!(tracing::enabled!(tracing::Level::ERROR));
}
