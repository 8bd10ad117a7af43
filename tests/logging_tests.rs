use article_tldr::setup_logging;

#[test]
fn test_logging_setup() {
    let result = std::panic::catch_unwind(|| {
        setup_logging();
    });
    assert!(result.is_ok(), "setup_logging function should not panic");
}

#[test]
fn test_logging_setup_is_idempotent() {
    // A second global subscriber install must be ignored, not panic.
    let result = std::panic::catch_unwind(|| {
        setup_logging();
        setup_logging();
    });
    assert!(result.is_ok(), "repeated setup_logging calls should not panic");
}
