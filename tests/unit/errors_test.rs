use firstlife_reader::types::errors::*;

// === PreferenceError Tests ===

#[test]
fn preference_error_io_display() {
    let err = PreferenceError::IoError("file not found".to_string());
    assert_eq!(err.to_string(), "Preference I/O error: file not found");
}

#[test]
fn preference_error_serialization_display() {
    let err = PreferenceError::SerializationError("malformed json".to_string());
    assert_eq!(
        err.to_string(),
        "Preference serialization error: malformed json"
    );
}

#[test]
fn preference_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(PreferenceError::IoError("disk full".to_string()));
    assert!(err.source().is_none());
}

// === ShortcutError Tests ===

#[test]
fn shortcut_error_display_variants() {
    assert_eq!(
        ShortcutError::NotFound("toc_close".to_string()).to_string(),
        "Shortcut not found for action: toc_close"
    );
    assert_eq!(
        ShortcutError::Conflict("Ctrl+= already bound to font_increase".to_string()).to_string(),
        "Shortcut conflict: Ctrl+= already bound to font_increase"
    );
    assert_eq!(
        ShortcutError::InvalidKeys("???".to_string()).to_string(),
        "Invalid shortcut keys: ???"
    );
}

// === BookPageError Tests ===

#[test]
fn book_page_error_display_variants() {
    assert_eq!(
        BookPageError::NotFound("/chapters/99.html".to_string()).to_string(),
        "Book page not found: /chapters/99.html"
    );
    assert_eq!(
        BookPageError::IoError("permission denied".to_string()).to_string(),
        "Book page I/O error: permission denied"
    );
    assert_eq!(
        BookPageError::OutsideRoot("/../etc/passwd".to_string()).to_string(),
        "Path outside book root: /../etc/passwd"
    );
}

// === Cross-cutting: all errors implement std::error::Error ===

#[test]
fn all_errors_implement_std_error() {
    // Verify each error type can be used as a trait object
    let errors: Vec<Box<dyn std::error::Error>> = vec![
        Box::new(PreferenceError::IoError("msg".to_string())),
        Box::new(ShortcutError::NotFound("action".to_string())),
        Box::new(BookPageError::NotFound("/page".to_string())),
    ];

    // All 3 error types should be present
    assert_eq!(errors.len(), 3);

    // Each error should have a non-empty display string
    for err in &errors {
        assert!(!err.to_string().is_empty());
    }
}

// === Debug trait verification ===

#[test]
fn all_errors_implement_debug() {
    // Verify Debug formatting works for each error type
    let debug_str = format!("{:?}", PreferenceError::IoError("test".to_string()));
    assert!(debug_str.contains("IoError"));

    let debug_str = format!("{:?}", ShortcutError::Conflict("test".to_string()));
    assert!(debug_str.contains("Conflict"));

    let debug_str = format!("{:?}", BookPageError::OutsideRoot("test".to_string()));
    assert!(debug_str.contains("OutsideRoot"));
}
