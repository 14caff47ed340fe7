//! Unit tests for the ShortcutManager public API.
//!
//! These tests exercise default bindings, registration and conflict
//! detection, key event matching as reported by book pages, and the
//! derived set of keys the page script must intercept.

use rstest::rstest;

use firstlife_reader::managers::shortcut_manager::{ShortcutManager, ShortcutManagerTrait};

#[test]
fn test_defaults_registered_on_creation() {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.list_shortcuts().len(), 3);
    assert_eq!(mgr.get_shortcut("toc_close"), Some("Escape"));
    assert!(mgr.get_shortcut("font_increase").is_some());
    assert!(mgr.get_shortcut("font_decrease").is_some());
}

#[test]
fn test_register_new_shortcut() {
    let mut mgr = ShortcutManager::new();
    mgr.register_shortcut("toc_toggle", "Ctrl+t").unwrap();
    // has_conflict adapts modifiers the same way register does, so this
    // holds on every platform.
    assert_eq!(mgr.has_conflict("Ctrl+t", None), Some("toc_toggle".to_string()));
}

#[test]
fn test_register_empty_keys_rejected() {
    let mut mgr = ShortcutManager::new();
    let result = mgr.register_shortcut("toc_toggle", "");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Invalid shortcut keys"));
}

#[test]
fn test_register_conflicting_keys_rejected() {
    let mut mgr = ShortcutManager::new();
    let result = mgr.register_shortcut("toc_toggle", "Escape");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("toc_close"));
}

#[test]
fn test_rebind_same_action_is_not_a_conflict() {
    let mut mgr = ShortcutManager::new();
    // Re-registering an action with its own keys should succeed
    assert!(mgr.register_shortcut("toc_close", "Escape").is_ok());
}

#[test]
fn test_unregister_removes_binding() {
    let mut mgr = ShortcutManager::new();
    mgr.unregister_shortcut("font_increase").unwrap();
    assert_eq!(mgr.get_shortcut("font_increase"), None);
    assert_eq!(mgr.match_event("=", true, false), None);
}

#[test]
fn test_unregister_unknown_action_returns_error() {
    let mut mgr = ShortcutManager::new();
    let result = mgr.unregister_shortcut("open_portal");
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("open_portal"));
}

#[test]
fn test_reset_to_defaults_restores_bindings() {
    let mut mgr = ShortcutManager::new();
    mgr.unregister_shortcut("toc_close").unwrap();
    mgr.register_shortcut("toc_toggle", "Ctrl+t").unwrap();

    mgr.reset_to_defaults().unwrap();
    assert_eq!(mgr.list_shortcuts().len(), 3);
    assert_eq!(mgr.get_shortcut("toc_close"), Some("Escape"));
    assert_eq!(mgr.get_shortcut("toc_toggle"), None);
}

// ─── Key event matching ───

#[rstest]
#[case("=", true, false, Some("font_increase"))]
#[case("=", false, true, Some("font_increase"))]
#[case("+", true, false, Some("font_increase"))]
#[case("+", false, true, Some("font_increase"))]
#[case("-", true, false, Some("font_decrease"))]
#[case("-", false, true, Some("font_decrease"))]
#[case("Escape", false, false, Some("toc_close"))]
#[case("Escape", true, false, Some("toc_close"))]
#[case("=", false, false, None)]
#[case("+", false, false, None)]
#[case("-", false, false, None)]
#[case("q", true, false, None)]
#[case("0", true, false, None)]
fn test_match_event(
    #[case] key: &str,
    #[case] ctrl: bool,
    #[case] meta: bool,
    #[case] expected: Option<&str>,
) {
    let mgr = ShortcutManager::new();
    assert_eq!(mgr.match_event(key, ctrl, meta).as_deref(), expected);
}

#[test]
fn test_match_event_ignores_unbound_actions() {
    let mut mgr = ShortcutManager::new();
    mgr.unregister_shortcut("toc_close").unwrap();
    assert_eq!(mgr.match_event("Escape", false, false), None);
}

// ─── Intercepted keys ───

#[test]
fn test_intercepted_keys_cover_both_font_chords() {
    let mgr = ShortcutManager::new();
    // `=` also reports its shifted form `+`
    assert_eq!(mgr.intercepted_keys(), vec!["=", "+", "-"]);
}

#[test]
fn test_rebinding_a_font_action_moves_interception() {
    let mut mgr = ShortcutManager::new();
    mgr.register_shortcut("font_increase", "Ctrl+]").unwrap();
    let keys = mgr.intercepted_keys();
    assert!(keys.contains(&"]".to_string()));
    assert!(!keys.contains(&"=".to_string()));
    assert!(!keys.contains(&"+".to_string()));
    assert!(keys.contains(&"-".to_string()));
}

#[test]
fn test_intercepted_keys_empty_after_unbinding_font_actions() {
    let mut mgr = ShortcutManager::new();
    mgr.unregister_shortcut("font_increase").unwrap();
    mgr.unregister_shortcut("font_decrease").unwrap();
    assert!(mgr.intercepted_keys().is_empty());
}
