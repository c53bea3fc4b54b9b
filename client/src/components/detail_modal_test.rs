use super::*;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    // Legacy Edge/IE key name.
    assert!(is_dismiss_key("Esc"));
}

#[test]
fn other_keys_do_not_dismiss() {
    assert!(!is_dismiss_key("Enter"));
    assert!(!is_dismiss_key(" "));
    assert!(!is_dismiss_key("escape"));
}
