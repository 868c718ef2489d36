use pretty_assertions::assert_eq;
use shared_ui::theme::{ThemeMode, THEME_STORAGE_KEY};

#[test]
fn storage_key_is_stable() {
    // Persisted preferences from earlier sessions must keep resolving.
    assert_eq!(THEME_STORAGE_KEY, "acadix.theme");
}

#[test]
fn stored_key_from_a_previous_session_restores_the_same_mode() {
    for mode in [ThemeMode::Light, ThemeMode::Dark] {
        let stored = mode.as_str().to_string();
        assert_eq!(ThemeMode::from_key(&stored), mode);
    }
}

#[test]
fn corrupt_stored_value_falls_back_to_light() {
    assert_eq!(ThemeMode::from_key("sepia"), ThemeMode::Light);
}
