use super::*;
use crate::store::MemoryStore;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_round_trips_names() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse(Theme::Light.as_str()), Some(Theme::Light));
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn theme_toggles() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
}

#[test]
fn unset_theme_follows_system() {
    let prefs = Preferences::load(&MemoryStore::new());
    assert_eq!(prefs.theme, None);
    assert_eq!(prefs.effective_theme(true), Theme::Dark);
    assert_eq!(prefs.effective_theme(false), Theme::Light);
}

#[test]
fn stored_theme_overrides_system() {
    let mut store = MemoryStore::new();
    let mut prefs = Preferences::default();
    prefs.set_theme(&mut store, Theme::Light).unwrap();
    let loaded = Preferences::load(&store);
    assert_eq!(loaded.effective_theme(true), Theme::Light);
}

// =============================================================
// Font size
// =============================================================

#[test]
fn default_font_is_sixteen() {
    assert_eq!(FontScale::default().px(), 16);
    assert_eq!(FontScale::default().label(), "Normal");
}

#[test]
fn font_increase_clamps_at_largest() {
    let mut scale = FontScale::default();
    for _ in 0..10 {
        scale = scale.step(FontStep::Increase);
    }
    assert_eq!(scale.px(), 24);
}

#[test]
fn font_decrease_clamps_at_smallest() {
    let mut scale = FontScale::default();
    for _ in 0..10 {
        scale = scale.step(FontStep::Decrease);
    }
    assert_eq!(scale.px(), 14);
}

#[test]
fn font_reset_returns_sixteen() {
    let scale = FontScale::from_px(22).unwrap().step(FontStep::Reset);
    assert_eq!(scale.px(), 16);
}

#[test]
fn font_from_px_rejects_off_scale_values() {
    assert!(FontScale::from_px(15).is_none());
    assert!(FontScale::from_px(20).is_some());
}

#[test]
fn step_font_persists_px() {
    let mut store = MemoryStore::new();
    let mut prefs = Preferences::default();
    let scale = prefs.step_font(&mut store, FontStep::Increase).unwrap();
    assert_eq!(scale.px(), 18);
    assert_eq!(store.get(FONT_SIZE_KEY).unwrap(), Some("18".to_owned()));
    assert_eq!(Preferences::load(&store).font.px(), 18);
}

#[test]
fn off_scale_stored_font_falls_back() {
    let mut store = MemoryStore::new();
    store.set(FONT_SIZE_KEY, "17").unwrap();
    assert_eq!(Preferences::load(&store).font.px(), 16);
    store.set(FONT_SIZE_KEY, "large").unwrap();
    assert_eq!(Preferences::load(&store).font.px(), 16);
}

// =============================================================
// High contrast
// =============================================================

#[test]
fn high_contrast_toggle_persists() {
    let mut store = MemoryStore::new();
    let mut prefs = Preferences::load(&store);
    assert!(!prefs.high_contrast);
    assert!(prefs.toggle_high_contrast(&mut store).unwrap());
    assert!(Preferences::load(&store).high_contrast);
    assert!(!prefs.toggle_high_contrast(&mut store).unwrap());
    assert!(!Preferences::load(&store).high_contrast);
}

#[test]
fn preferences_are_independent() {
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "neon").unwrap();
    store.set(HIGH_CONTRAST_KEY, "true").unwrap();
    let prefs = Preferences::load(&store);
    assert_eq!(prefs.theme, None);
    assert!(prefs.high_contrast);
}
