use flashgen::theme::{FileStore, MemoryStore, THEME_KEY, load_theme, save_theme};
use flashgen::{KeyValueStore, Theme};

#[test]
fn test_theme_strings() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert!("purple".parse::<Theme>().is_err());
}

#[test]
fn test_toggle() {
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
}

#[test]
fn test_unset_theme_follows_system_preference() {
    let store = MemoryStore::new();
    assert_eq!(load_theme(&store, Some(Theme::Dark)), Theme::Dark);
    assert_eq!(load_theme(&store, Some(Theme::Light)), Theme::Light);
    assert_eq!(load_theme(&store, None), Theme::Light);
}

#[test]
fn test_stored_theme_wins_over_system() {
    let mut store = MemoryStore::new();
    save_theme(&mut store, Theme::Dark).unwrap();
    assert_eq!(store.get(THEME_KEY).as_deref(), Some("dark"));
    assert_eq!(load_theme(&store, Some(Theme::Light)), Theme::Dark);
}

#[test]
fn test_invalid_stored_value_falls_back() {
    let mut store = MemoryStore::new();
    store.set(THEME_KEY, "sepia").unwrap();
    assert_eq!(load_theme(&store, Some(Theme::Dark)), Theme::Dark);
}

#[test]
fn test_file_store_persists_across_opens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("settings.json");

    let mut store = FileStore::open(&path);
    assert_eq!(load_theme(&store, None), Theme::Light);
    save_theme(&mut store, Theme::Dark).unwrap();

    let reopened = FileStore::open(&path);
    assert_eq!(load_theme(&reopened, Some(Theme::Light)), Theme::Dark);
}

#[test]
fn test_file_store_ignores_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "not json").unwrap();

    let store = FileStore::open(&path);
    assert_eq!(store.get(THEME_KEY), None);
}
