//! Property-based tests for preference persistence.

use std::path::PathBuf;

use arkbrowser::services::settings_store::{load_preferences, save_preferences, JsonSettingsStore};
use arkbrowser::services::sqlite_store::SqliteSettingsStore;
use arkbrowser::types::settings::Preferences;
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_preferences() -> impl Strategy<Value = Preferences> {
    (
        any::<bool>(),
        any::<bool>(),
        any::<bool>(),
        "https://[a-z]{3,12}\\.(com|org)/[a-z]{0,8}",
        "/[a-z]{1,8}(/[a-z]{1,8}){0,2}",
    )
        .prop_map(|(dark_mode, ad_blocker, cursor_lock, home_page, dir)| Preferences {
            dark_mode,
            ad_blocker,
            cursor_lock,
            home_page,
            download_dir: PathBuf::from(dir),
        })
}

// **Property 5: Preferences survive a restart**
//
// *For any* preferences, saving them and reopening the store file SHALL load
// the same preferences.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn json_preferences_survive_reopen(prefs in arb_preferences()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        {
            let mut store = JsonSettingsStore::open(&path);
            save_preferences(&mut store, &prefs).unwrap();
        }
        let reopened = JsonSettingsStore::open(&path);
        prop_assert_eq!(load_preferences(&reopened), prefs);
    }

    #[test]
    fn sqlite_preferences_survive_reopen(prefs in arb_preferences()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.db");
        {
            let mut store = SqliteSettingsStore::open(&path).unwrap();
            save_preferences(&mut store, &prefs).unwrap();
        }
        let reopened = SqliteSettingsStore::open(&path).unwrap();
        prop_assert_eq!(load_preferences(&reopened), prefs);
    }
}
