//! Token persistence through the configured session path

use std::sync::Arc;

use benevits::egui_app::{Config, FileSessionStore, SessionStore};
use benevits::shared::config::AppConfig;

#[test]
fn test_session_file_under_configured_dir() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::with_builder(AppConfig::builder().session_dir(dir.path()).session_service("test.service")).unwrap();

    let path = config.session_path().unwrap();
    assert_eq!(path, dir.path().join("test.service.json"));

    let store: Arc<dyn SessionStore> = Arc::new(FileSessionStore::new(&path));
    store.save_token("abc").unwrap();
    assert!(path.exists());
    assert!(store.has_active_session());

    store.logout();
    assert!(!store.has_active_session());
}
