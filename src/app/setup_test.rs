use super::*;
use crate::dictionary::LookupResult;
use crate::events::NoopEventEmitter;
use tempfile::TempDir;

fn cli_with_settings(path: PathBuf) -> Cli {
    Cli {
        settings: Some(path),
        ..Cli::default()
    }
}

#[test]
fn test_settings_file_is_read() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"dictionaryPath": "words.json", "recentLimit": 5}"#).unwrap();

    let (settings, error) = load_settings(&cli_with_settings(path));

    assert!(error.is_none());
    assert_eq!(settings.dictionary_path, PathBuf::from("words.json"));
    assert_eq!(settings.recent_limit, 5);
}

#[test]
fn test_broken_settings_fall_back_to_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, "{").unwrap();

    let (settings, error) = load_settings(&cli_with_settings(path));

    assert!(matches!(error, Some(SettingsError::Parse(_, _))));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_flags_win_over_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("settings.json");
    std::fs::write(&path, r#"{"dictionaryPath": "words.json"}"#).unwrap();
    let cli = Cli {
        dict: Some(PathBuf::from("other.json")),
        no_duplicate_check: true,
        ..cli_with_settings(path)
    };

    let (settings, _) = load_settings(&cli);

    assert_eq!(settings.dictionary_path, PathBuf::from("other.json"));
    assert!(!settings.duplicate_check);
}

#[test]
fn test_build_store_follows_settings() {
    let temp_dir = TempDir::new().unwrap();
    let settings = Settings {
        dictionary_path: temp_dir.path().join("dic.json"),
        duplicate_check: false,
        ..Settings::default()
    };

    let mut store = build_store(&settings, Arc::new(NoopEventEmitter));
    store.insert("猫", "cat", &mut |_: &str, _: &str| false).unwrap();
    store.insert("貓", "cat", &mut |_: &str, _: &str| false).unwrap();

    assert_eq!(store.path(), settings.dictionary_path.as_path());
    assert!(matches!(
        store.lookup("貓"),
        Some(LookupResult::Found { .. })
    ));
}
