// SPDX-License-Identifier: MPL-2.0
use iced_bell::app::config::{self, Config, GeneralConfig};
use iced_bell::domain::notification::{Notification, NotificationKind};
use iced_bell::i18n::fluent::I18n;
use iced_bell::state::{Filter, ListKind, NotificationCenter};
use iced_bell::ui::item::Elapsed;
use chrono::{Duration, Utc};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    std::fs::write(&temp_config_file_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("page-filter-unread"), "Unread");

    // 2. Change config to ko
    std::fs::write(&temp_config_file_path, "[general]\nlanguage = \"ko\"\n")
        .expect("Failed to write korean config file");

    let loaded_korean_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load korean config from path");
    assert_eq!(loaded_korean_config.general.language.as_deref(), Some("ko"));
    let i18n_ko = I18n::new(None, &loaded_korean_config);
    assert_eq!(i18n_ko.current_locale().to_string(), "ko");
    assert_eq!(i18n_ko.tr("page-filter-unread"), "읽지 않음");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn cli_language_overrides_config() {
    let config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    let i18n = I18n::new(Some("ko".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "ko");
}

#[test]
fn corrupt_config_falls_back_with_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("settings.toml"), "[server\nbase_url =").expect("write");

    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert_eq!(warning.as_deref(), Some(config::LOAD_WARNING_KEY));
}

#[test]
fn missing_config_loads_defaults_silently() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let (config, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(config, Config::default());
    assert!(warning.is_none());
}

#[test]
fn every_key_exists_in_both_locales() {
    let keys = [
        "window-title",
        "home-title",
        "home-hint",
        "bell-label",
        "dropdown-title",
        "dropdown-mark-all-read",
        "dropdown-empty",
        "dropdown-view-all",
        "list-loading",
        "list-failed",
        "list-retry",
        "notification-delete",
        "page-back",
        "page-title",
        "page-filter-all",
        "page-filter-unread",
        "page-empty",
        "page-empty-unread",
        "elapsed-just-now",
        "sign-in-title",
        "sign-in-description",
        "sign-in-retry",
        "toast-config-load-error",
        "toast-stream-closed",
        "toast-stream-malformed",
        "toast-all-read",
        "error-api-unauthorized",
        "error-api-status",
        "error-api-network",
        "error-api-decode",
        "error-api-invalid-url",
        "error-api-setup",
    ];
    for lang in ["en-US", "ko"] {
        let i18n = I18n::new(Some(lang.to_string()), &Config::default());
        for key in keys {
            let text = i18n.tr(key);
            assert!(!text.starts_with("MISSING:"), "{lang} lacks {key}");
        }
    }
}

#[test]
fn elapsed_labels_are_localized() {
    let now = Utc::now();
    let en = I18n::new(Some("en-US".to_string()), &Config::default());
    let ko = I18n::new(Some("ko".to_string()), &Config::default());

    let three_hours = Elapsed::between(now - Duration::hours(3), now);
    assert_eq!(three_hours.label(&en), "3 hours ago");
    assert_eq!(three_hours.label(&ko), "3시간 전");
}

#[test]
fn streamed_records_reach_both_lists_respecting_page_filter() {
    let mut center = NotificationCenter::new();
    let ticket = center.begin_load(ListKind::Page, Filter::UnreadOnly);
    assert!(center.finish_load(ListKind::Page, ticket, Ok(Vec::new())));

    let mut read = Notification::new("r", NotificationKind::System, "t", "m", Utc::now());
    read.mark_read();
    center.deliver(read);
    center.deliver(Notification::new(
        "u",
        NotificationKind::System,
        "t",
        "m",
        Utc::now(),
    ));

    let page: Vec<&str> = center
        .list(ListKind::Page)
        .iter()
        .map(|n| n.id.as_str())
        .collect();
    assert_eq!(page, vec!["u"]);
    assert_eq!(center.list(ListKind::Dropdown).len(), 2);
}
