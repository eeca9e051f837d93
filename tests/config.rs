// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;
use tempfile::tempdir;
use toast_surface::config::{self, Config, MAX_LIFETIME_MS};
use toast_surface::notifications::{Bus, BusSettings, ManualScheduler, Surface, ToastRequest};

#[test]
fn saved_lifetime_drives_bus_default() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let mut saved = Config::default();
    saved.notifications.default_lifetime_ms = Some(2500);
    config::save_with_override(&saved, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, saved);

    let bus = Bus::with_settings(BusSettings::from(&loaded.notifications));
    let clock = ManualScheduler::new();
    let mut surface = Surface::mount(&bus, clock.clone());
    bus.publish(ToastRequest::success("Saved"));

    assert!(clock.advance(Duration::from_millis(2499)).is_empty());
    for id in clock.advance(Duration::from_millis(1)) {
        assert!(surface.expire(id));
    }
    assert!(!surface.has_notifications());
}

#[test]
fn out_of_range_lifetime_is_clamped() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(
        dir.path().join("settings.toml"),
        "[notifications]\ndefault_lifetime_ms = 999999999\n",
    )
    .expect("Failed to write config file");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));

    assert!(warning.is_none());
    assert_eq!(
        loaded.notifications.default_lifetime(),
        Duration::from_millis(MAX_LIFETIME_MS)
    );
}

#[test]
fn missing_file_yields_defaults_without_warning() {
    let dir = tempdir().expect("Failed to create temporary directory");

    let (loaded, warning) = config::load_with_override(Some(dir.path().join("absent")));

    assert!(warning.is_none());
    assert_eq!(loaded, Config::default());
}
