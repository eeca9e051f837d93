// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting one notification surface.
//!
//! The `App` owns the bus, the mounted surface and the diagnostics
//! collector. Buttons stand in for the producers of a real frontend (form
//! handlers, API error handlers); each publishes on the bus exactly as those
//! producers would.

mod message;
mod view;

pub use message::{Flags, Message, Sample};

use crate::config;
use crate::diagnostics::DiagnosticsCollector;
use crate::notifications::{Bus, BusSettings, Surface, TaskScheduler, ToastRequest};
use iced::{window, Element, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    bus: Bus,
    surface: Surface<TaskScheduler>,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("bus", &self.bus)
            .field("surface", &self.surface)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 720;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires `Fn` for boot; flags are consumed on the first call only.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl App {
    /// Loads configuration, mounts the surface and reports any config
    /// problem as a warning toast.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, warning) = match flags.config_dir {
            Some(dir) => config::load_with_override(Some(PathBuf::from(dir))),
            None => config::load(),
        };
        if let Some(lifetime_ms) = flags.lifetime_ms {
            config.notifications.default_lifetime_ms = Some(lifetime_ms);
        }

        let mut app = Self::with_config(&config);
        if let Some(warning) = warning {
            eprintln!("{warning}");
            app.bus
                .publish(ToastRequest::warning("Settings not loaded").with_description(warning));
        }
        let task = app.flush();
        (app, task)
    }

    /// Builds the application state from an already loaded configuration.
    #[must_use]
    pub fn with_config(config: &config::Config) -> Self {
        let diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());
        let bus = Bus::with_settings(BusSettings::from(&config.notifications))
            .with_diagnostics(diagnostics.handle());
        let surface = Surface::mount(&bus, TaskScheduler::new())
            .with_diagnostics(diagnostics.handle());

        Self {
            bus,
            surface,
            diagnostics,
        }
    }

    /// A producer handle for code outside the app.
    #[must_use]
    pub fn bus(&self) -> Bus {
        self.bus.clone()
    }

    fn title(&self) -> String {
        match self.surface.visible_count() {
            0 => "Toast Surface".to_string(),
            n => format!("Toast Surface ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Toast(toast_message) => self.surface.update(toast_message),
            Message::Publish(sample) => self.bus.publish(sample.request()),
        }
        self.flush()
    }

    /// Drains diagnostics and hands new countdowns to the runtime.
    fn flush(&mut self) -> Task<Message> {
        self.diagnostics.process_pending();
        self.surface.take_tasks().map(Message::Toast)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            surface: &self.surface,
            default_lifetime_ms: self.bus.settings().default_lifetime.as_millis(),
            logged_events: self.diagnostics.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, RemovalReason};
    use crate::notifications::{Category, SurfaceMessage};
    use std::fs;
    use tempfile::tempdir;

    fn app() -> App {
        App::with_config(&config::Config::default())
    }

    #[test]
    fn publish_message_shows_toast() {
        let mut app = app();

        let _ = app.update(Message::Publish(Sample::EventCreated));

        let visible = app.surface.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category(), Category::Success);
        assert_eq!(app.title(), "Toast Surface (1)");
    }

    #[test]
    fn dismiss_message_removes_toast() {
        let mut app = app();
        let _ = app.update(Message::Publish(Sample::SignInFailed));
        let id = app.surface.visible()[0].id();

        let _ = app.update(Message::Toast(SurfaceMessage::Dismiss(id)));

        assert!(!app.surface.has_notifications());
        assert_eq!(app.title(), "Toast Surface");
    }

    #[test]
    fn late_expiry_after_dismiss_is_ignored() {
        let mut app = app();
        let _ = app.update(Message::Publish(Sample::ProfileIncomplete));
        let id = app.surface.visible()[0].id();

        let _ = app.update(Message::Toast(SurfaceMessage::Dismiss(id)));
        let _ = app.update(Message::Toast(SurfaceMessage::Expired(id)));

        let removals = app
            .diagnostics
            .events()
            .filter(|e| matches!(e.kind, DiagnosticEventKind::Removed { .. }))
            .count();
        assert_eq!(removals, 1);
        assert!(app.diagnostics.events().any(|e| e.kind
            == DiagnosticEventKind::Removed {
                id,
                reason: RemovalReason::Dismissed,
            }));
    }

    #[test]
    fn external_producers_reach_the_surface() {
        let app = app();
        app.bus().publish(ToastRequest::info("From elsewhere"));
        assert_eq!(app.surface.visible_count(), 1);
    }

    #[test]
    fn new_applies_lifetime_flag() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let flags = Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            lifetime_ms: Some(2000),
        };

        let (app, _task) = App::new(flags);

        assert_eq!(
            app.bus.settings().default_lifetime,
            std::time::Duration::from_millis(2000)
        );
        assert!(!app.surface.has_notifications());
    }

    #[test]
    fn new_reports_broken_config_as_warning_toast() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join("settings.toml"), "[notifications")
            .expect("failed to write config");
        let flags = Flags {
            config_dir: Some(temp_dir.path().to_string_lossy().into_owned()),
            lifetime_ms: None,
        };

        let (app, _task) = App::new(flags);

        let visible = app.surface.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category(), Category::Warning);
        assert_eq!(visible[0].title(), "Settings not loaded");
    }
}
