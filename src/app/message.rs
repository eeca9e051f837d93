// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::notifications::{SurfaceMessage, ToastRequest};

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the notification surface.
    Toast(SurfaceMessage),
    /// Simulates a producer elsewhere in the application.
    Publish(Sample),
}

/// Notifications an event-management frontend typically raises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    EventCreated,
    SignInFailed,
    ProfileIncomplete,
    SessionRefreshed,
}

impl Sample {
    pub const ALL: [Sample; 4] = [
        Sample::EventCreated,
        Sample::SignInFailed,
        Sample::ProfileIncomplete,
        Sample::SessionRefreshed,
    ];

    /// Button label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sample::EventCreated => "Create event",
            Sample::SignInFailed => "Fail sign-in",
            Sample::ProfileIncomplete => "Save partial profile",
            Sample::SessionRefreshed => "Refresh session",
        }
    }

    /// The request a real producer would publish.
    #[must_use]
    pub fn request(self) -> ToastRequest {
        match self {
            Sample::EventCreated => ToastRequest::success("Event created")
                .with_description("Attendees can now register."),
            Sample::SignInFailed => ToastRequest::error("Sign-in failed")
                .with_description("Check your email and password."),
            Sample::ProfileIncomplete => ToastRequest::warning("Profile saved with gaps"),
            Sample::SessionRefreshed => {
                ToastRequest::info("Session refreshed").with_lifetime_ms(1500)
            }
        }
    }
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `TOAST_SURFACE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Optional default lifetime override, in milliseconds.
    pub lifetime_ms: Option<u64>,
}
