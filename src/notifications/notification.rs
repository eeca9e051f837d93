// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! [`ToastRequest`] is what producers hand to the bus; [`Notification`] is
//! the record the bus builds from it once an id has been assigned.

use crate::ui::tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Ids come from a per-bus counter and are never supplied by producers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Wraps a raw counter value.
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "toast-{}", self.0)
    }
}

/// Category drives the visual treatment of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Operation completed successfully (green).
    Success,
    /// Something failed (red).
    Error,
    /// Something needs attention but did not fail (orange).
    Warning,
    /// Neutral information (blue).
    #[default]
    Info,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 4] = [
        Category::Success,
        Category::Error,
        Category::Warning,
        Category::Info,
    ];

    /// Returns the accent color for this category.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Category::Success => palette::SUCCESS_500,
            Category::Error => palette::ERROR_500,
            Category::Warning => palette::WARNING_500,
            Category::Info => palette::INFO_500,
        }
    }

    /// Returns the glyph shown in front of the title.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Category::Success => "✔",
            Category::Error => "✖",
            Category::Warning => "⚠",
            Category::Info => "ℹ",
        }
    }
}

/// A producer's request to show a toast.
///
/// The serde representation matches the payload producers exchange:
///
/// ```
/// use toast_surface::notifications::{Category, ToastRequest};
///
/// let request: ToastRequest =
///     toml::from_str("title = \"Saved\"\ncategory = \"success\"\nlifetimeMs = 1500").unwrap();
/// assert_eq!(request.category, Category::Success);
/// assert_eq!(request.lifetime_ms, Some(1500));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToastRequest {
    /// Short headline.
    pub title: String,
    /// Supporting detail.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: Category,
    /// Auto-dismiss delay. `None` or `0` means the bus default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lifetime_ms: Option<u64>,
}

impl ToastRequest {
    pub fn new(category: Category, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            category,
            lifetime_ms: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self::new(Category::Success, title)
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self::new(Category::Error, title)
    }

    pub fn warning(title: impl Into<String>) -> Self {
        Self::new(Category::Warning, title)
    }

    pub fn info(title: impl Into<String>) -> Self {
        Self::new(Category::Info, title)
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the auto-dismiss delay in milliseconds.
    #[must_use]
    pub fn with_lifetime_ms(mut self, lifetime_ms: u64) -> Self {
        self.lifetime_ms = Some(lifetime_ms);
        self
    }

    /// Sets the auto-dismiss delay, saturating at `u64::MAX` milliseconds.
    #[must_use]
    pub fn with_lifetime(self, lifetime: Duration) -> Self {
        let ms = u64::try_from(lifetime.as_millis()).unwrap_or(u64::MAX);
        self.with_lifetime_ms(ms)
    }

    /// Resolves the lifetime, substituting `default` for a missing or zero value.
    #[must_use]
    pub fn resolve_lifetime(&self, default: Duration) -> Duration {
        match self.lifetime_ms {
            Some(ms) if ms > 0 => Duration::from_millis(ms),
            _ => default,
        }
    }
}

/// A published notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    id: NotificationId,
    title: String,
    description: Option<String>,
    category: Category,
    lifetime: Duration,
}

impl Notification {
    /// Builds the record for `request` under `id`.
    ///
    /// `default_lifetime` replaces a missing or zero lifetime; it must
    /// itself be non-zero.
    #[must_use]
    pub fn from_request(id: NotificationId, request: ToastRequest, default_lifetime: Duration) -> Self {
        debug_assert!(!default_lifetime.is_zero());
        let lifetime = request.resolve_lifetime(default_lifetime);
        Self {
            id,
            title: request.title,
            description: request.description,
            category: request.category,
            lifetime,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    /// Time the notification stays visible without user interaction.
    #[must_use]
    pub fn lifetime(&self) -> Duration {
        self.lifetime
    }
}
