// SPDX-License-Identifier: MPL-2.0
//! Shared user interface infrastructure.
//!
//! - [`tokens`] - Design system constants (colors, spacing, sizing)

pub mod tokens;
