// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Notifications**: Toast lifetime bounds
//! - **Diagnostics**: Event buffer capacity bounds

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays visible before it auto-dismisses.
pub const DEFAULT_LIFETIME_MS: u64 = 4000;

/// Shortest default lifetime accepted from the config file.
pub const MIN_LIFETIME_MS: u64 = 500;

/// Longest default lifetime accepted from the config file.
pub const MAX_LIFETIME_MS: u64 = 60_000;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 1000;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 100;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_LIFETIME_MS > 0);
    assert!(MAX_LIFETIME_MS >= MIN_LIFETIME_MS);
    assert!(DEFAULT_LIFETIME_MS >= MIN_LIFETIME_MS);
    assert!(DEFAULT_LIFETIME_MS <= MAX_LIFETIME_MS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
};
