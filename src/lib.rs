// SPDX-License-Identifier: MPL-2.0
//! `toast_surface` is a toast notification subsystem for Iced applications.
//!
//! Producers anywhere in an application publish requests on a
//! [`notifications::Bus`]; a single mounted [`notifications::Surface`]
//! receives them, keeps the visible list, and removes each toast when its
//! countdown elapses or the user dismisses it.

#![doc(html_root_url = "https://docs.rs/toast_surface/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod notifications;
pub mod ui;
