// SPDX-License-Identifier: MPL-2.0
//! `simple_toast` is a transient top-of-screen notification banner built with
//! the Iced GUI framework.
//!
//! The toast attaches to the foreground container, optionally fades in,
//! reports taps and swipes to a weakly held delegate and dismisses itself on
//! a timer. A small demo application exercises it.

#![doc(html_root_url = "https://docs.rs/simple_toast/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod telemetry;
pub mod ui;
