// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! - [`toast`] - The toast banner, its lifecycle and its Iced overlay
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod toast;
