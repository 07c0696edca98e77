// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern: views
//! borrow navigator state and emit messages that the app turns into navigator
//! input.
//!
//! # Layers
//!
//! - [`section_stage`] - Canvas painting the section panels
//! - [`section_surface`] - Animated panel state driven by the navigator
//! - [`navbar`] - Navigation bar with section links
//! - [`indicator_panel`] - Indicator dots with eased state changes
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod indicator_panel;
pub mod navbar;
pub mod section_stage;
pub mod section_surface;
pub mod styles;
pub mod theming;
