// SPDX-License-Identifier: MPL-2.0
//! `iced_folio` is a full-screen section navigator built with the Iced GUI framework.
//!
//! The window shows one full-viewport section at a time and slides between
//! them on wheel, touch, keyboard, nav link and indicator dot input. The
//! navigation logic in [`navigator`] is independent of the GUI and drives
//! anything implementing [`navigator::VisualPanel`].

#![doc(html_root_url = "https://docs.rs/iced_folio/0.1.0")]

pub mod app;
pub mod error;
pub mod navigator;
pub mod ui;

#[cfg(test)]
mod test_utils;
