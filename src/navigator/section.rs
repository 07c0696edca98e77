// SPDX-License-Identifier: MPL-2.0
//! Section roles and travel direction.
//!
//! The default page is made of five full-viewport panels. Their order is fixed
//! and matches the indices used by the nav-link mapping in
//! [`super::nav_links`].

/// Role of a full-viewport section panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionRole {
    Hero,
    About,
    Projects,
    Skills,
    /// Closing panel holding the blog teasers and the footer.
    Contact,
}

impl SectionRole {
    /// All roles, in display order.
    pub const ALL: [SectionRole; 5] = [
        SectionRole::Hero,
        SectionRole::About,
        SectionRole::Projects,
        SectionRole::Skills,
        SectionRole::Contact,
    ];

    /// Fluent key prefix for the section's title and body.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            SectionRole::Hero => "section-hero",
            SectionRole::About => "section-about",
            SectionRole::Projects => "section-projects",
            SectionRole::Skills => "section-skills",
            SectionRole::Contact => "section-contact",
        }
    }

    /// Position of this role in [`SectionRole::ALL`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            SectionRole::Hero => 0,
            SectionRole::About => 1,
            SectionRole::Projects => 2,
            SectionRole::Skills => 3,
            SectionRole::Contact => 4,
        }
    }
}

/// Direction of travel between two sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards higher indices. Panels move up and out of view.
    Down,
    /// Towards lower indices.
    Up,
}

impl Direction {
    /// Direction from `from` towards `to`. Equal indices count as [`Direction::Up`].
    #[must_use]
    pub fn between(from: usize, to: usize) -> Self {
        if to > from {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Wheel direction using the browser convention (positive delta scrolls down).
    #[must_use]
    pub fn from_wheel(delta_y: f32) -> Self {
        if delta_y > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }

    /// Signed unit used for viewport translations (`+1.0` or `-1.0`).
    #[must_use]
    pub fn offset(self) -> f32 {
        match self {
            Direction::Down => 1.0,
            Direction::Up => -1.0,
        }
    }

    /// Signed index step (`+1` or `-1`).
    #[must_use]
    pub fn step(self) -> isize {
        match self {
            Direction::Down => 1,
            Direction::Up => -1,
        }
    }
}

/// Where a panel currently sits relative to the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    Visible,
    HiddenAbove,
    HiddenBelow,
}
