// SPDX-License-Identifier: MPL-2.0
//! Navigation links and their static name→section mapping.
//!
//! A link is identified by its `#name` destination. Only the names listed in
//! [`SECTION_MAP`] navigate; any other link is inert and always keeps the
//! default colour.

use super::style::{Rgb, ACCENT, LINK_DEFAULT};

/// Link destination names and the section index they jump to.
pub const SECTION_MAP: [(&str, usize); 3] = [("about", 1), ("projects", 2), ("contact", 4)];

/// Section index for a link name, if the name is mapped.
#[must_use]
pub fn section_for(name: &str) -> Option<usize> {
    SECTION_MAP
        .iter()
        .find(|(mapped, _)| *mapped == name)
        .map(|(_, index)| *index)
}

/// Strips the first `#` from a link destination (`"#about"` → `"about"`).
#[must_use]
pub fn link_name(href: &str) -> String {
    href.replacen('#', "", 1)
}

/// A navigation link and the colour it currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    href: String,
    color: Rgb,
}

impl NavLink {
    #[must_use]
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            color: LINK_DEFAULT,
        }
    }

    #[must_use]
    pub fn href(&self) -> &str {
        &self.href
    }

    #[must_use]
    pub fn name(&self) -> String {
        link_name(&self.href)
    }

    /// Section this link jumps to.
    #[must_use]
    pub fn target(&self) -> Option<usize> {
        section_for(&self.name())
    }

    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }

    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.color == ACCENT
    }
}

/// The page's navigation links, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavLinks {
    links: Vec<NavLink>,
}

impl NavLinks {
    #[must_use]
    pub fn new<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            links: hrefs.into_iter().map(NavLink::new).collect(),
        }
    }

    /// Colours links pointing at `current` with the accent and all others white.
    ///
    /// The mapping is looked up again for every link on every refresh.
    pub fn refresh(&mut self, current: usize) {
        for link in &mut self.links {
            link.color = if link.target() == Some(current) {
                ACCENT
            } else {
                LINK_DEFAULT
            };
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &NavLink> {
        self.links.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&NavLink> {
        self.links.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_names_resolve() {
        assert_eq!(section_for("about"), Some(1));
        assert_eq!(section_for("projects"), Some(2));
        assert_eq!(section_for("contact"), Some(4));
        assert_eq!(section_for("skills"), None);
        assert_eq!(section_for(""), None);
    }

    #[test]
    fn link_name_strips_first_hash_only() {
        assert_eq!(link_name("#about"), "about");
        assert_eq!(link_name("about"), "about");
        assert_eq!(link_name("#a#b"), "a#b");
    }

    #[test]
    fn refresh_highlights_links_for_current_section() {
        let mut links = NavLinks::new(["#about", "#projects", "#skills", "#contact"]);
        links.refresh(2);

        let highlighted: Vec<&str> = links
            .iter()
            .filter(|link| link.is_highlighted())
            .map(NavLink::href)
            .collect();
        assert_eq!(highlighted, vec!["#projects"]);
    }

    #[test]
    fn unmapped_link_never_highlights() {
        let mut links = NavLinks::new(["#skills"]);
        for current in 0..5 {
            links.refresh(current);
            assert_eq!(links.get(0).map(NavLink::color), Some(LINK_DEFAULT));
        }
    }

    #[test]
    fn hero_section_leaves_every_link_white() {
        let mut links = NavLinks::new(["#about", "#projects", "#contact"]);
        links.refresh(3);
        links.refresh(0);
        assert!(links.iter().all(|link| link.color() == LINK_DEFAULT));
    }
}
