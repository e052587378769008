// src/page.rs
//! Page composition: section order, layout offsets and scroll navigation.

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::chat::Navigator;

/// Height reserved for the fixed navigation bar.
pub const DEFAULT_NAVBAR_OFFSET: u32 = 80;

/// Sections the assistant may ask the page to bring into view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationTarget {
    About,
    Experience,
    Projects,
    Certifications,
    Contact,
    Education,
}

impl NavigationTarget {
    pub const ALL: [NavigationTarget; 6] = [
        NavigationTarget::About,
        NavigationTarget::Experience,
        NavigationTarget::Projects,
        NavigationTarget::Certifications,
        NavigationTarget::Contact,
        NavigationTarget::Education,
    ];

    /// Element id of the section on the page.
    pub fn section_id(self) -> &'static str {
        match self {
            NavigationTarget::About => "about",
            NavigationTarget::Experience => "experience",
            NavigationTarget::Projects => "projects",
            NavigationTarget::Certifications => "certifications",
            NavigationTarget::Contact => "contact",
            NavigationTarget::Education => "education",
        }
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_id())
    }
}

impl FromStr for NavigationTarget {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        NavigationTarget::ALL
            .into_iter()
            .find(|target| target.section_id() == wanted)
            .ok_or_else(|| anyhow::anyhow!("Unknown section: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SectionLayout {
    pub id: String,
    pub title: String,
    pub top: u32,
    pub height: u32,
}

impl SectionLayout {
    pub fn bottom(&self) -> u32 {
        self.top + self.height
    }
}

/// A smooth-scroll request, already adjusted for the navbar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScrollRequest {
    pub section: NavigationTarget,
    pub top: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuickLink {
    pub label: String,
    pub section: String,
}

/// Sections in render order with their nominal heights.
const SECTION_ORDER: [(&str, &str, u32); 7] = [
    ("hero", "Home", 800),
    ("about", "About Me", 900),
    ("skills", "Core Tools & Skills", 700),
    ("experience", "Professional Experience", 1600),
    ("certifications", "Professional Certifications", 1100),
    ("projects", "Featured Projects", 1300),
    ("contact", "Get In Touch", 1000),
];

const FOOTER_LINKS: [(&str, &str); 4] = [
    ("About", "about"),
    ("Certifications", "certifications"),
    ("Projects", "projects"),
    ("Contact", "contact"),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageLayout {
    pub navbar_offset: u32,
    pub sections: Vec<SectionLayout>,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self::new(DEFAULT_NAVBAR_OFFSET)
    }
}

impl PageLayout {
    /// Stack the sections in their fixed order.
    pub fn new(navbar_offset: u32) -> Self {
        let mut top = 0;
        let sections = SECTION_ORDER
            .iter()
            .map(|(id, title, height)| {
                let section = SectionLayout {
                    id: id.to_string(),
                    title: title.to_string(),
                    top,
                    height: *height,
                };
                top += height;
                section
            })
            .collect();

        Self {
            navbar_offset,
            sections,
        }
    }

    pub fn section(&self, id: &str) -> Option<&SectionLayout> {
        self.sections.iter().find(|section| section.id == id)
    }

    pub fn total_height(&self) -> u32 {
        self.sections.last().map(SectionLayout::bottom).unwrap_or(0)
    }

    /// Resolve a target to a scroll position. Targets with no matching
    /// section on the page resolve to nothing.
    pub fn scroll_request(&self, target: NavigationTarget) -> Option<ScrollRequest> {
        let section = self.section(target.section_id())?;
        Some(ScrollRequest {
            section: target,
            top: section.top.saturating_sub(self.navbar_offset),
        })
    }

    /// The scroll-to-top button is shown while the viewport overlaps the
    /// contact section.
    pub fn show_scroll_to_top(&self, scroll_y: u32, viewport_height: u32) -> bool {
        match self.section("contact") {
            Some(contact) => {
                scroll_y.saturating_add(viewport_height) >= contact.top
                    && scroll_y <= contact.bottom()
            }
            None => false,
        }
    }

    pub fn quick_links(&self) -> Vec<QuickLink> {
        FOOTER_LINKS
            .iter()
            .map(|(label, section)| QuickLink {
                label: label.to_string(),
                section: section.to_string(),
            })
            .collect()
    }
}

/// Collects scroll requests until a client drains them.
#[derive(Debug, Default)]
pub struct ScrollQueue {
    layout: PageLayout,
    pending: Mutex<Vec<ScrollRequest>>,
}

impl ScrollQueue {
    pub fn new(layout: PageLayout) -> Self {
        Self {
            layout,
            pending: Mutex::new(Vec::new()),
        }
    }

    pub fn drain(&self) -> Vec<ScrollRequest> {
        std::mem::take(&mut *self.pending.lock())
    }
}

impl Navigator for ScrollQueue {
    fn navigate(&self, target: NavigationTarget) {
        match self.layout.scroll_request(target) {
            Some(request) => {
                debug!("Queued scroll to #{} at {}", target, request.top);
                self.pending.lock().push(request);
            }
            None => debug!("No section #{} on the page, ignoring scroll", target),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_are_stacked_in_order() {
        let layout = PageLayout::default();
        let ids: Vec<&str> = layout.sections.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["hero", "about", "skills", "experience", "certifications", "projects", "contact"]
        );
        for pair in layout.sections.windows(2) {
            assert_eq!(pair[0].bottom(), pair[1].top);
        }
    }

    #[test]
    fn test_scroll_request_reserves_navbar() {
        let layout = PageLayout::default();
        let about = layout.section("about").unwrap().top;
        let request = layout.scroll_request(NavigationTarget::About).unwrap();
        assert_eq!(request.top, about - 80);
    }

    #[test]
    fn test_missing_section_is_a_noop() {
        let layout = PageLayout::default();
        assert!(layout.scroll_request(NavigationTarget::Education).is_none());

        let queue = ScrollQueue::new(layout);
        queue.navigate(NavigationTarget::Education);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_scroll_queue_drains_once() {
        let queue = ScrollQueue::new(PageLayout::new(100));
        queue.navigate(NavigationTarget::Projects);
        queue.navigate(NavigationTarget::Contact);

        let drained = queue.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].section, NavigationTarget::Projects);
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_scroll_to_top_visibility() {
        let layout = PageLayout::default();
        let contact = layout.section("contact").unwrap().clone();

        assert!(!layout.show_scroll_to_top(0, 900));
        assert!(layout.show_scroll_to_top(contact.top - 900, 900));
        assert!(layout.show_scroll_to_top(contact.top + 10, 900));
        assert!(!layout.show_scroll_to_top(contact.bottom() + 1, 900));
    }

    #[test]
    fn test_scroll_to_top_with_extreme_offsets() {
        let layout = PageLayout::default();
        assert!(!layout.show_scroll_to_top(u32::MAX, 1));
        assert!(!layout.show_scroll_to_top(u32::MAX, u32::MAX));
        assert!(layout.show_scroll_to_top(0, u32::MAX));
    }

    #[test]
    fn test_navigation_target_parsing() {
        assert_eq!(
            "Certifications".parse::<NavigationTarget>().unwrap(),
            NavigationTarget::Certifications
        );
        assert!("hero".parse::<NavigationTarget>().is_err());
    }
}
