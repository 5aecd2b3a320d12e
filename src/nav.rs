use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Scroll offset after which the nav bar switches to its "scrolled" look.
pub const SCROLLED_THRESHOLD: f64 = 50.0;
/// Distance below the viewport top used to decide which section is in view.
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;
/// Scroll offset after which the scroll-to-top control is shown.
pub const SCROLL_TO_TOP_THRESHOLD: f64 = 500.0;
/// Height of the fixed nav bar, subtracted when jumping to a section.
pub const NAV_BAR_HEIGHT: f64 = 80.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl SectionId {
    /// Every section in page order. Earlier entries win when two sections
    /// both contain the active-section point.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Contact,
    ];

    /// The DOM id of the section element.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Skills => "skills",
            SectionId::Experience => "experience",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SectionId::Home => "Home",
            SectionId::About => "About",
            SectionId::Skills => "Skills",
            SectionId::Experience => "Experience",
            SectionId::Projects => "Projects",
            SectionId::Contact => "Contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown section: {0}")]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// Vertical extent of a section, relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn contains(&self, y: f64) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// What the tracker needs from the rendering environment.
pub trait ScrollEnvironment {
    /// Current vertical scroll offset of the document.
    fn scroll_offset(&self) -> f64;
    /// Bounds of the section element, or `None` if it is not mounted.
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds>;
    /// Ask for a smooth scroll to the given document offset.
    fn request_scroll(&self, offset: f64);
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationState {
    pub active_section: SectionId,
    pub is_scrolled_past_threshold: bool,
    pub show_scroll_to_top_control: bool,
}

pub struct ScrollTracker<E> {
    env: E,
    state: NavigationState,
    tracks_scroll_to_top: bool,
}

impl<E: ScrollEnvironment> ScrollTracker<E> {
    pub fn new(env: E) -> Self {
        Self {
            env,
            state: NavigationState::default(),
            tracks_scroll_to_top: false,
        }
    }

    /// Also derive the scroll-to-top flag. Only the top-level page does this.
    pub fn with_scroll_to_top(mut self, enabled: bool) -> Self {
        self.tracks_scroll_to_top = enabled;
        self
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn on_scroll(&mut self) -> &NavigationState {
        let offset = self.env.scroll_offset();
        self.state.is_scrolled_past_threshold = offset > SCROLLED_THRESHOLD;

        let active = SectionId::ALL.into_iter().find(|id| {
            self.env
                .section_bounds(*id)
                .is_some_and(|b| b.contains(ACTIVE_SECTION_OFFSET))
        });
        if let Some(id) = active {
            if id != self.state.active_section {
                log::debug!("active section: {} -> {}", self.state.active_section, id);
            }
            self.state.active_section = id;
        }

        if self.tracks_scroll_to_top {
            self.state.show_scroll_to_top_control = offset > SCROLL_TO_TOP_THRESHOLD;
        }
        &self.state
    }

    pub fn scroll_to_section(&self, id: SectionId) {
        let Some(bounds) = self.env.section_bounds(id) else {
            log::debug!("scroll_to_section: #{id} is not mounted");
            return;
        };
        let document_top = bounds.top + self.env.scroll_offset();
        let target = (document_top - NAV_BAR_HEIGHT).max(0.0);
        self.env.request_scroll(target);
    }

    pub fn scroll_to_top(&self) {
        self.env.request_scroll(0.0);
    }
}
