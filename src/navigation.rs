//! Navigation state and its controller.
//!
//! The whole dynamic state of the page is two fields: which section is
//! active and whether the mobile menu overlay is open. [`Navigator`] owns
//! that state and is the only thing that changes it; the renderer receives a
//! [`NavigationState`] copy and reads it.
//!
//! ```text
//!               toggle_menu()
//!     ┌──────────────────────────────┐
//!     ▼                              │
//! menu closed ───toggle_menu()──▶ menu open
//!     ▲                              │
//!     └──────select_section(i)───────┘
//!         (active = i, from either side)
//! ```
//!
//! Both transitions are total. Section indices always come from iterating the
//! registry, so an out-of-range index is a caller bug and panics. Text input
//! from the CLI goes through [`NavAction::parse`], which validates against
//! the registry first.

use crate::sections::SectionRegistry;
use log::debug;
use serde::Serialize;
use thiserror::Error;

/// Snapshot of the navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct NavigationState {
    pub active_index: usize,
    pub menu_open: bool,
}

/// A user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Select(usize),
    ToggleMenu,
}

#[derive(Error, Debug, PartialEq)]
pub enum NavActionError {
    #[error("unknown action {0:?} (expected `toggle`, `select:<index>` or `select:<title>`)")]
    UnknownVerb(String),
    #[error("`select` needs a section index or title")]
    MissingTarget,
    #[error("no section titled {0:?}")]
    UnknownTitle(String),
    #[error("section index {index} out of range (there are {len} sections)")]
    OutOfRange { index: usize, len: usize },
}

impl NavAction {
    /// Parse `toggle`, `select:<index>`, `select:<title>` or `select:#<title>`.
    ///
    /// A numeric target is taken as an index; prefix it with `#` to match a
    /// title that happens to be a number.
    ///
    /// Targets are resolved against the registry here so that a parsed
    /// action is always valid to dispatch.
    pub fn parse(input: &str, registry: &SectionRegistry) -> Result<Self, NavActionError> {
        let input = input.trim();
        let (verb, target) = match input.split_once(':') {
            Some((verb, target)) => (verb.trim(), Some(target.trim())),
            None => (input, None),
        };

        match verb.to_ascii_lowercase().as_str() {
            "toggle" | "toggle-menu" if target.is_none() => Ok(NavAction::ToggleMenu),
            "select" => {
                let target = target
                    .filter(|t| !t.is_empty())
                    .ok_or(NavActionError::MissingTarget)?;
                let by_title = |title: &str| {
                    registry
                        .position_of(title)
                        .ok_or_else(|| NavActionError::UnknownTitle(title.to_string()))
                };
                let index = match target.strip_prefix('#') {
                    Some(title) => by_title(title)?,
                    None => match target.parse::<usize>() {
                        Ok(index) => index,
                        Err(_) => by_title(target)?,
                    },
                };
                if index >= registry.len() {
                    return Err(NavActionError::OutOfRange {
                        index,
                        len: registry.len(),
                    });
                }
                Ok(NavAction::Select(index))
            }
            _ => Err(NavActionError::UnknownVerb(input.to_string())),
        }
    }
}

/// Owner of the navigation state.
#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavigationState,
    section_count: usize,
}

impl Navigator {
    /// Start at the first section with the menu closed.
    pub fn new(section_count: usize) -> Self {
        assert!(section_count > 0, "navigator needs at least one section");
        Self {
            state: NavigationState::default(),
            section_count,
        }
    }

    pub fn for_registry(registry: &SectionRegistry) -> Self {
        Self::new(registry.len())
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    /// Activate a section and close the mobile menu.
    ///
    /// # Panics
    ///
    /// If `index` is not a valid section index.
    pub fn select_section(&mut self, index: usize) {
        assert!(
            index < self.section_count,
            "section index {index} out of range (0..{})",
            self.section_count
        );
        self.state.active_index = index;
        self.state.menu_open = false;
        debug!("select_section({index}) -> {:?}", self.state);
    }

    pub fn toggle_menu(&mut self) {
        self.state.menu_open = !self.state.menu_open;
        debug!("toggle_menu() -> {:?}", self.state);
    }

    pub fn dispatch(&mut self, action: NavAction) {
        match action {
            NavAction::Select(index) => self.select_section(index),
            NavAction::ToggleMenu => self.toggle_menu(),
        }
    }
}
