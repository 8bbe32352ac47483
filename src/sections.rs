//! The content registry.
//!
//! A [`SectionRegistry`] is the fixed, ordered list of sections shown on the
//! page. It is built once at startup, validated, and never mutated: the nav
//! bar and the page body both iterate it, so section order and nav order can
//! never drift apart.

use crate::naming::anchor_for;
use crate::types::Section;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum SectionError {
    #[error("at least one section is required")]
    Empty,
    #[error("section {0} has an empty title")]
    EmptyTitle(usize),
    #[error("duplicate section title: {0:?}")]
    DuplicateTitle(String),
    #[error("sections {0:?} and {1:?} map to the same anchor #{2}")]
    DuplicateAnchor(String, String, String),
    #[error("section {0:?} maps to anchor #{1}, which the page uses itself")]
    ReservedAnchor(String, String),
}

/// Element ids the page layout owns. A section anchor may not reuse them.
pub const RESERVED_ANCHORS: [&str; 3] = ["top", "mobile-menu", "mobile-menu-template"];

/// A section together with its in-page anchor.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub section: Section,
    pub anchor: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionRegistry {
    entries: Vec<Entry>,
}

impl SectionRegistry {
    /// Build a registry, rejecting empty input and blank titles. Titles may
    /// not collide literally or after anchor derivation, and their anchors
    /// must stay clear of [`RESERVED_ANCHORS`].
    pub fn new(sections: Vec<Section>) -> Result<Self, SectionError> {
        if sections.is_empty() {
            return Err(SectionError::Empty);
        }

        let mut titles = HashSet::new();
        let mut entries: Vec<Entry> = Vec::with_capacity(sections.len());
        for (index, section) in sections.into_iter().enumerate() {
            let title = section.title.trim();
            if title.is_empty() {
                return Err(SectionError::EmptyTitle(index));
            }
            if !titles.insert(title.to_string()) {
                return Err(SectionError::DuplicateTitle(title.to_string()));
            }
            let anchor = anchor_for(title);
            if RESERVED_ANCHORS.contains(&anchor.as_str()) {
                return Err(SectionError::ReservedAnchor(title.to_string(), anchor));
            }
            if let Some(clash) = entries.iter().find(|e| e.anchor == anchor) {
                return Err(SectionError::DuplicateAnchor(
                    clash.section.title.clone(),
                    title.to_string(),
                    anchor,
                ));
            }
            entries.push(Entry {
                section: Section::new(title, section.content),
                anchor,
            });
        }

        Ok(Self { entries })
    }

    /// The stock About / Projects / Contact registry.
    pub fn sample() -> Self {
        Self::new(sample_sections()).expect("sample sections are valid")
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: construction rejects empty registries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    /// Position of the section whose title matches, ignoring ASCII case.
    pub fn position_of(&self, title: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|e| e.section.title.eq_ignore_ascii_case(title.trim()))
    }
}

/// Sample sections for a fresh site.
pub fn sample_sections() -> Vec<Section> {
    vec![
        Section::new(
            "About",
            "Full-stack developer passionate about creating beautiful and functional web applications.",
        ),
        Section::new(
            "Projects",
            "Working on innovative solutions that make a difference.",
        ),
        Section::new(
            "Contact",
            "Let's connect and create something amazing together.",
        ),
    ]
}
