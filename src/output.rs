//! CLI output formatting.
//!
//! Every entity is shown by its position and display identity first, with
//! where it came from as indented context:
//!
//! ```text
//! Sections
//! 001 About Me → #about-me
//!     Source: 010-About.md
//! 002 Open Source → #open-source
//!     Source: 020-Open-Source.md
//!
//! Social
//!     GitHub → https://github.com/example
//!
//! Generated dist/index.html
//! ```
//!
//! Each `format_*` function is pure and returns lines for testability; the
//! `print_*` wrappers write them to stdout.

use crate::generate::Site;
use crate::navigation::NavigationState;
use crate::scan::SectionOrigin;
use crate::sections::SectionRegistry;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Section inventory with anchors and sources.
pub fn format_sections(site: &Site) -> Vec<String> {
    let mut lines = Vec::new();
    match &site.origin {
        SectionOrigin::Files(_) => lines.push("Sections".to_string()),
        SectionOrigin::Config => lines.push("Sections (from config)".to_string()),
    }
    for (pos, entry) in site.sections.iter().enumerate() {
        lines.push(format!(
            "{} {} → #{}",
            format_index(pos + 1),
            entry.section.title,
            entry.anchor
        ));
        if let SectionOrigin::Files(files) = &site.origin {
            if let Some(file) = files.get(pos) {
                lines.push(format!("{}Source: {}", indent(1), file));
            }
        }
    }
    lines
}

pub fn format_social(site: &Site) -> Vec<String> {
    if site.config.social.is_empty() {
        return Vec::new();
    }
    let mut lines = vec!["Social".to_string()];
    for link in &site.config.social {
        lines.push(format!("{}{} → {}", indent(1), link.network.label(), link.url));
    }
    lines
}

/// Output of the `check` command.
pub fn format_check_output(site: &Site) -> Vec<String> {
    let mut lines = format_sections(site);
    let social = format_social(site);
    if !social.is_empty() {
        lines.push(String::new());
        lines.extend(social);
    }
    lines
}

/// Output of the `build` command.
pub fn format_build_output(site: &Site, index: &Path) -> Vec<String> {
    let mut lines = format_check_output(site);
    lines.push(String::new());
    lines.push(format!("Generated {}", index.display()));
    lines
}

/// Navigation state in terms of the registry.
pub fn format_state(state: &NavigationState, sections: &SectionRegistry) -> Vec<String> {
    let title = sections
        .get(state.active_index)
        .map(|e| e.section.title.as_str())
        .unwrap_or("?");
    vec![
        format!(
            "Active: {} {}",
            format_index(state.active_index + 1),
            title
        ),
        format!(
            "Menu: {}",
            if state.menu_open { "open" } else { "closed" }
        ),
    ]
}

pub fn print_check_output(site: &Site) {
    for line in format_check_output(site) {
        println!("{}", line);
    }
}

pub fn print_build_output(site: &Site, index: &Path) {
    for line in format_build_output(site, index) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{sample_site, setup_fixtures};

    #[test]
    fn sections_from_config() {
        let lines = format_sections(&sample_site());
        assert_eq!(
            lines,
            vec![
                "Sections (from config)",
                "001 About → #about",
                "002 Projects → #projects",
                "003 Contact → #contact",
            ]
        );
    }

    #[test]
    fn sections_from_files_show_source() {
        let tmp = setup_fixtures();
        let site = Site::load(tmp.path()).unwrap();
        let lines = format_sections(&site);
        assert_eq!(lines[0], "Sections");
        assert_eq!(lines[1], "001 About Me → #about-me");
        assert_eq!(lines[2], "    Source: 010-About.md");
        assert_eq!(lines[3], "002 Open Source → #open-source");
    }

    #[test]
    fn social_lines() {
        let lines = format_social(&sample_site());
        assert_eq!(lines[0], "Social");
        assert_eq!(lines[1], "    GitHub → #");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn no_social_block_when_empty() {
        let mut site = sample_site();
        site.config.social.clear();
        assert!(format_social(&site).is_empty());
        assert!(!format_check_output(&site).contains(&String::new()));
    }

    #[test]
    fn build_output_ends_with_path() {
        let lines = format_build_output(&sample_site(), Path::new("dist/index.html"));
        assert_eq!(lines.last().unwrap(), "Generated dist/index.html");
    }

    #[test]
    fn state_lines() {
        let registry = SectionRegistry::sample();
        let lines = format_state(
            &NavigationState {
                active_index: 2,
                menu_open: true,
            },
            &registry,
        );
        assert_eq!(lines, vec!["Active: 003 Contact", "Menu: open"]);
    }

    #[test]
    fn indent_levels() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(2), "        ");
    }
}
