//! Section discovery.
//!
//! Builds the [`SectionRegistry`] for a content directory. Sections come from
//! the first source that has any:
//!
//! 1. Numbered markdown files in the content root, ordered by prefix:
//!
//!    ```text
//!    content/
//!    ├── config.toml
//!    ├── 010-About.md
//!    ├── 020-Projects.md
//!    ├── 030-Contact.md
//!    └── notes.md          # no prefix = draft, ignored
//!    ```
//!
//!    The title is the file's first `# heading` if it has one (that line is
//!    then dropped from the body), otherwise the display title from the file
//!    name.
//!
//! 2. The `[[sections]]` list in `config.toml` (the stock config carries the
//!    About / Projects / Contact sample).

use crate::config::SiteConfig;
use crate::naming::parse_section_name;
use crate::sections::{SectionError, SectionRegistry};
use crate::types::Section;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Duplicate section number {0}: {1} and {2}")]
    DuplicateNumber(u32, String, String),
    #[error("Invalid sections: {0}")]
    Sections(#[from] SectionError),
}

/// A section read from a numbered markdown file.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionFile {
    pub number: u32,
    /// File name relative to the content root.
    pub filename: String,
    pub section: Section,
}

/// Where the registry's sections came from.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionOrigin {
    /// Markdown files, in page order.
    Files(Vec<String>),
    Config,
}

#[derive(Debug)]
pub struct LoadedSections {
    pub registry: SectionRegistry,
    pub origin: SectionOrigin,
}

/// Build the registry for `root`, preferring section files over config.
pub fn load_sections(root: &Path, config: &SiteConfig) -> Result<LoadedSections, ScanError> {
    let files = scan_section_files(root)?;
    if files.is_empty() {
        debug!(
            "no section files in {}, using {} configured sections",
            root.display(),
            config.sections.len()
        );
        let registry = SectionRegistry::new(config.sections.clone())?;
        return Ok(LoadedSections {
            registry,
            origin: SectionOrigin::Config,
        });
    }

    debug!("found {} section files in {}", files.len(), root.display());
    let filenames = files.iter().map(|f| f.filename.clone()).collect();
    let registry = SectionRegistry::new(files.into_iter().map(|f| f.section).collect())?;
    Ok(LoadedSections {
        registry,
        origin: SectionOrigin::Files(filenames),
    })
}

/// Read every numbered `.md` file in `root`, sorted by number.
///
/// A missing content directory yields no files rather than an error, so a
/// site can be built from config alone.
pub fn scan_section_files(root: &Path) -> Result<Vec<SectionFile>, ScanError> {
    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let mut md_files: Vec<PathBuf> = fs::read_dir(root)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.is_file()
                && p.extension()
                    .map(|e| e.eq_ignore_ascii_case("md"))
                    .unwrap_or(false)
        })
        .collect();
    md_files.sort();

    let mut sections: Vec<SectionFile> = Vec::new();
    for md_path in &md_files {
        let stem = md_path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();
        let filename = md_path
            .file_name()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_default();

        let Some(name) = parse_section_name(&stem) else {
            debug!("skipping unnumbered {filename}");
            continue;
        };

        if let Some(existing) = sections.iter().find(|s| s.number == name.number) {
            return Err(ScanError::DuplicateNumber(
                name.number,
                existing.filename.clone(),
                filename,
            ));
        }

        let content = fs::read_to_string(md_path)?;
        let (heading, body) = split_heading(&content);
        let title = heading.unwrap_or(name.title);

        sections.push(SectionFile {
            number: name.number,
            filename,
            section: Section::new(title, body),
        });
    }

    sections.sort_by_key(|s| s.number);
    Ok(sections)
}

/// Split off a leading `# heading`, returning it and the remaining body.
///
/// Only the first non-blank line counts; a `#` line further down (a shell
/// comment in a code block, say) stays in the body.
fn split_heading(content: &str) -> (Option<String>, String) {
    let content = content.trim_start();
    let (first, rest) = content.split_once('\n').unwrap_or((content, ""));
    match first.strip_prefix("# ").map(str::trim) {
        Some(heading) if !heading.is_empty() => {
            (Some(heading.to_string()), rest.trim().to_string())
        }
        _ => (None, content.trim().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::setup_fixtures;
    use tempfile::TempDir;

    #[test]
    fn fixtures_sections_in_number_order() {
        let tmp = setup_fixtures();
        let files = scan_section_files(tmp.path()).unwrap();
        let titles: Vec<_> = files.iter().map(|f| f.section.title.as_str()).collect();
        assert_eq!(titles, vec!["About Me", "Open Source", "Say Hello"]);
        assert_eq!(files[0].filename, "010-About.md");
    }

    #[test]
    fn heading_only_taken_from_first_line() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("010-Setup.md"),
            "Install it:\n\n```sh\n# fetch the tool\ncurl -O tool.tar.gz\n```\n",
        )
        .unwrap();

        let files = scan_section_files(tmp.path()).unwrap();
        assert_eq!(files[0].section.title, "Setup");
        assert!(files[0].section.content.contains("# fetch the tool\ncurl"));
    }

    #[test]
    fn leading_blank_lines_before_heading() {
        let (heading, body) = split_heading("\n\n# Hello\r\n\nBody text\n");
        assert_eq!(heading.as_deref(), Some("Hello"));
        assert_eq!(body, "Body text");
    }

    #[test]
    fn heading_overrides_filename_title() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("010-About.md"),
            "# Who I Am\n\nI write Rust.",
        )
        .unwrap();
        let files = scan_section_files(tmp.path()).unwrap();
        assert_eq!(files[0].section.title, "Who I Am");
        assert_eq!(files[0].section.content, "I write Rust.");
    }

    #[test]
    fn filename_title_when_no_heading() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("020-Get-In-Touch.md"), "Email me.").unwrap();
        let files = scan_section_files(tmp.path()).unwrap();
        assert_eq!(files[0].section.title, "Get In Touch");
        assert_eq!(files[0].section.content, "Email me.");
    }

    #[test]
    fn unnumbered_markdown_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("notes.md"), "draft").unwrap();
        fs::write(tmp.path().join("010-About.md"), "hi").unwrap();
        let files = scan_section_files(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].section.title, "About");
    }

    #[test]
    fn numeric_order_not_lexical() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("100-Last.md"), "").unwrap();
        fs::write(tmp.path().join("20-First.md"), "").unwrap();
        let files = scan_section_files(tmp.path()).unwrap();
        assert_eq!(files[0].section.title, "First");
        assert_eq!(files[1].section.title, "Last");
    }

    #[test]
    fn duplicate_number_is_error() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("010-About.md"), "").unwrap();
        fs::write(tmp.path().join("010-Bio.md"), "").unwrap();
        let result = scan_section_files(tmp.path());
        assert!(matches!(result, Err(ScanError::DuplicateNumber(10, _, _))));
    }

    #[test]
    fn missing_root_yields_no_files() {
        let tmp = TempDir::new().unwrap();
        let files = scan_section_files(&tmp.path().join("nope")).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn load_sections_prefers_files() {
        let tmp = setup_fixtures();
        let loaded = load_sections(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(loaded.registry.len(), 3);
        assert!(matches!(loaded.origin, SectionOrigin::Files(ref f) if f.len() == 3));
    }

    #[test]
    fn load_sections_falls_back_to_config() {
        let tmp = TempDir::new().unwrap();
        let loaded = load_sections(tmp.path(), &SiteConfig::default()).unwrap();
        assert_eq!(loaded.origin, SectionOrigin::Config);
        assert_eq!(loaded.registry, SectionRegistry::sample());
    }

    #[test]
    fn load_sections_validates_registry() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("010-About.md"), "").unwrap();
        fs::write(tmp.path().join("020-x.md"), "# About\n").unwrap();
        let result = load_sections(tmp.path(), &SiteConfig::default());
        assert!(matches!(
            result,
            Err(ScanError::Sections(SectionError::DuplicateTitle(_)))
        ));
    }

    #[test]
    fn empty_config_sections_rejected() {
        let tmp = TempDir::new().unwrap();
        let config = SiteConfig {
            sections: vec![],
            ..SiteConfig::default()
        };
        let result = load_sections(tmp.path(), &config);
        assert!(matches!(
            result,
            Err(ScanError::Sections(SectionError::Empty))
        ));
    }
}
