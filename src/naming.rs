//! Section file names and in-page anchors.
//!
//! Section files in the content directory follow an `NNN-Title.md` pattern:
//! the numeric prefix orders the sections on the page and the rest becomes
//! the display title, with dashes turned into spaces:
//!
//! - `010-About.md` → #10, "About"
//! - `030-Get-In-Touch.md` → #30, "Get In Touch"
//! - `notes.md` → not a section (no prefix)
//!
//! Each section is addressable on the page through an anchor derived from its
//! title (`"Get In Touch"` → `#get-in-touch`).

/// A numbered section file stem, split into its parts.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionName {
    /// Ordering key from the `NNN-` prefix.
    pub number: u32,
    /// Title with dashes converted to spaces. Empty for number-only stems.
    pub title: String,
}

/// Parse a file stem following the `NNN-Title` convention.
///
/// Returns `None` for stems without a numeric prefix; those files are
/// drafts and stay off the page.
pub fn parse_section_name(stem: &str) -> Option<SectionName> {
    let (prefix, rest) = match stem.split_once('-') {
        Some((prefix, rest)) => (prefix, rest),
        None => (stem, ""),
    };
    let number = prefix.parse::<u32>().ok()?;
    Some(SectionName {
        number,
        title: rest.replace('-', " ").trim().to_string(),
    })
}

/// Derive the fragment id used for a section title.
///
/// Lowercases ASCII letters, keeps alphanumerics, and collapses every other
/// run of characters into a single dash. Leading and trailing dashes are
/// dropped. A title with no usable characters yields `"section"`.
pub fn anchor_for(title: &str) -> String {
    let mut anchor = String::with_capacity(title.len());
    let mut pending_dash = false;
    for ch in title.chars() {
        if ch.is_alphanumeric() {
            if pending_dash && !anchor.is_empty() {
                anchor.push('-');
            }
            pending_dash = false;
            anchor.extend(ch.to_lowercase());
        } else {
            pending_dash = true;
        }
    }
    if anchor.is_empty() {
        "section".to_string()
    } else {
        anchor
    }
}
