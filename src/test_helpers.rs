//! Shared test utilities.
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = setup_fixtures();
//! let site = Site::load(tmp.path()).unwrap();
//!
//! let html = sample_site().render(&NavigationState::default());
//! assert_eq!(count_matches(&html, "class=\"nav-link"), 3);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::config::SiteConfig;
use crate::generate::Site;
use crate::scan::SectionOrigin;
use crate::sections::SectionRegistry;

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    copy_dir_recursive(&fixtures, tmp.path()).unwrap();
    tmp
}

fn copy_dir_recursive(src: &Path, dst: &Path) -> std::io::Result<()> {
    for entry in std::fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            std::fs::create_dir_all(&dst_path)?;
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            std::fs::copy(&src_path, &dst_path)?;
        }
    }
    Ok(())
}

/// The stock site: default config, sample sections, fixed year.
pub fn sample_site() -> Site {
    Site::new(
        SiteConfig::default(),
        SectionRegistry::sample(),
        SectionOrigin::Config,
        2024,
    )
}

/// Number of non-overlapping occurrences of `needle` in `haystack`.
pub fn count_matches(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}
