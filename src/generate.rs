//! Site assembly and HTML output.
//!
//! A [`Site`] bundles everything the renderer reads: the validated config,
//! the section registry, the copyright year, and the final stylesheet. It is
//! assembled once per run; after that, rendering any navigation state is a
//! pure function call.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── index.html      # Initial state: first section active, menu closed
//! ```
//!
//! CSS and the navigation script are inlined, so the page is a single file
//! that can be dropped on any static host.

use crate::config::{self, ConfigError, SiteConfig};
use crate::motion;
use crate::navigation::{NavigationState, Navigator};
use crate::render::render_page;
use crate::scan::{self, ScanError, SectionOrigin};
use crate::sections::SectionRegistry;
use chrono::Datelike;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Everything needed to render the page.
#[derive(Debug, Clone)]
pub struct Site {
    pub config: SiteConfig,
    pub sections: SectionRegistry,
    pub origin: SectionOrigin,
    /// Copyright year, fixed at assembly time.
    pub year: i32,
    /// Full stylesheet: color variables, animation presets, base styles.
    pub css: String,
}

impl Site {
    pub fn new(
        config: SiteConfig,
        sections: SectionRegistry,
        origin: SectionOrigin,
        year: i32,
    ) -> Self {
        let css = build_css(&config);
        Self {
            config,
            sections,
            origin,
            year,
            css,
        }
    }

    /// Load config and sections from a content directory.
    ///
    /// The footer year is `footer.copyright_year` when set, otherwise the
    /// current local year.
    pub fn load(source: &Path) -> Result<Self, GenerateError> {
        let config = config::load_config(source)?;
        let loaded = scan::load_sections(source, &config)?;
        let year = config
            .footer
            .copyright_year
            .unwrap_or_else(|| chrono::Local::now().year());
        Ok(Self::new(config, loaded.registry, loaded.origin, year))
    }

    /// A fresh controller for this site's sections.
    pub fn navigator(&self) -> Navigator {
        Navigator::for_registry(&self.sections)
    }

    /// Render the document for a navigation state.
    pub fn render(&self, state: &NavigationState) -> String {
        render_page(self, state).into_string()
    }
}

fn build_css(config: &SiteConfig) -> String {
    let color_css = config::generate_color_css(&config.colors);
    let motion_css = motion::motion_css(&config.motion);
    if motion_css.is_empty() {
        format!("{color_css}\n\n{CSS_STATIC}")
    } else {
        format!("{color_css}\n\n{CSS_STATIC}\n{motion_css}")
    }
}

/// Write `index.html` for the initial navigation state.
///
/// Returns the path of the written file.
pub fn generate(site: &Site, output_dir: &Path) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let html = site.render(&site.navigator().state());
    let index = output_dir.join("index.html");
    fs::write(&index, html)?;
    info!("wrote {} ({} sections)", index.display(), site.sections.len());
    Ok(index)
}
