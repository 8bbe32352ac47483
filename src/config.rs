//! Site configuration module.
//!
//! Handles loading, validating, and merging `config.toml`. The file lives in
//! the content directory and is optional: stock defaults produce the sample
//! portfolio page, and a user file overrides only the keys it names.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! brand = "afk-png"          # Nav bar brand text and footer owner
//! title = "afk-png"          # Document <title>
//!
//! [hero]
//! heading = "Welcome"
//! tagline = "Building the future, one line of code at a time."
//!
//! [[sections]]               # Used when no NNN-Title.md files exist
//! title = "About"
//! content = "Full-stack developer ..."
//!
//! [[social]]
//! network = "github"         # github | twitter | linkedin
//! url = "#"
//!
//! [colors]
//! background_from = "#111827"
//! background_to = "#000000"
//! text = "#ffffff"
//! text_muted = "#d1d5db"
//! accent = "#60a5fa"         # Active nav entry
//! gradient_from = "#60a5fa"  # Hero heading gradient
//! gradient_to = "#a855f7"
//!
//! [motion]
//! enabled = true
//! respect_reduced_motion = true
//!
//! [footer]
//! # copyright_year = 2025    # Omit for the current year
//! notice = "All rights reserved."
//! ```
//!
//! ## Partial Configuration
//!
//! Tables merge key-by-key over the stock defaults. Arrays (`sections`,
//! `social`) replace the default list as a whole.
//!
//! Unknown keys are rejected to catch typos early.

use crate::sections::sample_sections;
use crate::types::{Section, SocialLink, SocialNetwork};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Site configuration loaded from `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Brand text shown in the nav bar and the footer.
    pub brand: String,
    /// Document title.
    pub title: String,
    pub hero: HeroConfig,
    /// Fallback section list when the content directory has no section files.
    pub sections: Vec<Section>,
    pub social: Vec<SocialLink>,
    pub colors: ColorConfig,
    pub motion: MotionConfig,
    pub footer: FooterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand: "afk-png".to_string(),
            title: "afk-png".to_string(),
            hero: HeroConfig::default(),
            sections: sample_sections(),
            social: default_social(),
            colors: ColorConfig::default(),
            motion: MotionConfig::default(),
            footer: FooterConfig::default(),
        }
    }
}

fn default_social() -> Vec<SocialLink> {
    [
        SocialNetwork::Github,
        SocialNetwork::Twitter,
        SocialNetwork::Linkedin,
    ]
    .into_iter()
    .map(|network| SocialLink {
        network,
        url: "#".to_string(),
    })
    .collect()
}

impl SiteConfig {
    /// Validate config values are within acceptable ranges.
    ///
    /// Section rules (non-empty, unique titles) are enforced by
    /// [`SectionRegistry`](crate::sections::SectionRegistry) since sections
    /// may also come from markdown files.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.brand.trim().is_empty() {
            return Err(ConfigError::Validation("brand must not be empty".into()));
        }
        if self.hero.heading.trim().is_empty() {
            return Err(ConfigError::Validation(
                "hero.heading must not be empty".into(),
            ));
        }
        if let Some(pos) = self.social.iter().position(|s| s.url.trim().is_empty()) {
            return Err(ConfigError::Validation(format!(
                "social[{pos}].url must not be empty"
            )));
        }
        for (name, value) in self.colors.entries() {
            if value.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "colors.{name} must not be empty"
                )));
            }
        }
        if let Some(year) = self.footer.copyright_year {
            if !(1970..=9999).contains(&year) {
                return Err(ConfigError::Validation(
                    "footer.copyright_year must be between 1970 and 9999".into(),
                ));
            }
        }
        Ok(())
    }
}

/// Hero banner text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeroConfig {
    pub heading: String,
    pub tagline: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            heading: "Welcome".to_string(),
            tagline: "Building the future, one line of code at a time.".to_string(),
        }
    }
}

/// Page colors. Each value is any CSS color.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    /// Top-left stop of the page background gradient.
    pub background_from: String,
    /// Bottom-right stop of the page background gradient.
    pub background_to: String,
    pub text: String,
    /// Secondary text: inactive nav entries, body copy, footer.
    pub text_muted: String,
    /// Active nav entry.
    pub accent: String,
    pub gradient_from: String,
    pub gradient_to: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background_from: "#111827".to_string(),
            background_to: "#000000".to_string(),
            text: "#ffffff".to_string(),
            text_muted: "#d1d5db".to_string(),
            accent: "#60a5fa".to_string(),
            gradient_from: "#60a5fa".to_string(),
            gradient_to: "#a855f7".to_string(),
        }
    }
}

impl ColorConfig {
    fn entries(&self) -> [(&'static str, &str); 7] {
        [
            ("background_from", self.background_from.as_str()),
            ("background_to", self.background_to.as_str()),
            ("text", self.text.as_str()),
            ("text_muted", self.text_muted.as_str()),
            ("accent", self.accent.as_str()),
            ("gradient_from", self.gradient_from.as_str()),
            ("gradient_to", self.gradient_to.as_str()),
        ]
    }
}

/// Animation switches. The animations themselves are fixed presets in
/// [`motion`](crate::motion).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MotionConfig {
    pub enabled: bool,
    /// Disable animations for visitors with `prefers-reduced-motion: reduce`.
    pub respect_reduced_motion: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            respect_reduced_motion: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FooterConfig {
    /// Year in the copyright line. `None` means the current year at build time.
    pub copyright_year: Option<i32>,
    pub notice: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            copyright_year: None,
            notice: "All rights reserved.".to_string(),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the base layer user overrides are merged on top of.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(SiteConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay, arrays included, replace base values.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from a directory as a raw TOML value.
///
/// Returns `Ok(None)` if no `config.toml` exists in the directory.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    let config_path = path.join("config.toml");
    if !config_path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&config_path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<SiteConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: SiteConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from `config.toml` in the given directory, over stock defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let base = stock_defaults_value();
    let overlay = load_raw_config(root)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `config.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# folio-page Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Unknown keys will cause an error.

# Brand text shown in the nav bar and in the footer copyright line.
brand = "afk-png"

# Document <title>.
title = "afk-png"

# ---------------------------------------------------------------------------
# Hero banner
# ---------------------------------------------------------------------------
[hero]
heading = "Welcome"
tagline = "Building the future, one line of code at a time."

# ---------------------------------------------------------------------------
# Colors (any CSS color)
# ---------------------------------------------------------------------------
[colors]
background_from = "#111827"
background_to = "#000000"
text = "#ffffff"
text_muted = "#d1d5db"    # Inactive nav entries, body copy, footer
accent = "#60a5fa"        # Active nav entry
gradient_from = "#60a5fa" # Hero heading gradient
gradient_to = "#a855f7"

# ---------------------------------------------------------------------------
# Animations
# ---------------------------------------------------------------------------
[motion]
enabled = true
# Turn animations off for visitors who ask for reduced motion.
respect_reduced_motion = true

# ---------------------------------------------------------------------------
# Footer
# ---------------------------------------------------------------------------
[footer]
# Omit to use the year of the build.
# copyright_year = 2025
notice = "All rights reserved."

# ---------------------------------------------------------------------------
# Sections, in page order.
# Numbered markdown files in the content directory (010-About.md, ...) take
# precedence over this list when any exist.
# ---------------------------------------------------------------------------
[[sections]]
title = "About"
content = "Full-stack developer passionate about creating beautiful and functional web applications."

[[sections]]
title = "Projects"
content = "Working on innovative solutions that make a difference."

[[sections]]
title = "Contact"
content = "Let's connect and create something amazing together."

# ---------------------------------------------------------------------------
# Social links (github | twitter | linkedin), opened in a new tab.
# ---------------------------------------------------------------------------
[[social]]
network = "github"
url = "#"

[[social]]
network = "twitter"
url = "#"

[[social]]
network = "linkedin"
url = "#"
"##
}

/// Generate CSS custom properties from color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg-from: {background_from};
    --color-bg-to: {background_to};
    --color-text: {text};
    --color-text-muted: {text_muted};
    --color-accent: {accent};
    --color-gradient-from: {gradient_from};
    --color-gradient-to: {gradient_to};
}}"#,
        background_from = colors.background_from,
        background_to = colors.background_to,
        text = colors.text,
        text_muted = colors.text_muted,
        accent = colors.accent,
        gradient_from = colors.gradient_from,
        gradient_to = colors.gradient_to,
    )
}
