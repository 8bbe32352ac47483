//! Shared content types.
//!
//! These are the static, immutable building blocks of the page. They are
//! deserialized from `config.toml` and from numbered markdown files, and read
//! by the renderer. Nothing mutates them after startup.

use serde::{Deserialize, Serialize};

/// One titled block of static display content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    /// Short display label, shown in the nav bar and as the section heading.
    pub title: String,
    /// Body text (markdown).
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// Social networks with a known icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialNetwork {
    Github,
    Twitter,
    Linkedin,
}

impl SocialNetwork {
    /// Human-readable name, used for `aria-label` and CLI output.
    pub fn label(self) -> &'static str {
        match self {
            SocialNetwork::Github => "GitHub",
            SocialNetwork::Twitter => "Twitter",
            SocialNetwork::Linkedin => "LinkedIn",
        }
    }

    /// SVG path data for a 24x24 icon.
    pub fn icon_path(self) -> &'static str {
        match self {
            SocialNetwork::Github => {
                "M12 .3a12 12 0 0 0-3.8 23.4c.6.1.8-.3.8-.6v-2c-3.3.7-4-1.6-4-1.6-.6-1.4-1.4-1.8-1.4-1.8-1-.7.1-.7.1-.7 1.2.1 1.8 1.2 1.8 1.2 1 1.8 2.8 1.3 3.5 1 0-.8.4-1.3.7-1.6-2.7-.3-5.5-1.3-5.5-6 0-1.2.5-2.3 1.3-3.1-.2-.4-.6-1.6 0-3.2 0 0 1-.3 3.4 1.2a11.5 11.5 0 0 1 6 0c2.3-1.5 3.3-1.2 3.3-1.2.6 1.6.2 2.8.1 3.2.8.8 1.3 1.9 1.3 3.2 0 4.6-2.8 5.6-5.5 5.9.5.4.9 1.1.9 2.2v3.3c0 .3.1.7.8.6A12 12 0 0 0 12 .3"
            }
            SocialNetwork::Twitter => {
                "M23.9 4.6a9.8 9.8 0 0 1-2.8.8 4.9 4.9 0 0 0 2.1-2.7c-.9.6-2 1-3.1 1.2a4.9 4.9 0 0 0-8.4 4.5A14 14 0 0 1 1.6 3.2a4.9 4.9 0 0 0 1.5 6.6 4.9 4.9 0 0 1-2.2-.6v.1c0 2.4 1.7 4.4 3.9 4.8a4.9 4.9 0 0 1-2.2.1 4.9 4.9 0 0 0 4.6 3.4A9.9 9.9 0 0 1 0 19.5a14 14 0 0 0 7.5 2.2c9.1 0 14-7.5 14-14v-.6c1-.7 1.8-1.6 2.4-2.5z"
            }
            SocialNetwork::Linkedin => {
                "M20.4 20.5h-3.6v-5.6c0-1.3 0-3-1.8-3s-2.1 1.4-2.1 2.9v5.7H9.4V9h3.4v1.6c.5-.9 1.6-1.8 3.4-1.8 3.6 0 4.3 2.4 4.3 5.5v6.2zM5.3 7.4a2.1 2.1 0 1 1 0-4.1 2.1 2.1 0 0 1 0 4.1zm1.8 13.1H3.6V9h3.5v11.5zM22.2 0H1.8C.8 0 0 .8 0 1.7v20.6c0 .9.8 1.7 1.8 1.7h20.4c1 0 1.8-.8 1.8-1.7V1.7C24 .8 23.2 0 22.2 0z"
            }
        }
    }
}

/// An external profile link shown in the social row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    pub network: SocialNetwork,
    pub url: String,
}
