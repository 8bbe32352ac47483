//! # folio-page
//!
//! A generator for one-page developer portfolio sites: a nav bar, a hero
//! banner, an ordered set of content sections, social links and a footer,
//! with declarative entrance, hover and in-view animations.
//!
//! # Architecture
//!
//! ```text
//! content/ ──scan + config──▶ Site ──render(state)──▶ index.html
//!                               ▲                        │
//!                               │                        ▼
//!                          Navigator ◀── clicks ── nav.js (browser)
//! ```
//!
//! The only dynamic state is [`navigation::NavigationState`]: which section
//! is active and whether the mobile menu is open. [`navigation::Navigator`]
//! owns it and applies the two transitions (select a section, toggle the
//! menu). Rendering is a pure function of the site and a state, so any state
//! can be rendered and inspected from Rust; the generated page embeds a small
//! script that replays the same transitions in the browser.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`types`] | `Section` and `SocialLink` content types |
//! | [`naming`] | `NNN-Title.md` file names and section anchors |
//! | [`sections`] | The validated, immutable section registry |
//! | [`scan`] | Loads sections from markdown files or config |
//! | [`navigation`] | Navigation state, controller and actions |
//! | [`motion`] | Animation presets and their CSS |
//! | [`render`] | Maud templates: state + site → HTML |
//! | [`generate`] | `Site` assembly and writing `index.html` |
//! | [`config`] | `config.toml` loading, validation and color CSS |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/): templates are
//! checked at compile time and all interpolation is auto-escaped. Section
//! bodies are markdown rendered by `pulldown-cmark` and inserted as the
//! author's own HTML.
//!
//! ## CSS Animations, Not a Runtime
//!
//! Animation presets are constants rendered to keyframes once. The browser
//! does the timing; nothing in the page waits on an animation.
//!
//! ## One File Out
//!
//! CSS and script are inlined into `index.html`. The output can be served by
//! anything that serves files.

pub mod config;
pub mod generate;
pub mod motion;
pub mod naming;
pub mod navigation;
pub mod output;
pub mod render;
pub mod scan;
pub mod sections;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
