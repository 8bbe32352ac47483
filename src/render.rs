//! Page rendering.
//!
//! [`render_page`] is a pure function of the site (config, section registry,
//! resolved year, CSS) and a [`NavigationState`]: the same inputs always
//! produce the same HTML. The active section is highlighted in both nav
//! lists, and the mobile overlay is mounted only while `menu_open` is set.
//!
//! The overlay markup is also emitted once inside a `<template>` so that
//! `nav.js` can mount and unmount it in the browser, replaying the same two
//! transitions the Rust [`Navigator`](crate::navigation::Navigator) applies.
//!
//! Animated elements carry the class names of their presets from
//! [`motion`](crate::motion); stagger delays are written as inline styles.

use crate::generate::Site;
use crate::motion;
use crate::navigation::NavigationState;
use crate::sections::Entry;
use crate::types::SocialLink;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const JS: &str = include_str!("../static/nav.js");

/// Renders the full document for one navigation state.
pub fn render_page(site: &Site, state: &NavigationState) -> Markup {
    let config = &site.config;
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (config.title) }
                style { (PreEscaped(&site.css)) }
                @if config.motion.enabled {
                    noscript { style { ".anim-reveal { opacity: 1; }" } }
                }
            }
            body data-active=(state.active_index) data-menu-open=(bool_attr(state.menu_open)) {
                (render_nav(site, state))
                main id="top" {
                    div.wrap.anim-container {
                        (render_hero(site))
                        @for (index, entry) in site.sections.iter().enumerate() {
                            // Hero is child 0 of the container
                            (render_section(entry, index + 1))
                        }
                        (render_social(&config.social, site.sections.len() + 1))
                    }
                }
                (render_footer(site))
                template id="mobile-menu-template" {
                    (render_mobile_menu(site, state))
                }
                script { (PreEscaped(JS)) }
            }
        }
    }
}

/// Renders the fixed nav bar: brand, desktop links, menu toggle, and the
/// mobile overlay when open.
pub fn render_nav(site: &Site, state: &NavigationState) -> Markup {
    html! {
        nav.site-nav {
            div.wrap.nav-bar {
                a.brand.anim-brand href="#top" { (site.config.brand) }
                div.nav-links {
                    @for (index, entry) in site.sections.iter().enumerate() {
                        @let is_active = index == state.active_index;
                        a.nav-link.gesture-nav.active[is_active]
                            href={ "#" (entry.anchor) }
                            data-index=(index)
                            aria-current=[is_active.then_some("true")] {
                            (entry.section.title)
                        }
                    }
                }
                button.menu-toggle.gesture-toggle
                    type="button"
                    aria-controls="mobile-menu"
                    aria-expanded=(bool_attr(state.menu_open))
                    aria-label="Toggle navigation" {
                    (menu_icon(state.menu_open))
                }
            }
            @if state.menu_open {
                (render_mobile_menu(site, state))
            }
        }
    }
}

/// Renders the mobile overlay panel.
pub fn render_mobile_menu(site: &Site, state: &NavigationState) -> Markup {
    html! {
        div.mobile-menu.anim-menu id="mobile-menu" {
            @for (index, entry) in site.sections.iter().enumerate() {
                @let is_active = index == state.active_index;
                a.menu-link.anim-item.gesture-nav.active[is_active]
                    href={ "#" (entry.anchor) }
                    data-index=(index)
                    aria-current=[is_active.then_some("true")]
                    style=(delay_style(motion::CONTAINER.child_delay_ms(index))) {
                    (entry.section.title)
                }
            }
        }
    }
}

/// Both icons are rendered; the inactive one is hidden so `nav.js` can swap
/// them without re-rendering.
fn menu_icon(menu_open: bool) -> Markup {
    html! {
        svg.icon-open width="24" height="24" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="1.5" aria-hidden="true"
            style=[menu_open.then_some("display: none")] {
            path d="M3.75 9h16.5m-16.5 6.75h16.5";
        }
        svg.icon-close width="24" height="24" viewBox="0 0 24 24" fill="none"
            stroke="currentColor" stroke-width="2" aria-hidden="true"
            style=[(!menu_open).then_some("display: none")] {
            path d="M6 18L18 6M6 6l12 12";
        }
    }
}

fn render_hero(site: &Site) -> Markup {
    let hero = &site.config.hero;
    html! {
        section.hero.anim-hero {
            h1.hero-heading.anim-hero-heading { (hero.heading) }
            @if !hero.tagline.is_empty() {
                p.hero-tagline.anim-hero-tagline { (hero.tagline) }
            }
        }
    }
}

/// Renders one content section; `child_index` is its position inside the
/// staggered container.
pub fn render_section(entry: &Entry, child_index: usize) -> Markup {
    html! {
        section.section.anim-item
            id=(entry.anchor)
            style=(delay_style(motion::CONTAINER.child_delay_ms(child_index))) {
            h2.section-title.gesture-heading { (entry.section.title) }
            div.section-body.anim-reveal {
                (PreEscaped(markdown_to_html(&entry.section.content)))
            }
        }
    }
}

/// Renders the social links row. Links open in a new browsing context.
pub fn render_social(links: &[SocialLink], child_index: usize) -> Markup {
    html! {
        @if !links.is_empty() {
            div.social.anim-container
                style=(delay_style(motion::CONTAINER.child_delay_ms(child_index))) {
                @for link in links {
                    a.social-link.gesture-social
                        href=(link.url)
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label=(link.network.label()) {
                        svg width="24" height="24" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true" {
                            path d=(link.network.icon_path());
                        }
                    }
                }
            }
        }
    }
}

fn render_footer(site: &Site) -> Markup {
    let config = &site.config;
    html! {
        footer.site-footer {
            p.anim-reveal {
                "© " (site.year) " " (config.brand) ". " (config.footer.notice)
            }
        }
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

fn delay_style(ms: u32) -> String {
    format!("animation-delay: {ms}ms")
}

/// Convert section markdown to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}
