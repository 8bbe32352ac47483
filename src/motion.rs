//! Declarative animation presets.
//!
//! Every animated element on the page uses one of a handful of fixed presets:
//! an [`Entrance`] (a pose the element animates *from* when it appears, and
//! the pose it settles *to*) or a [`Gesture`] (poses applied while hovered or
//! pressed). The presets carry no state; they are rendered once into CSS by
//! [`motion_css`] and attached to elements through class names.
//!
//! ## Stagger
//!
//! A container entrance with a non-zero `stagger_ms` delays its children by
//! `index * stagger_ms`; see [`Entrance::child_delay_ms`]. The renderer writes
//! those delays as inline `animation-delay` styles.
//!
//! ## In-view reveals
//!
//! [`REVEAL`] elements start hidden and fade in the first time they enter the
//! viewport. The trigger lives in `nav.js` (an `IntersectionObserver` that
//! adds `is-visible` once); this module only emits the two CSS states.

use crate::config::MotionConfig;
use std::fmt::Write as _;

/// A visual pose. Identity values (`opacity 1`, no offset, `scale 1`,
/// no rotation) are omitted from the generated CSS.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub opacity: f32,
    pub x_px: f32,
    pub y_px: f32,
    pub scale: f32,
    pub rotate_deg: f32,
    /// Only the mobile menu uses this: CSS cannot animate to `height: auto`.
    pub max_height_rem: Option<f32>,
}

impl Pose {
    pub const IDENTITY: Pose = Pose {
        opacity: 1.0,
        x_px: 0.0,
        y_px: 0.0,
        scale: 1.0,
        rotate_deg: 0.0,
        max_height_rem: None,
    };

    const fn faded() -> Pose {
        Pose {
            opacity: 0.0,
            ..Pose::IDENTITY
        }
    }

    const fn scaled(scale: f32) -> Pose {
        Pose {
            scale,
            ..Pose::IDENTITY
        }
    }

    /// CSS `transform` value, or `None` if the pose has no transform.
    pub fn transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.x_px != 0.0 || self.y_px != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.x_px, self.y_px));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate_deg != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate_deg));
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }

    /// CSS declarations for this pose.
    ///
    /// Entrance keyframes always state opacity and transform so both ends of
    /// the animation are explicit.
    pub fn declarations(&self) -> String {
        let mut css = format!("opacity: {};", self.opacity);
        let transform = self.transform().unwrap_or_else(|| "none".to_string());
        write!(css, " transform: {transform};").ok();
        if let Some(rem) = self.max_height_rem {
            write!(css, " max-height: {rem}rem; overflow: hidden;").ok();
        }
        css
    }
}

/// Timing of an entrance animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    /// Delay between consecutive children of a container.
    pub stagger_ms: u32,
}

impl Transition {
    pub const DEFAULT: Transition = Transition {
        duration_ms: 300,
        delay_ms: 0,
        stagger_ms: 0,
    };

    const fn lasting(duration_ms: u32) -> Transition {
        Transition {
            duration_ms,
            ..Transition::DEFAULT
        }
    }
}

/// An element's appear animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub name: &'static str,
    pub from: Pose,
    pub to: Pose,
    pub transition: Transition,
}

impl Entrance {
    /// Class attached to elements using this entrance.
    pub fn class(&self) -> String {
        format!("anim-{}", self.name)
    }

    /// Delay for the `index`-th child of a container using this entrance.
    pub fn child_delay_ms(&self, index: usize) -> u32 {
        let index = u32::try_from(index).unwrap_or(u32::MAX);
        self.transition
            .delay_ms
            .saturating_add(index.saturating_mul(self.transition.stagger_ms))
    }

    fn css(&self) -> String {
        let t = &self.transition;
        format!(
            "@keyframes fp-{name} {{\n    from {{ {from} }}\n    to {{ {to} }}\n}}\n\
             .anim-{name} {{ animation: fp-{name} {dur}ms ease-out {delay}ms backwards; }}\n",
            name = self.name,
            from = self.from.declarations(),
            to = self.to.declarations(),
            dur = t.duration_ms,
            delay = t.delay_ms,
        )
    }
}

/// Poses applied on hover and while pressed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gesture {
    pub name: &'static str,
    pub hover: Option<Pose>,
    pub tap: Option<Pose>,
}

impl Gesture {
    pub fn class(&self) -> String {
        format!("gesture-{}", self.name)
    }

    fn css(&self) -> String {
        let mut css = format!(
            ".gesture-{} {{ transition: transform 150ms ease-out; }}\n",
            self.name
        );
        for (pseudo, pose) in [("hover", self.hover), ("active", self.tap)] {
            if let Some(transform) = pose.and_then(|p| p.transform()) {
                writeln!(
                    css,
                    ".gesture-{}:{pseudo} {{ transform: {transform}; }}",
                    self.name
                )
                .ok();
            }
        }
        css
    }
}

// ============================================================================
// Presets
// ============================================================================

/// Page body container: fades in and staggers its children.
pub const CONTAINER: Entrance = Entrance {
    name: "container",
    from: Pose::faded(),
    to: Pose::IDENTITY,
    transition: Transition {
        duration_ms: 500,
        delay_ms: 0,
        stagger_ms: 100,
    },
};

/// Content sections and mobile menu entries: rise and fade in.
pub const ITEM: Entrance = Entrance {
    name: "item",
    from: Pose {
        opacity: 0.0,
        y_px: 20.0,
        ..Pose::IDENTITY
    },
    to: Pose::IDENTITY,
    transition: Transition::lasting(500),
};

/// Brand text in the nav bar: slides in from the left.
pub const BRAND: Entrance = Entrance {
    name: "brand",
    from: Pose {
        opacity: 0.0,
        x_px: -20.0,
        ..Pose::IDENTITY
    },
    to: Pose::IDENTITY,
    transition: Transition::DEFAULT,
};

pub const HERO: Entrance = Entrance {
    name: "hero",
    from: Pose {
        opacity: 0.0,
        y_px: 20.0,
        ..Pose::IDENTITY
    },
    to: Pose::IDENTITY,
    transition: Transition::DEFAULT,
};

pub const HERO_HEADING: Entrance = Entrance {
    name: "hero-heading",
    from: Pose::scaled(0.8),
    to: Pose::IDENTITY,
    transition: Transition::lasting(500),
};

pub const HERO_TAGLINE: Entrance = Entrance {
    name: "hero-tagline",
    from: Pose::faded(),
    to: Pose::IDENTITY,
    transition: Transition {
        duration_ms: 300,
        delay_ms: 200,
        stagger_ms: 0,
    },
};

/// Mobile overlay: fades in while growing from zero height.
pub const MENU: Entrance = Entrance {
    name: "menu",
    from: Pose {
        opacity: 0.0,
        max_height_rem: Some(0.0),
        ..Pose::IDENTITY
    },
    to: Pose {
        max_height_rem: Some(24.0),
        ..Pose::IDENTITY
    },
    transition: Transition::DEFAULT,
};

/// Fade-in triggered once, on first entry into the viewport.
pub const REVEAL: Entrance = Entrance {
    name: "reveal",
    from: Pose::faded(),
    to: Pose::IDENTITY,
    transition: Transition::DEFAULT,
};

pub const ENTRANCES: [Entrance; 7] = [CONTAINER, ITEM, BRAND, HERO, HERO_HEADING, HERO_TAGLINE, MENU];

pub const NAV_BUTTON: Gesture = Gesture {
    name: "nav",
    hover: Some(Pose::scaled(1.05)),
    tap: Some(Pose::scaled(0.95)),
};

pub const HEADING: Gesture = Gesture {
    name: "heading",
    hover: Some(Pose::scaled(1.05)),
    tap: None,
};

pub const MENU_TOGGLE: Gesture = Gesture {
    name: "toggle",
    hover: None,
    tap: Some(Pose::scaled(0.95)),
};

pub const SOCIAL: Gesture = Gesture {
    name: "social",
    hover: Some(Pose {
        scale: 1.2,
        rotate_deg: 5.0,
        ..Pose::IDENTITY
    }),
    tap: Some(Pose::scaled(0.9)),
};

pub const GESTURES: [Gesture; 4] = [NAV_BUTTON, HEADING, MENU_TOGGLE, SOCIAL];

/// Render all presets to CSS. Empty when motion is disabled.
pub fn motion_css(config: &MotionConfig) -> String {
    if !config.enabled {
        return String::new();
    }

    let mut css = String::new();
    for entrance in ENTRANCES {
        css.push_str(&entrance.css());
    }

    // Reveals are transitions between two class states, not keyframes.
    let reveal = REVEAL.transition;
    writeln!(
        css,
        ".anim-reveal {{ {from} transition: opacity {dur}ms ease-out {delay}ms; }}\n\
         .anim-reveal.is-visible {{ {to} }}",
        from = REVEAL.from.declarations(),
        to = REVEAL.to.declarations(),
        dur = reveal.duration_ms,
        delay = reveal.delay_ms,
    )
    .ok();

    for gesture in GESTURES {
        css.push_str(&gesture.css());
    }

    if config.respect_reduced_motion {
        css.push_str(
            "@media (prefers-reduced-motion: reduce) {\n    \
             [class*=\"anim-\"], [class*=\"gesture-\"] { animation: none !important; transition: none !important; transform: none !important; }\n    \
             .anim-reveal { opacity: 1; }\n}\n",
        );
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled() -> MotionConfig {
        MotionConfig {
            enabled: true,
            respect_reduced_motion: true,
        }
    }

    #[test]
    fn identity_pose_has_no_transform() {
        assert_eq!(Pose::IDENTITY.transform(), None);
        assert_eq!(
            Pose::IDENTITY.declarations(),
            "opacity: 1; transform: none;"
        );
    }

    #[test]
    fn item_pose_translates_down() {
        assert_eq!(
            ITEM.from.declarations(),
            "opacity: 0; transform: translate(0px, 20px);"
        );
    }

    #[test]
    fn social_hover_scales_and_rotates() {
        assert_eq!(
            SOCIAL.hover.unwrap().transform().as_deref(),
            Some("scale(1.2) rotate(5deg)")
        );
    }

    #[test]
    fn container_staggers_children() {
        assert_eq!(CONTAINER.child_delay_ms(0), 0);
        assert_eq!(CONTAINER.child_delay_ms(1), 100);
        assert_eq!(CONTAINER.child_delay_ms(3), 300);
        // No stagger on plain items
        assert_eq!(ITEM.child_delay_ms(5), 0);
    }

    #[test]
    fn tagline_is_delayed() {
        assert_eq!(HERO_TAGLINE.child_delay_ms(0), 200);
    }

    #[test]
    fn css_includes_every_preset() {
        let css = motion_css(&enabled());
        for entrance in ENTRANCES {
            assert!(css.contains(&format!("@keyframes fp-{}", entrance.name)));
            assert!(css.contains(&format!(".{} {{", entrance.class())));
        }
        for gesture in GESTURES {
            assert!(css.contains(&format!(".{} {{", gesture.class())));
        }
        assert!(css.contains(".anim-reveal.is-visible"));
    }

    #[test]
    fn css_uses_preset_timings() {
        let css = motion_css(&enabled());
        assert!(css.contains("animation: fp-item 500ms ease-out 0ms backwards"));
        assert!(css.contains("animation: fp-hero-tagline 300ms ease-out 200ms backwards"));
        assert!(css.contains(".gesture-nav:hover { transform: scale(1.05); }"));
        assert!(css.contains(".gesture-nav:active { transform: scale(0.95); }"));
    }

    #[test]
    fn gesture_without_hover_emits_only_tap() {
        let css = motion_css(&enabled());
        assert!(!css.contains(".gesture-toggle:hover"));
        assert!(css.contains(".gesture-toggle:active"));
    }

    #[test]
    fn menu_grows_from_zero_height() {
        let css = motion_css(&enabled());
        assert!(css.contains("max-height: 0rem"));
    }

    #[test]
    fn disabled_motion_emits_nothing() {
        let css = motion_css(&MotionConfig {
            enabled: false,
            respect_reduced_motion: true,
        });
        assert!(css.is_empty());
    }

    #[test]
    fn reduced_motion_query_is_optional() {
        let with = motion_css(&enabled());
        assert!(with.contains("prefers-reduced-motion"));

        let without = motion_css(&MotionConfig {
            enabled: true,
            respect_reduced_motion: false,
        });
        assert!(!without.contains("prefers-reduced-motion"));
    }
}
