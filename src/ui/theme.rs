//! Presentation of theme buckets
//!
//! Maps a [`ThemeBucket`] to the Tailwind classes and CSS colours used by
//! each section. Components receive the bucket as a prop from the page root
//! and derive their palette from it.

use crate::core::ThemeBucket;

/// Classes and colours for one bucket
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Solid call-to-action button
    pub button: &'static str,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
    /// Ring around the hero badge
    pub ring: &'static str,
    /// Brand text (footer logo, checks)
    pub text: &'static str,
    /// Selected card border
    pub border: &'static str,
    /// `rgba()` glow used by the background blob and hero halo
    pub glow: &'static str,
    /// Hex colour for inline SVG icons
    pub icon: &'static str,
}

impl Palette {
    pub fn for_bucket(bucket: ThemeBucket) -> Self {
        match bucket {
            ThemeBucket::Purple => Palette {
                button: "bg-purple-600 hover:bg-purple-700",
                gradient_from: "from-purple-600",
                gradient_to: "to-purple-500",
                ring: "ring-purple-500/20",
                text: "text-purple-600",
                border: "border-purple-500",
                glow: "rgba(168, 85, 247, 0.4)",
                icon: "#a855f7",
            },
            ThemeBucket::Cyan => Palette {
                button: "bg-cyan-600 hover:bg-cyan-700",
                gradient_from: "from-cyan-600",
                gradient_to: "to-cyan-500",
                ring: "ring-cyan-500/20",
                text: "text-cyan-600",
                border: "border-cyan-500",
                glow: "rgba(34, 211, 238, 0.4)",
                icon: "#06b6d4",
            },
            ThemeBucket::Green => Palette {
                button: "bg-green-600 hover:bg-green-700",
                gradient_from: "from-green-600",
                gradient_to: "to-green-500",
                ring: "ring-green-500/20",
                text: "text-green-600",
                border: "border-green-500",
                glow: "rgba(34, 197, 94, 0.4)",
                icon: "#22c55e",
            },
        }
    }

    /// `from-* to-*` pair for gradient backgrounds and gradient text
    pub fn gradient(&self) -> String {
        format!("{} {}", self.gradient_from, self.gradient_to)
    }
}

/// Classes for an element that fades up once `visible` flips
pub fn reveal_class(base: &str, visible: bool) -> String {
    if visible {
        format!("{base} opacity-100 translate-y-0")
    } else {
        format!("{base} opacity-0 translate-y-4")
    }
}
