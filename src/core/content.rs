//! Static page content: feature lists, testimonials, plans and the chat seed

use super::chat::{Channel, MessageKind};
use super::tabs::Variant;

/// Fragments of the hero heading, revealed one at a time
pub const HERO_HEADING: [&str; 3] = ["Work with your", "colleagues and", "AI agents."];

/// Key of the plan preselected in the pricing section
pub const DEFAULT_PLAN: &str = "professional";

/// Card in the three-column feature grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// Section of the sticky feature showcase
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseFeature {
    pub key: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Headline and caption of the graphic on the right
    pub graphic_title: &'static str,
    pub graphic_caption: &'static str,
    /// Tailwind gradient stops for the active icon and button
    pub accent: &'static str,
    /// Tailwind gradient stops for the graphic block
    pub backdrop: &'static str,
}

impl Variant for ShowcaseFeature {
    fn key(&self) -> &str {
        self.key
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub name: &'static str,
    pub company: &'static str,
    pub avatar: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    pub key: &'static str,
    pub name: &'static str,
    pub price: Option<&'static str>,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

impl Plan {
    /// Custom-priced plans route to sales instead of checkout
    pub fn is_custom(&self) -> bool {
        self.price.is_none()
    }
}

impl Variant for Plan {
    fn key(&self) -> &str {
        self.key
    }
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
    FeatureCard {
        icon: "zap",
        title: "Lightning Fast",
        description: "Experience instant responsiveness and seamless collaboration in real-time.",
    },
    FeatureCard {
        icon: "users",
        title: "Team Collaboration",
        description: "Work together effortlessly with built-in tools for every team member.",
    },
    FeatureCard {
        icon: "rocket",
        title: "Rapid Scaling",
        description: "Grow your team and ideas without worrying about infrastructure or complexity.",
    },
];

pub const SHOWCASE_FEATURES: [ShowcaseFeature; 5] = [
    ShowcaseFeature {
        key: "collaboration",
        icon: "zap",
        title: "Lightning Fast Collaboration",
        description: "Connect your entire team in milliseconds. Real-time synchronization keeps everyone on the same page, with instant message delivery and live collaboration features.",
        graphic_title: "Real-Time Sync",
        graphic_caption: "Instant delivery",
        accent: "from-purple-600 to-purple-500",
        backdrop: "from-purple-600 to-purple-400",
    },
    ShowcaseFeature {
        key: "communication",
        icon: "users",
        title: "Team Communication Hub",
        description: "Break down silos with unified channels, direct messaging and shared spaces. Conversations stay organized and searchable for everyone who needs them.",
        graphic_title: "Team Connected",
        graphic_caption: "5+ tools included",
        accent: "from-cyan-600 to-cyan-500",
        backdrop: "from-cyan-600 to-cyan-400",
    },
    ShowcaseFeature {
        key: "scale",
        icon: "rocket",
        title: "Scale Without Limits",
        description: "Whether you're a startup or an enterprise, the infrastructure grows with you. Thousands of concurrent users, no performance degradation.",
        graphic_title: "Unlimited Scale",
        graphic_caption: "1M+ concurrent users",
        accent: "from-green-600 to-green-500",
        backdrop: "from-green-600 to-green-400",
    },
    ShowcaseFeature {
        key: "ai",
        icon: "brain",
        title: "AI-Powered Intelligence",
        description: "Automate workflows, get smart recommendations and uncover insights from your conversations. Let AI agents handle the repetitive work.",
        graphic_title: "AI Assistant",
        graphic_caption: "Smart automation",
        accent: "from-blue-600 to-blue-500",
        backdrop: "from-blue-600 to-blue-400",
    },
    ShowcaseFeature {
        key: "security",
        icon: "briefcase",
        title: "Enterprise Security",
        description: "End-to-end encryption, compliance certifications and advanced security controls. Enterprise-grade reliability you can count on.",
        graphic_title: "Enterprise Safe",
        graphic_caption: "End-to-end encrypted",
        accent: "from-indigo-600 to-indigo-500",
        backdrop: "from-indigo-600 to-indigo-400",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        company: "Google",
        avatar: "👩‍💼",
        text: "Sync has transformed how our team collaborates. The speed and intuitive interface are unmatched.",
    },
    Testimonial {
        name: "Marcus Johnson",
        company: "Netflix",
        avatar: "👨‍💻",
        text: "We save hours every week with Sync. It's become an essential part of our creative workflow.",
    },
    Testimonial {
        name: "Elena Rodriguez",
        company: "Figma",
        avatar: "👩‍🎨",
        text: "The best platform for team communication. Highly recommend to any growing organization.",
    },
];

pub const PLANS: [Plan; 3] = [
    Plan {
        key: "starter",
        name: "Starter",
        price: Some("$29"),
        description: "Perfect for small teams",
        features: &[
            "Up to 10 team members",
            "Basic integrations",
            "5GB storage",
            "Email support",
        ],
        popular: false,
    },
    Plan {
        key: "professional",
        name: "Professional",
        price: Some("$99"),
        description: "For growing teams",
        features: &[
            "Up to 100 team members",
            "Advanced integrations",
            "500GB storage",
            "Priority support",
            "Custom branding",
        ],
        popular: true,
    },
    Plan {
        key: "enterprise",
        name: "Enterprise",
        price: None,
        description: "For large organizations",
        features: &[
            "Unlimited team members",
            "Full API access",
            "Unlimited storage",
            "24/7 support",
            "SSO & advanced security",
        ],
        popular: false,
    },
];

/// Canned history for the chat mock
pub fn seed_channels() -> Vec<Channel> {
    vec![
        Channel::new("marketing", "marketing")
            .with_message(MessageKind::member("Sarah"), "Great work on that!", Some("9:41 AM"))
            .with_message(MessageKind::member("Maya"), "Just shipped!", Some("9:43 AM"))
            .with_message(
                MessageKind::Ai,
                "Summary: launch assets are live and the announcement is scheduled for 2 PM.",
                Some("9:44 AM"),
            ),
        Channel::new("general", "general")
            .with_message(
                MessageKind::Calendar {
                    title: "All-hands".to_string(),
                    starts_at: "10:00 AM".to_string(),
                },
                "All-hands starts in 15 minutes",
                Some("9:45 AM"),
            )
            .with_message(MessageKind::member("Marcus"), "Agenda is in the canvas", Some("9:47 AM")),
        Channel::new("random", "random")
            .with_message(
                MessageKind::Huddle { participants: 3 },
                "Elena, Maya and Sarah are in a huddle",
                Some("10:02 AM"),
            )
            .with_message(MessageKind::member("Elena"), "New onboarding flow is up for review", Some("10:05 AM")),
    ]
}
