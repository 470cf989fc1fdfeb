//! Client-side state engine for the landing page
//!
//! Everything here is plain data driven by discrete events (scroll samples,
//! intersection reports, timer ticks, clicks, key presses) and can be tested
//! without a browser. `crate::ui` binds these types to the DOM.

pub mod chat;
pub mod config;
pub mod content;
pub mod error;
pub mod lifecycle;
pub mod reveal;
pub mod scroll;
pub mod tabs;
pub mod theme;
pub mod viewport;

pub use chat::{Channel, ChatMessage, ChatSimulator, MessageKind};
pub use config::LandingConfig;
pub use error::ConfigError;
pub use lifecycle::{Liveness, Teardown};
pub use reveal::RevealSequencer;
pub use scroll::{ScrollState, ScrollTracker};
pub use tabs::{SelectionPolicy, SelectionSource, TabSwitcher, Variant};
pub use theme::{ScrollMetric, ScrollSample, ThemeBreakpoints, ThemeBucket};
pub use viewport::{
    ActiveSectionTracker, Crossing, ObserverOptions, RevealLatch, SectionRect, VisibilityFlag,
    VisibilityMode,
};
