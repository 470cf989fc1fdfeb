//! Reusable UI components shared by several sections

pub mod tabs;

pub use tabs::{TabItem, Tabs};
