//! Viewport visibility state
//!
//! Two use sites share this module:
//! - reveal sections latch visible the first time they cross the threshold
//!   and stay visible for the rest of the page lifetime
//! - the sticky feature showcase tracks which section sits in the middle of
//!   the viewport; exactly one section is active at a time

use serde::{Deserialize, Serialize};

/// Options handed to the browser intersection observer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ObserverOptions {
    /// Visible ratio in `0.0..=1.0` that counts as "entered"
    pub threshold: f64,
    /// CSS margin applied to the root before computing intersections
    pub root_margin: String,
}

impl ObserverOptions {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            root_margin: "0px".to_string(),
        }
    }

    pub fn with_root_margin(mut self, margin: impl Into<String>) -> Self {
        self.root_margin = margin.into();
        self
    }

    /// Shrinks the root to the horizontal line through the viewport centre
    pub fn center_line() -> Self {
        Self::new(0.0).with_root_margin("-50% 0px -50% 0px")
    }

    /// Whether a reported intersection counts as inside
    pub fn is_inside(&self, ratio: f64, is_intersecting: bool) -> bool {
        if self.threshold <= 0.0 {
            is_intersecting
        } else {
            ratio >= self.threshold
        }
    }
}

impl Default for ObserverOptions {
    fn default() -> Self {
        Self::new(0.1)
    }
}

/// How a flag reacts to the region leaving the viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VisibilityMode {
    /// false -> true once, exits are ignored
    #[default]
    Latch,
    /// Every crossing overwrites the flag
    Toggle,
}

/// Transition reported by [`VisibilityFlag::observe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crossing {
    Entered,
    Exited,
}

/// Visibility of a single observed region
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityFlag {
    mode: VisibilityMode,
    visible: bool,
}

impl VisibilityFlag {
    pub fn latch() -> Self {
        Self {
            mode: VisibilityMode::Latch,
            visible: false,
        }
    }

    pub fn toggle() -> Self {
        Self {
            mode: VisibilityMode::Toggle,
            visible: false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn mode(&self) -> VisibilityMode {
        self.mode
    }

    /// Feed one observation; returns the crossing it caused, if any
    pub fn observe(&mut self, inside: bool) -> Option<Crossing> {
        match (self.mode, self.visible, inside) {
            (_, false, true) => {
                self.visible = true;
                Some(Crossing::Entered)
            }
            (VisibilityMode::Toggle, true, false) => {
                self.visible = false;
                Some(Crossing::Exited)
            }
            _ => None,
        }
    }
}

/// A group of items revealed together the first time their section is seen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealLatch {
    flags: Vec<bool>,
}

impl RevealLatch {
    pub fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn is_triggered(&self) -> bool {
        self.flags.iter().all(|visible| *visible)
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.flags.get(index).copied().unwrap_or(false)
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    /// Returns true when this observation fired the latch
    pub fn observe(&mut self, inside: bool) -> bool {
        if !inside || self.is_triggered() {
            return false;
        }
        self.flags.iter_mut().for_each(|visible| *visible = true);
        tracing::debug!(items = self.flags.len(), "reveal latch fired");
        true
    }
}

/// Position of an observed section relative to the viewport top
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SectionRect {
    pub top: f64,
    pub height: f64,
}

impl SectionRect {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    fn center(&self) -> f64 {
        self.top + self.height / 2.0
    }

    fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Tracks which of a fixed number of sections is centred in the viewport
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveSectionTracker {
    len: usize,
    active: usize,
}

impl ActiveSectionTracker {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == index
    }

    /// A section crossed the centre line. Returns the newly active index.
    pub fn on_center_entered(&mut self, index: usize) -> Option<usize> {
        if index >= self.len || index == self.active {
            return None;
        }
        self.active = index;
        Some(index)
    }

    /// Pick the section closest to the viewport centre. A section that
    /// contains the centre line wins over nearer edges of its neighbours.
    pub fn update(&mut self, rects: &[SectionRect], viewport_height: f64) -> Option<usize> {
        let center = viewport_height / 2.0;
        let candidates = rects.iter().take(self.len).enumerate();

        let best = candidates
            .map(|(index, rect)| {
                let distance = if rect.contains(center) {
                    0.0
                } else {
                    (rect.center() - center).abs()
                };
                (index, distance)
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(index, _)| index)?;

        self.on_center_entered(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latch_ignores_exit() {
        let mut flag = VisibilityFlag::latch();
        assert_eq!(flag.observe(true), Some(Crossing::Entered));
        assert_eq!(flag.observe(false), None);
        assert!(flag.is_visible());
        assert_eq!(flag.observe(true), None);
    }

    #[test]
    fn test_toggle_reports_every_crossing() {
        let mut flag = VisibilityFlag::toggle();
        assert_eq!(flag.observe(true), Some(Crossing::Entered));
        assert_eq!(flag.observe(false), Some(Crossing::Exited));
        assert!(!flag.is_visible());
        assert_eq!(flag.observe(true), Some(Crossing::Entered));
    }

    #[test]
    fn test_threshold_comparison() {
        let options = ObserverOptions::default();
        assert!(!options.is_inside(0.05, true));
        assert!(options.is_inside(0.1, true));
        assert!(options.is_inside(0.8, true));

        let line = ObserverOptions::center_line();
        assert!(line.is_inside(0.0, true));
        assert!(!line.is_inside(0.0, false));
        assert_eq!(line.root_margin, "-50% 0px -50% 0px");
    }

    #[test]
    fn test_reveal_latch_sets_all_flags_once() {
        let mut latch = RevealLatch::new(3);
        assert!(!latch.observe(false));
        assert_eq!(latch.flags(), &[false, false, false]);

        assert!(latch.observe(true));
        assert_eq!(latch.flags(), &[true, true, true]);

        assert!(!latch.observe(true));
        assert!(!latch.observe(false));
        assert!(latch.is_triggered());
        assert!(latch.is_visible(2));
        assert!(!latch.is_visible(7));
    }

    #[test]
    fn test_center_entered_switches_single_active() {
        let mut tracker = ActiveSectionTracker::new(5);
        assert_eq!(tracker.active(), 0);
        assert_eq!(tracker.on_center_entered(3), Some(3));
        assert!(tracker.is_active(3));
        assert!(!tracker.is_active(0));
        assert_eq!(tracker.on_center_entered(3), None);
        assert_eq!(tracker.on_center_entered(9), None);
        assert_eq!(tracker.active(), 3);
    }

    #[test]
    fn test_update_picks_section_holding_center() {
        let mut tracker = ActiveSectionTracker::new(3);
        let viewport = 1000.0;
        // Each section is one viewport tall; scrolled 1.3 viewports down
        let rects = [
            SectionRect::new(-1300.0, 1000.0),
            SectionRect::new(-300.0, 1000.0),
            SectionRect::new(700.0, 1000.0),
        ];
        assert_eq!(tracker.update(&rects, viewport), Some(1));
        assert_eq!(tracker.update(&rects, viewport), None);
    }

    #[test]
    fn test_update_falls_back_to_nearest_center() {
        let mut tracker = ActiveSectionTracker::new(2);
        let rects = [SectionRect::new(-900.0, 200.0), SectionRect::new(700.0, 200.0)];
        assert_eq!(tracker.update(&rects, 1000.0), Some(1));
        assert_eq!(tracker.update(&[], 1000.0), None);
        assert_eq!(tracker.active(), 1);
    }
}
