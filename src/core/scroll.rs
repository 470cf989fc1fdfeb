//! Scroll tracking for the page-level theme
//!
//! [`ScrollTracker`] turns raw scroll samples into a [`ScrollState`] and only
//! reports a new state when something a subscriber can see has changed.

use serde::{Deserialize, Serialize};

use super::theme::{ScrollSample, ThemeBreakpoints, ThemeBucket};

/// Offset after which the navbar detaches into its floating form
pub const DEFAULT_STICKY_OFFSET: f64 = 50.0;

/// State published to every component on the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    pub bucket: ThemeBucket,
    /// The page has scrolled past the sticky offset
    pub is_scrolled: bool,
}

/// Classifies scroll samples and suppresses unchanged republishes
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    breakpoints: ThemeBreakpoints,
    sticky_offset: f64,
    current: ScrollState,
    sampled: bool,
}

impl ScrollTracker {
    pub fn new(breakpoints: ThemeBreakpoints, sticky_offset: f64) -> Self {
        Self {
            breakpoints,
            sticky_offset,
            current: ScrollState::default(),
            sampled: false,
        }
    }

    /// State as of the last sample (the top-of-page state before any sample)
    pub fn state(&self) -> ScrollState {
        self.current
    }

    pub fn bucket(&self) -> ThemeBucket {
        self.current.bucket
    }

    pub fn breakpoints(&self) -> &ThemeBreakpoints {
        &self.breakpoints
    }

    /// Derive the state for a sample without recording it
    pub fn derive(&self, sample: &ScrollSample) -> ScrollState {
        ScrollState {
            bucket: self.breakpoints.classify(sample),
            is_scrolled: sample.offset > self.sticky_offset,
        }
    }

    /// Record a sample. Returns the new state when it differs from the last
    /// published one, `None` otherwise. The very first sample always
    /// publishes so subscribers can sync with a page restored mid-scroll.
    pub fn sample(&mut self, sample: ScrollSample) -> Option<ScrollState> {
        let next = self.derive(&sample);
        if self.sampled && next == self.current {
            return None;
        }

        if next.bucket != self.current.bucket {
            tracing::debug!(
                from = %self.current.bucket,
                to = %next.bucket,
                offset = sample.offset,
                "theme bucket changed"
            );
        }

        self.sampled = true;
        self.current = next;
        Some(next)
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new(ThemeBreakpoints::default(), DEFAULT_STICKY_OFFSET)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_top_of_page() {
        let tracker = ScrollTracker::default();
        assert_eq!(tracker.state(), ScrollState::default());
        assert_eq!(tracker.bucket(), ThemeBucket::Purple);
    }

    #[test]
    fn test_first_sample_always_publishes() {
        let mut tracker = ScrollTracker::default();
        let published = tracker.sample(ScrollSample::new(0.0, 3000.0, 1000.0));
        assert_eq!(published, Some(ScrollState::default()));
    }

    #[test]
    fn test_unchanged_bucket_not_republished() {
        let mut tracker = ScrollTracker::new(ThemeBreakpoints::pixels(800.0, 1600.0), 50.0);
        assert!(tracker.sample(ScrollSample::at_offset(100.0)).is_some());
        assert!(tracker.sample(ScrollSample::at_offset(200.0)).is_none());
        assert!(tracker.sample(ScrollSample::at_offset(799.0)).is_none());

        let changed = tracker.sample(ScrollSample::at_offset(800.0));
        assert_eq!(changed.map(|s| s.bucket), Some(ThemeBucket::Cyan));
    }

    #[test]
    fn test_sticky_offset_toggles_is_scrolled() {
        let mut tracker = ScrollTracker::new(ThemeBreakpoints::pixels(800.0, 1600.0), 50.0);
        tracker.sample(ScrollSample::at_offset(10.0));
        assert!(!tracker.state().is_scrolled);

        let scrolled = tracker.sample(ScrollSample::at_offset(51.0));
        assert_eq!(
            scrolled,
            Some(ScrollState {
                bucket: ThemeBucket::Purple,
                is_scrolled: true,
            })
        );

        // Theme is continuous: scrolling back up reverts both fields
        let back = tracker.sample(ScrollSample::at_offset(0.0));
        assert_eq!(back, Some(ScrollState::default()));
    }

    #[test]
    fn test_theme_reverts_when_scrolling_back() {
        let mut tracker = ScrollTracker::new(ThemeBreakpoints::pixels(800.0, 1600.0), 50.0);
        tracker.sample(ScrollSample::at_offset(2000.0));
        assert_eq!(tracker.bucket(), ThemeBucket::Green);
        tracker.sample(ScrollSample::at_offset(900.0));
        assert_eq!(tracker.bucket(), ThemeBucket::Cyan);
    }

    #[test]
    fn test_short_page_stays_in_lowest_bucket() {
        let mut tracker = ScrollTracker::default();
        tracker.sample(ScrollSample::new(0.0, 700.0, 900.0));
        assert_eq!(tracker.bucket(), ThemeBucket::Purple);
    }
}
