//! Theme buckets derived from scroll position
//!
//! The page switches between three accent palettes as the visitor scrolls.
//! A bucket is never stored; it is recomputed from every scroll sample.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Accent palette selected by scroll position, in scroll order
#[derive(
    Clone, Copy, Debug, Default, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeBucket {
    #[default]
    #[display("purple")]
    Purple,
    #[display("cyan")]
    Cyan,
    #[display("green")]
    Green,
}

impl ThemeBucket {
    /// All buckets, lowest first
    pub const ALL: [ThemeBucket; 3] = [ThemeBucket::Purple, ThemeBucket::Cyan, ThemeBucket::Green];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeBucket::Purple => "purple",
            ThemeBucket::Cyan => "cyan",
            ThemeBucket::Green => "green",
        }
    }
}

/// Which scalar the breakpoints are measured against
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollMetric {
    /// `offset / (document_height - viewport_height) * 100`
    #[default]
    #[display("percent")]
    Percent,
    /// Raw scroll offset in CSS pixels
    #[display("pixels")]
    Pixels,
}

/// One scroll position reading taken from the browser
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollSample {
    pub offset: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollSample {
    pub fn new(offset: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            offset,
            document_height,
            viewport_height,
        }
    }

    /// Sample carrying only a pixel offset, for pixel breakpoints
    pub fn at_offset(offset: f64) -> Self {
        Self {
            offset,
            ..Self::default()
        }
    }

    /// Scroll progress in percent, or `None` when the page cannot scroll
    pub fn percentage(&self) -> Option<f64> {
        let scrollable = self.document_height - self.viewport_height;
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return None;
        }
        Some(self.offset / scrollable * 100.0)
    }
}

/// Two ordered cut points splitting the metric into three half-open ranges:
/// `[.., lower)`, `[lower, upper)`, `[upper, ..]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeBreakpoints {
    pub metric: ScrollMetric,
    pub lower: f64,
    pub upper: f64,
}

impl ThemeBreakpoints {
    pub fn percent(lower: f64, upper: f64) -> Self {
        Self {
            metric: ScrollMetric::Percent,
            lower,
            upper,
        }
    }

    pub fn pixels(lower: f64, upper: f64) -> Self {
        Self {
            metric: ScrollMetric::Pixels,
            lower,
            upper,
        }
    }

    /// Map a sample to its bucket.
    ///
    /// A page shorter than the viewport has no percentage and always maps to
    /// the lowest bucket.
    pub fn classify(&self, sample: &ScrollSample) -> ThemeBucket {
        let value = match self.metric {
            ScrollMetric::Percent => match sample.percentage() {
                Some(percent) => percent,
                None => return ThemeBucket::Purple,
            },
            ScrollMetric::Pixels => sample.offset,
        };
        self.bucket_for(value)
    }

    fn bucket_for(&self, value: f64) -> ThemeBucket {
        // NaN compares false everywhere and would otherwise land in Green
        if value.is_nan() || value < self.lower {
            ThemeBucket::Purple
        } else if value < self.upper {
            ThemeBucket::Cyan
        } else {
            ThemeBucket::Green
        }
    }
}

impl Default for ThemeBreakpoints {
    fn default() -> Self {
        Self::percent(35.0, 65.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn percent_sample(percent: f64) -> ScrollSample {
        // 1000px of scrollable height
        ScrollSample::new(percent * 10.0, 1800.0, 800.0)
    }

    #[test]
    fn test_percentage_of_scrollable_height() {
        let sample = ScrollSample::new(250.0, 1800.0, 800.0);
        assert_eq!(sample.percentage(), Some(25.0));
    }

    #[test]
    fn test_percentage_none_when_page_fits_viewport() {
        assert_eq!(ScrollSample::new(0.0, 600.0, 800.0).percentage(), None);
        assert_eq!(ScrollSample::new(0.0, 800.0, 800.0).percentage(), None);
    }

    #[test]
    fn test_classify_percent_boundaries() {
        let breakpoints = ThemeBreakpoints::default();
        assert_eq!(breakpoints.classify(&percent_sample(0.0)), ThemeBucket::Purple);
        assert_eq!(breakpoints.classify(&percent_sample(34.9)), ThemeBucket::Purple);
        assert_eq!(breakpoints.classify(&percent_sample(35.0)), ThemeBucket::Cyan);
        assert_eq!(breakpoints.classify(&percent_sample(64.9)), ThemeBucket::Cyan);
        assert_eq!(breakpoints.classify(&percent_sample(65.0)), ThemeBucket::Green);
        assert_eq!(breakpoints.classify(&percent_sample(100.0)), ThemeBucket::Green);
    }

    #[test]
    fn test_classify_zero_scrollable_height_is_lowest_bucket() {
        let breakpoints = ThemeBreakpoints::default();
        let sample = ScrollSample::new(120.0, 500.0, 900.0);
        assert_eq!(breakpoints.classify(&sample), ThemeBucket::Purple);
    }

    #[test]
    fn test_classify_pixels_ignores_document_height() {
        let breakpoints = ThemeBreakpoints::pixels(800.0, 1600.0);
        assert_eq!(breakpoints.classify(&ScrollSample::at_offset(799.0)), ThemeBucket::Purple);
        assert_eq!(breakpoints.classify(&ScrollSample::at_offset(800.0)), ThemeBucket::Cyan);
        assert_eq!(breakpoints.classify(&ScrollSample::at_offset(1600.0)), ThemeBucket::Green);
    }

    #[test]
    fn test_every_offset_maps_to_one_bucket_in_order() {
        let breakpoints = ThemeBreakpoints::pixels(800.0, 1600.0);
        let mut previous = ThemeBucket::Purple;
        for offset in (0..3000).step_by(7) {
            let bucket = breakpoints.classify(&ScrollSample::at_offset(offset as f64));
            assert!(ThemeBucket::ALL.contains(&bucket));
            assert!(bucket >= previous);
            previous = bucket;
        }
    }

    #[test]
    fn test_bucket_display() {
        assert_eq!(ThemeBucket::Cyan.to_string(), "cyan");
        assert_eq!(ThemeBucket::Green.as_str(), "green");
        assert_eq!(ScrollMetric::Pixels.to_string(), "pixels");
    }
}
