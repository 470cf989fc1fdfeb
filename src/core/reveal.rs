//! Staged reveal of hero fragments
//!
//! The revealed count only moves forward and stops at the fragment count.

use std::time::Duration;

/// Default delay between two heading fragments
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_millis(200);
/// Default delay before the hero subtext fades in
pub const DEFAULT_SUBTEXT_DELAY: Duration = Duration::from_millis(500);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealSequencer {
    len: usize,
    step_delay: Duration,
    subtext_delay: Duration,
    revealed: usize,
    subtext_visible: bool,
    elapsed: Duration,
}

impl RevealSequencer {
    pub fn new(len: usize, step_delay: Duration, subtext_delay: Duration) -> Self {
        Self {
            len,
            step_delay,
            subtext_delay,
            revealed: 0,
            subtext_visible: false,
            elapsed: Duration::ZERO,
        }
    }

    pub fn with_defaults(len: usize) -> Self {
        Self::new(len, DEFAULT_STEP_DELAY, DEFAULT_SUBTEXT_DELAY)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        index < self.revealed
    }

    pub fn is_complete(&self) -> bool {
        self.revealed >= self.len
    }

    pub fn subtext_visible(&self) -> bool {
        self.subtext_visible
    }

    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    pub fn subtext_delay(&self) -> Duration {
        self.subtext_delay
    }

    /// One interval tick. Returns true if a fragment was revealed.
    pub fn tick(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.revealed += 1;
        true
    }

    /// The one-shot subtext timer fired
    pub fn show_subtext(&mut self) -> bool {
        let changed = !self.subtext_visible;
        self.subtext_visible = true;
        changed
    }

    /// Advance simulated time; returns true if anything became visible
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.elapsed = self.elapsed.saturating_add(delta);

        let due = if self.step_delay.is_zero() {
            self.len
        } else {
            let steps = self.elapsed.as_nanos() / self.step_delay.as_nanos();
            usize::try_from(steps).unwrap_or(usize::MAX).min(self.len)
        };

        let mut changed = false;
        if due > self.revealed {
            self.revealed = due;
            changed = true;
        }
        if self.elapsed >= self.subtext_delay {
            changed |= self.show_subtext();
        }
        changed
    }

    /// Viewport trigger: everything appears at once
    pub fn reveal_all(&mut self) {
        self.revealed = self.len;
        self.subtext_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_starts_hidden() {
        let sequencer = RevealSequencer::with_defaults(3);
        assert_eq!(sequencer.revealed(), 0);
        assert!(!sequencer.subtext_visible());
        assert!(!sequencer.is_revealed(0));
    }

    #[test]
    fn test_capped_after_650ms() {
        let mut sequencer = RevealSequencer::new(3, ms(200), ms(500));
        sequencer.advance(ms(650));
        assert_eq!(sequencer.revealed(), 3);
        assert!(sequencer.is_complete());
        assert!(sequencer.subtext_visible());
    }

    #[test]
    fn test_monotonic_under_small_steps() {
        let mut sequencer = RevealSequencer::new(3, ms(200), ms(500));
        let mut previous = 0;
        for _ in 0..100 {
            sequencer.advance(ms(35));
            assert!(sequencer.revealed() >= previous);
            assert!(sequencer.revealed() <= 3);
            previous = sequencer.revealed();
        }
        assert_eq!(previous, 3);
    }

    #[test]
    fn test_subtext_independent_of_steps() {
        let mut sequencer = RevealSequencer::new(10, ms(200), ms(500));
        sequencer.advance(ms(499));
        assert_eq!(sequencer.revealed(), 2);
        assert!(!sequencer.subtext_visible());
        sequencer.advance(ms(1));
        assert!(sequencer.subtext_visible());
        assert_eq!(sequencer.revealed(), 2);
    }

    #[test]
    fn test_sub_millisecond_step() {
        let step = Duration::from_micros(500);
        let mut sequencer = RevealSequencer::new(5, step, ms(10));
        sequencer.advance(Duration::from_micros(1500));
        assert_eq!(sequencer.revealed(), 3);
    }

    #[test]
    fn test_tick_stops_at_len() {
        let mut sequencer = RevealSequencer::with_defaults(2);
        assert!(sequencer.tick());
        assert!(sequencer.tick());
        assert!(!sequencer.tick());
        assert!(!sequencer.tick());
        assert_eq!(sequencer.revealed(), 2);
    }

    #[test]
    fn test_completes_exactly_on_last_tick() {
        let mut sequencer = RevealSequencer::with_defaults(3);
        for _ in 0..2 {
            sequencer.tick();
            assert!(!sequencer.is_complete());
        }
        sequencer.tick();
        assert!(sequencer.is_complete());
    }

    #[test]
    fn test_reveal_all_and_zero_delay() {
        let mut sequencer = RevealSequencer::with_defaults(4);
        sequencer.reveal_all();
        assert!(sequencer.is_complete());
        assert!(sequencer.subtext_visible());
        // Time moving on afterwards does not push past the end
        sequencer.advance(ms(10_000));
        assert_eq!(sequencer.revealed(), 4);

        let mut instant = RevealSequencer::new(3, Duration::ZERO, Duration::ZERO);
        assert!(instant.advance(Duration::ZERO));
        assert_eq!(instant.revealed(), 3);
    }
}
