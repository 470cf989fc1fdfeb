//! Single-selection switcher over a fixed list of content variants

/// An item that can be addressed by a stable key
pub trait Variant {
    fn key(&self) -> &str;
}

/// Who is allowed to move the selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionPolicy {
    /// Clicks only; viewport observations are ignored
    #[default]
    Manual,
    /// Sticky scroll layout: the viewport decides, clicks still apply
    FollowViewport,
}

/// Which input produced the current selection
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionSource {
    #[default]
    Initial,
    Click,
    Viewport,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TabSwitcher<T> {
    variants: Vec<T>,
    active: usize,
    policy: SelectionPolicy,
    source: SelectionSource,
}

impl<T: Variant> TabSwitcher<T> {
    /// The first variant starts active
    pub fn new(variants: Vec<T>, policy: SelectionPolicy) -> Self {
        Self {
            variants,
            active: 0,
            policy,
            source: SelectionSource::Initial,
        }
    }

    /// Start on the variant with `key`, or the first one when it is absent
    pub fn starting_at(mut self, key: &str) -> Self {
        if let Some(index) = self.position(key) {
            self.active = index;
        }
        self
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn variants(&self) -> &[T] {
        &self.variants
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active(&self) -> Option<&T> {
        self.variants.get(self.active)
    }

    /// Mutable access to the active variant; the selection itself is
    /// unchanged
    pub fn active_mut(&mut self) -> Option<&mut T> {
        self.variants.get_mut(self.active)
    }

    pub fn active_key(&self) -> Option<&str> {
        self.active().map(Variant::key)
    }

    pub fn is_active(&self, index: usize) -> bool {
        !self.variants.is_empty() && self.active == index
    }

    pub fn policy(&self) -> SelectionPolicy {
        self.policy
    }

    pub fn source(&self) -> SelectionSource {
        self.source
    }

    pub fn position(&self, key: &str) -> Option<usize> {
        self.variants.iter().position(|variant| variant.key() == key)
    }

    /// Manual selection. Out-of-range indices are rejected and the previous
    /// selection is kept. Returns true if the active variant changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.variants.len() {
            tracing::debug!(index, len = self.variants.len(), "ignoring out-of-range tab");
            return false;
        }
        self.source = SelectionSource::Click;
        self.set_active(index)
    }

    pub fn select_key(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    /// Automatic selection from the viewport; only honoured for
    /// [`SelectionPolicy::FollowViewport`]
    pub fn observe(&mut self, index: usize) -> bool {
        if self.policy != SelectionPolicy::FollowViewport || index >= self.variants.len() {
            return false;
        }
        self.source = SelectionSource::Viewport;
        self.set_active(index)
    }

    fn set_active(&mut self, index: usize) -> bool {
        if self.active == index {
            return false;
        }
        self.active = index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Plan(&'static str);

    impl Variant for Plan {
        fn key(&self) -> &str {
            self.0
        }
    }

    fn plans(policy: SelectionPolicy) -> TabSwitcher<Plan> {
        TabSwitcher::new(
            vec![Plan("starter"), Plan("professional"), Plan("enterprise")],
            policy,
        )
    }

    #[test]
    fn test_first_variant_active_by_default() {
        let tabs = plans(SelectionPolicy::Manual);
        assert_eq!(tabs.active_index(), 0);
        assert_eq!(tabs.active_key(), Some("starter"));
        assert_eq!(tabs.source(), SelectionSource::Initial);
    }

    #[test]
    fn test_starting_at_key() {
        let tabs = plans(SelectionPolicy::Manual).starting_at("professional");
        assert_eq!(tabs.active_index(), 1);

        let fallback = plans(SelectionPolicy::Manual).starting_at("missing");
        assert_eq!(fallback.active_index(), 0);
    }

    #[test]
    fn test_out_of_range_select_keeps_previous() {
        let mut tabs = plans(SelectionPolicy::Manual);
        assert!(tabs.select(1));
        assert!(!tabs.select(3));
        assert!(!tabs.select(usize::MAX));
        assert_eq!(tabs.active_index(), 1);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut tabs = plans(SelectionPolicy::Manual);
        assert!(tabs.select(2));
        assert!(!tabs.select(2));
        assert_eq!(tabs.active_key(), Some("enterprise"));
    }

    #[test]
    fn test_select_key() {
        let mut tabs = plans(SelectionPolicy::Manual);
        assert!(tabs.select_key("enterprise"));
        assert!(!tabs.select_key("unknown"));
        assert_eq!(tabs.active_index(), 2);
    }

    #[test]
    fn test_manual_policy_ignores_viewport() {
        let mut tabs = plans(SelectionPolicy::Manual);
        tabs.select(1);
        assert!(!tabs.observe(2));
        assert_eq!(tabs.active_index(), 1);
        assert_eq!(tabs.source(), SelectionSource::Click);
    }

    #[test]
    fn test_follow_viewport_accepts_both_writers() {
        let mut tabs = plans(SelectionPolicy::FollowViewport);
        assert!(tabs.observe(2));
        assert_eq!(tabs.source(), SelectionSource::Viewport);

        // A click applies immediately regardless of the viewport
        assert!(tabs.select(0));
        assert_eq!(tabs.source(), SelectionSource::Click);

        // and the next centred section takes over again
        assert!(tabs.observe(1));
        assert_eq!(tabs.active_index(), 1);
        assert!(!tabs.observe(5));
    }

    #[test]
    fn test_active_mut_keeps_selection() {
        let mut tabs = plans(SelectionPolicy::Manual).starting_at("enterprise");
        if let Some(plan) = tabs.active_mut() {
            plan.0 = "enterprise-plus";
        }
        assert_eq!(tabs.active_index(), 2);
        assert_eq!(tabs.active_key(), Some("enterprise-plus"));
    }

    #[test]
    fn test_empty_switcher() {
        let mut tabs: TabSwitcher<Plan> = TabSwitcher::new(Vec::new(), SelectionPolicy::Manual);
        assert!(tabs.active().is_none());
        assert!(!tabs.select(0));
        assert!(!tabs.is_active(0));
    }
}
