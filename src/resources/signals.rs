//! Held input signal resource.
//!
//! The [`InputSignals`] resource records which named controls are currently
//! held. External input adapters translate raw key events into
//! [`InputSignals::set_signal`] calls; systems read the set once per logical
//! tick.
//!
//! Any name is accepted. Names that are not part of the directional table in
//! [`InputControlled`](crate::components::inputcontrolled::InputControlled)
//! are kept for display but have no effect on motion.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Set of named boolean input signals.
///
/// A missing key is treated exactly like a key mapped to `false`.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSignals {
    signals: FxHashMap<String, bool>,
}

impl InputSignals {
    /// Merge a single signal's state into the set.
    ///
    /// Other signals are left untouched, so several keys can be held at once.
    pub fn set_signal(&mut self, name: impl Into<String>, active: bool) {
        self.signals.insert(name.into(), active);
    }

    /// Whether `name` is currently held.
    pub fn is_active(&self, name: &str) -> bool {
        self.signals.get(name).copied().unwrap_or(false)
    }

    /// Names of all held signals, sorted so the output is stable.
    pub fn active_signals(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .signals
            .iter()
            .filter(|(_, active)| **active)
            .map(|(name, _)| name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Forget every signal.
    pub fn clear(&mut self) {
        self.signals.clear();
    }

    /// Number of known signal names, held or not.
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_signal_is_inactive() {
        let signals = InputSignals::default();
        assert!(!signals.is_active("Up"));
        assert!(signals.active_signals().is_empty());
    }

    #[test]
    fn test_set_signal_merges_without_clearing_others() {
        let mut signals = InputSignals::default();
        signals.set_signal("Up", true);
        signals.set_signal("Right", true);
        assert_eq!(signals.active_signals(), vec!["Right", "Up"]);

        signals.set_signal("Up", false);
        assert_eq!(signals.active_signals(), vec!["Right"]);
        assert!(!signals.is_active("Up"));
        assert_eq!(signals.len(), 2);
    }

    #[test]
    fn test_unknown_names_are_retained() {
        let mut signals = InputSignals::default();
        signals.set_signal("Jump", true);
        assert!(signals.is_active("Jump"));
        assert_eq!(signals.active_signals(), vec!["Jump"]);
    }

    #[test]
    fn test_clear_empties_the_set() {
        let mut signals = InputSignals::default();
        signals.set_signal("Left", true);
        signals.set_signal("Down", true);
        signals.clear();
        assert!(signals.is_empty());
        assert!(!signals.is_active("Left"));
    }
}
