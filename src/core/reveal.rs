//! One-shot staggered reveal of page elements as they scroll into view

use std::collections::HashMap;
use std::time::Duration;

/// IntersectionObserver options for a section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverOptions {
    pub threshold: f64,
    pub root_margin: &'static str,
}

/// An element revealed some time after something else happens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Observed element; delay counts from its first intersection
    Intersection,
    /// Revealed after `parent` has been revealed
    After(&'static str),
}

/// Static description of one revealable element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTarget {
    pub key: &'static str,
    pub delay: Duration,
    pub trigger: Trigger,
}

impl RevealTarget {
    pub const fn observed(key: &'static str, delay_ms: u64) -> Self {
        Self {
            key,
            delay: Duration::from_millis(delay_ms),
            trigger: Trigger::Intersection,
        }
    }

    pub const fn after(parent: &'static str, key: &'static str, delay_ms: u64) -> Self {
        Self {
            key,
            delay: Duration::from_millis(delay_ms),
            trigger: Trigger::After(parent),
        }
    }
}

/// A section's observer settings and reveal targets
#[derive(Debug, Clone, Copy)]
pub struct SectionReveal {
    pub observer: ObserverOptions,
    pub targets: &'static [RevealTarget],
}

pub const ABOUT: SectionReveal = SectionReveal {
    observer: ObserverOptions {
        threshold: 0.1,
        root_margin: "0px 0px -50px 0px",
    },
    targets: &[
        RevealTarget::observed("heading", 100),
        RevealTarget::observed("description", 300),
        RevealTarget::observed("grid", 500),
    ],
};

pub const QUALITY: SectionReveal = SectionReveal {
    observer: ObserverOptions {
        threshold: 0.15,
        root_margin: "0px 0px -80px 0px",
    },
    targets: &[
        RevealTarget::observed("heading", 100),
        RevealTarget::observed("description", 300),
        RevealTarget::observed("features", 500),
        RevealTarget::observed("certifications", 200),
        RevealTarget::after("certifications", "top-certs", 400),
        RevealTarget::after("certifications", "iso-certs", 700),
    ],
};

pub const CONTACT: SectionReveal = SectionReveal {
    observer: ObserverOptions {
        threshold: 0.1,
        root_margin: "0px",
    },
    targets: &[
        RevealTarget::observed("form", 0),
        RevealTarget::observed("info", 150),
    ],
};

/// Per-item transition delay inside a revealed group, e.g. grid cells
pub fn stagger(index: usize, step_ms: u64) -> Duration {
    Duration::from_millis(index as u64 * step_ms)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    Hidden,
    Scheduled,
    Revealed,
}

/// Reveal flags for the elements of one view
#[derive(Debug, Clone)]
pub struct RevealTracker {
    targets: &'static [RevealTarget],
    states: HashMap<&'static str, RevealState>,
}

impl RevealTracker {
    pub fn new(section: &SectionReveal) -> Self {
        let states = section
            .targets
            .iter()
            .map(|t| (t.key, RevealState::Hidden))
            .collect();
        Self {
            targets: section.targets,
            states,
        }
    }

    pub fn state(&self, key: &str) -> Option<RevealState> {
        self.states.get(key).copied()
    }

    pub fn is_revealed(&self, key: &str) -> bool {
        self.state(key) == Some(RevealState::Revealed)
    }

    /// Keys of elements the observer should watch
    pub fn observed_keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.targets
            .iter()
            .filter(|t| t.trigger == Trigger::Intersection)
            .map(|t| t.key)
    }

    /// `key` crossed the threshold. Returns the delay after which
    /// [`reveal`](Self::reveal) must be called, only on the first crossing.
    pub fn intersect(&mut self, key: &str) -> Option<Duration> {
        let target = self
            .targets
            .iter()
            .find(|t| t.key == key && t.trigger == Trigger::Intersection)?;
        let state = self.states.get_mut(target.key)?;
        if *state != RevealState::Hidden {
            return None;
        }
        *state = RevealState::Scheduled;
        Some(target.delay)
    }

    /// Reveal `key`. Returns the chained elements that are now scheduled,
    /// with the delay for each.
    pub fn reveal(&mut self, key: &str) -> Vec<(&'static str, Duration)> {
        let Some(state) = self.states.get_mut(key) else {
            return Vec::new();
        };
        if *state == RevealState::Revealed {
            return Vec::new();
        }
        *state = RevealState::Revealed;

        let mut scheduled = Vec::new();
        for target in self.targets {
            if matches!(target.trigger, Trigger::After(parent) if parent == key)
                && let Some(child) = self.states.get_mut(target.key)
                && *child == RevealState::Hidden
            {
                *child = RevealState::Scheduled;
                scheduled.push((target.key, target.delay));
            }
        }
        scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let tracker = RevealTracker::new(&ABOUT);
        assert_eq!(tracker.state("heading"), Some(RevealState::Hidden));
        assert!(!tracker.is_revealed("grid"));
        assert_eq!(tracker.state("unknown"), None);
    }

    #[test]
    fn test_first_intersection_schedules_with_delay() {
        let mut tracker = RevealTracker::new(&ABOUT);
        assert_eq!(tracker.intersect("description"), Some(Duration::from_millis(300)));
        assert_eq!(tracker.state("description"), Some(RevealState::Scheduled));
    }

    #[test]
    fn test_repeated_intersection_ignored() {
        let mut tracker = RevealTracker::new(&ABOUT);
        tracker.intersect("heading");
        assert_eq!(tracker.intersect("heading"), None);

        tracker.reveal("heading");
        assert_eq!(tracker.intersect("heading"), None);
        assert!(tracker.is_revealed("heading"));
    }

    #[test]
    fn test_revealed_never_reverts() {
        let mut tracker = RevealTracker::new(&ABOUT);
        tracker.intersect("grid");
        tracker.reveal("grid");
        tracker.reveal("grid");
        tracker.intersect("grid");
        assert!(tracker.is_revealed("grid"));
    }

    #[test]
    fn test_quality_certifications_cascade() {
        let mut tracker = RevealTracker::new(&QUALITY);
        assert_eq!(tracker.intersect("certifications"), Some(Duration::from_millis(200)));

        let chained = tracker.reveal("certifications");
        assert_eq!(
            chained,
            vec![
                ("top-certs", Duration::from_millis(400)),
                ("iso-certs", Duration::from_millis(700)),
            ]
        );
        assert_eq!(tracker.state("top-certs"), Some(RevealState::Scheduled));

        tracker.reveal("top-certs");
        tracker.reveal("iso-certs");
        assert!(tracker.is_revealed("iso-certs"));

        // A second reveal of the parent schedules nothing
        assert!(tracker.reveal("certifications").is_empty());
    }

    #[test]
    fn test_chained_targets_are_not_observed() {
        let mut tracker = RevealTracker::new(&QUALITY);
        let observed: Vec<_> = tracker.observed_keys().collect();
        assert_eq!(observed, vec!["heading", "description", "features", "certifications"]);
        assert_eq!(tracker.intersect("top-certs"), None);
    }

    #[test]
    fn test_trackers_are_independent() {
        let mut first = RevealTracker::new(&ABOUT);
        let second = RevealTracker::new(&ABOUT);
        first.intersect("heading");
        first.reveal("heading");
        assert!(!second.is_revealed("heading"));
    }

    #[test]
    fn test_observer_options() {
        assert_eq!(ABOUT.observer.threshold, 0.1);
        assert_eq!(QUALITY.observer.threshold, 0.15);
        assert_eq!(QUALITY.observer.root_margin, "0px 0px -80px 0px");
    }

    #[test]
    fn test_stagger() {
        assert_eq!(stagger(0, 150), Duration::ZERO);
        assert_eq!(stagger(3, 100), Duration::from_millis(300));
    }

    #[test]
    fn test_reveal_with_borrowed_key() {
        let mut tracker = RevealTracker::new(&QUALITY);
        let key = String::from("certifications");
        tracker.intersect(&key);

        let chained = tracker.reveal(&key);
        assert_eq!(
            chained,
            vec![
                ("top-certs", Duration::from_millis(400)),
                ("iso-certs", Duration::from_millis(700)),
            ]
        );
    }
}
