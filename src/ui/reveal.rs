//! Scroll-triggered reveal for page sections
//!
//! Each view gets its own [`RevealScope`]; reveal flags live in a
//! [`RevealTracker`] owned by that scope and disappear with the view.

use leptos::html::Div;
use leptos::prelude::*;
use std::collections::HashMap;

use crate::core::reveal::{RevealTracker, SectionReveal};

#[cfg(not(feature = "ssr"))]
use std::time::Duration;

/// Node refs and reveal flags for the targets of one section
#[derive(Clone, Copy)]
pub struct RevealScope {
    tracker: RwSignal<RevealTracker>,
    nodes: StoredValue<HashMap<&'static str, NodeRef<Div>>>,
}

impl RevealScope {
    /// Node ref to attach to the wrapper of `key`
    pub fn node(self, key: &'static str) -> NodeRef<Div> {
        self.nodes
            .with_value(|nodes| nodes.get(key).copied())
            .unwrap_or_default()
    }

    /// Reactive: whether `key` has been revealed
    pub fn is_revealed(self, key: &'static str) -> bool {
        self.tracker.with(|t| t.is_revealed(key))
    }

    /// Class string for a target: `base` plus the hidden or visible modifier
    pub fn class(self, key: &'static str, base: &'static str) -> impl Fn() -> String + Copy + 'static {
        move || {
            if self.is_revealed(key) {
                format!("{base} reveal reveal-visible")
            } else {
                format!("{base} reveal")
            }
        }
    }
}

/// Reveal `key` now and schedule anything chained to it
#[cfg(not(feature = "ssr"))]
fn schedule_reveal(tracker: RwSignal<RevealTracker>, key: &'static str, delay: Duration) {
    set_timeout(
        move || {
            if let Some(chained) = tracker.try_update(|t| t.reveal(key)) {
                for (next, delay) in chained {
                    schedule_reveal(tracker, next, delay);
                }
            }
        },
        delay,
    );
}

/// Observe the targets of `section` and reveal them once as they scroll in
pub fn use_reveal(section: &'static SectionReveal) -> RevealScope {
    let tracker = RwSignal::new(RevealTracker::new(section));
    let nodes: HashMap<&'static str, NodeRef<Div>> = tracker
        .with_untracked(|t| t.observed_keys().collect::<Vec<_>>())
        .into_iter()
        .map(|key| (key, NodeRef::new()))
        .collect();
    let scope = RevealScope {
        tracker,
        nodes: StoredValue::new(nodes),
    };

    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::{JsCast, closure::Closure};
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        type Callback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

        let observer_slot: StoredValue<Option<(IntersectionObserver, Callback)>, LocalStorage> =
            StoredValue::new_local(None);

        Effect::new(move |_| {
            // Wait until every target is mounted
            let elements: Option<Vec<(&'static str, web_sys::Element)>> = scope.nodes.with_value(|nodes| {
                nodes
                    .iter()
                    .map(|(key, node)| node.get().map(|el| (*key, el.unchecked_into())))
                    .collect()
            });
            let Some(elements) = elements else {
                return;
            };
            if observer_slot.with_value(Option::is_some) {
                return;
            }

            let targets = elements.clone();
            let callback: Callback = Closure::new(
                move |entries: js_sys::Array, observer: IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: IntersectionObserverEntry = entry.unchecked_into();
                        if !entry.is_intersecting() {
                            continue;
                        }
                        let target = entry.target();
                        // Single-shot per element
                        observer.unobserve(&target);

                        let Some(key) = targets.iter().find(|(_, el)| *el == target).map(|(key, _)| *key) else {
                            continue;
                        };
                        if let Some(Some(delay)) = tracker.try_update(|t| t.intersect(key)) {
                            schedule_reveal(tracker, key, delay);
                        }
                    }
                },
            );

            let init = IntersectionObserverInit::new();
            init.set_threshold(&section.observer.threshold.into());
            init.set_root_margin(section.observer.root_margin);

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init) {
                Ok(observer) => {
                    for (_, element) in &elements {
                        observer.observe(element);
                    }
                    observer_slot.set_value(Some((observer, callback)));
                }
                Err(e) => {
                    leptos::logging::error!("IntersectionObserver unavailable: {:?}", e);
                    // Without an observer, show everything
                    for &(key, _) in &elements {
                        tracker.update(|t| {
                            t.intersect(key);
                        });
                        schedule_reveal(tracker, key, Duration::ZERO);
                    }
                }
            }
        });

        on_cleanup(move || {
            if let Some(Some((observer, _callback))) = observer_slot.try_update_value(Option::take) {
                observer.disconnect();
            }
        });
    }

    scope
}
