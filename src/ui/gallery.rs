//! Product image gallery with automatic rotation
//!
//! The [`Rotator`] decides what is shown; this view owns the single platform
//! timer the rotator asks for and replaces it whenever a new request arrives.

use leptos::prelude::*;

use crate::core::catalog::ImageRef;
use crate::core::rotator::Rotator;
use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
use crate::core::rotator::{CROSSFADE, RotationMode, TimerRequest};

/// Handle of the currently armed rotation timer
#[cfg(not(feature = "ssr"))]
#[derive(Clone, Copy)]
enum TimerSlot {
    Repeat(IntervalHandle),
    Once(TimeoutHandle),
}

#[cfg(not(feature = "ssr"))]
impl TimerSlot {
    fn clear(self) {
        match self {
            TimerSlot::Repeat(handle) => handle.clear(),
            TimerSlot::Once(handle) => handle.clear(),
        }
    }
}

#[cfg(not(feature = "ssr"))]
type Slot = StoredValue<Option<TimerSlot>>;

/// Replace whatever timer is armed with `next`
#[cfg(not(feature = "ssr"))]
fn replace_timer(slot: Slot, next: Option<TimerSlot>) {
    if let Some(Some(previous)) = slot.try_update_value(|current| std::mem::replace(current, next)) {
        previous.clear();
    }
}

/// Arm the platform timer for `request`
#[cfg(not(feature = "ssr"))]
fn arm(rotator: RwSignal<Rotator>, slot: Slot, request: TimerRequest) {
    let armed = match request {
        TimerRequest::Repeat { token, every } => set_interval_with_handle(
            move || {
                if rotator.try_update(|r| r.advance(token)) == Some(true) {
                    settle_later(rotator);
                }
            },
            every,
        )
        .map(TimerSlot::Repeat),
        TimerRequest::Once { token, after } => set_timeout_with_handle(
            move || {
                // Only a current token yields a new request; stale timers leave the slot alone
                if let Some(Some(next)) = rotator.try_update(|r| r.resume(token)) {
                    arm(rotator, slot, next);
                }
            },
            after,
        )
        .map(TimerSlot::Once),
    };

    match armed {
        Ok(handle) => replace_timer(slot, Some(handle)),
        Err(e) => {
            leptos::logging::error!("failed to arm gallery timer: {:?}", e);
            replace_timer(slot, None);
        }
    }
}

/// Drop the underlay once the current crossfade has finished
#[cfg(not(feature = "ssr"))]
fn settle_later(rotator: RwSignal<Rotator>) {
    let Some(Some(fade)) = rotator.try_with_untracked(|r| r.fade()) else {
        return;
    };
    set_timeout(
        move || {
            rotator.try_update(|r| r.settle_fade(fade.seq()));
        },
        CROSSFADE,
    );
}

/// Position overlay text, e.g. "2 / 5"
fn counter_label(index: usize, len: usize) -> String {
    format!("{} / {}", (index + 1).min(len), len)
}

/// Rotating gallery for one product
#[component]
pub fn ProductGallery(
    /// Identity of the product shown; a change resets rotation
    #[prop(into)]
    product_id: Signal<String>,
    /// Gallery images in display order
    #[prop(into)]
    images: Signal<Vec<ImageRef>>,
    /// Alt text base
    #[prop(into)]
    title: Signal<String>,
) -> impl IntoView {
    let rotator = RwSignal::new(Rotator::new());

    #[cfg(not(feature = "ssr"))]
    let slot: Slot = StoredValue::new(None);

    #[cfg(not(feature = "ssr"))]
    {
        Effect::new(move |_| {
            let id = product_id.get();
            let len = images.with(Vec::len);

            let request = rotator.try_update(|r| r.load(&id, len)).flatten();
            match request {
                Some(request) => arm(rotator, slot, request),
                None => {
                    if rotator.with_untracked(|r| r.mode() == RotationMode::Stopped) {
                        replace_timer(slot, None);
                    }
                }
            }
        });

        on_cleanup(move || {
            replace_timer(slot, None);
            rotator.try_update(|r| r.unmount());
        });
    }

    #[cfg(feature = "ssr")]
    let _ = product_id;

    let select = move |index: usize| {
        let request = rotator.try_update(|r| r.select(index)).flatten();
        #[cfg(not(feature = "ssr"))]
        {
            if let Some(request) = request {
                settle_later(rotator);
                arm(rotator, slot, request);
            }
        }
        #[cfg(feature = "ssr")]
        {
            let _ = request;
        }
    };

    let active = Memo::new(move |_| rotator.with(|r| r.active_index()));
    let underlay = Memo::new(move |_| rotator.with(|r| r.underlay()));
    let image_at = move |index: usize| images.with(|imgs| imgs.get(index).cloned());

    view! {
        <div class="gallery">
            <Show
                when=move || images.with(|imgs| !imgs.is_empty())
                fallback=|| view! {
                    <div class="gallery-placeholder">
                        <Icon name=icons::IMAGE class="w-12 h-12 opacity-40"/>
                        <span>"No images available"</span>
                    </div>
                }
            >
                <div class="gallery-stage">
                    // Previous image stays underneath until the fade completes
                    {move || underlay.get().and_then(image_at).map(|img| view! {
                        <img
                            src=img.to_string()
                            alt=""
                            aria-hidden="true"
                            class="gallery-image gallery-underlay"
                        />
                    })}
                    // Re-created on every change so the fade animation restarts
                    {move || {
                        let index = active.get();
                        image_at(index).map(|img| view! {
                            <img
                                src=img.to_string()
                                alt=move || format!("{} - image {}", title.get(), index + 1)
                                class="gallery-image gallery-fade-in"
                            />
                        })
                    }}
                    <div class="gallery-counter" aria-live="polite">
                        {move || counter_label(active.get(), images.with(Vec::len))}
                    </div>
                </div>

                <div class="gallery-thumbs" role="tablist">
                    <For
                        each=move || images.get().into_iter().enumerate()
                        key=|(index, img)| (*index, img.clone())
                        let:entry
                    >
                        {
                            let (index, img) = entry;
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class="gallery-thumb"
                                    class:gallery-thumb-active=move || active.get() == index
                                    aria-selected=move || (active.get() == index).to_string()
                                    aria-label=format!("Show image {}", index + 1)
                                    on:click=move |_| select(index)
                                >
                                    <img src=img.to_string() alt="" loading="lazy"/>
                                </button>
                            }
                        }
                    </For>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_label() {
        assert_eq!(counter_label(0, 5), "1 / 5");
        assert_eq!(counter_label(4, 5), "5 / 5");
        assert_eq!(counter_label(0, 1), "1 / 1");
        // Index left over from a longer list never exceeds the total
        assert_eq!(counter_label(6, 3), "3 / 3");
    }
}
