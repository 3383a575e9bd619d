//! Image rotator state machine for the product detail gallery
//!
//! The rotator never touches a clock itself. Every transition that needs a
//! timer returns a [`TimerRequest`] carrying a [`TimerToken`]; the owning view
//! installs that request into its single timer slot, replacing (and thereby
//! cancelling) whatever was there before. Timer callbacks report back with the
//! token they were armed with, and tokens from before the latest transition
//! are ignored, so a late timer can never act on a product it was not armed for.

use std::time::Duration;

/// Period of automatic advancement
pub const ADVANCE_INTERVAL: Duration = Duration::from_millis(3_500);

/// How long a manual selection suppresses automatic advancement
pub const RESUME_DELAY: Duration = Duration::from_millis(6_000);

/// Duration of the crossfade between two images
pub const CROSSFADE: Duration = Duration::from_millis(500);

/// Rotation mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationMode {
    /// Timer-driven advancement
    Auto,
    /// The user just picked an image; waiting to resume
    Paused,
    /// Nothing to rotate (no product, empty gallery, or unmounted)
    Stopped,
}

/// Identifies the transition a timer was armed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// Timer the owning view must install, replacing its current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRequest {
    /// Recurring timer; report each tick with [`Rotator::advance`]
    Repeat { token: TimerToken, every: Duration },
    /// One-shot timer; report with [`Rotator::resume`]
    Once { token: TimerToken, after: Duration },
}

impl TimerRequest {
    pub fn token(&self) -> TimerToken {
        match self {
            TimerRequest::Repeat { token, .. } | TimerRequest::Once { token, .. } => *token,
        }
    }

    pub fn delay(&self) -> Duration {
        match self {
            TimerRequest::Repeat { every, .. } => *every,
            TimerRequest::Once { after, .. } => *after,
        }
    }
}

/// An in-progress crossfade. `from` stays rendered underneath until settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossfade {
    pub from: usize,
    pub to: usize,
    seq: u64,
}

impl Crossfade {
    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// Per-view rotation state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotator {
    product: Option<String>,
    len: usize,
    active: usize,
    mode: RotationMode,
    epoch: u64,
    fade: Option<Crossfade>,
    fade_seq: u64,
}

impl Rotator {
    /// A rotator with nothing loaded
    pub fn new() -> Self {
        Self {
            product: None,
            len: 0,
            active: 0,
            mode: RotationMode::Stopped,
            epoch: 0,
            fade: None,
            fade_seq: 0,
        }
    }

    /// Load a product gallery of `len` images.
    ///
    /// Reloading the product already shown is a no-op. Any other product
    /// invalidates outstanding timers, resets to the first image and starts
    /// automatic rotation. Empty galleries schedule nothing.
    pub fn load(&mut self, product_id: &str, len: usize) -> Option<TimerRequest> {
        if self.product.as_deref() == Some(product_id) && self.len == len {
            return None;
        }

        self.product = Some(product_id.to_string());
        self.len = len;
        self.active = 0;
        self.fade = None;
        self.bump_epoch();

        if len == 0 {
            self.mode = RotationMode::Stopped;
            return None;
        }

        self.mode = RotationMode::Auto;
        Some(self.repeat_request())
    }

    /// Handle a tick of the recurring timer. Returns whether the image changed.
    pub fn advance(&mut self, token: TimerToken) -> bool {
        if token != self.current_token() || self.mode != RotationMode::Auto || self.len == 0 {
            return false;
        }

        let next = (self.active + 1) % self.len;
        self.show(next);
        true
    }

    /// Manual selection of image `index`.
    ///
    /// Out-of-range selections are ignored and leave the current timer alone.
    pub fn select(&mut self, index: usize) -> Option<TimerRequest> {
        if self.mode == RotationMode::Stopped || index >= self.len {
            return None;
        }

        self.show(index);
        self.mode = RotationMode::Paused;
        self.bump_epoch();

        Some(TimerRequest::Once {
            token: self.current_token(),
            after: RESUME_DELAY,
        })
    }

    /// Handle the one-shot resume timer
    pub fn resume(&mut self, token: TimerToken) -> Option<TimerRequest> {
        if token != self.current_token() || self.mode != RotationMode::Paused {
            return None;
        }

        self.mode = RotationMode::Auto;
        self.bump_epoch();
        Some(self.repeat_request())
    }

    /// The view is going away; every outstanding token becomes stale
    pub fn unmount(&mut self) {
        self.bump_epoch();
        self.product = None;
        self.len = 0;
        self.active = 0;
        self.mode = RotationMode::Stopped;
        self.fade = None;
    }

    /// Mark the crossfade with sequence `seq` as finished
    pub fn settle_fade(&mut self, seq: u64) {
        if self.fade.is_some_and(|f| f.seq == seq) {
            self.fade = None;
        }
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn mode(&self) -> RotationMode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn product_id(&self) -> Option<&str> {
        self.product.as_deref()
    }

    pub fn fade(&self) -> Option<Crossfade> {
        self.fade
    }

    /// Index of the image still shown beneath the current one, if fading
    pub fn underlay(&self) -> Option<usize> {
        self.fade.map(|f| f.from)
    }

    fn show(&mut self, index: usize) {
        if index != self.active {
            self.fade_seq += 1;
            self.fade = Some(Crossfade {
                from: self.active,
                to: index,
                seq: self.fade_seq,
            });
        }
        self.active = index;
    }

    fn bump_epoch(&mut self) {
        self.epoch += 1;
    }

    fn current_token(&self) -> TimerToken {
        TimerToken(self.epoch)
    }

    fn repeat_request(&self) -> TimerRequest {
        TimerRequest::Repeat {
            token: self.current_token(),
            every: ADVANCE_INTERVAL,
        }
    }
}

impl Default for Rotator {
    fn default() -> Self {
        Self::new()
    }
}
