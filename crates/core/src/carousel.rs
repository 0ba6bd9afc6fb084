//! Auto-advancing carousel
//!
//! The carousel owns its index and the two autoplay switches (the logical
//! `auto_play` flag and the transient pointer-hover pause). It never touches a
//! clock itself: every call that changes whether the timer should run returns
//! a [`TimerDirective`], and the host applies it to a real interval timer.
//!
//! Each started timer is identified by a [`TimerToken`]. Ticks are delivered
//! back through [`Carousel::on_tick`] with that token; ticks from a timer that
//! has since been replaced or stopped are ignored, which keeps a late callback
//! from advancing the carousel after a restart or teardown.

use std::time::Duration;

use crate::error::Error;
use crate::result::Result;

/// Autoplay period used when none is configured
pub const DEFAULT_AUTO_PLAY_INTERVAL: Duration = Duration::from_millis(5000);

/// Identity of one scheduled autoplay timer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken(u64);

/// What the host should do with its autoplay timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerDirective {
    /// Leave the current timer (or lack of one) alone
    Keep,
    /// Replace any running timer with a new one firing every `period`
    Start { token: TimerToken, period: Duration },
    /// Cancel the running timer
    Stop,
}

/// Rotating single-item display over a fixed list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    interval: Duration,
    auto_play: bool,
    hovered: bool,
    mounted: bool,
    disposed: bool,
    token: Option<TimerToken>,
    issued: u64,
}

impl<T> Carousel<T> {
    /// Creates an unmounted carousel with autoplay on
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCarousel`] for an empty list and
    /// [`Error::InvalidInterval`] for a zero interval.
    pub fn new(items: Vec<T>, interval: Duration) -> Result<Self> {
        if items.is_empty() {
            return Err(Error::EmptyCarousel);
        }
        if interval.is_zero() {
            return Err(Error::InvalidInterval);
        }
        Ok(Self {
            items,
            index: 0,
            interval,
            auto_play: true,
            hovered: false,
            mounted: false,
            disposed: false,
            token: None,
            issued: 0,
        })
    }

    /// Creates a carousel with [`DEFAULT_AUTO_PLAY_INTERVAL`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyCarousel`] for an empty list.
    pub fn with_default_interval(items: Vec<T>) -> Result<Self> {
        Self::new(items, DEFAULT_AUTO_PLAY_INTERVAL)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false; kept for API symmetry with `len`
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    #[must_use]
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    #[must_use]
    pub const fn is_current(&self, index: usize) -> bool {
        self.index == index
    }

    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    #[must_use]
    pub const fn auto_play(&self) -> bool {
        self.auto_play
    }

    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    #[must_use]
    pub const fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Whether an autoplay timer should be running right now
    #[must_use]
    pub const fn timer_active(&self) -> bool {
        self.mounted && !self.disposed && self.auto_play && !self.hovered
    }

    /// Token of the timer the host should currently be running
    #[must_use]
    pub const fn active_token(&self) -> Option<TimerToken> {
        self.token
    }

    /// Called once the carousel is on screen; starts autoplay if enabled
    pub fn mount(&mut self) -> TimerDirective {
        if self.disposed {
            return TimerDirective::Keep;
        }
        let was_active = self.timer_active();
        self.mounted = true;
        self.reconcile(was_active)
    }

    /// Called on teardown; every later call is a no-op
    pub fn unmount(&mut self) -> TimerDirective {
        self.disposed = true;
        self.mounted = false;
        self.token = None;
        tracing::debug!("carousel disposed");
        TimerDirective::Stop
    }

    /// Moves forward with wraparound
    pub fn next(&mut self) {
        if self.disposed {
            return;
        }
        self.index = self
            .index
            .checked_add(1)
            .and_then(|next| next.checked_rem(self.items.len()))
            .unwrap_or(0);
    }

    /// Moves backward with wraparound
    pub fn prev(&mut self) {
        if self.disposed {
            return;
        }
        self.index = self
            .index
            .checked_sub(1)
            .unwrap_or_else(|| self.items.len().saturating_sub(1));
    }

    /// Jumps to `index` and restarts the timer phase
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if `index >= len`; nothing changes.
    pub fn go_to(&mut self, index: usize) -> Result<TimerDirective> {
        if index >= self.items.len() {
            tracing::warn!(index, len = self.items.len(), "rejected carousel jump");
            return Err(Error::index_out_of_range(index, self.items.len()));
        }
        if self.disposed {
            return Ok(TimerDirective::Keep);
        }
        self.index = index;
        if self.timer_active() {
            Ok(self.start_timer())
        } else {
            Ok(TimerDirective::Keep)
        }
    }

    /// Sets the logical autoplay flag
    pub fn set_auto_play(&mut self, on: bool) -> TimerDirective {
        let was_active = self.timer_active();
        self.auto_play = on;
        self.reconcile(was_active)
    }

    pub fn toggle_auto_play(&mut self) -> TimerDirective {
        self.set_auto_play(!self.auto_play)
    }

    /// Pointer entered the carousel; pauses without touching `auto_play`
    pub fn pointer_enter(&mut self) -> TimerDirective {
        let was_active = self.timer_active();
        self.hovered = true;
        self.reconcile(was_active)
    }

    /// Pointer left the carousel; resumes if `auto_play` is still on
    pub fn pointer_leave(&mut self) -> TimerDirective {
        let was_active = self.timer_active();
        self.hovered = false;
        self.reconcile(was_active)
    }

    /// Delivers a timer firing; returns `true` if it advanced the carousel
    pub fn on_tick(&mut self, token: TimerToken) -> bool {
        if self.token != Some(token) || !self.timer_active() {
            return false;
        }
        self.next();
        true
    }

    /// Aria label for the navigation dot at `index`
    #[must_use]
    pub fn dot_label(index: usize) -> String {
        format!("עבור להמלצה {}", index.saturating_add(1))
    }

    fn reconcile(&mut self, was_active: bool) -> TimerDirective {
        match (was_active, self.timer_active()) {
            (false, true) => self.start_timer(),
            (true, false) => {
                self.token = None;
                TimerDirective::Stop
            }
            _ => TimerDirective::Keep,
        }
    }

    fn start_timer(&mut self) -> TimerDirective {
        self.issued = self.issued.wrapping_add(1);
        let token = TimerToken(self.issued);
        self.token = Some(token);
        TimerDirective::Start {
            token,
            period: self.interval,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    fn carousel(n: u32) -> Carousel<u32> {
        Carousel::with_default_interval((0..n).collect()).unwrap()
    }

    fn started_token(directive: TimerDirective) -> TimerToken {
        match directive {
            TimerDirective::Start { token, .. } => token,
            other => panic!("expected Start, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_empty_list_and_zero_interval() {
        assert_eq!(
            Carousel::<u32>::with_default_interval(Vec::new()),
            Err(Error::EmptyCarousel)
        );
        assert_eq!(
            Carousel::new(vec![1], Duration::ZERO),
            Err(Error::InvalidInterval)
        );
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut c = carousel(3);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut c = carousel(1);
        c.next();
        assert_eq!(c.index(), 0);
        c.prev();
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_mount_starts_timer_with_interval() {
        let mut c = Carousel::new(vec![1, 2], Duration::from_millis(1200)).unwrap();
        assert!(!c.timer_active());
        match c.mount() {
            TimerDirective::Start { period, .. } => assert_eq!(period, Duration::from_millis(1200)),
            other => panic!("expected Start, got {other:?}"),
        }
        assert!(c.timer_active());
    }

    #[test]
    fn test_go_to_out_of_range_is_rejected() {
        let mut c = carousel(5);
        c.mount();
        c.next();
        assert_eq!(c.go_to(5), Err(Error::IndexOutOfRange { index: 5, len: 5 }));
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_go_to_restarts_timer_phase() {
        let mut c = carousel(5);
        let first = started_token(c.mount());
        let second = started_token(c.go_to(3).unwrap());
        assert_ne!(first, second);

        assert!(!c.on_tick(first), "old timer must not advance");
        assert!(c.on_tick(second));
        assert_eq!(c.index(), 4);
    }

    #[test]
    fn test_go_to_while_paused_keeps_timer_stopped() {
        let mut c = carousel(5);
        c.mount();
        assert_eq!(c.pointer_enter(), TimerDirective::Stop);
        assert_eq!(c.go_to(2), Ok(TimerDirective::Keep));
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_hover_and_toggle_are_independent() {
        let mut c = carousel(3);
        c.mount();

        assert_eq!(c.pointer_enter(), TimerDirective::Stop);
        assert!(c.auto_play());

        // Turning autoplay off while hovered changes nothing on the timer
        assert_eq!(c.toggle_auto_play(), TimerDirective::Keep);
        assert_eq!(c.pointer_leave(), TimerDirective::Keep);
        assert!(!c.timer_active());

        assert!(matches!(c.toggle_auto_play(), TimerDirective::Start { .. }));
    }

    #[test]
    fn test_unmount_ignores_everything_after() {
        let mut c = carousel(3);
        let token = started_token(c.mount());
        assert_eq!(c.unmount(), TimerDirective::Stop);

        assert!(!c.on_tick(token));
        c.next();
        assert_eq!(c.index(), 0);
        assert_eq!(c.pointer_leave(), TimerDirective::Keep);
        assert_eq!(c.mount(), TimerDirective::Keep);
        assert_eq!(c.go_to(2), Ok(TimerDirective::Keep));
        assert_eq!(c.index(), 0);
    }

    #[test]
    fn test_dot_label_is_one_based() {
        assert_eq!(Carousel::<u32>::dot_label(0), "עבור להמלצה 1");
    }
}
