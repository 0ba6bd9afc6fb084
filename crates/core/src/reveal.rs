//! One-shot reveal-on-scroll
//!
//! A [`RevealLatch`] turns a stream of viewport intersection reports into a
//! single hidden → visible transition. [`RevealController`] pairs the latch
//! with a [`ViewportObserver`] so the element is unsubscribed as soon as it
//! has been seen, and everything is released on unmount.
//!
//! Lifecycle:
//!
//! ```text
//! Hidden --intersect--> Pending(delay) --delay elapsed--> Revealed
//!    \                      |
//!     +------ dispose ------+-------------------> Disposed
//! ```
//!
//! `Revealed` is terminal for visibility: nothing moves it back to hidden.

use std::time::Duration;

/// Fraction of the element that must be visible before it counts as seen
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Transition classes applied to every reveal wrapper
pub const REVEAL_TRANSITION: &str = "transition-all duration-1000 ease-out";
pub const REVEAL_HIDDEN: &str = "opacity-0 translate-y-10";
pub const REVEAL_SHOWN: &str = "opacity-100 translate-y-0";

/// Builds the class list for a reveal wrapper
#[must_use]
pub fn reveal_classes(visible: bool, extra: &str) -> String {
    let state = if visible { REVEAL_SHOWN } else { REVEAL_HIDDEN };
    if extra.is_empty() {
        format!("{REVEAL_TRANSITION} {state}")
    } else {
        format!("{REVEAL_TRANSITION} {state} {extra}")
    }
}

/// Viewport-intersection subscription seam
///
/// Implemented over `IntersectionObserver` in the browser and by simple
/// recording doubles in tests.
pub trait ViewportObserver {
    type Target;

    /// Start reporting intersections for `target`
    fn observe(&mut self, target: &Self::Target);

    /// Stop reporting intersections for `target`
    fn unobserve(&mut self, target: &Self::Target);

    /// Stop reporting anything; the observer is not reused afterwards
    fn disconnect(&mut self);
}

/// Reveal lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Waiting for the first intersection
    Hidden,
    /// Seen; waiting out the delay
    Pending(Duration),
    /// Visible for the rest of the element's lifetime
    Revealed,
    /// Torn down before or after revealing
    Disposed { revealed: bool },
}

/// At-most-once visibility latch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealLatch {
    delay: Duration,
    phase: RevealPhase,
}

impl Default for RevealLatch {
    fn default() -> Self {
        Self::new(Duration::ZERO)
    }
}

impl RevealLatch {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            phase: RevealPhase::Hidden,
        }
    }

    /// Convenience constructor for the millisecond delays used in markup
    #[must_use]
    pub const fn with_delay_ms(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    #[must_use]
    pub const fn phase(&self) -> RevealPhase {
        self.phase
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        matches!(
            self.phase,
            RevealPhase::Revealed | RevealPhase::Disposed { revealed: true }
        )
    }

    /// Feeds one intersection report
    ///
    /// Returns the delay to wait before calling [`Self::on_delay_elapsed`],
    /// only for the first intersecting report. Every other report, including
    /// leaving the viewport, returns `None`.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<Duration> {
        match self.phase {
            RevealPhase::Hidden if is_intersecting => {
                self.phase = RevealPhase::Pending(self.delay);
                tracing::debug!(delay_ms = self.delay.as_millis(), "reveal scheduled");
                Some(self.delay)
            }
            _ => None,
        }
    }

    /// Marks the delay as elapsed; returns `true` if this call revealed the element
    pub fn on_delay_elapsed(&mut self) -> bool {
        match self.phase {
            RevealPhase::Pending(_) => {
                self.phase = RevealPhase::Revealed;
                true
            }
            _ => false,
        }
    }

    /// Freezes the latch; later reports and timers change nothing
    pub fn dispose(&mut self) {
        if !matches!(self.phase, RevealPhase::Disposed { .. }) {
            self.phase = RevealPhase::Disposed {
                revealed: self.is_visible(),
            };
        }
    }
}

/// Latch plus observer subscription for one element
pub struct RevealController<O: ViewportObserver> {
    latch: RevealLatch,
    observer: O,
    target: O::Target,
    observing: bool,
}

impl<O> RevealController<O>
where
    O: ViewportObserver,
{
    /// Subscribes `target` on `observer`
    pub fn mount(mut observer: O, target: O::Target, latch: RevealLatch) -> Self {
        observer.observe(&target);
        Self {
            latch,
            observer,
            target,
            observing: true,
        }
    }

    #[must_use]
    pub const fn latch(&self) -> &RevealLatch {
        &self.latch
    }

    #[must_use]
    pub const fn is_observing(&self) -> bool {
        self.observing
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.latch.is_visible()
    }

    /// Handles an intersection report from the observer
    ///
    /// The first intersecting report unsubscribes the target and returns the
    /// reveal delay.
    pub fn on_intersection(&mut self, is_intersecting: bool) -> Option<Duration> {
        let delay = self.latch.on_intersection(is_intersecting)?;
        if self.observing {
            self.observer.unobserve(&self.target);
            self.observing = false;
        }
        Some(delay)
    }

    /// Handles the delay timer firing; `true` if the element became visible
    pub fn on_delay_elapsed(&mut self) -> bool {
        self.latch.on_delay_elapsed()
    }

    /// Disconnects the observer and freezes the latch
    pub fn unmount(&mut self) {
        self.observer.disconnect();
        self.observing = false;
        self.latch.dispose();
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<&'static str>,
    }

    impl ViewportObserver for Recorder {
        type Target = u32;

        fn observe(&mut self, _target: &u32) {
            self.calls.push("observe");
        }

        fn unobserve(&mut self, _target: &u32) {
            self.calls.push("unobserve");
        }

        fn disconnect(&mut self) {
            self.calls.push("disconnect");
        }
    }

    #[test]
    fn test_latch_reveals_once_after_delay() {
        let mut latch = RevealLatch::with_delay_ms(200);
        assert!(!latch.is_visible());

        assert_eq!(latch.on_intersection(false), None);
        assert_eq!(latch.on_intersection(true), Some(Duration::from_millis(200)));
        assert!(!latch.is_visible());
        assert_eq!(latch.on_intersection(true), None);

        assert!(latch.on_delay_elapsed());
        assert!(latch.is_visible());
        assert!(!latch.on_delay_elapsed());
    }

    #[test]
    fn test_latch_ignores_delay_before_intersection() {
        let mut latch = RevealLatch::default();
        assert!(!latch.on_delay_elapsed());
        assert_eq!(latch.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn test_dispose_keeps_visibility() {
        let mut latch = RevealLatch::default();
        latch.on_intersection(true);
        latch.on_delay_elapsed();
        latch.dispose();
        assert!(latch.is_visible());
        assert_eq!(latch.phase(), RevealPhase::Disposed { revealed: true });
    }

    #[test]
    fn test_controller_unsubscribes_on_first_intersection() {
        let mut controller = RevealController::mount(Recorder::default(), 7, RevealLatch::default());
        assert!(controller.is_observing());

        assert_eq!(controller.on_intersection(true), Some(Duration::ZERO));
        assert!(!controller.is_observing());
        assert_eq!(controller.on_intersection(true), None);

        controller.unmount();
        assert_eq!(controller.observer.calls, vec!["observe", "unobserve", "disconnect"]);
    }

    #[test]
    fn test_reveal_classes() {
        assert_eq!(
            reveal_classes(false, ""),
            "transition-all duration-1000 ease-out opacity-0 translate-y-10"
        );
        assert_eq!(
            reveal_classes(true, "mb-4"),
            "transition-all duration-1000 ease-out opacity-100 translate-y-0 mb-4"
        );
    }
}
