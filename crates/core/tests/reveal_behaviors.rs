//! Behavioral tests for reveal-on-scroll

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use delta_core::reveal::{RevealController, RevealLatch, RevealPhase, ViewportObserver};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Observe(&'static str),
    Unobserve(&'static str),
    Disconnect,
}

/// Observer double sharing its call log with the test
#[derive(Clone, Default)]
struct SharedObserver {
    log: Rc<RefCell<Vec<Call>>>,
}

impl ViewportObserver for SharedObserver {
    type Target = &'static str;

    fn observe(&mut self, target: &&'static str) {
        self.log.borrow_mut().push(Call::Observe(*target));
    }

    fn unobserve(&mut self, target: &&'static str) {
        self.log.borrow_mut().push(Call::Unobserve(*target));
    }

    fn disconnect(&mut self) {
        self.log.borrow_mut().push(Call::Disconnect);
    }
}

#[test]
fn given_mounted_reveal_when_element_intersects_then_visible_after_delay() {
    let observer = SharedObserver::default();
    let mut reveal = RevealController::mount(observer.clone(), "hero-title", RevealLatch::with_delay_ms(400));

    let delay = reveal.on_intersection(true);

    assert_eq!(delay, Some(Duration::from_millis(400)));
    assert!(!reveal.is_visible(), "still hidden until the delay elapses");
    assert!(reveal.on_delay_elapsed());
    assert!(reveal.is_visible());
    assert_eq!(
        *observer.log.borrow(),
        vec![Call::Observe("hero-title"), Call::Unobserve("hero-title")]
    );
}

#[test]
fn given_revealed_element_when_it_leaves_and_reenters_then_stays_visible() {
    let mut reveal = RevealController::mount(SharedObserver::default(), "card", RevealLatch::default());
    reveal.on_intersection(true);
    reveal.on_delay_elapsed();

    for intersecting in [false, true, false, true] {
        assert_eq!(reveal.on_intersection(intersecting), None);
        assert!(reveal.is_visible());
    }
    assert!(!reveal.on_delay_elapsed(), "no second transition");
}

#[test]
fn given_element_not_yet_seen_when_leaving_reports_arrive_then_stays_hidden() {
    let mut reveal = RevealController::mount(SharedObserver::default(), "card", RevealLatch::default());

    assert_eq!(reveal.on_intersection(false), None);

    assert!(reveal.is_observing());
    assert_eq!(reveal.latch().phase(), RevealPhase::Hidden);
}

#[test]
fn given_unmount_before_intersection_when_callbacks_arrive_then_nothing_changes() {
    let observer = SharedObserver::default();
    let mut reveal = RevealController::mount(observer.clone(), "map", RevealLatch::default());

    reveal.unmount();

    assert_eq!(reveal.on_intersection(true), None);
    assert!(!reveal.on_delay_elapsed());
    assert!(!reveal.is_visible());
    assert_eq!(
        *observer.log.borrow(),
        vec![Call::Observe("map"), Call::Disconnect]
    );
}

#[test]
fn given_unmount_during_delay_when_timer_fires_then_stays_hidden() {
    let mut reveal = RevealController::mount(SharedObserver::default(), "cta", RevealLatch::with_delay_ms(800));
    reveal.on_intersection(true);

    reveal.unmount();

    assert!(!reveal.on_delay_elapsed());
    assert!(!reveal.is_visible());
}

#[test]
fn given_staggered_siblings_when_all_intersect_then_each_has_own_delay() {
    let observer = SharedObserver::default();
    let delays = [0_u64, 200, 400, 600, 800];
    let mut reveals: Vec<_> = delays
        .iter()
        .map(|&ms| RevealController::mount(observer.clone(), "child", RevealLatch::with_delay_ms(ms)))
        .collect();

    let scheduled: Vec<_> = reveals
        .iter_mut()
        .filter_map(|reveal| reveal.on_intersection(true))
        .collect();

    assert_eq!(
        scheduled,
        delays.iter().map(|&ms| Duration::from_millis(ms)).collect::<Vec<_>>()
    );
}
