//! Unit tests for debounce gates.

use wireboard::debounce::{Clock, DebounceGate, ManualClock};

#[test]
fn test_polls_inside_interval_fire_at_most_once() {
    for interval in [1, 100, 250] {
        for gap in 0..interval {
            let mut gate = DebounceGate::with_interval_ms(interval);
            let first = gate.poll_at(1_000);
            let second = gate.poll_at(1_000 + gap);
            assert!(first, "first poll always fires");
            assert!(!second, "interval {interval}, gap {gap}");
        }
    }
}

#[test]
fn test_polls_beyond_interval_both_fire() {
    for interval in [0, 1, 100, 250] {
        let mut gate = DebounceGate::with_interval_ms(interval);
        assert!(gate.poll_at(0));
        assert!(gate.poll_at(interval + 1));
        assert!(gate.poll_at(2 * interval + 2));
    }
}

#[test]
fn test_accepted_poll_restarts_interval() {
    let mut gate = DebounceGate::with_interval_ms(100);
    assert!(gate.poll_at(0));
    assert!(gate.poll_at(150));
    // measured from 150, not from 0
    assert!(!gate.poll_at(220));
    assert!(gate.poll_at(251));
}

#[test]
fn test_rejected_poll_does_not_restart_interval() {
    let mut gate = DebounceGate::with_interval_ms(100);
    assert!(gate.poll_at(0));
    assert!(!gate.poll_at(90));
    assert!(gate.poll_at(101));
}

#[test]
fn test_exactly_interval_is_rejected() {
    let mut gate = DebounceGate::with_interval_ms(200);
    assert!(gate.poll_at(10));
    assert!(!gate.poll_at(210));
    assert!(gate.poll_at(211));
}

#[test]
fn test_manual_clock_is_shared_between_clones() {
    let clock = ManualClock::starting_at(5);
    let handle = clock.clone();
    handle.advance(20);
    assert_eq!(clock.now_ms(), 25);

    let mut gate = DebounceGate::with_interval_ms(10);
    assert!(gate.poll(&clock));
    handle.advance(5);
    assert!(!gate.poll(&clock));
    handle.advance(6);
    assert!(gate.poll(&clock));
}

#[test]
fn test_reset_lets_next_poll_fire() {
    let mut gate = DebounceGate::with_interval_ms(1_000);
    assert!(gate.poll_at(0));
    gate.reset();
    assert!(gate.poll_at(1));
}
