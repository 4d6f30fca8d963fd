use super::*;

#[test]
fn new_tracker_reports_no_swipe() {
    assert_eq!(SwipeTracker::new().end(0.0), None);
}

#[test]
fn later_begin_replaces_the_start() {
    let mut swipe = SwipeTracker::new();
    swipe.begin(200.0);
    swipe.begin(100.0);
    assert_eq!(swipe.end(80.0), None);
}

#[test]
fn swipe_left_past_threshold_is_next() {
    let mut swipe = SwipeTracker::new();
    swipe.begin(300.0);
    assert_eq!(swipe.end(200.0), Some(Direction::Next));
}

#[test]
fn swipe_right_past_threshold_is_prev() {
    let mut swipe = SwipeTracker::new();
    swipe.begin(100.0);
    assert_eq!(swipe.end(151.0), Some(Direction::Prev));
}

#[test]
fn travel_at_threshold_is_not_a_swipe() {
    let mut swipe = SwipeTracker::new();
    swipe.begin(100.0);
    assert_eq!(swipe.end(50.0), None);
    swipe.begin(100.0);
    assert_eq!(swipe.end(150.0), None);
}

#[test]
fn short_travel_is_ignored() {
    let mut swipe = SwipeTracker::new();
    swipe.begin(100.0);
    assert_eq!(swipe.end(120.0), None);
}

#[test]
fn end_without_begin_is_ignored() {
    let mut swipe = SwipeTracker::new();
    assert_eq!(swipe.end(0.0), None);
}

#[test]
fn end_consumes_the_start() {
    let mut swipe = SwipeTracker::new();
    swipe.begin(300.0);
    assert_eq!(swipe.end(0.0), Some(Direction::Next));
    assert_eq!(swipe.end(0.0), None);
}
