use super::*;

#[test]
fn first_sample_pins_start_and_returns_origin() {
    let mut tween = Tween::new(10.0, 20.0, 100.0, Curve::EaseOutCubic);
    assert_eq!(tween.started_at(), None);
    let s = tween.sample(5_000.0);
    assert_eq!(tween.started_at(), Some(5_000.0));
    assert_eq!(s, Sample { value: 10.0, done: false });
}

#[test]
fn sample_reaches_exact_target_at_duration() {
    let mut tween = Tween::new(0.0, 300.0, 100.0, Curve::EaseInOutCubic);
    tween.sample(0.0);
    assert_eq!(tween.sample(100.0), Sample { value: 300.0, done: true });
    assert_eq!(tween.sample(250.0), Sample { value: 300.0, done: true });
}

#[test]
fn clock_running_backwards_is_treated_as_zero_elapsed() {
    let mut tween = Tween::new(0.0, 1.0, 100.0, Curve::EaseOutCubic);
    tween.sample(50.0);
    assert_eq!(tween.sample(10.0).value, 0.0);
}

#[test]
fn zero_duration_finishes_on_first_frame() {
    let mut tween = Tween::new(0.0, 8.0, 0.0, Curve::EaseOutCubic);
    assert_eq!(tween.sample(1.0), Sample { value: 8.0, done: true });
}

#[test]
fn smooth_scroll_runs_for_one_second() {
    let mut scroll = SmoothScroll::new(1_000.0, 200.0);
    assert_eq!(scroll.target(), 200.0);
    assert_eq!(scroll.frame(16.0).value, 1_000.0);
    let mid = scroll.frame(516.0);
    assert!(!mid.done);
    assert!((mid.value - 600.0).abs() < 1e-9);
    let near_end = scroll.frame(1_000.0);
    assert!(!near_end.done);
    assert!(near_end.value > 200.0);
    assert_eq!(scroll.frame(1_016.0), Sample { value: 200.0, done: true });
}
