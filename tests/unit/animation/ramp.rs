use super::*;

#[test]
fn fade_in_reaches_target_and_stops() {
    let mut r = HoverRamp::fade_in(28);
    assert_eq!(r.opacity(), 0);
    r = r.advance(1);
    assert_eq!(r.opacity(), 28);
    assert!(r.is_active());

    // 28 * 9 = 252, the tenth step overshoots and snaps.
    r = r.advance(8);
    assert_eq!(r.opacity(), 252);
    assert!(r.is_active());
    r = r.advance(1);
    assert_eq!(r.opacity(), 255);
    assert!(!r.is_active());
}

#[test]
fn fade_out_snaps_to_zero() {
    let r = HoverRamp::fade_out(28).advance(100);
    assert_eq!(r.opacity(), 0);
    assert!(!r.is_active());
}

#[test]
fn exact_landing_on_target_stops() {
    let r = HoverRamp::fade_in(255).advance(1);
    assert_eq!(r.opacity(), 255);
    assert!(!r.is_active());
}

#[test]
fn idle_ramp_does_not_move() {
    let r = HoverRamp::idle(40).advance(5);
    assert_eq!(r.opacity(), 40);
    assert!(!r.is_active());
}

#[test]
fn resume_in_keeps_current_alpha() {
    let half = HoverRamp::fade_out(28).advance(2);
    assert_eq!(half.opacity(), 199);
    let r = half.resume_in(28);
    assert_eq!(r.opacity(), 199);
    assert_eq!(r.target(), 255);
    assert_eq!(r.advance(1).opacity(), 227);
}

#[test]
fn zero_step_still_reaches_the_target() {
    let up = HoverRamp::fade_in(0).advance(255);
    assert_eq!(up.opacity(), 255);
    assert!(!up.is_active());

    let down = HoverRamp::fade_out(0).advance(255);
    assert_eq!(down.opacity(), 0);
    assert!(!down.is_active());
}

#[test]
fn oversized_step_finishes_in_one_tick() {
    let r = HoverRamp::fade_in(i32::MIN).advance(1);
    assert_eq!(r.opacity(), 255);
    assert!(!r.is_active());
}
