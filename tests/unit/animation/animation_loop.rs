use super::*;

#[test]
fn runs_while_requests_are_outstanding() {
    let mut l = AnimationLoop::new();
    assert!(l.request());
    assert!(!l.request());
    assert!(l.is_running());

    assert!(!l.end_request());
    assert!(l.is_running());
    assert!(l.end_request());
    assert!(!l.is_running());
    assert_eq!(l.requests(), 0);
}

#[test]
fn unmatched_end_never_goes_negative() {
    let mut l = AnimationLoop::new();
    assert!(!l.end_request());
    assert!(!l.end_request());
    assert_eq!(l.requests(), 0);

    assert!(l.request());
    assert_eq!(l.requests(), 1);
    assert!(l.end_request());
    assert!(!l.is_running());
}

#[test]
fn stop_clears_requests() {
    let mut l = AnimationLoop::new();
    l.request();
    l.request();
    l.stop();
    assert!(!l.is_running());
    assert_eq!(l.requests(), 0);
}
