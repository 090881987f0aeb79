use super::*;

#[test]
fn progress_is_zero_before_delay_and_one_after_end() {
    let r = Reveal::new(1.0, 0.5, Ease::Linear).unwrap();
    assert_eq!(r.progress(0.0), 0.0);
    assert_eq!(r.progress(1.0), 0.0);
    assert_eq!(r.progress(1.25), 0.5);
    assert_eq!(r.progress(1.5), 1.0);
    assert_eq!(r.progress(10.0), 1.0);
    assert_eq!(r.end_secs(), 1.5);
}

#[test]
fn easing_shapes_progress() {
    let r = Reveal::new(0.0, 1.0, Ease::InQuad).unwrap();
    assert_eq!(r.progress(0.5), 0.25);
}

#[test]
fn invalid_timings_are_rejected() {
    assert!(Reveal::new(-0.1, 1.0, Ease::Linear).is_err());
    assert!(Reveal::new(0.0, 0.0, Ease::Linear).is_err());
    assert!(Reveal::new(f64::NAN, 1.0, Ease::Linear).is_err());
    assert!(Reveal::new(0.0, f64::INFINITY, Ease::Linear).is_err());
}

#[test]
fn tween_interpolates_appearances() {
    let r = Reveal::new(0.0, 2.0, Ease::Linear).unwrap();
    let mid = r.tween(&NodeAppearance::HIDDEN, &NodeAppearance::SHOWN, 1.0);
    assert_eq!(mid.opacity, 0.5);
    assert_eq!(mid.circle_scale, 0.5);

    let link = r.tween(&LinkAppearance::HIDDEN, &LinkAppearance::SHOWN, 2.0);
    assert_eq!(link, LinkAppearance::SHOWN);
}

#[test]
fn hidden_nodes_are_invisible() {
    assert!(NodeAppearance::HIDDEN.is_invisible());
    assert!(!NodeAppearance::SHOWN.is_invisible());
}
