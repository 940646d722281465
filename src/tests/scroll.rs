use std::str::FromStr;

use crate::utils::{ ease_in_out_quad, Anchor, ScrollAnimation };

#[test]
fn test_easing_endpoints() {
    assert_eq!(ease_in_out_quad(0.0), 0.0);
    assert_eq!(ease_in_out_quad(0.5), 0.5);
    assert_eq!(ease_in_out_quad(1.0), 1.0);
    assert!(ease_in_out_quad(0.25) < 0.25);
    assert!(ease_in_out_quad(0.75) > 0.75);
}

#[test]
fn test_animation_runs_from_start_to_target() {
    let animation = ScrollAnimation::new(100.0, 900.0, 500.0);

    assert_eq!(animation.position_at(0.0), 100.0);
    assert_eq!(animation.position_at(250.0), 500.0);
    assert_eq!(animation.position_at(500.0), 900.0);
    assert_eq!(animation.position_at(750.0), 900.0);
    assert!(!animation.is_finished(499.0));
    assert!(animation.is_finished(500.0));
}

#[test]
fn test_animation_is_monotonic() {
    let animation = ScrollAnimation::new(1200.0, 0.0, 500.0);
    let mut last = animation.position_at(0.0);

    for step in 1..=50 {
        let position = animation.position_at(f64::from(step) * 10.0);
        assert!(position <= last);
        last = position;
    }
    assert_eq!(last, 0.0);
}

#[test]
fn test_zero_duration_jumps() {
    let animation = ScrollAnimation::new(0.0, 300.0, 0.0);
    assert!(animation.is_finished(0.0));
    assert_eq!(animation.position_at(0.0), 300.0);
}

#[test]
fn test_anchor_ids() {
    assert_eq!(Anchor::Start.id(), "start");
    assert_eq!(Anchor::Features.id(), "features");
    assert_eq!(Anchor::HowItWorks.id(), "how-it-works");
    assert_eq!(Anchor::HowItWorks.href(), "#how-it-works");
}

#[test]
fn test_anchor_from_str() {
    assert_eq!(Anchor::from_str("features"), Ok(Anchor::Features));
    assert_eq!(Anchor::from_str("#how-it-works"), Ok(Anchor::HowItWorks));
    assert!(Anchor::from_str("pricing").is_err());

    for anchor in Anchor::ALL {
        assert_eq!(anchor.to_string().parse::<Anchor>(), Ok(anchor));
    }
}
