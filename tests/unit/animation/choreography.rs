use super::*;
use crate::foundation::core::{BezPath, Point};

fn node(order: u32) -> PlacedNode {
    PlacedNode {
        order,
        value: 1,
        depth: 1,
        parent: Some(0),
        is_leaf: true,
        position: Point::new(0.0, 0.0),
    }
}

fn link(source: u32, target: u32) -> PlacedLink {
    PlacedLink {
        source,
        target,
        path: BezPath::new(),
    }
}

#[test]
fn node_delay_is_proportional_to_order() {
    let c = ChoreographySpec::default().build().unwrap();
    let r3 = c.node_reveal(&node(3)).unwrap().unwrap();
    let r4 = c.node_reveal(&node(4)).unwrap().unwrap();
    assert_eq!(r3.delay_secs, 1.5);
    assert_eq!(r4.delay_secs - r3.delay_secs, 0.5);
    assert_eq!(r3.duration_secs, 0.3);
}

#[test]
fn link_waits_for_its_later_endpoint() {
    let spec = ChoreographySpec {
        kind: ChoreographyKind::Presence,
        step_secs: 0.3,
        ..ChoreographySpec::default()
    };
    let c = spec.build().unwrap();
    let r = c.link_reveal(&link(2, 7)).unwrap().unwrap();
    assert!((r.delay_secs - 2.1).abs() < 1e-12);
    assert_eq!(r.duration_secs, 0.5);
}

#[test]
fn still_reveals_nothing() {
    let spec = ChoreographySpec {
        kind: ChoreographyKind::Still,
        ..ChoreographySpec::default()
    };
    let c = spec.build().unwrap();
    assert_eq!(c.node_reveal(&node(5)).unwrap(), None);
    assert_eq!(c.link_reveal(&link(0, 1)).unwrap(), None);
    assert_eq!(c.node_effect(), NodeEffect::None);
    assert!(!c.animates_exit());
}

#[test]
fn presence_and_transition_differ_in_effects() {
    let presence = Staggered::presence(&ChoreographySpec::default()).unwrap();
    let transition = Staggered::transition(&ChoreographySpec::default()).unwrap();
    assert_eq!(presence.node_effect(), NodeEffect::FadeScale);
    assert_eq!(transition.node_effect(), NodeEffect::Grow);
    assert!(presence.animates_exit());
    assert!(!transition.animates_exit());
    assert_eq!(presence.step_secs(), 0.5);
}

#[test]
fn effects_map_progress_to_appearance() {
    let half = NodeEffect::Grow.appearance(0.5);
    assert_eq!(half.label_scale, 1.0);
    assert_eq!(half.label_opacity, 0.5);

    let half = NodeEffect::FadeScale.appearance(0.5);
    assert_eq!(half.label_scale, 0.5);
    assert_eq!(half.opacity, 0.5);

    assert_eq!(NodeEffect::None.appearance(0.0), NodeAppearance::SHOWN);
    assert_eq!(LinkEffect::DrawFade.appearance(0.0), LinkAppearance::HIDDEN);
}

#[test]
fn invalid_timings_are_rejected() {
    let bad_step = ChoreographySpec {
        step_secs: 0.0,
        ..ChoreographySpec::default()
    };
    assert!(bad_step.validate().is_err());
    assert!(bad_step.build().is_err());

    let bad_duration = ChoreographySpec {
        link_duration_secs: -1.0,
        ..ChoreographySpec::default()
    };
    assert!(bad_duration.validate().is_err());

    let slow = ChoreographySpec {
        step_secs: MAX_STEP_SECS + 1.0,
        ..ChoreographySpec::default()
    };
    assert!(slow.validate().is_err());
}

#[test]
fn spec_json_defaults_fill_missing_fields() {
    let spec: ChoreographySpec = serde_json::from_str(r#"{"kind":"presence"}"#).unwrap();
    assert_eq!(spec.kind, ChoreographyKind::Presence);
    assert_eq!(spec.step_secs, 0.5);
    assert_eq!(spec.ease, Ease::InOutCubic);
}
