use super::*;
use crate::animation::choreography::ChoreographyKind;
use crate::config::VizConfig;
use crate::scene::model::scene_for;

fn scene(n: i64, kind: ChoreographyKind) -> Scene {
    let mut cfg = VizConfig {
        n,
        ..VizConfig::default()
    };
    cfg.choreography.kind = kind;
    scene_for(&cfg).unwrap()
}

#[test]
fn first_scene_enters_everything() {
    let s = scene(3, ChoreographyKind::Presence);
    let d = diff_scenes(None, &s);
    assert_eq!(d.entered.len(), 5 + 4);
    assert!(d.kept.is_empty());
    assert!(d.exited.is_empty());
}

#[test]
fn shrinking_exits_the_tail_orders() {
    let big = scene(5, ChoreographyKind::Presence);
    let small = scene(4, ChoreographyKind::Presence);
    let d = diff_scenes(Some(&big), &small);

    let exited_nodes: Vec<ElementKey> = d
        .exited
        .iter()
        .map(|e| e.key)
        .filter(|k| matches!(k, ElementKey::Node(_)))
        .collect();
    let expected: Vec<ElementKey> = (9..15).map(ElementKey::Node).collect();
    assert_eq!(exited_nodes, expected);
    assert!(d.entered.iter().all(|k| matches!(k, ElementKey::Link(..))));
    assert!(d.exited.iter().all(|e| e.reveal.is_some()));
    assert!(
        d.exited
            .iter()
            .all(|e| e.reveal.is_some_and(|r| r.delay_secs == 0.0))
    );
}

#[test]
fn transition_scenes_drop_exits_immediately() {
    let big = scene(5, ChoreographyKind::Transition);
    let small = scene(2, ChoreographyKind::Transition);
    let d = diff_scenes(Some(&big), &small);
    assert!(!d.exited.is_empty());
    assert!(d.exited.iter().all(|e| e.reveal.is_none()));
}

#[test]
fn same_input_is_unchanged() {
    let a = scene(6, ChoreographyKind::Still);
    let b = scene(6, ChoreographyKind::Still);
    let d = diff_scenes(Some(&a), &b);
    assert!(d.is_unchanged());
    assert_eq!(d.kept.len(), a.nodes.len() + a.links.len());
}

#[test]
fn large_shrink_diff_stays_fast() {
    let big = scene(20, ChoreographyKind::Presence);
    let small = scene(1, ChoreographyKind::Presence);

    let started = std::time::Instant::now();
    let d = diff_scenes(Some(&big), &small);
    let elapsed = started.elapsed();

    assert_eq!(big.nodes.len() + big.links.len(), 43_781);
    assert_eq!(d.kept, vec![ElementKey::Node(0)]);
    assert!(d.entered.is_empty());
    assert_eq!(d.exited.len(), 43_780);
    for exit in &d.exited {
        let r = exit.reveal.unwrap();
        assert_eq!(r.delay_secs, 0.0);
        let expected = match exit.key {
            ElementKey::Node(_) => 0.3,
            ElementKey::Link(..) => 0.5,
        };
        assert_eq!(r.duration_secs, expected, "{}", exit.key);
    }
    assert!(
        elapsed < std::time::Duration::from_secs(1),
        "diff took {elapsed:?}"
    );
}
