use super::*;
use crate::foundation::error::FibTreeError;

#[test]
fn set_n_rebuilds_from_scratch() {
    let mut viz = Visualizer::new(VizConfig::default()).unwrap();
    assert_eq!(viz.scene().nodes.len(), 15);

    let diff = viz.set_n(3).unwrap();
    assert_eq!(viz.generation(), 1);
    assert_eq!(viz.scene().nodes.len(), 5);
    assert_eq!(viz.scene().nodes[0].placed.order, 0);
    assert!(!diff.exited.is_empty());
    assert_eq!(viz.config().n, 3);
}

#[test]
fn failed_rebuild_keeps_previous_scene() {
    let mut viz = Visualizer::new(VizConfig::default()).unwrap();
    let err = viz.set_n(-1).unwrap_err();
    assert!(matches!(err, FibTreeError::Validation(_)));
    assert!(matches!(
        viz.set_n(99),
        Err(FibTreeError::InputTooLarge { .. })
    ));
    assert_eq!(viz.generation(), 0);
    assert_eq!(viz.scene().n, 5);
}

#[test]
fn resize_only_affects_responsive_canvases() {
    let mut fixed = Visualizer::new(VizConfig::default()).unwrap();
    assert!(fixed.resize(640).unwrap().is_none());
    assert_eq!(fixed.generation(), 0);

    let cfg = VizConfig {
        canvas: CanvasSpec::Responsive {
            container_width: 1000,
            min_height: 600,
        },
        ..VizConfig::default()
    };
    let mut viz = Visualizer::new(cfg).unwrap();
    assert_eq!(viz.scene().canvas.height, 750);

    let diff = viz.resize(400).unwrap().unwrap();
    assert!(diff.is_unchanged());
    assert_eq!(viz.scene().canvas.width, 400);
    assert_eq!(viz.scene().canvas.height, 600);
    assert_eq!(viz.generation(), 1);
}

#[test]
fn svg_reflects_current_scene() {
    let mut viz = Visualizer::new(VizConfig::default()).unwrap();
    viz.set_n(2).unwrap();
    let svg = viz.svg().unwrap();
    assert_eq!(svg.matches("<circle").count(), 3);
}
