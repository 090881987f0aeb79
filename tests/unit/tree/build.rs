use super::*;

#[test]
fn base_cases_are_single_leaves() {
    for n in [0, 1] {
        let t = build_tree(n).unwrap();
        assert_eq!(i64::from(t.value()), n);
        assert_eq!(t.order(), 0);
        assert!(t.children().is_empty());
    }
}

#[test]
fn children_are_n_minus_one_then_n_minus_two() {
    for n in 2..=9 {
        let t = build_tree(n).unwrap();
        assert_eq!(t.children().len(), 2);
        assert!(t.children()[0].same_shape(&build_tree(n - 1).unwrap()));
        assert!(t.children()[1].same_shape(&build_tree(n - 2).unwrap()));
    }
}

#[test]
fn every_node_has_zero_or_two_children() {
    let t = build_tree(8).unwrap();
    assert!(t.iter().all(|n| matches!(n.children().len(), 0 | 2)));
    assert!(t.iter().all(|n| n.is_leaf() == (n.value() <= 1)));
}

#[test]
fn orders_are_contiguous_and_unique() {
    for n in 0..=10 {
        let t = build_tree(n).unwrap();
        let mut orders: Vec<u32> = t.iter().map(|x| x.order()).collect();
        orders.sort_unstable();
        let expected: Vec<u32> = (0..t.len() as u32).collect();
        assert_eq!(orders, expected, "n={n}");
    }
}

#[test]
fn left_subtree_precedes_right_subtree() {
    let t = build_tree(7).unwrap();
    for node in t.iter().filter(|n| !n.is_leaf()) {
        let [left, right] = node.children() else {
            panic!("branch must have two children");
        };
        assert_eq!(left.order(), node.order() + 1);
        let max_left = left.iter().map(|x| x.order()).max().unwrap();
        let min_right = right.iter().map(|x| x.order()).min().unwrap();
        assert!(max_left < min_right);
        assert_eq!(min_right, right.order());
    }
}

#[test]
fn known_node_counts() {
    assert_eq!(build_tree(4).unwrap().len(), 9);
    assert_eq!(build_tree(5).unwrap().len(), 15);
    for n in 0..=15u32 {
        assert_eq!(
            build_tree(i64::from(n)).unwrap().len() as u64,
            call_count(n),
            "n={n}"
        );
    }
}

#[test]
fn call_count_matches_closed_form() {
    assert_eq!(call_count(0), 1);
    assert_eq!(call_count(1), 1);
    assert_eq!(call_count(2), 3);
    assert_eq!(call_count(20), 21_891);
    assert_eq!(call_count(30), 2_692_537);
}

#[test]
fn builds_are_deterministic_and_do_not_leak_counters() {
    let a = build_tree(5).unwrap();
    let _other = build_tree(9).unwrap();
    let b = build_tree(5).unwrap();
    assert_eq!(a, b);
    assert_eq!(b.order(), 0);
}

#[test]
fn negative_input_is_rejected() {
    let err = build_tree(-1).unwrap_err();
    assert!(matches!(err, FibTreeError::Validation(_)));
}

#[test]
fn oversized_input_is_rejected() {
    let err = build_tree(i64::from(DEFAULT_MAX_N) + 1).unwrap_err();
    assert!(matches!(
        err,
        FibTreeError::InputTooLarge {
            max: DEFAULT_MAX_N,
            ..
        }
    ));

    let small = TreeBuilder::with_max_n(3).unwrap();
    assert!(small.build(3).is_ok());
    assert!(small.build(4).is_err());
}

#[test]
fn builder_bound_is_capped() {
    assert!(TreeBuilder::with_max_n(HARD_MAX_N).is_ok());
    assert!(TreeBuilder::with_max_n(HARD_MAX_N + 1).is_err());
}
