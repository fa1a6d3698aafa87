use responsive_read::ResponsiveFilter;

#[test]
fn test_setter_clamps_to_unit_range() {
    let mut filter: ResponsiveFilter = ResponsiveFilter::new(false, 0.5);

    let cases = [
        (-10.0, 0.0),
        (-0.0001, 0.0),
        (0.0, 0.0),
        (0.3, 0.3),
        (1.0, 1.0),
        (1.0001, 1.0),
        (1.0e6, 1.0),
        (f32::NEG_INFINITY, 0.0),
        (f32::INFINITY, 1.0),
    ];

    for (requested, expected) in cases {
        filter.set_snap_multiplier(requested);
        assert_eq!(
            filter.snap_multiplier(),
            expected,
            "set_snap_multiplier({}) should give {}",
            requested,
            expected
        );
    }
}

#[test]
fn test_setter_maps_nan_to_zero() {
    let mut filter: ResponsiveFilter = ResponsiveFilter::new(false, 0.5);
    filter.set_snap_multiplier(f32::NAN);
    assert_eq!(filter.snap_multiplier(), 0.0);
}

#[test]
fn test_setter_does_not_touch_smooth_value() {
    let mut filter: ResponsiveFilter = ResponsiveFilter::new(false, 1.0);
    filter.advance(700, 0);
    let smooth = filter.smooth_value();

    filter.set_snap_multiplier(0.0);
    assert_eq!(filter.smooth_value(), smooth);

    // Zero multiplier freezes the estimate
    filter.advance(100, 1);
    assert_eq!(filter.smooth_value(), smooth);
}

#[test]
fn test_higher_multiplier_tracks_faster() {
    let mut slow: ResponsiveFilter = ResponsiveFilter::new(false, 0.0001);
    let mut fast: ResponsiveFilter = ResponsiveFilter::new(false, 0.0005);

    let out_slow = slow.advance(1000, 0);
    let out_fast = fast.advance(1000, 0);

    assert!(out_fast > out_slow, "Expected {} > {}", out_fast, out_slow);
}
