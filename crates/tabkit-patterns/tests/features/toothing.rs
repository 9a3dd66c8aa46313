use proptest::prelude::*;
use tabkit_core::Point;
use tabkit_patterns::{subdivide_line, transition_positions, ToothParams};

/// Signed distance of `p` from the line through `start` along `unit`
fn offset_from_line(p: Point, start: Point, unit: Point) -> f64 {
    unit.cross(&(p - start))
}

fn along_line(p: Point, start: Point, unit: Point) -> f64 {
    unit.dot(&(p - start))
}

proptest! {
    #[test]
    fn points_sit_on_baseline_or_tooth_line(
        length in 1.0f64..400.0,
        angle in 0.0f64..std::f64::consts::TAU,
        tooth in 0.5f64..6.0,
        innie in any::<bool>(),
    ) {
        let start = Point::new(20.0, 30.0);
        let unit = Point::new(angle.cos(), angle.sin());
        let end = start + unit * length;
        let params = ToothParams::new(8.0, innie).with_tooth_length(tooth);

        let path = subdivide_line(start, end, &params).unwrap();
        for &p in path.points() {
            let d = offset_from_line(p, start, unit);
            prop_assert!(d.abs() < 1e-6 || (d - tooth).abs() < 1e-6, "offset {}", d);
        }
    }

    #[test]
    fn point_count_follows_transitions(length in 1.0f64..500.0, division in 2.0f64..20.0) {
        let params = ToothParams::new(division, true);
        let path = subdivide_line(Point::ORIGIN, Point::new(length, 0.0), &params).unwrap();

        prop_assert_eq!(path.transitions() % 2, 0);
        if path.transitions() == 0 {
            prop_assert_eq!(path.len(), 2);
        } else {
            prop_assert_eq!(path.len(), 2 * path.transitions() + 2);
        }
    }

    #[test]
    fn transitions_respect_exclusion(
        length in 1.0f64..500.0,
        exclusion in 0.0f64..40.0,
    ) {
        let params = ToothParams::new(8.0, false).with_exclusion(exclusion);
        let start = Point::ORIGIN;
        let end = Point::new(0.0, length);
        let unit = Point::new(0.0, 1.0);

        let positions = transition_positions(start, end, &params).unwrap();
        for (_, p) in &positions {
            let s = along_line(*p, start, unit);
            prop_assert!(s > exclusion - 1e-9);
            prop_assert!(length - s > exclusion - 1e-9);
        }
    }

    #[test]
    fn shifted_transitions_respect_exclusion(
        length in 1.0f64..500.0,
        exclusion in 0.0f64..40.0,
        offset in -300.0f64..300.0,
        innie in any::<bool>(),
    ) {
        let params = ToothParams::new(8.0, innie)
            .with_exclusion(exclusion)
            .with_midpoint_offset(offset);
        let end = Point::new(length, 0.0);

        let positions = transition_positions(Point::ORIGIN, end, &params).unwrap();
        for (_, p) in &positions {
            prop_assert!(p.x >= exclusion - 1e-9, "{} inside start margin", p.x);
            prop_assert!(p.x <= length - exclusion + 1e-9, "{} inside end margin", p.x);
        }

        let path = subdivide_line(Point::ORIGIN, end, &params).unwrap();
        for pair in path.points().windows(2) {
            prop_assert!(pair[1].x >= pair[0].x - 1e-9);
        }
    }

    #[test]
    fn transitions_mirror_about_midpoint(length in 1.0f64..500.0) {
        let params = ToothParams::default();
        let positions = transition_positions(Point::ORIGIN, Point::new(length, 0.0), &params).unwrap();
        let n = positions.len();
        for i in 0..n / 2 {
            let (a_index, a) = positions[i];
            let (b_index, b) = positions[n - 1 - i];
            prop_assert_eq!(a_index, -b_index - 1);
            prop_assert!((a.x + b.x - length).abs() < 1e-9);
        }
    }

    #[test]
    fn opposite_phases_interlock(length in 30.0f64..400.0) {
        let end = Point::new(length, 0.0);
        let innie = subdivide_line(Point::ORIGIN, end, &ToothParams::new(8.0, true)).unwrap();
        let outie = subdivide_line(Point::ORIGIN, end, &ToothParams::new(8.0, false)).unwrap();

        prop_assert_eq!(innie.len(), outie.len());
        for (a, b) in innie.points().iter().zip(outie.points()) {
            prop_assert!((a.x - b.x).abs() < 1e-9);
            prop_assert!((a.y + b.y - 4.0).abs() < 1e-9);
        }
    }
}

#[test]
fn test_pattern_shift_moves_every_transition() {
    let end = Point::new(100.0, 0.0);
    let centred = transition_positions(Point::ORIGIN, end, &ToothParams::default()).unwrap();
    let shifted = transition_positions(
        Point::ORIGIN,
        end,
        &ToothParams::default().with_midpoint_offset(0.5),
    )
    .unwrap();

    assert_eq!(centred.len(), shifted.len());
    for ((i, a), (j, b)) in centred.iter().zip(&shifted) {
        assert_eq!(i, j);
        assert!((b.x - a.x - 0.5).abs() < 1e-12);
    }
}

#[test]
fn test_reversed_edge_teeth_flip_side() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(100.0, 0.0);
    let forward = subdivide_line(a, b, &ToothParams::default()).unwrap();
    let backward = subdivide_line(b, a, &ToothParams::default()).unwrap();

    assert!(forward.points().iter().all(|p| p.y >= 0.0));
    assert!(backward.points().iter().all(|p| p.y <= 0.0));
}
