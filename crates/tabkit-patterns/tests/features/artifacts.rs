use tabkit_core::Point;
use tabkit_patterns::{
    open_frustum, ArtifactKind, BackplateConfig, Drawing, FrustumPattern, PatternError,
    StuffSackConfig,
};

fn build(kind: ArtifactKind) -> Vec<Drawing> {
    match kind {
        ArtifactKind::Bellows => FrustumPattern::bellows().build(),
        ArtifactKind::FilmHolder => FrustumPattern::film_holder_4x5().build(),
        ArtifactKind::Backplate => BackplateConfig::default().build(),
        ArtifactKind::StuffSack => StuffSackConfig::default().build(),
    }
    .unwrap()
}

fn assert_on_sheet(drawing: &Drawing) {
    let (w, h) = (drawing.sheet.width_mm, drawing.sheet.height_mm);
    let inside = |p: Point| p.x >= 0.0 && p.y >= 0.0 && p.x <= w && p.y <= h;

    for p in drawing.polylines.iter().flatten() {
        assert!(inside(*p), "{}: {:?} off a {}x{} sheet", drawing.name, p, w, h);
    }
    for c in &drawing.circles {
        let r = Point::new(c.radius, c.radius);
        assert!(inside(c.center - r) && inside(c.center + r), "{}: {:?}", drawing.name, c);
    }
}

#[test]
fn test_every_default_artifact_fits_its_sheets() {
    for kind in ArtifactKind::ALL {
        let drawings = build(kind);
        assert!(!drawings.is_empty(), "{kind} produced nothing");
        for drawing in &drawings {
            assert!(!drawing.is_empty());
            assert_on_sheet(drawing);
        }
    }
}

#[test]
fn test_sheet_counts() {
    assert_eq!(build(ArtifactKind::Bellows).len(), 3);
    assert_eq!(build(ArtifactKind::FilmHolder).len(), 3);
    assert_eq!(build(ArtifactKind::Backplate).len(), 1);
    assert_eq!(build(ArtifactKind::StuffSack).len(), 4);
}

#[test]
fn test_bellows_front_face_edges_mate_with_trapezoids() {
    let drawings = build(ArtifactKind::Bellows);
    // Front face edges are all innie; the trapezoid narrow edge sits on the
    // same 64 mm span, so both carry the same number of transitions.
    let front_edge = &drawings[0].polylines[0];
    let narrow_edge = &drawings[1].polylines[2];
    assert_eq!(front_edge.len(), narrow_edge.len());
}

#[test]
fn test_film_holder_shortened_tooth() {
    let pattern = FrustumPattern::film_holder_4x5();
    let [_, across_width, _] = open_frustum(
        pattern.origin,
        pattern.closed,
        pattern.open,
        pattern.depth,
        pattern.fudges,
    )
    .unwrap();
    let edge = across_width.edges().nth(3).unwrap();
    let unit = edge.direction().unwrap();

    let drawings = pattern.build().unwrap();
    let deepest = drawings[1].polylines[3]
        .iter()
        .map(|p| unit.cross(&(*p - edge.start)).abs())
        .fold(0.0f64, f64::max);
    assert!((deepest - 2.5).abs() < 1e-9);

    assert_eq!(pattern.panels[1].edges[0].midpoint_offset, -0.5);
    assert_eq!(pattern.panels[1].edges[2].midpoint_offset, 0.5);
}

#[test]
fn test_invalid_division_is_a_config_error() {
    let mut bellows = FrustumPattern::bellows();
    bellows.division_length = 0.0;
    assert!(matches!(bellows.build(), Err(PatternError::InvalidConfig(_))));
}
