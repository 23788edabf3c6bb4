use approx::assert_relative_eq;

use spiderweb::geometry::{place_items, slot_angles, CircleFrame, RadarConfig, RadarGeometry, Sector, Size};
use spiderweb::view::{ChildLayout, CircularLayout, ScoreWebView};
use spiderweb::GeometryError;

#[test]
fn angle_sequences_are_even_and_offset_for_even_counts() {
    for count in 3..=12usize {
        let angles = slot_angles(count);
        let step = 360.0 / count as f32;
        assert_eq!(angles.len(), count);

        let expected_offset = if count % 2 == 0 { step / 2.0 } else { 0.0 };
        assert_relative_eq!(angles[0], expected_offset, epsilon = 1e-4);
        for pair in angles.windows(2) {
            assert!(pair[1] > pair[0]);
            assert_relative_eq!(pair[1] - pair[0], step, epsilon = 1e-3);
        }
    }
}

#[test]
fn four_corners_avoid_the_axes() {
    assert_eq!(slot_angles(4), vec![45.0, 135.0, 225.0, 315.0]);
}

#[test]
fn outer_ring_matches_full_radius() {
    let frame = CircleFrame::new(150.0, 120.0, 100.0);
    let mut config = RadarConfig::default();
    config.set_hierarchy_count(7).unwrap();
    let geometry = RadarGeometry::compute(&config, &frame).unwrap();

    for (h, ring) in geometry.rings.iter().enumerate() {
        let expected = 100.0 / 7.0 * (h + 1) as f32;
        for vertex in &ring.vertices {
            assert_relative_eq!(vertex.distance(frame.center()), expected, epsilon = 1e-3);
        }
    }
    let outer = geometry.rings.last().unwrap();
    assert_relative_eq!(outer.vertices[0].distance(frame.center()), 100.0, epsilon = 1e-3);
}

#[test]
fn score_vertices_scale_with_score_fraction() {
    let frame = CircleFrame::new(100.0, 100.0, 100.0);
    let scores = vec![7.0, 8.0, 5.0, 5.0, 8.0];
    let mut config = RadarConfig::default();
    config.set_scores(10.0, scores.clone()).unwrap();
    let geometry = RadarGeometry::compute(&config, &frame).unwrap();
    let polygon = geometry.score.unwrap();

    let first = polygon.vertices[0];
    assert_relative_eq!(first.x, 100.0, epsilon = 1e-4);
    assert_relative_eq!(first.y, 30.0, epsilon = 1e-4);

    for ((vertex, score), angle) in polygon.vertices.iter().zip(&scores).zip(slot_angles(5)) {
        let radius = score / 10.0 * 100.0;
        assert_relative_eq!(vertex.distance(frame.center()), radius, epsilon = 1e-3);
        assert_eq!(*vertex, frame.project(angle, radius));
    }
}

#[test]
fn recomputation_is_idempotent() {
    let frame = CircleFrame::from_area(320, 240);
    let mut config = RadarConfig::default();
    config.set_scores(4.0, vec![1.0, 2.5, 4.0, 3.0, 0.5, 2.0]).unwrap();

    assert_eq!(
        RadarGeometry::compute(&config, &frame).unwrap(),
        RadarGeometry::compute(&config, &frame).unwrap()
    );

    let sizes = vec![Size::new(30, 12); 6];
    assert_eq!(
        place_items(&sizes, &frame, 8.0).unwrap(),
        place_items(&sizes, &frame, 8.0).unwrap()
    );
}

#[test]
fn sector_classification_matches_compass() {
    assert_eq!(Sector::classify(0.0), Ok(Sector::North));
    assert_eq!(Sector::classify(45.0), Ok(Sector::NorthEast));
    assert_eq!(Sector::classify(360.0), Err(GeometryError::AngleOutOfRange(360.0)));
}

#[test]
fn north_item_clears_the_circle_by_spacing() {
    let frame = CircleFrame::new(200.0, 200.0, 100.0);
    let rects = place_items(&[Size::new(40, 20)], &frame, 10.0).unwrap();

    assert_eq!(rects[0].bottom, 200 - 100 - 10);
    assert_eq!(rects[0].top, 200 - 100 - 10 - 20);
    assert_eq!(rects[0].left, 200 - 20);
    assert_eq!(rects[0].width(), 40);
}

#[test]
fn east_and_west_items_clear_the_circle_by_spacing() {
    // Two items land at 90 and 270 degrees
    let frame = CircleFrame::new(200.0, 200.0, 100.0);
    let rects = place_items(&[Size::new(40, 20); 2], &frame, 10.0).unwrap();

    let east = rects[0];
    let west = rects[1];
    assert!((east.left - 310).abs() <= 1, "east {:?}", east);
    assert!((west.right - 90).abs() <= 1, "west {:?}", west);
    assert!((east.top - 190).abs() <= 1 && (west.top - 190).abs() <= 1);
}

#[test]
fn sector_offsets_push_items_outward() {
    let size = Size::new(40, 20);
    assert_eq!(Sector::East.offset(size, 10.0), (10.0, -10.0));
    assert_eq!(Sector::South.offset(size, 10.0), (-20.0, 10.0));
    assert_eq!(Sector::West.offset(size, 10.0), (-50.0, -10.0));
    assert_eq!(Sector::NorthWest.offset(size, 10.0), (-50.0, -20.0));
}

#[test]
fn views_follow_area_changes() {
    let mut web = ScoreWebView::new();
    web.on_size_changed(400, 300).unwrap();
    assert_eq!(web.frame(), CircleFrame::new(200.0, 150.0, 150.0));

    web.set_scores(10.0, vec![10.0; 6]).unwrap();
    assert_eq!(web.config().angle_count(), 6);
    let outer = web.geometry().rings.last().unwrap().clone();
    assert_eq!(web.geometry().score.as_ref().unwrap(), &outer);

    let mut layout = CircularLayout::new(1.0);
    layout.on_size_changed(400, 300);
    layout.set_children(vec![Size::new(10, 10); 3]);
    let rects = layout.layout().unwrap();
    assert_eq!(rects, layout.place(&[Size::new(10, 10); 3]).unwrap());
}
