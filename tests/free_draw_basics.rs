use approx::assert_relative_eq;
use egui::{Color32, Pos2};
use freehand::{Element, FreeDraw, FreeDrawStyle};

fn basic_stroke(width: f32) -> FreeDraw {
    FreeDraw::new(vec![Color32::WHITE], width, 0, FreeDrawStyle::Basic)
}

#[test]
fn new_stroke_seeds_placeholder_width() {
    let stroke = basic_stroke(8.0);
    assert!(stroke.positions().is_empty());
    assert_eq!(stroke.line_widths(), &[0.0]);
    assert_eq!(stroke.max_width(), 8.0);
    assert_eq!(stroke.min_width(), 4.0);
    assert_eq!(stroke.last_line_width(), 8.0);
    assert_eq!(stroke.element_type(), "freeDraw");
    assert_eq!(stroke.layer(), 0);
    assert!(stroke.bubbles().is_none());
}

#[test]
fn widths_track_positions() {
    let mut stroke = basic_stroke(8.0);
    for i in 0..6 {
        stroke.add_position_at(Pos2::new(i as f32 * 3.0, i as f32), i as f64 * 12.0);
        assert_eq!(stroke.line_widths().len(), stroke.positions().len());
    }
}

#[test]
fn bounds_match_independent_scan() {
    let points = [
        Pos2::new(4.0, -1.0),
        Pos2::new(-7.5, 3.0),
        Pos2::new(12.0, 30.0),
        Pos2::new(0.0, 0.0),
        Pos2::new(3.0, -9.25),
    ];
    let mut stroke = basic_stroke(6.0);
    for (i, &point) in points.iter().enumerate() {
        stroke.add_position_at(point, i as f64 * 16.0);
    }

    let min_x = points.iter().map(|p| p.x).fold(f32::INFINITY, f32::min);
    let max_x = points.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max);
    let min_y = points.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    let max_y = points.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max);

    let bounds = stroke.bounds();
    assert_eq!(bounds.min_x, min_x);
    assert_eq!(bounds.max_x, max_x);
    assert_eq!(bounds.min_y, min_y);
    assert_eq!(bounds.max_y, max_y);
    assert_eq!(bounds.x(), min_x);
    assert_eq!(bounds.y(), min_y);
    assert_eq!(bounds.width(), max_x - min_x);
    assert_eq!(bounds.height(), max_y - min_y);
}

#[test]
fn constant_speed_converges_with_one_third_weight() {
    // 20 units every 10 ms: speed 2.0, inside the interpolation band, so
    // the target width is max - (2/10) * max = 6.4.
    let max_width = 8.0_f32;
    let target = 6.4_f32;
    let mut stroke = basic_stroke(max_width);

    let mut previous = max_width;
    for k in 1..=12_usize {
        stroke.add_position_at(Pos2::new((k as f32 - 1.0) * 20.0, 0.0), (k as f64 - 1.0) * 10.0);
        if k == 1 {
            continue; // first sample closes no segment
        }
        let width = stroke.last_line_width();
        // Monotone approach from above...
        assert!(width < previous);
        assert!(width > target);
        // ...following the closed form |w_k - target| = |w_0 - target| * (2/3)^k.
        let expected = target + (max_width - target) * (2.0_f32 / 3.0).powi(k as i32 - 1);
        assert_relative_eq!(width, expected, epsilon = 1e-4);
        previous = width;
    }
}

#[test]
fn fast_motion_clamps_to_min_width() {
    let mut stroke = basic_stroke(8.0);
    stroke.add_position_at(Pos2::new(0.0, 0.0), 0.0);
    // 1000 units in 1 ms is far past the speed cap.
    stroke.add_position_at(Pos2::new(1000.0, 0.0), 1.0);
    // One EMA step from 8 toward the minimum width 4.
    assert_relative_eq!(
        stroke.last_line_width(),
        4.0 / 3.0 + 8.0 * 2.0 / 3.0,
        epsilon = 1e-5
    );
}

#[test]
fn slow_motion_holds_max_width() {
    let mut stroke = basic_stroke(8.0);
    stroke.add_position_at(Pos2::new(0.0, 0.0), 0.0);
    stroke.add_position_at(Pos2::new(0.1, 0.0), 100.0);
    // Target and memory are both the max width, so the blend is a fixpoint.
    assert_relative_eq!(stroke.last_line_width(), 8.0, epsilon = 1e-5);
}

#[test]
fn duplicate_timestamp_is_treated_as_infinite_speed() {
    let mut stroke = basic_stroke(8.0);
    stroke.add_position_at(Pos2::new(0.0, 0.0), 0.0);
    stroke.add_position_at(Pos2::new(5.0, 5.0), 0.0);
    let width = stroke.last_line_width();
    assert!(width.is_finite());
    // Clamped to the minimum-width target, then blended as usual.
    assert_relative_eq!(width, 4.0 / 3.0 + 8.0 * 2.0 / 3.0, epsilon = 1e-5);
    assert_eq!(stroke.line_widths().len(), 2);
}

#[test]
fn three_point_scenario() {
    let mut stroke = basic_stroke(8.0);
    stroke.add_position_at(Pos2::new(0.0, 0.0), 0.0);
    stroke.add_position_at(Pos2::new(10.0, 0.0), 10.0);
    stroke.add_position_at(Pos2::new(10.0, 10.0), 20.0);

    assert_eq!(stroke.positions().len(), 3);
    assert_eq!(stroke.line_widths().len(), 3);

    let bounds = stroke.bounds();
    assert_eq!(bounds.x(), 0.0);
    assert_eq!(bounds.y(), 0.0);
    assert_eq!(bounds.width(), 10.0);
    assert_eq!(bounds.height(), 10.0);
    assert_eq!(bounds.min_x, 0.0);
    assert_eq!(bounds.max_x, 10.0);
    assert_eq!(bounds.min_y, 0.0);
    assert_eq!(bounds.max_y, 10.0);

    assert_eq!(
        stroke.rect(),
        egui::Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0))
    );
}

#[test]
fn bubble_trail_tracks_positions() {
    // Integral widths keep the random radius bounds exact.
    let mut stroke = FreeDraw::new(vec![Color32::LIGHT_BLUE], 10.0, 3, FreeDrawStyle::Bubble);
    for i in 0..5 {
        stroke.add_position_at(Pos2::new(i as f32 * 2.0, 0.0), i as f64 * 8.0);
    }

    let bubbles = stroke.bubbles().expect("bubble style allocates a trail");
    assert_eq!(bubbles.len(), 5);
    for bubble in bubbles {
        assert!(bubble.radius >= 10.0, "radius {} below min", bubble.radius);
        assert!(bubble.radius < 20.0, "radius {} past max", bubble.radius);
        assert!((0.0..1.0).contains(&bubble.opacity));
    }
    assert_eq!(stroke.layer(), 3);
}
