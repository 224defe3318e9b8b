use approx::assert_abs_diff_eq;
use blob_engine::{generate_blob, generate_outline_and_curve, sample, smooth, DrawCommand, Point, ShapeParameters};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::TAU;

fn params(vertex_count: usize, smoothness: f64, randomness: f64) -> ShapeParameters {
    ShapeParameters {
        vertex_count,
        smoothness,
        randomness,
        fill_color: "#ff1b69".to_string(),
        canvas_width: 300.0,
        canvas_height: 300.0,
    }
}

fn angle_of(p: Point, center: Point) -> f64 {
    let a = (p.y - center.y).atan2(p.x - center.x);
    if a < 0.0 { a + TAU } else { a }
}

#[test]
fn hexagon_without_jitter_sits_on_the_base_circle() {
    let p = params(6, 0.70, 0.0);
    let blob = generate_blob(&p, &mut StdRng::seed_from_u64(7)).unwrap();
    let center = Point::new(150.0, 150.0);
    assert_eq!(blob.outline.len(), 6);
    for (i, pt) in blob.outline.iter().enumerate() {
        assert_abs_diff_eq!(pt.distance(center), 105.0, epsilon = 1e-9);
        let expected = (i as f64 * 60.0).to_radians();
        assert_abs_diff_eq!(angle_of(*pt, center), expected, epsilon = 1e-9);
    }
    let d = blob.emission.path_data();
    assert!(d.starts_with("M255.0,150.0 C"));
    assert!(d.ends_with(" Z"));
    assert_eq!(d.matches('M').count(), 1);
    assert_eq!(d.matches('C').count(), 6);
    assert_eq!(d.matches('Z').count(), 1);
}

#[test]
fn minimum_vertex_count_gives_three_segments() {
    for (s, r) in [(0.0, 0.0), (0.5, 0.5), (1.0, 1.0)] {
        let emission = generate_outline_and_curve(&params(3, s, r), &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(emission.segments.len(), 3);
    }
}

#[test]
fn two_vertices_is_invalid() {
    let err = generate_outline_and_curve(&params(2, 0.5, 0.5), &mut StdRng::seed_from_u64(3)).unwrap_err();
    assert!(err.is_invalid_parameter());
}

#[test]
fn out_of_range_parameters_fail_before_output() {
    let mut rng = StdRng::seed_from_u64(0);
    assert!(generate_blob(&params(6, 1.2, 0.5), &mut rng).unwrap_err().is_invalid_parameter());
    assert!(generate_blob(&params(6, 0.5, -0.1), &mut rng).unwrap_err().is_invalid_parameter());
    let mut bad_canvas = params(6, 0.5, 0.5);
    bad_canvas.canvas_width = 0.0;
    assert!(generate_blob(&bad_canvas, &mut rng).unwrap_err().is_invalid_parameter());
    let mut bad_color = params(6, 0.5, 0.5);
    bad_color.fill_color = "pink".to_string();
    assert!(generate_blob(&bad_color, &mut rng).unwrap_err().is_invalid_parameter());
}

#[test]
fn same_seed_same_blob() {
    let p = params(11, 0.4, 0.9);
    let a = generate_blob(&p, &mut StdRng::seed_from_u64(2024)).unwrap();
    let b = generate_blob(&p, &mut StdRng::seed_from_u64(2024)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.emission.to_draw_commands(), b.emission.to_draw_commands());
    assert_eq!(a.emission.to_svg(), b.emission.to_svg());
    let c = generate_blob(&p, &mut StdRng::seed_from_u64(2025)).unwrap();
    assert_ne!(a.outline, c.outline);
}

#[test]
fn color_passes_through_verbatim() {
    for color in ["#ff1b69", "#FF1B69", "#AbC"] {
        let mut p = params(5, 0.5, 0.5);
        p.fill_color = color.to_string();
        let emission = generate_outline_and_curve(&p, &mut StdRng::seed_from_u64(1)).unwrap();
        let commands = emission.to_draw_commands();
        assert_eq!(commands.last(), Some(&DrawCommand::Fill { color: color.to_string() }));
        assert!(emission.to_svg().contains(&format!("fill=\"{}\"", color)));
    }
}

#[test]
fn zero_smoothness_draws_straight_joins() {
    let blob = generate_blob(&params(8, 0.0, 0.6), &mut StdRng::seed_from_u64(5)).unwrap();
    for (pair, p) in blob.controls.iter().zip(&blob.outline) {
        assert_abs_diff_eq!(pair.incoming.x, p.x, epsilon = 1e-12);
        assert_abs_diff_eq!(pair.incoming.y, p.y, epsilon = 1e-12);
        assert_abs_diff_eq!(pair.outgoing.x, p.x, epsilon = 1e-12);
        assert_abs_diff_eq!(pair.outgoing.y, p.y, epsilon = 1e-12);
    }
}

proptest! {
    #[test]
    fn sampler_places_points_at_even_angles(n in 3usize..40, randomness in 0.0f64..=1.0, seed in any::<u64>()) {
        let center = Point::new(200.0, 120.0);
        let outline = sample(n, randomness, center, 80.0, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(outline.len(), n);
        let mut previous = -1.0;
        for (i, p) in outline.iter().enumerate() {
            let angle = angle_of(*p, center);
            let expected = TAU * i as f64 / n as f64;
            prop_assert!((angle - expected).abs() < 1e-9, "vertex {} at {} expected {}", i, angle, expected);
            prop_assert!(angle > previous);
            previous = angle;
        }
    }

    #[test]
    fn every_curve_is_closed(n in 3usize..25, s in 0.0f64..=1.0, r in 0.0f64..=1.0, seed in any::<u64>()) {
        let emission = generate_outline_and_curve(&params(n, s, r), &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(emission.segments.len(), n);
        prop_assert!(emission.is_closed());
        for pair in emission.segments.windows(2) {
            prop_assert_eq!(pair[0].end, pair[1].start);
        }
    }

    #[test]
    fn control_pairs_depend_only_on_neighbours(n in 4usize..15, s in 0.0f64..=1.0, seed in any::<u64>(), moved in 0usize..15) {
        let moved = moved % n;
        let outline = sample(n, 0.8, Point::new(0.0, 0.0), 50.0, &mut StdRng::seed_from_u64(seed)).unwrap();
        let mut nudged = outline.clone();
        nudged[moved] = nudged[moved] + kurbo::Vec2::new(3.0, -2.0);
        let before = smooth(&outline, s).unwrap();
        let after = smooth(&nudged, s).unwrap();
        for i in 0..n {
            let near = i == moved || (i + 1) % n == moved || (moved + 1) % n == i;
            if !near {
                prop_assert_eq!(before[i], after[i]);
            }
        }
    }
}
