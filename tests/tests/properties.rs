use contour::algorithms::aabb::bounding_box;
use contour::algorithms::hit_test::{contains, winding_number};
use contour::algorithms::stroke::{outline, outline_with_style, LineCap, LineJoin, StrokeStyle};
use contour::math::{point, rect, vector, Angle, Box2D, Point, Transform};
use contour::path::builder::PathBuilder;
use contour::path::{ElementKind, FillRule, Path, PathCommand};
use contour_tests::build_shapes_path;

const RULES: [FillRule; 2] = [FillRule::NonZero, FillRule::EvenOdd];

fn polygon(points: &[Point]) -> Path {
    let mut builder = Path::builder();
    builder.add_lines(points);
    builder.close();
    builder.build()
}

// Five pointed star drawn in one stroke: the pentagon in the middle is wound twice.
fn pentagram() -> Path {
    let points: Vec<Point> = (0..5)
        .map(|i| {
            let angle = Angle::degrees(90.0 + 144.0 * i as f64).radians;
            point(10.0 * angle.cos(), 10.0 * angle.sin())
        })
        .collect();
    polygon(&points)
}

// Offsets keep the samples away from the edges and vertices of the test shapes.
fn sample_points() -> Vec<Point> {
    let mut points = Vec::new();
    for i in -15..15 {
        for j in -15..15 {
            points.push(point(i as f64 * 0.731 + 0.113, j as f64 * 0.593 + 0.271));
        }
    }
    points
}

#[test]
fn containment_commutes_with_transforms() {
    let paths = [
        Path::rect(&rect(-3.0, -2.0, 6.0, 5.0)),
        pentagram(),
        polygon(&[
            point(0.0, 0.0),
            point(8.0, 8.0),
            point(8.0, 0.0),
            point(0.0, 8.0),
        ]),
    ];
    let transforms = [
        Transform::identity(),
        Transform::translation(10.0, -5.0),
        Transform::rotation(Angle::degrees(30.0))
            .then_scale(2.0, 0.5)
            .then_translate(vector(10.0, -5.0)),
        Transform::scale(-1.0, 3.0),
    ];
    let identity = Transform::identity();

    for path in &paths {
        for t in &transforms {
            let transformed = path.transformed(t);
            for p in sample_points() {
                let q = t.transform_point(p);
                for rule in RULES {
                    let expected = contains(p, path, rule, &identity);
                    assert_eq!(contains(q, &transformed, rule, &identity), expected);
                    assert_eq!(contains(q, path, rule, t), expected);
                }
            }
        }
    }
}

#[test]
fn rectangle_interior() {
    let r = rect(-4.0, -3.0, 7.0, 5.0);
    let identity = Transform::identity();
    let clockwise = polygon(&[
        r.min,
        point(r.min.x, r.max.y),
        r.max,
        point(r.max.x, r.min.y),
    ]);
    for path in [Path::rect(&r), clockwise] {
        for p in sample_points() {
            let strictly_inside =
                p.x > r.min.x && p.x < r.max.x && p.y > r.min.y && p.y < r.max.y;
            for rule in RULES {
                assert_eq!(contains(p, &path, rule, &identity), strictly_inside);
            }
        }
    }
}

#[test]
fn self_intersecting_fill_rules_disagree() {
    let star = pentagram();
    let identity = Transform::identity();
    let center = point(0.0, 0.0);

    assert_eq!(winding_number(center, &star).abs(), 2);
    assert!(contains(center, &star, FillRule::NonZero, &identity));
    assert!(!contains(center, &star, FillRule::EvenOdd, &identity));

    // A branch of the star is wound once.
    let tip = point(0.0, 8.0);
    assert!(contains(tip, &star, FillRule::NonZero, &identity));
    assert!(contains(tip, &star, FillRule::EvenOdd, &identity));
}

#[test]
fn ellipse_bounding_box() {
    let kappa_overshoot = 1.0 - contour::path::builder::KAPPA;
    for r in [
        rect(0.0, 0.0, 10.0, 10.0),
        rect(-50.0, 20.0, 3.0, 200.0),
        rect(1e3, -1e3, 0.5, 0.25),
    ] {
        let path = Path::ellipse(&r);
        let loose = path.bounding_box().unwrap();
        let w = r.max.x - r.min.x;
        let h = r.max.y - r.min.y;
        let inflated = Box2D {
            min: point(r.min.x - w * kappa_overshoot, r.min.y - h * kappa_overshoot),
            max: point(r.max.x + w * kappa_overshoot, r.max.y + h * kappa_overshoot),
        };

        assert!(loose.min.x <= r.min.x && loose.min.y <= r.min.y);
        assert!(loose.max.x >= r.max.x && loose.max.y >= r.max.y);
        assert!(loose.min.x >= inflated.min.x && loose.min.y >= inflated.min.y);
        assert!(loose.max.x <= inflated.max.x && loose.max.y <= inflated.max.y);

        let tight = bounding_box(&path).unwrap();
        let eps = 1e-9 * (w + h);
        assert!((tight.min - loose.min).length() <= eps);
        assert!((tight.max - loose.max).length() <= eps);
    }
}

#[test]
fn zero_width_outline_is_empty() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(10.0, 3.0));
    let line = builder.build();

    let identity = Transform::identity();
    for path in [line, build_shapes_path(), pentagram()] {
        for cap in [LineCap::Butt, LineCap::Round, LineCap::Square] {
            for join in [LineJoin::Miter, LineJoin::Round, LineJoin::Bevel] {
                assert!(outline(&path, 0.0, cap, join, 4.0, &identity).is_empty());
            }
        }
    }
}

#[test]
fn horizontal_segment_outline() {
    let identity = Transform::identity();
    for (length, width) in [(10.0, 2.0), (3.5, 0.25), (100.0, 7.0)] {
        let mut builder = Path::builder();
        builder.move_to(point(1.0, 2.0));
        builder.line_to(point(1.0 + length, 2.0));
        let path = builder.build();

        let style = StrokeStyle::DEFAULT.with_line_width(width);
        let out = outline_with_style(&path, &style, &identity);
        let r = out.is_rectangle().unwrap();
        assert!((r.max.x - r.min.x - length).abs() < 1e-9);
        assert!((r.max.y - r.min.y - width).abs() < 1e-9);
        assert!((r.center() - point(1.0 + length * 0.5, 2.0)).length() < 1e-9);
    }
}

#[test]
fn rectangles_round_trip() {
    for r in [
        rect(0.0, 0.0, 1.0, 1.0),
        rect(-10.0, 5.0, 0.5, 200.0),
        rect(1e6, -1e6, 1e-3, 3.0),
    ] {
        let mut builder = Path::builder();
        builder.add_rect(&r);
        assert_eq!(builder.build().is_rectangle(), Some(r));
    }

    assert_eq!(Path::ellipse(&rect(0.0, 0.0, 1.0, 1.0)).is_rectangle(), None);
}

#[test]
fn enumerate_visits_every_command() {
    let path = build_shapes_path();

    let mut visited = Vec::new();
    path.enumerate(|element| {
        let expected = match element.kind {
            ElementKind::MoveTo | ElementKind::LineTo => 1,
            ElementKind::QuadCurveTo => 2,
            ElementKind::CurveTo => 3,
            ElementKind::CloseSubpath => 0,
        };
        assert_eq!(element.points.len(), expected);
        visited.push(element.clone());
    });

    assert_eq!(visited.len(), path.len());
    for (element, cmd) in visited.iter().zip(path.iter()) {
        assert_eq!(element.kind, cmd.kind());
        assert_eq!(element.points, cmd.points());
    }
}

#[test]
fn path_data_round_trip() {
    let path = build_shapes_path();
    let parsed: Path = path.to_string().parse().unwrap();
    assert_eq!(parsed, path);

    let commands: Vec<PathCommand> = parsed.iter().copied().collect();
    let rebuilt: Path = commands.into_iter().collect();
    assert_eq!(rebuilt, path);
}
