//! Reference configurations with known answers.

use approx::assert_relative_eq;
use circlecross::{relate, Circle2, CrossingPoints, Point2, Relationship, Tolerance};

fn circle(x: f64, y: f64, r: f64) -> Circle2<f64> {
    Circle2::new(Point2::new(x, y), r)
}

fn eval(a: Circle2<f64>, b: Circle2<f64>) -> (Relationship, Vec<Point2<f64>>) {
    let hit = relate(&a, &b, Tolerance::default()).unwrap();
    (hit.relationship, hit.points.to_vec())
}

#[test]
fn externally_tangent_unit_circles() {
    let (rel, pts) = eval(circle(0.0, 0.0, 1.0), circle(2.0, 0.0, 1.0));
    assert_eq!(rel, Relationship::ExternallyTangent);
    assert_eq!(pts.len(), 1);
    assert_relative_eq!(pts[0].x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(pts[0].y, 0.0, epsilon = 1e-12);
}

#[test]
fn internally_tangent_lands_on_far_side_of_larger_circle() {
    let (rel, pts) = eval(circle(0.0, 0.0, 3.0), circle(2.0, 0.0, 1.0));
    assert_eq!(rel, Relationship::InternallyTangent);
    assert_eq!(pts.len(), 1);
    assert_relative_eq!(pts[0].x, 3.0, epsilon = 1e-12);
    assert_relative_eq!(pts[0].y, 0.0, epsilon = 1e-12);

    // Same pair, roles swapped.
    let (rel, pts) = eval(circle(2.0, 0.0, 1.0), circle(0.0, 0.0, 3.0));
    assert_eq!(rel, Relationship::InternallyTangent);
    assert_relative_eq!(pts[0].x, 3.0, epsilon = 1e-12);
    assert_relative_eq!(pts[0].y, 0.0, epsilon = 1e-12);
}

#[test]
fn internal_tangency_error_grows_for_nearly_equal_radii() {
    // 9e-7 past the tangent distance, radii 0.01 apart.
    let a = circle(0.0, 0.0, 3.0);
    let b = circle(0.01 + 9e-7, 0.0, 2.99);
    let hit = relate(&a, &b, Tolerance::default()).unwrap();
    assert_eq!(hit.relationship, Relationship::InternallyTangent);

    let p = hit.points.first().unwrap();
    assert_relative_eq!(p.y, 0.0);
    // Off each boundary by about 9e-7 * 3 / 0.01, far more than the band.
    assert_relative_eq!(a.signed_distance(p), 2.7e-4, max_relative = 1e-2);
    assert_relative_eq!(b.signed_distance(p), 2.7e-4, max_relative = 1e-2);
    assert!(a.signed_distance(p) > 100.0 * 1e-6);

    // The same offset past an external tangency stays inside the band.
    let c = circle(6.0 + 9e-7, 0.0, 3.0);
    let hit = relate(&a, &c, Tolerance::default()).unwrap();
    assert_eq!(hit.relationship, Relationship::ExternallyTangent);
    let p = hit.points.first().unwrap();
    assert!(a.signed_distance(p).abs() <= 1e-6);
    assert!(c.signed_distance(p).abs() <= 1e-6);
}

#[test]
fn concentric_offset_by_one_is_contained() {
    let (rel, pts) = eval(circle(0.0, 0.0, 3.0), circle(1.0, 0.0, 1.0));
    assert_eq!(rel, Relationship::Contained);
    assert!(pts.is_empty());
}

#[test]
fn intersecting_equal_circles() {
    let (rel, pts) = eval(circle(0.0, 0.0, 2.0), circle(3.0, 0.0, 2.0));
    assert_eq!(rel, Relationship::Intersecting);
    assert_eq!(pts.len(), 2);

    let h = 1.75_f64.sqrt();
    assert_relative_eq!(h, 1.3229, epsilon = 1e-4);
    assert_relative_eq!(pts[0].x, 1.5, epsilon = 1e-12);
    assert_relative_eq!(pts[0].y, h, epsilon = 1e-12);
    assert_relative_eq!(pts[1].x, 1.5, epsilon = 1e-12);
    assert_relative_eq!(pts[1].y, -h, epsilon = 1e-12);
}

#[test]
fn coincident_circles_have_no_points() {
    let (rel, pts) = eval(circle(0.0, 0.0, 1.0), circle(0.0, 0.0, 1.0));
    assert_eq!(rel, Relationship::Coincident);
    assert!(pts.is_empty());
}

#[test]
fn far_apart_circles_are_disjoint() {
    let (rel, pts) = eval(circle(0.0, 0.0, 1.0), circle(5.0, 0.0, 1.0));
    assert_eq!(rel, Relationship::Disjoint);
    assert!(pts.is_empty());
}

#[test]
fn distance_sweep_through_external_tangency() {
    // Fixed radii 1 and 2: Intersecting, then ExternallyTangent, then Disjoint.
    let mut seen = Vec::new();
    let mut d = 2.9;
    while d < 3.1 {
        let hit = relate(&circle(0.0, 0.0, 1.0), &circle(d, 0.0, 2.0), Tolerance::default()).unwrap();
        if seen.last() != Some(&hit.relationship) {
            seen.push(hit.relationship);
        }
        d += 1e-7;
    }
    assert_eq!(
        seen,
        vec![
            Relationship::Intersecting,
            Relationship::ExternallyTangent,
            Relationship::Disjoint
        ]
    );
}

#[test]
fn intersection_serializes_to_json() {
    let hit = relate(&circle(0.0, 0.0, 1.0), &circle(2.0, 0.0, 1.0), Tolerance::default()).unwrap();
    let json = serde_json::to_string(&hit).unwrap();
    assert!(json.contains(r#""relationship":"ExternallyTangent""#));
    assert!(json.contains(r#""One""#));

    let back: circlecross::Intersection<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, hit);
    assert!(matches!(back.points, CrossingPoints::One(_)));
}
