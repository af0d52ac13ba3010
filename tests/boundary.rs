use trifill::boundary::{BoundaryEdge, build_polygon, extract_loops};
use trifill::geometry::Point2;

fn ring_edges(points: &[(f64, f64)], face_count: u32) -> Vec<BoundaryEdge> {
    let n = points.len();
    (0..n)
        .map(|i| {
            let (ax, ay) = points[i];
            let (bx, by) = points[(i + 1) % n];
            BoundaryEdge::new(Point2::new(ax, ay), Point2::new(bx, by), face_count)
        })
        .collect()
}

#[test]
fn single_loop_contains_every_vertex_once() {
    let hexagon = [
        (2.0, 0.0),
        (4.0, 0.0),
        (6.0, 2.0),
        (4.0, 4.0),
        (2.0, 4.0),
        (0.0, 2.0),
    ];
    // scrambled order and flipped endpoints must not matter
    let mut edges = ring_edges(&hexagon, 1);
    edges.swap(0, 3);
    edges.swap(1, 5);
    for e in edges.iter_mut().step_by(2) {
        std::mem::swap(&mut e.a, &mut e.b);
    }

    let loops = extract_loops(&edges);
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].len(), 6);
    for (x, y) in hexagon {
        let hits = loops[0]
            .points
            .iter()
            .filter(|p| **p == Point2::new(x, y))
            .count();
        assert_eq!(hits, 1, "vertex ({x}, {y}) should appear exactly once");
    }
}

#[test]
fn closed_mesh_has_no_loops() {
    let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let edges = ring_edges(&square, 2);
    assert!(extract_loops(&edges).is_empty());
}

#[test]
fn interior_edges_are_ignored() {
    let square = [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)];
    let mut edges = ring_edges(&square, 1);
    // diagonal shared by two faces
    edges.push(BoundaryEdge::new(
        Point2::new(0.0, 0.0),
        Point2::new(1.0, 1.0),
        2,
    ));

    let loops = extract_loops(&edges);
    assert_eq!(loops.len(), 1);
    assert_eq!(loops[0].len(), 4);
}

#[test]
fn two_separate_loops_are_both_found() {
    let mut edges = ring_edges(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], 1);
    edges.extend(ring_edges(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)], 1));

    let loops = extract_loops(&edges);
    assert_eq!(loops.len(), 2);
}

#[test]
fn longest_perimeter_loop_becomes_outer() {
    let mut edges = ring_edges(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)], 1);
    edges.extend(ring_edges(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)], 1));

    let polygon = build_polygon(extract_loops(&edges)).unwrap();
    assert_eq!(polygon.outer.perimeter(), 40.0);
    assert_eq!(polygon.holes.len(), 1);
    assert_eq!(polygon.holes[0].perimeter(), 8.0);
    assert_eq!(polygon.area(), 96.0);
}

#[test]
fn empty_input_builds_nothing() {
    assert!(build_polygon(Vec::new()).is_none());
    assert!(extract_loops(&[]).is_empty());
}
