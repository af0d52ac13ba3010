use rand::SeedableRng;
use rand::rngs::StdRng;

use trifill::boundary::BoundaryEdge;
use trifill::geometry::Point2;
use trifill::pipeline::{FillConfig, FillError, fill_boundary};
use trifill::sampling::SamplingMethod;

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

fn square_edges(origin: f64, side: f64) -> Vec<BoundaryEdge> {
    ring_edges(
        &[
            (origin, origin),
            (origin + side, origin),
            (origin + side, origin + side),
            (origin, origin + side),
        ],
        1,
    )
}

#[test]
fn square_with_uniform_grid_end_to_end() {
    let edges = square_edges(0.0, 10.0);
    let config = FillConfig {
        method: SamplingMethod::UniformGrid,
        target_count: 100,
        tolerance: 1e-3,
    };
    let mut rng = StdRng::seed_from_u64(1);

    let mesh = fill_boundary(&edges, &config, &mut rng).unwrap();
    assert!(!mesh.is_empty());
    assert!((mesh.surface_area() - 100.0).abs() < 1e-6);
    for v in &mesh.vertices {
        assert!(v[0] >= 0.0 && v[0] <= 10.0);
        assert!(v[1] >= 0.0 && v[1] <= 10.0);
        assert_eq!(v[2], 0.0);
    }
}

#[test]
fn every_method_fills_the_square() {
    let methods = [
        SamplingMethod::RandomPoints,
        SamplingMethod::UniformGrid,
        SamplingMethod::HexGrid,
        SamplingMethod::BlueNoise,
        SamplingMethod::PoissonDisc,
        SamplingMethod::Centroidal,
    ];
    for (i, method) in methods.iter().enumerate() {
        let edges = square_edges(0.0, 10.0);
        let config = FillConfig {
            method: *method,
            target_count: 60,
            tolerance: 1e-3,
        };
        let mut rng = StdRng::seed_from_u64(100 + i as u64);
        let mesh = fill_boundary(&edges, &config, &mut rng).unwrap();
        let area = mesh.surface_area();
        assert!(
            (area - 100.0).abs() < 1e-6,
            "{method:?} covered {area} instead of 100"
        );
    }
}

#[test]
fn hole_is_respected_end_to_end() {
    let mut edges = square_edges(0.0, 10.0);
    edges.extend(square_edges(4.0, 2.0));
    let config = FillConfig {
        method: SamplingMethod::UniformGrid,
        target_count: 100,
        tolerance: 1e-3,
    };
    let mut rng = StdRng::seed_from_u64(21);

    let mesh = fill_boundary(&edges, &config, &mut rng).unwrap();
    assert!(!mesh.is_empty());
    for f in 0..mesh.faces.len() {
        let c = mesh.face_centroid(f);
        let inside_hole =
            c.x > 4.0 + 1e-9 && c.x < 6.0 - 1e-9 && c.y > 4.0 + 1e-9 && c.y < 6.0 - 1e-9;
        assert!(!inside_hole, "face {f} centroid {c:?} fell inside the hole");
    }
}

#[test]
fn closed_mesh_reports_empty_boundary() {
    let edges = ring_edges(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)], 2);
    let config = FillConfig::default();
    let mut rng = StdRng::seed_from_u64(0);
    let err = fill_boundary(&edges, &config, &mut rng).unwrap_err();
    assert!(matches!(err, FillError::EmptyBoundary));
}

#[test]
fn sampling_failure_propagates() {
    let edges = ring_edges(
        &[
            (0.0, 0.0),
            (10.0, 10.0),
            (10.0, 10.0 + 1e-9),
            (0.0, 1e-9),
        ],
        1,
    );
    let config = FillConfig {
        method: SamplingMethod::RandomPoints,
        target_count: 10,
        tolerance: 1e-3,
    };
    let mut rng = StdRng::seed_from_u64(13);
    let err = fill_boundary(&edges, &config, &mut rng).unwrap_err();
    assert!(matches!(err, FillError::Sampling(_)));
}
