// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use ahash::AHashSet;

use crate::geometry::{Point2, Polygon};
use crate::triangulation::Delaunay;

/// Triangulate the polygon interior.
///
/// The union point set is the interior `samples` plus every outer-ring and
/// hole-ring vertex. Its unconstrained Delaunay triangulation covers the
/// convex hull, so each triangle is then filtered by buffered containment:
/// all three corners must lie within the polygon dilated by
/// `tolerance * max(bbox extent)`, and the centroid must lie strictly inside
/// the polygon and outside every hole. Triangles spanning a hole or bridging
/// a concave notch fail the centroid test and are dropped; the buffer keeps
/// boundary-seated corners from being rejected by floating-point error.
pub fn triangulate_polygon(
    polygon: &Polygon,
    samples: &[Point2],
    tolerance: f64,
) -> Vec<[Point2; 3]> {
    let mut union = Vec::with_capacity(
        samples.len()
            + polygon.outer.len()
            + polygon.holes.iter().map(|h| h.len()).sum::<usize>(),
    );
    let mut seen: AHashSet<Point2> = AHashSet::default();
    let mut push = |p: Point2, union: &mut Vec<Point2>| {
        if seen.insert(p) {
            union.push(p);
        }
    };
    for &p in samples {
        push(p, &mut union);
    }
    for &p in &polygon.outer.points {
        push(p, &mut union);
    }
    for hole in &polygon.holes {
        for &p in &hole.points {
            push(p, &mut union);
        }
    }

    let dt = Delaunay::build(&union);
    let buffer = tolerance.max(0.0) * polygon.aabb().max_extent();

    let mut kept = Vec::with_capacity(dt.triangles.len());
    for t in &dt.triangles {
        let a = dt.points[t.0];
        let b = dt.points[t.1];
        let c = dt.points[t.2];
        if !polygon.contains_buffered(&a, buffer)
            || !polygon.contains_buffered(&b, buffer)
            || !polygon.contains_buffered(&c, buffer)
        {
            continue;
        }
        let centroid = Point2::new((a.x + b.x + c.x) / 3.0, (a.y + b.y + c.y) / 3.0);
        if !polygon.contains_with_holes(&centroid) {
            continue;
        }
        kept.push([a, b, c]);
    }
    kept
}
