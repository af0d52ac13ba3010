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

use ahash::AHashMap;

use crate::geometry::Point2;
use crate::kernel::{bbox, incircle, orient2d};

pub const SQRT_3: f64 = 1.7320508075688772;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct Edge(usize, usize);

impl Edge {
    #[inline]
    fn new(a: usize, b: usize) -> Self {
        if a < b { Edge(a, b) } else { Edge(b, a) }
    }
}

/// Three indices into a shared point list, counter-clockwise.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle(pub usize, pub usize, pub usize);

impl Triangle {
    #[inline]
    pub fn vertices(&self) -> [usize; 3] {
        [self.0, self.1, self.2]
    }
}

/// Unconstrained Delaunay triangulation of a 2D point set.
#[derive(Clone, Debug)]
pub struct Delaunay {
    pub points: Vec<Point2>,
    pub triangles: Vec<Triangle>, // indices into points
}

impl Delaunay {
    /// Build the Delaunay triangulation of `pts`. Fewer than three points
    /// yield an empty triangle list.
    pub fn build(pts: &[Point2]) -> Self {
        let points = pts.to_vec();
        if points.len() < 3 {
            return Self {
                points,
                triangles: Vec::new(),
            };
        }

        // Super-triangle comfortably containing all points
        let (minx, miny, maxx, maxy) = bbox(&points);
        let delta = (maxx - minx).max(maxy - miny);
        let cx = (minx + maxx) * 0.5;
        let cy = (miny + maxy) * 0.5;
        let r = 64.0 * delta + 1.0;

        let mut work = points.clone();
        let s0 = work.len();
        let (s1, s2) = (s0 + 1, s0 + 2);
        work.push(Point2::new(cx, cy + 2.0 * r));
        work.push(Point2::new(cx - SQRT_3 * r, cy - r));
        work.push(Point2::new(cx + SQRT_3 * r, cy - r));

        let mut triangles = vec![Triangle(s0, s1, s2)];

        // Insert each point using Bowyer-Watson
        for pid in 0..s0 {
            Self::insert_point(pid, &work, &mut triangles);
        }

        // Remove triangles touching the super-triangle
        triangles.retain(|t| t.0 < s0 && t.1 < s0 && t.2 < s0);

        Self { points, triangles }
    }

    /// Insert a single point: remove every triangle whose circumcircle
    /// contains it, then re-triangulate the cavity boundary against the
    /// new point.
    fn insert_point(pid: usize, points: &[Point2], triangles: &mut Vec<Triangle>) {
        let p = &points[pid];

        let mut bad_triangles = Vec::new();
        for (i, t) in triangles.iter().enumerate() {
            if Self::in_circumcircle(p, *t, points) {
                bad_triangles.push(i);
            }
        }
        if bad_triangles.is_empty() {
            return; // duplicate or degenerate point, nothing to do
        }

        // Cavity boundary edges appear in exactly one bad triangle
        let mut edge_count: AHashMap<Edge, u32> = AHashMap::default();
        for &i in &bad_triangles {
            let t = triangles[i];
            for edge in [
                Edge::new(t.0, t.1),
                Edge::new(t.1, t.2),
                Edge::new(t.2, t.0),
            ] {
                *edge_count.entry(edge).or_insert(0) += 1;
            }
        }

        // Remove bad triangles (reverse order keeps indices valid)
        bad_triangles.sort_unstable();
        for &i in bad_triangles.iter().rev() {
            triangles.swap_remove(i);
        }

        for (edge, count) in edge_count {
            if count != 1 {
                continue;
            }
            let oriented = if orient2d(&points[edge.0], &points[edge.1], p) > 0.0 {
                Triangle(edge.0, edge.1, pid)
            } else {
                Triangle(edge.0, pid, edge.1)
            };
            triangles.push(oriented);
        }
    }

    fn in_circumcircle(p: &Point2, t: Triangle, points: &[Point2]) -> bool {
        // incircle expects CCW ordering
        let (a, b, c) = if orient2d(&points[t.0], &points[t.1], &points[t.2]) > 0.0 {
            (t.0, t.1, t.2)
        } else {
            (t.0, t.2, t.1)
        };
        incircle(&points[a], &points[b], &points[c], p) > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::Delaunay;
    use crate::geometry::Point2;
    use crate::kernel::orient2d;

    #[test]
    fn square_gives_two_triangles() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ];
        let dt = Delaunay::build(&pts);
        assert_eq!(dt.triangles.len(), 2);
        for t in &dt.triangles {
            assert!(orient2d(&dt.points[t.0], &dt.points[t.1], &dt.points[t.2]) > 0.0);
        }
    }

    #[test]
    fn too_few_points() {
        let pts = [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        assert!(Delaunay::build(&pts).triangles.is_empty());
    }

    #[test]
    fn interior_point_fans_out() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(0.0, 2.0),
            Point2::new(1.0, 1.0),
        ];
        let dt = Delaunay::build(&pts);
        assert_eq!(dt.triangles.len(), 4);
        let total: f64 = dt
            .triangles
            .iter()
            .map(|t| orient2d(&dt.points[t.0], &dt.points[t.1], &dt.points[t.2]).abs() * 0.5)
            .sum();
        assert!((total - 4.0).abs() < 1e-12);
    }
}
