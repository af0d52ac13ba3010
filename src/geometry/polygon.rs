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

use crate::geometry::{Aabb2, Point2};
use crate::kernel::{dist_sq_point_segment, point_in_ring};

// Relative width of the band around a ring treated as "on the boundary"
// by the strict containment test.
const BOUNDARY_EPS: f64 = 1e-12;

/// An ordered, closed polygonal ring.
///
/// The closing edge from the last vertex back to the first is implicit; the
/// first vertex is not repeated. Winding direction is not normalized and must
/// be tolerated by consumers.
#[derive(Debug, Clone)]
pub struct Ring {
    pub points: Vec<Point2>,
}

impl Ring {
    pub fn new(points: Vec<Point2>) -> Self {
        Ring { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total edge length, closing edge included.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        let mut total = 0.0;
        for i in 0..n {
            total += self.points[i].distance_to(&self.points[(i + 1) % n]);
        }
        total
    }

    /// Unsigned shoelace area.
    pub fn area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut twice = 0.0;
        for i in 0..n {
            let a = &self.points[i];
            let b = &self.points[(i + 1) % n];
            twice += a.x * b.y - b.x * a.y;
        }
        (twice * 0.5).abs()
    }

    pub fn aabb(&self) -> Aabb2 {
        Aabb2::from_points(&self.points)
    }

    /// Even-odd crossing test; boundary points are ambiguous.
    #[inline]
    pub fn contains(&self, p: &Point2) -> bool {
        point_in_ring(p, &self.points)
    }

    /// Squared distance from `p` to the nearest ring edge.
    pub fn distance_sq_to(&self, p: &Point2) -> f64 {
        let n = self.points.len();
        if n == 0 {
            return f64::INFINITY;
        }
        if n == 1 {
            return p.distance_squared_to(&self.points[0]);
        }
        let mut best = f64::INFINITY;
        for i in 0..n {
            let d = dist_sq_point_segment(p, &self.points[i], &self.points[(i + 1) % n]);
            best = best.min(d);
        }
        best
    }
}

/// One outer ring plus zero or more hole rings, all coplanar.
///
/// Holes are assumed to lie strictly inside the outer ring without
/// overlapping each other; the input is trusted, not validated.
#[derive(Debug, Clone)]
pub struct Polygon {
    pub outer: Ring,
    pub holes: Vec<Ring>,
}

impl Polygon {
    pub fn new(outer: Ring, holes: Vec<Ring>) -> Self {
        Polygon { outer, holes }
    }

    /// Area of the outer ring minus the hole areas.
    pub fn area(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(Ring::area).sum();
        (self.outer.area() - holes).max(0.0)
    }

    pub fn aabb(&self) -> Aabb2 {
        self.outer.aabb()
    }

    fn boundary_eps_sq(&self) -> f64 {
        let eps = BOUNDARY_EPS * self.aabb().max_extent();
        eps * eps
    }

    /// Strict interior test against the outer ring only; hole regions are
    /// not excluded. Points on (or within rounding distance of) the outer
    /// boundary count as outside.
    pub fn contains(&self, p: &Point2) -> bool {
        self.outer.contains(p) && self.outer.distance_sq_to(p) > self.boundary_eps_sq()
    }

    /// Strict interior test that also excludes hole regions.
    pub fn contains_with_holes(&self, p: &Point2) -> bool {
        self.contains(p) && !self.holes.iter().any(|h| h.contains(p))
    }

    /// Containment against the polygon dilated by `buffer`: the outer ring
    /// grows outward and every hole shrinks by the same amount. Absorbs
    /// floating-point error for points sitting exactly on the boundary.
    pub fn contains_buffered(&self, p: &Point2, buffer: f64) -> bool {
        let buffer_sq = buffer * buffer;
        if !self.outer.contains(p) && self.outer.distance_sq_to(p) > buffer_sq {
            return false;
        }
        for hole in &self.holes {
            if hole.contains(p) && hole.distance_sq_to(p) > buffer_sq {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{Polygon, Ring};
    use crate::geometry::Point2;

    fn square(origin: f64, side: f64) -> Ring {
        Ring::new(vec![
            Point2::new(origin, origin),
            Point2::new(origin + side, origin),
            Point2::new(origin + side, origin + side),
            Point2::new(origin, origin + side),
        ])
    }

    #[test]
    fn perimeter_and_area() {
        let r = square(0.0, 10.0);
        assert_eq!(r.perimeter(), 40.0);
        assert_eq!(r.area(), 100.0);
    }

    #[test]
    fn strict_containment_excludes_boundary() {
        let poly = Polygon::new(square(0.0, 10.0), Vec::new());
        assert!(poly.contains(&Point2::new(5.0, 5.0)));
        assert!(!poly.contains(&Point2::new(0.0, 5.0)));
        assert!(!poly.contains(&Point2::new(5.0, 10.0)));
        assert!(!poly.contains(&Point2::new(11.0, 5.0)));
    }

    #[test]
    fn hole_area_and_containment() {
        let poly = Polygon::new(square(0.0, 10.0), vec![square(4.0, 2.0)]);
        assert_eq!(poly.area(), 96.0);
        assert!(poly.contains(&Point2::new(5.0, 5.0))); // outer-only test ignores the hole
        assert!(!poly.contains_with_holes(&Point2::new(5.0, 5.0)));
        assert!(poly.contains_with_holes(&Point2::new(1.0, 1.0)));
    }

    #[test]
    fn buffered_containment_absorbs_boundary_points() {
        let poly = Polygon::new(square(0.0, 10.0), Vec::new());
        assert!(poly.contains_buffered(&Point2::new(0.0, 5.0), 1e-3));
        assert!(poly.contains_buffered(&Point2::new(10.0005, 5.0), 1e-3));
        assert!(!poly.contains_buffered(&Point2::new(10.1, 5.0), 1e-3));
    }
}
