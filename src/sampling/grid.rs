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

use crate::geometry::{Point2, Polygon};
use crate::sampling::hex_radius;

/// Axis-aligned grid at spacing `sqrt(area / count)`, clipped to the polygon.
///
/// The returned count is whatever the density formula yields, not exactly
/// `count`.
pub fn uniform(polygon: &Polygon, count: usize) -> Vec<Point2> {
    let area = polygon.area();
    if count == 0 || area <= 0.0 {
        return Vec::new();
    }
    let spacing = (area / count as f64).sqrt();
    let bb = polygon.aabb();

    let mut points = Vec::new();
    let mut x = bb.min.x;
    while x < bb.max.x {
        let mut y = bb.min.y;
        while y < bb.max.y {
            let p = Point2::new(x, y);
            if polygon.contains(&p) {
                points.push(p);
            }
            y += spacing;
        }
        x += spacing;
    }
    points
}

/// Hexagonal lattice: rows `sqrt(3) * r` apart, each row paired with a second
/// row offset by half the hex width, clipped to the polygon.
pub fn hexagonal(polygon: &Polygon, count: usize) -> Vec<Point2> {
    let area = polygon.area();
    if count == 0 || area <= 0.0 {
        return Vec::new();
    }
    let radius = hex_radius(count as f64 / area);
    let width = radius * 2.0;
    let height = 3.0_f64.sqrt() * radius;
    let bb = polygon.aabb();

    let mut points = Vec::new();
    let mut y = bb.min.y;
    while y < bb.max.y + height {
        let mut x = bb.min.x;
        while x < bb.max.x + width {
            let p = Point2::new(x, y);
            if polygon.contains(&p) {
                points.push(p);
            }
            let offset = Point2::new(x + radius, y + height * 0.5);
            if polygon.contains(&offset) {
                points.push(offset);
            }
            x += width;
        }
        y += height;
    }
    points
}
