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

use rand::Rng;

use crate::geometry::{Point2, Polygon};
use crate::sampling::{SamplingError, attempt_budget};

/// Uniform rejection sampling: draw points in the bounding box, keep the ones
/// inside the polygon, until exactly `count` are collected or the attempt
/// budget runs out.
pub fn sample<R: Rng + ?Sized>(
    polygon: &Polygon,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Point2>, SamplingError> {
    let bb = polygon.aabb();
    let budget = attempt_budget(count);
    let mut points = Vec::with_capacity(count);
    let mut attempts = 0;

    while points.len() < count {
        if attempts >= budget {
            return Err(SamplingError::BudgetExhausted {
                attempts,
                placed: points.len(),
                requested: count,
                partial: points,
            });
        }
        attempts += 1;
        let p = Point2::new(
            rng.random_range(bb.min.x..=bb.max.x),
            rng.random_range(bb.min.y..=bb.max.y),
        );
        if polygon.contains(&p) {
            points.push(p);
        }
    }

    Ok(points)
}
