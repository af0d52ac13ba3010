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

use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::geometry::{Aabb2, Point2, Polygon};
use crate::sampling::blue_noise::AccelGrid;
use crate::sampling::{SamplingError, attempt_budget};

/// Fresh disc packings are generated at most this many times before giving
/// up on reaching the requested count.
const MAX_BATCHES: usize = 32;
const K_CANDIDATES: usize = 30;

/// Poisson-disc sampling: pack the bounding box with discs of radius
/// `sqrt(area / (count * pi))`, keep the polygon-contained points, and repeat
/// with fresh packings until at least `count` points exist, then truncate to
/// exactly `count`.
pub fn sample<R: Rng + ?Sized>(
    polygon: &Polygon,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Point2>, SamplingError> {
    let area = polygon.area();
    if count == 0 {
        return Ok(Vec::new());
    }
    if area <= 0.0 {
        return Err(SamplingError::BudgetExhausted {
            attempts: 0,
            placed: 0,
            requested: count,
            partial: Vec::new(),
        });
    }
    let radius = (area / (count as f64 * PI)).sqrt();
    let bb = polygon.aabb();
    let budget = attempt_budget(count);

    let mut points = Vec::with_capacity(count);
    for batch in 1..=MAX_BATCHES {
        let Some(packing) = pack_box(&bb, radius, budget, rng) else {
            return Err(SamplingError::BudgetExhausted {
                attempts: budget,
                placed: points.len(),
                requested: count,
                partial: points,
            });
        };
        for p in packing {
            if polygon.contains(&p) {
                points.push(p);
            }
        }
        if points.len() >= count {
            points.truncate(count);
            return Ok(points);
        }
        log::debug!(
            "poisson-disc batch {batch}: {} of {count} points placed",
            points.len()
        );
    }

    Err(SamplingError::BudgetExhausted {
        attempts: MAX_BATCHES,
        placed: points.len(),
        requested: count,
        partial: points,
    })
}

/// One Bridson packing of the whole box, ignoring the polygon. Fails when
/// the acceleration grid would exceed `max_cells` cells at this radius.
fn pack_box<R: Rng + ?Sized>(
    bb: &Aabb2,
    radius: f64,
    max_cells: usize,
    rng: &mut R,
) -> Option<Vec<Point2>> {
    let mut grid = AccelGrid::with_budget(bb, radius, max_cells)?;
    let first = Point2::new(
        rng.random_range(bb.min.x..=bb.max.x),
        rng.random_range(bb.min.y..=bb.max.y),
    );

    let mut samples = vec![first];
    let mut active = vec![first];
    grid.insert(&first, 0);

    while !active.is_empty() {
        let pick = rng.random_range(0..active.len());
        let point = active.swap_remove(pick);
        for _ in 0..K_CANDIDATES {
            let angle = rng.random_range(0.0..TAU);
            let dist = rng.random_range(radius..radius * 2.0);
            let candidate = Point2::new(
                point.x + dist * angle.cos(),
                point.y + dist * angle.sin(),
            );
            if bb.contains(&candidate) && grid.fits(&candidate, radius, &samples) {
                grid.insert(&candidate, samples.len());
                samples.push(candidate);
                active.push(candidate);
            }
        }
    }

    Some(samples)
}
