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

use std::f64::consts::TAU;

use rand::Rng;

use crate::geometry::{Aabb2, Point2, Polygon};
use crate::sampling::{SamplingError, attempt_budget, hex_radius};

/// Candidate offspring attempted per active point.
const K_CANDIDATES: usize = 30;

/// Background grid for neighbor lookups during dart throwing. Cell size is
/// `radius / sqrt(2)` so a cell holds at most one sample and a 5x5 block of
/// cells covers every point within `radius`.
pub(crate) struct AccelGrid {
    origin: Point2,
    cell: f64,
    width: usize,
    height: usize,
    cells: Vec<i32>,
}

impl AccelGrid {
    /// Fails when covering the box at this radius would take more than
    /// `max_cells` cells. The cell count is proportional to the ratio of
    /// box area to polygon area, so a thin sliver in a large box is
    /// rejected here instead of demanding an arbitrarily large grid.
    pub(crate) fn with_budget(bb: &Aabb2, radius: f64, max_cells: usize) -> Option<Self> {
        let cell = radius / 2.0_f64.sqrt();
        let width = bb.width() / cell + 1.0;
        let height = bb.height() / cell + 1.0;
        if !(width * height).is_finite() || width * height > max_cells as f64 {
            return None;
        }
        let width = width as usize;
        let height = height as usize;
        Some(AccelGrid {
            origin: bb.min,
            cell,
            width,
            height,
            cells: vec![-1; width * height],
        })
    }

    #[inline]
    fn coords(&self, p: &Point2) -> (usize, usize) {
        let gx = ((p.x - self.origin.x) / self.cell) as usize;
        let gy = ((p.y - self.origin.y) / self.cell) as usize;
        (gx.min(self.width - 1), gy.min(self.height - 1))
    }

    pub(crate) fn insert(&mut self, p: &Point2, index: usize) {
        let (gx, gy) = self.coords(p);
        self.cells[gy * self.width + gx] = index as i32;
    }

    /// True when no accepted sample lies within `radius` of `p`.
    pub(crate) fn fits(&self, p: &Point2, radius: f64, samples: &[Point2]) -> bool {
        let (gx, gy) = self.coords(p);
        let x0 = gx.saturating_sub(2);
        let x1 = (gx + 3).min(self.width);
        let y0 = gy.saturating_sub(2);
        let y1 = (gy + 3).min(self.height);
        let radius_sq = radius * radius;
        for j in y0..y1 {
            for i in x0..x1 {
                let slot = self.cells[j * self.width + i];
                if slot >= 0 && p.distance_squared_to(&samples[slot as usize]) < radius_sq {
                    return false;
                }
            }
        }
        true
    }
}

/// Bridson-style dart throwing: grow the sample set from a random seed point,
/// attempting [`K_CANDIDATES`] offspring in the annulus `[r, 2r]` around each
/// active point, accepting a candidate when it lies inside the polygon and no
/// prior sample is closer than `r`. The minimum radius `r` is derived from
/// the target density, so the final count is approximate.
pub fn sample<R: Rng + ?Sized>(
    polygon: &Polygon,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Point2>, SamplingError> {
    let area = polygon.area();
    if count == 0 || area <= 0.0 {
        return Ok(Vec::new());
    }
    let radius = hex_radius(count as f64 / area);
    let bb = polygon.aabb();
    let budget = attempt_budget(count);
    let Some(mut grid) = AccelGrid::with_budget(&bb, radius, budget) else {
        return Err(SamplingError::BudgetExhausted {
            attempts: budget,
            placed: 0,
            requested: count,
            partial: Vec::new(),
        });
    };

    // Seed point: rejection sampling with the usual budget.
    let mut attempts = 0;
    let first = loop {
        if attempts >= budget {
            return Err(SamplingError::BudgetExhausted {
                attempts,
                placed: 0,
                requested: count,
                partial: Vec::new(),
            });
        }
        attempts += 1;
        let p = Point2::new(
            rng.random_range(bb.min.x..=bb.max.x),
            rng.random_range(bb.min.y..=bb.max.y),
        );
        if polygon.contains(&p) {
            break p;
        }
    };

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
            if polygon.contains(&candidate) && grid.fits(&candidate, radius, &samples) {
                grid.insert(&candidate, samples.len());
                samples.push(candidate);
                active.push(candidate);
            }
        }
    }

    Ok(samples)
}
