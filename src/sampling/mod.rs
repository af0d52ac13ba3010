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

//! Interior point sampling strategies.
//!
//! Every strategy implements the same contract: given a polygon and a target
//! point count, return points strictly inside the polygon's **outer** ring.
//! Hole regions are not excluded here; the triangulation clip is responsible
//! for them. `RandomPoints` and `PoissonDisc` return exactly `count` points
//! when they succeed; the density-driven strategies return a count governed
//! by the density formula, not an exact match.

pub mod blue_noise;
pub mod centroidal;
pub mod grid;
pub mod poisson;
pub mod random;

use rand::Rng;
use thiserror::Error;

use crate::geometry::{Point2, Polygon};

/// Rejection loops stop after `count * ATTEMPTS_PER_POINT` attempts (with a
/// floor for tiny requests) instead of spinning forever on polygons that
/// cover almost none of their bounding box.
const ATTEMPTS_PER_POINT: usize = 1_000;
const MIN_ATTEMPT_BUDGET: usize = 10_000;

#[derive(Debug, Error)]
pub enum SamplingError {
    /// The rejection budget ran out before the requested point count was
    /// reached. Carries the points placed so far as a partial result.
    #[error(
        "sampling budget exhausted after {attempts} attempts: placed {placed} of {requested} points"
    )]
    BudgetExhausted {
        attempts: usize,
        placed: usize,
        requested: usize,
        partial: Vec<Point2>,
    },
}

/// The six interior sampling strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SamplingMethod {
    /// Uniform rejection sampling in the bounding box; exact count.
    RandomPoints,
    /// Axis-aligned lattice at density-derived spacing; approximate count.
    UniformGrid,
    /// Hexagonal lattice at density-derived radius; approximate count.
    HexGrid,
    /// Bridson dart throwing with a minimum inter-point radius; approximate
    /// count.
    BlueNoise,
    /// Batched disc packing over the bounding box, truncated to an exact
    /// count.
    PoissonDisc,
    /// Centroidal Voronoi approximation via k-means; approximate count.
    Centroidal,
}

impl SamplingMethod {
    /// Scatter roughly `count` points inside `polygon`'s outer ring.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        polygon: &Polygon,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<Point2>, SamplingError> {
        match self {
            SamplingMethod::RandomPoints => random::sample(polygon, count, rng),
            SamplingMethod::UniformGrid => Ok(grid::uniform(polygon, count)),
            SamplingMethod::HexGrid => Ok(grid::hexagonal(polygon, count)),
            SamplingMethod::BlueNoise => blue_noise::sample(polygon, count, rng),
            SamplingMethod::PoissonDisc => poisson::sample(polygon, count, rng),
            SamplingMethod::Centroidal => Ok(centroidal::sample(polygon, count, rng)),
        }
    }
}

pub(crate) fn attempt_budget(count: usize) -> usize {
    count
        .saturating_mul(ATTEMPTS_PER_POINT)
        .max(MIN_ATTEMPT_BUDGET)
}

/// Packing radius for a hexagonal arrangement at `density` points per unit
/// area: each point owns a hexagonal cell of area `3*sqrt(3)/2 * r^2`.
pub(crate) fn hex_radius(density: f64) -> f64 {
    (2.0 / (3.0 * 3.0_f64.sqrt() * density)).sqrt()
}
