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
use thiserror::Error;

use crate::boundary::{BoundaryEdge, build_polygon, extract_loops};
use crate::mesh::{Mesh, assemble_mesh};
use crate::sampling::{SamplingError, SamplingMethod};
use crate::triangulation::triangulate_polygon;

/// Knobs consumed by [`fill_boundary`]. Everything the pipeline needs is
/// passed in explicitly; there is no ambient host state.
#[derive(Debug, Clone)]
pub struct FillConfig {
    pub method: SamplingMethod,
    pub target_count: usize,
    /// Relative buffer width for the triangle containment test, as a
    /// fraction of the polygon's largest bounding-box extent.
    pub tolerance: f64,
}

impl Default for FillConfig {
    fn default() -> Self {
        FillConfig {
            method: SamplingMethod::UniformGrid,
            target_count: 100,
            tolerance: 1e-3,
        }
    }
}

#[derive(Debug, Error)]
pub enum FillError {
    /// The mesh has no boundary edges (it is closed); there is nothing to
    /// triangulate.
    #[error("mesh has no boundary edges, nothing to triangulate")]
    EmptyBoundary,
    #[error(transparent)]
    Sampling(#[from] SamplingError),
}

/// Run the full pipeline: boundary edges to renderable mesh.
///
/// Stages: extract ordered loops from the boundary edge soup, classify them
/// into a polygon-with-holes, scatter interior samples with the configured
/// strategy, Delaunay-triangulate the union point set, clip to the polygon,
/// and assemble the deduplicated vertex/face mesh.
///
/// Sampling strategies that cannot reach the requested count degrade to a
/// coarser triangulation rather than failing; only an exhausted rejection
/// budget is surfaced as an error.
pub fn fill_boundary<R: Rng + ?Sized>(
    edges: &[BoundaryEdge],
    config: &FillConfig,
    rng: &mut R,
) -> Result<Mesh, FillError> {
    let loops = extract_loops(edges);
    let Some(polygon) = build_polygon(loops) else {
        return Err(FillError::EmptyBoundary);
    };

    let samples = config.method.sample(&polygon, config.target_count, rng)?;
    if samples.len() < config.target_count {
        log::debug!(
            "sampling produced {} of {} requested points",
            samples.len(),
            config.target_count
        );
    }

    let triangles = triangulate_polygon(&polygon, &samples, config.tolerance);
    Ok(assemble_mesh(&triangles))
}
