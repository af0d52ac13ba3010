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

//! Fill a simple polygon (with optional holes) with a triangle mesh.
//!
//! The pipeline runs in five stages: extract ordered boundary loops from an
//! unordered edge soup, classify them into a polygon-with-holes, scatter
//! interior sample points with one of six [`sampling::SamplingMethod`]
//! strategies, Delaunay-triangulate the combined point set, and clip the
//! result back to the polygon. [`pipeline::fill_boundary`] wires the stages
//! together.

pub mod boundary;
pub mod geometry;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod pipeline;
pub mod sampling;
pub mod triangulation;

pub use boundary::{BoundaryEdge, build_polygon, extract_loops};
pub use geometry::{Aabb2, Point2, Polygon, Ring};
pub use mesh::{Mesh, assemble_mesh};
pub use pipeline::{FillConfig, FillError, fill_boundary};
pub use sampling::{SamplingError, SamplingMethod};
pub use triangulation::{Delaunay, Triangle, triangulate_polygon};
