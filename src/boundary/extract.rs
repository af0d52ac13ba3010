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

use ahash::{AHashMap, AHashSet};
use smallvec::SmallVec;

use crate::geometry::{Point2, Polygon, Ring};

/// A mesh edge as reported by the host: two endpoint coordinates (already
/// projected to the plane) plus the number of faces incident to the edge.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryEdge {
    pub a: Point2,
    pub b: Point2,
    pub face_count: u32,
}

impl BoundaryEdge {
    pub fn new(a: Point2, b: Point2, face_count: u32) -> Self {
        BoundaryEdge { a, b, face_count }
    }

    /// Boundary edges belong to fewer than two faces.
    #[inline]
    pub fn is_boundary(&self) -> bool {
        self.face_count < 2
    }

    fn other_end(&self, v: &Point2) -> Point2 {
        if self.a == *v { self.b } else { self.a }
    }
}

/// Extract every closed boundary loop of a mesh edge soup.
///
/// Edges incident to fewer than two faces form the boundary set. Connected
/// components of that set (edges chained through shared endpoints) are found
/// by depth-first traversal, then each component is walked into an ordered
/// vertex ring. Returns an empty vector for a closed mesh.
///
/// At a non-manifold boundary vertex (more than two boundary edges meeting)
/// the walk takes the lowest-index unused edge; the choice is arbitrary but
/// deterministic per run.
pub fn extract_loops(edges: &[BoundaryEdge]) -> Vec<Ring> {
    let boundary: Vec<usize> = edges
        .iter()
        .enumerate()
        .filter_map(|(i, e)| e.is_boundary().then_some(i))
        .collect();
    if boundary.is_empty() {
        return Vec::new();
    }

    // endpoint coordinate -> incident boundary edges
    let mut incident: AHashMap<Point2, SmallVec<[usize; 4]>> = AHashMap::default();
    for &i in &boundary {
        incident.entry(edges[i].a).or_default().push(i);
        incident.entry(edges[i].b).or_default().push(i);
    }

    let mut visited: AHashSet<usize> = AHashSet::default();
    let mut loops = Vec::new();

    for &seed in &boundary {
        if visited.contains(&seed) {
            continue;
        }

        // Collect the connected component around `seed`.
        let mut component = Vec::new();
        let mut stack = vec![seed];
        while let Some(ei) = stack.pop() {
            if !visited.insert(ei) {
                continue;
            }
            component.push(ei);
            for endpoint in [&edges[ei].a, &edges[ei].b] {
                if let Some(list) = incident.get(endpoint) {
                    for &other in list {
                        if !visited.contains(&other) {
                            stack.push(other);
                        }
                    }
                }
            }
        }

        if let Some(ring) = order_component(&component, edges) {
            loops.push(ring);
        }
    }

    loops
}

/// Walk a connected edge component into an ordered vertex sequence: start at
/// an arbitrary endpoint, repeatedly take an unused edge incident to the
/// current vertex and append its other endpoint.
fn order_component(component: &[usize], edges: &[BoundaryEdge]) -> Option<Ring> {
    let mut remaining: Vec<usize> = component.to_vec();
    let first = remaining.remove(0);
    let mut current = first;
    let mut vert = edges[first].a;
    let mut points = vec![vert];

    while !remaining.is_empty() {
        let next = edges[current].other_end(&vert);
        points.push(next);
        vert = next;
        match remaining
            .iter()
            .position(|&i| edges[i].a == vert || edges[i].b == vert)
        {
            Some(pos) => current = remaining.remove(pos),
            // Open chain: no edge continues from here. Tolerated, the
            // partial walk is returned as-is.
            None => break,
        }
    }

    // Fewer than three vertices cannot bound any area.
    (points.len() >= 3).then(|| Ring::new(points))
}

/// Classify loops into one polygon-with-holes.
///
/// The loop with the greatest perimeter (total edge length, not area) is
/// taken as the outer boundary; every other loop becomes a hole. A heuristic,
/// not a topological guarantee: a small loop with a very long perimeter, such
/// as a spiral, would be misclassified.
pub fn build_polygon(loops: Vec<Ring>) -> Option<Polygon> {
    if loops.is_empty() {
        return None;
    }
    let outer_idx = loops
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.perimeter().total_cmp(&b.perimeter()))
        .map(|(i, _)| i)?;
    let mut loops = loops;
    let outer = loops.remove(outer_idx);
    Some(Polygon::new(outer, loops))
}
