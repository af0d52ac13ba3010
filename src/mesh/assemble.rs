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

/// Final pipeline output: unique vertices (z = 0) plus triangular faces
/// indexing into them. Constructed once, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<[f64; 3]>,
    pub faces: Vec<[usize; 3]>,
}

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Summed unsigned area of all faces.
    pub fn surface_area(&self) -> f64 {
        self.faces
            .iter()
            .map(|f| {
                let a = &self.vertices[f[0]];
                let b = &self.vertices[f[1]];
                let c = &self.vertices[f[2]];
                ((b[0] - a[0]) * (c[1] - a[1]) - (b[1] - a[1]) * (c[0] - a[0])).abs() * 0.5
            })
            .sum()
    }

    /// Planar centroid of face `f`.
    pub fn face_centroid(&self, f: usize) -> Point2 {
        let [i, j, k] = self.faces[f];
        let (a, b, c) = (&self.vertices[i], &self.vertices[j], &self.vertices[k]);
        Point2::new(
            (a[0] + b[0] + c[0]) / 3.0,
            (a[1] + b[1] + c[1]) / 3.0,
        )
    }
}

/// Deduplicate triangle corners into a compact vertex list and face-index
/// list.
///
/// Corners are merged only on bit-identical coordinates; near-duplicate
/// coordinates stay separate vertices. Vertex indices follow first-seen
/// insertion order, so identical input yields bit-identical output.
pub fn assemble_mesh(triangles: &[[Point2; 3]]) -> Mesh {
    let mut index: AHashMap<Point2, usize> = AHashMap::with_capacity(triangles.len() * 3);
    let mut vertices = Vec::new();
    let mut faces = Vec::with_capacity(triangles.len());

    for tri in triangles {
        let mut face = [0usize; 3];
        for (slot, corner) in tri.iter().enumerate() {
            let next = vertices.len();
            let id = *index.entry(*corner).or_insert_with(|| {
                vertices.push([corner.x, corner.y, 0.0]);
                next
            });
            face[slot] = id;
        }
        faces.push(face);
    }

    Mesh { vertices, faces }
}

#[cfg(test)]
mod tests {
    use super::assemble_mesh;
    use crate::geometry::Point2;

    #[test]
    fn shared_corner_is_merged() {
        let shared = Point2::new(1.0, 1.0);
        let tris = [
            [Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), shared],
            [shared, Point2::new(0.0, 2.0), Point2::new(0.0, 0.0)],
        ];
        let mesh = assemble_mesh(&tris);
        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.faces.len(), 2);
        assert_eq!(mesh.faces[0][2], mesh.faces[1][0]);
    }
}
