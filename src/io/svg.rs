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

//! SVG dumps of polygons and meshes. Debugging aid only, not part of the
//! pipeline contract.

use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

use crate::geometry::{Polygon, Ring};
use crate::mesh::Mesh;

const HEADER: &str = r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg">"#;

fn write_ring(out: &mut impl Write, ring: &Ring, stroke: &str) -> io::Result<()> {
    write!(out, r#"<polygon fill="none" stroke="{stroke}" points=""#)?;
    for (i, p) in ring.points.iter().enumerate() {
        if i > 0 {
            write!(out, " ")?;
        }
        write!(out, "{},{}", p.x, p.y)?;
    }
    writeln!(out, r#""/>"#)
}

/// Write the polygon's rings as stroked outlines.
pub fn write_polygon_svg<P: AsRef<Path>>(polygon: &Polygon, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{HEADER}")?;
    write_ring(&mut out, &polygon.outer, "black")?;
    for hole in &polygon.holes {
        write_ring(&mut out, hole, "red")?;
    }
    writeln!(out, "</svg>")?;
    out.flush()
}

/// Write every mesh face as an outlined triangle.
pub fn write_mesh_svg<P: AsRef<Path>>(mesh: &Mesh, path: P) -> io::Result<()> {
    let file = File::create(path)?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{HEADER}")?;
    for face in &mesh.faces {
        write!(out, r#"<polygon fill="none" stroke="black" points=""#)?;
        for (i, &v) in face.iter().enumerate() {
            if i > 0 {
                write!(out, " ")?;
            }
            let p = &mesh.vertices[v];
            write!(out, "{},{}", p[0], p[1])?;
        }
        writeln!(out, r#""/>"#)?;
    }
    writeln!(out, "</svg>")?;
    out.flush()
}
