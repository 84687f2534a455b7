/*!
This crate computes the per-vertex data a
[BrainVoyager](https://www.brainvoyager.com/) surface (`.srf`) file needs from
a closed triangle mesh: the unit normal of every vertex, and the ordered ring of
its neighboring vertices.

# Overview

+ A [`SurfaceMesh`] holds the vertex positions and the triangles. It can be
  created from arrays, loaded from a Wavefront OBJ file, or created from one of
  the builtin primitives. [`SurfaceMesh::apply_brainvoyager_axes`] converts the
  positions to BrainVoyager's axes convention.

+ [`TopologyBuilder`] turns the mesh into a [`SurfaceTopology`]. The faces
  incident on each vertex are found using a [`VertexFaces`] index, and the edges
  opposite to the vertex in those faces are stitched into a closed cycle by a
  [`RingWalker`]. When the `parallel` feature is enabled, the vertices are
  processed in parallel using [rayon](https://crates.io/crates/rayon).

+ Meshes with boundaries, bowtie vertices, or edges shared by more than two
  faces are rejected with an [`Error`] that names the offending vertex.

+ [`SrfHeader`] assembles the header fields of the surface file. Encoding the
  binary file is left to the caller.

```
use bvsurf::{BuildOptions, SrfHeader, SurfaceMesh, TopologyBuilder, Winding};

let mut mesh = SurfaceMesh::icosphere(1.0, 2).unwrap();
mesh.apply_brainvoyager_axes();
let topol = TopologyBuilder::new(BuildOptions::default().with_winding(Winding::AsLoaded))
    .build(&mesh)
    .unwrap();
let header = SrfHeader::new(&mesh);
assert_eq!(header.num_vertices, topol.normals.len());
for record in topol.neighbors.records() {
    assert_eq!(record[0] as usize + 1, record.len());
}
```
*/

mod adjacency;
mod builder;
mod check;
mod element;
mod error;
mod macros;
mod mesh;
mod normals;
mod obj;
mod primitive;
mod ring;
mod srf;

pub use adjacency::VertexFaces;
pub use builder::{BuildOptions, NeighborTable, SurfaceTopology, TopologyBuilder};
pub use check::check_winding;
pub use element::{FH, Handle, VH, Winding};
pub use error::Error;
pub use mesh::SurfaceMesh;
pub use ring::{RingWalker, opposite_edge};
pub use srf::{SrfHeader, SrfValue, default_vertex_colors};
