use crate::{
    element::{Handle, FH, VH},
    mesh::SurfaceMesh,
};

/// Index of the faces incident on every vertex of a mesh.
///
/// The face handles of all vertices are stored back to back in one arena, and
/// `offsets[v]..offsets[v + 1]` is the range belonging to vertex `v`. Within
/// that range the faces are sorted by index. Building the index is linear in
/// the size of the mesh, after which looking up the faces of a vertex is
/// constant time.
pub struct VertexFaces {
    offsets: Vec<u32>,
    faces: Vec<FH>,
}

impl VertexFaces {
    pub fn new(mesh: &SurfaceMesh) -> Self {
        let nverts = mesh.num_vertices();
        let mut offsets = vec![0u32; nverts + 1];
        // Count, skipping repeated corners of degenerate faces.
        for tri in mesh.triangles() {
            for (i, &v) in tri.iter().enumerate() {
                if !tri[..i].contains(&v) {
                    offsets[v as usize + 1] += 1;
                }
            }
        }
        for i in 0..nverts {
            offsets[i + 1] += offsets[i];
        }
        let mut cursor: Vec<u32> = offsets[..nverts].to_vec();
        let mut faces = vec![FH::from(0u32); offsets[nverts] as usize];
        for (fi, tri) in mesh.triangles().iter().enumerate() {
            for (i, &v) in tri.iter().enumerate() {
                if tri[..i].contains(&v) {
                    continue;
                }
                let slot = &mut cursor[v as usize];
                faces[*slot as usize] = (fi as u32).into();
                *slot += 1;
            }
        }
        VertexFaces { offsets, faces }
    }

    pub fn num_vertices(&self) -> usize {
        self.offsets.len() - 1
    }

    /// The faces incident on `v`, in ascending order.
    pub fn incident_faces(&self, v: VH) -> &[FH] {
        let vi = v.index() as usize;
        &self.faces[self.offsets[vi] as usize..self.offsets[vi + 1] as usize]
    }

    /// The number of faces incident on `v`.
    pub fn face_count(&self, v: VH) -> usize {
        let vi = v.index() as usize;
        (self.offsets[vi + 1] - self.offsets[vi]) as usize
    }
}
