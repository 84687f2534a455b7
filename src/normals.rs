use glam::Vec3;

use crate::{
    adjacency::VertexFaces,
    element::{Handle, Winding, FH, VH},
    error::Error,
    mesh::SurfaceMesh,
};

impl SurfaceMesh {
    /// Compute the area weighted normal of a face, i.e. the cross product of
    /// the edge vectors `(p1 - p0)` and `(p2 - p0)`. Its length is twice the
    /// area of the triangle.
    pub fn calc_face_normal(&self, f: FH, winding: Winding) -> Vec3 {
        let [v0, v1, v2] = self.oriented_face(f, winding);
        let p0 = self.point(v0);
        (self.point(v1) - p0).cross(self.point(v2) - p0)
    }

    /// Compute the unit normal of a face.
    ///
    /// A face with zero area doesn't have a normal, and produces
    /// [`Error::DegenerateFace`].
    pub fn calc_face_unit_normal(&self, f: FH, winding: Winding) -> Result<Vec3, Error> {
        let n = self.calc_face_normal(f, winding);
        let len = n.length();
        if len == 0.0 {
            return Err(Error::DegenerateFace(f));
        }
        Ok(n / len)
    }

    /// Compute the unit normals of all faces.
    pub fn calc_face_normals(&self, winding: Winding) -> Result<Vec<Vec3>, Error> {
        self.faces()
            .map(|f| self.calc_face_unit_normal(f, winding))
            .collect()
    }

    /// Compute the vertex normal as the average of the unit normals of the
    /// incident faces. The normals of the faces are read from `fnormals`.
    ///
    /// The face normals are summed in the order of the face indices, so the
    /// result does not depend on the order in which vertices are visited.
    pub fn calc_vertex_normal(
        &self,
        v: VH,
        index: &VertexFaces,
        fnormals: &[Vec3],
    ) -> Result<Vec3, Error> {
        let faces = index.incident_faces(v);
        if faces.is_empty() {
            return Err(Error::UnreferencedVertex(v));
        }
        let total = faces
            .iter()
            .fold(Vec3::ZERO, |total, f| total + fnormals[f.index() as usize]);
        let len = total.length();
        if len == 0.0 {
            return Err(Error::DegenerateVertexNormal(v));
        }
        Ok(total / len)
    }

    /// Compute the unit normals of all vertices.
    pub fn calc_vertex_normals(&self, winding: Winding) -> Result<Vec<Vec3>, Error> {
        let index = VertexFaces::new(self);
        let fnormals = self.calc_face_normals(winding)?;
        self.vertices()
            .map(|v| self.calc_vertex_normal(v, &index, &fnormals))
            .collect()
    }
}
