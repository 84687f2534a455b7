use glam::Vec3;

use crate::{
    element::{Handle, Winding, FH, VH},
    error::Error,
};

/// Triangulated surface, stored as dense arrays of vertex positions and
/// triangles.
///
/// The faces are validated when the mesh is created and never change
/// afterwards. The positions only change through
/// [`apply_brainvoyager_axes`](SurfaceMesh::apply_brainvoyager_axes).
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    points: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
}

impl SurfaceMesh {
    /// Create a mesh from vertex positions and triangles.
    ///
    /// Every index in `triangles` must refer to one of the `points`, otherwise
    /// [`Error::IndexOutOfRange`] is returned for the first offending face.
    pub fn new(points: Vec<Vec3>, triangles: Vec<[u32; 3]>) -> Result<Self, Error> {
        let num_vertices = points.len();
        for (fi, tri) in triangles.iter().enumerate() {
            if let Some(&index) = tri.iter().find(|&&i| i as usize >= num_vertices) {
                return Err(Error::IndexOutOfRange {
                    face: (fi as u32).into(),
                    index,
                    num_vertices,
                });
            }
        }
        Ok(SurfaceMesh { points, triangles })
    }

    /// Create a mesh from flat coordinate and index buffers, as they are found
    /// in most surface file formats.
    pub fn from_flat(coords: &[f32], indices: &[u32]) -> Result<Self, Error> {
        if coords.len() % 3 != 0 {
            return Err(Error::IncorrectNumberOfCoordinates(coords.len()));
        }
        if indices.len() % 3 != 0 {
            return Err(Error::IncorrectIndexCount(indices.len()));
        }
        Self::new(
            coords
                .chunks_exact(3)
                .map(|c| glam::vec3(c[0], c[1], c[2]))
                .collect(),
            indices
                .chunks_exact(3)
                .map(|t| [t[0], t[1], t[2]])
                .collect(),
        )
    }

    pub fn num_vertices(&self) -> usize {
        self.points.len()
    }

    pub fn num_faces(&self) -> usize {
        self.triangles.len()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VH> + use<> {
        (0..self.points.len() as u32).map(|i| i.into())
    }

    pub fn faces(&self) -> impl Iterator<Item = FH> + use<> {
        (0..self.triangles.len() as u32).map(|i| i.into())
    }

    pub fn points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    pub fn point(&self, v: VH) -> Vec3 {
        self.points[v.index() as usize]
    }

    /// The vertices of the face, in the order they were loaded.
    pub fn face_vertices(&self, f: FH) -> [VH; 3] {
        self.triangles[f.index() as usize].map(VH::from)
    }

    /// The vertices of the face, read with the given winding.
    pub fn oriented_face(&self, f: FH, winding: Winding) -> [VH; 3] {
        winding.orient(self.face_vertices(f))
    }

    /// Convert the positions to the axis convention of BrainVoyager.
    ///
    /// The axes are permuted as `(x, y, z) -> (y, z, x)` and the new y axis is
    /// negated, i.e. every point becomes `(y, -z, x)`. This must be applied
    /// exactly once per mesh.
    pub fn apply_brainvoyager_axes(&mut self) {
        for p in self.points.iter_mut() {
            *p = glam::vec3(p.y, -p.z, p.x);
        }
    }

    /// The average position of all vertices.
    pub fn calc_center(&self) -> Vec3 {
        if self.points.is_empty() {
            return Vec3::ZERO;
        }
        self.points.iter().fold(Vec3::ZERO, |total, p| total + *p) / self.points.len() as f32
    }
}
