use std::fmt::Display;

use glam::Vec3;

use crate::mesh::SurfaceMesh;

/// The value of a single field of an `.srf` header.
#[derive(Debug, Clone, PartialEq)]
pub enum SrfValue {
    Int(u32),
    Float(f32),
    Text(String),
}

impl Display for SrfValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SrfValue::Int(i) => write!(f, "{}", i),
            SrfValue::Float(x) => write!(f, "{}", x),
            SrfValue::Text(s) => write!(f, "'{}'", s),
        }
    }
}

/// Metadata written at the start of a BrainVoyager surface file.
#[derive(Debug, Clone, PartialEq)]
pub struct SrfHeader {
    pub version: u32,
    pub surface_type: u32,
    pub num_vertices: usize,
    pub num_triangles: usize,
    pub center: Vec3,
    /// RGBA used to shade convex regions.
    pub convex_color: [f32; 4],
    /// RGBA used to shade concave regions.
    pub concave_color: [f32; 4],
    pub num_strip_elements: u32,
    pub mtc_name: String,
}

impl SrfHeader {
    pub const VERSION: u32 = 4;
    pub const SURFACE_TYPE: u32 = 2;
    pub const CONVEX_COLOR: [f32; 4] = [0.12, 0.39, 0.65, 1.0];
    pub const CONCAVE_COLOR: [f32; 4] = [0.06, 0.195, 0.325, 1.0];

    /// Header for `mesh`. The mesh center is the mean of the vertex
    /// positions, so the coordinate remap must be applied before this.
    pub fn new(mesh: &SurfaceMesh) -> Self {
        SrfHeader {
            version: Self::VERSION,
            surface_type: Self::SURFACE_TYPE,
            num_vertices: mesh.num_vertices(),
            num_triangles: mesh.num_faces(),
            center: mesh.calc_center(),
            convex_color: Self::CONVEX_COLOR,
            concave_color: Self::CONCAVE_COLOR,
            num_strip_elements: 0,
            mtc_name: String::new(),
        }
    }

    /// The labelled fields of the header, in the order they are written.
    pub fn fields(&self) -> Vec<(&'static str, SrfValue)> {
        use SrfValue::*;
        let [cr, cg, cb, ca] = self.convex_color;
        let [kr, kg, kb, ka] = self.concave_color;
        vec![
            ("File version", Int(self.version)),
            ("Surface type", Int(self.surface_type)),
            ("Nr vertices", Int(self.num_vertices as u32)),
            ("Nr triangles", Int(self.num_triangles as u32)),
            ("Mesh center X", Float(self.center.x)),
            ("Mesh center Y", Float(self.center.y)),
            ("Mesh center Z", Float(self.center.z)),
            ("Vertex convex curvature R", Float(cr)),
            ("Vertex convex curvature G", Float(cg)),
            ("Vertex convex curvature B", Float(cb)),
            ("Vertex convex curvature A", Float(ca)),
            ("Vertex concave curvature R", Float(kr)),
            ("Vertex concave curvature G", Float(kg)),
            ("Vertex concave curvature B", Float(kb)),
            ("Vertex concave curvature A", Float(ka)),
            ("Nr triangle strip elements", Int(self.num_strip_elements)),
            ("MTC name", Text(self.mtc_name.clone())),
        ]
    }
}

/// The per-vertex color indices of a surface with no overlay, i.e. all ones.
pub fn default_vertex_colors(n: usize) -> Vec<u32> {
    vec![1; n]
}
