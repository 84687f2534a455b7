use crate::element::{FH, VH};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    // Input validation.
    #[error("{face} references vertex {index}, but the mesh has {num_vertices} vertices")]
    IndexOutOfRange {
        face: FH,
        index: u32,
        num_vertices: usize,
    },
    // Geometry.
    #[error("{0} has zero area")]
    DegenerateFace(FH),
    #[error("{0} is not referenced by any face")]
    UnreferencedVertex(VH),
    /// The normals of the faces around the vertex cancel out.
    #[error("the incident face normals of {0} sum to zero")]
    DegenerateVertexNormal(VH),
    // Topology.
    #[error("the faces around {0} do not form a single closed fan")]
    NonManifoldVertex(VH),
    #[error("{0} has duplicate faces, or an edge shared by more than two faces")]
    DuplicateFace(VH),
    #[error("the directed edge ({0}, {1}) breaks the winding of the mesh")]
    InconsistentWinding(VH, VH),
    // Primitives.
    #[error("a torus with {0} by {1} segments cannot be built")]
    InvalidSegmentCount(u32, u32),
    // Obj.
    #[error("failed to load obj file: {0}")]
    ObjLoadFailed(String),
    #[error("{0} coordinates do not form whole vertices")]
    IncorrectNumberOfCoordinates(usize),
    #[error("{0} indices do not form whole triangles")]
    IncorrectIndexCount(usize),
}
