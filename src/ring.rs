use crate::{
    adjacency::VertexFaces,
    element::{Winding, VH},
    error::Error,
    mesh::SurfaceMesh,
};

/// The edge of the triangle `tri` that is not incident on `v`, in the
/// direction given by the winding of the triangle.
///
/// Returns `None` if `v` is not a vertex of `tri`.
pub fn opposite_edge(tri: [VH; 3], v: VH) -> Option<[VH; 2]> {
    tri.iter()
        .position(|&t| t == v)
        .map(|p| [tri[(p + 1) % 3], tri[(p + 2) % 3]])
}

/// Reusable buffers for walking the one-rings of vertices.
///
/// The opposite edges of the faces around a vertex form a single directed
/// cycle when the vertex is a manifold interior vertex, and the mesh is
/// consistently wound. Walking that cycle produces the neighbors of the
/// vertex, ordered the same way as the faces.
/// ```text
///        r2--------r1
///       /  \      /  \
///      /    \    /    \
///    r3------ v ------r0
///      \    /    \    /
///       \  /      \  /
///        r4--------r5
/// ```
#[derive(Default)]
pub struct RingWalker {
    edges: Vec<[VH; 2]>,
    used: Vec<bool>,
}

impl RingWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The opposite edges collected by the last call to
    /// [`collect_opposite_edges`](Self::collect_opposite_edges).
    pub fn edges(&self) -> &[[VH; 2]] {
        &self.edges
    }

    /// Collect the opposite edges of all faces incident on `v`, one per face,
    /// in the order of the face indices.
    pub fn collect_opposite_edges(
        &mut self,
        mesh: &SurfaceMesh,
        index: &VertexFaces,
        v: VH,
        winding: Winding,
    ) {
        self.edges.clear();
        self.edges
            .extend(index.incident_faces(v).iter().map(|&f| {
                match opposite_edge(mesh.oriented_face(f, winding), v) {
                    Some(edge) => edge,
                    None => panic!("{f} is listed as incident on {v}, but does not contain it"),
                }
            }));
    }

    /// Compute the one-ring of `v` and write it to `ring`.
    ///
    /// The ring has as many vertices as there are faces incident on `v`, and
    /// every consecutive pair of the ring forms a face with `v`, including the
    /// pair made of the last and the first vertex.
    pub fn walk(
        &mut self,
        mesh: &SurfaceMesh,
        index: &VertexFaces,
        v: VH,
        winding: Winding,
        ring: &mut Vec<VH>,
    ) -> Result<(), Error> {
        self.collect_opposite_edges(mesh, index, v, winding);
        self.walk_edges(v, ring)
    }

    /// Check that no two collected opposite edges of `v` start at the same
    /// vertex. In a closed fan every neighbor starts exactly one edge, so a
    /// repeated start means a face is duplicated, or an edge around `v` is
    /// shared by more than two faces.
    pub fn check_distinct_starts(&self, v: VH) -> Result<(), Error> {
        // The fans are small, so the quadratic scan is cheaper than hashing.
        for (i, e) in self.edges.iter().enumerate() {
            if self.edges[..i].iter().any(|prev| prev[0] == e[0]) {
                return Err(Error::DuplicateFace(v));
            }
        }
        Ok(())
    }

    /// Stitch the collected opposite edges of `v` into its one-ring. The walk
    /// always starts from the first collected edge. On failure `ring` is left
    /// empty.
    pub fn walk_edges(&mut self, v: VH, ring: &mut Vec<VH>) -> Result<(), Error> {
        ring.clear();
        let result = self.stitch(v, ring);
        if result.is_err() {
            ring.clear();
        }
        result
    }

    fn stitch(&mut self, v: VH, ring: &mut Vec<VH>) -> Result<(), Error> {
        let k = self.edges.len();
        if k == 0 {
            return Err(Error::UnreferencedVertex(v));
        }
        if k < 2 {
            return Err(Error::NonManifoldVertex(v));
        }
        // Checked upfront, so duplicates are reported no matter which edge
        // the walk starts from.
        self.check_distinct_starts(v)?;
        let edges = &self.edges;
        self.used.clear();
        self.used.resize(k, false);
        self.used[0] = true;
        ring.reserve(k);
        ring.extend_from_slice(&edges[0]);
        for _ in 0..(k - 2) {
            let last = ring[ring.len() - 1];
            // Starts are distinct, so at most one edge continues the chain.
            let i = edges
                .iter()
                .zip(&self.used)
                .position(|(e, used)| !used && e[0] == last)
                .ok_or(Error::NonManifoldVertex(v))?;
            self.used[i] = true;
            let next = edges[i][1];
            if next == ring[0] {
                // The fan closed before using all the faces.
                return Err(Error::NonManifoldVertex(v));
            }
            ring.push(next);
        }
        // The one remaining edge must close the cycle.
        let closing = self
            .used
            .iter()
            .position(|u| !u)
            .map(|i| edges[i])
            .ok_or(Error::NonManifoldVertex(v))?;
        if closing != [ring[k - 1], ring[0]] {
            return Err(Error::NonManifoldVertex(v));
        }
        Ok(())
    }
}
