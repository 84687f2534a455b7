use hashbrown::HashSet;

use crate::{
    element::{Handle, Winding},
    error::Error,
    mesh::SurfaceMesh,
};

/// Check that the faces of the mesh are consistently wound and close the
/// surface.
///
/// Two faces sharing an edge must traverse it in opposite directions. So every
/// directed edge may belong to at most one face, and its reverse must belong
/// to another face. The first directed edge that violates this, in the order
/// of the faces, is reported as [`Error::InconsistentWinding`].
pub fn check_winding(mesh: &SurfaceMesh, winding: Winding) -> Result<(), Error> {
    let mut directed: HashSet<(u32, u32)> = HashSet::with_capacity(mesh.num_faces() * 3);
    let face_edges = |f| {
        let [a, b, c] = mesh.oriented_face(f, winding);
        [(a, b), (b, c), (c, a)]
    };
    for f in mesh.faces() {
        for (a, b) in face_edges(f) {
            if !directed.insert((a.index(), b.index())) {
                return Err(Error::InconsistentWinding(a, b));
            }
        }
    }
    for f in mesh.faces() {
        for (a, b) in face_edges(f) {
            if !directed.contains(&(b.index(), a.index())) {
                return Err(Error::InconsistentWinding(a, b));
            }
        }
    }
    Ok(())
}

impl SurfaceMesh {
    /// Check the winding of the faces of this mesh. See [`check_winding`].
    pub fn check_winding(&self, winding: Winding) -> Result<(), Error> {
        check_winding(self, winding)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        element::{Winding, VH},
        error::Error,
        mesh::SurfaceMesh,
    };

    #[test]
    fn t_closed_primitives() {
        for mesh in [
            SurfaceMesh::tetrahedron(1.0).expect("Cannot create tetrahedron"),
            SurfaceMesh::octahedron(1.0).expect("Cannot create octahedron"),
            SurfaceMesh::icosahedron(1.0).expect("Cannot create icosahedron"),
            SurfaceMesh::torus(2.0, 0.5, 8, 6).expect("Cannot create torus"),
        ] {
            mesh.check_winding(Winding::AsLoaded)
                .expect("Winding must be consistent");
            mesh.check_winding(Winding::Flipped)
                .expect("Flipping all faces must keep the winding consistent");
        }
    }

    #[test]
    fn t_one_flipped_face() {
        let tet = SurfaceMesh::tetrahedron(1.0).expect("Cannot create tetrahedron");
        let mut triangles = tet.triangles().to_vec();
        triangles[0] = [0, 2, 1];
        let mesh = SurfaceMesh::new(tet.points().to_vec(), triangles).expect("Cannot create mesh");
        match mesh.check_winding(Winding::AsLoaded) {
            Err(Error::InconsistentWinding(a, b)) => {
                assert_eq!((a, b), (VH::from(0u32), VH::from(2u32)));
            }
            other => panic!("Expected inconsistent winding, found {:?}", other),
        }
    }

    #[test]
    fn t_open_surface() {
        let tet = SurfaceMesh::tetrahedron(1.0).expect("Cannot create tetrahedron");
        let mesh = SurfaceMesh::new(tet.points().to_vec(), tet.triangles()[..3].to_vec())
            .expect("Cannot create mesh");
        assert!(matches!(
            mesh.check_winding(Winding::AsLoaded),
            Err(Error::InconsistentWinding(_, _))
        ));
    }
}
