//! Property-based tests for the one-rings and vertex normals.
//!
//! Run with: cargo test --test ring_properties

use bvsurf::{BuildOptions, Handle, SurfaceMesh, SurfaceTopology, TopologyBuilder, VH, Winding};
use glam::{Vec3, vec3};
use hashbrown::HashSet;
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_position() -> impl Strategy<Value = Vec3> {
    prop::array::uniform3(-100.0..100.0f32).prop_map(Vec3::from_array)
}

/// Closed meshes of genus 0 and 1, with random size.
fn arb_closed_mesh() -> impl Strategy<Value = SurfaceMesh> {
    prop_oneof![
        (0.1..10.0f32, 0..3usize).prop_map(|(radius, iterations)| {
            SurfaceMesh::icosphere(radius, iterations).expect("Cannot create icosphere")
        }),
        (4..16u32, 4..12u32).prop_map(|(nmajor, nminor)| {
            SurfaceMesh::torus(3.0, 1.0, nmajor, nminor).expect("Cannot create torus")
        }),
    ]
}

/// A closed mesh with its triangles shuffled.
fn arb_shuffled_mesh() -> impl Strategy<Value = (SurfaceMesh, SurfaceMesh)> {
    arb_closed_mesh().prop_flat_map(|mesh| {
        let shuffled = Just(mesh.triangles().to_vec()).prop_shuffle();
        (Just(mesh), shuffled).prop_map(|(mesh, triangles)| {
            let shuffled = SurfaceMesh::new(mesh.points().to_vec(), triangles)
                .expect("Cannot create shuffled mesh");
            (mesh, shuffled)
        })
    })
}

/// Random triangle soup. Most of these are not valid closed surfaces.
fn arb_soup() -> impl Strategy<Value = (Vec<Vec3>, Vec<[u32; 3]>)> {
    (3..30usize).prop_flat_map(|nverts| {
        let n = nverts as u32;
        (
            prop::collection::vec(arb_position(), nverts),
            prop::collection::vec(prop::array::uniform3(0..n), 1..60),
        )
    })
}

// =============================================================================
// Helpers
// =============================================================================

fn build(mesh: &SurfaceMesh, winding: Winding) -> SurfaceTopology {
    TopologyBuilder::new(BuildOptions::default().with_winding(winding))
        .build(mesh)
        .expect("Cannot build topology")
}

/// All rotations of all triangles, so any rotation of a face can be looked up.
fn face_set(mesh: &SurfaceMesh) -> HashSet<[u32; 3]> {
    mesh.triangles()
        .iter()
        .flat_map(|&[a, b, c]| [[a, b, c], [b, c, a], [c, a, b]])
        .collect()
}

fn is_rotation(a: &[VH], b: &[VH]) -> bool {
    a.len() == b.len()
        && (a.is_empty() || (0..a.len()).any(|s| (0..a.len()).all(|i| a[i] == b[(i + s) % b.len()])))
}

// =============================================================================
// Property Tests: One-rings
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every consecutive pair of a ring, including the wrap around, forms a
    /// face with the vertex.
    #[test]
    fn ring_closes(mesh in arb_closed_mesh()) {
        let topol = build(&mesh, Winding::AsLoaded);
        let faces = face_set(&mesh);
        for v in mesh.vertices() {
            let ring = topol.neighbors.ring(v);
            prop_assert!(ring.len() >= 3);
            for i in 0..ring.len() {
                let tri = [v.index(), ring[i].index(), ring[(i + 1) % ring.len()].index()];
                prop_assert!(faces.contains(&tri), "{:?} is not a face", tri);
            }
        }
    }

    /// The record of a vertex is its valence followed by its ring.
    #[test]
    fn record_matches_ring(mesh in arb_closed_mesh()) {
        let topol = build(&mesh, Winding::AsLoaded);
        for (v, record) in mesh.vertices().zip(topol.neighbors.records()) {
            let ring = topol.neighbors.ring(v);
            prop_assert_eq!(record[0] as usize, ring.len());
            prop_assert!(record[1..].iter().zip(ring).all(|(r, n)| *r == n.index()));
        }
    }

    /// Shuffling the faces may rotate the rings, but never changes them.
    #[test]
    fn face_order_only_rotates_rings((mesh, shuffled) in arb_shuffled_mesh()) {
        let expected = build(&mesh, Winding::AsLoaded);
        let actual = build(&shuffled, Winding::AsLoaded);
        for v in mesh.vertices() {
            prop_assert!(is_rotation(expected.neighbors.ring(v), actual.neighbors.ring(v)));
            prop_assert!(expected.normals[v.index() as usize]
                .abs_diff_eq(actual.normals[v.index() as usize], 1e-5));
        }
    }

    /// Flipping the winding reverses every ring and negates every normal.
    #[test]
    fn flipped_winding_reverses_rings(mesh in arb_closed_mesh()) {
        let loaded = build(&mesh, Winding::AsLoaded);
        let flipped = build(&mesh, Winding::Flipped);
        for v in mesh.vertices() {
            let mut reversed = flipped.neighbors.ring(v).to_vec();
            reversed.reverse();
            prop_assert!(is_rotation(loaded.neighbors.ring(v), &reversed));
            let i = v.index() as usize;
            prop_assert!(loaded.normals[i].abs_diff_eq(-flipped.normals[i], 1e-6));
        }
    }

    #[test]
    fn sequential_matches_parallel(mesh in arb_closed_mesh()) {
        let seq = TopologyBuilder::new(BuildOptions::default().with_parallel(false))
            .build(&mesh)
            .expect("Cannot build topology");
        let par = TopologyBuilder::new(BuildOptions::default().with_parallel(true))
            .build(&mesh)
            .expect("Cannot build topology");
        prop_assert_eq!(seq.neighbors, par.neighbors);
        prop_assert_eq!(seq.normals, par.normals);
    }
}

// =============================================================================
// Property Tests: Normals and geometry
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn normals_have_unit_length(mesh in arb_closed_mesh()) {
        let topol = build(&mesh, Winding::AsLoaded);
        prop_assert_eq!(topol.normals.len(), mesh.num_vertices());
        for n in &topol.normals {
            prop_assert!((n.length() - 1.0).abs() <= 1e-6, "|{}| != 1", n);
        }
    }

    /// The normals of a sphere point away from its center.
    #[test]
    fn sphere_normals_point_outwards(radius in 0.1..10.0f32, iterations in 0..3usize) {
        let mesh = SurfaceMesh::icosphere(radius, iterations).expect("Cannot create icosphere");
        let topol = build(&mesh, Winding::AsLoaded);
        for v in mesh.vertices() {
            prop_assert!(topol.normals[v.index() as usize].dot(mesh.point(v)) > 0.0);
        }
    }
}

proptest! {
    #[test]
    fn brainvoyager_axes(points in prop::collection::vec(arb_position(), 0..50)) {
        let mut mesh = SurfaceMesh::new(points.clone(), Vec::new()).expect("Cannot create mesh");
        mesh.apply_brainvoyager_axes();
        for (p, q) in points.iter().zip(mesh.points()) {
            prop_assert_eq!(*q, vec3(p.y, -p.z, p.x));
        }
    }

    /// Building never panics on a valid triangle soup. It either fails with an
    /// error, or produces rings that close.
    #[test]
    fn build_never_panics((points, triangles) in arb_soup()) {
        let mesh = SurfaceMesh::new(points, triangles).expect("Indices are in range");
        if let Ok(topol) = mesh.build_topology() {
            let faces = face_set(&mesh);
            for v in mesh.vertices() {
                let ring = topol.neighbors.ring(v);
                for i in 0..ring.len() {
                    let tri = [v.index(), ring[i].index(), ring[(i + 1) % ring.len()].index()];
                    prop_assert!(faces.contains(&tri));
                }
            }
        }
    }
}
