use std::f32::consts::TAU;

use glam::{vec3, Vec3};
use hashbrown::HashMap;

use crate::{error::Error, mesh::SurfaceMesh};

/// Closed primitives. All faces are wound counter-clockwise when seen from
/// outside, so the face normals point outwards.
impl SurfaceMesh {
    /// Create a tetrahedron centered at the origin. The vertices of the mesh
    /// will lie on the sphere with the given radius.
    pub fn tetrahedron(radius: f32) -> Result<Self, Error> {
        let a = radius * (1.0f64 / 3.0) as f32;
        let b = radius * (8.0 / 9.0f64).sqrt() as f32;
        let c = radius * (2.0 / 9.0f64).sqrt() as f32;
        let d = radius * (2.0 / 3.0f64).sqrt() as f32;
        Self::new(
            vec![
                vec3(0.0, 0.0, radius),
                vec3(-c, d, -a),
                vec3(-c, -d, -a),
                vec3(b, 0.0, -a),
            ],
            vec![[0, 1, 2], [0, 2, 3], [0, 3, 1], [3, 2, 1]],
        )
    }

    /// Create an octahedron centered at the origin. The vertices of the mesh
    /// will lie on the sphere with the given radius.
    pub fn octahedron(radius: f32) -> Result<Self, Error> {
        Self::new(
            vec![
                vec3(radius, 0.0, 0.0),
                vec3(0.0, radius, 0.0),
                vec3(-radius, 0.0, 0.0),
                vec3(0.0, -radius, 0.0),
                vec3(0.0, 0.0, radius),
                vec3(0.0, 0.0, -radius),
            ],
            vec![
                [0, 4, 3],
                [1, 4, 0],
                [2, 4, 1],
                [3, 4, 2],
                [3, 5, 0],
                [0, 5, 1],
                [1, 5, 2],
                [2, 5, 3],
            ],
        )
    }

    /// Create an icosahedron centered at the origin. The vertices of the mesh
    /// will lie on the sphere with the given radius.
    pub fn icosahedron(radius: f32) -> Result<Self, Error> {
        const S: f32 = 0.5257311121191336;
        const L: f32 = 0.8506508083520399;
        let points = [
            [0.0, S, -L],
            [S, L, 0.0],
            [-S, L, 0.0],
            [0.0, S, L],
            [0.0, -S, L],
            [-L, 0.0, S],
            [0.0, -S, -L],
            [L, 0.0, -S],
            [L, 0.0, S],
            [-L, 0.0, -S],
            [S, -L, 0.0],
            [-S, -L, 0.0],
        ]
        .iter()
        .map(|p| Vec3::from_array(*p) * radius)
        .collect();
        Self::new(
            points,
            vec![
                [2, 1, 0],
                [1, 2, 3],
                [5, 4, 3],
                [4, 8, 3],
                [7, 6, 0],
                [6, 9, 0],
                [11, 10, 4],
                [10, 11, 6],
                [9, 5, 2],
                [5, 9, 11],
                [8, 7, 1],
                [7, 8, 10],
                [2, 5, 3],
                [8, 1, 3],
                [9, 2, 0],
                [1, 7, 0],
                [11, 9, 6],
                [7, 10, 6],
                [5, 11, 4],
                [10, 8, 4],
            ],
        )
    }

    /// Create a sphere by repeatedly subdividing an icosahedron.
    ///
    /// Every iteration splits each triangle into four, by inserting a vertex at
    /// the middle of each edge and projecting it onto the sphere. The original
    /// 12 vertices keep a valence of 5, all other vertices have a valence of 6.
    pub fn icosphere(radius: f32, iterations: usize) -> Result<Self, Error> {
        let ico = Self::icosahedron(radius)?;
        let mut points = ico.points().to_vec();
        let mut triangles = ico.triangles().to_vec();
        let mut midpoints: HashMap<(u32, u32), u32> = HashMap::new();
        let mut next = Vec::new();
        for _ in 0..iterations {
            midpoints.clear();
            next.clear();
            next.reserve(triangles.len() * 4);
            let mut midpoint = |a: u32, b: u32| -> u32 {
                let key = (a.min(b), a.max(b));
                *midpoints.entry(key).or_insert_with(|| {
                    let p = (points[a as usize] + points[b as usize]).normalize() * radius;
                    points.push(p);
                    (points.len() - 1) as u32
                })
            };
            for &[a, b, c] in &triangles {
                let ab = midpoint(a, b);
                let bc = midpoint(b, c);
                let ca = midpoint(c, a);
                next.extend_from_slice(&[[a, ab, ca], [ab, b, bc], [ca, bc, c], [ab, bc, ca]]);
            }
            std::mem::swap(&mut triangles, &mut next);
        }
        Self::new(points, triangles)
    }

    /// Create a torus around the z axis.
    ///
    /// The torus is a grid of `nmajor` by `nminor` quads, each split into two
    /// triangles, so every vertex has a valence of 6. Fewer than 3 segments in
    /// either direction, or more triangles than can be indexed with `u32`,
    /// produce [`Error::InvalidSegmentCount`].
    pub fn torus(
        major_radius: f32,
        minor_radius: f32,
        nmajor: u32,
        nminor: u32,
    ) -> Result<Self, Error> {
        if nmajor < 3
            || nminor < 3
            || nmajor
                .checked_mul(nminor)
                .and_then(|n| n.checked_mul(2))
                .is_none()
        {
            return Err(Error::InvalidSegmentCount(nmajor, nminor));
        }
        let mut points = Vec::with_capacity((nmajor * nminor) as usize);
        for i in 0..nmajor {
            let theta = TAU * i as f32 / nmajor as f32;
            for j in 0..nminor {
                let phi = TAU * j as f32 / nminor as f32;
                let r = major_radius + minor_radius * phi.cos();
                points.push(vec3(
                    r * theta.cos(),
                    r * theta.sin(),
                    minor_radius * phi.sin(),
                ));
            }
        }
        let vi = |i: u32, j: u32| (i % nmajor) * nminor + (j % nminor);
        let mut triangles = Vec::with_capacity((nmajor * nminor * 2) as usize);
        for i in 0..nmajor {
            for j in 0..nminor {
                let (a, b, c, d) = (vi(i, j), vi(i + 1, j), vi(i + 1, j + 1), vi(i, j + 1));
                triangles.push([a, b, c]);
                triangles.push([a, c, d]);
            }
        }
        Self::new(points, triangles)
    }
}
