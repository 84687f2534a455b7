use std::time::Instant;

use glam::Vec3;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    adjacency::VertexFaces,
    check::check_winding,
    element::{Handle, Winding, VH},
    error::Error,
    mesh::SurfaceMesh,
    ring::RingWalker,
};

/// Options for building the topology of a surface.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// The winding with which the faces are read.
    pub winding: Winding,
    /// Verify that the mesh is closed and consistently wound before building.
    pub check_winding: bool,
    /// Build the vertex normals and one-rings on the rayon thread pool. This
    /// has no effect unless the `parallel` feature is enabled.
    pub parallel: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            winding: Winding::AsLoaded,
            check_winding: false,
            parallel: true,
        }
    }
}

impl BuildOptions {
    pub fn with_winding(mut self, winding: Winding) -> Self {
        self.winding = winding;
        self
    }

    pub fn with_winding_check(mut self, check: bool) -> Self {
        self.check_winding = check;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// The one-rings of all vertices of a mesh.
///
/// Like [`VertexFaces`], the rings are stored back to back in one arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeighborTable {
    offsets: Vec<u32>,
    neighbors: Vec<VH>,
}

impl NeighborTable {
    fn with_capacity(nverts: usize, nneighbors: usize) -> Self {
        let mut offsets = Vec::with_capacity(nverts + 1);
        offsets.push(0);
        NeighborTable {
            offsets,
            neighbors: Vec::with_capacity(nneighbors),
        }
    }

    fn push_ring(&mut self, ring: &[VH]) {
        self.neighbors.extend_from_slice(ring);
        self.offsets.push(self.neighbors.len() as u32);
    }

    pub fn num_vertices(&self) -> usize {
        self.offsets.len() - 1
    }

    /// The ordered neighbors of `v`.
    pub fn ring(&self, v: VH) -> &[VH] {
        let vi = v.index() as usize;
        &self.neighbors[self.offsets[vi] as usize..self.offsets[vi + 1] as usize]
    }

    /// The number of neighbors of `v`.
    pub fn valence(&self, v: VH) -> usize {
        self.ring(v).len()
    }

    /// The neighbor record of `v` as it is written to a surface file: the
    /// number of neighbors followed by the neighbors.
    pub fn record(&self, v: VH) -> Vec<u32> {
        let ring = self.ring(v);
        let mut record = Vec::with_capacity(ring.len() + 1);
        record.push(ring.len() as u32);
        record.extend(ring.iter().map(|n| n.index()));
        record
    }

    /// The neighbor records of all vertices, in the order of the vertices.
    pub fn records(&self) -> impl Iterator<Item = Vec<u32>> + '_ {
        (0..self.num_vertices() as u32).map(move |vi| self.record(vi.into()))
    }
}

/// Everything a surface file writer needs to know about the topology and
/// shading of a mesh.
#[derive(Debug, Clone)]
pub struct SurfaceTopology {
    pub normals: Vec<Vec3>,
    pub neighbors: NeighborTable,
}

/// Builds the vertex normals and one-rings of a mesh.
///
/// The whole build fails if any vertex or face is defective; the error names
/// the defective element with the lowest index.
#[derive(Debug, Clone, Default)]
pub struct TopologyBuilder {
    options: BuildOptions,
}

impl TopologyBuilder {
    pub fn new(options: BuildOptions) -> Self {
        TopologyBuilder { options }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    pub fn build(&self, mesh: &SurfaceMesh) -> Result<SurfaceTopology, Error> {
        let before = Instant::now();
        let winding = self.options.winding;
        let index = VertexFaces::new(mesh);
        debug!(
            vertices = mesh.num_vertices(),
            faces = mesh.num_faces(),
            "Indexed incident faces"
        );
        if self.options.check_winding {
            check_winding(mesh, winding)?;
            debug!("Winding is consistent");
        }
        let fnormals = mesh.calc_face_normals(winding)?;
        let normals = self.vertex_normals(mesh, &index, &fnormals)?;
        debug!("Computed vertex normals");
        // A face duplicated anywhere is reported before any open or bowtie fan,
        // whichever vertex it happens to be seen from.
        self.check_fans(mesh, &index)?;
        debug!("No duplicate faces");
        let neighbors = self.neighbor_table(mesh, &index)?;
        info!(
            vertices = mesh.num_vertices(),
            faces = mesh.num_faces(),
            elapsed_ms = before.elapsed().as_millis() as u64,
            "Built surface topology"
        );
        Ok(SurfaceTopology { normals, neighbors })
    }

    fn vertex_normals(
        &self,
        mesh: &SurfaceMesh,
        index: &VertexFaces,
        fnormals: &[Vec3],
    ) -> Result<Vec<Vec3>, Error> {
        #[cfg(feature = "parallel")]
        if self.options.parallel {
            let normals: Vec<Result<Vec3, Error>> = (0..mesh.num_vertices() as u32)
                .into_par_iter()
                .map(|vi| mesh.calc_vertex_normal(vi.into(), index, fnormals))
                .collect();
            // Sequential collect to report the failure with the lowest index.
            return normals.into_iter().collect();
        }
        mesh.vertices()
            .map(|v| mesh.calc_vertex_normal(v, index, fnormals))
            .collect()
    }

    fn check_fans(&self, mesh: &SurfaceMesh, index: &VertexFaces) -> Result<(), Error> {
        let winding = self.options.winding;
        #[cfg(feature = "parallel")]
        if self.options.parallel {
            let checks: Vec<Result<(), Error>> = (0..mesh.num_vertices() as u32)
                .into_par_iter()
                .map_init(RingWalker::new, |walker, vi| {
                    walker.collect_opposite_edges(mesh, index, vi.into(), winding);
                    walker.check_distinct_starts(vi.into())
                })
                .collect();
            return checks.into_iter().collect();
        }
        let mut walker = RingWalker::new();
        for v in mesh.vertices() {
            walker.collect_opposite_edges(mesh, index, v, winding);
            walker.check_distinct_starts(v)?;
        }
        Ok(())
    }

    fn neighbor_table(
        &self,
        mesh: &SurfaceMesh,
        index: &VertexFaces,
    ) -> Result<NeighborTable, Error> {
        let winding = self.options.winding;
        // Every face contributes one neighbor to each of its three vertices.
        let mut table = NeighborTable::with_capacity(mesh.num_vertices(), mesh.num_faces() * 3);
        #[cfg(feature = "parallel")]
        if self.options.parallel {
            let rings: Vec<Result<Vec<VH>, Error>> = (0..mesh.num_vertices() as u32)
                .into_par_iter()
                .map_init(RingWalker::new, |walker, vi| -> Result<Vec<VH>, Error> {
                    let mut ring = Vec::new();
                    walker.walk(mesh, index, vi.into(), winding, &mut ring)?;
                    Ok(ring)
                })
                .collect();
            for ring in rings {
                table.push_ring(&ring?);
            }
            return Ok(table);
        }
        let mut walker = RingWalker::new();
        let mut ring = Vec::new();
        for v in mesh.vertices() {
            walker.walk(mesh, index, v, winding, &mut ring)?;
            table.push_ring(&ring);
        }
        Ok(table)
    }
}

impl SurfaceMesh {
    /// Build the vertex normals and one-rings of this mesh with the default
    /// [`BuildOptions`].
    pub fn build_topology(&self) -> Result<SurfaceTopology, Error> {
        TopologyBuilder::default().build(self)
    }
}
