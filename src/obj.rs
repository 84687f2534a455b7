use std::{io::BufRead, path::Path};

use crate::{error::Error, mesh::SurfaceMesh};

fn load_options() -> tobj::LoadOptions {
    tobj::LoadOptions {
        single_index: true,
        triangulate: true,
        ignore_points: true,
        ignore_lines: true,
        ..Default::default()
    }
}

impl SurfaceMesh {
    /// Load a surface from a Wavefront OBJ file.
    ///
    /// Polygonal faces are triangulated, and all the models in the file are
    /// merged into one mesh.
    pub fn load_obj(path: &Path) -> Result<Self, Error> {
        let (models, _) = tobj::load_obj(path, &load_options())
            .map_err(|e| Error::ObjLoadFailed(format!("{}", e)))?;
        Self::from_models(models)
    }

    /// Same as [`load_obj`](SurfaceMesh::load_obj), except the OBJ data is
    /// read from `reader`. Material libraries referenced by the data are
    /// ignored.
    pub fn load_obj_buf(reader: &mut impl BufRead) -> Result<Self, Error> {
        let (models, _) = tobj::load_obj_buf(reader, &load_options(), |_| {
            Err(tobj::LoadError::OpenFileFailed)
        })
        .map_err(|e| Error::ObjLoadFailed(format!("{}", e)))?;
        Self::from_models(models)
    }

    fn from_models(models: Vec<tobj::Model>) -> Result<Self, Error> {
        let (nverts, nfaces) = models
            .iter()
            .fold((0usize, 0usize), |(nverts, nfaces), model| {
                let msh = &model.mesh;
                (
                    nverts + (msh.positions.len() / 3),
                    nfaces + (msh.indices.len() / 3),
                )
            });
        let mut points = Vec::with_capacity(nverts);
        let mut triangles = Vec::with_capacity(nfaces);
        let mut voffset = 0u32;
        for model in models {
            let mesh = model.mesh;
            if mesh.positions.len() % 3 != 0 {
                return Err(Error::IncorrectNumberOfCoordinates(mesh.positions.len()));
            }
            if mesh.indices.len() % 3 != 0 {
                return Err(Error::IncorrectIndexCount(mesh.indices.len()));
            }
            points.extend(mesh.positions.chunks_exact(3).map(|triplet| {
                glam::vec3(triplet[0] as f32, triplet[1] as f32, triplet[2] as f32)
            }));
            triangles.extend(
                mesh.indices
                    .chunks_exact(3)
                    .map(|t| [t[0] + voffset, t[1] + voffset, t[2] + voffset]),
            );
            voffset += (mesh.positions.len() / 3) as u32;
        }
        Self::new(points, triangles)
    }
}
