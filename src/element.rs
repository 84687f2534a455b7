use std::fmt::{Debug, Display};

/**
 * All elements of the mesh implement this trait. They are identified by their
 * index.
 */
pub trait Handle {
    /**
     * The index of the element.
     */
    fn index(&self) -> u32;
}

/**
 * Vertex handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VH {
    idx: u32,
}

/**
 * Face handle.
 */
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FH {
    idx: u32,
}

impl Handle for VH {
    fn index(&self) -> u32 {
        self.idx
    }
}

impl From<u32> for VH {
    fn from(idx: u32) -> Self {
        VH { idx }
    }
}

impl From<&u32> for VH {
    fn from(idx: &u32) -> Self {
        VH { idx: *idx }
    }
}

impl From<VH> for u32 {
    fn from(v: VH) -> Self {
        v.idx
    }
}

impl Handle for FH {
    fn index(&self) -> u32 {
        self.idx
    }
}

impl From<u32> for FH {
    fn from(idx: u32) -> Self {
        FH { idx }
    }
}

impl From<&u32> for FH {
    fn from(idx: &u32) -> Self {
        FH { idx: *idx }
    }
}

impl Display for VH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VH({})", self.index())
    }
}

impl Display for FH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FH({})", self.index())
    }
}

impl Debug for VH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "VH({})", self.index())
    }
}

impl Debug for FH {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "FH({})", self.index())
    }
}

/// Orientation in which the faces of a mesh are read.
///
/// BrainVoyager expects the normals to point outwards, which is not always
/// the convention of the software that produced the surface. Reading the mesh
/// with [`Winding::Flipped`] visits every face as `(t0, t2, t1)` instead of
/// `(t0, t1, t2)` without modifying the stored faces.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Winding {
    #[default]
    AsLoaded,
    Flipped,
}

impl Winding {
    pub fn orient(self, tri: [VH; 3]) -> [VH; 3] {
        match self {
            Winding::AsLoaded => tri,
            Winding::Flipped => [tri[0], tri[2], tri[1]],
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Handle, Winding, FH, VH};

    #[test]
    fn t_handle_display() {
        let v: VH = 42.into();
        let f: FH = 7.into();
        assert_eq!(format!("{v}"), "VH(42)");
        assert_eq!(format!("{f:?}"), "FH(7)");
        assert_eq!(u32::from(v), v.index());
    }

    #[test]
    fn t_winding_orient() {
        let tri: [VH; 3] = [3u32.into(), 5u32.into(), 9u32.into()];
        assert_eq!(Winding::AsLoaded.orient(tri), tri);
        let flipped: [VH; 3] = [3u32.into(), 9u32.into(), 5u32.into()];
        assert_eq!(Winding::Flipped.orient(tri), flipped);
        assert_eq!(Winding::default(), Winding::AsLoaded);
    }
}
