use serde::{Deserialize, Serialize};

pub use chair_types::{Axis, Rgb};

/// Opaque handle to a solid in the geometry kernel.
/// Valid only for the kernel session that created it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KernelSolidHandle(pub(crate) u64);

impl KernelSolidHandle {
    pub(crate) fn id(&self) -> u64 {
        self.0
    }
}

/// Errors from kernel operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum KernelError {
    #[error("degenerate {primitive}: {reason}")]
    DegenerateGeometry {
        primitive: &'static str,
        reason: String,
    },

    #[error("union of zero solids")]
    EmptyUnion,

    #[error("solid not found: {id}")]
    SolidNotFound { id: u64 },

    #[error("tessellation failed: {reason}")]
    TessellationFailed { reason: String },
}

/// Axis-aligned box centered at `center` with edge lengths `size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CuboidSpec {
    pub size: [f64; 3],
    pub center: [f64; 3],
}

/// Axis-aligned box whose edges are rounded with `round_radius`.
/// The overall extent is still `size`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedCuboidSpec {
    pub size: [f64; 3],
    pub center: [f64; 3],
    pub round_radius: f64,
    pub segments: u32,
}

/// Cylinder along Z, centered at `center` (spans `center.z ± height/2`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderSpec {
    pub height: f64,
    pub radius: f64,
    pub center: [f64; 3],
    pub segments: u32,
}

/// Cylinder along Z with both rims rounded by `round_radius`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedCylinderSpec {
    pub height: f64,
    pub radius: f64,
    pub round_radius: f64,
    pub center: [f64; 3],
    pub segments: u32,
}

/// Torus around the Z axis at the origin, lying in the XY plane.
///
/// `outer_radius` is the distance from the axis to the tube center,
/// `inner_radius` the tube radius. `outer_rotation` (radians) sweeps the
/// ring from +X towards +Y; less than a full turn leaves a capped bend.
/// `outer_segments` is the count for a full turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorusSpec {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub inner_segments: u32,
    pub outer_segments: u32,
    pub outer_rotation: f64,
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

impl BoundingBox {
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: [f64; 3], size: [f64; 3]) -> Self {
        let mut min = [0.0; 3];
        let mut max = [0.0; 3];
        for i in 0..3 {
            min[i] = center[i] - size[i] / 2.0;
            max[i] = center[i] + size[i] / 2.0;
        }
        Self { min, max }
    }

    /// Smallest box containing all points. None for an empty iterator.
    pub fn from_points<I: IntoIterator<Item = [f64; 3]>>(points: I) -> Option<Self> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut bbox = Self::new(first, first);
        for p in iter {
            bbox.include(p);
        }
        Some(bbox)
    }

    pub fn include(&mut self, p: [f64; 3]) {
        for i in 0..3 {
            self.min[i] = self.min[i].min(p[i]);
            self.max[i] = self.max[i].max(p[i]);
        }
    }

    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        let mut out = *self;
        out.include(other.min);
        out.include(other.max);
        out
    }

    pub fn center(&self) -> [f64; 3] {
        [
            (self.min[0] + self.max[0]) / 2.0,
            (self.min[1] + self.max[1]) / 2.0,
            (self.min[2] + self.max[2]) / 2.0,
        ]
    }

    pub fn size(&self) -> [f64; 3] {
        [
            self.max[0] - self.min[0],
            self.max[1] - self.min[1],
            self.max[2] - self.min[2],
        ]
    }

    pub fn corners(&self) -> [[f64; 3]; 8] {
        let (a, b) = (self.min, self.max);
        [
            [a[0], a[1], a[2]],
            [b[0], a[1], a[2]],
            [b[0], b[1], a[2]],
            [a[0], b[1], a[2]],
            [a[0], a[1], b[2]],
            [b[0], a[1], b[2]],
            [b[0], b[1], b[2]],
            [a[0], b[1], b[2]],
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.min.iter().chain(self.max.iter()).all(|v| v.is_finite())
    }

    /// True when the box has no extent along some axis.
    pub fn is_degenerate(&self) -> bool {
        self.size().iter().any(|&s| s <= 0.0)
    }
}

/// Tessellated triangle mesh handed to the host renderer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderMesh {
    /// Flat array of vertex positions [x0, y0, z0, x1, y1, z1, ...] in millimetres.
    pub vertices: Vec<f32>,
    /// Flat array of vertex normals, parallel to `vertices`.
    pub normals: Vec<f32>,
    /// Triangle indices into the vertex array.
    pub indices: Vec<u32>,
    /// Mapping from triangle ranges to the color they were given.
    pub color_ranges: Vec<ColorRange>,
}

impl RenderMesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Maps a contiguous range of triangle indices to a color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorRange {
    /// None when the solid was never colorized.
    pub color: Option<Rgb>,
    /// Start index in the indices array (inclusive).
    pub start_index: u32,
    /// End index in the indices array (exclusive).
    pub end_index: u32,
}
