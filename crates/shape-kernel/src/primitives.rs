//! Primitive validation, analytic bounds and csgrs solid construction.
//!
//! Solids are `csgrs` polygon bodies whose per-polygon metadata carries the
//! color. Curved primitives come from csgrs spheres, cylinders and tori;
//! rounded shapes are convex hulls of those, and partial tori are cut from a
//! full ring with a wedge.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use csgrs::CSG;
use nalgebra::Matrix4;
use tracing::debug;

use crate::transform::Transform;
use crate::types::*;

/// Polygon body held by the mesh kernel. Polygon metadata is the color.
pub type Solid = CSG<Rgb>;

// ── Validation ──────────────────────────────────────────────────────────────


fn positive(primitive: &'static str, what: &str, value: f64) -> Result<(), KernelError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(KernelError::DegenerateGeometry {
            primitive,
            reason: format!("{what} must be positive and finite, got {value}"),
        })
    }
}

fn finite_point(primitive: &'static str, p: [f64; 3]) -> Result<(), KernelError> {
    if p.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(KernelError::DegenerateGeometry {
            primitive,
            reason: format!("center must be finite, got {p:?}"),
        })
    }
}

fn enough_segments(primitive: &'static str, segments: u32) -> Result<(), KernelError> {
    if segments >= 3 {
        Ok(())
    } else {
        Err(KernelError::DegenerateGeometry {
            primitive,
            reason: format!("needs at least 3 segments, got {segments}"),
        })
    }
}

pub fn validate_cuboid(spec: &CuboidSpec) -> Result<(), KernelError> {
    for s in spec.size {
        positive("cuboid", "size", s)?;
    }
    finite_point("cuboid", spec.center)
}

pub fn validate_rounded_cuboid(spec: &RoundedCuboidSpec) -> Result<(), KernelError> {
    const NAME: &str = "rounded cuboid";
    for s in spec.size {
        positive(NAME, "size", s)?;
    }
    finite_point(NAME, spec.center)?;
    positive(NAME, "round radius", spec.round_radius)?;
    enough_segments(NAME, spec.segments)?;
    let smallest_half = spec.size.iter().fold(f64::INFINITY, |m, &s| m.min(s / 2.0));
    if spec.round_radius >= smallest_half {
        return Err(KernelError::DegenerateGeometry {
            primitive: NAME,
            reason: format!(
                "round radius {} must be smaller than half the smallest size {}",
                spec.round_radius, smallest_half
            ),
        });
    }
    Ok(())
}

pub fn validate_cylinder(spec: &CylinderSpec) -> Result<(), KernelError> {
    positive("cylinder", "height", spec.height)?;
    positive("cylinder", "radius", spec.radius)?;
    finite_point("cylinder", spec.center)?;
    enough_segments("cylinder", spec.segments)
}

pub fn validate_rounded_cylinder(spec: &RoundedCylinderSpec) -> Result<(), KernelError> {
    const NAME: &str = "rounded cylinder";
    positive(NAME, "height", spec.height)?;
    positive(NAME, "radius", spec.radius)?;
    positive(NAME, "round radius", spec.round_radius)?;
    finite_point(NAME, spec.center)?;
    enough_segments(NAME, spec.segments)?;
    if spec.round_radius >= spec.radius || spec.round_radius >= spec.height / 2.0 {
        return Err(KernelError::DegenerateGeometry {
            primitive: NAME,
            reason: format!(
                "round radius {} must be smaller than the radius {} and half the height {}",
                spec.round_radius,
                spec.radius,
                spec.height / 2.0
            ),
        });
    }
    Ok(())
}

pub fn validate_torus(spec: &TorusSpec) -> Result<(), KernelError> {
    positive("torus", "inner radius", spec.inner_radius)?;
    positive("torus", "outer radius", spec.outer_radius)?;
    positive("torus", "outer rotation", spec.outer_rotation)?;
    enough_segments("torus", spec.inner_segments)?;
    enough_segments("torus", spec.outer_segments)?;
    if spec.inner_radius >= spec.outer_radius {
        return Err(KernelError::DegenerateGeometry {
            primitive: "torus",
            reason: format!(
                "inner radius {} must be smaller than outer radius {}",
                spec.inner_radius, spec.outer_radius
            ),
        });
    }
    if spec.outer_rotation > TAU + 1e-9 {
        return Err(KernelError::DegenerateGeometry {
            primitive: "torus",
            reason: format!("outer rotation {} exceeds a full turn", spec.outer_rotation),
        });
    }
    Ok(())
}

// ── Exact bounds ────────────────────────────────────────────────────────────

pub fn cuboid_bounds(spec: &CuboidSpec) -> BoundingBox {
    BoundingBox::from_center_size(spec.center, spec.size)
}

pub fn rounded_cuboid_bounds(spec: &RoundedCuboidSpec) -> BoundingBox {
    BoundingBox::from_center_size(spec.center, spec.size)
}

pub fn cylinder_bounds(spec: &CylinderSpec) -> BoundingBox {
    let d = spec.radius * 2.0;
    BoundingBox::from_center_size(spec.center, [d, d, spec.height])
}

pub fn rounded_cylinder_bounds(spec: &RoundedCylinderSpec) -> BoundingBox {
    let d = spec.radius * 2.0;
    BoundingBox::from_center_size(spec.center, [d, d, spec.height])
}

/// Bounds of the swept ring: an annular sector of radii `outer ± inner`,
/// extreme at the sweep ends and at every axis crossing inside the sweep.
pub fn torus_bounds(spec: &TorusSpec) -> BoundingBox {
    let r = spec.inner_radius;
    let big = spec.outer_radius;
    let mut angles = vec![0.0, spec.outer_rotation];
    let mut quarter = FRAC_PI_2;
    while quarter < spec.outer_rotation {
        angles.push(quarter);
        quarter += FRAC_PI_2;
    }
    let mut bbox: Option<BoundingBox> = None;
    for a in angles {
        let (s, c) = a.sin_cos();
        // Tube cross-section at this angle spans big ± r radially.
        for radial in [big - r, big + r] {
            let p = [radial * c, radial * s, 0.0];
            match bbox.as_mut() {
                Some(b) => b.include(p),
                None => bbox = Some(BoundingBox::new(p, p)),
            }
        }
    }
    let mut bbox = bbox.unwrap_or_else(|| BoundingBox::new([0.0; 3], [0.0; 3]));
    bbox.min[2] = -r;
    bbox.max[2] = r;
    bbox
}

// ── Solids ──────────────────────────────────────────────────────────────────

fn points(solid: &Solid) -> impl Iterator<Item = [f64; 3]> + '_ {
    solid
        .polygons
        .iter()
        .flat_map(|p| p.vertices.iter().map(|v| [v.pos.x, v.pos.y, v.pos.z]))
}

/// Bounds of every polygon vertex. None for a solid without polygons.
pub fn solid_bounds(solid: &Solid) -> Option<BoundingBox> {
    BoundingBox::from_points(points(solid))
}

pub fn transformed(solid: &Solid, t: &Transform) -> Solid {
    solid.transform(&Matrix4::from_column_slice(&t.m))
}

/// Translates `solid` so its bounds are centered on `center`.
fn recentered(solid: Solid, center: [f64; 3]) -> Solid {
    match solid_bounds(&solid) {
        Some(bbox) => {
            let c = bbox.center();
            transformed(
                &solid,
                &Transform::translation([center[0] - c[0], center[1] - c[1], center[2] - c[2]]),
            )
        }
        None => solid,
    }
}

/// Turns `solid` so its thinnest extent lies along Z, centered on the origin.
fn laid_flat(solid: Solid) -> Solid {
    let Some(bbox) = solid_bounds(&solid) else {
        return solid;
    };
    let [sx, sy, sz] = bbox.size();
    let turned = if sx < sy.min(sz) {
        transformed(&solid, &Transform::rotation_y(FRAC_PI_2))
    } else if sy < sz {
        transformed(&solid, &Transform::rotation_x(FRAC_PI_2))
    } else {
        solid
    };
    recentered(turned, [0.0; 3])
}

/// Boolean union of all `solids`, pairing operands level by level.
pub fn union_all(mut solids: Vec<Solid>) -> Option<Solid> {
    while solids.len() > 1 {
        solids = solids
            .chunks(2)
            .map(|pair| {
                pair[1..]
                    .iter()
                    .fold(pair[0].clone(), |acc, next| acc.union(next))
            })
            .collect();
    }
    solids.pop()
}

/// Copy of `solid` with every polygon given `color`.
pub fn painted(solid: &Solid, color: Rgb) -> Solid {
    let mut out = solid.clone();
    for polygon in &mut out.polygons {
        polygon.metadata = Some(color);
    }
    out
}

pub fn cuboid_solid(spec: &CuboidSpec) -> Solid {
    let [x, y, z] = spec.size;
    recentered(CSG::cube(x, y, z, None), spec.center)
}

/// Convex hull of the eight corner spheres.
pub fn rounded_cuboid_solid(spec: &RoundedCuboidSpec, segments: u32) -> Solid {
    let r = spec.round_radius;
    let half = spec.size.map(|s| s / 2.0 - r);
    let segments = segments as usize;
    let corners = (0..8)
        .map(|i| {
            let sign = |bit: usize| if i & bit == 0 { -1.0 } else { 1.0 };
            let offset = [sign(1) * half[0], sign(2) * half[1], sign(4) * half[2]];
            let sphere = recentered(CSG::sphere(r, segments, (segments / 2).max(2), None), [0.0; 3]);
            transformed(&sphere, &Transform::translation(offset))
        })
        .collect();
    match union_all(corners) {
        Some(spheres) => recentered(spheres.convex_hull(), spec.center),
        None => Solid::new(),
    }
}

pub fn cylinder_solid(spec: &CylinderSpec, segments: u32) -> Solid {
    recentered(
        CSG::cylinder(spec.radius, spec.height, segments as usize, None),
        spec.center,
    )
}

/// Full ring around Z with tube center distance `major` and tube radius `minor`.
fn ring(major: f64, minor: f64, outer_segments: u32, inner_segments: u32) -> Solid {
    laid_flat(CSG::torus(
        major,
        minor,
        outer_segments as usize,
        inner_segments as usize,
        None,
    ))
}

/// Convex hull of the two rim rings.
pub fn rounded_cylinder_solid(spec: &RoundedCylinderSpec, segments: u32) -> Solid {
    let rr = spec.round_radius;
    let rim = ring(spec.radius - rr, rr, segments, segments);
    let lift = spec.height / 2.0 - rr;
    let top = transformed(&rim, &Transform::translation([0.0, 0.0, lift]));
    let bottom = transformed(&rim, &Transform::translation([0.0, 0.0, -lift]));
    recentered(top.union(&bottom).convex_hull(), spec.center)
}

/// Slab `{y >= 0}` clipped to a cube of edge `extent` around the origin.
fn upper_half(extent: f64) -> Solid {
    recentered(
        CSG::cube(extent, extent, extent, None),
        [0.0, extent / 2.0, 0.0],
    )
}

/// Angular sector from +X towards +Y spanning `sweep` radians, `sweep <= TAU`.
fn sector(sweep: f64, extent: f64) -> Solid {
    let upper = upper_half(extent);
    // upper ∩ Rz(a + π)·upper spans angles [0, a] for a <= π.
    let narrow = |a: f64| upper.intersection(&transformed(&upper, &Transform::rotation_z(a + PI)));
    if sweep <= PI {
        narrow(sweep)
    } else {
        let rest = transformed(&narrow(sweep - PI), &Transform::rotation_z(PI));
        upper.union(&rest)
    }
}

pub fn torus_solid(spec: &TorusSpec, inner_segments: u32, outer_segments: u32) -> Solid {
    let full = ring(spec.outer_radius, spec.inner_radius, outer_segments, inner_segments);
    if spec.outer_rotation >= TAU - 1e-9 {
        return full;
    }
    let extent = 4.0 * (spec.outer_radius + spec.inner_radius);
    debug!(sweep = spec.outer_rotation, "cutting partial torus");
    full.intersection(&sector(spec.outer_rotation, extent))
}

// ── Tessellation ────────────────────────────────────────────────────────────

/// Unit normal of a planar polygon by Newell's method.
fn polygon_normal(points: &[[f64; 3]]) -> Option<[f64; 3]> {
    let mut n = [0.0f64; 3];
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        n[0] += (a[1] - b[1]) * (a[2] + b[2]);
        n[1] += (a[2] - b[2]) * (a[0] + b[0]);
        n[2] += (a[0] - b[0]) * (a[1] + b[1]);
    }
    let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
    (len > 1e-12).then(|| n.map(|v| v / len))
}

/// Triangulate every polygon of `solid` into a render mesh with one color
/// range per distinct color, in order of first appearance.
///
/// csgrs polygons are convex, so each becomes a fan around its first vertex.
pub fn render_mesh(solid: &Solid) -> RenderMesh {
    let mut groups: Vec<(Option<Rgb>, Vec<usize>)> = Vec::new();
    for (i, polygon) in solid.polygons.iter().enumerate() {
        match groups.iter_mut().find(|(color, _)| *color == polygon.metadata) {
            Some((_, members)) => members.push(i),
            None => groups.push((polygon.metadata, vec![i])),
        }
    }

    let mut out = RenderMesh::default();
    for (color, members) in groups {
        let start_index = out.indices.len() as u32;
        for i in members {
            let pts: Vec<[f64; 3]> = solid.polygons[i]
                .vertices
                .iter()
                .map(|v| [v.pos.x, v.pos.y, v.pos.z])
                .collect();
            if pts.len() < 3 {
                continue;
            }
            let Some(normal) = polygon_normal(&pts) else {
                continue;
            };
            let base = out.vertex_count() as u32;
            for p in &pts {
                out.vertices.extend(p.map(|v| v as f32));
                out.normals.extend(normal.map(|v| v as f32));
            }
            for k in 1..pts.len() as u32 - 1 {
                out.indices.extend_from_slice(&[base, base + k, base + k + 1]);
            }
        }
        let end_index = out.indices.len() as u32;
        if end_index > start_index {
            out.color_ranges.push(ColorRange {
                color,
                start_index,
                end_index,
            });
        }
    }
    out
}
