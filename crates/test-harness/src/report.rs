//! Structured text model reports.
//!
//! Reports are plain text, not JSON, so a failing scenario can print a
//! readable description of the chair it built.

use std::fmt;

use chair_types::{Color, PartKind};
use shape_kernel::BoundingBox;
use wasm_bridge::PartMesh;
use wheelchair_model::Assembly;

use crate::oracle::OracleVerdict;

/// A complete model report with all sections.
#[derive(Debug, Clone, Default)]
pub struct ModelReport {
    pub dimensions: Vec<(&'static str, f64)>,
    pub part_entries: Vec<PartEntry>,
    pub mesh_summaries: Vec<MeshSummary>,
    pub bounding_box: Option<BoundingBox>,
    pub oracle_results: Vec<OracleVerdict>,
    pub errors: Vec<(String, String)>,
}

/// A single part's report entry.
#[derive(Debug, Clone)]
pub struct PartEntry {
    pub index: usize,
    pub kind: PartKind,
    pub color: Color,
    pub primitives: usize,
    pub bounds: Option<BoundingBox>,
}

/// Mesh summary for a part.
#[derive(Debug, Clone)]
pub struct MeshSummary {
    pub kind: PartKind,
    pub triangle_count: usize,
    pub vertex_count: usize,
    pub color_range_count: usize,
}

impl ModelReport {
    /// Report the parts and derived dimensions of an assembly.
    pub fn from_assembly(assembly: &Assembly) -> Self {
        let d = &assembly.derived;
        let dimensions = vec![
            ("seat depth", d.seat_depth),
            ("backrest height", d.backrest_height),
            ("backrest width", d.backrest_width),
            ("armrest height", d.armrest_height),
            ("armrest length", d.armrest_length),
            ("wheel base", d.wheel_base),
            ("overall width", d.overall_width),
        ];

        let part_entries: Vec<PartEntry> = assembly
            .parts
            .iter()
            .enumerate()
            .map(|(index, part)| PartEntry {
                index,
                kind: part.kind,
                color: part.color,
                primitives: part.node.as_ref().map_or(0, |n| n.primitive_count()),
                bounds: part.node.as_ref().and_then(|n| n.bounds()),
            })
            .collect();

        let bounding_box = part_entries
            .iter()
            .filter_map(|e| e.bounds)
            .reduce(|a, b| a.union(&b));

        Self {
            dimensions,
            part_entries,
            bounding_box,
            ..Self::default()
        }
    }

    /// Add mesh summaries from a `ModelGenerated` response.
    pub fn with_meshes(mut self, parts: &[PartMesh]) -> Self {
        self.mesh_summaries = parts
            .iter()
            .filter_map(|p| {
                p.mesh.as_ref().map(|m| MeshSummary {
                    kind: p.kind,
                    triangle_count: m.triangle_count(),
                    vertex_count: m.vertex_count(),
                    color_range_count: m.color_ranges.len(),
                })
            })
            .collect();
        self
    }

    pub fn with_oracles(mut self, verdicts: Vec<OracleVerdict>) -> Self {
        self.oracle_results.extend(verdicts);
        self
    }

    pub fn failed_oracles(&self) -> impl Iterator<Item = &OracleVerdict> {
        self.oracle_results.iter().filter(|v| !v.passed)
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Wheelchair Model Report ===\n\n");

        if !self.dimensions.is_empty() {
            out.push_str("Derived Dimensions (mm):\n");
            for (name, value) in &self.dimensions {
                out.push_str(&format!("  {name}: {value:.1}\n"));
            }
        }

        let hidden = self.part_entries.iter().filter(|e| e.bounds.is_none()).count();
        out.push_str(&format!(
            "\nParts ({} parts, {} hidden):\n",
            self.part_entries.len(),
            hidden,
        ));
        for entry in &self.part_entries {
            match &entry.bounds {
                Some(b) => out.push_str(&format!(
                    "  [{}] {} ({}) {} primitives, ({:.1}, {:.1}, {:.1}) -> ({:.1}, {:.1}, {:.1})\n",
                    entry.index,
                    entry.kind,
                    entry.color.name(),
                    entry.primitives,
                    b.min[0],
                    b.min[1],
                    b.min[2],
                    b.max[0],
                    b.max[1],
                    b.max[2],
                )),
                None => out.push_str(&format!(
                    "  [{}] {} [HIDDEN]\n",
                    entry.index, entry.kind
                )),
            }
        }

        if !self.mesh_summaries.is_empty() {
            out.push_str("\nMesh Summary:\n");
            for ms in &self.mesh_summaries {
                out.push_str(&format!(
                    "  {}: {} triangles, {} vertices, {} color ranges\n",
                    ms.kind, ms.triangle_count, ms.vertex_count, ms.color_range_count,
                ));
            }
        }

        if let Some(b) = &self.bounding_box {
            let [x, y, z] = b.size();
            out.push_str(&format!(
                "\nOverall Size: {x:.1} x {y:.1} x {z:.1} mm\n"
            ));
        }

        if !self.oracle_results.is_empty() {
            out.push_str(&format!(
                "\nOracle Results ({} checks):\n",
                self.oracle_results.len()
            ));
            for v in &self.oracle_results {
                let status = if v.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!("  [{}] {}: {}\n", status, v.oracle_name, v.detail));
            }
        }

        if self.errors.is_empty() {
            out.push_str("\nErrors: none\n");
        } else {
            out.push_str(&format!("\nErrors ({}):\n", self.errors.len()));
            for (kind, msg) in &self.errors {
                out.push_str(&format!("  {kind}: {msg}\n"));
            }
        }

        out
    }
}

impl fmt::Display for ModelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_text())
    }
}
