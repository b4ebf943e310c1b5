use shape_kernel::{Kernel, KernelError, MeshConfig, MeshKernel, RenderMesh};
use tracing::{debug, info};
use wheelchair_model::{generate, ModelConfig, ModelError, ParameterRecord};

use crate::messages::PartMesh;

/// Bridge state for one host session.
///
/// Holds the model and tessellation settings and the meshes of the last
/// generated record, so an STL export right after a `Generate` with the same
/// record reuses the tessellation.
#[derive(Debug, Default)]
pub struct BridgeState {
    pub model_config: ModelConfig,
    pub mesh_config: MeshConfig,
    cache: Option<CachedModel>,
}

#[derive(Debug)]
struct CachedModel {
    params: ParameterRecord,
    parts: Vec<PartMesh>,
}

impl BridgeState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(model_config: ModelConfig, mesh_config: MeshConfig) -> Self {
        Self {
            model_config,
            mesh_config,
            cache: None,
        }
    }

    /// Generate and tessellate every part of the record.
    ///
    /// A failed generation clears the cache.
    pub fn generate(&mut self, params: &ParameterRecord) -> Result<&[PartMesh], BridgeError> {
        let model = match self.cache.take() {
            Some(cached) if cached.params == *params => {
                debug!("reusing cached tessellation");
                cached
            }
            _ => CachedModel {
                params: *params,
                parts: tessellate_parts(params, &self.model_config, self.mesh_config)?,
            },
        };
        Ok(&self.cache.insert(model).parts)
    }

    /// Merge every visible part into a single mesh.
    pub fn assembly_mesh(&mut self, params: &ParameterRecord) -> Result<RenderMesh, BridgeError> {
        let parts = self.generate(params)?;
        Ok(crate::stl_export::merge_meshes(
            parts.iter().filter_map(|p| p.mesh.as_ref()),
        ))
    }

    pub fn is_cached(&self, params: &ParameterRecord) -> bool {
        self.cache.as_ref().is_some_and(|c| c.params == *params)
    }

    pub fn clear_cache(&mut self) {
        self.cache = None;
    }
}

/// Every generation gets a fresh kernel so solids never outlive the call.
fn tessellate_parts(
    params: &ParameterRecord,
    model_config: &ModelConfig,
    mesh_config: MeshConfig,
) -> Result<Vec<PartMesh>, BridgeError> {
    let mut kernel = MeshKernel::with_config(mesh_config);
    let generated = generate(params, model_config, &mut kernel)?;

    let mut parts = Vec::with_capacity(generated.parts.len());
    for part in &generated.parts {
        let mesh = match &part.solid {
            Some(solid) => Some(kernel.tessellate(solid)?),
            None => None,
        };
        parts.push(PartMesh {
            kind: part.kind,
            color: part.color,
            rgb: part.color.rgb(),
            mesh,
        });
    }
    info!(
        triangles = parts
            .iter()
            .filter_map(|p| p.mesh.as_ref())
            .map(RenderMesh::triangle_count)
            .sum::<usize>(),
        "parts tessellated"
    );
    Ok(parts)
}

/// Errors that can occur in the bridge layer.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("tessellation failed: {0}")]
    Kernel(#[from] KernelError),

    #[error("failed to parse message: {reason}")]
    Parse { reason: String },

    #[error("serialization failed: {reason}")]
    Serialization { reason: String },
}

impl BridgeError {
    /// Machine-readable error class sent to the host.
    pub fn kind(&self) -> &'static str {
        match self {
            BridgeError::Model(e) => e.kind(),
            BridgeError::Kernel(_) => "kernel",
            BridgeError::Parse { .. } => "parse",
            BridgeError::Serialization { .. } => "serialization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chair_types::PartKind;

    fn coarse() -> BridgeState {
        BridgeState::with_config(ModelConfig::default(), MeshConfig::preview())
    }

    #[test]
    fn generate_fills_the_cache() {
        let mut state = coarse();
        let record = ParameterRecord::default();
        assert!(!state.is_cached(&record));
        let parts = state.generate(&record).unwrap();
        assert_eq!(parts.len(), 8);
        assert!(state.is_cached(&record));
    }

    #[test]
    fn changed_record_regenerates() {
        let mut state = coarse();
        let record = ParameterRecord::default();
        state.generate(&record).unwrap();

        let mut hidden = record;
        hidden.show_armrest = false;
        let parts = state.generate(&hidden).unwrap();
        let armrests = parts.iter().find(|p| p.kind == PartKind::Armrests).unwrap();
        assert!(armrests.mesh.is_none());
        assert!(state.is_cached(&hidden));
        assert!(!state.is_cached(&record));
    }

    #[test]
    fn failed_generation_clears_the_cache() {
        let mut state = coarse();
        let record = ParameterRecord::default();
        state.generate(&record).unwrap();

        let mut bad = record;
        bad.seat_width = -1.0;
        let err = state.generate(&bad).unwrap_err();
        assert_eq!(err.kind(), "invalidParameter");
        assert!(!state.is_cached(&record));
    }

    #[test]
    fn assembly_mesh_counts_every_part() {
        let mut state = coarse();
        let record = ParameterRecord::default();
        let total: usize = state
            .generate(&record)
            .unwrap()
            .iter()
            .filter_map(|p| p.mesh.as_ref())
            .map(RenderMesh::triangle_count)
            .sum();
        let merged = state.assembly_mesh(&record).unwrap();
        assert_eq!(merged.triangle_count(), total);
    }
}
