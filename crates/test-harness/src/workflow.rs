//! ChairScenario: fluent API for scripting model scenarios in tests.
//!
//! Wraps `wasm_bridge::dispatch()` to test the real dispatch path, not a
//! simulation.

use base64::Engine as _;
use chair_types::{ParameterDefinition, PartKind, Units};
use shape_kernel::{MeshConfig, RenderMesh};
use wasm_bridge::messages::{HostToModel, ModelToHost, PartMesh};
use wasm_bridge::BridgeState;
use wheelchair_model::{build_assembly, Assembly, ModelConfig, ParameterRecord};

use crate::helpers::HarnessError;
use crate::oracle::{self, OracleVerdict};
use crate::report::ModelReport;

/// A fluent builder for generating and verifying chairs in tests.
pub struct ChairScenario {
    pub state: BridgeState,
    record: ParameterRecord,
    history: Vec<String>,
}

impl ChairScenario {
    /// Start from the host defaults in `units`, tessellated coarsely.
    pub fn new(units: Units) -> Self {
        Self::with_config(units, ModelConfig::default(), MeshConfig::preview())
    }

    pub fn with_config(units: Units, model: ModelConfig, mesh: MeshConfig) -> Self {
        Self {
            state: BridgeState::with_config(model, mesh),
            record: ParameterRecord::defaults(units),
            history: Vec::new(),
        }
    }

    pub fn inches() -> Self {
        Self::new(Units::Inch)
    }

    pub fn millimetres() -> Self {
        Self::new(Units::Millimetre)
    }

    /// Edit the parameter record.
    pub fn with(mut self, edit: impl FnOnce(&mut ParameterRecord)) -> Self {
        edit(&mut self.record);
        self
    }

    pub fn record(&self) -> &ParameterRecord {
        &self.record
    }

    /// Messages sent so far, by type.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn send(&mut self, msg: HostToModel) -> Result<ModelToHost, HarnessError> {
        let label = match &msg {
            HostToModel::GetParameterDefinitions { .. } => "GetParameterDefinitions",
            HostToModel::Generate { .. } => "Generate",
            HostToModel::ExportStl { .. } => "ExportStl",
        };
        self.history.push(label.to_string());
        match wasm_bridge::dispatch(&mut self.state, msg) {
            ModelToHost::Error { message, kind } => Err(HarnessError::Dispatch { kind, message }),
            response => Ok(response),
        }
    }

    // ── Bridge round trips ──────────────────────────────────────────────

    pub fn definitions(&mut self) -> Result<Vec<ParameterDefinition>, HarnessError> {
        let units = self.record.units;
        match self.send(HostToModel::GetParameterDefinitions { units })? {
            ModelToHost::ParameterDefinitions { definitions } => Ok(definitions),
            other => Err(unexpected("ParameterDefinitions", &other)),
        }
    }

    /// Generate and tessellate every part.
    pub fn generate(&mut self) -> Result<Vec<PartMesh>, HarnessError> {
        let params = self.record;
        match self.send(HostToModel::Generate { params })? {
            ModelToHost::ModelGenerated { parts } => Ok(parts),
            other => Err(unexpected("ModelGenerated", &other)),
        }
    }

    /// The tessellated mesh of one part.
    pub fn part_mesh(&mut self, kind: PartKind) -> Result<Option<RenderMesh>, HarnessError> {
        Ok(self
            .generate()?
            .into_iter()
            .find(|p| p.kind == kind)
            .and_then(|p| p.mesh))
    }

    /// Export the whole chair as decoded binary STL.
    pub fn export_stl(&mut self) -> Result<Vec<u8>, HarnessError> {
        let params = self.record;
        match self.send(HostToModel::ExportStl { params })? {
            ModelToHost::StlReady { data, .. } => base64::engine::general_purpose::STANDARD
                .decode(data)
                .map_err(|e| HarnessError::StlError {
                    reason: format!("bad base64: {e}"),
                }),
            other => Err(unexpected("StlReady", &other)),
        }
    }

    // ── Verification ────────────────────────────────────────────────────

    /// Build the assembly tree directly, bypassing the bridge.
    pub fn assembly(&self) -> Result<Assembly, HarnessError> {
        Ok(build_assembly(&self.record, &self.state.model_config)?)
    }

    /// Run every assembly oracle and every mesh oracle on each part.
    pub fn check(&mut self) -> Result<Vec<OracleVerdict>, HarnessError> {
        let assembly = self.assembly()?;
        let mut verdicts =
            oracle::run_assembly_checks(&assembly, &self.state.model_config.constants);
        for part in self.generate()? {
            if let Some(mesh) = &part.mesh {
                verdicts.extend(oracle::run_all_mesh_checks(mesh).into_iter().map(|mut v| {
                    v.oracle_name = format!("{}/{}", part.kind, v.oracle_name);
                    v
                }));
            }
        }
        Ok(verdicts)
    }

    /// Full report with meshes and oracle results.
    pub fn report(&mut self) -> Result<ModelReport, HarnessError> {
        let assembly = self.assembly()?;
        let parts = self.generate()?;
        let verdicts = self.check()?;
        Ok(ModelReport::from_assembly(&assembly)
            .with_meshes(&parts)
            .with_oracles(verdicts))
    }
}

fn unexpected(expected: &'static str, got: &ModelToHost) -> HarnessError {
    let got = match got {
        ModelToHost::ParameterDefinitions { .. } => "ParameterDefinitions",
        ModelToHost::ModelGenerated { .. } => "ModelGenerated",
        ModelToHost::StlReady { .. } => "StlReady",
        ModelToHost::Error { .. } => "Error",
    };
    HarnessError::UnexpectedResponse {
        expected,
        got: got.to_string(),
    }
}
