//! Configuration for the assembly pipeline.

use crate::constants::ChairConstants;

/// How parameter records are checked before geometry is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Reject out-of-domain parameters with `ModelError::InvalidParameter`.
    #[default]
    Strict,
    /// Build whatever the parameters describe. Degenerate primitives are still
    /// reported by the kernel at evaluation time.
    Permissive,
}

/// Configuration controlling the constants and checks used by the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ModelConfig {
    pub constants: ChairConstants,
    pub validation: ValidationMode,
}

impl ModelConfig {
    /// Standard constants without domain checks.
    pub fn permissive() -> Self {
        Self {
            validation: ValidationMode::Permissive,
            ..Self::default()
        }
    }
}
