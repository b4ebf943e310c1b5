use chair_types::PartKind;
use shape_kernel::KernelError;

/// Errors from the assembly pipeline.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    /// A parameter lies outside its declared domain. Raised before any
    /// geometry is built.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// The kernel rejected a primitive or operation while building a part.
    #[error("degenerate geometry in {part}: {source}")]
    DegenerateGeometry {
        part: PartKind,
        #[source]
        source: KernelError,
    },
}

impl ModelError {
    /// Short machine-readable name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            ModelError::InvalidParameter { .. } => "invalidParameter",
            ModelError::DegenerateGeometry { .. } => "degenerateGeometry",
        }
    }
}
