//! Parametric wheelchair model.
//!
//! A [`ParameterRecord`] is validated, converted to millimetres and expanded
//! into [`DerivedDimensions`]. Part builders turn those into [`ShapeNode`]
//! build trees, the assembler places and colors them, and [`evaluate`] runs a
//! tree against any [`shape_kernel::Kernel`].

pub mod assembly;
pub mod config;
pub mod constants;
pub mod definitions;
pub mod derived;
pub mod error;
pub mod eval;
pub mod params;
pub mod parts;
pub mod tree;

pub use assembly::{
    build_assembly, generate, main, Assembly, AssemblyPart, GeneratedAssembly, GeneratedPart,
    InstancePair,
};
pub use config::{ModelConfig, ValidationMode};
pub use constants::ChairConstants;
pub use definitions::parameter_definitions;
pub use derived::DerivedDimensions;
pub use error::ModelError;
pub use eval::evaluate;
pub use params::{ParameterRecord, ResolvedParameters};
pub use tree::{Primitive, ShapeNode};
