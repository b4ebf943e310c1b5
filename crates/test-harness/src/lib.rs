//! Test harness for wheelchair model scenarios.
//!
//! Scripts parameter records through the real bridge dispatch path, checks
//! the results with oracles and renders plain-text reports.
//!
//! # Key Components
//!
//! - [`ChairScenario`]: Fluent API for building and verifying a chair
//! - [`oracle`]: Verification functions returning pass/fail verdicts
//! - [`report`]: Structured text model descriptions
//! - [`stl`]: STL export and parsing
//! - [`helpers`]: Error type and mesh math
//! - [`assertions`]: Assertion helpers with diagnostics

pub mod assertions;
pub mod helpers;
pub mod oracle;
pub mod report;
pub mod stl;
pub mod workflow;

pub use helpers::HarnessError;
pub use oracle::OracleVerdict;
pub use report::ModelReport;
pub use workflow::ChairScenario;
