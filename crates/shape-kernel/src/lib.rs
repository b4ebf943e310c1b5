pub mod mesh_kernel;
pub mod mock_kernel;
pub mod primitives;
pub mod traits;
pub mod transform;
pub mod types;

pub use mesh_kernel::{MeshConfig, MeshKernel};
pub use mock_kernel::MockKernel;
pub use traits::*;
pub use transform::Transform;
pub use types::*;
