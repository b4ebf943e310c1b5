pub mod appearance;
pub mod definition;
pub mod layout;
pub mod units;

pub use appearance::*;
pub use definition::*;
pub use layout::*;
pub use units::*;
