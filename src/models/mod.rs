pub mod loaders;
pub mod result;
pub mod student;

pub use loaders::load_roster;
pub use result::{PlatformCounts, StudentResult};
pub use student::{PlatformHandles, Student};
