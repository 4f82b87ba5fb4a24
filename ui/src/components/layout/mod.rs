pub mod header;
pub mod section;

pub use header::*;
pub use section::*;
