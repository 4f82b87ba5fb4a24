pub mod context;
pub mod list_creation_flow;

pub use context::*;
pub use list_creation_flow::ListCreationFlow;
