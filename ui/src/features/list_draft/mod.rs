pub mod background;
pub mod collaborators;
pub mod locale;
pub mod template;
pub mod types;
pub mod validation;

pub use background::*;
pub use collaborators::*;
pub use locale::*;
pub use template::*;
pub use types::*;
pub use validation::*;
