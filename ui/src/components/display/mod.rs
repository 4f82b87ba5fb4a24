pub mod draft_review;
pub mod loading_indicator;

pub use draft_review::*;
pub use loading_indicator::*;
