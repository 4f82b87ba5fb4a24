//! Feature Modules
//!
//! - **list_draft**: the draft list record, its reducer, validation rules,
//!   collaborator and background selection, template prefill and locale tables

pub mod list_draft;
