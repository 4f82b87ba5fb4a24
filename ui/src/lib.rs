//! This crate contains the list creation flow: the shared draft, its
//! validation, the reference-data client and the Dioxus components.

pub mod app;
pub use app::{ListCreationFlow, ListFormMode};

pub mod components;
pub mod features;
pub mod services;
pub mod utils;
