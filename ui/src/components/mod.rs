//! User Interface Components
//!
//! Reusable Dioxus components for the list creation flow:
//!
//! - **forms**: the list info screen wired to the shared draft
//! - **input**: field-level inputs (text, selectors, labels, collaborators, colors)
//! - **layout**: page header and form sections
//! - **display**: loading/error notices and the draft summary

pub mod display;
pub mod forms;
pub mod input;
pub mod layout;
