pub mod create_list_form;

pub use create_list_form::*;
