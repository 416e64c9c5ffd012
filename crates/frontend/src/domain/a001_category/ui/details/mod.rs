//! Category Details UI Module
//!
//! Simplified MVVM pattern implementation:
//! - view_model.rs: ViewModel with commands over the list state
//! - view.rs: Leptos component (pure UI)

mod view;
mod view_model;

pub use view::CategoryDetails;
