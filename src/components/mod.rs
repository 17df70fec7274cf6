//! Reusable UI components for the login and task pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components stay presentational: they receive data and callbacks as props
//! and read `AppServices` from context only where a form needs session data.
//! Remote calls and state mutation live in `pages`.

pub mod confirm_dialog;
pub mod navbar;
pub mod task_form;
pub mod task_item;
