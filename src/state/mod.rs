//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` is the persisted credential record; `tasks` is the in-memory
//! board the task page renders from.

pub mod session;
pub mod tasks;
