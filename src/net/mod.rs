//! Networking modules for the remote task API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `pipeline` defines requests, the transport seam and interceptor stages;
//! `interceptor` is the auth stage; `transport` talks HTTP in the browser;
//! `auth` and `tasks` are the endpoint services; `types` is the wire schema.

pub mod auth;
pub mod error;
pub mod interceptor;
pub mod pipeline;
pub mod tasks;
pub mod transport;
pub mod types;
