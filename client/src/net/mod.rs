//! Networking modules for the animation generator.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines its JSON schema. The
//! generator itself is a separate service; this crate only consumes it.

pub mod api;
pub mod types;
