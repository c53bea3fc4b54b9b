//! Networking modules for REST collection reads.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single collection fetch each list view issues, and
//! `types` defines the backend record schema.

pub mod api;
pub mod types;
