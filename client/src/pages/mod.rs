//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped wiring only and delegate rendering to
//! `components`.

pub mod home;
pub mod lists;
