//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `list_view` and `table` hold the per-mount state of a resource list;
//! `ui` holds shell chrome toggles provided through Leptos context.

pub mod list_view;
pub mod table;
pub mod ui;
