//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Shell chrome (`aside`, `header`, `footer`) reads `UiState` from context.
//! `resource_list` is the generic list view every resource page mounts; it
//! composes `data_table`, `detail_modal`, and `status_badge`.

pub mod aside;
pub mod data_table;
pub mod detail_modal;
pub mod footer;
pub mod header;
pub mod resource_list;
pub mod status_badge;
