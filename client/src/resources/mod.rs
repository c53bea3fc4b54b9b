//! Per-resource list view configuration.
//!
//! ARCHITECTURE
//! ============
//! Every list page is the same generic view (`components::resource_list`)
//! driven by a [`Resource`] implementation: a static [`ResourceConfig`]
//! (endpoint, columns, filter fields, paging, copy) plus accessors that turn
//! a record into [`FieldValue`]s. Formatting and status mapping live here so
//! they can be tested without a DOM.


pub mod game;
pub mod genre;
pub mod manufacturer;
pub mod platform;
pub mod user;

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;

use crate::net::types::{Game, Genre, Manufacturer, Platform, RecordStatus, User};
use crate::util::currency::CurrencyFormat;

// =============================================================================
// FIELD VALUES
// =============================================================================

/// Raw value of one record field, before display formatting.
#[derive(Clone, Debug, PartialEq)]
pub enum FieldValue {
    Empty,
    Int(i64),
    Decimal(Decimal),
    Text(String),
    Status(RecordStatus),
}

impl FieldValue {
    /// Text the global filter matches against.
    #[must_use]
    pub fn filter_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Int(n) => n.to_string(),
            Self::Decimal(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Status(status) => ACTIVE_INACTIVE.label(*status).to_owned(),
        }
    }

    /// Ordering used by sortable columns. Empty values sort first; numbers
    /// compare numerically; text compares case-insensitively.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Int(_) | Self::Decimal(_), Self::Int(_) | Self::Decimal(_)) => {
                self.as_decimal().cmp(&other.as_decimal())
            }
            (Self::Text(a), Self::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)),
            (Self::Status(a), Self::Status(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    fn as_decimal(&self) -> Decimal {
        match self {
            Self::Int(n) => Decimal::from(*n),
            Self::Decimal(n) => *n,
            _ => Decimal::ZERO,
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Int(_) | Self::Decimal(_) => 1,
            Self::Status(_) => 2,
            Self::Text(_) => 3,
        }
    }
}

impl From<Option<i64>> for FieldValue {
    fn from(value: Option<i64>) -> Self {
        value.map_or(Self::Empty, Self::Int)
    }
}

impl From<Option<Decimal>> for FieldValue {
    fn from(value: Option<Decimal>) -> Self {
        value.map_or(Self::Empty, Self::Decimal)
    }
}

// =============================================================================
// FORMATTING
// =============================================================================

/// Visual severity of a status tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Success,
    Danger,
}

impl Severity {
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "status-tag--success",
            Self::Danger => "status-tag--danger",
        }
    }
}

/// Tag captions for the two status values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusLabels {
    pub active: &'static str,
    pub inactive: &'static str,
}

impl StatusLabels {
    #[must_use]
    pub fn label(self, status: RecordStatus) -> &'static str {
        if status.is_active() { self.active } else { self.inactive }
    }

    #[must_use]
    pub fn tag(self, status: RecordStatus) -> StatusTag {
        StatusTag {
            label: self.label(status),
            severity: if status.is_active() { Severity::Success } else { Severity::Danger },
        }
    }
}

pub const ACTIVE_INACTIVE: StatusLabels = StatusLabels { active: "Activo", inactive: "Inactivo" };
pub const AVAILABILITY: StatusLabels = StatusLabels { active: "DISPONIBLE", inactive: "NO DISPONIBLE" };

/// A rendered two-state tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusTag {
    pub label: &'static str,
    pub severity: Severity,
}

/// How a column or detail field renders its value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    Currency,
    Status(StatusLabels),
}

/// Display-ready cell content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellDisplay {
    Text(String),
    Tag(StatusTag),
}

/// Turn a raw field value into display content.
///
/// Status cells accept either a mapped [`RecordStatus`] or a bare numeric
/// code (mapped with [`RecordStatus::from_code`]).
#[must_use]
pub fn render_cell(format: CellFormat, value: &FieldValue, currency: &CurrencyFormat) -> CellDisplay {
    match format {
        CellFormat::Text => CellDisplay::Text(value.filter_text()),
        CellFormat::Currency => match value {
            FieldValue::Int(n) => CellDisplay::Text(currency.format(Decimal::from(*n))),
            FieldValue::Decimal(n) => CellDisplay::Text(currency.format(*n)),
            other => CellDisplay::Text(other.filter_text()),
        },
        CellFormat::Status(labels) => {
            let status = match value {
                FieldValue::Status(status) => *status,
                FieldValue::Int(code) => RecordStatus::from_code(Some(*code)),
                _ => RecordStatus::Inactive,
            };
            CellDisplay::Tag(labels.tag(status))
        }
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// One table column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub field: &'static str,
    pub header: &'static str,
    pub format: CellFormat,
    pub sortable: bool,
    pub width: Option<&'static str>,
    pub centered: bool,
}

impl Column {
    #[must_use]
    pub const fn text(field: &'static str, header: &'static str) -> Self {
        Self { field, header, format: CellFormat::Text, sortable: false, width: None, centered: false }
    }

    #[must_use]
    pub const fn format(mut self, format: CellFormat) -> Self {
        self.format = format;
        self
    }

    #[must_use]
    pub const fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    #[must_use]
    pub const fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    #[must_use]
    pub const fn centered(mut self) -> Self {
        self.centered = true;
        self
    }
}

/// One labelled row in the detail modal.
#[derive(Clone, Debug, PartialEq)]
pub struct DetailField {
    pub label: &'static str,
    pub value: FieldValue,
    pub format: CellFormat,
}

impl DetailField {
    #[must_use]
    pub fn text(label: &'static str, value: impl Into<FieldValue>) -> Self {
        Self { label, value: value.into(), format: CellFormat::Text }
    }

    #[must_use]
    pub fn formatted(label: &'static str, value: FieldValue, format: CellFormat) -> Self {
        Self { label, value, format }
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Static configuration for one resource list view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResourceConfig {
    /// Backend path, e.g. `/generos`.
    pub endpoint: &'static str,
    /// Route path the view is mounted at, e.g. `/listgeneros`.
    pub route: &'static str,
    /// Navigation label.
    pub nav_label: &'static str,
    pub title: &'static str,
    /// Caption shown left of the search box, if any.
    pub toolbar_caption: Option<&'static str>,
    pub loading_message: &'static str,
    pub error_heading: &'static str,
    pub empty_message: &'static str,
    pub search_placeholder: &'static str,
    pub detail_heading: &'static str,
    pub key_field: &'static str,
    pub columns: &'static [Column],
    pub filter_fields: &'static [&'static str],
    pub page_size: usize,
    pub page_size_options: &'static [usize],
    /// Show the non-functional edit/delete buttons next to "view details".
    pub edit_delete_placeholders: bool,
}

/// A backend record type that can drive a list view.
pub trait Resource: Clone + PartialEq + Send + Sync + DeserializeOwned + 'static {
    const CONFIG: ResourceConfig;

    /// Unique row key (the value of `CONFIG.key_field`).
    fn key(&self) -> i64;

    /// Raw value of a configured column or filter field.
    fn field(&self, field: &str) -> FieldValue;

    /// Every field of the record as shown in the detail modal.
    fn details(&self) -> Vec<DetailField>;

    /// Optional heading inside the detail modal (e.g. the record name).
    fn detail_title(&self) -> Option<String> {
        None
    }
}

/// Configs of every resource, in navigation order.
pub const ALL: &[ResourceConfig] = &[
    <Genre as Resource>::CONFIG,
    <Manufacturer as Resource>::CONFIG,
    <Game as Resource>::CONFIG,
    <Platform as Resource>::CONFIG,
    <User as Resource>::CONFIG,
];

/// Look up a resource by its backend path segment (`generos`, `users`, ...).
#[must_use]
pub fn by_path_segment(segment: &str) -> Option<&'static ResourceConfig> {
    ALL.iter().find(|config| config.endpoint.strip_prefix('/') == Some(segment))
}
