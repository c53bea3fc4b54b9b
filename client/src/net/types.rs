//! Wire record types returned by the REST backend.
//!
//! DESIGN
//! ======
//! Backend field names are Spanish (`idgenero`, `nombre`, ...). Structs use
//! English field names and `serde(rename)` so the rest of the client never
//! touches wire spellings. Scalar fields other than the row key default when
//! missing so one sparse record does not fail a whole collection.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Numeric status code the backend uses for "active".
pub const ACTIVE_STATUS_CODE: i64 = 1;

/// Status label some game records carry instead of a numeric code.
pub const ACTIVE_STATUS_LABEL: &str = "Activo";

/// Two-valued record status shown as a tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RecordStatus {
    #[default]
    Inactive,
    Active,
}

impl RecordStatus {
    /// Active iff the numeric status code equals [`ACTIVE_STATUS_CODE`].
    #[must_use]
    pub fn from_code(code: Option<i64>) -> Self {
        if code == Some(ACTIVE_STATUS_CODE) { Self::Active } else { Self::Inactive }
    }

    /// Active iff the numeric code is active OR the string label equals
    /// [`ACTIVE_STATUS_LABEL`].
    ///
    /// Game records arrive with either convention depending on the backend
    /// build, so both are honoured there.
    #[must_use]
    pub fn from_code_or_label(code: Option<i64>, label: Option<&str>) -> Self {
        if code == Some(ACTIVE_STATUS_CODE) || label == Some(ACTIVE_STATUS_LABEL) {
            Self::Active
        } else {
            Self::Inactive
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Genre record from `GET /generos`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    #[serde(rename = "idgenero")]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "idestatus", default)]
    pub status_code: Option<i64>,
}

/// Manufacturer record from `GET /fabricantes`. Same layout as [`Genre`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manufacturer {
    #[serde(rename = "idfabricante")]
    pub id: i64,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "idestatus", default)]
    pub status_code: Option<i64>,
}

/// Game record from `GET /juegos`.
///
/// The key arrives as `idjuego` on most backends and as `id` on some; both
/// are kept and [`Game::key`] picks the first present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    #[serde(rename = "idjuego", default)]
    pub game_id: Option<i64>,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "nombre", default)]
    pub name: String,
    /// Genre label only, not a foreign key.
    #[serde(rename = "genero", default)]
    pub genre: String,
    /// Accepts a JSON number or a numeric string.
    #[serde(rename = "precio", default)]
    pub price: Option<Decimal>,
    #[serde(rename = "descripcion", default)]
    pub description: String,
    #[serde(rename = "idestatus", default)]
    pub status_code: Option<i64>,
    #[serde(rename = "estatus", default)]
    pub status_label: Option<String>,
}

impl Game {
    #[must_use]
    pub fn key(&self) -> i64 {
        self.game_id.or(self.id).unwrap_or_default()
    }

    #[must_use]
    pub fn status(&self) -> RecordStatus {
        RecordStatus::from_code_or_label(self.status_code, self.status_label.as_deref())
    }
}

/// Platform record from `GET /plataformas`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    #[serde(rename = "idplataforma")]
    pub id: i64,
    #[serde(rename = "idestatus", default)]
    pub status_code: Option<i64>,
    #[serde(rename = "nombre", default)]
    pub name: String,
    #[serde(rename = "descripcion", default)]
    pub description: String,
}

/// User record from `GET /users`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub age: Option<i64>,
}
