//! Games list (`/listjuegos`).
//!
//! The only view with a currency column and the edit/delete placeholders.
//! The table's status column reads either `idestatus` or `estatus` (see
//! [`RecordStatus::from_code_or_label`]); the detail modal's availability
//! tag reads `idestatus` alone.

use super::{ACTIVE_INACTIVE, AVAILABILITY, CellFormat, Column, DetailField, FieldValue, Resource, ResourceConfig};
use crate::net::types::{Game, RecordStatus};

const COLUMNS: &[Column] = &[
    Column::text("idjuego", "ID").sortable().width("80px").centered(),
    Column::text("nombre", "Nombre").sortable(),
    Column::text("genero", "Género").sortable().centered(),
    Column::text("precio", "Precio").format(CellFormat::Currency).sortable().centered(),
    Column::text("estatus", "Estatus").format(CellFormat::Status(ACTIVE_INACTIVE)).sortable().centered(),
];

const NO_GENRE: &str = "No especificado";
const NO_DESCRIPTION: &str = "Sin descripción disponible.";

impl Resource for Game {
    const CONFIG: ResourceConfig = ResourceConfig {
        endpoint: "/juegos",
        route: "/listjuegos",
        nav_label: "Juegos",
        title: "Juegos",
        toolbar_caption: Some("Gestión de Juegos"),
        loading_message: "Cargando Juegos...",
        error_heading: "Error al cargar los Juegos",
        empty_message: "No se encontraron juegos.",
        search_placeholder: "Buscar juego...",
        detail_heading: "Detalles del Juego",
        key_field: "idjuego",
        columns: COLUMNS,
        filter_fields: &["nombre", "descripcion", "estatus", "precio", "genero"],
        page_size: 10,
        page_size_options: &[5, 10, 25],
        edit_delete_placeholders: true,
    };

    fn key(&self) -> i64 {
        Game::key(self)
    }

    fn field(&self, field: &str) -> FieldValue {
        match field {
            "idjuego" => FieldValue::Int(Game::key(self)),
            "nombre" => FieldValue::Text(self.name.clone()),
            "genero" => FieldValue::Text(self.genre.clone()),
            "precio" => self.price.into(),
            "descripcion" => FieldValue::Text(self.description.clone()),
            "estatus" => FieldValue::Status(self.status()),
            _ => FieldValue::Empty,
        }
    }

    fn details(&self) -> Vec<DetailField> {
        let genre = if self.genre.is_empty() { NO_GENRE } else { self.genre.as_str() };
        let description = if self.description.is_empty() { NO_DESCRIPTION } else { self.description.as_str() };
        vec![
            DetailField::text("ID", Game::key(self)),
            DetailField::formatted(
                "Estado",
                FieldValue::Status(RecordStatus::from_code(self.status_code)),
                CellFormat::Status(AVAILABILITY),
            ),
            DetailField::text("Género", genre),
            DetailField::formatted("Precio", self.price.into(), CellFormat::Currency),
            DetailField::text("Descripción", description),
        ]
    }

    fn detail_title(&self) -> Option<String> {
        Some(self.name.clone())
    }
}
