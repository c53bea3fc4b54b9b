//! Platforms list (`/listplataformas`).

use super::{ACTIVE_INACTIVE, CellFormat, Column, DetailField, FieldValue, Resource, ResourceConfig};
use crate::net::types::{Platform, RecordStatus};

const COLUMNS: &[Column] = &[
    Column::text("idplataforma", "ID").centered(),
    Column::text("idestatus", "Estatus").format(CellFormat::Status(ACTIVE_INACTIVE)).centered(),
    Column::text("nombre", "Plataformas").centered(),
    Column::text("descripcion", "Descripcion").centered(),
];

impl Resource for Platform {
    const CONFIG: ResourceConfig = ResourceConfig {
        endpoint: "/plataformas",
        route: "/listplataformas",
        nav_label: "Plataformas",
        title: "Listado de plataformas",
        toolbar_caption: None,
        loading_message: "Cargando Plataformas...",
        error_heading: "Error al cargar las Plataformas",
        empty_message: "No se encontraron plataformas.",
        search_placeholder: "Buscar... ",
        detail_heading: "Detalles de la Plataforma",
        key_field: "idplataforma",
        columns: COLUMNS,
        filter_fields: &["nombre", "descripcion"],
        page_size: 25,
        page_size_options: &[5, 10, 25, 50],
        edit_delete_placeholders: false,
    };

    fn key(&self) -> i64 {
        self.id
    }

    fn field(&self, field: &str) -> FieldValue {
        match field {
            "idplataforma" => FieldValue::Int(self.id),
            "idestatus" => FieldValue::Status(RecordStatus::from_code(self.status_code)),
            "nombre" => FieldValue::Text(self.name.clone()),
            "descripcion" => FieldValue::Text(self.description.clone()),
            _ => FieldValue::Empty,
        }
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("ID", self.id),
            DetailField::formatted(
                "Estatus",
                FieldValue::Status(RecordStatus::from_code(self.status_code)),
                CellFormat::Status(ACTIVE_INACTIVE),
            ),
            DetailField::text("Nombre", self.name.as_str()),
            DetailField::text("Descripción", self.description.as_str()),
        ]
    }
}
