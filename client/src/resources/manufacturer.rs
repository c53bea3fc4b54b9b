//! Manufacturers list (`/listfabricantes`).

use super::{ACTIVE_INACTIVE, CellFormat, Column, DetailField, FieldValue, Resource, ResourceConfig};
use crate::net::types::{Manufacturer, RecordStatus};

const COLUMNS: &[Column] = &[
    Column::text("idfabricante", "ID").sortable().width("10%").centered(),
    Column::text("nombre", "Nombre").sortable().width("30%"),
    Column::text("descripcion", "Descripción").width("45%"),
    Column::text("idestatus", "Estado").format(CellFormat::Status(ACTIVE_INACTIVE)).sortable().width("10%").centered(),
];

impl Resource for Manufacturer {
    const CONFIG: ResourceConfig = ResourceConfig {
        endpoint: "/fabricantes",
        route: "/listfabricantes",
        nav_label: "Fabricantes",
        title: "Lista de Fabricantes",
        toolbar_caption: None,
        loading_message: "Cargando Fabricantes...",
        error_heading: "Error al cargar los Fabricantes",
        empty_message: "No se encontraron fabricantes.",
        search_placeholder: "Buscar... ",
        detail_heading: "Detalles del Fabricante",
        key_field: "idfabricante",
        columns: COLUMNS,
        filter_fields: &["nombre", "descripcion"],
        page_size: 10,
        page_size_options: &[5, 10, 25],
        edit_delete_placeholders: false,
    };

    fn key(&self) -> i64 {
        self.id
    }

    fn field(&self, field: &str) -> FieldValue {
        match field {
            "idfabricante" => FieldValue::Int(self.id),
            "nombre" => FieldValue::Text(self.name.clone()),
            "descripcion" => FieldValue::Text(self.description.clone()),
            "idestatus" => FieldValue::Status(RecordStatus::from_code(self.status_code)),
            _ => FieldValue::Empty,
        }
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("ID", self.id),
            DetailField::text("Nombre", self.name.as_str()),
            DetailField::text("Descripción", self.description.as_str()),
            DetailField::formatted(
                "Estado",
                FieldValue::Status(RecordStatus::from_code(self.status_code)),
                CellFormat::Status(ACTIVE_INACTIVE),
            ),
        ]
    }
}
