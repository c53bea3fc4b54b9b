//! Users list (`/listusuarios`). No status column.

use super::{Column, DetailField, FieldValue, Resource, ResourceConfig};
use crate::net::types::User;

const COLUMNS: &[Column] = &[
    Column::text("id", "ID").centered(),
    Column::text("name", "Nombre y Apellido").centered(),
    Column::text("email", "Email").centered(),
    Column::text("age", "Edad").centered(),
];

impl Resource for User {
    const CONFIG: ResourceConfig = ResourceConfig {
        endpoint: "/users",
        route: "/listusuarios",
        nav_label: "Usuarios",
        title: "Listado de users",
        toolbar_caption: None,
        loading_message: "Cargando Usuarios...",
        error_heading: "Error al cargar los Usuarios",
        empty_message: "No se encontraron usuarios.",
        search_placeholder: "Buscar... ",
        detail_heading: "Detalles del Usuario",
        key_field: "id",
        columns: COLUMNS,
        filter_fields: &["name", "email"],
        page_size: 25,
        page_size_options: &[5, 10, 25, 50],
        edit_delete_placeholders: false,
    };

    fn key(&self) -> i64 {
        self.id
    }

    fn field(&self, field: &str) -> FieldValue {
        match field {
            "id" => FieldValue::Int(self.id),
            "name" => FieldValue::Text(self.name.clone()),
            "email" => FieldValue::Text(self.email.clone()),
            "age" => self.age.into(),
            _ => FieldValue::Empty,
        }
    }

    fn details(&self) -> Vec<DetailField> {
        vec![
            DetailField::text("ID", self.id),
            DetailField::text("Nombre y Apellido", self.name.as_str()),
            DetailField::text("Email", self.email.as_str()),
            DetailField::text("Edad", self.age),
        ]
    }
}
