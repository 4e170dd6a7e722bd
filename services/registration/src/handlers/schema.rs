use axum::Json;
use serde::Serialize;

// ── GET /schema ──────────────────────────────────────────────────────────────

/// Static description of the registration store, the API counterpart of the
/// schema diagram view: table names, columns and the foreign keys between
/// them. It documents the shape the migrations create; it is not introspected
/// from the live database.
#[derive(Serialize)]
pub struct TableDescription {
    pub name: &'static str,
    pub columns: Vec<ColumnDescription>,
}

#[derive(Serialize)]
pub struct ColumnDescription {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub data_type: &'static str,
    pub nullable: bool,
    pub primary_key: bool,
    pub unique: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<&'static str>,
}

fn column(name: &'static str, data_type: &'static str) -> ColumnDescription {
    ColumnDescription {
        name,
        data_type,
        nullable: false,
        primary_key: false,
        unique: false,
        references: None,
    }
}

fn primary_key(name: &'static str) -> ColumnDescription {
    ColumnDescription {
        primary_key: true,
        unique: true,
        ..column(name, "uuid")
    }
}

fn foreign_key(name: &'static str, table: &'static str) -> ColumnDescription {
    ColumnDescription {
        references: Some(table),
        ..column(name, "uuid")
    }
}

fn nullable(mut col: ColumnDescription) -> ColumnDescription {
    col.nullable = true;
    col
}

fn unique(mut col: ColumnDescription) -> ColumnDescription {
    col.unique = true;
    col
}

pub fn schema_description() -> Vec<TableDescription> {
    vec![
        TableDescription {
            name: "countries",
            columns: vec![
                primary_key("id"),
                column("country_code", "text"),
                column("country_name", "text"),
            ],
        },
        TableDescription {
            name: "contacts",
            columns: vec![
                primary_key("id"),
                nullable(column("address", "text")),
                foreign_key("country_id", "countries"),
                column("phone", "text"),
                nullable(column("cell_phone", "text")),
                nullable(column("emergency_name", "text")),
                nullable(column("emergency_phone", "text")),
            ],
        },
        TableDescription {
            name: "document_types",
            columns: vec![
                primary_key("id"),
                column("name", "text"),
                column("document", "text"),
            ],
        },
        TableDescription {
            name: "users",
            columns: vec![
                primary_key("id"),
                column("name", "text"),
                column("lastname", "text"),
                unique(column("email", "text")),
                column("password", "text"),
                unique(column("document_number", "text")),
                column("document_type", "text"),
                foreign_key("document_type_id", "document_types"),
                foreign_key("contact_id", "contacts"),
                column("created_at", "timestamptz"),
                column("updated_at", "timestamptz"),
            ],
        },
    ]
}

pub async fn get_schema() -> Json<Vec<TableDescription>> {
    Json(schema_description())
}
