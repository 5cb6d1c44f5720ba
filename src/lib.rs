pub mod normalize;
pub mod relations;
pub mod schema;
pub mod sql;
pub mod validate;

use wasm_bindgen::prelude::*;

use schema::Schema;
use sql::{Dialect, FkStyle, SqlOptions};

/// Initialize panic hook for better error messages in WASM
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();
}

/// Parse DDL text into a schema, with relationships inferred from
/// foreign keys. Returns the schema as JSON.
#[wasm_bindgen(js_name = "parseSql")]
pub fn parse_sql_json(ddl: &str) -> Result<String, String> {
    let mut schema = sql::parse_sql(ddl).map_err(|e| e.to_string())?;
    schema.relationships = relations::infer_relationships(&schema);
    serde_json::to_string(&schema).map_err(|e| e.to_string())
}

/// Generate DDL text from a schema given as JSON.
#[wasm_bindgen(js_name = "generateSql")]
pub fn generate_sql_json(
    schema_json: &str,
    dialect: Option<String>,
    fk_style: Option<String>,
) -> Result<String, String> {
    let schema: Schema = serde_json::from_str(schema_json).map_err(|e| e.to_string())?;

    let dialect = dialect
        .as_deref()
        .and_then(Dialect::from_str)
        .unwrap_or_default();
    let foreign_keys = fk_style
        .as_deref()
        .and_then(FkStyle::from_str)
        .unwrap_or_default();

    Ok(sql::generate_sql(
        &schema,
        SqlOptions {
            dialect,
            foreign_keys,
        },
    ))
}

/// Validate a schema given as JSON. Returns the findings as JSON.
#[wasm_bindgen(js_name = "validateSchema")]
pub fn validate_schema_json(schema_json: &str) -> Result<String, String> {
    let schema: Schema = serde_json::from_str(schema_json).map_err(|e| e.to_string())?;
    serde_json::to_string(&validate::validate(&schema)).map_err(|e| e.to_string())
}

/// Replace the N:M relationship between two tables with a junction
/// table. Takes and returns the schema as JSON.
#[wasm_bindgen(js_name = "normalizeManyToMany")]
pub fn normalize_many_to_many_json(
    schema_json: &str,
    from_table: &str,
    to_table: &str,
) -> Result<String, String> {
    let mut schema: Schema = serde_json::from_str(schema_json).map_err(|e| e.to_string())?;
    normalize::normalize_many_to_many(&mut schema, from_table, to_table)
        .map_err(|e| e.to_string())?;
    serde_json::to_string(&schema).map_err(|e| e.to_string())
}
