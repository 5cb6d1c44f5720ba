//! DDL generation from the schema model.

use super::dialect::Dialect;
use crate::schema::{Schema, Table, parse_reference};

/// How foreign keys are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FkStyle {
    /// `REFERENCES table(column)` on the column definition.
    #[default]
    Inline,
    /// `ALTER TABLE .. ADD CONSTRAINT fk_<table>_<column> ..` after all
    /// tables, so creation order never matters.
    NamedConstraints,
}

impl FkStyle {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "inline" => Some(Self::Inline),
            "named" | "constraints" => Some(Self::NamedConstraints),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SqlOptions {
    pub dialect: Dialect,
    pub foreign_keys: FkStyle,
}

/// Generate DDL for the whole schema. Read-only: never consults layout
/// positions, never mutates the schema. Column order follows the
/// table's column order.
pub fn generate_sql(schema: &Schema, options: SqlOptions) -> String {
    let mut statements: Vec<String> = Vec::new();

    for table in &schema.tables {
        statements.push(generate_create_table(table, options));
    }

    if options.foreign_keys == FkStyle::NamedConstraints {
        for table in &schema.tables {
            for column in &table.columns {
                let Some(reference) = &column.foreign_key else {
                    continue;
                };
                // Malformed references are a validator finding; there
                // is nothing sound to emit for them here
                let Some((target, target_column)) = parse_reference(reference) else {
                    continue;
                };
                statements.push(format!(
                    "ALTER TABLE {} ADD CONSTRAINT fk_{}_{} FOREIGN KEY ({}) REFERENCES {}({});",
                    options.dialect.quote_ident(&table.name),
                    table.name,
                    column.name,
                    options.dialect.quote_ident(&column.name),
                    options.dialect.quote_ident(target),
                    options.dialect.quote_ident(target_column),
                ));
            }
        }
    }

    statements.join("\n\n")
}

fn generate_create_table(table: &Table, options: SqlOptions) -> String {
    let dialect = options.dialect;
    let pk_count = table.primary_key_columns().count();

    let mut lines: Vec<String> = Vec::new();
    for column in &table.columns {
        let mut line = format!("{} ", dialect.quote_ident(&column.name));

        // Single-column integer keys become SERIAL in PostgreSQL,
        // unless an explicit default would conflict
        if column.primary_key && pk_count == 1 && column.default_value.is_none() {
            line.push_str(&dialect.primary_key_type(&column.typ));
        } else {
            line.push_str(&column.typ);
        }

        if !column.nullable && !column.primary_key {
            line.push_str(" NOT NULL");
        }
        if column.primary_key && pk_count == 1 {
            line.push_str(" PRIMARY KEY");
        }
        if column.unique && !column.primary_key {
            line.push_str(" UNIQUE");
        }
        if let Some(default) = &column.default_value {
            line.push_str(" DEFAULT ");
            line.push_str(default);
        }
        if options.foreign_keys == FkStyle::Inline {
            if let Some(reference) = &column.foreign_key {
                if let Some((target, target_column)) = parse_reference(reference) {
                    line.push_str(" REFERENCES ");
                    line.push_str(&dialect.quote_ident(target));
                    line.push('(');
                    line.push_str(&dialect.quote_ident(target_column));
                    line.push(')');
                }
            }
        }
        lines.push(line);
    }

    // A composite key is a table-level constraint
    if pk_count > 1 {
        let columns: Vec<String> = table
            .primary_key_columns()
            .map(|c| dialect.quote_ident(&c.name))
            .collect();
        lines.push(format!("PRIMARY KEY ({})", columns.join(", ")));
    }

    format!(
        "CREATE TABLE {} (\n    {}\n);",
        dialect.quote_ident(&table.name),
        lines.join(",\n    ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relations::infer_relationships;
    use crate::schema::Column;
    use crate::sql::parser::parse_sql;

    fn sample() -> Schema {
        let mut schema = Schema::new();
        schema
            .add_table("users")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(Column::new("email", "VARCHAR(255)").not_null().unique());
        schema
            .add_table("orders")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(
                Column::new("user_id", "INTEGER")
                    .not_null()
                    .references("users", "id"),
            )
            .add_column(
                Column::new("status", "VARCHAR(20)").default_value("'pending'"),
            );
        schema
    }

    #[test]
    fn test_generate_inline() {
        let sql = generate_sql(&sample(), SqlOptions::default());

        assert!(sql.contains("CREATE TABLE users (\n    id INTEGER PRIMARY KEY,"));
        assert!(sql.contains("email VARCHAR(255) NOT NULL UNIQUE"));
        assert!(sql.contains("user_id INTEGER NOT NULL REFERENCES users(id)"));
        assert!(sql.contains("status VARCHAR(20) DEFAULT 'pending'"));
        assert!(!sql.contains("ALTER TABLE"));
    }

    #[test]
    fn test_generate_named_constraints() {
        let options = SqlOptions {
            foreign_keys: FkStyle::NamedConstraints,
            ..SqlOptions::default()
        };
        let sql = generate_sql(&sample(), options);

        assert!(!sql.contains("REFERENCES users(id)\n"));
        assert!(sql.contains(
            "ALTER TABLE orders ADD CONSTRAINT fk_orders_user_id \
             FOREIGN KEY (user_id) REFERENCES users(id);"
        ));
        // Tables first, constraints last
        let alter_pos = sql.find("ALTER TABLE").unwrap();
        let last_create = sql.rfind("CREATE TABLE").unwrap();
        assert!(last_create < alter_pos);
    }

    #[test]
    fn test_generate_composite_key() {
        let mut schema = Schema::new();
        schema
            .add_table("memberships")
            .add_column(Column::new("user_id", "INTEGER").primary_key())
            .add_column(Column::new("group_id", "INTEGER").primary_key());

        let sql = generate_sql(&schema, SqlOptions::default());
        assert!(sql.contains("PRIMARY KEY (user_id, group_id)"));
        // No per-column PRIMARY KEY for composite members
        assert!(!sql.contains("INTEGER PRIMARY KEY"));
    }

    #[test]
    fn test_generate_postgres_serial_and_quoting() {
        let mut schema = Schema::new();
        schema
            .add_table("order")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(Column::new("UserId", "BIGINT"));

        let options = SqlOptions {
            dialect: Dialect::PostgreSQL,
            ..SqlOptions::default()
        };
        let sql = generate_sql(&schema, options);

        assert!(sql.contains("CREATE TABLE \"order\" ("));
        assert!(sql.contains("id SERIAL PRIMARY KEY"));
        assert!(sql.contains("\"UserId\" BIGINT"));
    }

    #[test]
    fn test_position_never_emitted() {
        let mut schema = sample();
        schema.table_mut("users").unwrap().position =
            Some(crate::schema::Position { x: 120.0, y: 48.0 });
        let sql = generate_sql(&schema, SqlOptions::default());
        assert!(!sql.contains("120"));
        assert!(!sql.contains("position"));
    }

    // Round trip per the equivalence relation: same table names, same
    // column sets with same constraint flags, same foreign-key targets.
    fn assert_equivalent(a: &Schema, b: &Schema) {
        assert_eq!(a.tables.len(), b.tables.len());
        for (ta, tb) in a.tables.iter().zip(&b.tables) {
            assert_eq!(ta.name, tb.name);
            assert_eq!(ta.columns.len(), tb.columns.len());
            for (ca, cb) in ta.columns.iter().zip(&tb.columns) {
                assert_eq!(ca.name, cb.name);
                assert_eq!(ca.primary_key, cb.primary_key, "{}.{}", ta.name, ca.name);
                assert_eq!(ca.is_nullable(), cb.is_nullable(), "{}.{}", ta.name, ca.name);
                assert_eq!(ca.is_unique(), cb.is_unique(), "{}.{}", ta.name, ca.name);
                assert_eq!(ca.foreign_key, cb.foreign_key, "{}.{}", ta.name, ca.name);
            }
        }
    }

    #[test]
    fn test_round_trip_inline() {
        let original = sample();
        let sql = generate_sql(&original, SqlOptions::default());
        let mut reparsed = parse_sql(&sql).unwrap();
        reparsed.relationships = infer_relationships(&reparsed);

        assert_equivalent(&original, &reparsed);
        assert_eq!(reparsed.relationships.len(), 1);
        assert_eq!(reparsed.relationships[0].from_table, "orders");
        assert_eq!(reparsed.relationships[0].to_table, "users");
    }

    #[test]
    fn test_round_trip_named_constraints() {
        let original = sample();
        let options = SqlOptions {
            foreign_keys: FkStyle::NamedConstraints,
            ..SqlOptions::default()
        };
        let sql = generate_sql(&original, options);
        let mut reparsed = parse_sql(&sql).unwrap();
        reparsed.relationships = infer_relationships(&reparsed);

        assert_equivalent(&original, &reparsed);
        assert_eq!(reparsed.relationships.len(), 1);
    }

    #[test]
    fn test_round_trip_composite_key() {
        let mut original = Schema::new();
        original
            .add_table("memberships")
            .add_column(Column::new("user_id", "INTEGER").primary_key())
            .add_column(Column::new("group_id", "INTEGER").primary_key())
            .add_column(Column::new("joined_at", "TIMESTAMP"));

        let sql = generate_sql(&original, SqlOptions::default());
        let reparsed = parse_sql(&sql).unwrap();
        assert_equivalent(&original, &reparsed);
    }
}
