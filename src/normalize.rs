//! Junction-table normalization of many-to-many relationships.

use thiserror::Error;

use crate::schema::{Cardinality, Column, Relationship, RelationshipType, Schema, Table};

#[derive(Debug, Error)]
pub enum NormalizationError {
    #[error("table `{0}` does not exist")]
    MissingTable(String),
    #[error("no many-to-many relationship between `{0}` and `{1}`")]
    MissingRelationship(String, String),
}

/// Rewrite the N:M relationship between `from_table` and `to_table`
/// (matched in either direction) into a junction table plus two 1:N
/// relationships.
///
/// The junction is named `<from>_<to>` and carries a composite primary
/// key of `<from>_id` / `<to>_id`, each a foreign key back to its
/// parent's primary key, plus a `created_at` timestamp.
///
/// Preconditions are checked before any mutation, so a failed call
/// leaves the schema untouched. Callers must serialize concurrent
/// normalizations on the same schema themselves.
pub fn normalize_many_to_many(
    schema: &mut Schema,
    from_table: &str,
    to_table: &str,
) -> Result<(), NormalizationError> {
    let from = schema
        .table(from_table)
        .ok_or_else(|| NormalizationError::MissingTable(from_table.to_string()))?;
    let to = schema
        .table(to_table)
        .ok_or_else(|| NormalizationError::MissingTable(to_table.to_string()))?;

    let connected = schema
        .relationships
        .iter()
        .any(|r| r.cardinality == Cardinality::ManyToMany && r.connects(from_table, to_table));
    if !connected {
        return Err(NormalizationError::MissingRelationship(
            from_table.to_string(),
            to_table.to_string(),
        ));
    }

    let (from_key, from_typ) = parent_key(from);
    let (to_key, to_typ) = parent_key(to);

    schema
        .relationships
        .retain(|r| !(r.cardinality == Cardinality::ManyToMany && r.connects(from_table, to_table)));

    let junction_name = format!("{}_{}", from_table, to_table);
    let from_column = format!("{}_id", from_table);
    let to_column = format!("{}_id", to_table);

    let junction = schema.add_table(&junction_name);
    junction
        .add_column(
            Column::new(&from_column, from_typ)
                .primary_key()
                .references(from_table, &from_key),
        )
        .add_column(
            Column::new(&to_column, to_typ)
                .primary_key()
                .references(to_table, &to_key),
        )
        .add_column(Column::new("created_at", "TIMESTAMP").default_value("CURRENT_TIMESTAMP"));

    schema.relationships.push(Relationship::new(
        from_table,
        &from_key,
        &junction_name,
        &from_column,
        RelationshipType::OneToMany,
    ));
    schema.relationships.push(Relationship::new(
        to_table,
        &to_key,
        &junction_name,
        &to_column,
        RelationshipType::OneToMany,
    ));

    Ok(())
}

/// Name and type of the parent's key column the junction points back
/// at: the first primary-key column, or `id INTEGER` by convention.
fn parent_key(table: &Table) -> (String, String) {
    match table.primary_key_columns().next() {
        Some(pk) => (pk.name.clone(), pk.typ.clone()),
        None => ("id".to_string(), "INTEGER".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;

    fn authors_books() -> Schema {
        let mut schema = Schema::new();
        schema
            .add_table("authors")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(Column::new("name", "VARCHAR(100)").not_null());
        schema
            .add_table("books")
            .add_column(Column::new("id", "INTEGER").primary_key())
            .add_column(Column::new("title", "VARCHAR(200)").not_null());
        schema.relationships.push(Relationship::new(
            "authors",
            "id",
            "books",
            "id",
            RelationshipType::ManyToMany,
        ));
        schema
    }

    #[test]
    fn test_normalize_creates_junction() {
        let mut schema = authors_books();
        normalize_many_to_many(&mut schema, "authors", "books").unwrap();

        let junction = schema.table("authors_books").unwrap();
        assert_eq!(junction.columns.len(), 3);

        let authors_id = junction.column("authors_id").unwrap();
        assert!(authors_id.primary_key);
        assert_eq!(authors_id.typ, "INTEGER");
        assert_eq!(authors_id.foreign_key.as_deref(), Some("authors(id)"));

        let books_id = junction.column("books_id").unwrap();
        assert!(books_id.primary_key);
        assert_eq!(books_id.foreign_key.as_deref(), Some("books(id)"));

        let created_at = junction.column("created_at").unwrap();
        assert_eq!(created_at.typ, "TIMESTAMP");
        assert_eq!(created_at.default_value.as_deref(), Some("CURRENT_TIMESTAMP"));
    }

    #[test]
    fn test_normalize_rewrites_relationships() {
        let mut schema = authors_books();
        normalize_many_to_many(&mut schema, "authors", "books").unwrap();

        assert!(
            !schema
                .relationships
                .iter()
                .any(|r| r.cardinality == Cardinality::ManyToMany
                    && r.connects("authors", "books"))
        );

        let into_junction: Vec<&Relationship> = schema
            .relationships
            .iter()
            .filter(|r| r.to_table == "authors_books")
            .collect();
        assert_eq!(into_junction.len(), 2);
        for rel in &into_junction {
            assert_eq!(rel.relationship_type, RelationshipType::OneToMany);
            assert_eq!(rel.cardinality, Cardinality::OneToMany);
        }
        assert_eq!(into_junction[0].from_table, "authors");
        assert_eq!(into_junction[0].to_column, "authors_id");
        assert_eq!(into_junction[1].from_table, "books");
        assert_eq!(into_junction[1].to_column, "books_id");
    }

    #[test]
    fn test_normalize_matches_either_direction() {
        let mut schema = authors_books();
        // The stored relationship runs authors -> books; normalize the
        // reversed pair
        normalize_many_to_many(&mut schema, "books", "authors").unwrap();

        assert!(schema.table("books_authors").is_some());
        assert!(
            !schema
                .relationships
                .iter()
                .any(|r| r.cardinality == Cardinality::ManyToMany)
        );
    }

    #[test]
    fn test_normalized_schema_validates_clean() {
        let mut schema = authors_books();
        normalize_many_to_many(&mut schema, "authors", "books").unwrap();
        assert!(validate(&schema).is_empty());
    }

    #[test]
    fn test_missing_table_fails_without_mutation() {
        let mut schema = authors_books();
        let before = schema.clone();

        let err = normalize_many_to_many(&mut schema, "x", "y").unwrap_err();
        assert!(matches!(err, NormalizationError::MissingTable(_)));
        assert_eq!(schema, before);
    }

    #[test]
    fn test_missing_relationship_fails_without_mutation() {
        let mut schema = authors_books();
        schema.relationships.clear();
        let before = schema.clone();

        let err = normalize_many_to_many(&mut schema, "authors", "books").unwrap_err();
        assert!(matches!(err, NormalizationError::MissingRelationship(_, _)));
        assert_eq!(schema, before);
    }

    #[test]
    fn test_non_many_to_many_pair_does_not_count() {
        let mut schema = authors_books();
        schema.relationships[0].set_relationship_type(RelationshipType::OneToMany);

        let err = normalize_many_to_many(&mut schema, "authors", "books").unwrap_err();
        assert!(matches!(err, NormalizationError::MissingRelationship(_, _)));
    }

    #[test]
    fn test_junction_key_follows_parent_primary_key() {
        let mut schema = Schema::new();
        schema
            .add_table("tags")
            .add_column(Column::new("slug", "VARCHAR(64)").primary_key());
        schema
            .add_table("posts")
            .add_column(Column::new("id", "BIGINT").primary_key());
        schema.relationships.push(Relationship::new(
            "tags",
            "slug",
            "posts",
            "id",
            RelationshipType::ManyToMany,
        ));

        normalize_many_to_many(&mut schema, "tags", "posts").unwrap();

        let junction = schema.table("tags_posts").unwrap();
        assert_eq!(junction.column("tags_id").unwrap().typ, "VARCHAR(64)");
        assert_eq!(
            junction.column("tags_id").unwrap().foreign_key.as_deref(),
            Some("tags(slug)")
        );
        assert_eq!(junction.column("posts_id").unwrap().typ, "BIGINT");

        let rel = schema
            .relationships
            .iter()
            .find(|r| r.from_table == "tags")
            .unwrap();
        assert_eq!(rel.from_column, "slug");
    }
}
