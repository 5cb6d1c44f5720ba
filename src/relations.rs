//! Relationship inference from foreign-key constraints.

use crate::schema::{Relationship, RelationshipType, Schema, parse_reference};

/// Derive relationships from column foreign keys. Pure and additive:
/// the schema is not mutated and existing relationships are not
/// consulted.
///
/// Every column whose `foreign_key` reference resolves to an existing
/// table and column yields a `many-to-one` / `1:N` relationship from
/// the referencing column to the referenced one. Unresolvable
/// references yield nothing; the validator reports those.
pub fn infer_relationships(schema: &Schema) -> Vec<Relationship> {
    let mut relationships = Vec::new();

    for table in &schema.tables {
        for column in &table.columns {
            let Some(reference) = &column.foreign_key else {
                continue;
            };
            let Some((target, target_column)) = parse_reference(reference) else {
                continue;
            };
            let resolves = schema
                .table(target)
                .is_some_and(|t| t.column(target_column).is_some());
            if !resolves {
                continue;
            }
            relationships.push(Relationship::new(
                &table.name,
                &column.name,
                target,
                target_column,
                RelationshipType::ManyToOne,
            ));
        }
    }

    relationships
}
