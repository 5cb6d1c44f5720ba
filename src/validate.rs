//! Consistency checks over a schema.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::schema::{Schema, parse_reference};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Where a finding points. Optional on a finding; schema-wide issues
/// carry none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locator {
    Table(String),
    Column { table: String, column: String },
    /// Index into the schema's relationship list.
    Relationship(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locator: Option<Locator>,
}

impl Finding {
    fn error(message: String, locator: Locator) -> Self {
        Self {
            severity: Severity::Error,
            message,
            locator: Some(locator),
        }
    }

    fn warning(message: String, locator: Locator) -> Self {
        Self {
            severity: Severity::Warning,
            message,
            locator: Some(locator),
        }
    }
}

/// Run the full battery of consistency checks. Read-only and
/// deterministic: the same schema always yields the same findings in
/// the same order (table declaration order, then column order, then
/// relationship index). Never halts early; every finding is collected
/// so a caller can show them all at once.
pub fn validate(schema: &Schema) -> Vec<Finding> {
    let mut findings = Vec::new();

    check_duplicate_tables(schema, &mut findings);
    check_duplicate_columns(schema, &mut findings);
    check_missing_primary_keys(schema, &mut findings);
    check_relationship_endpoints(schema, &mut findings);
    check_relationship_cardinality(schema, &mut findings);
    check_foreign_keys(schema, &mut findings);

    findings
}

/// Check 1: table names must be unique across the schema.
/// One error per duplicate occurrence.
fn check_duplicate_tables(schema: &Schema, findings: &mut Vec<Finding>) {
    let mut seen: HashSet<&str> = HashSet::new();
    for table in &schema.tables {
        if !seen.insert(&table.name) {
            findings.push(Finding::error(
                format!("duplicate table name `{}`", table.name),
                Locator::Table(table.name.clone()),
            ));
        }
    }
}

/// Check 2: column names must be unique within their table.
fn check_duplicate_columns(schema: &Schema, findings: &mut Vec<Finding>) {
    for table in &schema.tables {
        let mut seen: HashSet<&str> = HashSet::new();
        for column in &table.columns {
            if !seen.insert(&column.name) {
                findings.push(Finding::error(
                    format!(
                        "duplicate column name `{}` in table `{}`",
                        column.name, table.name
                    ),
                    Locator::Column {
                        table: table.name.clone(),
                        column: column.name.clone(),
                    },
                ));
            }
        }
    }
}

/// Check 3: a table without any primary key column gets a warning.
fn check_missing_primary_keys(schema: &Schema, findings: &mut Vec<Finding>) {
    for table in &schema.tables {
        if table.primary_key_columns().next().is_none() {
            findings.push(Finding::warning(
                format!("table `{}` has no primary key", table.name),
                Locator::Table(table.name.clone()),
            ));
        }
    }
}

/// Check 4: relationship endpoints must resolve to existing tables and
/// columns.
fn check_relationship_endpoints(schema: &Schema, findings: &mut Vec<Finding>) {
    for (index, rel) in schema.relationships.iter().enumerate() {
        for (table_name, column_name) in [
            (&rel.from_table, &rel.from_column),
            (&rel.to_table, &rel.to_column),
        ] {
            match schema.table(table_name) {
                None => {
                    findings.push(Finding::error(
                        format!(
                            "relationship {} references missing table `{}`",
                            index, table_name
                        ),
                        Locator::Relationship(index),
                    ));
                }
                Some(table) => {
                    if table.column(column_name).is_none() {
                        findings.push(Finding::error(
                            format!(
                                "relationship {} references missing column `{}.{}`",
                                index, table_name, column_name
                            ),
                            Locator::Relationship(index),
                        ));
                    }
                }
            }
        }
    }
}

/// Check 5: cardinality and relationship type must agree
/// (1:1 = one-to-one, 1:N = one-to-many or many-to-one,
/// N:M = many-to-many).
fn check_relationship_cardinality(schema: &Schema, findings: &mut Vec<Finding>) {
    for (index, rel) in schema.relationships.iter().enumerate() {
        if rel.relationship_type.cardinality() != rel.cardinality {
            findings.push(Finding::warning(
                format!(
                    "relationship {} is `{}` but its cardinality is `{}`",
                    index,
                    rel.relationship_type.as_str(),
                    rel.cardinality.as_str()
                ),
                Locator::Relationship(index),
            ));
        }
    }
}

/// Check 6: column foreign keys must be well-formed, resolve, and
/// point at a key. A non-unique referent cannot enforce referential
/// integrity in SQL, so that referent is a warning.
fn check_foreign_keys(schema: &Schema, findings: &mut Vec<Finding>) {
    for table in &schema.tables {
        for column in &table.columns {
            let Some(reference) = &column.foreign_key else {
                continue;
            };
            let locator = Locator::Column {
                table: table.name.clone(),
                column: column.name.clone(),
            };

            let Some((target, target_column)) = parse_reference(reference) else {
                findings.push(Finding::error(
                    format!(
                        "foreign key `{}` on `{}.{}` is not of the form table(column)",
                        reference, table.name, column.name
                    ),
                    locator,
                ));
                continue;
            };

            let Some(target_table) = schema.table(target) else {
                findings.push(Finding::error(
                    format!(
                        "foreign key on `{}.{}` references missing table `{}`",
                        table.name, column.name, target
                    ),
                    locator,
                ));
                continue;
            };

            let Some(referent) = target_table.column(target_column) else {
                findings.push(Finding::error(
                    format!(
                        "foreign key on `{}.{}` references missing column `{}.{}`",
                        table.name, column.name, target, target_column
                    ),
                    locator,
                ));
                continue;
            };

            if !referent.is_unique() {
                findings.push(Finding::warning(
                    format!(
                        "foreign key on `{}.{}` references `{}.{}`, which is neither a primary key nor unique",
                        table.name, column.name, target, target_column
                    ),
                    locator,
                ));
            }
        }
    }
}
