//! In-memory schema model: tables, columns and relationships.

use serde::{Deserialize, Serialize};

/// Stable table identity, independent of the display name.
///
/// Renaming a table keeps its id, so external callers (e.g. a rendering
/// layer holding node state) can track tables across renames. The core
/// itself resolves relationships by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TableId(pub u32);

/// Layout position owned by the rendering layer. Opaque to the core:
/// parser, generator, validator and normalizer never read it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub typ: String,
    #[serde(default = "default_true")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
    /// Reference string of the form `table(column)`.
    #[serde(default)]
    pub foreign_key: Option<String>,
    /// Raw default expression, unparsed.
    #[serde(rename = "default", default)]
    pub default_value: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Column {
    pub fn new(name: impl Into<String>, typ: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            typ: typ.into(),
            nullable: true,
            primary_key: false,
            unique: false,
            foreign_key: None,
            default_value: None,
        }
    }

    /// Mark as primary key. Forces the column non-nullable.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn default_value(mut self, expr: impl Into<String>) -> Self {
        self.default_value = Some(expr.into());
        self
    }

    pub fn references(mut self, table: &str, column: &str) -> Self {
        self.foreign_key = Some(format!("{}({})", table, column));
        self
    }

    /// A primary key is implicitly unique even when the flag is unset.
    pub fn is_unique(&self) -> bool {
        self.unique || self.primary_key
    }

    /// A primary key is implicitly non-nullable even when the flag is unset.
    pub fn is_nullable(&self) -> bool {
        self.nullable && !self.primary_key
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default)]
    pub id: TableId,
    pub name: String,
    /// Ordered: DDL column order, also composite-key ordering.
    pub columns: Vec<Column>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Table {
    pub fn new(id: TableId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            columns: Vec::new(),
            position: None,
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn add_column(&mut self, column: Column) -> &mut Self {
        self.columns.push(column);
        self
    }

    /// Columns flagged as primary key, in declaration order.
    pub fn primary_key_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.primary_key)
    }
}

/// Relationship multiplicity class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cardinality {
    #[serde(rename = "1:1")]
    OneToOne,
    #[serde(rename = "1:N")]
    OneToMany,
    #[serde(rename = "N:M")]
    ManyToMany,
}

impl Cardinality {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneToOne => "1:1",
            Self::OneToMany => "1:N",
            Self::ManyToMany => "N:M",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RelationshipType {
    #[serde(rename = "one-to-one")]
    OneToOne,
    #[serde(rename = "one-to-many")]
    OneToMany,
    #[serde(rename = "many-to-one")]
    ManyToOne,
    #[serde(rename = "many-to-many")]
    ManyToMany,
}

impl RelationshipType {
    /// The cardinality class this type belongs to. `one-to-many` and
    /// `many-to-one` are synonyms under `1:N`.
    pub fn cardinality(self) -> Cardinality {
        match self {
            Self::OneToOne => Cardinality::OneToOne,
            Self::OneToMany | Self::ManyToOne => Cardinality::OneToMany,
            Self::ManyToMany => Cardinality::ManyToMany,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::OneToOne => "one-to-one",
            Self::OneToMany => "one-to-many",
            Self::ManyToOne => "many-to-one",
            Self::ManyToMany => "many-to-many",
        }
    }
}

/// Directed connection between two columns, endpoints keyed by table name.
///
/// Constructed values always keep `cardinality` consistent with
/// `relationship_type`; deserialized values may disagree, which the
/// validator reports as a warning instead of rejecting the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RelationshipWire")]
pub struct Relationship {
    pub from_table: String,
    pub from_column: String,
    pub to_table: String,
    pub to_column: String,
    pub relationship_type: RelationshipType,
    pub cardinality: Cardinality,
}

/// Wire form: `cardinality` may be absent (derived from the type) and
/// `relationship_type` defaults to `one-to-many`.
#[derive(Deserialize)]
struct RelationshipWire {
    from_table: String,
    from_column: String,
    to_table: String,
    to_column: String,
    #[serde(default = "default_relationship_type")]
    relationship_type: RelationshipType,
    cardinality: Option<Cardinality>,
}

fn default_relationship_type() -> RelationshipType {
    RelationshipType::OneToMany
}

impl From<RelationshipWire> for Relationship {
    fn from(wire: RelationshipWire) -> Self {
        Self {
            from_table: wire.from_table,
            from_column: wire.from_column,
            to_table: wire.to_table,
            to_column: wire.to_column,
            relationship_type: wire.relationship_type,
            cardinality: wire
                .cardinality
                .unwrap_or_else(|| wire.relationship_type.cardinality()),
        }
    }
}

impl Relationship {
    pub fn new(
        from_table: impl Into<String>,
        from_column: impl Into<String>,
        to_table: impl Into<String>,
        to_column: impl Into<String>,
        relationship_type: RelationshipType,
    ) -> Self {
        Self {
            from_table: from_table.into(),
            from_column: from_column.into(),
            to_table: to_table.into(),
            to_column: to_column.into(),
            relationship_type,
            cardinality: relationship_type.cardinality(),
        }
    }

    /// Change the type, re-deriving the cardinality.
    pub fn set_relationship_type(&mut self, relationship_type: RelationshipType) {
        self.relationship_type = relationship_type;
        self.cardinality = relationship_type.cardinality();
    }

    /// Change the cardinality, re-deriving the type. An already
    /// consistent type is kept, so `many-to-one` survives a `1:N` set.
    pub fn set_cardinality(&mut self, cardinality: Cardinality) {
        self.cardinality = cardinality;
        if self.relationship_type.cardinality() != cardinality {
            self.relationship_type = match cardinality {
                Cardinality::OneToOne => RelationshipType::OneToOne,
                Cardinality::OneToMany => RelationshipType::OneToMany,
                Cardinality::ManyToMany => RelationshipType::ManyToMany,
            };
        }
    }

    /// Undirected endpoint match on table names.
    pub fn connects(&self, a: &str, b: &str) -> bool {
        (self.from_table == a && self.to_table == b)
            || (self.from_table == b && self.to_table == a)
    }

    pub fn touches(&self, table: &str) -> bool {
        self.from_table == table || self.to_table == table
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    pub tables: Vec<Table>,
    #[serde(default)]
    pub relationships: Vec<Relationship>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_table_id(&self) -> TableId {
        TableId(
            self.tables
                .iter()
                .map(|t| t.id.0)
                .max()
                .map_or(0, |m| m + 1),
        )
    }

    /// Append a new empty table and return it for column population.
    pub fn add_table(&mut self, name: impl Into<String>) -> &mut Table {
        let table = Table::new(self.next_table_id(), name);
        self.tables.push(table);
        self.tables.last_mut().unwrap()
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn table_mut(&mut self, name: &str) -> Option<&mut Table> {
        self.tables.iter_mut().find(|t| t.name == name)
    }

    /// Remove a table by name, cascading to every relationship that
    /// references it by either endpoint.
    pub fn remove_table(&mut self, name: &str) -> bool {
        let before = self.tables.len();
        self.tables.retain(|t| t.name != name);
        if self.tables.len() == before {
            return false;
        }
        self.relationships.retain(|r| !r.touches(name));
        true
    }

    /// Rename a table, rewriting every relationship endpoint and every
    /// column `foreign_key` string that references the old name.
    pub fn rename_table(&mut self, old: &str, new: &str) -> bool {
        let Some(table) = self.table_mut(old) else {
            return false;
        };
        table.name = new.to_string();

        for rel in &mut self.relationships {
            if rel.from_table == old {
                rel.from_table = new.to_string();
            }
            if rel.to_table == old {
                rel.to_table = new.to_string();
            }
        }
        for table in &mut self.tables {
            for column in &mut table.columns {
                let rewritten = column.foreign_key.as_deref().and_then(|fk| {
                    parse_reference(fk).and_then(|(target, target_column)| {
                        (target == old).then(|| format!("{}({})", new, target_column))
                    })
                });
                if rewritten.is_some() {
                    column.foreign_key = rewritten;
                }
            }
        }
        true
    }
}

/// Split a foreign-key reference of the form `table(column)`.
/// Returns `None` unless both parts are plain identifiers.
pub fn parse_reference(reference: &str) -> Option<(&str, &str)> {
    let open = reference.find('(')?;
    let (table, rest) = reference.split_at(open);
    let column = rest.strip_prefix('(')?.strip_suffix(')')?;
    if is_identifier(table) && is_identifier(column) {
        Some((table, column))
    } else {
        None
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}
