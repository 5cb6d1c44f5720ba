//! SQL dialect handling for DDL generation.

/// Target dialect for generated DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Standard SQL
    #[default]
    Generic,
    /// PostgreSQL: quoted identifiers, serial types
    PostgreSQL,
}

impl Dialect {
    /// Parse dialect from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "generic" => Some(Self::Generic),
            "postgres" | "postgresql" => Some(Self::PostgreSQL),
            _ => None,
        }
    }

    /// Quote an identifier if the dialect requires it.
    pub fn quote_ident(self, ident: &str) -> String {
        match self {
            Self::Generic => ident.to_string(),
            Self::PostgreSQL => {
                if needs_quoting(ident) {
                    format!("\"{}\"", ident.replace('"', "\"\""))
                } else {
                    ident.to_string()
                }
            }
        }
    }

    /// Map a generic type to its dialect spelling for a primary-key
    /// column. PostgreSQL prefers serial types for integer keys.
    pub fn primary_key_type(self, typ: &str) -> String {
        match self {
            Self::Generic => typ.to_string(),
            Self::PostgreSQL => match typ {
                "INT" | "INT4" | "INTEGER" => "SERIAL".to_string(),
                "BIGINT" | "INT8" => "BIGSERIAL".to_string(),
                "SMALLINT" | "INT2" => "SMALLSERIAL".to_string(),
                other => other.to_string(),
            },
        }
    }
}

/// An identifier needs quoting when it is not a plain lowercase word
/// or collides with a reserved word.
fn needs_quoting(ident: &str) -> bool {
    if is_reserved(ident) {
        return true;
    }
    let mut chars = ident.chars();
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() || c == '_' => {}
        _ => return true,
    }
    !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

/// PostgreSQL reserved words that show up as table or column names in
/// practice. Matched case-insensitively.
fn is_reserved(ident: &str) -> bool {
    const RESERVED: &[&str] = &[
        "all", "and", "any", "array", "as", "asc", "between", "both", "case", "cast", "check",
        "collate", "column", "constraint", "create", "cross", "current_date", "current_time",
        "current_timestamp", "current_user", "default", "desc", "distinct", "do", "else", "end",
        "except", "false", "for", "foreign", "from", "full", "grant", "group", "having", "in",
        "initially", "inner", "intersect", "into", "join", "leading", "left", "like", "limit",
        "localtime", "localtimestamp", "natural", "not", "null", "offset", "on", "only", "or",
        "order", "outer", "primary", "references", "returning", "right", "select", "session_user",
        "some", "table", "then", "to", "trailing", "true", "union", "unique", "user", "using",
        "when", "where", "window", "with",
    ];
    let lower = ident.to_lowercase();
    RESERVED.contains(&lower.as_str())
}
