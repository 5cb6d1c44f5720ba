//! SQL parser for CREATE TABLE statements.

use super::lexer::{Lexer, Token};
use crate::schema::{Column, Schema};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("statement {index}: unterminated statement (unbalanced parentheses)")]
    Unterminated { index: usize },
    #[error("statement {index}: unsupported statement")]
    Unsupported { index: usize },
    #[error("statement {index}: expected {expected}, found {found}")]
    Expected {
        index: usize,
        expected: String,
        found: String,
    },
    #[error("statement {index}: unknown constraint keyword {found}")]
    UnknownConstraint { index: usize, found: String },
    #[error("statement {index}: malformed column definition `{column}`, found {found}")]
    MalformedColumn {
        index: usize,
        column: String,
        found: String,
    },
    #[error("statement {index}: constraint references unknown column `{column}` in table `{table}`")]
    UnknownColumn {
        index: usize,
        table: String,
        column: String,
    },
    #[error("statement {index}: unknown table `{table}`")]
    UnknownTable { index: usize, table: String },
}

/// Parse DDL text into a Schema. Tables only; relationships are the
/// inferencer's job. Fails fast on the first malformed statement, with
/// the zero-based statement index in the error.
pub fn parse_sql(input: &str) -> Result<Schema, ParseError> {
    let tokens = Lexer::new(input).tokenize();
    let statements = split_statements(&tokens)?;

    let mut schema = Schema::new();
    for (index, statement) in statements.iter().enumerate() {
        StatementParser::new(statement, index).parse_into(&mut schema)?;
    }
    Ok(schema)
}

/// Split the token stream into statements on top-level `;`.
/// Type parameters and column lists keep nested parentheses balanced,
/// so a `;` inside parentheses never ends a statement.
fn split_statements(tokens: &[Token]) -> Result<Vec<&[Token]>, ParseError> {
    let mut statements = Vec::new();
    let mut start = 0;
    let mut depth: usize = 0;

    for (i, token) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            Token::Semicolon if depth == 0 => {
                if i > start {
                    statements.push(&tokens[start..i]);
                }
                start = i + 1;
            }
            Token::Eof => {
                if depth > 0 {
                    return Err(ParseError::Unterminated {
                        index: statements.len(),
                    });
                }
                // Trailing statement without a terminator
                if i > start {
                    statements.push(&tokens[start..i]);
                }
            }
            _ => {}
        }
    }
    Ok(statements)
}

/// A foreign key found at table level or in an ALTER statement,
/// folded onto its column once the owning table is known.
struct FkConstraint {
    column: String,
    target: String,
    target_column: String,
}

struct StatementParser<'a> {
    tokens: &'a [Token],
    pos: usize,
    index: usize,
}

impl<'a> StatementParser<'a> {
    fn new(tokens: &'a [Token], index: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            index,
        }
    }

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn expected(&self, what: &str) -> ParseError {
        ParseError::Expected {
            index: self.index,
            expected: what.to_string(),
            found: self.current().describe(),
        }
    }

    fn parse_into(mut self, schema: &mut Schema) -> Result<(), ParseError> {
        match self.current() {
            Token::Create => self.parse_create_table(schema),
            Token::Alter => self.parse_alter_table_fk(schema),
            _ => Err(ParseError::Unsupported { index: self.index }),
        }
    }

    fn parse_create_table(&mut self, schema: &mut Schema) -> Result<(), ParseError> {
        self.advance(); // CREATE

        if self.current() != &Token::Table {
            // CREATE INDEX, CREATE VIEW etc. are outside the DDL subset
            return Err(ParseError::Unsupported { index: self.index });
        }
        self.advance();

        // IF NOT EXISTS
        if self.current() == &Token::If {
            self.advance();
            if self.current() != &Token::Not {
                return Err(self.expected("NOT EXISTS"));
            }
            self.advance();
            if self.current() != &Token::Exists {
                return Err(self.expected("EXISTS"));
            }
            self.advance();
        }

        let name = self.parse_table_name()?;

        if self.current() != &Token::LParen {
            return Err(self.expected("`(`"));
        }
        self.advance();

        let mut columns: Vec<Column> = Vec::new();
        let mut pk_columns: Vec<String> = Vec::new();
        let mut unique_columns: Vec<String> = Vec::new();
        let mut fk_constraints: Vec<FkConstraint> = Vec::new();

        loop {
            match self.current() {
                Token::RParen => {
                    self.advance();
                    break;
                }
                Token::Comma => {
                    self.advance();
                }
                Token::Constraint => {
                    // CONSTRAINT <name> <constraint>; the name is dropped
                    self.advance();
                    if !matches!(self.current(), Token::Ident(_)) {
                        return Err(self.expected("constraint name"));
                    }
                    self.advance();
                }
                Token::Primary => {
                    // PRIMARY KEY (col, ...)
                    self.advance();
                    if self.current() != &Token::Key {
                        return Err(self.expected("KEY"));
                    }
                    self.advance();
                    pk_columns.extend(self.parse_column_list()?);
                }
                Token::Unique => {
                    // UNIQUE (col, ...)
                    self.advance();
                    unique_columns.extend(self.parse_column_list()?);
                }
                Token::Foreign => {
                    fk_constraints.push(self.parse_foreign_key_constraint()?);
                }
                Token::Ident(_) => {
                    columns.push(self.parse_column()?);
                }
                Token::Eof => {
                    return Err(ParseError::Unterminated { index: self.index });
                }
                other => {
                    return Err(ParseError::UnknownConstraint {
                        index: self.index,
                        found: other.describe(),
                    });
                }
            }
        }

        // Anything after the closing paren (table options, etc.) is
        // outside the subset; fail fast instead of dropping it.
        if self.current() != &Token::Eof {
            return Err(self.expected("end of statement"));
        }

        // Fold table-level constraints back onto the named columns
        for pk in &pk_columns {
            let column = Self::find_column(&mut columns, pk).ok_or_else(|| {
                ParseError::UnknownColumn {
                    index: self.index,
                    table: name.clone(),
                    column: pk.clone(),
                }
            })?;
            column.primary_key = true;
            column.nullable = false;
        }
        for uq in &unique_columns {
            let column = Self::find_column(&mut columns, uq).ok_or_else(|| {
                ParseError::UnknownColumn {
                    index: self.index,
                    table: name.clone(),
                    column: uq.clone(),
                }
            })?;
            column.unique = true;
        }
        for fk in &fk_constraints {
            let column = Self::find_column(&mut columns, &fk.column).ok_or_else(|| {
                ParseError::UnknownColumn {
                    index: self.index,
                    table: name.clone(),
                    column: fk.column.clone(),
                }
            })?;
            column.foreign_key = Some(format!("{}({})", fk.target, fk.target_column));
        }

        let table = schema.add_table(name);
        table.columns = columns;
        Ok(())
    }

    fn find_column<'c>(columns: &'c mut [Column], name: &str) -> Option<&'c mut Column> {
        columns.iter_mut().find(|c| c.name == name)
    }

    /// Table name, accepting `schema.table` and keeping the table part.
    fn parse_table_name(&mut self) -> Result<String, ParseError> {
        let first = match self.current() {
            Token::Ident(name) => name.clone(),
            _ => return Err(self.expected("table name")),
        };
        self.advance();

        if self.current() == &Token::Dot {
            self.advance();
            let name = match self.current() {
                Token::Ident(name) => name.clone(),
                _ => return Err(self.expected("table name after `.`")),
            };
            self.advance();
            return Ok(name);
        }
        Ok(first)
    }

    fn parse_column(&mut self) -> Result<Column, ParseError> {
        let name = match self.current() {
            Token::Ident(n) => n.clone(),
            _ => return Err(self.expected("column name")),
        };
        self.advance();

        let typ = self.parse_type(&name)?;
        let mut column = Column::new(name.clone(), typ);

        loop {
            match self.current() {
                Token::Primary => {
                    self.advance();
                    if self.current() != &Token::Key {
                        return Err(self.expected("KEY"));
                    }
                    self.advance();
                    column.primary_key = true;
                    column.nullable = false;
                }
                Token::Not => {
                    self.advance();
                    if self.current() != &Token::Null {
                        return Err(self.expected("NULL"));
                    }
                    self.advance();
                    column.nullable = false;
                }
                Token::Null => {
                    self.advance();
                }
                Token::Unique => {
                    self.advance();
                    column.unique = true;
                }
                Token::Default => {
                    self.advance();
                    column.default_value = Some(self.parse_default_value()?);
                }
                Token::References => {
                    self.advance();
                    let (target, target_column) = self.parse_reference()?;
                    column.foreign_key = Some(format!("{}({})", target, target_column));
                    self.skip_referential_actions()?;
                }
                Token::Constraint => {
                    // Inline named constraint; the name is dropped
                    self.advance();
                    if !matches!(self.current(), Token::Ident(_)) {
                        return Err(self.expected("constraint name"));
                    }
                    self.advance();
                }
                Token::Comma | Token::RParen | Token::Eof => break,
                other => {
                    return Err(ParseError::MalformedColumn {
                        index: self.index,
                        column: name,
                        found: other.describe(),
                    });
                }
            }
        }

        Ok(column)
    }

    /// Raw type token: base word(s) plus optional length/precision,
    /// e.g. `VARCHAR(255)`, `DECIMAL(10,2)`, `DOUBLE PRECISION`.
    fn parse_type(&mut self, column: &str) -> Result<String, ParseError> {
        let mut typ = match self.current() {
            Token::Ident(t) => t.to_uppercase(),
            _ => {
                return Err(ParseError::MalformedColumn {
                    index: self.index,
                    column: column.to_string(),
                    found: self.current().describe(),
                });
            }
        };
        self.advance();

        // Two-word type names; any other trailing identifier is an
        // unrecognized modifier and errors in the caller's loop
        if let Token::Ident(word) = self.current() {
            let upper = word.to_uppercase();
            if upper == "PRECISION" || upper == "VARYING" {
                typ.push(' ');
                typ.push_str(&upper);
                self.advance();
            }
        }

        if self.current() == &Token::LParen {
            typ.push('(');
            self.advance();
            let mut depth = 1;
            while depth > 0 {
                match self.current() {
                    Token::LParen => {
                        depth += 1;
                        typ.push('(');
                        self.advance();
                    }
                    Token::RParen => {
                        depth -= 1;
                        typ.push(')');
                        self.advance();
                    }
                    Token::Num(n) => {
                        typ.push_str(n);
                        self.advance();
                    }
                    Token::Ident(s) => {
                        typ.push_str(&s.to_uppercase());
                        self.advance();
                    }
                    Token::Comma => {
                        typ.push(',');
                        self.advance();
                    }
                    Token::Eof => {
                        return Err(ParseError::Unterminated { index: self.index });
                    }
                    other => {
                        return Err(ParseError::MalformedColumn {
                            index: self.index,
                            column: column.to_string(),
                            found: other.describe(),
                        });
                    }
                }
            }
        }

        Ok(typ)
    }

    /// Default expression, captured as canonical SQL text.
    fn parse_default_value(&mut self) -> Result<String, ParseError> {
        match self.current().clone() {
            Token::Str(s) => {
                self.advance();
                Ok(format!("'{}'", s.replace('\'', "''")))
            }
            Token::Num(n) => {
                self.advance();
                Ok(n)
            }
            Token::Null => {
                self.advance();
                Ok("NULL".to_string())
            }
            Token::Ident(s) => {
                self.advance();
                let mut value = s;
                // Function call like NOW() or nullary keyword like
                // CURRENT_TIMESTAMP
                if self.current() == &Token::LParen {
                    value.push('(');
                    value.push_str(&self.collect_parenthesized()?);
                    value.push(')');
                }
                Ok(value)
            }
            Token::LParen => {
                // Parenthesized expression, captured raw
                Ok(format!("({})", self.collect_parenthesized()?))
            }
            other => Err(self.unexpected_default(other.describe())),
        }
    }

    /// Content of a balanced parenthesized group, with the current
    /// token on the opening paren. Leaves the position past the
    /// matching close paren.
    fn collect_parenthesized(&mut self) -> Result<String, ParseError> {
        self.advance(); // (
        let mut depth = 1;
        let mut inner = String::new();
        while depth > 0 {
            match self.current() {
                Token::LParen => {
                    depth += 1;
                    inner.push('(');
                }
                Token::RParen => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        break;
                    }
                    inner.push(')');
                }
                Token::Ident(s) => inner.push_str(s),
                Token::Num(n) => inner.push_str(n),
                Token::Str(s) => {
                    inner.push('\'');
                    inner.push_str(&s.replace('\'', "''"));
                    inner.push('\'');
                }
                Token::Comma => inner.push_str(", "),
                Token::Eof => return Err(ParseError::Unterminated { index: self.index }),
                other => {
                    return Err(self.unexpected_default(other.describe()));
                }
            }
            if depth > 0 {
                self.advance();
            }
        }
        Ok(inner)
    }

    fn unexpected_default(&self, found: String) -> ParseError {
        ParseError::Expected {
            index: self.index,
            expected: "default expression".to_string(),
            found,
        }
    }

    /// `<table>(<column>)` after REFERENCES, accepting `schema.table`.
    fn parse_reference(&mut self) -> Result<(String, String), ParseError> {
        let mut target = match self.current() {
            Token::Ident(t) => t.clone(),
            _ => return Err(self.expected("referenced table")),
        };
        self.advance();

        if self.current() == &Token::Dot {
            self.advance();
            target = match self.current() {
                Token::Ident(t) => t.clone(),
                _ => return Err(self.expected("referenced table after `.`")),
            };
            self.advance();
        }

        if self.current() != &Token::LParen {
            return Err(self.expected("`(` after referenced table"));
        }
        self.advance();

        let column = match self.current() {
            Token::Ident(c) => c.clone(),
            _ => return Err(self.expected("referenced column")),
        };
        self.advance();

        if self.current() != &Token::RParen {
            return Err(self.expected("`)` after referenced column"));
        }
        self.advance();

        Ok((target, column))
    }

    /// FOREIGN KEY (col) REFERENCES table(col)
    fn parse_foreign_key_constraint(&mut self) -> Result<FkConstraint, ParseError> {
        self.advance(); // FOREIGN
        if self.current() != &Token::Key {
            return Err(self.expected("KEY"));
        }
        self.advance();

        let columns = self.parse_column_list()?;
        if columns.len() != 1 {
            return Err(ParseError::Expected {
                index: self.index,
                expected: "a single foreign key column".to_string(),
                found: format!("{} columns", columns.len()),
            });
        }

        if self.current() != &Token::References {
            return Err(self.expected("REFERENCES"));
        }
        self.advance();

        let (target, target_column) = self.parse_reference()?;
        self.skip_referential_actions()?;

        Ok(FkConstraint {
            column: columns.into_iter().next().unwrap_or_default(),
            target,
            target_column,
        })
    }

    /// `(col, col, ...)`
    fn parse_column_list(&mut self) -> Result<Vec<String>, ParseError> {
        if self.current() != &Token::LParen {
            return Err(self.expected("`(`"));
        }
        self.advance();

        let mut columns = Vec::new();
        loop {
            match self.current() {
                Token::Ident(name) => {
                    columns.push(name.clone());
                    self.advance();
                }
                _ => return Err(self.expected("column name")),
            }
            match self.current() {
                Token::Comma => self.advance(),
                Token::RParen => {
                    self.advance();
                    break;
                }
                _ => return Err(self.expected("`,` or `)`")),
            }
        }
        Ok(columns)
    }

    /// ON DELETE / ON UPDATE actions are recognized and discarded;
    /// the model does not carry referential actions.
    fn skip_referential_actions(&mut self) -> Result<(), ParseError> {
        while self.current() == &Token::On {
            self.advance();
            if !matches!(self.current(), Token::Delete | Token::Update) {
                return Err(self.expected("DELETE or UPDATE"));
            }
            self.advance();
            match self.current() {
                Token::Cascade | Token::Restrict => self.advance(),
                Token::Ident(s) if s.eq_ignore_ascii_case("SET") => {
                    self.advance();
                    if !matches!(self.current(), Token::Null | Token::Default) {
                        return Err(self.expected("NULL or DEFAULT"));
                    }
                    self.advance();
                }
                Token::Ident(s) if s.eq_ignore_ascii_case("NO") => {
                    self.advance();
                    match self.current() {
                        Token::Ident(a) if a.eq_ignore_ascii_case("ACTION") => self.advance(),
                        _ => return Err(self.expected("ACTION")),
                    }
                }
                _ => return Err(self.expected("referential action")),
            }
        }
        Ok(())
    }

    /// ALTER TABLE <t> ADD [CONSTRAINT <n>] FOREIGN KEY (c) REFERENCES t(c)
    fn parse_alter_table_fk(&mut self, schema: &mut Schema) -> Result<(), ParseError> {
        self.advance(); // ALTER
        if self.current() != &Token::Table {
            return Err(ParseError::Unsupported { index: self.index });
        }
        self.advance();

        let table_name = self.parse_table_name()?;

        if self.current() != &Token::Add {
            return Err(ParseError::Unsupported { index: self.index });
        }
        self.advance();

        if self.current() == &Token::Constraint {
            self.advance();
            if !matches!(self.current(), Token::Ident(_)) {
                return Err(self.expected("constraint name"));
            }
            self.advance();
        }

        if self.current() != &Token::Foreign {
            return Err(ParseError::Unsupported { index: self.index });
        }
        let fk = self.parse_foreign_key_constraint()?;

        if self.current() != &Token::Eof {
            return Err(self.expected("end of statement"));
        }

        let index = self.index;
        let table = schema
            .table_mut(&table_name)
            .ok_or_else(|| ParseError::UnknownTable {
                index,
                table: table_name.clone(),
            })?;
        let column = table
            .columns
            .iter_mut()
            .find(|c| c.name == fk.column)
            .ok_or_else(|| ParseError::UnknownColumn {
                index,
                table: table_name.clone(),
                column: fk.column.clone(),
            })?;
        column.foreign_key = Some(format!("{}({})", fk.target, fk.target_column));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_table() {
        let sql = r#"
            CREATE TABLE users (
                id INT PRIMARY KEY,
                email VARCHAR(255) NOT NULL UNIQUE
            );
        "#;

        let schema = parse_sql(sql).unwrap();
        assert_eq!(schema.tables.len(), 1);

        let users = &schema.tables[0];
        assert_eq!(users.name, "users");
        assert_eq!(users.columns.len(), 2);

        let id = &users.columns[0];
        assert_eq!(id.name, "id");
        assert_eq!(id.typ, "INT");
        assert!(id.primary_key);
        assert!(!id.nullable);

        let email = &users.columns[1];
        assert_eq!(email.typ, "VARCHAR(255)");
        assert!(!email.nullable);
        assert!(email.unique);
        assert!(!email.primary_key);
    }

    #[test]
    fn test_parse_inline_foreign_key() {
        let sql = r#"
            CREATE TABLE users (id INT PRIMARY KEY);
            CREATE TABLE orders (
                id INT PRIMARY KEY,
                user_id INT REFERENCES users(id)
            );
        "#;

        let schema = parse_sql(sql).unwrap();
        assert_eq!(schema.tables.len(), 2);
        // Parsing alone never creates relationships
        assert!(schema.relationships.is_empty());

        let fk = schema.tables[1].columns[1].foreign_key.as_deref();
        assert_eq!(fk, Some("users(id)"));
    }

    #[test]
    fn test_parse_table_level_constraints() {
        let sql = r#"
            CREATE TABLE memberships (
                user_id INT,
                group_id INT,
                nickname VARCHAR(40),
                PRIMARY KEY (user_id, group_id),
                UNIQUE (nickname),
                FOREIGN KEY (user_id) REFERENCES users(id)
            );
        "#;

        let schema = parse_sql(sql).unwrap();
        let table = &schema.tables[0];

        let user_id = table.column("user_id").unwrap();
        assert!(user_id.primary_key);
        assert!(!user_id.nullable);
        assert_eq!(user_id.foreign_key.as_deref(), Some("users(id)"));

        assert!(table.column("group_id").unwrap().primary_key);
        assert!(table.column("nickname").unwrap().unique);
    }

    #[test]
    fn test_parse_named_constraint() {
        let sql = r#"
            CREATE TABLE t (
                a INT,
                b INT,
                CONSTRAINT pk_t PRIMARY KEY (a),
                CONSTRAINT fk_t_b FOREIGN KEY (b) REFERENCES other(id)
            );
        "#;

        let schema = parse_sql(sql).unwrap();
        let table = &schema.tables[0];
        assert!(table.column("a").unwrap().primary_key);
        assert_eq!(
            table.column("b").unwrap().foreign_key.as_deref(),
            Some("other(id)")
        );
    }

    #[test]
    fn test_parse_alter_table_foreign_key() {
        let sql = r#"
            CREATE TABLE users (id INT PRIMARY KEY);
            CREATE TABLE orders (id INT PRIMARY KEY, user_id INT);
            ALTER TABLE orders ADD CONSTRAINT fk_orders_user_id
                FOREIGN KEY (user_id) REFERENCES users(id);
        "#;

        let schema = parse_sql(sql).unwrap();
        let fk = schema.tables[1].column("user_id").unwrap().foreign_key.as_deref();
        assert_eq!(fk, Some("users(id)"));
    }

    #[test]
    fn test_parse_defaults() {
        let sql = r#"
            CREATE TABLE posts (
                id INT PRIMARY KEY,
                status VARCHAR(20) DEFAULT 'draft',
                score DECIMAL(10,2) DEFAULT 0,
                created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
                updated_at TIMESTAMP DEFAULT NOW()
            );
        "#;

        let schema = parse_sql(sql).unwrap();
        let table = &schema.tables[0];
        assert_eq!(
            table.column("status").unwrap().default_value.as_deref(),
            Some("'draft'")
        );
        assert_eq!(table.column("score").unwrap().typ, "DECIMAL(10,2)");
        assert_eq!(
            table.column("score").unwrap().default_value.as_deref(),
            Some("0")
        );
        assert_eq!(
            table.column("created_at").unwrap().default_value.as_deref(),
            Some("CURRENT_TIMESTAMP")
        );
        assert_eq!(
            table.column("updated_at").unwrap().default_value.as_deref(),
            Some("NOW()")
        );
    }

    #[test]
    fn test_parse_referential_actions_accepted() {
        let sql = r#"
            CREATE TABLE users (id INT PRIMARY KEY);
            CREATE TABLE orders (
                id INT PRIMARY KEY,
                user_id INT REFERENCES users(id) ON DELETE CASCADE ON UPDATE SET NULL
            );
        "#;

        let schema = parse_sql(sql).unwrap();
        let fk = schema.tables[1].column("user_id").unwrap().foreign_key.as_deref();
        assert_eq!(fk, Some("users(id)"));
    }

    #[test]
    fn test_semicolon_inside_parens_is_not_a_boundary() {
        // A stray `;` inside parentheses must not split the statement
        let sql = "CREATE TABLE t (id INT DEFAULT (1));\nCREATE TABLE u (id INT);";
        let schema = parse_sql(sql).unwrap();
        assert_eq!(schema.tables.len(), 2);
    }

    #[test]
    fn test_unterminated_statement() {
        let sql = "CREATE TABLE t (id INT";
        let err = parse_sql(sql).unwrap_err();
        assert!(matches!(err, ParseError::Unterminated { index: 0 }));
    }

    #[test]
    fn test_unsupported_statement_fails_with_index() {
        let sql = "CREATE TABLE t (id INT); DROP TABLE t;";
        let err = parse_sql(sql).unwrap_err();
        assert!(matches!(err, ParseError::Unsupported { index: 1 }));
    }

    #[test]
    fn test_unknown_modifier_fails_fast() {
        let sql = "CREATE TABLE t (id INT FROBNICATE);";
        let err = parse_sql(sql).unwrap_err();
        assert!(matches!(err, ParseError::MalformedColumn { .. }));
    }

    #[test]
    fn test_constraint_on_unknown_column_fails() {
        let sql = "CREATE TABLE t (id INT, PRIMARY KEY (missing));";
        let err = parse_sql(sql).unwrap_err();
        assert!(matches!(err, ParseError::UnknownColumn { .. }));
    }

    #[test]
    fn test_identifier_case_preserved() {
        let sql = r#"CREATE TABLE Accounts ("UserId" INT);"#;
        let schema = parse_sql(sql).unwrap();
        assert_eq!(schema.tables[0].name, "Accounts");
        assert_eq!(schema.tables[0].columns[0].name, "UserId");
    }

    #[test]
    fn test_empty_input_is_empty_schema() {
        let schema = parse_sql("").unwrap();
        assert!(schema.tables.is_empty());
    }
}
