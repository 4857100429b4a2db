//! Common utilities for temporal statement generation

use serde::{Deserialize, Serialize};

/// Identifier quoting convention of the target store.
///
/// Every identifier is always quoted, and the closing delimiter is doubled
/// inside the name so a table name can never end the quoted identifier early.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierQuoting {
    /// `[name]`, SQL Server style
    #[default]
    SquareBracket,
    /// `"name"`, ANSI style
    DoubleQuote,
    /// `` `name` ``, MySQL / ClickHouse style
    Backtick,
}

impl IdentifierQuoting {
    fn delimiters(self) -> (char, char) {
        match self {
            IdentifierQuoting::SquareBracket => ('[', ']'),
            IdentifierQuoting::DoubleQuote => ('"', '"'),
            IdentifierQuoting::Backtick => ('`', '`'),
        }
    }
}

/// Quote a single identifier (schema or table name).
///
/// # Examples
/// ```
/// use temporal_sql::temporal_query_generator::{quote_identifier, IdentifierQuoting};
/// assert_eq!(quote_identifier("Employee", IdentifierQuoting::SquareBracket), "[Employee]");
/// assert_eq!(quote_identifier("odd]name", IdentifierQuoting::SquareBracket), "[odd]]name]");
/// assert_eq!(quote_identifier("say \"hi\"", IdentifierQuoting::DoubleQuote), "\"say \"\"hi\"\"\"");
/// ```
pub fn quote_identifier(name: &str, quoting: IdentifierQuoting) -> String {
    let (open, close) = quoting.delimiters();
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push(open);
    for ch in name.chars() {
        if ch == close {
            quoted.push(close);
        }
        quoted.push(ch);
    }
    quoted.push(close);
    quoted
}

/// Format a qualified table reference: schema.table, both parts quoted
///
/// # Examples
/// ```
/// use temporal_sql::temporal_query_generator::{qualified_table, IdentifierQuoting};
/// assert_eq!(qualified_table("dbo", "Employee", IdentifierQuoting::SquareBracket), "[dbo].[Employee]");
/// ```
pub fn qualified_table(schema: &str, table: &str, quoting: IdentifierQuoting) -> String {
    format!(
        "{}.{}",
        quote_identifier(schema, quoting),
        quote_identifier(table, quoting)
    )
}

/// Token used for positional parameters in the statement template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    /// `?` for every parameter (ODBC / JDBC)
    #[default]
    QuestionMark,
    /// `@p0`, `@p1`, ... (`sp_executesql`)
    AtName,
    /// `$1`, `$2`, ... (PostgreSQL wire protocol)
    Dollar,
}

impl PlaceholderStyle {
    /// Placeholder for the parameter at zero-based `index`
    pub fn placeholder(self, index: usize) -> String {
        match self {
            PlaceholderStyle::QuestionMark => "?".to_string(),
            PlaceholderStyle::AtName => format!("@p{}", index),
            PlaceholderStyle::Dollar => format!("${}", index + 1),
        }
    }
}
