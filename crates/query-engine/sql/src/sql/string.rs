//! Type definitions of a low-level SQL string representation.

use super::ast::Value;

/// SQL text with `$n` placeholders, and the values bound to them in order.
#[derive(Debug, Clone, PartialEq)]
pub struct SQL {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Default for SQL {
    fn default() -> Self {
        Self::new()
    }
}

impl SQL {
    pub fn new() -> SQL {
        SQL {
            sql: String::new(),
            params: vec![],
        }
    }

    pub fn append_syntax(&mut self, sql: &str) {
        self.sql.push_str(sql);
    }

    /// Append a double-quoted identifier, doubling any embedded quote.
    pub fn append_identifier(&mut self, identifier: &str) {
        self.sql.push('"');
        self.sql.push_str(&identifier.replace('"', "\"\""));
        self.sql.push('"');
    }

    pub fn append_param(&mut self, param: Value) {
        self.params.push(param);
        self.sql.push_str(&format!("${}", self.params.len()));
    }
}
