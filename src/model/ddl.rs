//! Ordered sequence of recognized statements

use std::ops::Index;

use super::statement::Statement;

/// Statements recognized from one script, in source order.
///
/// Comments are kept; [`Ddl::structural`] filters them out for consumers that
/// only care about the schema statements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ddl {
    statements: Vec<Statement>,
}

impl Ddl {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a complete script. See [`crate::parser::parse_ddl`].
    pub fn parse(text: &str) -> Result<Self, crate::error::ParseError> {
        crate::parser::parse_ddl(text)
    }

    /// Number of recognized statements, comments included.
    #[inline]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Statement> {
        self.statements.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// All statements except comments.
    pub fn structural(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter().filter(|stmt| !stmt.is_comment())
    }

    pub(crate) fn push(&mut self, statement: Statement) {
        self.statements.push(statement);
    }
}

impl From<Vec<Statement>> for Ddl {
    fn from(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

impl Index<usize> for Ddl {
    type Output = Statement;

    fn index(&self, index: usize) -> &Statement {
        &self.statements[index]
    }
}

impl<'a> IntoIterator for &'a Ddl {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
