//! Statement records produced by the DDL recognizer

use std::collections::BTreeMap;
use std::fmt;

/// Key/value parameters attached to a CREATE statement (e.g. `BUFFERPOOL BP1`).
pub type Parameters = BTreeMap<String, String>;

/// A name optionally prefixed by a scope, e.g. `DB01.CUSTOMER`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QualifiedName {
    pub scope: Option<String>,
    pub name: String,
}

impl QualifiedName {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            scope: None,
            name: name.into(),
        }
    }

    pub fn scoped(scope: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            scope: Some(scope.into()),
            name: name.into(),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.scope {
            Some(scope) => write!(f, "{}.{}", scope, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// One recognized unit of a DDL script.
///
/// TABLE, INDEX and VIEW bodies, and CREATE kinds without a variant of their
/// own, are kept verbatim; their inner grammar is not decomposed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Comment {
        body: String,
    },
    CreateDatabase {
        name: QualifiedName,
        parameters: Parameters,
    },
    CreateTablespace {
        name: QualifiedName,
        database: QualifiedName,
        storage_group: String,
        parameters: Parameters,
    },
    CreateTable {
        raw_body: String,
    },
    CreateIndex {
        raw_body: String,
    },
    CreateView {
        raw_body: String,
    },
    CreateOther {
        raw_body: String,
    },
    Alter {
        raw_body: String,
    },
    Set {
        raw_body: String,
    },
}

/// Discriminant of [`Statement`], used for logging and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatementKind {
    Comment,
    Database,
    Tablespace,
    Table,
    Index,
    View,
    Create,
    Alter,
    Set,
}

impl StatementKind {
    pub const ALL: [StatementKind; 9] = [
        StatementKind::Comment,
        StatementKind::Database,
        StatementKind::Tablespace,
        StatementKind::Table,
        StatementKind::Index,
        StatementKind::View,
        StatementKind::Create,
        StatementKind::Alter,
        StatementKind::Set,
    ];

    /// Lowercase label used when rendering statements.
    pub fn label(self) -> &'static str {
        match self {
            StatementKind::Comment => "comment",
            StatementKind::Database => "database",
            StatementKind::Tablespace => "tablespace",
            StatementKind::Table => "table",
            StatementKind::Index => "index",
            StatementKind::View => "view",
            StatementKind::Create => "create",
            StatementKind::Alter => "alter",
            StatementKind::Set => "set",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Statement {
    pub fn kind(&self) -> StatementKind {
        match self {
            Statement::Comment { .. } => StatementKind::Comment,
            Statement::CreateDatabase { .. } => StatementKind::Database,
            Statement::CreateTablespace { .. } => StatementKind::Tablespace,
            Statement::CreateTable { .. } => StatementKind::Table,
            Statement::CreateIndex { .. } => StatementKind::Index,
            Statement::CreateView { .. } => StatementKind::View,
            Statement::CreateOther { .. } => StatementKind::Create,
            Statement::Alter { .. } => StatementKind::Alter,
            Statement::Set { .. } => StatementKind::Set,
        }
    }

    #[inline]
    pub fn is_comment(&self) -> bool {
        matches!(self, Statement::Comment { .. })
    }

    /// Name of the created object, for the variants that carry one.
    pub fn name(&self) -> Option<&QualifiedName> {
        match self {
            Statement::CreateDatabase { name, .. } | Statement::CreateTablespace { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }

    pub fn parameters(&self) -> Option<&Parameters> {
        match self {
            Statement::CreateDatabase { parameters, .. }
            | Statement::CreateTablespace { parameters, .. } => Some(parameters),
            _ => None,
        }
    }

    /// Verbatim text of comments and opaque statements.
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Statement::Comment { body } => Some(body),
            Statement::CreateTable { raw_body }
            | Statement::CreateIndex { raw_body }
            | Statement::CreateView { raw_body }
            | Statement::CreateOther { raw_body }
            | Statement::Alter { raw_body }
            | Statement::Set { raw_body } => Some(raw_body),
            Statement::CreateDatabase { .. } | Statement::CreateTablespace { .. } => None,
        }
    }

    /// `(variable, value)` of a `SET VARIABLE = VALUE` statement.
    ///
    /// Returns `None` for other statements and for SET bodies without an `=`
    /// or with an empty variable.
    pub fn set_assignment(&self) -> Option<(&str, &str)> {
        let Statement::Set { raw_body } = self else {
            return None;
        };
        let (variable, value) = raw_body.split_once('=')?;
        let variable = variable.trim();
        if variable.is_empty() {
            return None;
        }
        Some((variable, value.trim()))
    }
}

struct DisplayParameters<'a>(&'a Parameters);

impl fmt::Display for DisplayParameters<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}={}", key, value)?;
        }
        f.write_str("}")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = self.kind().label();
        match self {
            Statement::CreateDatabase { name, parameters } => {
                write!(f, "{}({}){}", label, name, DisplayParameters(parameters))
            }
            Statement::CreateTablespace {
                name,
                database,
                storage_group,
                parameters,
            } => write!(
                f,
                "{}({} in {} using {}){}",
                label,
                name,
                database,
                storage_group,
                DisplayParameters(parameters)
            ),
            Statement::Comment { body: raw_body }
            | Statement::CreateTable { raw_body }
            | Statement::CreateIndex { raw_body }
            | Statement::CreateView { raw_body }
            | Statement::CreateOther { raw_body }
            | Statement::Alter { raw_body }
            | Statement::Set { raw_body } => write!(f, "{}({})", label, raw_body),
        }
    }
}
