//! Human-readable rendering of parsed scripts

use std::collections::BTreeMap;
use std::fmt;

use crate::model::{Ddl, StatementKind};

/// Render one statement per line. Comments are left out unless
/// `include_comments` is set.
pub fn render_script(ddl: &Ddl, include_comments: bool) -> String {
    let mut out = String::new();
    for statement in ddl.iter() {
        if statement.is_comment() && !include_comments {
            continue;
        }
        out.push_str(&statement.to_string());
        out.push('\n');
    }
    out
}

/// Number of statements per kind in one script
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub counts: BTreeMap<StatementKind, usize>,
}

impl Summary {
    pub fn of(ddl: &Ddl) -> Self {
        let mut counts = BTreeMap::new();
        for statement in ddl.iter() {
            *counts.entry(statement.kind()).or_insert(0) += 1;
        }
        Self { counts }
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, kind: StatementKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} statements", self.total())?;
        if self.counts.is_empty() {
            return Ok(());
        }
        let parts: Vec<String> = self
            .counts
            .iter()
            .map(|(kind, count)| format!("{}={}", kind, count))
            .collect();
        write!(f, " ({})", parts.join(", "))
    }
}
